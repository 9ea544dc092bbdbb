use super::Outcome;
use rand::Rng;
use rand::distr::Distribution;
use rand::distr::StandardUniform;

/// A janken hand, encoded by the digit the console shows for it.
///
/// The encoding makes dominance cyclic: `a` beats `b` exactly when
/// `b` sits one step after `a` modulo 3, so Rock beats Scissors,
/// Scissors beats Paper and Paper beats Rock.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Hand {
    Rock = 0,
    Scissors = 1,
    Paper = 2,
}

impl Hand {
    pub const MAX: Self = Hand::Paper;
    pub const MIN: Self = Hand::Rock;

    pub const fn all() -> [Self; 3] {
        [Self::Rock, Self::Scissors, Self::Paper]
    }
    pub fn beats(&self, other: &Self) -> bool {
        (3 + u8::from(*other) - u8::from(*self)) % 3 == 1
    }
    /// Compares from the perspective of `self` as the player.
    pub fn versus(&self, other: &Self) -> Outcome {
        if self == other {
            Outcome::Tie
        } else if self.beats(other) {
            Outcome::PlayerWins
        } else {
            Outcome::OpponentWins
        }
    }
    pub fn label(&self) -> &'static str {
        match self {
            Hand::Rock => "グー",
            Hand::Scissors => "チョキ",
            Hand::Paper => "パー",
        }
    }
}

impl From<u8> for Hand {
    fn from(n: u8) -> Hand {
        match n {
            0 => Hand::Rock,
            1 => Hand::Scissors,
            2 => Hand::Paper,
            _ => panic!("Invalid hand"),
        }
    }
}
impl From<Hand> for u8 {
    fn from(h: Hand) -> u8 {
        h as u8
    }
}

/// Uniform over the three hands. Never abstains.
impl Distribution<Hand> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Hand {
        Hand::from(rng.random_range(0..3u8))
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
