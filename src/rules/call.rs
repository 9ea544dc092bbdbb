use super::Direction;
use super::Hand;
use super::digit;

/// What a player puts forward in one round.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Call<C> {
    Play(C),
    /// Decline to play. Ends the program without a winner.
    Abstain,
}

impl<C> Call<C> {
    pub fn choice(self) -> Option<C> {
        match self {
            Call::Play(c) => Some(c),
            Call::Abstain => None,
        }
    }
    pub fn is_abstain(&self) -> bool {
        matches!(self, Call::Abstain)
    }
}

/// Hand-game console line: `0`-`2` play a hand, `3` abstains.
impl TryFrom<&str> for Call<Hand> {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match digit(s, crate::ABSTAIN) {
            Some(crate::ABSTAIN) => Ok(Call::Abstain),
            Some(n) => Ok(Call::Play(Hand::from(n))),
            None => Err(format!("not a hand: {:?}", s)),
        }
    }
}

/// Direction-game console line: `0`-`3`. There is no way to abstain.
impl TryFrom<&str> for Call<Direction> {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        digit(s, u8::from(Direction::MAX))
            .map(Direction::from)
            .map(Call::Play)
            .ok_or_else(|| format!("not a direction: {:?}", s))
    }
}

impl<C> std::fmt::Display for Call<C>
where
    C: std::fmt::Display,
{
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Call::Play(c) => write!(f, "{}", c),
            Call::Abstain => write!(f, "{}", crate::ABSTAIN_LABEL),
        }
    }
}
