use super::Variant;
use crate::rules::Call;
use crate::rules::Direction;
use crate::rules::Outcome;
use crate::rules::Seat;
use rand::Rng;

/// Acchi-muite-hoi, led by whoever won the janken.
///
/// The leader points, the other seat turns its face. Equal directions leave
/// the round undetermined. Differing directions confirm the leader; the
/// directions themselves never pick a different winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Acchimuite {
    leader: Seat,
}

impl Acchimuite {
    pub fn led_by(leader: Seat) -> Self {
        Self { leader }
    }
    pub fn leader(&self) -> Seat {
        self.leader
    }
    /// The seat that turns its face.
    pub fn follower(&self) -> Seat {
        self.leader.other()
    }
}

impl Variant for Acchimuite {
    type Choice = Direction;

    fn title(&self) -> &'static str {
        "あっち向いてホイ"
    }
    fn menu(&self) -> Vec<&'static str> {
        Direction::all().iter().map(Direction::label).collect()
    }
    fn parse(&self, line: &str) -> Option<Call<Direction>> {
        Call::<Direction>::try_from(line).ok()
    }
    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Direction {
        rng.random()
    }
    fn judge(&self, you: Direction, rival: Direction) -> Outcome {
        match you == rival {
            true => Outcome::Undetermined,
            false => Outcome::from(self.leader),
        }
    }
    fn describe_start(&self, _: usize) -> String {
        let role = match self.leader {
            Seat::You => "指の向きを指定してください",
            Seat::Rival => "顔の向きを指定してください",
        };
        format!("あっち向いて〜\t({})", role)
    }
    fn shout(&self, _: usize) -> &'static str {
        "ホイ"
    }
}
