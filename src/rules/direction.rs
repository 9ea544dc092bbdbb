use rand::Rng;
use rand::distr::Distribution;
use rand::distr::StandardUniform;

/// Where a finger points or a face turns in acchi-muite-hoi.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Direction {
    Up = 0,
    Down = 1,
    Left = 2,
    Right = 3,
}

impl Direction {
    pub const MAX: Self = Direction::Right;
    pub const MIN: Self = Direction::Up;

    pub const fn all() -> [Self; 4] {
        [Self::Up, Self::Down, Self::Left, Self::Right]
    }
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Up => "上",
            Direction::Down => "下",
            Direction::Left => "左",
            Direction::Right => "右",
        }
    }
}

impl From<u8> for Direction {
    fn from(n: u8) -> Direction {
        match n {
            0 => Direction::Up,
            1 => Direction::Down,
            2 => Direction::Left,
            3 => Direction::Right,
            _ => panic!("Invalid direction"),
        }
    }
}
impl From<Direction> for u8 {
    fn from(d: Direction) -> u8 {
        d as u8
    }
}

impl Distribution<Direction> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Direction {
        Direction::from(rng.random_range(0..4u8))
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
