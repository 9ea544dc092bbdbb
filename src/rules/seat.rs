/// Identity of a player at the table.
///
/// `You` is always the human side and `Rival` the computer side, so
/// [`Outcome::PlayerWins`](super::Outcome::PlayerWins) names `You`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Seat {
    You = 0,
    Rival = 1,
}

impl Seat {
    pub const fn all() -> [Self; crate::N] {
        [Self::You, Self::Rival]
    }
    /// The seat across the table.
    pub fn other(&self) -> Self {
        match self {
            Self::You => Self::Rival,
            Self::Rival => Self::You,
        }
    }
    pub fn label(&self) -> &'static str {
        match self {
            Self::You => "あなた",
            Self::Rival => "相手",
        }
    }
}

impl From<Seat> for usize {
    fn from(seat: Seat) -> usize {
        seat as usize
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
