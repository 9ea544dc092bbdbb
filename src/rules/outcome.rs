use super::Seat;

/// What a single round decided. Exactly one holds per round.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Outcome {
    PlayerWins,
    OpponentWins,
    /// Equal hands. Only the hand game ties.
    Tie,
    /// Equal directions. Only the direction game is undetermined.
    Undetermined,
}

impl Outcome {
    pub fn is_decisive(&self) -> bool {
        matches!(self, Self::PlayerWins | Self::OpponentWins)
    }
    pub fn winner(&self) -> Option<Seat> {
        match self {
            Self::PlayerWins => Some(Seat::You),
            Self::OpponentWins => Some(Seat::Rival),
            Self::Tie | Self::Undetermined => None,
        }
    }
    /// The same round seen from the other seat.
    pub fn flip(&self) -> Self {
        match self {
            Self::PlayerWins => Self::OpponentWins,
            Self::OpponentWins => Self::PlayerWins,
            other => *other,
        }
    }
}

impl From<Seat> for Outcome {
    fn from(seat: Seat) -> Self {
        match seat {
            Seat::You => Self::PlayerWins,
            Seat::Rival => Self::OpponentWins,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::PlayerWins => write!(f, "{} wins", Seat::You),
            Self::OpponentWins => write!(f, "{} wins", Seat::Rival),
            Self::Tie => write!(f, "tie"),
            Self::Undetermined => write!(f, "undetermined"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_wins_are_decisive() {
        assert!(Outcome::PlayerWins.is_decisive());
        assert!(Outcome::OpponentWins.is_decisive());
        assert!(!Outcome::Tie.is_decisive());
        assert!(!Outcome::Undetermined.is_decisive());
        assert_eq!(Outcome::Tie.winner(), None);
    }

    #[test]
    fn seat_isomorphism() {
        for seat in Seat::all() {
            assert_eq!(Outcome::from(seat).winner(), Some(seat));
        }
    }
}
