use crate::rules::Seat;
use colored::Colorize;

/// How a match ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Winner(Seat),
    Abstained,
}

impl Verdict {
    pub fn winner(&self) -> Option<Seat> {
        match self {
            Self::Winner(seat) => Some(*seat),
            Self::Abstained => None,
        }
    }
}

/// Announcement line naming every seat with winning status.
pub fn proclaim(winners: &[Seat]) -> String {
    let names = match winners {
        [] => String::from(crate::WINNER_UNKNOWN),
        seats => seats
            .iter()
            .map(Seat::label)
            .collect::<Vec<_>>()
            .join(","),
    };
    format!("{}{}", crate::WINNER_PREFIX, names)
        .bold()
        .green()
        .to_string()
}
