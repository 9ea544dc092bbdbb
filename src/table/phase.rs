use crate::rules::Outcome;
use crate::rules::Seat;

/// Where the match stands between rounds.
///
/// ```text
/// Janken ──tie──▶ Janken
///   │ decisive
///   ▼
/// Acchimuite ──undetermined──▶ Acchimuite
///   │ decisive
///   ▼
/// Done
/// ```
/// Abstaining during janken jumps straight to `Abstained`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Janken { attempt: usize },
    Acchimuite { leader: Seat, attempt: usize },
    Done(Seat),
    Abstained,
}

impl Default for Phase {
    fn default() -> Self {
        Self::Janken { attempt: 0 }
    }
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done(_) | Self::Abstained)
    }
    /// Seats currently holding winning status.
    pub fn winners(&self) -> Vec<Seat> {
        match self {
            Self::Acchimuite { leader, .. } => vec![*leader],
            Self::Done(seat) => vec![*seat],
            Self::Janken { .. } | Self::Abstained => vec![],
        }
    }
    /// Transition after a judged janken round.
    pub fn after_janken(attempt: usize, outcome: Outcome) -> Self {
        match outcome.winner() {
            Some(leader) => Self::Acchimuite { leader, attempt: 0 },
            None => Self::Janken {
                attempt: attempt + 1,
            },
        }
    }
    /// Transition after a judged acchi-muite-hoi round.
    /// A decisive round confirms the leader regardless of the outcome's side.
    pub fn after_acchimuite(leader: Seat, attempt: usize, outcome: Outcome) -> Self {
        match outcome.is_decisive() {
            true => Self::Done(leader),
            false => Self::Acchimuite {
                leader,
                attempt: attempt + 1,
            },
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Janken { attempt } => write!(f, "janken #{}", attempt),
            Self::Acchimuite { leader, attempt } => {
                write!(f, "acchimuite #{} led by {}", attempt, leader)
            }
            Self::Done(seat) => write!(f, "done ({})", seat),
            Self::Abstained => write!(f, "abstained"),
        }
    }
}
