//! Round orchestration: the two-phase state machine and its driver.
mod phase;
mod table;
mod verdict;

pub use phase::*;
pub use table::*;
pub use verdict::*;
