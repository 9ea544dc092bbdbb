//! Choice domains and the outcome of a single round.
//!
//! - [`Hand`]: rock, scissors, paper with cyclic dominance
//! - [`Direction`]: the four ways to point or turn
//! - [`Call`]: a choice, or declining to play
//! - [`Seat`]: who is playing
//! - [`Outcome`]: what a round decided
mod call;
mod direction;
mod hand;
mod outcome;
mod seat;

pub use call::*;
pub use direction::*;
pub use hand::*;
pub use outcome::*;
pub use seat::*;

/// Reads a console line as a single digit no greater than `max`.
/// Only the line terminator is stripped; any other character rejects the line.
pub fn digit(line: &str, max: u8) -> Option<u8> {
    let line = line.strip_suffix('\n').unwrap_or(line);
    let line = line.strip_suffix('\r').unwrap_or(line);
    match line.as_bytes() {
        [b @ b'0'..=b'9'] if b - b'0' <= max => Some(b - b'0'),
        _ => None,
    }
}
