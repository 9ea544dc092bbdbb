//! The two games played at the table, behind one [`Variant`] interface.
//!
//! - [`Janken`] — rock, scissors, paper; ties replay
//! - [`Acchimuite`] — the janken winner points, the loser turns; equal
//!   directions replay, differing ones confirm the leader
mod acchimuite;
mod janken;
mod variant;

pub use acchimuite::*;
pub use janken::*;
pub use variant::*;
