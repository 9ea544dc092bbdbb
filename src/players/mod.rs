//! Player implementations for the table.
//!
//! - [`Human`] — choices typed at a [`Console`]
//! - [`Robot`] — uniformly random choices
//!
//! Consoles:
//! - [`Lines`] — plain lines from any reader, used for pipes and tests
//! - [`Terminal`] — interactive prompt (requires `cli` feature)
mod console;
mod human;
mod player;
mod robot;
#[cfg(feature = "cli")]
mod terminal;

pub use console::*;
pub use human::*;
pub use player::*;
pub use robot::*;
#[cfg(feature = "cli")]
pub use terminal::*;
