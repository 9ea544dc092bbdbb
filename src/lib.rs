//! Janken followed by acchi-muite-hoi, played at the terminal.
//!
//! The crate splits into a pure outcome engine ([`rules`], [`games`]) and an
//! imperative shell ([`players`], [`table`]) that collects choices and drives
//! the two phases until somebody wins.
pub mod games;
pub mod players;
pub mod rules;
pub mod table;

// ============================================================================
// TABLE PARAMETERS
// ============================================================================
/// Number of seats at the table.
pub const N: usize = 2;
/// Digit that declines to play during the hand game.
pub const ABSTAIN: u8 = 3;
/// Label shown for the abstain digit.
pub const ABSTAIN_LABEL: &str = "戦わない";

// ============================================================================
// CONSOLE TEXT
// ============================================================================
/// Shown whenever a line is not a single accepted digit.
pub const COMPLAINT: &str = "** 0,1,2,3のいずれかを指定してください **";
/// Frames the echo of both seats' choices.
pub const RULE: &str = const_format::str_repeat!("-----", 10);
/// Prefix of the final announcement.
pub const WINNER_PREFIX: &str = "勝者: ";
/// Announced when no seat holds sole winning status.
pub const WINNER_UNKNOWN: &str = "不明";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging on stderr so it stays out of the transcript.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    if simplelog::CombinedLogger::init(vec![term]).is_err() {
        eprintln!("logger already initialized");
    }
}
