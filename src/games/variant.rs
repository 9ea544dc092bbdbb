use crate::rules::Call;
use crate::rules::Outcome;
use crate::rules::Seat;
use rand::Rng;
use std::fmt::Display;

/// Capabilities one game mode exposes to the table and the players.
///
/// Implementations are pure: they describe, generate and judge, but never
/// read or write the console themselves.
pub trait Variant {
    type Choice: Copy + Eq + Display;

    /// Short name, used as the input prompt.
    fn title(&self) -> &'static str;
    /// Labels in console-digit order, including any non-choice entries.
    fn menu(&self) -> Vec<&'static str>;
    /// Interpret one console line, `None` when it is not acceptable.
    fn parse(&self, line: &str) -> Option<Call<Self::Choice>>;
    /// Uniformly random choice for a computer player.
    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Self::Choice;
    /// Decide the round from both seats' choices.
    fn judge(&self, you: Self::Choice, rival: Self::Choice) -> Outcome;
    /// Opening line for the given zero-based attempt of this round.
    fn describe_start(&self, attempt: usize) -> String;
    /// Called out once both choices are in.
    fn shout(&self, attempt: usize) -> &'static str;

    /// The menu as `0(label) 1(label) ...`.
    fn describe_menu(&self) -> String {
        self.menu()
            .iter()
            .enumerate()
            .map(|(i, label)| format!("{}({}) ", i, label))
            .collect()
    }
    /// Both seats' choices framed by rules.
    fn describe_result(&self, you: Self::Choice, rival: Self::Choice) -> String {
        format!(
            "{rule}\n{}\t : {}\n{}\t : {}\n{rule}",
            Seat::You,
            you,
            Seat::Rival,
            rival,
            rule = crate::RULE,
        )
    }
}
