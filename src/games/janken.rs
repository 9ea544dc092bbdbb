use super::Variant;
use crate::rules::Call;
use crate::rules::Hand;
use crate::rules::Outcome;
use rand::Rng;

/// Rock, scissors, paper. The human may also abstain.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Janken;

impl Variant for Janken {
    type Choice = Hand;

    fn title(&self) -> &'static str {
        "じゃんけん"
    }
    fn menu(&self) -> Vec<&'static str> {
        Hand::all()
            .iter()
            .map(Hand::label)
            .chain(std::iter::once(crate::ABSTAIN_LABEL))
            .collect()
    }
    fn parse(&self, line: &str) -> Option<Call<Hand>> {
        Call::<Hand>::try_from(line).ok()
    }
    fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Hand {
        rng.random()
    }
    fn judge(&self, you: Hand, rival: Hand) -> Outcome {
        you.versus(&rival)
    }
    fn describe_start(&self, attempt: usize) -> String {
        match attempt {
            0 => String::from("じゃんけん..."),
            _ => String::from("あいこで..."),
        }
    }
    fn shout(&self, attempt: usize) -> &'static str {
        match attempt {
            0 => "ホイ",
            _ => "ショ",
        }
    }
}
