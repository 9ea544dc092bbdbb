use crate::games::Variant;
use crate::rules::Call;

/// Anything that can put forward a choice for a round.
///
/// The table calls this once per seat per round and never reuses a
/// previous round's answer. An error means no further choice can be
/// obtained and ends the game.
pub trait Player {
    fn choose<V>(&mut self, variant: &V) -> anyhow::Result<Call<V::Choice>>
    where
        V: Variant;
}
