use super::Player;
use crate::games::Variant;
use crate::rules::Call;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::rngs::ThreadRng;

/// Computer player that chooses uniformly at random and never abstains.
#[derive(Debug)]
pub struct Robot<R = ThreadRng> {
    rng: R,
}

impl Robot<ThreadRng> {
    pub fn new() -> Self {
        Self { rng: rand::rng() }
    }
}

impl Default for Robot<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl Robot<SmallRng> {
    /// Reproducible robot for a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl<R> Player for Robot<R>
where
    R: rand::Rng,
{
    fn choose<V>(&mut self, variant: &V) -> anyhow::Result<Call<V::Choice>>
    where
        V: Variant,
    {
        let choice = variant.generate(&mut self.rng);
        log::debug!("[robot] {} -> {}", variant.title(), choice);
        Ok(Call::Play(choice))
    }
}
