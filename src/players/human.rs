use super::Console;
use super::Player;
use crate::games::Variant;
use crate::rules::Call;

/// Human player answering at a console.
#[derive(Debug)]
pub struct Human<C> {
    console: C,
}

impl<C> Human<C> {
    pub fn new(console: C) -> Self {
        Self { console }
    }
    pub fn console(&self) -> &C {
        &self.console
    }
}

impl<C> Player for Human<C>
where
    C: Console,
{
    fn choose<V>(&mut self, variant: &V) -> anyhow::Result<Call<V::Choice>>
    where
        V: Variant,
    {
        let accept = |line: &str| variant.parse(line).is_some();
        let line = self
            .console
            .ask(variant.title(), &accept, crate::COMPLAINT)?;
        variant
            .parse(&line)
            .ok_or_else(|| anyhow::anyhow!("console accepted invalid line {:?}", line))
    }
}
