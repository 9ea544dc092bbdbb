use super::Console;
use anyhow::Context;
use dialoguer::Input;

/// Interactive terminal console backed by `dialoguer`.
///
/// Validation happens inside the prompt, so a rejected line is cleared and
/// the complaint shown in place until an accepted line is entered.
#[derive(Debug, Default)]
pub struct Terminal;

impl Console for Terminal {
    fn ask(
        &mut self,
        prompt: &str,
        accept: &dyn Fn(&str) -> bool,
        complaint: &str,
    ) -> anyhow::Result<String> {
        Input::<String>::new()
            .with_prompt(prompt)
            .report(false)
            .allow_empty(true)
            .validate_with(|i: &String| -> Result<(), String> {
                match accept(i) {
                    true => Ok(()),
                    false => Err(String::from(complaint)),
                }
            })
            .interact_text()
            .context("read from terminal")
    }
}
