use anyhow::Context;
use colored::Colorize;
use std::io::BufRead;
use std::io::Write;

/// Source of validated console lines.
///
/// Implementations re-prompt with `complaint` for as long as `accept`
/// rejects the line. Only a closed or broken stream is an error.
pub trait Console {
    fn ask(
        &mut self,
        prompt: &str,
        accept: &dyn Fn(&str) -> bool,
        complaint: &str,
    ) -> anyhow::Result<String>;
}

/// Plain line-oriented console over any reader and writer.
#[derive(Debug)]
pub struct Lines<R, W> {
    input: R,
    output: W,
}

impl<R, W> Lines<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
    pub fn output(&self) -> &W {
        &self.output
    }
    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl Lines<std::io::StdinLock<'static>, std::io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R, W> Console for Lines<R, W>
where
    R: BufRead,
    W: Write,
{
    fn ask(
        &mut self,
        prompt: &str,
        accept: &dyn Fn(&str) -> bool,
        complaint: &str,
    ) -> anyhow::Result<String> {
        loop {
            write!(self.output, "{} > ", prompt)?;
            self.output.flush()?;
            let ref mut line = String::new();
            let n = self
                .input
                .read_line(line)
                .context("read from console")?;
            if n == 0 {
                anyhow::bail!("console closed while awaiting {}", prompt);
            }
            let line = line.trim_end_matches(['\n', '\r']);
            if accept(line) {
                return Ok(line.to_string());
            }
            log::debug!("[console] rejected {:?}", line);
            writeln!(self.output, "{}", complaint.yellow())?;
        }
    }
}
