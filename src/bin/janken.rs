//! Janken Binary
//!
//! Play janken, then acchi-muite-hoi, against a random rival.
//!
//! Options: --seed, --plain, -v

use clap::Parser;
use janken::players::Human;
use janken::players::Lines;
use janken::players::Player;
use janken::players::Robot;
use janken::players::Terminal;
use janken::table::Table;
use janken::table::Verdict;
use std::io::IsTerminal;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, help = "Seed the rival for a reproducible game")]
    seed: Option<u64>,
    #[arg(long, help = "Read plain lines from stdin and disable colors")]
    plain: bool,
    #[arg(short, long, action = clap::ArgAction::Count, help = "Log more (-v info, -vv debug)")]
    verbose: u8,
}

impl Args {
    fn level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        }
    }
    fn plain(&self) -> bool {
        self.plain || !std::io::stdin().is_terminal()
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    janken::log(args.level());
    if args.plain() {
        colored::control::set_override(false);
    }
    let verdict = match (args.plain(), args.seed) {
        (true, Some(seed)) => play(Human::new(Lines::stdio()), Robot::seeded(seed)),
        (true, None) => play(Human::new(Lines::stdio()), Robot::new()),
        (false, Some(seed)) => play(Human::new(Terminal), Robot::seeded(seed)),
        (false, None) => play(Human::new(Terminal), Robot::new()),
    };
    match verdict {
        Ok(Verdict::Abstained) => Ok(()),
        Ok(Verdict::Winner(_)) => Ok(()),
        Err(e) => {
            log::error!("{:#}", e);
            Err(e)
        }
    }
}

fn play<Y, R>(you: Y, rival: R) -> anyhow::Result<Verdict>
where
    Y: Player,
    R: Player,
{
    Table::new(you, rival, std::io::stdout()).run()
}
