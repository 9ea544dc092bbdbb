use super::Phase;
use super::Verdict;
use super::proclaim;
use crate::games::Acchimuite;
use crate::games::Janken;
use crate::games::Variant;
use crate::players::Player;
use crate::rules::Call;
use crate::rules::Outcome;
use crate::rules::Seat;
use colored::Colorize;
use std::io::Write;

/// Drives a match between two players, writing the transcript to `out`.
///
/// Owns every piece of mutable match state: both players, the phase and
/// the output sink. Choices live only for the round that asked for them.
#[derive(Debug)]
pub struct Table<Y, R, W> {
    you: Y,
    rival: R,
    out: W,
    phase: Phase,
}

impl<Y, R, W> Table<Y, R, W> {
    pub fn new(you: Y, rival: R, out: W) -> Self {
        Self {
            you,
            rival,
            out,
            phase: Phase::default(),
        }
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn output(&self) -> &W {
        &self.out
    }
}

impl<Y, R, W> Table<Y, R, W>
where
    Y: Player,
    R: Player,
    W: Write,
{
    /// Play rounds until someone wins or abstains.
    pub fn run(&mut self) -> anyhow::Result<Verdict> {
        loop {
            match self.phase {
                Phase::Done(seat) => {
                    writeln!(self.out, "{}", proclaim(&self.phase.winners()))?;
                    log::info!("[table] winner {}", seat);
                    return Ok(Verdict::Winner(seat));
                }
                Phase::Abstained => {
                    log::info!("[table] abstained, no winner");
                    return Ok(Verdict::Abstained);
                }
                _ => self.step().map(|_| ())?,
            }
        }
    }

    /// Play exactly one round and advance the phase.
    pub fn step(&mut self) -> anyhow::Result<Phase> {
        let next = match self.phase {
            Phase::Janken { attempt } => self.janken(attempt)?,
            Phase::Acchimuite { leader, attempt } => self.acchimuite(leader, attempt)?,
            terminal => terminal,
        };
        log::debug!("[table] {} -> {}", self.phase, next);
        self.phase = next;
        Ok(next)
    }

    fn janken(&mut self, attempt: usize) -> anyhow::Result<Phase> {
        let ref game = Janken;
        self.open(game, attempt)?;
        let you = self.you.choose(game)?;
        let rival = self.rival.choose(game)?;
        match (you, rival) {
            (Call::Play(you), Call::Play(rival)) => self
                .settle(game, attempt, you, rival)
                .map(|outcome| Phase::after_janken(attempt, outcome)),
            _ => Ok(Phase::Abstained),
        }
    }

    fn acchimuite(&mut self, leader: Seat, attempt: usize) -> anyhow::Result<Phase> {
        let ref game = Acchimuite::led_by(leader);
        self.open(game, attempt)?;
        let (you, rival) = match leader {
            Seat::You => {
                let finger = self.you.choose(game)?;
                let face = self.rival.choose(game)?;
                (finger, face)
            }
            Seat::Rival => {
                let finger = self.rival.choose(game)?;
                let face = self.you.choose(game)?;
                (face, finger)
            }
        };
        match (you, rival) {
            (Call::Play(you), Call::Play(rival)) => self
                .settle(game, attempt, you, rival)
                .map(|outcome| Phase::after_acchimuite(leader, attempt, outcome)),
            _ => {
                log::warn!("[table] abstain during {}", game.title());
                Ok(Phase::Abstained)
            }
        }
    }

    fn open<V>(&mut self, game: &V, attempt: usize) -> anyhow::Result<()>
    where
        V: Variant,
    {
        writeln!(self.out, "{}", game.describe_start(attempt))?;
        writeln!(self.out, "{}", game.describe_menu())?;
        Ok(())
    }

    fn settle<V>(
        &mut self,
        game: &V,
        attempt: usize,
        you: V::Choice,
        rival: V::Choice,
    ) -> anyhow::Result<Outcome>
    where
        V: Variant,
    {
        writeln!(self.out, "{}", game.shout(attempt).bold())?;
        writeln!(self.out, "{}", game.describe_result(you, rival))?;
        let outcome = game.judge(you, rival);
        log::debug!("[table] {} {} vs {}: {}", game.title(), you, rival, outcome);
        Ok(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::players::Human;
    use crate::players::Lines;
    use crate::players::Robot;
    use std::io::Cursor;
    use std::io::Sink;

    type Scripted = Human<Lines<Cursor<String>, Sink>>;

    fn script(lines: &[&str]) -> Scripted {
        let input = lines.iter().map(|l| format!("{}\n", l)).collect::<String>();
        Human::new(Lines::new(Cursor::new(input), std::io::sink()))
    }

    fn table(you: &[&str], rival: &[&str]) -> Table<Scripted, Scripted, Vec<u8>> {
        Table::new(script(you), script(rival), Vec::new())
    }

    fn transcript<Y, R>(table: &Table<Y, R, Vec<u8>>) -> String {
        String::from_utf8(table.output().clone()).unwrap()
    }

    #[test]
    fn rock_beats_scissors_and_leads() {
        let mut table = table(&["0"], &["1"]);
        assert_eq!(
            table.step().unwrap(),
            Phase::Acchimuite {
                leader: Seat::You,
                attempt: 0
            }
        );
    }

    #[test]
    fn rival_rock_leads() {
        let mut table = table(&["1"], &["0"]);
        assert_eq!(
            table.step().unwrap(),
            Phase::Acchimuite {
                leader: Seat::Rival,
                attempt: 0
            }
        );
    }

    #[test]
    fn tie_replays_janken() {
        let mut table = table(&["0", "2"], &["0", "1"]);
        assert_eq!(table.step().unwrap(), Phase::Janken { attempt: 1 });
        assert_eq!(
            table.step().unwrap(),
            Phase::Acchimuite {
                leader: Seat::Rival,
                attempt: 0
            }
        );
        let transcript = transcript(&table);
        assert!(transcript.contains("じゃんけん..."));
        assert!(transcript.contains("あいこで..."));
        assert!(transcript.contains("ショ"));
    }

    #[test]
    fn abstain_ends_without_winner() {
        let mut table = table(&["3"], &["0"]);
        assert_eq!(table.run().unwrap(), Verdict::Abstained);
        let transcript = transcript(&table);
        assert!(!transcript.contains(crate::WINNER_PREFIX));
        assert!(!transcript.contains(crate::RULE));
    }

    #[test]
    fn differing_directions_crown_janken_winner() {
        let mut table = table(&["0", "0"], &["1", "1"]);
        assert_eq!(table.run().unwrap(), Verdict::Winner(Seat::You));
        let transcript = transcript(&table);
        assert!(transcript.contains("指の向き"));
        assert!(transcript.contains("勝者: あなた"));
    }

    #[test]
    fn equal_directions_replay_with_same_leader() {
        let mut table = table(&["0", "0", "2"], &["1", "0", "3"]);
        table.step().unwrap();
        assert_eq!(
            table.step().unwrap(),
            Phase::Acchimuite {
                leader: Seat::You,
                attempt: 1
            }
        );
        assert_eq!(table.step().unwrap(), Phase::Done(Seat::You));
    }

    #[test]
    fn rival_can_win() {
        let mut table = table(&["1", "2"], &["0", "0"]);
        assert_eq!(table.run().unwrap(), Verdict::Winner(Seat::Rival));
        let transcript = transcript(&table);
        assert!(transcript.contains("顔の向き"));
        assert!(transcript.contains("勝者: 相手"));
    }

    #[test]
    fn closed_input_is_fatal() {
        let mut table = table(&["0"], &["0"]);
        assert!(table.run().is_err());
        assert_eq!(table.phase(), Phase::Janken { attempt: 1 });
    }

    #[test]
    fn terminal_phase_does_not_advance() {
        let mut table = table(&["3"], &["0"]);
        table.step().unwrap();
        assert_eq!(table.step().unwrap(), Phase::Abstained);
    }

    #[test]
    fn transitions_respect_decisiveness() {
        for seed in 0..64 {
            let you = Robot::seeded(seed);
            let rival = Robot::seeded(seed + 1000);
            let mut table = Table::new(you, rival, std::io::sink());
            for _ in 0..10_000 {
                let prev = table.phase();
                if prev.is_terminal() {
                    break;
                }
                let next = table.step().unwrap();
                match (prev, next) {
                    (Phase::Janken { attempt: a }, Phase::Janken { attempt: b }) => {
                        assert_eq!(b, a + 1)
                    }
                    (Phase::Janken { .. }, Phase::Acchimuite { attempt, .. }) => {
                        assert_eq!(attempt, 0)
                    }
                    (
                        Phase::Acchimuite { leader, attempt: a },
                        Phase::Acchimuite {
                            leader: same,
                            attempt: b,
                        },
                    ) => {
                        assert_eq!(leader, same);
                        assert_eq!(b, a + 1);
                    }
                    (Phase::Acchimuite { leader, .. }, Phase::Done(seat)) => {
                        assert_eq!(leader, seat)
                    }
                    (prev, next) => panic!("illegal transition {} -> {}", prev, next),
                }
            }
            assert!(matches!(table.run().unwrap(), Verdict::Winner(_)));
        }
    }
}
