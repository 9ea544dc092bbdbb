use janken::games::Janken;
use janken::games::Variant;
use janken::players::Human;
use janken::players::Lines;
use janken::players::Robot;
use janken::rules::Hand;
use janken::rules::Outcome;
use janken::rules::Seat;
use janken::table::Phase;
use janken::table::Table;
use janken::table::Verdict;
use std::io::Cursor;

fn human(script: &str) -> Human<Lines<Cursor<String>, Vec<u8>>> {
    Human::new(Lines::new(Cursor::new(script.to_string()), Vec::new()))
}

#[test]
fn hand_game_truth_table() {
    use Hand::*;
    use Outcome::*;
    let table = [
        (Rock, Rock, Tie),
        (Rock, Scissors, PlayerWins),
        (Rock, Paper, OpponentWins),
        (Scissors, Rock, OpponentWins),
        (Scissors, Scissors, Tie),
        (Scissors, Paper, PlayerWins),
        (Paper, Rock, PlayerWins),
        (Paper, Scissors, OpponentWins),
        (Paper, Paper, Tie),
    ];
    for (you, rival, outcome) in table {
        assert_eq!(Janken.judge(you, rival), outcome, "{} vs {}", you, rival);
    }
}

#[test]
fn full_game_through_invalid_input() {
    colored::control::set_override(false);
    let you = human("rock\n\n4\n0\n00\n0\n");
    let rival = human("1\n1\n");
    let mut table = Table::new(you, rival, Vec::new());
    assert_eq!(table.run().unwrap(), Verdict::Winner(Seat::You));
    let transcript = String::from_utf8(table.output().clone()).unwrap();
    assert!(transcript.ends_with("勝者: あなた\n"));
    assert!(transcript.contains("あなた\t : グー"));
    assert!(transcript.contains("相手\t : チョキ"));
    assert!(transcript.contains("あなた\t : 上"));
    assert!(transcript.contains("相手\t : 下"));
}

#[test]
fn abstain_after_ties() {
    let you = human("1\n2\n3\n");
    let rival = human("1\n2\n0\n");
    let mut table = Table::new(you, rival, Vec::new());
    assert_eq!(table.run().unwrap(), Verdict::Abstained);
    assert_eq!(table.phase(), Phase::Abstained);
}

#[test]
fn human_against_seeded_robot_finishes() {
    let script = "0\n".repeat(256);
    let mut table = Table::new(human(&script), Robot::seeded(2024), Vec::new());
    let verdict = table.run().unwrap();
    assert!(verdict.winner().is_some());
    assert_eq!(table.phase().winners(), vec![verdict.winner().unwrap()]);
}

#[test]
fn seeded_games_replay_identically() {
    let play = || {
        let mut table = Table::new(Robot::seeded(5), Robot::seeded(6), Vec::new());
        let verdict = table.run().unwrap();
        (verdict, table.output().clone())
    };
    assert_eq!(play(), play());
}
