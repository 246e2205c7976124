use holdem_cli::commands::{PlayArgs, handle_play_command};
use holdem_engine::logger::HandRecord;
use serial_test::serial;
use std::io::Cursor;
use std::path::Path;

fn args(bank: &Path) -> PlayArgs {
    PlayArgs {
        bots: Some(1),
        hands: Some(1),
        seed: Some(42),
        bank_file: Some(bank.to_path_buf()),
        history: None,
        ai: "calling-station".to_string(),
    }
}

fn play(args: PlayArgs, input: &str) -> (bool, String, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let mut stdin = Cursor::new(input.as_bytes().to_vec());
    let ok = handle_play_command(args, &mut out, &mut err, &mut stdin).is_ok();
    (
        ok,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

#[test]
#[serial]
fn checking_down_finishes_the_hand() {
    let dir = tempfile::tempdir().unwrap();
    let (ok, out, _) = play(args(&dir.path().join("bank.txt")), &"c\n".repeat(20));
    assert!(ok);
    assert!(out.contains("Hand 1"));
    assert!(out.contains("-- Flop"));
    assert!(out.contains("-- River"));
    assert!(out.contains("Hands played: 1"));
}

#[test]
#[serial]
fn rejected_input_re_prompts() {
    let dir = tempfile::tempdir().unwrap();
    let (ok, out, err) = play(args(&dir.path().join("bank.txt")), "bogus\nr 0\nf\n");
    assert!(ok);
    assert!(err.contains("Unrecognized action 'bogus'"));
    assert!(err.contains("Invalid raise amount: 0"));
    assert!(out.contains("You: fold"));
    assert!(out.contains("Hands played: 1"));
}

#[test]
#[serial]
fn quitting_mid_hand_leaves_the_table() {
    let dir = tempfile::tempdir().unwrap();
    let bank = dir.path().join("bank.txt");
    let (ok, out, _) = play(args(&bank), "q\n");
    assert!(ok);
    assert!(out.contains("Leaving the table."));
    assert!(out.contains("Hands played: 0"));
    assert!(!bank.exists());
}

#[test]
#[serial]
fn folding_the_big_blind_costs_twenty() {
    let dir = tempfile::tempdir().unwrap();
    let (ok, out, _) = play(args(&dir.path().join("bank.txt")), "f\n");
    assert!(ok);
    assert!(out.contains("Bot 1 wins 40 (everyone folded)"));
    assert!(out.trim_end().ends_with("Bank: 1980"));
}

#[test]
#[serial]
fn stored_bank_is_used() {
    let dir = tempfile::tempdir().unwrap();
    let bank = dir.path().join("bank.txt");
    std::fs::write(&bank, "777\n").unwrap();
    let (ok, out, _) = play(args(&bank), "q\n");
    assert!(ok);
    assert!(out.contains("Bank: 777"));
}

#[test]
#[serial]
fn history_gets_one_line_per_hand() {
    let dir = tempfile::tempdir().unwrap();
    let history = dir.path().join("hands.jsonl");
    let a = PlayArgs {
        hands: Some(2),
        history: Some(history.clone()),
        ..args(&dir.path().join("bank.txt"))
    };
    let (ok, out, _) = play(a, "f\nf\n");
    assert!(ok);
    assert!(out.contains("Hands played: 2"));

    let text = std::fs::read_to_string(&history).unwrap();
    let records: Vec<HandRecord> = text
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].seed, Some(42));
    assert_eq!(records[1].hand_number, 2);
}
