//! Integration tests for the dd CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn duel_dice() -> Command {
    Command::cargo_bin("duel-dice").unwrap()
}

// ---------------------------------------------------------------------------
// rules
// ---------------------------------------------------------------------------

#[test]
fn rules_explains_game_and_strategy() {
    duel_dice()
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("tie-breaker"))
        .stdout(predicate::str::contains("It stands on 25 or more"))
        .stdout(predicate::str::contains("far behind (< -20): 15"));
}

// ---------------------------------------------------------------------------
// simulate
// ---------------------------------------------------------------------------

#[test]
fn simulate_prints_summary_table() {
    duel_dice()
        .args(["simulate", "--games", "20", "--seed", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Autopilot (human seat)"))
        .stdout(predicate::str::contains("Computer"))
        .stdout(predicate::str::contains("Tie-breakers:"));
}

#[test]
fn simulate_lists_each_game() {
    duel_dice()
        .args(["simulate", "--games", "3", "--each"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Game    1:"))
        .stdout(predicate::str::contains("Game    3:"));
}

#[test]
fn simulate_is_deterministic_for_a_seed() {
    let run = || {
        duel_dice()
            .args(["simulate", "--games", "10", "--seed", "99"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn simulate_rejects_zero_target() {
    duel_dice()
        .args(["simulate", "--target", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid target score"));
}

#[test]
fn simulate_rejects_zero_games() {
    duel_dice()
        .args(["simulate", "--games", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--games must be at least 1"));
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_roll_and_bank() {
    duel_dice()
        .args(["play", "--seed", "7"])
        .write_stdin("roll\nbank\nstatus\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Roll 1/3: "))
        .stdout(predicate::str::contains("Computer roll 1: "))
        .stdout(predicate::str::contains("Game 1 | Round 2 | Target 101"))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn play_reports_invalid_moves_and_continues() {
    duel_dice()
        .args(["play", "--seed", "1"])
        .write_stdin("hold 1\nbank\ndance\nroll\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("only hold dice between rolls"))
        .stdout(predicate::str::contains("roll before banking"))
        .stdout(predicate::str::contains("unknown command: dance"))
        .stdout(predicate::str::contains("Roll 1/3: "));
}

#[test]
fn play_quit_with_trailing_words_stops_reading() {
    duel_dice()
        .args(["play", "--seed", "4"])
        .write_stdin("quit now\nroll\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye!"))
        .stdout(predicate::str::contains("Roll 1/3").not());
}

#[test]
fn play_ends_on_eof() {
    duel_dice()
        .args(["play", "--seed", "3", "--target", "20"])
        .write_stdin("roll\n")
        .assert()
        .success();
}

#[test]
fn play_small_target_finishes_game() {
    // Every bank scores at least 5, so target 5 ends the first round.
    duel_dice()
        .args(["play", "--seed", "11", "--target", "5"])
        .write_stdin("roll\nbank\nroll\nroll\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("*** YOU").or(predicate::str::contains("Tie-breaker")));
}

#[test]
fn play_writes_journal() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("journal.md");
    duel_dice()
        .args(["play", "--seed", "5", "--journal"])
        .arg(&path)
        .write_stdin("roll\nhold 1 2\nroll\nbank\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Journal written to"));

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# Duel Dice Journal"));
    assert!(content.contains("## Game 1"));
    assert!(content.contains("You held die 1"));
    assert!(content.contains("computer rolled"));
}

#[test]
fn play_exports_json() {
    duel_dice()
        .args(["play", "--seed", "5"])
        .write_stdin("roll\nbank\nexport json\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"HumanRoll\""))
        .stdout(predicate::str::contains("\"ComputerRoll\""));
}

#[test]
fn play_rejects_zero_target() {
    duel_dice()
        .args(["play", "--target", "0"])
        .write_stdin("quit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid target score"));
}
