//! Integration tests for the dicetray CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn dicetray() -> Command {
    let mut cmd = Command::cargo_bin("dicetray").unwrap();
    cmd.arg("--no-color");
    cmd
}

// ---------------------------------------------------------------------------
// roll
// ---------------------------------------------------------------------------

#[test]
fn roll_single_forced_value_is_replicated() {
    dicetray()
        .args(["roll", "d6", "-n", "4", "-f", "5"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Type: d6")
                .and(predicate::str::contains("5 + 5 + 5 + 5 = 20")),
        );
}

#[test]
fn roll_forced_with_modifier() {
    dicetray()
        .args(["roll", "d20", "-n", "3", "-m", "2", "-f", "4,11,9"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4 + 11 + 9 + 2 = 26"));
}

#[test]
fn roll_negative_modifier() {
    dicetray()
        .args(["roll", "d8", "-n", "2", "-m", "-3", "-f", "8,1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("8 + 1 - 3 = 6"));
}

#[test]
fn roll_single_die_has_no_total_suffix() {
    dicetray()
        .args(["roll", "d20", "-f", "17"])
        .assert()
        .success()
        .stdout(predicate::str::contains("17").and(predicate::str::contains("=").not()));
}

#[test]
fn roll_random_with_seed_is_reproducible() {
    let first = dicetray()
        .args(["roll", "d20", "-n", "5", "--seed", "7"])
        .output()
        .unwrap();
    let second = dicetray()
        .args(["roll", "d20", "-n", "5", "--seed", "7"])
        .output()
        .unwrap();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn roll_verbose_prints_history_line() {
    dicetray()
        .args(["roll", "d100", "-f", "42", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1×d100 → 42 = 42"));
}

#[test]
fn roll_out_of_range_fails() {
    dicetray()
        .args(["roll", "d6", "-n", "2", "-f", "1,9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Values [9] are out of range 1–6."));
}

#[test]
fn roll_count_mismatch_fails() {
    dicetray()
        .args(["roll", "d6", "-n", "3", "-f", "1,2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Enter one or exactly 3 numbers"));
}

#[test]
fn roll_invalid_quantity_fails() {
    dicetray()
        .args(["roll", "d6", "-n", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Quantity must be an integer"));
}

#[test]
fn roll_huge_quantity_fails_cleanly() {
    dicetray()
        .args(["roll", "d6", "-n", "4000000000", "-f", "5"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Quantity must be at most 10000."));
}

#[test]
fn roll_quantity_limit_from_config() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dicetray.json");
    fs::write(&path, r#"{ "quantity_limit": 2 }"#).unwrap();

    dicetray()
        .args(["roll", "d6", "-n", "3", "-f", "5", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Quantity must be at most 2."));
}

#[test]
fn roll_invalid_modifier_fails() {
    dicetray()
        .args(["roll", "d6", "-m", "lots"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Modifier must be an integer."));
}

#[test]
fn roll_non_integer_forced_value_fails() {
    dicetray()
        .args(["roll", "d6", "-n", "2", "-f", "1,two"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Only integers are allowed."));
}

#[test]
fn roll_empty_forced_values_fails() {
    dicetray()
        .args(["roll", "d6", "-f", " "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No forced values provided."));
}

#[test]
fn roll_unknown_die_fails() {
    dicetray()
        .args(["roll", "x7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown die"));
}

// ---------------------------------------------------------------------------
// layout
// ---------------------------------------------------------------------------

#[test]
fn layout_shrinks_tiles_to_fit() {
    dicetray()
        .args(["layout", "-W", "1000", "-H", "500", "-c", "12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tile 145px, 6 columns x 2 rows"));
}

#[test]
fn layout_reports_overflow_at_floor() {
    dicetray()
        .args(["layout", "-W", "10", "-H", "10", "-c", "3", "-d", "d6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("tile 20px").and(predicate::str::contains("WARN")));
}

#[test]
fn layout_uses_config_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dicetray.json");
    fs::write(&path, r#"{ "layout": { "base_tile": 100, "padding": 0 } }"#).unwrap();

    dicetray()
        .args(["layout", "-W", "1000", "-H", "500", "-c", "1", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("tile 100px, 10 columns x 1 rows"));
}

#[test]
fn bad_config_file_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dicetray.json");
    fs::write(&path, "not json").unwrap();

    dicetray()
        .args(["dice", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));
}

// ---------------------------------------------------------------------------
// dice
// ---------------------------------------------------------------------------

#[test]
fn dice_lists_standard_kinds() {
    dicetray()
        .arg("dice")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("d4")
                .and(predicate::str::contains("d100"))
                .and(predicate::str::contains("#ffcdd2")),
        );
}

// ---------------------------------------------------------------------------
// frames
// ---------------------------------------------------------------------------

#[test]
fn frames_spin_then_settle() {
    dicetray()
        .args(["frames", "d20", "13"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("t=   0ms")
                .and(predicate::str::contains("t= 100ms"))
                .and(predicate::str::contains("t= 120ms"))
                .and(predicate::str::contains("settled")),
        );
}

#[test]
fn frames_rejects_impossible_face() {
    dicetray()
        .args(["frames", "d6", "7"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}
