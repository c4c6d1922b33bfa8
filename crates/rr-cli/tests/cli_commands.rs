//! End-to-end tests for the `ringroll` binary.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

/// An endpoint nothing listens on, so networked rolls must fall back.
const DEAD_ENDPOINT: &str = "http://127.0.0.1:1/integers/?num={quantity}";

fn ringroll() -> Command {
    let mut cmd = Command::cargo_bin("ringroll").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("RINGROLL_ONLINE")
        .env_remove("RINGROLL_ENDPOINT");
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

fn primary_line(stdout: &str) -> &str {
    stdout
        .lines()
        .rfind(|line| line.trim_start().starts_with("primary:"))
        .unwrap()
}

fn bonus_line(stdout: &str) -> &str {
    stdout
        .lines()
        .rfind(|line| line.trim_start().starts_with("bonus:"))
        .unwrap()
}

// ---------------------------------------------------------------------------
// roll
// ---------------------------------------------------------------------------

#[test]
fn roll_defaults_to_one_ring_die() {
    let stdout = stdout_of(ringroll().args(["roll", "--seed", "1"]));
    assert_eq!(primary_line(&stdout).matches("ring face").count(), 1);
    assert!(!stdout.contains("skill face"));
    assert!(bonus_line(&stdout).contains("(none)"));
}

#[test]
fn roll_two_ring_dice() {
    let stdout = stdout_of(ringroll().args(["roll", "--ring", "2", "--skill", "0", "--seed", "3"]));
    let primary = primary_line(&stdout);
    assert_eq!(primary.matches("ring face").count(), 2);
    assert!(!primary.contains("skill face"));
}

#[test]
fn roll_ring_then_skill() {
    let stdout = stdout_of(ringroll().args(["roll", "-r", "3", "-s", "2", "--seed", "9"]));
    let primary = primary_line(&stdout);
    assert_eq!(primary.matches("ring face").count(), 3);
    assert_eq!(primary.matches("skill face").count(), 2);
    assert!(primary.rfind("ring face").unwrap() < primary.find("skill face").unwrap());
}

#[test]
fn roll_json() {
    let stdout = stdout_of(ringroll().args(["roll", "--ring", "3", "--skill", "2", "--json", "--seed", "5"]));
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    let primary = value["primary"].as_array().unwrap();
    assert_eq!(primary.len(), 5);
    assert_eq!(primary[0]["die"], "ring");
    assert_eq!(primary[4]["die"], "skill");
    assert!(value["bonus"].as_array().unwrap().is_empty());

    let skill_faces = [1, 3, 6, 8, 10, 11, 12];
    for face in &primary[3..] {
        assert!(skill_faces.contains(&face["face"].as_u64().unwrap()));
    }
}

#[test]
fn roll_is_reproducible_with_seed() {
    let first = stdout_of(ringroll().args(["roll", "-r", "5", "-s", "5", "--seed", "42"]));
    let second = stdout_of(ringroll().args(["roll", "-r", "5", "-s", "5", "--seed", "42"]));
    assert_eq!(first, second);
}

#[test]
fn roll_rejects_out_of_range_counts() {
    ringroll().args(["roll", "--ring", "0"]).assert().failure();
    ringroll().args(["roll", "--ring", "6"]).assert().failure();
    ringroll().args(["roll", "--skill", "6"]).assert().failure();
}

#[test]
fn online_roll_falls_back_when_service_is_down() {
    let stdout = stdout_of(ringroll().args([
        "roll",
        "--online",
        "--endpoint",
        DEAD_ENDPOINT,
        "--ring",
        "2",
        "--skill",
        "1",
    ]));
    let primary = primary_line(&stdout);
    assert_eq!(primary.matches("ring face").count(), 2);
    assert_eq!(primary.matches("skill face").count(), 1);
}

#[test]
fn online_fallback_is_not_logged() {
    ringroll()
        .env("RUST_LOG", "debug")
        .args(["roll", "--online", "--endpoint", DEAD_ENDPOINT, "--ring", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ring face"))
        .stderr(predicate::str::contains("rr_dice::entropy").not());
}

#[test]
fn online_can_come_from_environment() {
    let stdout = stdout_of(
        ringroll()
            .env("RINGROLL_ONLINE", "true")
            .env("RINGROLL_ENDPOINT", DEAD_ENDPOINT)
            .args(["roll", "--ring", "4"]),
    );
    assert_eq!(primary_line(&stdout).matches("ring face").count(), 4);
}

#[test]
fn sound_rings_the_bell() {
    ringroll()
        .args(["roll", "--sound", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{7}"));

    ringroll()
        .args(["roll", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{7}").not());
}

// ---------------------------------------------------------------------------
// session
// ---------------------------------------------------------------------------

#[test]
fn session_roll_and_bonus_dice() {
    let stdout = stdout_of(
        ringroll()
            .args(["session", "--seed", "7"])
            .write_stdin("roll 2 1\nring\nskill\nexit\n"),
    );
    let bonus = bonus_line(&stdout);
    assert_eq!(bonus.matches("ring face").count(), 1);
    assert_eq!(bonus.matches("skill face").count(), 1);
    assert!(bonus.find("ring face").unwrap() < bonus.find("skill face").unwrap());
}

#[test]
fn session_main_roll_clears_bonus() {
    let stdout = stdout_of(
        ringroll()
            .args(["session", "--seed", "7"])
            .write_stdin("roll 3 2\nring\nskill\nroll\n"),
    );
    assert!(bonus_line(&stdout).contains("(none)"));
    let primary = primary_line(&stdout);
    assert_eq!(primary.matches("ring face").count(), 3);
    assert_eq!(primary.matches("skill face").count(), 2);
}

#[test]
fn session_reroll_keeps_die_type() {
    let stdout = stdout_of(
        ringroll()
            .args(["session", "--seed", "11"])
            .write_stdin("roll 1 1\nreroll primary 1\nreroll primary 1\nreroll 0\n"),
    );
    let primary = primary_line(&stdout);
    assert!(primary.contains("[0] ring face"));
    assert!(primary.contains("[1] skill face"));
}

#[test]
fn session_reports_bad_reroll_and_continues() {
    ringroll()
        .args(["session", "--seed", "2"])
        .write_stdin("roll 1\nreroll bonus 0\nshow\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("out of range"))
        .stdout(predicate::str::contains("ring face"));
}

#[test]
fn rejected_reroll_does_not_ring_the_bell() {
    ringroll()
        .args(["session", "--sound", "--seed", "2"])
        .write_stdin("reroll bonus 0\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("out of range"))
        .stdout(predicate::str::contains("\u{7}").not());
}

#[test]
fn session_reports_unknown_commands() {
    ringroll()
        .arg("session")
        .write_stdin("dance\nroll 9\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("unknown command 'dance'"))
        .stderr(predicate::str::contains("ring dice must be between 1 and 5"));
}

#[test]
fn session_toggles() {
    ringroll()
        .args(["session", "--endpoint", DEAD_ENDPOINT])
        .write_stdin("online on\nsound on\nroll 2\nsound off\nonline off\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("online: on"))
        .stdout(predicate::str::contains("sound: on"))
        .stdout(predicate::str::contains("\u{7}"))
        .stdout(predicate::str::contains("online: off"));
}

#[test]
fn session_help() {
    ringroll()
        .arg("session")
        .write_stdin("help\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("reroll [primary|bonus] <i>"));
}
