//! Integration tests for the interactive session

#![allow(deprecated)]

use chrono::Local;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::sleepvault_cmd;

#[test]
fn test_session_is_the_default_command() {
    let temp = TempDir::new().unwrap();

    sleepvault_cmd(temp.path())
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deep Sleep Vault Tracker (Athlete Edition)"))
        .stdout(predicate::str::contains("Session ended. Rest well!"));
}

#[test]
fn test_add_defaults_to_today() {
    let temp = TempDir::new().unwrap();
    let today = Local::now().date_naive().format("%Y-%m-%d").to_string();

    sleepvault_cmd(temp.path())
        .arg("session")
        .write_stdin("add 8.5\nexport -\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry added successfully!"))
        .stdout(predicate::str::contains(format!("{},8.5,7,", today)));
}

#[test]
fn test_streak_scenario_below_bronze() {
    let temp = TempDir::new().unwrap();

    sleepvault_cmd(temp.path())
        .write_stdin(
            "add 7.5 6 2025-01-15\n\
             add 8.0 7 2025-01-16\n\
             add 8.5 8 2025-01-17\n\
             streak\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("2-day streak of 8+ hours"))
        .stdout(predicate::str::contains("Badge").not());
}

#[test]
fn test_bronze_badge_after_three_nights() {
    let temp = TempDir::new().unwrap();

    sleepvault_cmd(temp.path())
        .write_stdin(
            "add 8 7 2025-01-15\n\
             add 8 7 2025-01-16\n\
             add 8 7 2025-01-17\n\
             streak\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("3-day streak"))
        .stdout(predicate::str::contains("Bronze Badge: 3 days in a row!"));
}

#[test]
fn test_weekly_insights_over_last_seven() {
    let temp = TempDir::new().unwrap();
    let script = [9.0, 8.0, 7.0, 9.0, 8.0, 6.0, 10.0]
        .iter()
        .enumerate()
        .map(|(i, hours)| format!("add {} {} 2025-01-{:02}\n", hours, i + 3, i + 10))
        .collect::<String>()
        + "insights\n";

    sleepvault_cmd(temp.path())
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Last 7 logged nights"))
        .stdout(predicate::str::contains("Average Hours Slept: 8.1 hrs"))
        .stdout(predicate::str::contains("Highest Energy Score: 9/10"))
        .stdout(predicate::str::contains("Psalm 127:2"));
}

#[test]
fn test_empty_session_shows_no_data() {
    let temp = TempDir::new().unwrap();

    sleepvault_cmd(temp.path())
        .write_stdin("dashboard\ninsights\nstreak\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries yet."))
        .stdout(predicate::str::contains("No data yet."))
        .stdout(predicate::str::contains("NaN").not());
}

#[test]
fn test_invalid_input_keeps_session_alive() {
    let temp = TempDir::new().unwrap();

    sleepvault_cmd(temp.path())
        .write_stdin("add 25\nadd 8 0\nadd 8 7 someday\nsnooze\nadd 9 8 2025-01-17\nlog\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("hours slept must be between 0 and 24"))
        .stdout(predicate::str::contains("energy score must be between 1 and 10"))
        .stdout(predicate::str::contains("Invalid date: 'someday'"))
        .stdout(predicate::str::contains("Unknown command: 'snooze'"))
        .stdout(predicate::str::contains("0  2025-01-17          9.0             8"))
        .stdout(predicate::str::contains("1 entries not exported are discarded"));
}

#[test]
fn test_export_to_configured_path() {
    let temp = TempDir::new().unwrap();

    sleepvault_cmd(temp.path())
        .write_stdin("add 8 7 2025-01-16\nadd 6.5 4 2025-01-17 -- Felt sore, late training\nexport\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 entries to sleep_log.csv"));

    let csv = fs::read_to_string(temp.path().join("sleep_log.csv")).unwrap();
    assert_eq!(
        csv,
        "Date,Hours Slept,Energy Score,Notes\n\
         2025-01-16,8.0,7,\n\
         2025-01-17,6.5,4,\"Felt sore, late training\"\n"
    );
}

#[test]
fn test_export_empty_log_writes_header() {
    let temp = TempDir::new().unwrap();

    sleepvault_cmd(temp.path())
        .write_stdin("export empty.csv\n")
        .assert()
        .success();

    let csv = fs::read_to_string(temp.path().join("empty.csv")).unwrap();
    assert_eq!(csv, "Date,Hours Slept,Energy Score,Notes\n");
}

#[test]
fn test_premium_theme_from_flag() {
    let temp = TempDir::new().unwrap();

    sleepvault_cmd(temp.path())
        .arg("--theme")
        .arg("premium")
        .write_stdin("add 8 7 2025-01-17\ncharts\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Deep Sleep Vault: Athlete Edition"))
        .stdout(predicate::str::contains("Sleep Hours vs Target"))
        .stdout(predicate::str::contains("Energy Score (1-10)"))
        .stdout(predicate::str::contains("your rest is your edge").not());
}

#[test]
fn test_invalid_theme_flag() {
    let temp = TempDir::new().unwrap();

    sleepvault_cmd(temp.path())
        .arg("--theme")
        .arg("neon")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Valid themes: classic, premium"));
}

#[test]
fn test_verbose_logs_go_to_stderr() {
    let temp = TempDir::new().unwrap();

    sleepvault_cmd(temp.path())
        .arg("--verbose")
        .write_stdin("add 8 7 2025-01-17\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("entry appended"))
        .stdout(predicate::str::contains("entry appended").not());
}

#[test]
fn test_export_to_directory_keeps_session_alive() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("logs")).unwrap();

    sleepvault_cmd(temp.path())
        .write_stdin("add 9 8 2025-01-16\nexport logs\nadd 8 7 2025-01-17\nexport -\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Error: Could not write logs"))
        .stdout(predicate::str::contains(
            "2025-01-16,9.0,8,\n2025-01-17,8.0,7,\n",
        ))
        .stdout(predicate::str::contains("Session ended. Rest well!"));
}
