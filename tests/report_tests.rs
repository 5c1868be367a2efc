//! Integration tests for report and badges commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::sleepvault_cmd;

#[test]
fn test_report_from_session_export() {
    let temp = TempDir::new().unwrap();

    sleepvault_cmd(temp.path())
        .write_stdin(
            "add 9 6 2025-01-14\n\
             add 8 8 2025-01-15 -- Rest day, no training\n\
             add 8.5 9 2025-01-16\n\
             export week.csv\n",
        )
        .assert()
        .success();

    sleepvault_cmd(temp.path())
        .arg("report")
        .arg("--input")
        .arg("week.csv")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your Sleep Log"))
        .stdout(predicate::str::contains("Rest day, no training"))
        .stdout(predicate::str::contains("3-day streak"))
        .stdout(predicate::str::contains("Bronze Badge"))
        .stdout(predicate::str::contains("Average Hours Slept: 8.5 hrs"))
        .stdout(predicate::str::contains("Highest Energy Score: 9/10"))
        .stdout(predicate::str::contains("Energy Score Trend"));
}

#[test]
fn test_report_sorts_streak_by_date() {
    let temp = TempDir::new().unwrap();
    // Most recent night (Jan 20) is short even though it was logged first
    fs::write(
        temp.path().join("log.csv"),
        "Date,Hours Slept,Energy Score,Notes\n\
         2025-01-20,6.0,4,\n\
         2025-01-18,9.0,8,\n\
         2025-01-19,9.0,8,\n",
    )
    .unwrap();

    sleepvault_cmd(temp.path())
        .args(["report", "-i", "log.csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("streak").not());
}

#[test]
fn test_report_header_only() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("empty.csv"),
        "Date,Hours Slept,Energy Score,Notes\n",
    )
    .unwrap();

    sleepvault_cmd(temp.path())
        .args(["report", "-i", "empty.csv"])
        .assert()
        .success()
        .stdout("No entries yet.\n");
}

#[test]
fn test_report_invalid_row() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("bad.csv"),
        "Date,Hours Slept,Energy Score,Notes\n2025-01-17,30.0,7,\n",
    )
    .unwrap();

    sleepvault_cmd(temp.path())
        .args(["report", "-i", "bad.csv"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Import failed at line 2"));
}

#[test]
fn test_report_missing_file() {
    let temp = TempDir::new().unwrap();

    sleepvault_cmd(temp.path())
        .args(["report", "-i", "nope.csv"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_badges_table() {
    let temp = TempDir::new().unwrap();

    sleepvault_cmd(temp.path())
        .arg("badges")
        .assert()
        .success()
        .stdout(predicate::str::contains("3+"))
        .stdout(predicate::str::contains("Bronze"))
        .stdout(predicate::str::contains("30+"))
        .stdout(predicate::str::contains("Diamond"));
}
