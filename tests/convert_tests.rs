//! Integration tests for the converter binary

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{pixels_cmd, HEADER};

fn write_export(temp: &TempDir, rows: &[&str]) -> std::path::PathBuf {
    let path = temp.path().join("daylio_export.csv");
    let mut content = String::from(HEADER);
    for row in rows {
        content.push('\n');
        content.push_str(row);
    }
    content.push('\n');
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_converts_first_of_january() {
    let temp = TempDir::new().unwrap();
    let input = write_export(&temp, &["2023-01-01,January 1,Sunday,10:00,amazing ,friends,"]);
    let output = temp.path().join("pixels.txt");

    pixels_cmd()
        .arg("2023")
        .arg(&input)
        .arg(&output)
        .assert()
        .success();

    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(content.len(), 365);
    assert!(content.starts_with('5'));
    assert_eq!(&content[1..], "0".repeat(364));
}

#[test]
fn test_no_matching_year_writes_zeros() {
    let temp = TempDir::new().unwrap();
    let input = write_export(
        &temp,
        &[
            "2022-06-01,June 1,Wednesday,08:00,happy,,",
            "2024-06-01,June 1,Saturday,08:00,sad ,,",
        ],
    );
    let output = temp.path().join("pixels.txt");

    pixels_cmd()
        .arg("2023")
        .arg(&input)
        .arg(&output)
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&output).unwrap(), "0".repeat(365));
}

#[test]
fn test_leap_day_skipped_with_notice() {
    let temp = TempDir::new().unwrap();
    let input = write_export(
        &temp,
        &[
            "2024-02-29,February 29,Thursday,12:00,happy,,",
            "2024-03-01,March 1,Friday,12:00,average,,",
        ],
    );
    let output = temp.path().join("pixels.txt");

    pixels_cmd()
        .arg("2024")
        .arg(&input)
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Skipping leap day."));

    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(content.len(), 365);
    assert_eq!(&content[59..60], "3");
    assert!(!content.contains('4'));
}

#[test]
fn test_later_entry_wins() {
    let temp = TempDir::new().unwrap();
    let input = write_export(
        &temp,
        &[
            "2023-01-11,January 11,Wednesday,09:00,horrible,,",
            "2023-01-11,January 11,Wednesday,21:00,happy,,",
        ],
    );
    let output = temp.path().join("pixels.txt");

    pixels_cmd()
        .arg("2023")
        .arg(&input)
        .arg(&output)
        .assert()
        .success();

    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(&content[10..11], "4");
}

#[test]
fn test_output_is_overwritten() {
    let temp = TempDir::new().unwrap();
    let input = write_export(&temp, &["2023-12-31,December 31,Sunday,20:00,sad ,,"]);
    let output = temp.path().join("pixels.txt");
    fs::write(&output, "x".repeat(1000)).unwrap();

    pixels_cmd()
        .arg("2023")
        .arg(&input)
        .arg(&output)
        .assert()
        .success();

    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(content.len(), 365);
    assert!(content.ends_with('2'));
}

#[test]
fn test_malformed_date_fails() {
    let temp = TempDir::new().unwrap();
    let input = write_export(&temp, &["2023/01/01,January 1,Sunday,10:00,happy,,"]);
    let output = temp.path().join("pixels.txt");

    pixels_cmd()
        .arg("2023")
        .arg(&input)
        .arg(&output)
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("2023/01/01"));

    assert!(!output.exists());
}

#[test]
fn test_short_row_fails() {
    let temp = TempDir::new().unwrap();
    let input = write_export(&temp, &["2023-01-01,January 1,Sunday"]);
    let output = temp.path().join("pixels.txt");

    pixels_cmd()
        .arg("2023")
        .arg(&input)
        .arg(&output)
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("at least 7"));
}

#[test]
fn test_missing_input_fails() {
    let temp = TempDir::new().unwrap();

    pixels_cmd()
        .arg("2023")
        .arg(temp.path().join("missing.csv"))
        .arg(temp.path().join("pixels.txt"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn test_missing_arguments_rejected() {
    // usage errors keep clap's exit code, distinct from bad input
    pixels_cmd().arg("2023").assert().failure().code(2);
}

#[test]
fn test_year_zero_uses_first_entry_year() {
    let temp = TempDir::new().unwrap();
    let input = write_export(
        &temp,
        &[
            "2024-03-01,March 1,Friday,12:00,horrible,,",
            "2023-03-01,March 1,Wednesday,12:00,happy,,",
        ],
    );
    let output = temp.path().join("pixels.txt");

    pixels_cmd()
        .arg("0")
        .arg(&input)
        .arg(&output)
        .assert()
        .success();

    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(&content[59..60], "1");
    assert!(!content.contains('4'));
}
