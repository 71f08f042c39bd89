//! Daylio CSV export reader
//!
//! Lines are split on every comma. Quoted fields are not understood, so a
//! note containing a comma shifts or truncates the trailing columns.

use crate::domain::{normalize_mood, Entry, MoodLog};
use crate::error::{PixelsError, Result};
use chrono::NaiveDate;
use std::fs;
use std::path::Path;

/// Column order of a Daylio export.
pub const EXPORT_COLUMNS: [&str; 7] = [
    "full_date",
    "date",
    "day",
    "time",
    "mood",
    "activities",
    "note",
];

const FULL_DATE_FORMAT: &str = "%Y-%m-%d";

/// Read and parse a Daylio export file.
pub fn read_daylio(path: &Path) -> Result<MoodLog> {
    let contents = fs::read_to_string(path)?;

    if contents.is_empty() {
        return Err(PixelsError::MissingHeader(path.to_path_buf()));
    }

    let log = parse_export(&contents)?;
    tracing::debug!(path = %path.display(), entries = log.len(), "read daylio export");
    Ok(log)
}

/// Parse export text. The first line is the header and is discarded.
pub fn parse_export(contents: &str) -> Result<MoodLog> {
    let mut log = MoodLog::default();

    for (idx, line) in contents.lines().enumerate().skip(1) {
        log.push(parse_line(line, idx + 1)?);
    }

    Ok(log)
}

fn parse_line(line: &str, line_no: usize) -> Result<Entry> {
    let fields: Vec<&str> = line.trim().split(',').collect();

    if fields.len() < EXPORT_COLUMNS.len() {
        return Err(PixelsError::ShortRow {
            line: line_no,
            fields: fields.len(),
        });
    }

    let full_date = NaiveDate::parse_from_str(fields[0], FULL_DATE_FORMAT).map_err(|_| {
        PixelsError::InvalidDate {
            line: line_no,
            value: fields[0].to_string(),
        }
    })?;

    let mood = normalize_mood(fields[4]);
    if mood == fields[4] {
        tracing::debug!(line = line_no, label = fields[4], "unrecognized mood label kept as-is");
    }

    Ok(Entry {
        full_date,
        date: fields[1].to_string(),
        weekday: fields[2].to_string(),
        time: fields[3].to_string(),
        mood,
        activities: fields[5].to_string(),
        note: fields[6].to_string(),
    })
}
