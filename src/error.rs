//! Error types for daylio2pixels

use chrono::NaiveDate;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the converter
#[derive(Debug, Error)]
pub enum PixelsError {
    #[error("Export has no header line: {0}")]
    MissingHeader(PathBuf),

    #[error("Line {line}: expected at least 7 comma-separated fields, found {fields}")]
    ShortRow { line: usize, fields: usize },

    #[error("Line {line}: invalid date '{value}' (expected YYYY-MM-DD)")]
    InvalidDate { line: usize, value: String },

    #[error("Mood log is empty and no year was given")]
    EmptyLog,

    #[error("Day {date} maps outside the 365-day grid (index {index})")]
    DayOutOfRange { date: NaiveDate, index: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PixelsError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            PixelsError::MissingHeader(_)
            | PixelsError::ShortRow { .. }
            | PixelsError::InvalidDate { .. } => 4,
            PixelsError::EmptyLog => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            PixelsError::MissingHeader(path) => {
                format!(
                    "Export has no header line: {}\n\n\
                    Suggestions:\n\
                    • Check that the file is a Daylio CSV export\n\
                    • The first line must be the column header",
                    path.display()
                )
            }
            PixelsError::ShortRow { .. } => {
                format!(
                    "{}\n\n\
                    Expected columns: full_date,date,day,time,mood,activities,note\n\
                    Note: fields are split on every comma, quoting is not supported",
                    self
                )
            }
            PixelsError::InvalidDate { .. } => {
                format!(
                    "{}\n\n\
                    The first column must be a full date.\n\
                    Example: 2023-01-01",
                    self
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using PixelsError
pub type Result<T> = std::result::Result<T, PixelsError>;
