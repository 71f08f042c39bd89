//! Convert use case: Daylio export to Year in Pixels

use crate::domain::{MoodLog, YearPixels};
use crate::error::{PixelsError, Result};
use crate::infrastructure::{read_daylio, write_pixels};
use chrono::NaiveDate;
use std::path::Path;

/// Notice printed for every dropped 29 February.
pub const LEAP_DAY_NOTICE: &str = "Skipping leap day.";

/// Summary of one conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub year: i32,
    pub written: usize,
    pub skipped_leap_days: Vec<NaiveDate>,
}

/// Project `log` onto a 365-slot grid and write it to `output`.
///
/// `year` defaults to the year of the first entry in the log.
pub fn write_year_in_pixels(
    log: &MoodLog,
    output: &Path,
    year: Option<i32>,
) -> Result<ConversionReport> {
    let year = year.or_else(|| log.first_year()).ok_or(PixelsError::EmptyLog)?;

    let mut pixels = YearPixels::new(year);
    let outcome = pixels.fold(log)?;

    for date in &outcome.skipped_leap_days {
        tracing::info!(%date, "leap day dropped");
        println!("{}", LEAP_DAY_NOTICE);
    }

    write_pixels(output, &pixels)?;

    tracing::debug!(
        year,
        written = outcome.written,
        other_years = outcome.other_years,
        "year in pixels complete"
    );

    Ok(ConversionReport {
        year,
        written: outcome.written,
        skipped_leap_days: outcome.skipped_leap_days,
    })
}

/// Read `input`, then write the grid for `year` to `output`.
///
/// A `year` of 0 means "the year of the first entry".
pub fn convert(year: i32, input: &Path, output: &Path) -> Result<ConversionReport> {
    let log = read_daylio(input)?;
    let year = (year != 0).then_some(year);
    write_year_in_pixels(&log, output, year)
}
