//! The Year in Pixels grid
//!
//! Year in Pixels always expects 365 slots, one per day of the year, with
//! no room for 29 February. Leap years are compressed onto the grid by
//! dropping the leap day and moving every later day back by one slot.

use crate::domain::MoodLog;
use crate::error::{PixelsError, Result};
use chrono::{Datelike, NaiveDate};
use std::fmt;

/// Number of slots in the grid, leap year or not.
pub const DAYS_IN_GRID: usize = 365;

/// Slot value meaning "nothing logged".
pub const NO_DATA: &str = "0";

/// Day-of-year of 29 February.
const LEAP_DAY_ORDINAL: usize = 60;

/// Whether `year` has a 29 February.
pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 2, 29).is_some()
}

/// Where a date lands on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// 0-based grid index
    Index(usize),
    /// 29 February of a leap target year; never written
    LeapDay,
}

impl Slot {
    /// Project `date` onto the grid of target `year`.
    ///
    /// Leap handling follows the target year, not the date's own year.
    /// Callers only pass dates from `year`, so the two agree in practice.
    pub fn for_date(date: NaiveDate, year: i32) -> Self {
        let leap = is_leap_year(year);

        if leap && date.month() == 2 && date.day() == 29 {
            return Slot::LeapDay;
        }

        let day_of_year = date.ordinal() as usize;
        let mut index = day_of_year - 1;
        if leap && day_of_year > LEAP_DAY_ORDINAL {
            index -= 1;
        }

        Slot::Index(index)
    }
}

/// What folding a log into the grid did
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoldOutcome {
    /// Slot writes performed, overwrites included
    pub written: usize,
    /// Leap-day entries dropped, in log order
    pub skipped_leap_days: Vec<NaiveDate>,
    /// Entries from other years, ignored
    pub other_years: usize,
}

/// One year of mood codes, 365 slots
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearPixels {
    year: i32,
    slots: Vec<String>,
}

impl YearPixels {
    /// Empty grid for `year`, every slot `NO_DATA`.
    pub fn new(year: i32) -> Self {
        YearPixels {
            year,
            slots: vec![NO_DATA.to_string(); DAYS_IN_GRID],
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.slots.get(index).map(String::as_str)
    }

    pub fn slots(&self) -> &[String] {
        &self.slots
    }

    /// Write one entry. Returns the slot it mapped to.
    ///
    /// Later writes to the same slot replace earlier ones.
    pub fn record(&mut self, date: NaiveDate, mood: &str) -> Result<Slot> {
        let slot = Slot::for_date(date, self.year);

        if let Slot::Index(index) = slot {
            let cell = self
                .slots
                .get_mut(index)
                .ok_or(PixelsError::DayOutOfRange { date, index })?;
            *cell = mood.to_string();
        }

        Ok(slot)
    }

    /// Fold every entry of `log` dated in this grid's year, in log order.
    pub fn fold(&mut self, log: &MoodLog) -> Result<FoldOutcome> {
        let mut outcome = FoldOutcome::default();

        for entry in log.entries() {
            if entry.full_date.year() != self.year {
                outcome.other_years += 1;
                continue;
            }

            match self.record(entry.full_date, &entry.mood)? {
                Slot::Index(index) => {
                    tracing::trace!(date = %entry.full_date, index, mood = %entry.mood, "slot written");
                    outcome.written += 1;
                }
                Slot::LeapDay => outcome.skipped_leap_days.push(entry.full_date),
            }
        }

        Ok(outcome)
    }

    /// The grid as one contiguous line, no delimiters or newline.
    pub fn to_line(&self) -> String {
        self.slots.concat()
    }
}

impl fmt::Display for YearPixels {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_line())
    }
}
