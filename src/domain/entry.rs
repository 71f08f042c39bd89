//! Parsed Daylio entries

use chrono::{Datelike, NaiveDate};

/// One row of a Daylio export.
///
/// `mood` holds the normalized code ("1".."5") or the original label when
/// it was not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub full_date: NaiveDate,
    pub date: String,
    pub weekday: String,
    pub time: String,
    pub mood: String,
    pub activities: String,
    pub note: String,
}

impl Entry {
    /// Build an entry with only the columns the converter needs.
    pub fn new(full_date: NaiveDate, mood: impl Into<String>) -> Self {
        Entry {
            full_date,
            date: String::new(),
            weekday: String::new(),
            time: String::new(),
            mood: mood.into(),
            activities: String::new(),
            note: String::new(),
        }
    }
}

/// Entries in export order (not necessarily chronological).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoodLog {
    entries: Vec<Entry>,
}

impl MoodLog {
    pub fn new(entries: Vec<Entry>) -> Self {
        MoodLog { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn push(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parsed dates, parallel to `moods()`.
    pub fn dates(&self) -> Vec<NaiveDate> {
        self.entries.iter().map(|e| e.full_date).collect()
    }

    /// Mood codes, parallel to `dates()`.
    pub fn moods(&self) -> Vec<&str> {
        self.entries.iter().map(|e| e.mood.as_str()).collect()
    }

    /// Year of the first entry in export order.
    pub fn first_year(&self) -> Option<i32> {
        self.entries.first().map(|e| e.full_date.year())
    }
}

impl FromIterator<Entry> for MoodLog {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        MoodLog::new(iter.into_iter().collect())
    }
}
