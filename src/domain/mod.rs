//! Domain layer - Mood log model and the Year in Pixels grid

pub mod entry;
pub mod mood;
pub mod year_pixels;

pub use entry::{Entry, MoodLog};
pub use mood::normalize_mood;
pub use year_pixels::{FoldOutcome, Slot, YearPixels, DAYS_IN_GRID, NO_DATA};
