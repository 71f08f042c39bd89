//! Application layer - Use cases and orchestration

pub mod convert;

pub use convert::{convert, write_year_in_pixels, ConversionReport};
