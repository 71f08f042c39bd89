//! daylio2pixels - Daylio export to Year in Pixels converter
//!
//! Reads the comma-delimited export written by the Daylio mood tracker and
//! projects one year of it onto the 365-digit line that Year in Pixels
//! imports.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

pub use error::PixelsError;
