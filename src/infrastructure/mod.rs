//! Infrastructure layer - Reading exports and writing pixel files

pub mod daylio;
pub mod pixels_file;

pub use daylio::{parse_export, read_daylio, EXPORT_COLUMNS};
pub use pixels_file::write_pixels;
