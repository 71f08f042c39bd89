//! CLI argument definitions

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "daylio2pixels")]
#[command(about = "Convert a Daylio CSV export to Year in Pixels format", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Year to extract (e.g., 2023); 0 uses the year of the first entry
    #[arg(value_name = "YEAR")]
    pub year: i32,

    /// Daylio CSV export to read
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// File to write the 365-digit line to (overwritten)
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,
}
