// src/config.rs
use std::path::PathBuf;

/// Spreadsheet export, relative to the working directory.
pub const INPUT_CSV: &str = "directorio.csv";
/// Published snapshot, one level above the working directory.
pub const OUTPUT_JSON: &str = "../directorio.json";

pub const UPDATED_AT: &str = "2025-05";
pub const ORGANIZATION: &str = "CRIT Hidalgo";

pub const DELIMITER: u8 = b';';
/// Number of positional cells a data row is destructured into.
pub const ROW_WIDTH: usize = 6;

/// Month label rows left over from the spreadsheet layout. Only "Mayo" is
/// filtered; other month names are not.
pub const DECORATIVE_PREFIX: &str = "Mayo";
pub const HEADER_TOKEN: &str = "NOMBRE";

/// Paths and fixed literals for one conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub updated_at: String,
    pub organization: String,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(INPUT_CSV),
            output: PathBuf::from(OUTPUT_JSON),
            updated_at: UPDATED_AT.to_string(),
            organization: ORGANIZATION.to_string(),
        }
    }
}

impl ConvertConfig {
    /// Same literals as the default, different files.
    pub fn with_paths(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            ..Self::default()
        }
    }
}
