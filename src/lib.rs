//! Converts the semicolon-delimited contact directory export into the JSON
//! snapshot consumed by the directory web page.

pub mod config;
pub mod directory;
pub mod error;

pub use config::ConvertConfig;
pub use error::DirectoryError;
