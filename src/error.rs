use std::path::PathBuf;
use thiserror::Error;

/// Fatal failures of a conversion run. Malformed rows are never errors; they
/// are skipped by the row classifier.
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("opening input {path:?}: {source}")]
    InputAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("reading record from {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("writing output {path:?}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("serializing directory: {0}")]
    Serialize(#[from] serde_json::Error),
}
