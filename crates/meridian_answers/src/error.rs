use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while reading, parsing or writing answer documents.
#[derive(Debug, Error)]
pub enum AnswersError {
    #[error("Failed to read answer file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write answer file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed answer document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unknown section: {0}")]
    UnknownSection(String),
}
