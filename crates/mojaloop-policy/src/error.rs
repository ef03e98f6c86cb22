use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PolicyError {
    #[error("Invalid wildcard pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Bundle integrity violation: {0}")]
    Integrity(String),

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PolicyError>;
