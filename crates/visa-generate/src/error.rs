//! Error types for the generation run.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during matrix generation and merging.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Dataset download or parsing failed.
    #[error(transparent)]
    Ingest(#[from] visa_ingest::IngestError),

    /// Rules root directory does not exist.
    #[error("rules root not found: {path}")]
    RulesRootNotFound { path: PathBuf },

    /// Failed to enumerate destination directories.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read a rule file.
    #[error("failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a rule file.
    #[error("failed to write {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Markers are missing or out of order after the ensure step. The file is
    /// corrupt; the run aborts rather than guessing where the block belongs.
    #[error("auto-generated markers missing or out of order in {path}")]
    InvalidMarkers { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, GenerateError>;
