//! Error types for rule loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while loading rule files into the index.
#[derive(Debug, Error)]
pub enum RulesError {
    /// Rules root directory does not exist.
    #[error("rules root not found: {path}")]
    RootNotFound { path: PathBuf },

    /// Failed to enumerate destination directories.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read a rule file.
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Rule file is not valid TOML or does not match the expected shape.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, RulesError>;
