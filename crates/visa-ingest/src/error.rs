//! Error types for dataset ingestion.

use thiserror::Error;

/// Errors that can occur while downloading or parsing the dataset.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Transport-level failure while talking to the dataset host.
    #[error("failed to download dataset from {url}: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The dataset host answered with a non-success status.
    #[error("dataset download failed with status {status}: {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    /// The CSV header did not match the expected tidy layout.
    #[error("unexpected CSV header: expected `passport,destination,requirement`, got `{found}`")]
    Header { found: String },

    /// Low-level CSV reading failure (encoding, I/O).
    #[error("failed to read CSV: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, IngestError>;
