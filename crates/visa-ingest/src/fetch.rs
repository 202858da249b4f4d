//! Dataset download.

use reqwest::header::{HeaderValue, USER_AGENT};

use crate::error::{IngestError, Result};

/// Upstream tidy dataset: one (passport, destination, requirement) fact per row.
pub const DATA_URL: &str =
    "https://raw.githubusercontent.com/ilyankou/passport-index-dataset/master/passport-index-tidy-iso2.csv";

/// User agent string for dataset requests.
const USER_AGENT_VALUE: &str = concat!("visa-guide/", env!("CARGO_PKG_VERSION"));

/// Downloads the dataset body as text.
///
/// One blocking GET, no retries: a transport failure or non-success status is
/// fatal for the whole generation run, and the run performs no writes before
/// the download has succeeded.
pub fn fetch_dataset(url: &str) -> Result<String> {
    tracing::info!(url, "downloading visa requirement dataset");

    let client = reqwest::blocking::Client::new();
    let response = client
        .get(url)
        .header(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE))
        .send()
        .map_err(|source| IngestError::Http {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(IngestError::Status {
            status,
            url: url.to_string(),
        });
    }

    let body = response.text().map_err(|source| IngestError::Http {
        url: url.to_string(),
        source,
    })?;
    tracing::debug!(bytes = body.len(), "dataset downloaded");
    Ok(body)
}
