//! Ingestion of the upstream passport-index dataset: download, tidy-CSV
//! parsing, and requirement normalization.

pub mod error;
pub mod fetch;
pub mod normalize;
pub mod tidy;

pub use error::{IngestError, Result};
pub use fetch::{DATA_URL, fetch_dataset};
pub use normalize::normalize_requirement;
pub use tidy::{EXPECTED_COLUMNS, RawRow, parse_tidy_csv};
