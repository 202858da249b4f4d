//! Tidy-CSV parsing for the passport index dataset.
//!
//! The upstream file is long-format: exactly one
//! `passport,destination,requirement` fact per line, values are plain tokens
//! without quoting. Parsing is deliberately tolerant of ragged trailing lines
//! but strict about the header.

use csv::ReaderBuilder;

use crate::error::{IngestError, Result};

/// Expected header columns, in order, matched case-insensitively.
pub const EXPECTED_COLUMNS: [&str; 3] = ["passport", "destination", "requirement"];

/// One parsed dataset row. Country codes are trimmed and uppercased; the
/// requirement token is trimmed only, its interpretation belongs to the
/// normalizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    pub passport: String,
    pub destination: String,
    pub requirement: String,
}

/// Parses a full tidy-CSV document into rows.
///
/// Fails with [`IngestError::Header`] when the header does not start with the
/// expected three columns. Data rows missing a field, or with an empty
/// passport or destination, are skipped silently; the dataset is loosely
/// curated and a handful of ragged lines is normal.
pub fn parse_tidy_csv(input: &str) -> Result<Vec<RawRow>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input.as_bytes());

    let headers = reader.headers()?.clone();
    validate_header(&headers)?;

    let mut rows = Vec::new();
    let mut skipped = 0usize;
    for record in reader.records() {
        let record = record?;
        // Fewer than three fields: nothing the normalizer could do with it.
        let Some(requirement) = record.get(2) else {
            skipped += 1;
            continue;
        };
        let passport = normalize_code(record.get(0).unwrap_or(""));
        let destination = normalize_code(record.get(1).unwrap_or(""));
        if passport.is_empty() || destination.is_empty() {
            skipped += 1;
            continue;
        }
        rows.push(RawRow {
            passport,
            destination,
            requirement: requirement.trim().to_string(),
        });
    }

    if skipped > 0 {
        tracing::debug!(skipped, "skipped malformed dataset rows");
    }
    tracing::debug!(rows = rows.len(), "parsed tidy dataset");
    Ok(rows)
}

fn validate_header(headers: &csv::StringRecord) -> Result<()> {
    let matches = EXPECTED_COLUMNS.iter().enumerate().all(|(idx, expected)| {
        headers
            .get(idx)
            .map(|field| field.trim().trim_matches('\u{feff}'))
            .is_some_and(|field| field.eq_ignore_ascii_case(expected))
    });
    if matches {
        Ok(())
    } else {
        Err(IngestError::Header {
            found: headers.iter().collect::<Vec<_>>().join(","),
        })
    }
}

fn normalize_code(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_ascii_uppercase()
}
