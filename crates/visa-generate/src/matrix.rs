//! Destination grouping: dataset rows folded into per-destination matrices.

use visa_model::DestinationMatrices;

use visa_ingest::{RawRow, normalize_requirement};

/// Groups normalized rows into destination -> citizenship -> rule.
///
/// Self-pairs (passport == destination) and no-data rows are excluded. The
/// dataset is assumed to carry at most one row per pair; when it repeats one,
/// the last row wins.
pub fn group_by_destination(rows: &[RawRow]) -> DestinationMatrices {
    let mut by_destination = DestinationMatrices::new();
    for row in rows {
        if row.passport == row.destination {
            continue;
        }
        let Some(rule) = normalize_requirement(&row.requirement) else {
            continue;
        };
        by_destination
            .entry(row.destination.clone())
            .or_default()
            .insert(row.passport.clone(), rule);
    }
    by_destination
}
