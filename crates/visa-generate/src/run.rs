//! Top-level generation run: dataset text in, updated rule files out.

use std::fs;
use std::path::{Path, PathBuf};

use visa_ingest::parse_tidy_csv;

use crate::error::{GenerateError, Result};
use crate::markers::{ensure_markers, replace_generated_block};
use crate::matrix::group_by_destination;
use crate::render::render_matrix_block;

/// File name of the per-destination rule file.
pub const RULES_FILE_NAME: &str = "rules.toml";

/// Options for a generation run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Compute and report changes without writing anything, scaffolds and
    /// marker repairs included.
    pub dry_run: bool,
}

/// What happened to one destination during a run.
#[derive(Debug, Clone)]
pub struct DestinationOutcome {
    /// Uppercased destination code.
    pub destination: String,
    /// Path of the destination's rule file.
    pub path: PathBuf,
    /// Number of citizenship entries in the rendered matrix.
    pub matrix_entries: usize,
    /// Whether the file content changed (or would change, under dry-run).
    pub modified: bool,
}

/// Per-run summary, one outcome per known destination.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub outcomes: Vec<DestinationOutcome>,
}

impl RunSummary {
    pub fn updated(&self) -> usize {
        self.outcomes.iter().filter(|o| o.modified).count()
    }

    pub fn total(&self) -> usize {
        self.outcomes.len()
    }
}

/// Runs generation against already-downloaded dataset text.
///
/// Parses and groups the dataset once, then visits every destination
/// directory under `rules_root` in sorted order: ensure markers, render the
/// destination's matrix (empty when the dataset has no rows for it), splice
/// it into the file, and write back only when the bytes differ. Running twice
/// against unchanged input therefore writes nothing the second time.
///
/// Destinations that appear in the dataset but have no directory are computed
/// and dropped; only known directories are ever touched.
pub fn run_generation(csv: &str, rules_root: &Path, options: RunOptions) -> Result<RunSummary> {
    let rows = parse_tidy_csv(csv)?;
    let by_destination = group_by_destination(&rows);
    tracing::info!(
        rows = rows.len(),
        destinations = by_destination.len(),
        "grouped dataset into destination matrices"
    );

    let destinations = list_destinations(rules_root)?;
    let mut summary = RunSummary::default();

    for dir in &destinations {
        // Keep the on-disk directory name for the path; the uppercased name
        // is only the matrix key.
        let path = rules_root.join(&dir.name).join(RULES_FILE_NAME);
        let existing = ensure_markers(&path, &dir.code, options.dry_run)?;

        let matrix = by_destination.get(&dir.code).cloned().unwrap_or_default();
        let block = render_matrix_block(&matrix);
        let next = replace_generated_block(&existing, &block).map_err(|_| {
            GenerateError::InvalidMarkers { path: path.clone() }
        })?;

        let modified = next != existing;
        if modified && !options.dry_run {
            fs::write(&path, &next).map_err(|source| GenerateError::FileWrite {
                path: path.clone(),
                source,
            })?;
        }
        tracing::debug!(
            destination = %dir.code,
            entries = matrix.len(),
            modified,
            "processed destination"
        );

        summary.outcomes.push(DestinationOutcome {
            destination: dir.code.clone(),
            path,
            matrix_entries: matrix.len(),
            modified,
        });
    }

    tracing::info!(
        updated = summary.updated(),
        total = summary.total(),
        dry_run = options.dry_run,
        "generation run finished"
    );
    Ok(summary)
}

struct DestinationDir {
    /// Directory name as found on disk.
    name: String,
    /// Uppercased destination code.
    code: String,
}

/// Enumerates destination directories under the rules root, sorted by code.
fn list_destinations(root: &Path) -> Result<Vec<DestinationDir>> {
    if !root.is_dir() {
        return Err(GenerateError::RulesRootNotFound {
            path: root.to_path_buf(),
        });
    }

    let read_err = |source| GenerateError::DirectoryRead {
        path: root.to_path_buf(),
        source,
    };

    let mut dirs = Vec::new();
    for entry in fs::read_dir(root).map_err(read_err)? {
        let entry = entry.map_err(read_err)?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        dirs.push(DestinationDir {
            name: name.to_string(),
            code: name.to_ascii_uppercase(),
        });
    }
    dirs.sort_by(|a, b| a.code.cmp(&b.code));
    Ok(dirs)
}
