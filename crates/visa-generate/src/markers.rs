//! Marker-delimited block handling for per-destination rule files.
//!
//! Each rule file owns its hand-written content; the generator owns exactly
//! one region between a start and an end marker. The merge replaces only that
//! region and preserves everything else byte-for-byte.

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use crate::error::{GenerateError, Result};

/// Start marker line. `#` is the comment token of the rule file format.
pub const AUTO_START: &str = "# --- AUTO-GENERATED VISA MATRIX START ---";
/// End marker line.
pub const AUTO_END: &str = "# --- AUTO-GENERATED VISA MATRIX END ---";

/// Markers absent or out of order in a file that should have them.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("auto-generated markers not found or out of order")]
pub struct MarkerError;

/// Minimal rule file scaffold for a destination without one: a comment
/// header, an empty checklist, and an empty generated block.
pub fn scaffold(destination: &str) -> String {
    format!(
        "# {destination} entry rules\n\nchecklist = []\n\n{AUTO_START}\n[matrix]\n{AUTO_END}\n"
    )
}

/// Guarantees the file at `path` exists and carries a well-formed block.
///
/// A missing file is created from the scaffold (parent directories included).
/// A file lacking either marker gets a fresh empty block appended after its
/// trimmed end, persisting the change before the merge runs. Hand-written
/// content is never discarded. Under `dry_run` the synthesized content is
/// returned without touching the disk. Returns the file content after the
/// step.
pub fn ensure_markers(path: &Path, destination: &str, dry_run: bool) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(content) => {
            if content.contains(AUTO_START) && content.contains(AUTO_END) {
                return Ok(content);
            }
            let appended = format!(
                "{}\n\n{AUTO_START}\n[matrix]\n{AUTO_END}\n",
                content.trim_end()
            );
            if !dry_run {
                write_file(path, &appended)?;
            }
            tracing::warn!(
                path = %path.display(),
                dry_run,
                "rule file had no generated block; appended an empty one"
            );
            Ok(appended)
        }
        Err(source) if source.kind() == io::ErrorKind::NotFound => {
            let content = scaffold(destination);
            if !dry_run {
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent).map_err(|source| GenerateError::FileWrite {
                        path: path.to_path_buf(),
                        source,
                    })?;
                }
                write_file(path, &content)?;
            }
            tracing::info!(path = %path.display(), dry_run, "created rule file scaffold");
            Ok(content)
        }
        Err(source) => Err(GenerateError::FileRead {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Replaces the generated region of `content` with `block`.
///
/// The region runs from just after the start marker line to just before the
/// end marker; the end marker and everything after it (including trailing
/// hand-written content) is preserved as-is. Both markers are located by
/// first occurrence. A missing or misordered marker means the file is corrupt
/// and the caller must abort instead of repairing it silently.
pub fn replace_generated_block(
    content: &str,
    block: &str,
) -> std::result::Result<String, MarkerError> {
    let start = content.find(AUTO_START).ok_or(MarkerError)?;
    let end = content.find(AUTO_END).ok_or(MarkerError)?;
    if end < start {
        return Err(MarkerError);
    }

    let before = &content[..start + AUTO_START.len()];
    let after = &content[end..];
    Ok(format!("{before}\n{block}\n{after}"))
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content).map_err(|source| GenerateError::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn replace_preserves_surrounding_bytes() {
        let content = format!(
            "# DE entry rules\nchecklist = [\"passport\"]\n\n{AUTO_START}\nold block\n{AUTO_END}\n# trailing notes\n"
        );
        let merged = replace_generated_block(&content, "[matrix]\nFR = { category = \"eta\" }")
            .expect("merge");

        assert!(merged.starts_with("# DE entry rules\nchecklist = [\"passport\"]\n\n"));
        assert!(merged.ends_with(format!("{AUTO_END}\n# trailing notes\n").as_str()));
        assert!(merged.contains("FR = { category = \"eta\" }"));
        assert!(!merged.contains("old block"));
    }

    #[test]
    fn replace_fails_without_markers() {
        assert_eq!(
            replace_generated_block("no markers here", "[matrix]"),
            Err(MarkerError)
        );
        assert_eq!(
            replace_generated_block(&format!("{AUTO_START}\nonly start"), "[matrix]"),
            Err(MarkerError)
        );
    }

    #[test]
    fn replace_fails_on_misordered_markers() {
        let content = format!("{AUTO_END}\nsomething\n{AUTO_START}\n");
        assert_eq!(
            replace_generated_block(&content, "[matrix]"),
            Err(MarkerError)
        );
    }

    #[test]
    fn ensure_creates_scaffold_for_missing_file() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("US").join("rules.toml");

        let content = ensure_markers(&path, "US", false).expect("ensure");

        assert_eq!(content, fs::read_to_string(&path).expect("read back"));
        assert!(content.starts_with("# US entry rules\n"));
        assert!(content.contains("checklist = []"));
        assert!(content.contains(AUTO_START));
        assert!(content.contains(AUTO_END));
    }

    #[test]
    fn ensure_under_dry_run_synthesizes_without_writing() {
        let dir = TempDir::new().expect("temp dir");
        let missing = dir.path().join("US").join("rules.toml");

        let content = ensure_markers(&missing, "US", true).expect("ensure");
        assert_eq!(content, scaffold("US"));
        assert!(!missing.exists(), "dry run created a scaffold file");

        let markerless = dir.path().join("rules.toml");
        let seed = "# FR entry rules\n\nchecklist = [\"ticket\"]\n";
        fs::write(&markerless, seed).expect("seed file");

        let content = ensure_markers(&markerless, "FR", true).expect("ensure");
        assert!(content.contains(AUTO_START));
        assert_eq!(
            fs::read_to_string(&markerless).expect("read back"),
            seed,
            "dry run appended a block on disk"
        );
    }

    #[test]
    fn ensure_appends_block_when_markers_are_missing() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("rules.toml");
        fs::write(&path, "# FR entry rules\n\nchecklist = [\"ticket\"]\n").expect("seed file");

        let content = ensure_markers(&path, "FR", false).expect("ensure");

        assert!(content.starts_with("# FR entry rules\n\nchecklist = [\"ticket\"]\n\n"));
        assert!(content.ends_with(format!("{AUTO_START}\n[matrix]\n{AUTO_END}\n").as_str()));
        assert_eq!(content, fs::read_to_string(&path).expect("read back"));
    }

    #[test]
    fn ensure_leaves_well_formed_files_untouched() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("rules.toml");
        let original = scaffold("JP");
        fs::write(&path, &original).expect("seed file");

        let content = ensure_markers(&path, "JP", false).expect("ensure");
        assert_eq!(content, original);
    }
}
