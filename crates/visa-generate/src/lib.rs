//! Visa matrix generation: folds the tidy dataset into per-destination
//! matrices and splices them into marker-delimited regions of hand-authored
//! rule files. The run is a one-shot, idempotent regenerator: unchanged
//! upstream data produces zero writes.

pub mod error;
pub mod markers;
pub mod matrix;
pub mod render;
pub mod run;

pub use error::{GenerateError, Result};
pub use markers::{
    AUTO_END, AUTO_START, MarkerError, ensure_markers, replace_generated_block, scaffold,
};
pub use matrix::group_by_destination;
pub use render::render_matrix_block;
pub use run::{DestinationOutcome, RULES_FILE_NAME, RunOptions, RunSummary, run_generation};
