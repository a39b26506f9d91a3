//! Artifact discovery and loading
//!
//! Locates the newest result directory under the artifacts root, discovers
//! export files within it, and loads records from line-delimited and
//! whole-document JSON encodings.

mod discover;
mod loader;
mod locator;

pub use discover::find_export_files;
pub use loader::load_records;
pub use locator::{find_latest_run, list_runs, RunInfo};

use std::path::PathBuf;
use thiserror::Error;

/// Fatal structural-absence errors
///
/// Everything else the pipeline hits (malformed lines, missing fields,
/// degenerate sample sets) is recovered locally and never surfaces here.
#[derive(Error, Debug)]
pub enum SummaryError {
    #[error("Artifacts directory not found: {}", .0.display())]
    ArtifactsRootMissing(PathBuf),

    #[error("No run directories found under {}", .0.display())]
    NoRunDirectories(PathBuf),

    #[error("No export files found in {}", .0.display())]
    NoExportFiles(PathBuf),

    #[error("No records parsed from export files")]
    NoRecords,
}
