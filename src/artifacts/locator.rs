//! Artifact run location
//!
//! Finds the most recently modified result directory under the artifacts root.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tracing::debug;

use super::SummaryError;

/// Brief information about one artifact run directory
#[derive(Clone, Debug)]
pub struct RunInfo {
    /// Full path to the run directory
    pub path: PathBuf,
    /// Directory name
    pub name: String,
    /// Last modification time
    pub modified: DateTime<Utc>,
}

/// List run directories under the artifacts root, newest first.
///
/// Only immediate subdirectories count; plain files are ignored. Fails with
/// [`SummaryError::ArtifactsRootMissing`] when the root does not exist.
pub fn list_runs(root: &Path) -> Result<Vec<RunInfo>> {
    if !root.is_dir() {
        return Err(SummaryError::ArtifactsRootMissing(root.to_path_buf()).into());
    }

    let mut runs = Vec::new();
    for entry in
        fs::read_dir(root).with_context(|| format!("Failed to read {}", root.display()))?
    {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }

        let modified = entry
            .metadata()?
            .modified()
            .unwrap_or(SystemTime::UNIX_EPOCH);

        runs.push(RunInfo {
            path: entry.path(),
            name: entry.file_name().to_string_lossy().to_string(),
            modified: modified.into(),
        });
    }

    // Newest first; name order keeps equal timestamps stable
    runs.sort_by(|a, b| b.modified.cmp(&a.modified).then_with(|| a.name.cmp(&b.name)));

    Ok(runs)
}

/// Find the most recently modified run directory under the artifacts root.
pub fn find_latest_run(root: &Path) -> Result<PathBuf> {
    let latest = list_runs(root)?
        .into_iter()
        .next()
        .ok_or_else(|| SummaryError::NoRunDirectories(root.to_path_buf()))?;

    debug!("Latest run directory: {}", latest.path.display());
    Ok(latest.path)
}
