//! Export file discovery
//!
//! Finds benchmark export files within one run directory.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Conventional name of the line-delimited export file
pub const JSONL_EXPORT_NAME: &str = "profile_export.jsonl";

/// File-name prefix of whole-document JSON exports
const JSON_EXPORT_PREFIX: &str = "profile_export";

/// Find export files within a run directory.
///
/// The conventional `profile_export.jsonl` comes first when present,
/// followed by every `profile_export*.json` file sorted by name. An empty
/// result is not an error at this layer; the caller decides whether that is
/// fatal.
pub fn find_export_files(run_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    let jsonl = run_dir.join(JSONL_EXPORT_NAME);
    if jsonl.is_file() {
        files.push(jsonl);
    }

    let mut json_files = Vec::new();
    for entry in fs::read_dir(run_dir)
        .with_context(|| format!("Failed to read run directory {}", run_dir.display()))?
    {
        let path = entry?.path();
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name,
            None => continue,
        };

        if path.is_file()
            && name.starts_with(JSON_EXPORT_PREFIX)
            && path.extension().map(|e| e == "json").unwrap_or(false)
        {
            json_files.push(path);
        }
    }
    json_files.sort();
    files.extend(json_files);

    debug!(
        "Found {} export file(s) in {}",
        files.len(),
        run_dir.display()
    );
    Ok(files)
}
