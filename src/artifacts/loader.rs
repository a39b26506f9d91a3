//! Export record loading
//!
//! Parses export files into a flat ordered record sequence, tolerating
//! per-line and per-file parse failures.

use anyhow::{Context, Result};
use serde_json::Value;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::models::Record;

/// Load all records from the candidate export files, in file-then-line order.
///
/// Files named `*.jsonl` are parsed one JSON document per non-blank line;
/// everything else is parsed as one JSON document, with a top-level array
/// flattened into one record per element. Malformed lines and unparsable
/// files are skipped with a diagnostic. Whether an empty result is fatal is
/// the caller's call.
pub fn load_records(files: &[PathBuf]) -> Result<Vec<Record>> {
    let mut records = Vec::new();

    for file in files {
        info!("Loading: {}", file.display());
        if file.extension().map(|e| e == "jsonl").unwrap_or(false) {
            load_jsonl(file, &mut records)?;
        } else {
            load_json(file, &mut records)?;
        }
    }

    Ok(records)
}

/// Parse each non-blank line independently as one JSON document
fn load_jsonl(path: &Path, records: &mut Vec<Record>) -> Result<()> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let reader = BufReader::new(file);

    for (line_no, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read {}", path.display()))?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        match serde_json::from_str::<Value>(trimmed) {
            Ok(value) => push_record(value, path, records),
            Err(e) => warn!(
                "Failed to parse line {} in {}: {}",
                line_no + 1,
                path.display(),
                e
            ),
        }
    }

    Ok(())
}

/// Parse a whole-document JSON export; a top-level array is flattened
fn load_json(path: &Path, records: &mut Vec<Record>) -> Result<()> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    match serde_json::from_str::<Value>(&content) {
        Ok(Value::Array(elements)) => {
            for element in elements {
                push_record(element, path, records);
            }
        }
        Ok(value) => push_record(value, path, records),
        Err(e) => warn!("Failed to parse {}: {}", path.display(), e),
    }

    Ok(())
}

/// Append one parsed JSON value as a record.
///
/// A record is a field mapping by contract; other JSON values are dropped
/// with a diagnostic.
fn push_record(value: Value, path: &Path, records: &mut Vec<Record>) {
    match value {
        Value::Object(map) => records.push(map),
        other => warn!("Skipping non-object value in {}: {}", path.display(), other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_jsonl_with_malformed_line() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("profile_export.jsonl");
        fs::write(
            &path,
            "{\"ttft\": 1.5}\nnot json at all\n\n{\"ttft\": 2.5}\n",
        )
        .unwrap();

        let records = load_records(&[path]).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["ttft"].as_f64(), Some(1.5));
        assert_eq!(records[1]["ttft"].as_f64(), Some(2.5));
    }

    #[test]
    fn test_json_array_flattened() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("profile_export_1.json");
        fs::write(&path, "[{\"a\": 1}, {\"a\": 2}, {\"a\": 3}]").unwrap();

        let records = load_records(&[path]).unwrap();
        assert_eq!(records.len(), 3);
    }

    #[test]
    fn test_json_single_object() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("profile_export_2.json");
        fs::write(&path, "{\"a\": 1}").unwrap();

        let records = load_records(&[path]).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_unparsable_json_file_skipped() {
        let tmp = TempDir::new().unwrap();
        let good = tmp.path().join("profile_export_1.json");
        let bad = tmp.path().join("profile_export_2.json");
        fs::write(&good, "{\"a\": 1}").unwrap();
        fs::write(&bad, "{{{{").unwrap();

        let records = load_records(&[good, bad]).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_non_object_values_dropped() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("profile_export.jsonl");
        fs::write(&path, "42\n\"text\"\n{\"a\": 1}\n").unwrap();

        let records = load_records(&[path]).unwrap();
        assert_eq!(records.len(), 1);
    }

    #[test]
    fn test_file_then_line_order_preserved() {
        let tmp = TempDir::new().unwrap();
        let jsonl = tmp.path().join("profile_export.jsonl");
        let json = tmp.path().join("profile_export_extra.json");
        fs::write(&jsonl, "{\"seq\": 1}\nbroken\n{\"seq\": 2}\n").unwrap();
        fs::write(&json, "[{\"seq\": 3}]").unwrap();

        let records = load_records(&[jsonl, json]).unwrap();
        let order: Vec<i64> = records.iter().map(|r| r["seq"].as_i64().unwrap()).collect();
        assert_eq!(order, vec![1, 2, 3]);
    }
}
