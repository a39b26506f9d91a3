//! Failure counting across export conventions
//!
//! Counts records flagged as failed by any of the three exporter conventions.

use serde_json::Value;

use crate::models::Record;

/// Count failed records across the whole loaded sequence.
///
/// A record counts at most once, on the first condition that holds: a truthy
/// `error` field, a `status` field other than the string `"success"`, or a
/// falsy `success` field. A record carrying none of the three fields is
/// never counted.
pub fn count_errors(records: &[Record]) -> usize {
    records.iter().filter(|record| is_failed(record)).count()
}

fn is_failed(record: &Record) -> bool {
    if let Some(error) = record.get("error") {
        if is_truthy(error) {
            return true;
        }
    }
    if let Some(status) = record.get("status") {
        if status.as_str() != Some("success") {
            return true;
        }
    }
    if let Some(success) = record.get("success") {
        if !is_truthy(success) {
            return true;
        }
    }
    false
}

/// JSON truthiness as the exporters use it: null, false, zero, the empty
/// string, and empty containers are falsy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|v| v != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
