//! Field resolution across export record shapes
//!
//! Locates a metric value across the alias table and the two record shapes
//! (top-level field vs. nested `metrics` sub-mapping).

use serde_json::Value;

use crate::models::{LatencyMetric, Record};

/// Field name of the nested metrics sub-mapping
pub(crate) const METRICS_FIELD: &str = "metrics";

/// Get the nested `metrics` mapping, if the record carries one
pub(crate) fn nested_metrics(record: &Record) -> Option<&Record> {
    record.get(METRICS_FIELD).and_then(Value::as_object)
}

/// Look up one field name, nested `metrics` mapping first, then top level
fn lookup<'a>(record: &'a Record, name: &str) -> Option<&'a Value> {
    if let Some(value) = nested_metrics(record).and_then(|m| m.get(name)) {
        return Some(value);
    }
    record.get(name)
}

/// Resolve a latency metric's raw value within a record.
///
/// The canonical field name always wins over any alias, and nested placement
/// is preferred over top-level placement at each priority step: the canonical
/// name is tried first (nested, then top level), then each alias in its fixed
/// order with the same nested-before-top-level preference.
pub fn resolve_metric<'a>(record: &'a Record, metric: LatencyMetric) -> Option<&'a Value> {
    if let Some(value) = lookup(record, metric.name()) {
        return Some(value);
    }

    for alias in metric.aliases() {
        if let Some(value) = lookup(record, alias) {
            return Some(value);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> Record {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn test_resolve_from_nested_metrics() {
        let rec = record(json!({"metrics": {"time_to_first_token": 123.45}}));
        let value = resolve_metric(&rec, LatencyMetric::TimeToFirstToken).unwrap();
        assert_eq!(value.as_f64(), Some(123.45));
    }

    #[test]
    fn test_resolve_from_top_level() {
        let rec = record(json!({"time_to_first_token": 99.0}));
        let value = resolve_metric(&rec, LatencyMetric::TimeToFirstToken).unwrap();
        assert_eq!(value.as_f64(), Some(99.0));
    }

    #[test]
    fn test_resolve_via_alias() {
        let rec = record(json!({"metrics": {"ttft": 123.45}}));
        let value = resolve_metric(&rec, LatencyMetric::TimeToFirstToken).unwrap();
        assert_eq!(value.as_f64(), Some(123.45));

        let rec = record(json!({"itl": 12.0}));
        let value = resolve_metric(&rec, LatencyMetric::InterTokenLatency).unwrap();
        assert_eq!(value.as_f64(), Some(12.0));
    }

    #[test]
    fn test_canonical_wins_over_alias() {
        let rec = record(json!({
            "ttft": 1.0,
            "metrics": {"time_to_first_token": 2.0}
        }));
        let value = resolve_metric(&rec, LatencyMetric::TimeToFirstToken).unwrap();
        assert_eq!(value.as_f64(), Some(2.0));
    }

    #[test]
    fn test_nested_preferred_over_top_level() {
        let rec = record(json!({
            "request_latency": 1.0,
            "metrics": {"request_latency": 2.0}
        }));
        let value = resolve_metric(&rec, LatencyMetric::RequestLatency).unwrap();
        assert_eq!(value.as_f64(), Some(2.0));
    }

    #[test]
    fn test_alias_priority_order() {
        // "latency" precedes "e2e_latency" in the request_latency alias list
        let rec = record(json!({"e2e_latency": 1.0, "latency": 2.0}));
        let value = resolve_metric(&rec, LatencyMetric::RequestLatency).unwrap();
        assert_eq!(value.as_f64(), Some(2.0));
    }

    #[test]
    fn test_non_mapping_metrics_field_ignored() {
        let rec = record(json!({"metrics": 7, "time_to_first_token": 5.0}));
        let value = resolve_metric(&rec, LatencyMetric::TimeToFirstToken).unwrap();
        assert_eq!(value.as_f64(), Some(5.0));
    }

    #[test]
    fn test_absent_metric() {
        let rec = record(json!({"other": 1}));
        assert!(resolve_metric(&rec, LatencyMetric::TimeToFirstToken).is_none());
    }
}
