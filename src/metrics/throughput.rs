//! Derived throughput samples
//!
//! Pairs a token-count field with a latency field per record to produce
//! tokens-per-second observations.

use serde_json::Value;

use super::normalize::unwrap_value;
use super::resolve::nested_metrics;
use crate::models::Record;

/// Token-count field candidates, in priority order
const TOKEN_COUNT_FIELDS: &[&str] = &[
    "token_count",
    "output_token_count",
    "output_tokens",
    "completion_tokens",
    "generated_tokens",
    "output_sequence_length",
];

/// Latency field candidates, in priority order (values in milliseconds)
const LATENCY_FIELDS: &[&str] = &[
    "request_latency_ms",
    "request_latency",
    "latency",
    "e2e_latency",
];

/// Find the first candidate field carrying a non-null value.
///
/// Unlike the latency resolver, each name is checked at the record's top
/// level first and only then inside the nested `metrics` mapping.
fn lookup_candidate<'a>(record: &'a Record, candidates: &[&str]) -> Option<&'a Value> {
    let metrics = nested_metrics(record);

    for name in candidates {
        if let Some(value) = record.get(*name) {
            if !value.is_null() {
                return Some(value);
            }
        }
        if let Some(value) = metrics.and_then(|m| m.get(*name)) {
            if !value.is_null() {
                return Some(value);
            }
        }
    }

    None
}

/// Derive one tokens-per-second sample per resolvable record.
///
/// A record contributes only when both a token count and a strictly positive
/// latency resolve to numbers; everything else is skipped without error, so
/// the division below never sees a zero or negative latency.
pub fn derive_throughput(records: &[Record]) -> Vec<f64> {
    let mut values = Vec::new();

    for record in records {
        let token_count = lookup_candidate(record, TOKEN_COUNT_FIELDS)
            .and_then(unwrap_value)
            .and_then(Value::as_f64);
        let latency_ms = lookup_candidate(record, LATENCY_FIELDS)
            .and_then(unwrap_value)
            .and_then(Value::as_f64);

        if let (Some(tokens), Some(latency_ms)) = (token_count, latency_ms) {
            if latency_ms > 0.0 {
                values.push(tokens / (latency_ms / 1000.0));
            }
        }
    }

    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn records(values: &[serde_json::Value]) -> Vec<Record> {
        values
            .iter()
            .map(|v| v.as_object().unwrap().clone())
            .collect()
    }

    #[test]
    fn test_basic_calculation() {
        let data = records(&[
            json!({"token_count": 100, "request_latency_ms": 1000}),
            json!({"token_count": 50, "request_latency_ms": 500}),
        ]);
        let values = derive_throughput(&data);
        assert_eq!(values, vec![100.0, 100.0]);
    }

    #[test]
    fn test_fields_inside_metrics_mapping() {
        let data = records(&[json!({
            "metrics": {"token_count": 200, "request_latency_ms": 1000}
        })]);
        let values = derive_throughput(&data);
        assert_eq!(values, vec![200.0]);
    }

    #[test]
    fn test_alternative_field_names() {
        let data = records(&[json!({"output_tokens": 150, "latency": 500})]);
        let values = derive_throughput(&data);
        assert_eq!(values, vec![300.0]);
    }

    #[test]
    fn test_wrapped_values() {
        let data = records(&[json!({
            "token_count": {"value": 100, "unit": "tokens"},
            "request_latency_ms": {"value": 500, "unit": "ms"}
        })]);
        let values = derive_throughput(&data);
        assert_eq!(values, vec![200.0]);
    }

    #[test]
    fn test_top_level_preferred_over_nested() {
        let data = records(&[json!({
            "token_count": 100,
            "request_latency_ms": 1000,
            "metrics": {"token_count": 999, "request_latency_ms": 1}
        })]);
        let values = derive_throughput(&data);
        assert_eq!(values, vec![100.0]);
    }

    #[test]
    fn test_null_values_treated_as_absent() {
        let data = records(&[json!({
            "token_count": null,
            "output_tokens": 100,
            "request_latency_ms": 1000
        })]);
        let values = derive_throughput(&data);
        assert_eq!(values, vec![100.0]);
    }

    #[test]
    fn test_missing_token_count_skipped() {
        let data = records(&[
            json!({"request_latency_ms": 1000}),
            json!({"token_count": 100, "request_latency_ms": 1000}),
        ]);
        assert_eq!(derive_throughput(&data).len(), 1);
    }

    #[test]
    fn test_missing_latency_skipped() {
        let data = records(&[
            json!({"token_count": 100}),
            json!({"token_count": 100, "request_latency_ms": 1000}),
        ]);
        assert_eq!(derive_throughput(&data).len(), 1);
    }

    #[test]
    fn test_zero_latency_skipped() {
        let data = records(&[
            json!({"token_count": 100, "request_latency_ms": 0}),
            json!({"token_count": 100, "request_latency_ms": 1000}),
        ]);
        let values = derive_throughput(&data);
        assert_eq!(values, vec![100.0]);
    }

    #[test]
    fn test_negative_latency_skipped() {
        let data = records(&[json!({"token_count": 100, "request_latency_ms": -5})]);
        assert!(derive_throughput(&data).is_empty());
    }

    #[test]
    fn test_empty_records() {
        assert!(derive_throughput(&[]).is_empty());
    }
}
