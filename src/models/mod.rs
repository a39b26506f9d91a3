//! Data models for benchmark summarization
//!
//! This module contains the metric definitions used throughout the application.

mod metric;

pub use metric::LatencyMetric;

/// One parsed export record: a mapping from field name to JSON value.
///
/// Values may be bare numbers, strings, booleans, nulls, a nested `metrics`
/// mapping, or `{value, unit}` wrappers around a number.
pub type Record = serde_json::Map<String, serde_json::Value>;
