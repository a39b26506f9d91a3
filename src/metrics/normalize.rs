//! Unit normalization for resolved observations
//!
//! Converts raw export values to milliseconds using a magnitude heuristic.

use serde_json::Value;

/// Values strictly above this are taken as nanoseconds
const NANOS_LOWER_BOUND: f64 = 1_000_000_000.0;

/// Unwrap a `{value, unit}` wrapper, passing bare values through.
///
/// A wrapper lacking the `value` key yields `None`, never a default of zero.
pub fn unwrap_value(raw: &Value) -> Option<&Value> {
    match raw {
        Value::Object(map) => map.get("value"),
        other => Some(other),
    }
}

/// Normalize a resolved observation to milliseconds.
///
/// The heuristic is purely magnitude-based and stateless: values strictly
/// above 1e9 are taken as nanoseconds, values strictly below 1 as seconds,
/// everything else is already milliseconds. A declared `unit` field is
/// accepted in the wrapper but never consulted. Non-numeric values are
/// discarded.
pub fn normalize_ms(raw: &Value) -> Option<f64> {
    let value = unwrap_value(raw)?.as_f64()?;

    if value > NANOS_LOWER_BOUND {
        Some(value / 1_000_000.0)
    } else if value < 1.0 {
        Some(value * 1000.0)
    } else {
        Some(value)
    }
}
