//! Metric extraction and aggregation engine
//!
//! Resolves aliased fields, normalizes units to milliseconds, and computes
//! percentile statistics over loaded export records.

mod errors;
mod normalize;
mod percentile;
mod resolve;
mod throughput;

pub use errors::count_errors;
pub use normalize::{normalize_ms, unwrap_value};
pub use percentile::SummaryStats;
pub use resolve::resolve_metric;
pub use throughput::derive_throughput;

use crate::models::{LatencyMetric, Record};

/// Extract one metric's normalized sample set (milliseconds) from all records.
///
/// Records where the metric is unresolvable, wrapped without a `value` key,
/// or non-numeric are silently excluded from the sample set.
pub fn collect_latency_samples(records: &[Record], metric: LatencyMetric) -> Vec<f64> {
    records
        .iter()
        .filter_map(|record| resolve_metric(record, metric))
        .filter_map(normalize_ms)
        .collect()
}
