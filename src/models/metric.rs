//! Latency metric models
//!
//! Defines the tracked latency metrics and their export-field aliases.

#![allow(dead_code)]

use serde::{Deserialize, Serialize};
use std::fmt;

/// Tracked per-request latency metrics
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LatencyMetric {
    TimeToFirstToken,
    RequestLatency,
    InterTokenLatency,
}

impl LatencyMetric {
    /// Get the canonical export field name
    pub fn name(&self) -> &'static str {
        match self {
            LatencyMetric::TimeToFirstToken => "time_to_first_token",
            LatencyMetric::RequestLatency => "request_latency",
            LatencyMetric::InterTokenLatency => "inter_token_latency",
        }
    }

    /// Get the metric display name used in report rows
    pub fn display_name(&self) -> &'static str {
        match self {
            LatencyMetric::TimeToFirstToken => "TTFT",
            LatencyMetric::RequestLatency => "Request Latency",
            LatencyMetric::InterTokenLatency => "Inter-Token Latency",
        }
    }

    /// Alternative field names exporters use for this metric, in priority order.
    ///
    /// The canonical name always wins over any alias; these are only tried
    /// after it fails to resolve.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            LatencyMetric::TimeToFirstToken => &[
                "ttft",
                "time_to_first_token_ms",
                "first_token_latency",
                "time_to_first_output_token",
            ],
            LatencyMetric::RequestLatency => &[
                "latency",
                "request_latency_ms",
                "end_to_end_latency",
                "e2e_latency",
            ],
            LatencyMetric::InterTokenLatency => &[
                "itl",
                "inter_token_latency_ms",
                "token_latency",
                "inter_chunk_latency",
            ],
        }
    }

    /// Get all tracked latency metrics, in report order
    pub fn all() -> Vec<LatencyMetric> {
        vec![
            LatencyMetric::TimeToFirstToken,
            LatencyMetric::RequestLatency,
            LatencyMetric::InterTokenLatency,
        ]
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<LatencyMetric> {
        match s.to_lowercase().as_str() {
            "time_to_first_token" | "ttft" => Some(LatencyMetric::TimeToFirstToken),
            "request_latency" | "latency" => Some(LatencyMetric::RequestLatency),
            "inter_token_latency" | "itl" => Some(LatencyMetric::InterTokenLatency),
            _ => None,
        }
    }
}

impl fmt::Display for LatencyMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
