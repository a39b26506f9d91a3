//! Percentile statistics
//!
//! Computes interpolated percentiles and the mean over numeric samples.

use serde::{Deserialize, Serialize};

/// Percentile summary over one metric's sample set
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// 50th percentile (median)
    pub p50: f64,
    /// 95th percentile
    pub p95: f64,
    /// 99th percentile
    pub p99: f64,
    /// Arithmetic mean
    pub avg: f64,
}

impl SummaryStats {
    /// Calculate statistics from unsorted samples (in milliseconds).
    ///
    /// An empty sample set yields the all-zero summary.
    pub fn from_samples(samples: &[f64]) -> Self {
        if samples.is_empty() {
            return Self::default();
        }

        let mut sorted = samples.to_vec();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let avg = sorted.iter().sum::<f64>() / sorted.len() as f64;

        Self {
            p50: percentile(&sorted, 0.50),
            p95: percentile(&sorted, 0.95),
            p99: percentile(&sorted, 0.99),
            avg,
        }
    }
}

/// Interpolated percentile over sorted samples, `p` in [0, 1].
///
/// Linear interpolation between closest ranks: `k = (n-1)·p`, `f = ⌊k⌋`;
/// an exact rank hit returns the sample, anything else blends `samples[f]`
/// and `samples[f+1]` by the fractional part.
fn percentile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }

    let k = (sorted.len() - 1) as f64 * p;
    let f = k.floor() as usize;
    let c = k - f as f64;

    if f + 1 < sorted.len() {
        sorted[f] * (1.0 - c) + sorted[f + 1] * c
    } else {
        sorted[f]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_percentiles() {
        let samples: Vec<f64> = (1..=10).map(|x| x as f64).collect();
        let stats = SummaryStats::from_samples(&samples);

        assert_eq!(stats.p50, 5.5);
        assert_eq!(stats.avg, 5.5);
    }

    #[test]
    fn test_empty_samples_all_zero() {
        let stats = SummaryStats::from_samples(&[]);

        assert_eq!(stats.p50, 0.0);
        assert_eq!(stats.p95, 0.0);
        assert_eq!(stats.p99, 0.0);
        assert_eq!(stats.avg, 0.0);
    }

    #[test]
    fn test_single_sample() {
        let stats = SummaryStats::from_samples(&[100.0]);

        assert_eq!(stats.p50, 100.0);
        assert_eq!(stats.p95, 100.0);
        assert_eq!(stats.p99, 100.0);
        assert_eq!(stats.avg, 100.0);
    }

    #[test]
    fn test_monotonicity() {
        let samples = vec![3.0, 14.0, 1.0, 50.0, 9.0, 26.0, 5.0, 35.0];
        let stats = SummaryStats::from_samples(&samples);

        assert!(stats.p50 <= stats.p95);
        assert!(stats.p95 <= stats.p99);
    }

    #[test]
    fn test_mean_independent_of_order() {
        let ascending = vec![1.0, 2.0, 3.0, 4.0];
        let shuffled = vec![3.0, 1.0, 4.0, 2.0];

        assert_eq!(
            SummaryStats::from_samples(&ascending),
            SummaryStats::from_samples(&shuffled)
        );
    }

    #[test]
    fn test_realistic_latency_sample() {
        let samples = vec![
            490.19, 500.0, 550.0, 600.0, 650.0, 700.0, 750.0, 790.01, 850.0, 991.75,
        ];
        let stats = SummaryStats::from_samples(&samples);

        assert!(stats.p50 >= 650.0 && stats.p50 <= 700.0);
        assert!(stats.p95 > 790.0);
        assert!(stats.p99 > 850.0);
        assert!(stats.avg > 650.0 && stats.avg < 700.0);
    }
}
