//! Summary report rendering
//!
//! Formats the aggregated statistics as TSV and Markdown tables and writes
//! the two output files.

use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

use crate::metrics::{self, SummaryStats};
use crate::models::{LatencyMetric, Record};

/// Unit label for latency rows
const LATENCY_UNIT: &str = "ms";

/// Unit label for the throughput row
const THROUGHPUT_UNIT: &str = "tokens/s";

/// Literal marker for percentile columns that do not apply
const NOT_APPLICABLE: &str = "N/A";

/// TSV/Markdown column headers
const COLUMNS: [&str; 8] = [
    "metric", "p50", "p95", "p99", "avg", "unit", "count", "errors",
];

/// One rendered metric row
#[derive(Clone, Debug)]
pub struct MetricRow {
    /// Display label
    pub label: String,
    /// Percentile summary
    pub stats: SummaryStats,
    /// Unit label
    pub unit: &'static str,
    /// Number of contributing samples
    pub count: usize,
    /// Whether the percentile columns are meaningful for this row.
    ///
    /// Throughput is a whole-run rate, not a per-request distribution, so
    /// its row renders `N/A` percentiles.
    pub has_distribution: bool,
}

impl MetricRow {
    /// Format one percentile cell, honoring the distribution flag
    fn percentile_cell(&self, value: f64) -> String {
        if self.has_distribution {
            format!("{value:.2}")
        } else {
            NOT_APPLICABLE.to_string()
        }
    }
}

/// Aggregated summary for one artifact run
#[derive(Clone, Debug)]
pub struct SummaryReport {
    /// Artifact directory the records came from
    pub artifact_dir: String,
    /// Total loaded records
    pub total_records: usize,
    /// Failed records across the whole run
    pub error_count: usize,
    /// Rows with at least one sample, in report order
    pub rows: Vec<MetricRow>,
}

impl SummaryReport {
    /// Aggregate all statistics over the loaded records.
    ///
    /// Latency metrics with zero resolved samples are omitted with a
    /// diagnostic; the remaining metrics still render. The error count is
    /// computed once over the whole sequence and repeated on every row.
    pub fn build(artifact_dir: &Path, records: &[Record]) -> Self {
        let error_count = metrics::count_errors(records);
        let mut rows = Vec::new();

        for metric in LatencyMetric::all() {
            let samples = metrics::collect_latency_samples(records, metric);
            if samples.is_empty() {
                warn!("No values found for {}", metric.name());
                continue;
            }

            rows.push(MetricRow {
                label: metric.display_name().to_string(),
                stats: SummaryStats::from_samples(&samples),
                unit: LATENCY_UNIT,
                count: samples.len(),
                has_distribution: true,
            });
        }

        let throughput = metrics::derive_throughput(records);
        if throughput.is_empty() {
            warn!("No values found for tokens/sec (missing token count or request latency)");
        } else {
            rows.push(MetricRow {
                label: "Output Tokens/sec".to_string(),
                stats: SummaryStats::from_samples(&throughput),
                unit: THROUGHPUT_UNIT,
                count: throughput.len(),
                has_distribution: false,
            });
        }

        Self {
            artifact_dir: artifact_dir.display().to_string(),
            total_records: records.len(),
            error_count,
            rows,
        }
    }

    /// Render the TSV table
    pub fn to_tsv(&self) -> Result<String> {
        let mut writer = csv::WriterBuilder::new()
            .delimiter(b'\t')
            .from_writer(Vec::new());

        writer.write_record(COLUMNS)?;

        for row in &self.rows {
            let p50 = row.percentile_cell(row.stats.p50);
            let p95 = row.percentile_cell(row.stats.p95);
            let p99 = row.percentile_cell(row.stats.p99);
            let avg = format!("{:.2}", row.stats.avg);

            writer.write_record([
                row.label.as_str(),
                p50.as_str(),
                p95.as_str(),
                p99.as_str(),
                avg.as_str(),
                row.unit,
                row.count.to_string().as_str(),
                self.error_count.to_string().as_str(),
            ])?;
        }

        let bytes = writer
            .into_inner()
            .map_err(|e| anyhow::anyhow!("Failed to flush TSV writer: {e}"))?;
        String::from_utf8(bytes).context("TSV output was not valid UTF-8")
    }

    /// Render the Markdown summary
    pub fn to_markdown(&self) -> String {
        let mut output = String::new();

        writeln!(output, "# Benchmark Summary").unwrap();
        writeln!(output).unwrap();
        writeln!(output, "**Artifact Directory:** `{}`", self.artifact_dir).unwrap();
        writeln!(output, "**Total Records:** {}", self.total_records).unwrap();
        writeln!(output).unwrap();
        writeln!(output, "## Metrics").unwrap();
        writeln!(output).unwrap();
        writeln!(
            output,
            "| Metric | p50 | p95 | p99 | Avg | Unit | Count | Errors |"
        )
        .unwrap();
        writeln!(
            output,
            "|--------|-----|-----|-----|-----|------|-------|--------|"
        )
        .unwrap();

        for row in &self.rows {
            writeln!(
                output,
                "| {} | {} | {} | {} | {:.2} | {} | {} | {} |",
                row.label,
                row.percentile_cell(row.stats.p50),
                row.percentile_cell(row.stats.p95),
                row.percentile_cell(row.stats.p99),
                row.stats.avg,
                row.unit,
                row.count,
                self.error_count
            )
            .unwrap();
        }

        output
    }

    /// Write both output files and echo the TSV to stdout.
    ///
    /// Diagnostics go to the tracing side channel (stderr); stdout carries
    /// only the TSV content.
    pub fn write(&self, tsv_path: &Path, md_path: &Path) -> Result<()> {
        let tsv = self.to_tsv()?;
        fs::write(tsv_path, &tsv)
            .with_context(|| format!("Failed to write {}", tsv_path.display()))?;
        info!("Summary saved to: {}", tsv_path.display());

        fs::write(md_path, self.to_markdown())
            .with_context(|| format!("Failed to write {}", md_path.display()))?;
        info!("Markdown summary saved to: {}", md_path.display());

        println!("{tsv}");
        Ok(())
    }
}
