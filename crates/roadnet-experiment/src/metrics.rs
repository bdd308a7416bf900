//! Route metrics recording and CSV export.
//!
//! Two record shapes match the two reporting surfaces of the original
//! tool: per-route metrics (`Start,End,PathLength,TotalCost,...`) and
//! per-run router comparisons (`Run,...,CostDelta(%),TimeDelta(%)`).

use std::path::Path;

use crate::Result;

/// Metrics for a single routed query.
#[derive(Debug, Clone)]
pub struct RouteRecord {
    /// Label of the start node.
    pub start: String,
    /// Label of the end node.
    pub end: String,
    /// Number of nodes in the path (0 when no route exists).
    pub path_len: usize,
    /// Total cost under original weights (infinite when no route exists).
    pub total_cost: f64,
    /// Wall-clock time to compute the path, in milliseconds.
    pub elapsed_ms: f64,
}

/// Accumulates route metrics and exports them as CSV.
#[derive(Debug, Default)]
pub struct MetricsLogger {
    records: Vec<RouteRecord>,
}

impl MetricsLogger {
    /// Create an empty logger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one routed query.
    pub fn log(&mut self, record: RouteRecord) {
        self.records.push(record);
    }

    /// Recorded entries, in insertion order.
    pub fn records(&self) -> &[RouteRecord] {
        &self.records
    }

    /// Write all recorded metrics to a CSV file, header first.
    pub fn export_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record(["Start", "End", "PathLength", "TotalCost", "ExecutionTime(ms)"])?;
        for record in &self.records {
            writer.write_record([
                record.start.clone(),
                record.end.clone(),
                record.path_len.to_string(),
                format!("{:.2}", record.total_cost),
                format!("{:.3}", record.elapsed_ms),
            ])?;
        }
        writer.flush()?;
        Ok(())
    }
}

/// One static-vs-adaptive comparison on a generated network.
#[derive(Debug, Clone)]
pub struct ComparisonRecord {
    /// 1-based run number.
    pub run: usize,
    /// Label of the start node.
    pub start: String,
    /// Label of the end node.
    pub end: String,
    /// Static route cost under original weights.
    pub static_cost: f64,
    /// Static route wall-clock time in milliseconds.
    pub static_ms: f64,
    /// Static route length in nodes.
    pub static_len: usize,
    /// Adaptive route cost under original weights.
    pub adaptive_cost: f64,
    /// Adaptive route wall-clock time in milliseconds.
    pub adaptive_ms: f64,
    /// Adaptive route length in nodes.
    pub adaptive_len: usize,
    /// Cost change of adaptive relative to static, in percent.
    pub cost_delta_pct: f64,
    /// Time change of adaptive relative to static, in percent.
    pub time_delta_pct: f64,
}

impl ComparisonRecord {
    /// Write a batch of comparison records to a CSV file.
    pub fn write_csv<P: AsRef<Path>>(records: &[ComparisonRecord], path: P) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;
        writer.write_record([
            "Run",
            "Start",
            "End",
            "StaticCost",
            "StaticTime(ms)",
            "StaticPathLen",
            "AdaptiveCost",
            "AdaptiveTime(ms)",
            "AdaptivePathLen",
            "CostDelta(%)",
            "TimeDelta(%)",
        ])?;
        for r in records {
            writer.write_record([
                r.run.to_string(),
                r.start.clone(),
                r.end.clone(),
                format!("{:.3}", r.static_cost),
                format!("{:.3}", r.static_ms),
                r.static_len.to_string(),
                format!("{:.3}", r.adaptive_cost),
                format!("{:.3}", r.adaptive_ms),
                r.adaptive_len.to_string(),
                format!("{:.2}", r.cost_delta_pct),
                format!("{:.2}", r.time_delta_pct),
            ])?;
        }
        writer.flush()?;
        Ok(())
    }
}
