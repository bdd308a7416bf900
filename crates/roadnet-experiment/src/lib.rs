//! Experiment collaborators for the RoadNet routing comparison.
//!
//! This crate consumes the core in `roadnet-graph` and provides the glue
//! around it:
//!
//! - [`generator`]: seeded random road-network generation
//! - [`metrics`]: route metrics recording and CSV export
//! - [`runner`]: batch comparison of the static and adaptive routers

pub mod generator;
pub mod metrics;
pub mod runner;

pub use generator::{GeneratorConfig, GraphGenerator};
pub use metrics::{ComparisonRecord, MetricsLogger, RouteRecord};
pub use runner::{ExperimentConfig, ExperimentRunner};

/// Experiment error types.
#[derive(Debug, thiserror::Error)]
pub enum ExperimentError {
    /// IO error while writing results.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Graph construction error.
    #[error("graph error: {0}")]
    Graph(#[from] roadnet_graph::GraphError),

    /// Generated graph has too few nodes to pick two endpoints.
    #[error("graph has {0} nodes, need at least 2")]
    TooFewNodes(usize),
}

/// Result type for experiment operations.
pub type Result<T> = std::result::Result<T, ExperimentError>;
