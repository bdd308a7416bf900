//! Error types for the RoadNet CLI.

use thiserror::Error;

/// CLI result type alias.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error type.
#[derive(Error, Debug)]
pub enum CliError {
    /// IO error during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Graph construction error.
    #[error("graph error: {0}")]
    Graph(#[from] roadnet_graph::GraphError),

    /// Experiment or export error.
    #[error("experiment error: {0}")]
    Experiment(#[from] roadnet_experiment::ExperimentError),
}
