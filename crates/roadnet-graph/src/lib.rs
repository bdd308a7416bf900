//! Road-network graph store and shortest-path routing engines.
//!
//! This crate provides the core of the RoadNet routing comparison:
//!
//! - **Graph store**: append-only directed graph with weighted edges and
//!   interned string node labels ([`RoadGraph`])
//! - **Weight strategies**: fixed baseline costs and randomized congestion
//!   jitter ([`FixedWeight`], [`JitteredWeight`])
//! - **Dijkstra engine**: single-source single-target shortest path with
//!   pluggable edge costs ([`shortest_path`])
//! - **Path cost evaluator**: original-weight cost of a reconstructed path
//!   ([`path_cost`])
//!
//! # Example
//!
//! ```
//! use roadnet_graph::{RoadGraph, StaticRouter, path_cost};
//!
//! let mut graph = RoadGraph::new();
//! graph.add_edge("A", "B", 4.0)?;
//! graph.add_edge("B", "C", 3.0)?;
//! graph.add_edge("A", "C", 10.0)?;
//!
//! let a = graph.node_id("A").unwrap();
//! let c = graph.node_id("C").unwrap();
//!
//! let mut router = StaticRouter::new(&graph);
//! let path = router.find_shortest_path(a, c);
//! assert_eq!(path_cost(&graph, &path), 7.0);
//! # Ok::<(), roadnet_graph::GraphError>(())
//! ```

pub mod algorithms;
pub mod models;
pub mod weight;

// Re-export main types
pub use algorithms::dijkstra::{shortest_path, AdaptiveRouter, Router, StaticRouter};
pub use algorithms::path_cost::path_cost;
pub use models::graph::{Edge, RoadGraph};
pub use models::node::NodeId;
pub use weight::{FixedWeight, JitteredWeight, WeightStrategy};

/// Graph construction error types.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// Node label is empty.
    #[error("node label must not be empty")]
    EmptyNodeLabel,

    /// Edge weight is negative or non-finite.
    #[error("edge weight must be finite and non-negative, got {0}")]
    InvalidWeight(f64),
}

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;
