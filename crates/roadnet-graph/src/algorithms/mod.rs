//! Routing algorithms.
//!
//! - [`dijkstra`]: single-source single-target shortest path with a
//!   pluggable [`WeightStrategy`](crate::weight::WeightStrategy)
//! - [`path_cost`]: original-weight evaluation of a reconstructed path

pub mod dijkstra;
pub mod path_cost;

pub use dijkstra::{shortest_path, AdaptiveRouter, Router, StaticRouter};
pub use path_cost::path_cost;
