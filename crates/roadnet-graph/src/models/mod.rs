//! Graph data models.
//!
//! This module provides the core data structures for representing a road
//! network:
//! - [`RoadGraph`]: interned-label directed graph with ordered adjacency
//! - [`Edge`]: directed weighted road segment
//! - [`NodeId`]: dense index identifying an intersection

pub mod graph;
pub mod node;

pub use graph::{Edge, RoadGraph};
pub use node::NodeId;
