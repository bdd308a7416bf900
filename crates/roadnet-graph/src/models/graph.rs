//! Road-network graph store.
//!
//! The network is a directed weighted graph: intersections are nodes,
//! road segments are edges. The store is append-only — nodes and edges
//! can be added but never removed, and edge weights are fixed once
//! inserted. Live weight changes are modeled by building a replacement
//! snapshot, which preserves the read-only-during-query invariant.
//!
//! Memory layout:
//! - `labels[i]` = interned label of node `i`
//! - `index[label]` = `NodeId(i)` for label lookup
//! - `adjacency[i]` = outgoing edges of node `i`, in insertion order

use std::collections::HashMap;

use super::node::NodeId;
use crate::{GraphError, Result};

/// A directed road segment with a traversal cost.
///
/// The weight can represent distance, travel time, or any non-negative
/// cost. Edge identity is positional: parallel edges between the same
/// pair of nodes are permitted and remain distinct entries in the source
/// node's adjacency row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Source intersection.
    pub from: NodeId,
    /// Destination intersection.
    pub to: NodeId,
    /// Traversal cost (finite, >= 0).
    pub weight: f64,
}

/// Road network as a directed weighted graph.
///
/// Node labels are opaque strings supplied by the caller and interned to
/// dense [`NodeId`] indices on insertion. All per-node state (adjacency,
/// distance tables in the routing engine) lives in dense arrays indexed
/// by `NodeId`.
///
/// # Example
///
/// ```
/// use roadnet_graph::RoadGraph;
///
/// let mut graph = RoadGraph::new();
/// graph.add_edge("A", "B", 4.0)?;
/// graph.add_edge("A", "B", 2.5)?; // parallel edge, kept distinct
///
/// let a = graph.node_id("A").unwrap();
/// assert_eq!(graph.edges_from(a).len(), 2);
/// # Ok::<(), roadnet_graph::GraphError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct RoadGraph {
    labels: Vec<String>,
    index: HashMap<String, NodeId>,
    adjacency: Vec<Vec<Edge>>,
    num_edges: usize,
}

impl RoadGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an intersection, returning its ID.
    ///
    /// Idempotent: adding a label that is already present returns the
    /// existing ID and leaves the graph unchanged.
    pub fn add_node(&mut self, label: &str) -> Result<NodeId> {
        if label.is_empty() {
            return Err(GraphError::EmptyNodeLabel);
        }
        if let Some(&id) = self.index.get(label) {
            return Ok(id);
        }
        let id = NodeId::new(self.labels.len() as u32);
        self.labels.push(label.to_owned());
        self.index.insert(label.to_owned(), id);
        self.adjacency.push(Vec::new());
        Ok(id)
    }

    /// Add a directed road segment, registering both endpoints if needed.
    ///
    /// The edge is appended to `from`'s adjacency row; parallel edges are
    /// not deduplicated. Fails fast on an empty label or a negative or
    /// non-finite weight, rather than producing silently wrong routes
    /// later.
    pub fn add_edge(&mut self, from: &str, to: &str, weight: f64) -> Result<()> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight(weight));
        }
        let from = self.add_node(from)?;
        let to = self.add_node(to)?;
        self.adjacency[from.index()].push(Edge { from, to, weight });
        self.num_edges += 1;
        Ok(())
    }

    /// Number of intersections.
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of road segments.
    pub fn edge_count(&self) -> usize {
        self.num_edges
    }

    /// Check if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Iterate over all node IDs.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        (0..self.labels.len() as u32).map(NodeId::new)
    }

    /// Look up a node by label.
    pub fn node_id(&self, label: &str) -> Option<NodeId> {
        self.index.get(label).copied()
    }

    /// Label of a node, if the ID belongs to this graph.
    pub fn label(&self, node: NodeId) -> Option<&str> {
        self.labels.get(node.index()).map(String::as_str)
    }

    /// Outgoing edges of a node, in insertion order.
    ///
    /// Returns an empty slice (never an error) for nodes without outgoing
    /// edges, including IDs that are out of range for this graph.
    pub fn edges_from(&self, node: NodeId) -> &[Edge] {
        self.adjacency
            .get(node.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

impl std::fmt::Display for RoadGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.adjacency {
            for edge in row {
                writeln!(
                    f,
                    "{} -> {} ({})",
                    self.labels[edge.from.index()],
                    self.labels[edge.to.index()],
                    edge.weight
                )?;
            }
        }
        Ok(())
    }
}
