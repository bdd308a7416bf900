//! Path cost evaluation over original edge weights.
//!
//! Routers may search under adjusted (jittered) costs, but comparisons
//! between them must be fair: both paths are priced with the weights
//! stored in the graph, independent of whichever strategy produced them.

use crate::models::graph::RoadGraph;
use crate::models::node::NodeId;

/// Sum of original edge weights along a path.
///
/// For each consecutive pair the FIRST outgoing edge whose destination
/// matches the next node is charged (first-match over the ordered
/// adjacency row; this is what disambiguates parallel edges). A pair
/// with no connecting edge contributes nothing.
///
/// An empty path evaluates to `f64::INFINITY`: the canonical
/// "unreachable" cost, not zero.
pub fn path_cost(graph: &RoadGraph, path: &[NodeId]) -> f64 {
    if path.is_empty() {
        return f64::INFINITY;
    }
    let mut total = 0.0;
    for pair in path.windows(2) {
        if let Some(edge) = graph.edges_from(pair[0]).iter().find(|e| e.to == pair[1]) {
            total += edge.weight;
        }
    }
    total
}
