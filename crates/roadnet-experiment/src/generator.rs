//! Random road-network generation for comparison runs.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use roadnet_graph::{NodeId, RoadGraph};

use crate::{ExperimentError, Result};

/// Configuration for the random graph generator.
///
/// Node and edge counts are drawn uniformly from the inclusive ranges;
/// edge weights are drawn uniformly from `[min_weight, max_weight)`.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Minimum number of intersections.
    pub min_nodes: usize,
    /// Maximum number of intersections.
    pub max_nodes: usize,
    /// Minimum number of edge insertion attempts.
    pub min_edges: usize,
    /// Maximum number of edge insertion attempts.
    pub max_edges: usize,
    /// Minimum edge weight.
    pub min_weight: f64,
    /// Maximum edge weight (exclusive).
    pub max_weight: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_nodes: 200,
            max_nodes: 300,
            min_edges: 500,
            max_edges: 1000,
            min_weight: 1.0,
            max_weight: 10.0,
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration with the default ranges.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the node count range.
    pub fn with_nodes(mut self, min: usize, max: usize) -> Self {
        self.min_nodes = min;
        self.max_nodes = max;
        self
    }

    /// Set the edge attempt range.
    pub fn with_edges(mut self, min: usize, max: usize) -> Self {
        self.min_edges = min;
        self.max_edges = max;
        self
    }
}

/// Seeded generator producing random road networks.
///
/// Owns its RNG so batch runs are reproducible from a single seed.
#[derive(Debug)]
pub struct GraphGenerator {
    config: GeneratorConfig,
    rng: SmallRng,
}

impl GraphGenerator {
    /// Create a generator with an entropy-seeded RNG.
    pub fn new(config: GeneratorConfig) -> Self {
        Self {
            config,
            rng: SmallRng::from_entropy(),
        }
    }

    /// Create a generator with a deterministic seed.
    pub fn seeded(config: GeneratorConfig, seed: u64) -> Self {
        Self {
            config,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Generate a random road network.
    ///
    /// Nodes are labeled `N0..N{n-1}`. Each edge attempt draws two
    /// endpoints uniformly and is skipped when they coincide, so the
    /// realized edge count can fall below the drawn attempt count.
    pub fn generate(&mut self) -> Result<RoadGraph> {
        let num_nodes = self
            .rng
            .gen_range(self.config.min_nodes..=self.config.max_nodes);
        let num_edges = self
            .rng
            .gen_range(self.config.min_edges..=self.config.max_edges);

        let mut graph = RoadGraph::new();
        for i in 0..num_nodes {
            graph.add_node(&format!("N{i}"))?;
        }

        for _ in 0..num_edges {
            let from = self.rng.gen_range(0..num_nodes);
            let to = self.rng.gen_range(0..num_nodes);
            if from != to {
                let weight = self
                    .rng
                    .gen_range(self.config.min_weight..self.config.max_weight);
                graph.add_edge(&format!("N{from}"), &format!("N{to}"), weight)?;
            }
        }

        Ok(graph)
    }

    /// Pick two distinct random endpoints from a graph.
    pub fn random_pair(&mut self, graph: &RoadGraph) -> Result<(NodeId, NodeId)> {
        let n = graph.node_count();
        if n < 2 {
            return Err(ExperimentError::TooFewNodes(n));
        }
        let start = NodeId::new(self.rng.gen_range(0..n as u32));
        let mut end = start;
        while end == start {
            end = NodeId::new(self.rng.gen_range(0..n as u32));
        }
        Ok((start, end))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_within_config_range() {
        let config = GeneratorConfig::new().with_nodes(10, 20).with_edges(15, 30);
        let mut generator = GraphGenerator::seeded(config, 1);
        for _ in 0..10 {
            let graph = generator.generate().unwrap();
            assert!((10..=20).contains(&graph.node_count()));
            // Self-loop attempts are skipped, so only the upper bound holds.
            assert!(graph.edge_count() <= 30);
        }
    }

    #[test]
    fn test_no_self_loops() {
        let config = GeneratorConfig::new().with_nodes(5, 5).with_edges(50, 50);
        let mut generator = GraphGenerator::seeded(config, 2);
        let graph = generator.generate().unwrap();
        for node in graph.nodes() {
            for edge in graph.edges_from(node) {
                assert_ne!(edge.from, edge.to);
            }
        }
    }

    #[test]
    fn test_weights_within_range() {
        let mut generator = GraphGenerator::seeded(
            GeneratorConfig::new().with_nodes(20, 20).with_edges(100, 100),
            3,
        );
        let graph = generator.generate().unwrap();
        for node in graph.nodes() {
            for edge in graph.edges_from(node) {
                assert!(edge.weight >= 1.0 && edge.weight < 10.0);
            }
        }
    }

    #[test]
    fn test_seeded_generation_deterministic() {
        let config = GeneratorConfig::new().with_nodes(10, 15).with_edges(20, 40);
        let mut a = GraphGenerator::seeded(config.clone(), 42);
        let mut b = GraphGenerator::seeded(config, 42);
        let ga = a.generate().unwrap();
        let gb = b.generate().unwrap();
        assert_eq!(ga.node_count(), gb.node_count());
        assert_eq!(ga.edge_count(), gb.edge_count());
        assert_eq!(ga.to_string(), gb.to_string());
    }

    #[test]
    fn test_random_pair_distinct() {
        let mut generator = GraphGenerator::seeded(GeneratorConfig::default(), 4);
        let graph = generator.generate().unwrap();
        for _ in 0..20 {
            let (start, end) = generator.random_pair(&graph).unwrap();
            assert_ne!(start, end);
            assert!(graph.label(start).is_some());
            assert!(graph.label(end).is_some());
        }
    }

    #[test]
    fn test_random_pair_needs_two_nodes() {
        let mut generator = GraphGenerator::seeded(GeneratorConfig::default(), 5);
        let mut graph = RoadGraph::new();
        graph.add_node("only").unwrap();
        assert!(matches!(
            generator.random_pair(&graph),
            Err(ExperimentError::TooFewNodes(1))
        ));
    }
}
