//! Batch comparison of the static and adaptive routers.
//!
//! Each run generates a fresh random network, picks two distinct
//! endpoints, routes them with both routers, and prices both paths with
//! the ORIGINAL edge weights so the comparison is independent of the
//! jitter that guided the adaptive search.

use std::time::Instant;

use tracing::{debug, info};

use roadnet_graph::{path_cost, AdaptiveRouter, StaticRouter};

use crate::generator::{GeneratorConfig, GraphGenerator};
use crate::metrics::ComparisonRecord;
use crate::Result;

/// Configuration for a comparison experiment.
#[derive(Debug, Clone)]
pub struct ExperimentConfig {
    /// Number of comparison runs.
    pub runs: usize,
    /// Random network parameters.
    pub generator: GeneratorConfig,
    /// Seed for graph generation, endpoint selection, and the adaptive
    /// router's congestion model. `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            runs: 100,
            generator: GeneratorConfig::default(),
            seed: None,
        }
    }
}

/// Runs static-vs-adaptive comparisons over generated networks.
#[derive(Debug)]
pub struct ExperimentRunner {
    config: ExperimentConfig,
}

impl ExperimentRunner {
    /// Create a runner with the given configuration.
    pub fn new(config: ExperimentConfig) -> Self {
        Self { config }
    }

    /// Execute all runs and collect one [`ComparisonRecord`] per run.
    pub fn run(&self) -> Result<Vec<ComparisonRecord>> {
        let mut generator = match self.config.seed {
            Some(seed) => GraphGenerator::seeded(self.config.generator.clone(), seed),
            None => GraphGenerator::new(self.config.generator.clone()),
        };

        let mut records = Vec::with_capacity(self.config.runs);
        for run in 1..=self.config.runs {
            let graph = generator.generate()?;
            let (start, end) = generator.random_pair(&graph)?;
            debug!(
                run,
                nodes = graph.node_count(),
                edges = graph.edge_count(),
                "generated network"
            );

            let mut static_router = StaticRouter::new(&graph);
            let clock = Instant::now();
            let static_path = static_router.find_shortest_path(start, end);
            let static_ms = clock.elapsed().as_secs_f64() * 1_000.0;
            let static_cost = path_cost(&graph, &static_path);

            let mut adaptive_router = match self.config.seed {
                Some(seed) => AdaptiveRouter::seeded(&graph, seed.wrapping_add(run as u64)),
                None => AdaptiveRouter::new(&graph),
            };
            let clock = Instant::now();
            let adaptive_path = adaptive_router.find_shortest_path(start, end);
            let adaptive_ms = clock.elapsed().as_secs_f64() * 1_000.0;
            let adaptive_cost = path_cost(&graph, &adaptive_path);

            let cost_delta_pct = delta_pct(static_cost, adaptive_cost);
            let time_delta_pct = delta_pct(static_ms, adaptive_ms);

            info!(run, cost_delta_pct, time_delta_pct, "comparison complete");

            records.push(ComparisonRecord {
                run,
                start: graph.label(start).unwrap_or_default().to_owned(),
                end: graph.label(end).unwrap_or_default().to_owned(),
                static_cost,
                static_ms,
                static_len: static_path.len(),
                adaptive_cost,
                adaptive_ms,
                adaptive_len: adaptive_path.len(),
                cost_delta_pct,
                time_delta_pct,
            });
        }

        Ok(records)
    }
}

/// Percentage improvement of `adaptive` relative to `baseline`.
///
/// Positive means the adaptive run was cheaper/faster. Zero when the
/// baseline is zero or either value is non-finite (both routes missing,
/// for example, prices both at infinity).
fn delta_pct(baseline: f64, adaptive: f64) -> f64 {
    if baseline > 0.0 && baseline.is_finite() && adaptive.is_finite() {
        (baseline - adaptive) / baseline * 100.0
    } else {
        0.0
    }
}
