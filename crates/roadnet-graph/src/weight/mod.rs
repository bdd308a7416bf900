//! Edge weight strategies.
//!
//! A [`WeightStrategy`] computes the effective cost of traversing an edge
//! at query time. The routing engine is parameterized over this trait, so
//! the baseline and the congestion-aware router share one algorithm:
//! - [`FixedWeight`]: the stored weight, unchanged (baseline)
//! - [`JitteredWeight`]: the stored weight inflated by a random
//!   congestion factor, re-drawn on every evaluation

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::models::graph::Edge;

/// Maximum congestion markup applied by [`JitteredWeight`].
///
/// The jitter factor is drawn uniformly from `[0, JITTER_MAX)`, i.e. up
/// to a 20% inflation of the stored weight.
pub const JITTER_MAX: f64 = 0.2;

/// Policy computing the effective traversal cost of an edge at query time.
///
/// Implementations must return a non-negative cost and must not mutate
/// the edge. `&mut self` allows stateful strategies (an owned RNG); a
/// strategy instance is therefore bound to a single router and never
/// shared across concurrent queries.
pub trait WeightStrategy {
    /// Effective cost of traversing `edge` right now.
    fn edge_cost(&mut self, edge: &Edge) -> f64;
}

/// Fixed edge costs: returns the stored weight unchanged.
///
/// Deterministic; used by the static baseline router.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedWeight;

impl WeightStrategy for FixedWeight {
    fn edge_cost(&mut self, edge: &Edge) -> f64 {
        edge.weight
    }
}

/// Randomized congestion costs: `weight * (1 + r)` with `r` uniform in
/// `[0, JITTER_MAX)`.
///
/// The factor is drawn independently on EVERY evaluation — the same edge
/// can yield different costs within a single path search. This models a
/// traffic condition that shifts between decision points of one query
/// and is intentional: do not cache the factor per edge. It is a known
/// deviation from the fixed-weight precondition of textbook Dijkstra
/// (costs stay non-negative, but are not stable across relaxations), so
/// the returned path can look suboptimal under any single weight
/// assignment.
///
/// Owns its RNG, so every router instance has an independent random
/// source and seeded construction gives deterministic tests.
#[derive(Debug, Clone)]
pub struct JitteredWeight {
    rng: SmallRng,
}

impl JitteredWeight {
    /// Create a jittered strategy with an entropy-seeded RNG.
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
        }
    }

    /// Create a jittered strategy with a deterministic seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for JitteredWeight {
    fn default() -> Self {
        Self::new()
    }
}

impl WeightStrategy for JitteredWeight {
    fn edge_cost(&mut self, edge: &Edge) -> f64 {
        let congestion = 1.0 + self.rng.gen_range(0.0..JITTER_MAX);
        edge.weight * congestion
    }
}
