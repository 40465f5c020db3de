//! Standard PageRank algorithm
//!
//! Damped power iteration with a fixed number of sweeps. Scores are updated
//! in place: within a sweep, a node sees the already-updated scores of every
//! node that precedes it in label order.

use super::PageRankResult;
use crate::graph::csr::CsrGraph;
use crate::types::RankConfig;

/// Standard PageRank implementation
#[derive(Debug, Clone)]
pub struct StandardPageRank {
    /// Damping factor (typically 0.85)
    pub damping: f64,
    /// Number of sweeps over the node set
    pub iterations: usize,
}

impl Default for StandardPageRank {
    fn default() -> Self {
        Self::from_config(&RankConfig::default())
    }
}

impl StandardPageRank {
    /// Create a new StandardPageRank with default settings
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &RankConfig) -> Self {
        Self {
            damping: config.damping,
            iterations: config.iterations,
        }
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the number of iterations
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Run PageRank on a graph
    ///
    /// `score[n] = (1 - d) + d * Σ w(n, m) / out(m) * score[m]`, with
    /// neighbors of zero out-weight contributing nothing.
    pub fn run<L>(&self, graph: &CsrGraph<L>) -> PageRankResult {
        let n = graph.num_nodes;
        if n == 0 {
            return PageRankResult::new(vec![], 0, 0.0);
        }

        let mut scores = vec![1.0 / n as f64; n];
        let teleport = 1.0 - self.damping;
        let mut delta = 0.0;

        for _ in 0..self.iterations {
            delta = 0.0;

            for node in 0..n {
                let mut incoming = 0.0;
                for (neighbor, weight) in graph.neighbors(node as u32) {
                    let out = graph.node_total_weight(neighbor);
                    if out > 0.0 {
                        incoming += weight / out * scores[neighbor as usize];
                    }
                }

                let updated = teleport + self.damping * incoming;
                delta += (updated - scores[node]).abs();
                scores[node] = updated;
            }
        }

        PageRankResult::new(scores, self.iterations, delta)
    }
}
