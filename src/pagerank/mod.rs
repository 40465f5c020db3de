//! PageRank algorithms
//!
//! This module provides the damped power iteration shared by both pipelines,
//! plus score normalization and result ordering.

pub mod standard;

use std::cmp::Ordering;

/// Result of a PageRank computation
#[derive(Debug, Clone)]
pub struct PageRankResult {
    /// Raw scores for each node (indexed by CSR node ID)
    pub scores: Vec<f64>,
    /// Number of iterations performed
    pub iterations: usize,
    /// L1 change over the final sweep
    pub delta: f64,
}

impl PageRankResult {
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64) -> Self {
        Self {
            scores,
            iterations,
            delta,
        }
    }

    /// Get the score for a specific node
    pub fn score(&self, node: u32) -> f64 {
        self.scores.get(node as usize).copied().unwrap_or(0.0)
    }
}

/// A node label with its normalized score
#[derive(Debug, Clone, PartialEq)]
pub struct Ranked<L> {
    pub label: L,
    pub score: f64,
}

impl<L> Ranked<L> {
    pub fn new(label: L, score: f64) -> Self {
        Self { label, score }
    }
}

/// Scale raw scores as `(s - min/10) / (max - min/10)`
///
/// Only the minimum is divided by ten, so the lowest node lands slightly
/// above zero rather than at zero. When the denominator is not positive
/// every node scores `1.0`.
pub fn normalize_scores(scores: &[f64]) -> Vec<f64> {
    if scores.is_empty() {
        return Vec::new();
    }

    let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let floor = min / 10.0;
    let span = max - floor;

    if span > 0.0 {
        scores.iter().map(|s| (s - floor) / span).collect()
    } else {
        vec![1.0; scores.len()]
    }
}

/// Sort by descending score, then by `tie` on the label
pub fn sort_ranked<L, F>(ranked: &mut [Ranked<L>], tie: F)
where
    F: Fn(&L, &L) -> Ordering,
{
    ranked.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| tie(&a.label, &b.label))
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_min_divided_by_ten() {
        let normalized = normalize_scores(&[1.0, 2.0]);

        // floor = 0.1, span = 1.9
        assert!((normalized[0] - 0.9 / 1.9).abs() < 1e-12);
        assert!((normalized[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_uniform_scores() {
        let normalized = normalize_scores(&[0.5, 0.5, 0.5]);
        for score in normalized {
            assert!((score - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_normalize_zero_scores_do_not_divide_by_zero() {
        let normalized = normalize_scores(&[0.0, 0.0]);
        assert_eq!(normalized, vec![1.0, 1.0]);
    }

    #[test]
    fn test_normalize_empty() {
        assert!(normalize_scores(&[]).is_empty());
    }

    #[test]
    fn test_sort_ranked_ties_use_secondary_key() {
        let mut ranked = vec![
            Ranked::new("b", 0.5),
            Ranked::new("c", 0.9),
            Ranked::new("a", 0.5),
        ];
        sort_ranked(&mut ranked, |a, b| a.cmp(b));

        let labels: Vec<_> = ranked.iter().map(|r| r.label).collect();
        assert_eq!(labels, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_score_out_of_range() {
        let result = PageRankResult::new(vec![0.3], 1, 0.0);
        assert_eq!(result.score(0), 0.3);
        assert_eq!(result.score(5), 0.0);
    }
}
