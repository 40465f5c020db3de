//! Windowed co-occurrence graphs
//!
//! A token at position `i` is paired with every token at `j` in
//! `i + 1 .. i + window`. The [`EdgeStrategy`] decides which pairs count.

use crate::graph::builder::{EdgeAccumulator, WeightedGraph};
use crate::types::TaggedToken;
use rustc_hash::FxHashSet;

/// Decides which token pairs become co-occurrence edges
pub trait EdgeStrategy {
    /// Whether a token may start pairs at all
    fn accepts_source(&self, _source: &TaggedToken) -> bool {
        true
    }

    /// Whether `source` and a following `target` form an edge
    fn accepts_pair(&self, source: &TaggedToken, target: &TaggedToken) -> bool;
}

/// POS allow-list with a minimum length on the source token
///
/// Only the source token is length-checked; a short target still pairs
/// with a long enough source.
#[derive(Debug, Clone, Copy)]
pub struct PosFiltered<'a> {
    pub allowed_pos: &'a FxHashSet<String>,
    pub min_word_length: usize,
}

impl<'a> PosFiltered<'a> {
    pub fn new(allowed_pos: &'a FxHashSet<String>, min_word_length: usize) -> Self {
        Self {
            allowed_pos,
            min_word_length,
        }
    }
}

impl EdgeStrategy for PosFiltered<'_> {
    fn accepts_source(&self, source: &TaggedToken) -> bool {
        self.allowed_pos.contains(&source.pos)
    }

    fn accepts_pair(&self, source: &TaggedToken, target: &TaggedToken) -> bool {
        self.allowed_pos.contains(&target.pos) && source.char_len() >= self.min_word_length
    }
}

/// Every pair inside the window, regardless of tag or length
#[derive(Debug, Clone, Copy, Default)]
pub struct Unfiltered;

impl EdgeStrategy for Unfiltered {
    fn accepts_pair(&self, _source: &TaggedToken, _target: &TaggedToken) -> bool {
        true
    }
}

/// Count co-occurrences and build the keyword graph
///
/// Each accepted pair adds `1.0` to the weight of the unordered pair of
/// token texts. Cost is O(tokens × window).
pub fn build_cooccurrence_graph<S: EdgeStrategy + ?Sized>(
    tokens: &[TaggedToken],
    window: usize,
    strategy: &S,
) -> WeightedGraph<String> {
    let mut counts = EdgeAccumulator::new();

    for (i, source) in tokens.iter().enumerate() {
        if !strategy.accepts_source(source) {
            continue;
        }
        let end = std::cmp::min(i.saturating_add(window), tokens.len());
        for target in tokens.iter().take(end).skip(i + 1) {
            if strategy.accepts_pair(source, target) {
                counts.increment(source.text.clone(), target.text.clone(), 1.0);
            }
        }
    }

    counts.into_graph()
}
