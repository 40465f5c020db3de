//! Extractive summarization
//!
//! Sentences become graph nodes, linked by lexical similarity of their word
//! sets. The best ranked sentences that fit the length budget are returned
//! in their original order. Graph construction is O(sentences²).

pub mod selector;
pub mod similarity;

use crate::errors::Result;
use crate::graph::builder::EdgeAccumulator;
use crate::nlp::segmenter::{LexiconSegmenter, Segmenter};
use crate::nlp::sentences::split_sentences;
use crate::types::{Sentence, SummaryConfig};
use rustc_hash::FxHashMap;
use selector::SentenceSelector;
use similarity::WordSet;
use std::path::Path;

/// TextRank extractive summarizer
#[derive(Debug, Clone)]
pub struct Summarizer<S> {
    segmenter: S,
    config: SummaryConfig,
}

impl Summarizer<LexiconSegmenter> {
    /// Load a dictionary (and optional user dictionary) into a new summarizer
    pub fn from_dictionary(
        dictionary: impl AsRef<Path>,
        user_dictionary: Option<&Path>,
    ) -> Result<Self> {
        let mut segmenter = LexiconSegmenter::from_dictionary(dictionary)?;
        if let Some(user) = user_dictionary {
            segmenter.load_user_dictionary(user)?;
        }
        Ok(Self::new(segmenter))
    }
}

impl<S: Segmenter> Summarizer<S> {
    /// Create a summarizer with the default configuration
    pub fn new(segmenter: S) -> Self {
        Self {
            segmenter,
            config: SummaryConfig::default(),
        }
    }

    /// Replace the configuration after validating it
    pub fn with_config(mut self, config: SummaryConfig) -> Result<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Swap in a different segmenter, keeping the configuration
    pub fn with_segmenter<T: Segmenter>(self, segmenter: T) -> Summarizer<T> {
        Summarizer {
            segmenter,
            config: self.config,
        }
    }

    pub fn segmenter(&self) -> &S {
        &self.segmenter
    }

    pub fn config(&self) -> &SummaryConfig {
        &self.config
    }

    /// Format a summary of at most roughly `length_budget` characters
    ///
    /// Each selected sentence is followed by the configured terminator.
    pub fn summarize(&self, text: &str, length_budget: usize) -> String {
        self.extract_summary_sentences(text, length_budget)
            .iter()
            .map(|s| format!("{}{}", s.text(), self.config.terminator))
            .collect()
    }

    /// Select summary sentences, in source order
    pub fn extract_summary_sentences(&self, text: &str, length_budget: usize) -> Vec<Sentence> {
        let ranked = self.rank_sentences(text);

        trace_stage!("select");
        let selected = SentenceSelector::new(length_budget).select(&ranked);
        tracing::debug!(
            ranked = ranked.len(),
            selected = selected.len(),
            length_budget,
            "selected summary sentences"
        );
        selected
    }

    /// Every sentence that gained at least one edge, best first
    ///
    /// Equal scores are ordered by source position.
    pub fn rank_sentences(&self, text: &str) -> Vec<Sentence> {
        let sentences = split_sentences(text, &self.config.sentence_stops);
        if sentences.is_empty() {
            return Vec::new();
        }

        let word_sets: Vec<WordSet> = {
            trace_stage!("segment");
            sentences
                .iter()
                .map(|s| {
                    WordSet::from_tokens(
                        self.segmenter.cut(s, self.config.search_mode),
                        &self.config.excluded_pos,
                    )
                })
                .collect()
        };

        let graph = {
            trace_stage!("graph");
            let mut similarities = EdgeAccumulator::new();
            for i in 0..sentences.len() {
                let start = if self.config.self_similarity { i } else { i + 1 };
                for j in start..sentences.len() {
                    match word_sets[i].similarity(&word_sets[j]) {
                        Some(sim) if sim > 0.0 => {
                            similarities.set(sentences[i].clone(), sentences[j].clone(), sim)
                        }
                        _ => {}
                    }
                }
            }
            similarities.into_graph()
        };
        tracing::debug!(
            sentences = sentences.len(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built sentence similarity graph"
        );

        let positions: FxHashMap<&str, usize> = sentences
            .iter()
            .enumerate()
            .map(|(i, s)| (s.as_str(), i))
            .collect();
        let position = |label: &String| positions.get(label.as_str()).copied().unwrap_or(usize::MAX);

        trace_stage!("rank");
        graph
            .rank_with(&self.config.rank, |a, b| position(a).cmp(&position(b)))
            .into_iter()
            .map(|r| {
                let pos = position(&r.label);
                Sentence::new(r.label, pos, r.score)
            })
            .collect()
    }
}
