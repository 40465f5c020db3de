//! Core types for tagged TextRank
//!
//! Token, result and configuration types shared by the keyword and
//! sentence pipelines.

use crate::errors::{Result, TextRankError};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// POS tags accepted by the keyword pipeline unless configured otherwise:
/// person, transliterated person and celebrity names, place names,
/// organization names, other proper nouns, nominal idioms and morphemes,
/// common nouns and verbal nouns.
pub const DEFAULT_KEYWORD_POS: &[&str] = &[
    "nr", "nrf", "nrfg", "ns", "nsf", "nt", "nz", "nl", "ng", "n", "vn",
];

/// POS tags whose tokens are left out of a sentence's word set
pub const DEFAULT_SUMMARY_EXCLUDED_POS: &[&str] = &["ns", "n", "vn", "v"];

/// Characters that end a sentence
pub const DEFAULT_SENTENCE_STOPS: &[char] = &['。', '！', '？', '\n', '\r'];

/// A token produced by a [`Segmenter`](crate::nlp::segmenter::Segmenter)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaggedToken {
    /// Surface text
    pub text: String,
    /// Part-of-speech tag
    pub pos: String,
}

impl TaggedToken {
    pub fn new(text: impl Into<String>, pos: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            pos: pos.into(),
        }
    }

    /// Length of the token text in Unicode scalar values
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// A ranked keyword
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Keyword {
    /// Keyword text
    pub text: String,
    /// Normalized rank score
    pub score: f64,
}

impl Keyword {
    pub fn new(text: impl Into<String>, score: f64) -> Self {
        Self {
            text: text.into(),
            score,
        }
    }
}

/// A sentence selected for an extractive summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    pub(crate) text: String,
    pub(crate) position: usize,
    pub(crate) score: f64,
}

impl Sentence {
    pub fn new(text: impl Into<String>, position: usize, score: f64) -> Self {
        Self {
            text: text.into(),
            position,
            score,
        }
    }

    /// The sentence text, without its terminator
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Index of the sentence among the distinct sentences of the source text
    pub fn position(&self) -> usize {
        self.position
    }

    /// Normalized rank score
    pub fn score(&self) -> f64 {
        self.score
    }

    /// Length of the sentence text in Unicode scalar values
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Power iteration settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankConfig {
    /// Damping factor
    pub damping: f64,
    /// Number of sweeps over the node set
    pub iterations: usize,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            iterations: 10,
        }
    }
}

impl RankConfig {
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.damping) {
            return Err(TextRankError::InvalidConfig(format!(
                "damping must be within [0, 1], got {}",
                self.damping
            )));
        }
        if self.iterations == 0 {
            return Err(TextRankError::InvalidConfig(
                "iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Keyword pipeline configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordConfig {
    /// POS tags eligible as graph nodes
    pub allowed_pos: FxHashSet<String>,
    /// Minimum length, in characters, of the first token of a pair
    pub min_word_length: usize,
    /// Co-occurrence window span (exclusive)
    pub window: usize,
    /// Maximum number of keywords returned; `0` returns all
    pub top_k: usize,
    /// Passed through to the segmenter
    pub search_mode: bool,
    pub rank: RankConfig,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self {
            allowed_pos: pos_set(DEFAULT_KEYWORD_POS),
            min_word_length: 2,
            window: 5,
            top_k: 0,
            search_mode: true,
            rank: RankConfig::default(),
        }
    }
}

impl KeywordConfig {
    /// Parse and validate a JSON configuration document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.window == 0 {
            return Err(TextRankError::InvalidConfig(
                "window must be at least 1".to_string(),
            ));
        }
        self.rank.validate()
    }

    /// Replace the allowed POS tags
    pub fn with_allowed_pos<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_pos = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    pub fn with_min_word_length(mut self, min_word_length: usize) -> Self {
        self.min_word_length = min_word_length;
        self
    }
}

/// Sentence pipeline configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryConfig {
    /// POS tags whose tokens are left out of sentence word sets
    pub excluded_pos: FxHashSet<String>,
    /// Characters that split the text into sentences
    pub sentence_stops: Vec<char>,
    /// Appended to every sentence of a formatted summary
    pub terminator: String,
    /// Add an edge from each sentence to itself
    pub self_similarity: bool,
    /// Passed through to the segmenter
    pub search_mode: bool,
    pub rank: RankConfig,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            excluded_pos: pos_set(DEFAULT_SUMMARY_EXCLUDED_POS),
            sentence_stops: DEFAULT_SENTENCE_STOPS.to_vec(),
            terminator: "。".to_string(),
            self_similarity: false,
            search_mode: true,
            rank: RankConfig::default(),
        }
    }
}

impl SummaryConfig {
    /// Parse and validate a JSON configuration document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.sentence_stops.is_empty() {
            return Err(TextRankError::InvalidConfig(
                "sentence_stops must not be empty".to_string(),
            ));
        }
        self.rank.validate()
    }

    /// Replace the excluded POS tags
    pub fn with_excluded_pos<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_pos = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_self_similarity(mut self, enabled: bool) -> Self {
        self.self_similarity = enabled;
        self
    }
}

fn pos_set(tags: &[&str]) -> FxHashSet<String> {
    tags.iter().map(|t| t.to_string()).collect()
}
