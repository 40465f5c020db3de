//! Sentence word sets and lexical similarity

use crate::types::TaggedToken;
use rustc_hash::FxHashSet;

/// The distinct words of a sentence
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WordSet {
    words: FxHashSet<String>,
}

impl WordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect token texts, skipping tokens tagged with an excluded POS
    pub fn from_tokens<I>(tokens: I, excluded_pos: &FxHashSet<String>) -> Self
    where
        I: IntoIterator<Item = TaggedToken>,
    {
        let words = tokens
            .into_iter()
            .filter(|t| !excluded_pos.contains(&t.pos))
            .map(|t| t.text)
            .collect();
        Self { words }
    }

    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        self.words.insert(word.into())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of words shared with `other`
    pub fn intersection_len(&self, other: &WordSet) -> usize {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small.words.iter().filter(|w| large.words.contains(*w)).count()
    }

    /// `|A ∩ B| / (ln|A| + ln|B|)`
    ///
    /// `None` when the measure is undefined: either set is empty, or both
    /// hold a single word so the denominator is zero.
    pub fn similarity(&self, other: &WordSet) -> Option<f64> {
        if self.is_empty() || other.is_empty() {
            return None;
        }

        let denominator = (self.len() as f64).ln() + (other.len() as f64).ln();
        if denominator == 0.0 {
            return None;
        }

        Some(self.intersection_len(other) as f64 / denominator)
    }
}

impl<S: Into<String>> FromIterator<S> for WordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}
