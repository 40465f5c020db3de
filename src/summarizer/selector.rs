//! Length-budgeted sentence selection for summarization
//!
//! Walks sentences best-first and keeps them while the running length,
//! counting one separator per sentence, stays within the budget.

use crate::types::Sentence;

/// Budget-bounded sentence selector
#[derive(Debug, Clone, Copy)]
pub struct SentenceSelector {
    /// Maximum summary length in characters
    pub length_budget: usize,
}

impl SentenceSelector {
    pub fn new(length_budget: usize) -> Self {
        Self { length_budget }
    }

    /// Select from `ranked` (best first) and return the picks in source order
    ///
    /// A sentence longer than the budget on its own is skipped. Otherwise its
    /// length plus one is added to the running total, and selection stops at
    /// the first sentence that takes the total past the budget.
    pub fn select(&self, ranked: &[Sentence]) -> Vec<Sentence> {
        let mut selected: Vec<Sentence> = Vec::new();
        let mut total = 0usize;

        for sentence in ranked {
            let len = sentence.char_len();
            if len > self.length_budget {
                continue;
            }

            total += len + 1;
            if total > self.length_budget {
                break;
            }
            selected.push(sentence.clone());
        }

        selected.sort_by_key(|s| s.position);
        selected
    }
}
