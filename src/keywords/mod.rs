//! Keyword extraction
//!
//! Builds a co-occurrence graph over segmented tokens and ranks it.

pub mod cooccurrence;

use crate::errors::Result;
use crate::nlp::segmenter::{LexiconSegmenter, Segmenter};
use crate::types::{Keyword, KeywordConfig, TaggedToken};
use cooccurrence::{build_cooccurrence_graph, EdgeStrategy, PosFiltered, Unfiltered};
use rustc_hash::FxHashSet;
use std::path::Path;

/// TextRank keyword extractor
#[derive(Debug, Clone)]
pub struct KeywordExtractor<S> {
    segmenter: S,
    config: KeywordConfig,
}

impl KeywordExtractor<LexiconSegmenter> {
    /// Load a dictionary (and optional user dictionary) into a new extractor
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

impl<S: Segmenter> KeywordExtractor<S> {
    /// Create an extractor with the default configuration
    pub fn new(segmenter: S) -> Self {
        Self {
            segmenter,
            config: KeywordConfig::default(),
        }
    }

    /// Replace the configuration after validating it
    pub fn with_config(mut self, config: KeywordConfig) -> Result<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Swap in a different segmenter, keeping the configuration
    pub fn with_segmenter<T: Segmenter>(self, segmenter: T) -> KeywordExtractor<T> {
        KeywordExtractor {
            segmenter,
            config: self.config,
        }
    }

    pub fn segmenter(&self) -> &S {
        &self.segmenter
    }

    pub fn config(&self) -> &KeywordConfig {
        &self.config
    }

    /// Extract keywords using the configured POS tags and `top_k`
    pub fn extract(&self, text: &str) -> Vec<Keyword> {
        let strategy = PosFiltered::new(&self.config.allowed_pos, self.config.min_word_length);
        self.rank_with_strategy(text, self.config.top_k, &strategy)
    }

    /// Extract at most `top_k` keywords (`0` for all) using the configured POS tags
    pub fn extract_keywords(&self, text: &str, top_k: usize) -> Vec<Keyword> {
        let strategy = PosFiltered::new(&self.config.allowed_pos, self.config.min_word_length);
        self.rank_with_strategy(text, top_k, &strategy)
    }

    /// Extract at most `top_k` keywords (`0` for all) restricted to `allowed_pos`
    pub fn text_rank_with_pos<I, T>(&self, text: &str, top_k: usize, allowed_pos: I) -> Vec<Keyword>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let allowed: FxHashSet<String> = allowed_pos.into_iter().map(Into::into).collect();
        let strategy = PosFiltered::new(&allowed, self.config.min_word_length);
        self.rank_with_strategy(text, top_k, &strategy)
    }

    /// All keywords, ranked
    pub fn text_rank(&self, text: &str) -> Vec<Keyword> {
        self.extract_keywords(text, 0)
    }

    /// The `top_k` highest ranked keywords
    pub fn top_text_rank(&self, text: &str, top_k: usize) -> Vec<Keyword> {
        self.extract_keywords(text, top_k)
    }

    /// Rank every token without POS or length filtering
    ///
    /// Meant for document fingerprinting such as SimHash, where function
    /// words still carry signal.
    pub fn sim_hash_rank(&self, text: &str) -> Vec<Keyword> {
        self.rank_with_strategy(text, 0, &Unfiltered)
    }

    /// Rank tokens paired by an arbitrary strategy
    pub fn rank_with_strategy<E: EdgeStrategy + ?Sized>(
        &self,
        text: &str,
        top_k: usize,
        strategy: &E,
    ) -> Vec<Keyword> {
        let tokens: Vec<TaggedToken> = {
            trace_stage!("segment");
            self.segmenter.cut(text, self.config.search_mode).collect()
        };

        let graph = {
            trace_stage!("graph");
            build_cooccurrence_graph(&tokens, self.config.window, strategy)
        };
        tracing::debug!(
            tokens = tokens.len(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built co-occurrence graph"
        );

        trace_stage!("rank");
        let mut keywords: Vec<Keyword> = graph
            .rank_with(&self.config.rank, |a, b| a.cmp(b))
            .into_iter()
            .map(|r| Keyword::new(r.label, r.score))
            .collect();

        if top_k > 0 && keywords.len() > top_k {
            keywords.truncate(top_k);
        }
        keywords
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::segmenter::SlashTaggedSegmenter;

    fn extractor() -> KeywordExtractor<SlashTaggedSegmenter> {
        KeywordExtractor::new(SlashTaggedSegmenter)
    }

    const SAMPLE: &str = "北京/ns 大学/n 的/uj 学生/n 在/p 图书馆/n 学习/v 北京/ns 图书馆/n 的/uj 学生/n";

    #[test]
    fn test_two_tokens_three_cooccurrences() {
        let config = KeywordConfig::default()
            .with_min_word_length(1)
            .with_allowed_pos(["n"]);
        let extractor = extractor().with_config(config).unwrap();

        let text = "A/n B/n x/w x/w x/w x/w A/n B/n x/w x/w x/w x/w A/n B/n";
        let keywords = extractor.extract(text);

        assert_eq!(keywords.len(), 2);
        // B is visited after A within each sweep and ends on top
        assert_eq!(keywords[0].text, "B");
        assert!((keywords[0].score - 1.0).abs() < 1e-12);
        assert_eq!(keywords[1].text, "A");
        assert!((keywords[1].score - 0.9961264494011037).abs() < 1e-12);
    }

    #[test]
    fn test_default_pos_filter() {
        let keywords = extractor().text_rank(SAMPLE);
        let texts: Vec<_> = keywords.iter().map(|k| k.text.as_str()).collect();

        assert!(texts.contains(&"北京"));
        assert!(texts.contains(&"图书馆"));
        assert!(!texts.contains(&"的"));
        assert!(!texts.contains(&"学习"));
    }

    #[test]
    fn test_scores_non_increasing() {
        let keywords = extractor().text_rank(SAMPLE);
        assert!(!keywords.is_empty());
        for pair in keywords.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        assert!((keywords[0].score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_top_k_truncates() {
        let all = extractor().text_rank(SAMPLE);
        let top = extractor().top_text_rank(SAMPLE, 2);

        assert_eq!(top.len(), 2);
        assert_eq!(top, all[..2].to_vec());
    }

    #[test]
    fn test_zero_top_k_is_unbounded() {
        let all = extractor().text_rank(SAMPLE);
        let zero = extractor().extract_keywords(SAMPLE, 0);
        assert_eq!(all, zero);
    }

    #[test]
    fn test_custom_pos_list() {
        let keywords = extractor().text_rank_with_pos(SAMPLE, 0, ["v", "n"]);
        assert!(keywords.iter().any(|k| k.text == "学习"));
    }

    #[test]
    fn test_empty_text() {
        assert!(extractor().text_rank("").is_empty());
        assert!(extractor().sim_hash_rank("").is_empty());
    }

    #[test]
    fn test_everything_filtered_is_empty() {
        assert!(extractor().text_rank("的/uj 在/p 了/ul").is_empty());
    }

    #[test]
    fn test_repeated_runs_identical() {
        let first = extractor().text_rank(SAMPLE);
        let second = extractor().text_rank(SAMPLE);
        assert_eq!(first, second);
    }

    #[test]
    fn test_sim_hash_rank_includes_function_words() {
        let keywords = extractor().sim_hash_rank(SAMPLE);
        let texts: Vec<_> = keywords.iter().map(|k| k.text.as_str()).collect();

        assert!(texts.contains(&"的"));
        assert!(texts.contains(&"学习"));
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = KeywordConfig::default().with_window(0);
        assert!(extractor().with_config(config).is_err());
    }
}
