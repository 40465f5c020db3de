//! # tagged_textrank
//!
//! TextRank keyword extraction and extractive summarization over
//! part-of-speech tagged tokens.
//!
//! Both pipelines share one weighted graph and one ranker:
//!
//! - [`KeywordExtractor`] links tokens that co-occur within a window and
//!   returns the highest ranked ones.
//! - [`Summarizer`] links sentences by word overlap and returns the highest
//!   ranked sentences that fit a length budget, in source order.
//!
//! Tokenization is supplied through the [`Segmenter`] trait.
//! [`LexiconSegmenter`] is a dictionary-backed implementation for Han text.
//!
//! ```rust,ignore
//! use tagged_textrank::{KeywordExtractor, Summarizer};
//!
//! let keywords = KeywordExtractor::from_dictionary("dict.txt", None)?;
//! for kw in keywords.top_text_rank(text, 5) {
//!     println!("{} {:.4}", kw.text, kw.score);
//! }
//!
//! let summarizer = Summarizer::from_dictionary("dict.txt", None)?;
//! println!("{}", summarizer.summarize(text, 120));
//! ```

/// Enter a tracing span for a pipeline stage until the end of the scope
macro_rules! trace_stage {
    ($name:expr) => {
        let _span = tracing::debug_span!("textrank_stage", stage = $name).entered();
    };
}

pub mod errors;
pub mod graph;
pub mod keywords;
pub mod nlp;
pub mod pagerank;
pub mod summarizer;
pub mod types;

// Re-export commonly used types
pub use errors::{Result, TextRankError};
pub use types::{
    Keyword, KeywordConfig, RankConfig, Sentence, SummaryConfig, TaggedToken,
    DEFAULT_KEYWORD_POS, DEFAULT_SENTENCE_STOPS, DEFAULT_SUMMARY_EXCLUDED_POS,
};

// Re-export main functionality
pub use graph::{
    builder::{EdgeAccumulator, WeightedGraph},
    csr::CsrGraph,
};
pub use keywords::{
    cooccurrence::{EdgeStrategy, PosFiltered, Unfiltered},
    KeywordExtractor,
};
pub use nlp::segmenter::{LexiconSegmenter, Segmenter, SlashTaggedSegmenter};
pub use pagerank::{standard::StandardPageRank, PageRankResult, Ranked};
pub use summarizer::{selector::SentenceSelector, similarity::WordSet, Summarizer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
