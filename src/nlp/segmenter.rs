//! Word segmentation and POS tagging
//!
//! The pipelines only depend on the [`Segmenter`] trait. Two implementations
//! ship with the crate: [`LexiconSegmenter`], a dictionary-backed segmenter
//! for Han text, and [`SlashTaggedSegmenter`] for text that was tagged
//! upstream as `word/tag` pairs.

use crate::errors::{Result, TextRankError};
use crate::types::TaggedToken;
use rustc_hash::FxHashMap;
use std::path::Path;
use std::sync::Arc;
use unicode_segmentation::UnicodeSegmentation;

/// Tag for tokens the segmenter could not classify
pub const UNKNOWN_TAG: &str = "x";

/// Splits text into (token, POS tag) pairs
///
/// The returned iterator must be finite. `search_mode` asks the segmenter to
/// also emit additional candidate splits where it supports them.
pub trait Segmenter {
    fn cut<'a>(
        &'a self,
        text: &'a str,
        search_mode: bool,
    ) -> Box<dyn Iterator<Item = TaggedToken> + 'a>;
}

impl<S: Segmenter + ?Sized> Segmenter for &S {
    fn cut<'a>(
        &'a self,
        text: &'a str,
        search_mode: bool,
    ) -> Box<dyn Iterator<Item = TaggedToken> + 'a> {
        (**self).cut(text, search_mode)
    }
}

impl<S: Segmenter + ?Sized> Segmenter for Arc<S> {
    fn cut<'a>(
        &'a self,
        text: &'a str,
        search_mode: bool,
    ) -> Box<dyn Iterator<Item = TaggedToken> + 'a> {
        (**self).cut(text, search_mode)
    }
}

#[derive(Debug, Clone, PartialEq)]
struct LexiconEntry {
    freq: u64,
    tag: String,
}

/// Dictionary-backed segmenter
///
/// Runs of Han ideographs are split by forward maximum matching against the
/// vocabulary. Everything else is split at Unicode word boundaries.
///
/// Dictionary files hold one entry per line: `word [freq [tag]]`. Blank lines
/// and lines starting with `#` are skipped.
#[derive(Debug, Clone, Default)]
pub struct LexiconSegmenter {
    entries: FxHashMap<String, LexiconEntry>,
    max_word_chars: usize,
}

impl LexiconSegmenter {
    /// Create a segmenter with an empty vocabulary
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a segmenter from a main dictionary file
    pub fn from_dictionary(path: impl AsRef<Path>) -> Result<Self> {
        let mut segmenter = Self::new();
        segmenter.load_dictionary(path)?;
        Ok(segmenter)
    }

    /// Replace the vocabulary with the contents of a main dictionary
    ///
    /// Every entry must carry an integer frequency. Returns the number of
    /// entries loaded. On error the current vocabulary is left untouched.
    pub fn load_dictionary(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let parsed = read_dictionary(path, true)?;

        self.entries.clear();
        self.max_word_chars = 0;
        let count = parsed.len();
        for (word, freq, tag) in parsed {
            self.add_word(word, freq.unwrap_or(1), tag);
        }

        tracing::info!(path = %path.display(), entries = count, "loaded dictionary");
        Ok(count)
    }

    /// Add the entries of a user dictionary to the vocabulary
    ///
    /// Frequencies are optional here. Existing words are overwritten.
    pub fn load_user_dictionary(&mut self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        let parsed = read_dictionary(path, false)?;

        let count = parsed.len();
        for (word, freq, tag) in parsed {
            self.add_word(word, freq.unwrap_or(1), tag);
        }

        tracing::info!(path = %path.display(), entries = count, "loaded user dictionary");
        Ok(count)
    }

    /// Add a single word to the vocabulary
    pub fn add_word(&mut self, word: impl Into<String>, freq: u64, tag: Option<String>) {
        let word = word.into();
        self.max_word_chars = self.max_word_chars.max(word.chars().count());
        let tag = tag.unwrap_or_else(|| UNKNOWN_TAG.to_string());
        self.entries.insert(word, LexiconEntry { freq, tag });
    }

    /// Number of vocabulary entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check whether a word is in the vocabulary
    pub fn contains(&self, word: &str) -> bool {
        self.entries.contains_key(word)
    }

    /// POS tag of a vocabulary word
    pub fn tag(&self, word: &str) -> Option<&str> {
        self.entries.get(word).map(|e| e.tag.as_str())
    }

    /// Frequency of a vocabulary word
    pub fn frequency(&self, word: &str) -> Option<u64> {
        self.entries.get(word).map(|e| e.freq)
    }

    fn segment(&self, text: &str, search_mode: bool) -> Vec<TaggedToken> {
        let mut tokens = Vec::new();
        let mut han_run = String::new();

        for piece in text.split_word_bounds() {
            if piece.chars().all(is_han) {
                han_run.push_str(piece);
                continue;
            }

            self.flush_han(&mut han_run, search_mode, &mut tokens);

            if piece.chars().all(char::is_whitespace) {
                continue;
            }
            tokens.push(TaggedToken::new(piece, self.tag_other(piece)));
        }
        self.flush_han(&mut han_run, search_mode, &mut tokens);

        tokens
    }

    fn flush_han(&self, run: &mut String, search_mode: bool, tokens: &mut Vec<TaggedToken>) {
        if run.is_empty() {
            return;
        }

        let chars: Vec<char> = run.chars().collect();
        let mut i = 0;
        while i < chars.len() {
            let longest = self.max_word_chars.min(chars.len() - i);
            let mut matched = None;
            for len in (2..=longest).rev() {
                let word: String = chars[i..i + len].iter().collect();
                if let Some(entry) = self.entries.get(&word) {
                    matched = Some((word, entry.tag.clone(), len));
                    break;
                }
            }

            let (word, tag, len) = matched.unwrap_or_else(|| {
                let single = chars[i].to_string();
                let tag = self.tag(&single).unwrap_or(UNKNOWN_TAG).to_string();
                (single, tag, 1)
            });

            if search_mode && len > 2 {
                self.push_sub_words(&chars[i..i + len], tokens);
            }
            tokens.push(TaggedToken::new(word, tag));
            i += len;
        }

        run.clear();
    }

    /// In-vocabulary 2- and 3-character sub-words of a longer word
    fn push_sub_words(&self, word: &[char], tokens: &mut Vec<TaggedToken>) {
        for n in 2..=3 {
            if n >= word.len() {
                break;
            }
            for start in 0..=(word.len() - n) {
                let gram: String = word[start..start + n].iter().collect();
                if let Some(entry) = self.entries.get(&gram) {
                    tokens.push(TaggedToken::new(gram, entry.tag.clone()));
                }
            }
        }
    }

    fn tag_other(&self, piece: &str) -> String {
        if let Some(tag) = self.tag(piece) {
            return tag.to_string();
        }
        if piece.chars().all(char::is_alphabetic) {
            "eng".to_string()
        } else if piece.chars().all(char::is_numeric) {
            "m".to_string()
        } else {
            UNKNOWN_TAG.to_string()
        }
    }
}

impl Segmenter for LexiconSegmenter {
    fn cut<'a>(
        &'a self,
        text: &'a str,
        search_mode: bool,
    ) -> Box<dyn Iterator<Item = TaggedToken> + 'a> {
        Box::new(self.segment(text, search_mode).into_iter())
    }
}

type DictionaryLine = (String, Option<u64>, Option<String>);

fn read_dictionary(path: &Path, require_freq: bool) -> Result<Vec<DictionaryLine>> {
    let contents = std::fs::read_to_string(path).map_err(|source| TextRankError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_dictionary(path, &contents, require_freq)
}

fn parse_dictionary(path: &Path, contents: &str, require_freq: bool) -> Result<Vec<DictionaryLine>> {
    let malformed = |line: usize, reason: String| TextRankError::Dictionary {
        path: path.to_path_buf(),
        line,
        reason,
    };

    let mut entries = Vec::new();
    for (idx, raw) in contents.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut fields = line.split_whitespace();
        let word = match fields.next() {
            Some(w) => w.to_string(),
            None => continue,
        };

        let (freq, tag) = match (fields.next(), fields.next()) {
            (None, _) if require_freq => {
                return Err(malformed(line_no, format!("missing frequency for `{word}`")));
            }
            (None, _) => (None, None),
            (Some(f), tag) => match f.parse::<u64>() {
                Ok(freq) => (Some(freq), tag),
                // `word tag` is accepted in user dictionaries
                Err(_) if !require_freq && tag.is_none() => (None, Some(f)),
                Err(_) => {
                    return Err(malformed(line_no, format!("frequency `{f}` is not an integer")));
                }
            },
        };
        let tag = tag.map(str::to_string);

        if let Some(extra) = fields.next() {
            return Err(malformed(line_no, format!("unexpected field `{extra}`")));
        }

        entries.push((word, freq, tag));
    }

    Ok(entries)
}

fn is_han(c: char) -> bool {
    matches!(c,
        '\u{3400}'..='\u{4DBF}'
        | '\u{4E00}'..='\u{9FFF}'
        | '\u{F900}'..='\u{FAFF}'
        | '\u{20000}'..='\u{2A6DF}')
}

/// Segmenter for pre-tagged text
///
/// Tokens are separated by whitespace and carry their tag after the last
/// `/`, as in `北京/ns 大学/n`. Tokens without a tag get [`UNKNOWN_TAG`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SlashTaggedSegmenter;

impl Segmenter for SlashTaggedSegmenter {
    fn cut<'a>(
        &'a self,
        text: &'a str,
        _search_mode: bool,
    ) -> Box<dyn Iterator<Item = TaggedToken> + 'a> {
        Box::new(text.split_whitespace().map(|item| match item.rsplit_once('/') {
            Some((word, tag)) if !word.is_empty() && !tag.is_empty() => {
                TaggedToken::new(word, tag)
            }
            _ => TaggedToken::new(item, UNKNOWN_TAG),
        }))
    }
}
