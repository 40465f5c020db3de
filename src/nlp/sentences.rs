//! Sentence splitting

use rustc_hash::FxHashSet;

/// Split text into distinct sentences
///
/// Sentences end at any of `stops`. Surrounding whitespace is trimmed and
/// empty fragments are dropped. A sentence repeated later in the text is
/// kept only at its first occurrence, so the index of each returned
/// sentence is its position among the distinct sentences.
pub fn split_sentences(text: &str, stops: &[char]) -> Vec<String> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut sentences = Vec::new();

    for fragment in text.split(|c: char| stops.contains(&c)) {
        let fragment = fragment.trim();
        if fragment.is_empty() || !seen.insert(fragment) {
            continue;
        }
        sentences.push(fragment.to_string());
    }

    sentences
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DEFAULT_SENTENCE_STOPS;

    #[test]
    fn test_split_on_cjk_punctuation_and_newlines() {
        let sentences = split_sentences("今天天气很好。我们去公园！你去吗？\n好的", DEFAULT_SENTENCE_STOPS);

        assert_eq!(sentences, vec!["今天天气很好", "我们去公园", "你去吗", "好的"]);
    }

    #[test]
    fn test_duplicates_keep_first_position() {
        let sentences = split_sentences("甲。乙。甲。丙", DEFAULT_SENTENCE_STOPS);
        assert_eq!(sentences, vec!["甲", "乙", "丙"]);
    }

    #[test]
    fn test_empty_fragments_dropped() {
        let sentences = split_sentences("。。\r\n  。", DEFAULT_SENTENCE_STOPS);
        assert!(sentences.is_empty());
    }

    #[test]
    fn test_custom_stops() {
        let sentences = split_sentences("One. Two! Three", &['.', '!']);
        assert_eq!(sentences, vec!["One", "Two", "Three"]);
    }
}
