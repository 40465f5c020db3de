use std::io::Write;

use tagged_textrank::{KeywordExtractor, LexiconSegmenter, Summarizer, TextRankError};
use tempfile::NamedTempFile;

const DICTIONARY: &str = "\
# word freq tag
北京 100 ns
大学 80 n
北京大学 50 nt
学生 60 n
图书馆 40 n
学习 70 v
研究 55 vn
的 500 uj
在 300 p
";

const TEXT: &str = "北京大学的学生在图书馆学习。北京大学的学生在图书馆研究。学生在北京学习研究。";

fn write_dictionary(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_keywords_from_dictionary() {
    let dict = write_dictionary(DICTIONARY);
    let extractor = KeywordExtractor::from_dictionary(dict.path(), None).unwrap();

    let keywords = extractor.top_text_rank(TEXT, 3);
    assert_eq!(keywords.len(), 3);
    assert!((keywords[0].score - 1.0).abs() < 1e-12);

    let texts: Vec<_> = keywords.iter().map(|k| k.text.as_str()).collect();
    assert!(!texts.contains(&"的"));
    assert!(!texts.contains(&"学习"));
}

#[test]
fn test_keywords_are_deterministic() {
    let dict = write_dictionary(DICTIONARY);
    let extractor = KeywordExtractor::from_dictionary(dict.path(), None).unwrap();

    assert_eq!(extractor.text_rank(TEXT), extractor.text_rank(TEXT));
}

#[test]
fn test_user_dictionary_extends_vocabulary() {
    let dict = write_dictionary(DICTIONARY);
    let user = write_dictionary("阅览室 n\n");

    let mut segmenter = LexiconSegmenter::from_dictionary(dict.path()).unwrap();
    assert!(!segmenter.contains("阅览室"));

    let added = segmenter.load_user_dictionary(user.path()).unwrap();
    assert_eq!(added, 1);
    assert_eq!(segmenter.tag("阅览室"), Some("n"));

    let extractor = KeywordExtractor::from_dictionary(dict.path(), Some(user.path())).unwrap();
    let keywords = extractor.text_rank("学生在阅览室学习研究");
    assert!(keywords.iter().any(|k| k.text == "阅览室"));
}

#[test]
fn test_summary_from_dictionary() {
    let dict = write_dictionary(DICTIONARY);
    let summarizer = Summarizer::from_dictionary(dict.path(), None).unwrap();

    let sentences = summarizer.extract_summary_sentences(TEXT, 30);
    assert!(!sentences.is_empty());
    for pair in sentences.windows(2) {
        assert!(pair[0].position() < pair[1].position());
    }

    let summary = summarizer.summarize(TEXT, 30);
    assert!(summary.ends_with('。'));
    assert!(summary.chars().count() <= 30);
}

#[test]
fn test_empty_text_yields_empty_results() {
    let dict = write_dictionary(DICTIONARY);
    let extractor = KeywordExtractor::from_dictionary(dict.path(), None).unwrap();
    let summarizer = Summarizer::from_dictionary(dict.path(), None).unwrap();

    assert!(extractor.text_rank("").is_empty());
    assert!(summarizer.summarize("", 50).is_empty());
}

#[test]
fn test_malformed_dictionary_aborts_setup() {
    let dict = write_dictionary("北京 100 ns\n大学 lots n\n");

    match KeywordExtractor::from_dictionary(dict.path(), None) {
        Err(TextRankError::Dictionary { line, .. }) => assert_eq!(line, 2),
        other => panic!("expected dictionary error, got {other:?}"),
    }
}

#[test]
fn test_missing_dictionary_aborts_setup() {
    let result = Summarizer::from_dictionary("/nonexistent/tagged-textrank/dict.txt", None);
    assert!(matches!(result, Err(TextRankError::Io { .. })));
}
