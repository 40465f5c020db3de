//! Error types
//!
//! Ranking never fails; only dictionary loading and configuration do.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while setting up a pipeline
#[derive(Debug, Error)]
pub enum TextRankError {
    /// A dictionary file could not be read
    #[error("failed to read dictionary {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A dictionary line could not be parsed
    #[error("malformed dictionary {} at line {}: {}", .path.display(), .line, .reason)]
    Dictionary {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    /// A configuration value is out of range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A JSON configuration document failed to parse
    #[error("configuration parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, TextRankError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dictionary_error_display() {
        let err = TextRankError::Dictionary {
            path: PathBuf::from("dict.txt"),
            line: 3,
            reason: "frequency `abc` is not an integer".to_string(),
        };

        let msg = err.to_string();
        assert!(msg.contains("dict.txt"));
        assert!(msg.contains("line 3"));
    }

    #[test]
    fn test_io_error_keeps_source() {
        let err = TextRankError::Io {
            path: PathBuf::from("missing.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };

        assert!(std::error::Error::source(&err).is_some());
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_json_error_conversion() {
        let parse: std::result::Result<serde_json::Value, _> = serde_json::from_str("{");
        let err: TextRankError = parse.unwrap_err().into();
        assert!(matches!(err, TextRankError::Json(_)));
    }
}
