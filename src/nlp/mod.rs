//! Natural Language Processing components
//!
//! This module provides word segmentation, POS tagging and sentence splitting.

pub mod segmenter;
pub mod sentences;
