//! Graph construction and representation
//!
//! This module provides the shared weighted graph used by both the keyword
//! co-occurrence graph and the sentence similarity graph.

pub mod builder;
pub mod csr;
