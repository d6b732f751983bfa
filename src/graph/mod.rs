//! Graph construction and representation
//!
//! This module provides TF-IDF weighting, similarity graph building and
//! compact storage for the sentence centrality graph.

pub mod builder;
pub mod csr;
pub mod tfidf;
