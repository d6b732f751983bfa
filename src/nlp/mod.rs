//! Natural Language Processing components
//!
//! This module provides sentence tokenization and stopword filtering.

pub mod stopwords;
pub mod tokenizer;
