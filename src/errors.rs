//! Error types for the summarization pipeline
//!
//! Only validation failures and deadline expiry reach callers. Sentence-cap
//! truncation and internal ranking failures are absorbed by the pipeline
//! (silent truncation, silent fallback) and never appear here.

use thiserror::Error;

/// Convenience result alias used throughout the crate
pub type Result<T> = std::result::Result<T, SummarizeError>;

/// Errors surfaced to callers of the summarizer
#[derive(Debug, Error)]
pub enum SummarizeError {
    /// Input text is empty or only whitespace
    #[error("text is empty after trimming whitespace")]
    EmptyText,

    /// Input text exceeds the configured character limit
    #[error("input is {len} characters, the limit is {max}")]
    InputTooLarge { len: usize, max: usize },

    /// The requested word budget is outside the configured range
    #[error("max_words {requested} is outside the allowed range {min}..={max}")]
    MaxWordsOutOfRange {
        requested: usize,
        min: usize,
        max: usize,
    },

    /// Configuration failed validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The caller-supplied deadline expired before a summary was produced
    #[error("deadline exceeded before a summary was produced")]
    DeadlineExceeded,
}
