//! # rapid_lexrank
//!
//! A fast extractive summarizer built on sentence centrality.
//!
//! Documents are split into sentences, connected by TF-IDF cosine
//! similarity, and ranked with PageRank; the highest-ranked sentences are
//! returned in document order under a word budget. Long documents run
//! through chunked ranking passes in parallel before a final pass picks
//! the summary.
//!
//! ## Features
//!
//! - **Bounded**: character, sentence and word-budget limits are enforced
//!   up front, and a wall-clock deadline can cancel a run
//! - **Deterministic**: the same input and configuration always produce
//!   the same summary
//! - **Degrades, never panics**: documents that cannot be ranked fall
//!   back to their leading sentences and say so in the result
//!
//! ```
//! use rapid_lexrank::{Summarizer, SummaryMethod};
//!
//! let summarizer = Summarizer::new();
//! let result = summarizer.summarize("A short note already under budget.", 30)?;
//! assert_eq!(result.method, SummaryMethod::Original);
//! assert_eq!(result.word_count, 6);
//! # Ok::<(), rapid_lexrank::SummarizeError>(())
//! ```

pub mod chunk;
pub mod errors;
pub mod graph;
pub mod nlp;
pub mod pagerank;
pub mod pipeline;
pub mod types;

// Re-export commonly used types
pub use errors::{Result, SummarizeError};
pub use types::{
    Sentence, SummarizeRequest, SummarizerConfig, SummaryMethod, SummaryResult, DEFAULT_MAX_WORDS,
};

// Re-export main functionality
pub use chunk::planner::{Chunk, ChunkPlanner};
pub use graph::{builder::SimilarityGraphBuilder, csr::CsrGraph, tfidf::TfidfModel};
pub use nlp::{stopwords::StopwordFilter, tokenizer::SentenceTokenizer};
pub use pagerank::{standard::StandardPageRank, RankResult};
pub use pipeline::runner::Summarizer;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
