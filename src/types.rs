//! Core types shared across the summarization pipeline

use crate::errors::{Result, SummarizeError};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default word budget when a request does not specify one
pub const DEFAULT_MAX_WORDS: usize = 200;

/// A tokenized sentence
///
/// Sentences carry their zero-based document position through every stage,
/// so selections made on chunk-local or intermediate sets can always be
/// restored to document order.
#[derive(Debug, Clone, PartialEq)]
pub struct Sentence {
    /// Zero-based position in the document
    pub index: usize,
    /// Whitespace-normalized sentence text
    pub text: String,
    /// Lower-cased, stopword-filtered term counts
    pub terms: FxHashMap<String, u32>,
    /// Length of the normalized text in chars
    pub char_len: usize,
    /// Whitespace-separated words in the normalized text
    pub word_count: usize,
}

impl Sentence {
    /// Create a sentence, deriving `char_len` and `word_count` from `text`
    pub fn new(index: usize, text: String, terms: FxHashMap<String, u32>) -> Self {
        let char_len = text.chars().count();
        let word_count = text.split_whitespace().count();
        Self {
            index,
            text,
            terms,
            char_len,
            word_count,
        }
    }
}

/// Which pipeline path produced a summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SummaryMethod {
    /// The document was already within budget and passed through verbatim
    Original,
    /// Centrality ranking over one or more chunks
    ChunkedExtractive,
    /// Leading sentences, chosen because ranking was not applicable
    FallbackFirstSentences,
}

impl SummaryMethod {
    /// Stable string form, matching the serialized representation
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryMethod::Original => "original",
            SummaryMethod::ChunkedExtractive => "chunked-extractive",
            SummaryMethod::FallbackFirstSentences => "fallback-first-sentences",
        }
    }
}

impl fmt::Display for SummaryMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The final summary handed back to callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryResult {
    /// Summary text, sentences joined in document order
    #[serde(rename = "summary")]
    pub text: String,
    /// Whitespace word count of `text`
    pub word_count: usize,
    /// Pipeline path that produced the result
    pub method: SummaryMethod,
}

/// A summarization request as received from a host application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarizeRequest {
    /// Raw document text
    pub text: String,
    /// Target summary length in words
    #[serde(default = "default_max_words")]
    pub max_words: usize,
}

fn default_max_words() -> usize {
    DEFAULT_MAX_WORDS
}

/// Tunables for the summarization pipeline
///
/// Validated once at [`Summarizer::with_config`] and frozen afterwards.
///
/// [`Summarizer::with_config`]: crate::pipeline::runner::Summarizer::with_config
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Maximum accepted input length in chars
    pub max_input_chars: usize,
    /// Hard cap on tokenized sentences; excess input is silently dropped
    pub max_sentence_count: usize,
    /// Character budget per chunk, and the single-pass threshold
    pub chunk_char_target: usize,
    /// Smallest accepted `max_words`
    pub min_target_words: usize,
    /// Largest accepted `max_words`
    pub max_target_words: usize,
    /// Damping factor for the centrality iteration
    pub damping: f64,
    /// Iteration cap for the centrality iteration
    pub max_iterations: usize,
    /// L1 convergence threshold for the centrality iteration
    pub convergence_threshold: f64,
    /// Stopword language (ISO 639-1 code)
    pub language: String,
    /// Extra stopwords merged into the language list
    pub extra_stopwords: Vec<String>,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            max_input_chars: 200_000,
            max_sentence_count: 5_000,
            chunk_char_target: 20_000,
            min_target_words: 30,
            max_target_words: 800,
            damping: 0.85,
            max_iterations: 100,
            convergence_threshold: 1e-4,
            language: "en".to_string(),
            extra_stopwords: Vec::new(),
        }
    }
}

impl SummarizerConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum accepted input length in chars
    pub fn with_max_input_chars(mut self, max_input_chars: usize) -> Self {
        self.max_input_chars = max_input_chars;
        self
    }

    /// Set the sentence cap
    pub fn with_max_sentence_count(mut self, max_sentence_count: usize) -> Self {
        self.max_sentence_count = max_sentence_count;
        self
    }

    /// Set the per-chunk character budget
    pub fn with_chunk_char_target(mut self, chunk_char_target: usize) -> Self {
        self.chunk_char_target = chunk_char_target;
        self
    }

    /// Set the accepted range for `max_words`
    pub fn with_target_word_range(mut self, min: usize, max: usize) -> Self {
        self.min_target_words = min;
        self.max_target_words = max;
        self
    }

    /// Set the damping factor
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the iteration cap
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence threshold
    pub fn with_convergence_threshold(mut self, convergence_threshold: f64) -> Self {
        self.convergence_threshold = convergence_threshold;
        self
    }

    /// Set the stopword language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set extra stopwords merged into the language list
    pub fn with_extra_stopwords(mut self, extra_stopwords: Vec<String>) -> Self {
        self.extra_stopwords = extra_stopwords;
        self
    }

    /// Check the configuration for contradictions
    pub fn validate(&self) -> Result<()> {
        if self.max_input_chars == 0 {
            return Err(SummarizeError::InvalidConfig(
                "max_input_chars must be positive".to_string(),
            ));
        }
        if self.max_sentence_count == 0 {
            return Err(SummarizeError::InvalidConfig(
                "max_sentence_count must be positive".to_string(),
            ));
        }
        if self.chunk_char_target == 0 {
            return Err(SummarizeError::InvalidConfig(
                "chunk_char_target must be positive".to_string(),
            ));
        }
        if self.min_target_words == 0 || self.min_target_words > self.max_target_words {
            return Err(SummarizeError::InvalidConfig(format!(
                "target word range {}..={} is empty",
                self.min_target_words, self.max_target_words
            )));
        }
        if !(self.damping > 0.0 && self.damping < 1.0) {
            return Err(SummarizeError::InvalidConfig(format!(
                "damping must be within (0, 1), got {}",
                self.damping
            )));
        }
        if self.max_iterations == 0 {
            return Err(SummarizeError::InvalidConfig(
                "max_iterations must be positive".to_string(),
            ));
        }
        if !(self.convergence_threshold > 0.0 && self.convergence_threshold.is_finite()) {
            return Err(SummarizeError::InvalidConfig(format!(
                "convergence_threshold must be positive and finite, got {}",
                self.convergence_threshold
            )));
        }
        Ok(())
    }
}
