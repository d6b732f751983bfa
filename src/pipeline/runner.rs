//! Summarization pipeline orchestrator
//!
//! [`Summarizer`] drives the whole run: validate the request, short-circuit
//! documents already within budget, tokenize, then rank and select. Long
//! documents are split into character-bounded chunks that are ranked in
//! parallel under proportional budgets, and the concatenated survivors go
//! through one more ranking pass at the full budget.
//!
//! Ranking failures never surface as errors. A document that cannot be
//! ranked degrades to its leading sentences and says so through the
//! `method` field of the result. Only request validation and deadline
//! expiry produce an `Err`.

use crate::chunk::planner::ChunkPlanner;
use crate::errors::{Result, SummarizeError};
use crate::graph::builder::SimilarityGraphBuilder;
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::{count_words, normalize_whitespace, SentenceTokenizer};
use crate::pagerank::standard::StandardPageRank;
use crate::pipeline::fallback::{first_sentences, DegradeReason};
use crate::pipeline::selector::BudgetSelector;
use crate::types::{Sentence, SummarizeRequest, SummarizerConfig, SummaryMethod, SummaryResult};
use rayon::prelude::*;
use std::time::Instant;
use tracing::{debug, debug_span, warn};

/// Wall-clock cutoff for one summarization run
///
/// Checked at stage boundaries and between chunk passes. Expiry abandons
/// the run with no partial result.
#[derive(Debug, Clone, Copy, Default)]
pub struct Deadline(Option<Instant>);

impl Deadline {
    /// No cutoff
    pub fn none() -> Self {
        Self(None)
    }

    /// Cut off at the given instant
    pub fn at(at: Instant) -> Self {
        Self(Some(at))
    }

    /// Whether the cutoff has passed
    pub fn expired(&self) -> bool {
        self.0.is_some_and(|at| Instant::now() >= at)
    }
}

/// Why a ranking stage produced no selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StageFailure {
    /// The deadline expired mid-run
    Deadline,
    /// Ranking is not applicable; degrade to the fallback selection
    Degraded(DegradeReason),
}

type StageResult<T> = std::result::Result<T, StageFailure>;

/// Extractive summarizer with chunked multi-pass ranking
///
/// Construction loads the stopword list and freezes all tunables, so one
/// instance can serve many documents, including concurrently.
///
/// ```
/// use rapid_lexrank::Summarizer;
///
/// let summarizer = Summarizer::new();
/// let result = summarizer.summarize("A note that fits the budget.", 30)?;
/// assert_eq!(result.method.as_str(), "original");
/// # Ok::<(), rapid_lexrank::SummarizeError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Summarizer {
    config: SummarizerConfig,
    tokenizer: SentenceTokenizer,
    graph_builder: SimilarityGraphBuilder,
    ranker: StandardPageRank,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Summarizer {
    /// Create a summarizer with the default configuration
    pub fn new() -> Self {
        Self::from_config_unchecked(SummarizerConfig::default())
    }

    /// Create a summarizer from a validated configuration
    pub fn with_config(config: SummarizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_config_unchecked(config))
    }

    fn from_config_unchecked(config: SummarizerConfig) -> Self {
        let stopwords = StopwordFilter::with_additional(&config.language, &config.extra_stopwords);
        let tokenizer = SentenceTokenizer::new()
            .with_stopwords(stopwords)
            .with_max_sentences(config.max_sentence_count);
        let ranker = StandardPageRank::new()
            .with_damping(config.damping)
            .with_max_iterations(config.max_iterations)
            .with_threshold(config.convergence_threshold);

        Self {
            config,
            tokenizer,
            graph_builder: SimilarityGraphBuilder::new(),
            ranker,
        }
    }

    /// The active configuration
    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Summarize a document down to at most roughly `max_words` words
    ///
    /// The budget is approximate in one direction only: the sentence that
    /// crosses it is kept, so the result can overshoot by at most one
    /// sentence, and a within-budget document passes through verbatim.
    pub fn summarize(&self, text: &str, max_words: usize) -> Result<SummaryResult> {
        self.run(text, max_words, Deadline::none())
    }

    /// Summarize with a wall-clock deadline
    ///
    /// Returns [`SummarizeError::DeadlineExceeded`] if the cutoff passes
    /// before a summary is complete. No partial summary is returned.
    pub fn summarize_with_deadline(
        &self,
        text: &str,
        max_words: usize,
        deadline: Instant,
    ) -> Result<SummaryResult> {
        self.run(text, max_words, Deadline::at(deadline))
    }

    /// Summarize a deserialized request
    pub fn summarize_request(&self, request: &SummarizeRequest) -> Result<SummaryResult> {
        self.run(&request.text, request.max_words, Deadline::none())
    }

    fn run(&self, text: &str, max_words: usize, deadline: Deadline) -> Result<SummaryResult> {
        let trimmed = text.trim();
        let doc_chars = self.validate(trimmed, max_words)?;
        if deadline.expired() {
            return Err(SummarizeError::DeadlineExceeded);
        }

        // Word count of the raw document, not the possibly-capped sentence
        // set, decides the pass-through.
        let doc_words = count_words(trimmed);
        if doc_words <= max_words {
            debug!(doc_words, max_words, "document already within budget");
            return Ok(SummaryResult {
                text: normalize_whitespace(trimmed),
                word_count: doc_words,
                method: SummaryMethod::Original,
            });
        }

        let started = Instant::now();
        let sentences = {
            let _span = debug_span!("tokenize", doc_chars).entered();
            self.tokenizer.tokenize(trimmed)
        };
        debug!(
            sentences = sentences.len(),
            elapsed_micros = started.elapsed().as_micros() as u64,
            "tokenized document"
        );

        let outcome = if doc_chars <= self.config.chunk_char_target {
            self.rank_and_select(&sentences, max_words, deadline)
        } else {
            self.chunked_passes(&sentences, max_words, deadline)
        };

        match outcome {
            Ok(selected) => Ok(assemble(&selected, SummaryMethod::ChunkedExtractive)),
            Err(StageFailure::Deadline) => Err(SummarizeError::DeadlineExceeded),
            Err(StageFailure::Degraded(reason)) => {
                if deadline.expired() {
                    return Err(SummarizeError::DeadlineExceeded);
                }
                warn!(%reason, "ranking unavailable, falling back to leading sentences");
                let selected = first_sentences(&sentences, max_words);
                Ok(assemble(&selected, SummaryMethod::FallbackFirstSentences))
            }
        }
    }

    fn validate(&self, trimmed: &str, max_words: usize) -> Result<usize> {
        if trimmed.is_empty() {
            return Err(SummarizeError::EmptyText);
        }
        let len = trimmed.chars().count();
        if len > self.config.max_input_chars {
            return Err(SummarizeError::InputTooLarge {
                len,
                max: self.config.max_input_chars,
            });
        }
        if max_words < self.config.min_target_words || max_words > self.config.max_target_words {
            return Err(SummarizeError::MaxWordsOutOfRange {
                requested: max_words,
                min: self.config.min_target_words,
                max: self.config.max_target_words,
            });
        }
        Ok(len)
    }

    /// One ranking pass: similarity graph, centrality, budgeted selection
    fn rank_and_select(
        &self,
        sentences: &[Sentence],
        max_words: usize,
        deadline: Deadline,
    ) -> StageResult<Vec<Sentence>> {
        if deadline.expired() {
            return Err(StageFailure::Deadline);
        }
        if sentences.len() < 2 {
            return Err(StageFailure::Degraded(DegradeReason::TooFewSentences));
        }

        let _span = debug_span!("rank_pass", sentences = sentences.len()).entered();
        let graph = self.graph_builder.build(sentences);
        if graph.num_edges() == 0 {
            return Err(StageFailure::Degraded(DegradeReason::DegenerateGraph));
        }

        let ranking = self.ranker.run(&graph);
        if !ranking.is_usable() {
            return Err(StageFailure::Degraded(DegradeReason::UnusableRanking));
        }
        debug!(
            iterations = ranking.iterations,
            converged = ranking.converged,
            "centrality computed"
        );
        if deadline.expired() {
            return Err(StageFailure::Deadline);
        }

        Ok(BudgetSelector::new(max_words).select(sentences, &ranking.order()))
    }

    /// Chunked passes: rank each chunk in parallel under a proportional
    /// budget, then rank the concatenated survivors at the full budget
    fn chunked_passes(
        &self,
        sentences: &[Sentence],
        max_words: usize,
        deadline: Deadline,
    ) -> StageResult<Vec<Sentence>> {
        let chunks = ChunkPlanner::new(self.config.chunk_char_target).plan(sentences);
        if chunks.len() <= 1 {
            return self.rank_and_select(sentences, max_words, deadline);
        }

        let total_words: usize = chunks.iter().map(|c| c.word_count).sum();
        debug!(chunks = chunks.len(), total_words, "running chunked passes");

        let per_chunk: StageResult<Vec<Vec<Sentence>>> = chunks
            .par_iter()
            .map(|chunk| {
                let budget = proportional_budget(max_words, chunk.word_count, total_words);
                self.rank_and_select(chunk.sentences(sentences), budget, deadline)
            })
            .collect();

        let intermediate: Vec<Sentence> = per_chunk?.into_iter().flatten().collect();
        if deadline.expired() {
            return Err(StageFailure::Deadline);
        }

        self.rank_and_select(&intermediate, max_words, deadline)
    }
}

/// Word budget for one chunk, proportional to its share of the document
///
/// Rounded up and floored at one word so every chunk is represented in
/// the intermediate set.
fn proportional_budget(max_words: usize, chunk_words: usize, total_words: usize) -> usize {
    if total_words == 0 {
        return 1;
    }
    (max_words * chunk_words).div_ceil(total_words).max(1)
}

/// Join selected sentences into a result, in document order
fn assemble(sentences: &[Sentence], method: SummaryMethod) -> SummaryResult {
    let text = sentences
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");
    let word_count = sentences.iter().map(|s| s.word_count).sum();
    SummaryResult {
        text,
        word_count,
        method,
    }
}
