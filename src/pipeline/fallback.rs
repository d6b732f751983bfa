//! Lead-sentence fallback
//!
//! When ranking cannot run, the summary degrades to the opening
//! sentences of the document under the same word budget.

use crate::types::Sentence;

/// Why a ranking pass could not produce a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegradeReason {
    /// Fewer than two sentences to rank
    TooFewSentences,
    /// The similarity graph had no edges
    DegenerateGraph,
    /// Centrality scores were not finite or all zero
    UnusableRanking,
}

impl std::fmt::Display for DegradeReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            DegradeReason::TooFewSentences => "too-few-sentences",
            DegradeReason::DegenerateGraph => "degenerate-graph",
            DegradeReason::UnusableRanking => "unusable-ranking",
        };
        f.write_str(label)
    }
}

/// Take leading sentences until the word budget is reached
///
/// Mirrors the budget rule of ranked selection: at least one sentence,
/// and the sentence that crosses the budget is kept.
pub fn first_sentences(sentences: &[Sentence], max_words: usize) -> Vec<Sentence> {
    let budget = max_words.max(1);
    let mut selected = Vec::new();
    let mut words = 0;

    for sentence in sentences {
        if words >= budget {
            break;
        }
        words += sentence.word_count;
        selected.push(sentence.clone());
    }

    selected
}
