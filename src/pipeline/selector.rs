//! Budgeted sentence selection
//!
//! Walks a centrality ordering and keeps sentences until the word budget
//! is met, then restores document order so the output reads coherently.

use crate::types::Sentence;

/// Selects sentences by rank under a word budget
#[derive(Debug, Clone)]
pub struct BudgetSelector {
    max_words: usize,
}

impl BudgetSelector {
    /// Create a selector with the given word budget
    pub fn new(max_words: usize) -> Self {
        Self {
            max_words: max_words.max(1),
        }
    }

    /// Pick sentences in rank order until the budget is reached
    ///
    /// `order` holds positions into `sentences`, best first. At least one
    /// sentence is always taken, and the pick that crosses the budget is
    /// kept, so the result may overshoot by at most one sentence. The
    /// returned sentences are sorted back into document order.
    pub fn select(&self, sentences: &[Sentence], order: &[u32]) -> Vec<Sentence> {
        let mut selected: Vec<Sentence> = Vec::new();
        let mut words = 0;

        for &pos in order {
            if words >= self.max_words {
                break;
            }
            let Some(sentence) = sentences.get(pos as usize) else {
                continue;
            };
            words += sentence.word_count;
            selected.push(sentence.clone());
        }

        selected.sort_by_key(|s| s.index);
        selected
    }
}
