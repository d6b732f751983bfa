//! TF-IDF sentence vectors
//!
//! Fits a term vocabulary and inverse document frequencies over one
//! sentence set, then produces L2-normalized sparse vectors whose dot
//! product is cosine similarity. IDF is always computed over the set being
//! compared; nothing is carried between sets, so chunk passes and the
//! second ranking pass each see their own statistics.

use crate::types::Sentence;
use rustc_hash::FxHashMap;

/// Term statistics fitted over a single sentence set
#[derive(Debug, Clone)]
pub struct TfidfModel {
    /// Interned term ids, assigned in sorted first-seen order
    term_ids: FxHashMap<String, u32>,
    /// ln(N / df) per term id
    idf: Vec<f64>,
}

impl TfidfModel {
    /// Fit vocabulary and IDF over a sentence set
    pub fn fit(sentences: &[Sentence]) -> Self {
        let n = sentences.len() as f64;
        let mut term_ids: FxHashMap<String, u32> = FxHashMap::default();
        let mut df: Vec<u32> = Vec::new();

        for sentence in sentences {
            // Sorting distinct terms keeps id assignment independent of
            // hash iteration order.
            let mut distinct: Vec<&String> = sentence.terms.keys().collect();
            distinct.sort_unstable();

            for term in distinct {
                match term_ids.get(term) {
                    Some(&id) => df[id as usize] += 1,
                    None => {
                        term_ids.insert(term.clone(), df.len() as u32);
                        df.push(1);
                    }
                }
            }
        }

        let idf = df.iter().map(|&d| (n / d as f64).ln()).collect();
        Self { term_ids, idf }
    }

    /// Number of distinct terms in the vocabulary
    pub fn vocab_size(&self) -> usize {
        self.idf.len()
    }

    /// Build the TF-IDF vector for one sentence
    ///
    /// Terms present in every sentence of the set carry zero IDF and drop
    /// out; a sentence made only of such terms yields an empty vector.
    pub fn vector(&self, sentence: &Sentence) -> TfidfVector {
        let mut dims: Vec<(u32, f64)> = Vec::with_capacity(sentence.terms.len());
        for (term, &count) in &sentence.terms {
            if let Some(&id) = self.term_ids.get(term) {
                let weight = count as f64 * self.idf[id as usize];
                if weight > 0.0 {
                    dims.push((id, weight));
                }
            }
        }
        dims.sort_unstable_by_key(|(id, _)| *id);
        TfidfVector::from_dims(dims)
    }
}

/// A sparse L2-normalized term vector, dimensions sorted by term id
#[derive(Debug, Clone, Default)]
pub struct TfidfVector {
    dims: Vec<(u32, f64)>,
}

impl TfidfVector {
    fn from_dims(mut dims: Vec<(u32, f64)>) -> Self {
        let norm = dims.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, w) in &mut dims {
                *w /= norm;
            }
        }
        Self { dims }
    }

    /// Whether the vector has no non-zero dimensions
    pub fn is_empty(&self) -> bool {
        self.dims.is_empty()
    }

    /// Cosine similarity as a merge-join dot product, clamped to [0, 1]
    ///
    /// Returns 0.0 when either vector is all-zero.
    pub fn cosine_similarity(&self, other: &TfidfVector) -> f64 {
        if self.dims.is_empty() || other.dims.is_empty() {
            return 0.0;
        }

        let mut dot = 0.0;
        let (mut i, mut j) = (0, 0);
        while i < self.dims.len() && j < other.dims.len() {
            let (a_id, a_weight) = self.dims[i];
            let (b_id, b_weight) = other.dims[j];
            match a_id.cmp(&b_id) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    dot += a_weight * b_weight;
                    i += 1;
                    j += 1;
                }
            }
        }

        dot.clamp(0.0, 1.0)
    }
}
