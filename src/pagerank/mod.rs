//! Centrality ranking
//!
//! This module provides the power-iteration PageRank used to score
//! sentences by similarity-graph centrality.

pub mod standard;

/// Result of a centrality computation
#[derive(Debug, Clone)]
pub struct RankResult {
    /// Scores for each node (indexed by node ID)
    pub scores: Vec<f64>,
    /// Number of iterations performed
    pub iterations: usize,
    /// Final convergence delta
    pub delta: f64,
    /// Whether the algorithm converged
    pub converged: bool,
}

impl RankResult {
    /// Create a new rank result
    pub fn new(scores: Vec<f64>, iterations: usize, delta: f64, converged: bool) -> Self {
        Self {
            scores,
            iterations,
            delta,
            converged,
        }
    }

    /// Node ids ordered by descending score, ties broken by lower id
    pub fn order(&self) -> Vec<u32> {
        let mut indexed: Vec<u32> = (0..self.scores.len() as u32).collect();
        indexed.sort_by(|&a, &b| {
            self.scores[b as usize]
                .total_cmp(&self.scores[a as usize])
                .then_with(|| a.cmp(&b))
        });
        indexed
    }

    /// Get the score for a specific node
    pub fn score(&self, node: u32) -> f64 {
        self.scores.get(node as usize).copied().unwrap_or(0.0)
    }

    /// Whether the scores can drive a selection
    ///
    /// Guards against NaN or all-zero score vectors leaking into the
    /// selection step after a pathological graph.
    pub fn is_usable(&self) -> bool {
        !self.scores.is_empty()
            && self.scores.iter().all(|s| s.is_finite())
            && self.scores.iter().sum::<f64>() > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_breaks_ties_by_lower_id() {
        let result = RankResult::new(vec![0.2, 0.4, 0.2, 0.2], 3, 0.0, true);
        assert_eq!(result.order(), vec![1, 0, 2, 3]);
    }

    #[test]
    fn test_score_out_of_range_is_zero() {
        let result = RankResult::new(vec![0.5, 0.5], 1, 0.0, true);
        assert_eq!(result.score(7), 0.0);
    }

    #[test]
    fn test_usability() {
        assert!(RankResult::new(vec![0.5, 0.5], 1, 0.0, true).is_usable());
        assert!(!RankResult::new(vec![], 0, 0.0, true).is_usable());
        assert!(!RankResult::new(vec![0.0, 0.0], 1, 0.0, true).is_usable());
        assert!(!RankResult::new(vec![f64::NAN, 1.0], 1, 0.0, true).is_usable());
    }
}
