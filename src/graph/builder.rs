//! Sentence similarity graph construction
//!
//! Builds an undirected weighted graph over one sentence set: nodes are
//! sentence positions, edge weights are pairwise TF-IDF cosine similarity.
//! Zero-similarity pairs get no edge and self-loops are never created, so
//! an all-disjoint set comes out edge-free and the caller can treat it as
//! degenerate.

use super::csr::CsrGraph;
use super::tfidf::TfidfModel;
use crate::types::Sentence;

/// Builds similarity graphs for centrality ranking
#[derive(Debug, Clone, Default)]
pub struct SimilarityGraphBuilder;

impl SimilarityGraphBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self
    }

    /// Build the similarity graph for a sentence set
    ///
    /// Node ids are positions within `sentences`; the caller maps them back
    /// to document indices. The TF-IDF model is fitted over exactly this
    /// set, so the same sentences always produce the same graph.
    pub fn build(&self, sentences: &[Sentence]) -> CsrGraph {
        let n = sentences.len();
        if n < 2 {
            return CsrGraph::with_nodes(n);
        }

        let model = TfidfModel::fit(sentences);
        let vectors: Vec<_> = sentences.iter().map(|s| model.vector(s)).collect();

        let mut edges: Vec<(u32, u32, f64)> = Vec::new();
        for i in 0..n {
            if vectors[i].is_empty() {
                continue;
            }
            for j in (i + 1)..n {
                let weight = vectors[i].cosine_similarity(&vectors[j]);
                if weight > 0.0 {
                    edges.push((i as u32, j as u32, weight));
                }
            }
        }

        CsrGraph::from_edges(n, &edges)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    fn make_sentence(index: usize, words: &[&str]) -> Sentence {
        let mut terms = FxHashMap::default();
        for word in words {
            *terms.entry(word.to_string()).or_insert(0) += 1;
        }
        Sentence::new(index, words.join(" "), terms)
    }

    #[test]
    fn test_symmetric_edges() {
        let sentences = vec![
            make_sentence(0, &["harbor", "cranes"]),
            make_sentence(1, &["harbor", "storm"]),
            make_sentence(2, &["inland", "depot"]),
        ];
        let graph = SimilarityGraphBuilder::new().build(&sentences);

        let forward = graph.neighbors(0).find(|&(n, _)| n == 1);
        let backward = graph.neighbors(1).find(|&(n, _)| n == 0);
        match (forward, backward) {
            (Some((_, fw)), Some((_, bw))) => assert_eq!(fw, bw),
            other => panic!("expected edge in both directions, got {other:?}"),
        }
    }

    #[test]
    fn test_no_self_loops() {
        let sentences = vec![
            make_sentence(0, &["twin", "words"]),
            make_sentence(1, &["twin", "words"]),
            make_sentence(2, &["more", "text"]),
        ];
        let graph = SimilarityGraphBuilder::new().build(&sentences);

        for node in 0..graph.num_nodes as u32 {
            assert!(graph.neighbors(node).all(|(target, _)| target != node));
        }
    }

    #[test]
    fn test_disjoint_sentence_is_dangling() {
        let sentences = vec![
            make_sentence(0, &["alpha", "beta"]),
            make_sentence(1, &["alpha", "gamma"]),
            make_sentence(2, &["omega", "sigma"]),
        ];
        let graph = SimilarityGraphBuilder::new().build(&sentences);

        assert_eq!(graph.dangling_nodes(), vec![2]);
    }

    #[test]
    fn test_fully_disjoint_set_is_edge_free() {
        let sentences = vec![
            make_sentence(0, &["one", "red"]),
            make_sentence(1, &["two", "blue"]),
            make_sentence(2, &["three", "green"]),
        ];
        let graph = SimilarityGraphBuilder::new().build(&sentences);

        assert_eq!(graph.num_nodes, 3);
        assert_eq!(graph.num_edges(), 0);
    }

    #[test]
    fn test_degenerate_sets() {
        let graph = SimilarityGraphBuilder::new().build(&[]);
        assert!(graph.is_empty());

        let graph = SimilarityGraphBuilder::new().build(&[make_sentence(0, &["alone"])]);
        assert_eq!(graph.num_nodes, 1);
        assert_eq!(graph.num_edges(), 0);
    }

    #[test]
    fn test_weights_clamped_to_unit_interval() {
        let sentences = vec![
            make_sentence(0, &["shared", "terms", "here"]),
            make_sentence(1, &["shared", "terms", "there"]),
            make_sentence(2, &["unrelated", "content", "everywhere"]),
        ];
        let graph = SimilarityGraphBuilder::new().build(&sentences);

        for node in 0..graph.num_nodes as u32 {
            for (_, weight) in graph.neighbors(node) {
                assert!(weight > 0.0 && weight <= 1.0);
            }
        }
    }

    #[test]
    fn test_deterministic_build() {
        let sentences = vec![
            make_sentence(0, &["delta", "alpha", "echo"]),
            make_sentence(1, &["bravo", "alpha"]),
            make_sentence(2, &["echo", "charlie", "bravo"]),
            make_sentence(3, &["charlie", "delta"]),
        ];
        let builder = SimilarityGraphBuilder::new();

        let a = builder.build(&sentences);
        let b = builder.build(&sentences);
        assert_eq!(a.row_ptr, b.row_ptr);
        assert_eq!(a.col_idx, b.col_idx);
        assert_eq!(a.weights, b.weights);
    }
}
