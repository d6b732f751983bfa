//! Compressed Sparse Row (CSR) graph representation
//!
//! CSR stores each node's edges contiguously, which is exactly what power
//! iteration wants: repeated sweeps over all edges with no pointer chasing.
//! Node ids are positions within the sentence set the graph was built from.

/// A sentence similarity graph in Compressed Sparse Row format
#[derive(Debug, Clone)]
pub struct CsrGraph {
    /// Number of nodes
    pub num_nodes: usize,
    /// Row pointers: node i's edges are at indices row_ptr[i]..row_ptr[i+1]
    pub row_ptr: Vec<usize>,
    /// Column indices (target nodes) for each edge
    pub col_idx: Vec<u32>,
    /// Edge weights
    pub weights: Vec<f64>,
    /// Total outgoing weight for each node
    pub total_weight: Vec<f64>,
}

impl CsrGraph {
    /// Create a graph of `num_nodes` isolated nodes
    pub fn with_nodes(num_nodes: usize) -> Self {
        Self {
            num_nodes,
            row_ptr: vec![0; num_nodes + 1],
            col_idx: Vec::new(),
            weights: Vec::new(),
            total_weight: vec![0.0; num_nodes],
        }
    }

    /// Build from an undirected edge list
    ///
    /// Each `(a, b, w)` entry inserts both directions; per-node neighbor
    /// lists are sorted for deterministic iteration. Self-loops are
    /// skipped. Every unordered pair is expected at most once.
    pub fn from_edges(num_nodes: usize, edges: &[(u32, u32, f64)]) -> Self {
        let mut adjacency: Vec<Vec<(u32, f64)>> = vec![Vec::new(); num_nodes];
        for &(a, b, w) in edges {
            if a == b {
                continue;
            }
            adjacency[a as usize].push((b, w));
            adjacency[b as usize].push((a, w));
        }

        let mut row_ptr = Vec::with_capacity(num_nodes + 1);
        let mut col_idx = Vec::new();
        let mut weights = Vec::new();
        let mut total_weight = Vec::with_capacity(num_nodes);

        row_ptr.push(0);
        for mut targets in adjacency {
            targets.sort_unstable_by_key(|(target, _)| *target);
            total_weight.push(targets.iter().map(|(_, w)| w).sum());

            for (target, weight) in targets {
                col_idx.push(target);
                weights.push(weight);
            }

            row_ptr.push(col_idx.len());
        }

        Self {
            num_nodes,
            row_ptr,
            col_idx,
            weights,
            total_weight,
        }
    }

    /// Iterate over neighbors of a node
    pub fn neighbors(&self, node: u32) -> impl Iterator<Item = (u32, f64)> + '_ {
        let start = self.row_ptr[node as usize];
        let end = self.row_ptr[node as usize + 1];
        (start..end).map(move |i| (self.col_idx[i], self.weights[i]))
    }

    /// Get the total outgoing weight of a node
    pub fn node_total_weight(&self, node: u32) -> f64 {
        self.total_weight[node as usize]
    }

    /// Check if the graph has no nodes
    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }

    /// Total number of stored edges (each undirected edge counts twice)
    pub fn num_edges(&self) -> usize {
        self.col_idx.len()
    }

    /// Nodes with no outgoing edges
    pub fn dangling_nodes(&self) -> Vec<u32> {
        (0..self.num_nodes as u32)
            .filter(|&n| self.row_ptr[n as usize] == self.row_ptr[n as usize + 1])
            .collect()
    }
}

impl Default for CsrGraph {
    fn default() -> Self {
        Self::with_nodes(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_test_graph() -> CsrGraph {
        CsrGraph::from_edges(3, &[(0, 1, 1.0), (1, 2, 2.0), (0, 2, 1.5)])
    }

    #[test]
    fn test_from_edges() {
        let csr = build_test_graph();

        assert_eq!(csr.num_nodes, 3);
        assert_eq!(csr.num_edges(), 6);
    }

    #[test]
    fn test_neighbor_iteration_sorted() {
        let csr = build_test_graph();

        let neighbors: Vec<_> = csr.neighbors(0).collect();
        assert_eq!(neighbors, vec![(1, 1.0), (2, 1.5)]);

        let neighbors: Vec<_> = csr.neighbors(2).collect();
        assert_eq!(neighbors, vec![(0, 1.5), (1, 2.0)]);
    }

    #[test]
    fn test_total_weight() {
        let csr = build_test_graph();

        assert!((csr.node_total_weight(0) - 2.5).abs() < 1e-10);
        assert!((csr.node_total_weight(1) - 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_empty_graph() {
        let csr = CsrGraph::default();

        assert!(csr.is_empty());
        assert_eq!(csr.num_edges(), 0);
        assert!(csr.dangling_nodes().is_empty());
    }

    #[test]
    fn test_dangling_nodes() {
        let csr = CsrGraph::from_edges(3, &[(0, 1, 1.0)]);

        assert_eq!(csr.dangling_nodes(), vec![2]);
    }

    #[test]
    fn test_self_loops_skipped() {
        let csr = CsrGraph::from_edges(2, &[(0, 0, 5.0), (0, 1, 1.0)]);

        assert_eq!(csr.num_edges(), 2);
        assert_eq!(csr.neighbors(0).collect::<Vec<_>>(), vec![(1, 1.0)]);
    }

    #[test]
    fn test_isolated_nodes() {
        let csr = CsrGraph::with_nodes(4);

        assert_eq!(csr.num_nodes, 4);
        assert_eq!(csr.dangling_nodes(), vec![0, 1, 2, 3]);
        assert_eq!(csr.neighbors(1).count(), 0);
    }
}
