//! Compressed Sparse Row (CSR) graph representation
//!
//! CSR is optimized for iteration over neighbors, which is exactly what
//! PageRank needs during power iteration.

use super::builder::WeightedGraph;
use std::hash::Hash;

/// A graph in Compressed Sparse Row format
///
/// Node IDs follow ascending label order, so iterating `0..num_nodes` is the
/// deterministic traversal order used by the ranker. Each node's adjacency
/// entries keep their insertion order.
#[derive(Debug, Clone)]
pub struct CsrGraph<L> {
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
    /// Labels for each node, ascending
    pub labels: Vec<L>,
}

impl<L: Clone + Eq + Hash + Ord> CsrGraph<L> {
    /// Convert a WeightedGraph into CSR format, renumbering nodes by label
    pub fn from_graph(graph: &WeightedGraph<L>) -> Self {
        let num_nodes = graph.node_count();

        let mut order: Vec<(u32, &L)> = graph.nodes().map(|(id, n)| (id, &n.label)).collect();
        order.sort_by(|a, b| a.1.cmp(b.1));

        // builder ID -> sorted ID
        let mut remap = vec![0u32; num_nodes];
        for (sorted_id, &(builder_id, _)) in order.iter().enumerate() {
            remap[builder_id as usize] = sorted_id as u32;
        }

        let mut row_ptr = Vec::with_capacity(num_nodes + 1);
        let mut col_idx = Vec::new();
        let mut weights = Vec::new();
        let mut total_weight = Vec::with_capacity(num_nodes);
        let mut labels = Vec::with_capacity(num_nodes);

        row_ptr.push(0);

        for &(builder_id, label) in &order {
            labels.push(label.clone());

            let mut sum = 0.0;
            if let Some(node) = graph.get_node(builder_id) {
                for &(target, weight) in &node.edges {
                    col_idx.push(remap[target as usize]);
                    weights.push(weight);
                    sum += weight;
                }
            }
            total_weight.push(sum);

            row_ptr.push(col_idx.len());
        }

        Self {
            num_nodes,
            row_ptr,
            col_idx,
            weights,
            total_weight,
            labels,
        }
    }
}

impl<L> CsrGraph<L> {
    /// Iterate over neighbors of a node
    pub fn neighbors(&self, node: u32) -> impl Iterator<Item = (u32, f64)> + '_ {
        let start = self.row_ptr[node as usize];
        let end = self.row_ptr[node as usize + 1];
        (start..end).map(move |i| (self.col_idx[i], self.weights[i]))
    }

    /// Get the number of adjacency entries of a node
    pub fn degree(&self, node: u32) -> usize {
        self.row_ptr[node as usize + 1] - self.row_ptr[node as usize]
    }

    /// Get the total outgoing weight of a node
    pub fn node_total_weight(&self, node: u32) -> f64 {
        self.total_weight[node as usize]
    }

    /// Get the label for a node
    pub fn label(&self, node: u32) -> &L {
        &self.labels[node as usize]
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.num_nodes == 0
    }

    /// Get the total number of adjacency entries (each undirected edge twice)
    pub fn num_edges(&self) -> usize {
        self.col_idx.len()
    }
}

impl<L> Default for CsrGraph<L> {
    fn default() -> Self {
        Self {
            num_nodes: 0,
            row_ptr: vec![0],
            col_idx: Vec::new(),
            weights: Vec::new(),
            total_weight: Vec::new(),
            labels: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_test_graph() -> WeightedGraph<String> {
        let mut graph: WeightedGraph<String> = WeightedGraph::new();
        // First-seen order deliberately differs from label order.
        graph.add_edge("c", "b", 2.0);
        graph.add_edge("a", "b", 1.0);
        graph.add_edge("a", "c", 1.5);
        graph
    }

    #[test]
    fn test_csr_conversion_sorts_labels() {
        let csr = CsrGraph::from_graph(&build_test_graph());

        assert_eq!(csr.num_nodes, 3);
        assert_eq!(csr.labels, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_neighbor_iteration_remapped() {
        let csr = CsrGraph::from_graph(&build_test_graph());

        // Node "a" (id 0) sees "b" then "c", in insertion order
        let neighbors: Vec<_> = csr.neighbors(0).collect();
        assert_eq!(neighbors.len(), 2);
        assert_eq!(neighbors[0].0, 1);
        assert!((neighbors[0].1 - 1.0).abs() < 1e-10);
        assert_eq!(neighbors[1].0, 2);
        assert!((neighbors[1].1 - 1.5).abs() < 1e-10);
    }

    #[test]
    fn test_degree_and_weight() {
        let csr = CsrGraph::from_graph(&build_test_graph());

        assert_eq!(csr.degree(0), 2);
        assert!((csr.node_total_weight(0) - 2.5).abs() < 1e-10);
        // "b": 2.0 from c, 1.0 from a
        assert!((csr.node_total_weight(1) - 3.0).abs() < 1e-10);
        assert_eq!(csr.label(2), "c");
    }

    #[test]
    fn test_empty_graph() {
        let graph: WeightedGraph<String> = WeightedGraph::new();
        let csr = CsrGraph::from_graph(&graph);

        assert!(csr.is_empty());
        assert_eq!(csr.num_edges(), 0);
        assert_eq!(csr.row_ptr, vec![0]);
    }

    #[test]
    fn test_entries_counted_twice() {
        let csr = CsrGraph::from_graph(&build_test_graph());
        assert_eq!(csr.num_edges(), 6);
    }
}
