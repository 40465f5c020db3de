//! Weighted graph construction
//!
//! [`WeightedGraph`] is an undirected multigraph: every inserted edge is
//! stored as two directed adjacency entries and repeated insertions are not
//! merged. Callers that want accumulated weights pre-aggregate with an
//! [`EdgeAccumulator`].

use crate::graph::csr::CsrGraph;
use crate::pagerank::standard::StandardPageRank;
use crate::pagerank::{normalize_scores, sort_ranked, Ranked};
use crate::types::RankConfig;
use rustc_hash::FxHashMap;
use std::borrow::Borrow;
use std::cmp::Ordering;
use std::hash::Hash;

/// A node in the graph
#[derive(Debug, Clone)]
pub struct GraphNode<L> {
    /// The label for this node
    pub label: L,
    /// Adjacency entries in insertion order: (target node ID, weight)
    pub edges: Vec<(u32, f64)>,
}

impl<L> GraphNode<L> {
    pub fn new(label: L) -> Self {
        Self {
            label,
            edges: Vec::new(),
        }
    }

    /// Sum of the weights of all outgoing entries
    pub fn out_weight(&self) -> f64 {
        self.edges.iter().map(|(_, w)| w).sum()
    }
}

/// An undirected weighted multigraph over labeled nodes
///
/// Node IDs are assigned in first-seen order. Ranking always visits nodes in
/// ascending label order, see [`CsrGraph::from_graph`].
#[derive(Debug, Clone)]
pub struct WeightedGraph<L> {
    label_to_id: FxHashMap<L, u32>,
    nodes: Vec<GraphNode<L>>,
}

impl<L> Default for WeightedGraph<L> {
    fn default() -> Self {
        Self {
            label_to_id: FxHashMap::default(),
            nodes: Vec::new(),
        }
    }
}

impl<L: Clone + Eq + Hash> WeightedGraph<L> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a graph with pre-allocated capacity
    pub fn with_capacity(node_capacity: usize) -> Self {
        Self {
            label_to_id: FxHashMap::with_capacity_and_hasher(node_capacity, Default::default()),
            nodes: Vec::with_capacity(node_capacity),
        }
    }

    /// Get or create a node for the given label, returning its ID
    pub fn get_or_create_node<Q>(&mut self, label: &Q) -> u32
    where
        L: Borrow<Q>,
        Q: ?Sized + Hash + Eq + ToOwned<Owned = L>,
    {
        if let Some(&id) = self.label_to_id.get(label) {
            return id;
        }

        let id = self.nodes.len() as u32;
        let owned = label.to_owned();
        self.label_to_id.insert(owned.clone(), id);
        self.nodes.push(GraphNode::new(owned));
        id
    }

    /// Insert an undirected edge
    ///
    /// Appends `source -> target` and `target -> source`, both carrying
    /// `weight`. A self-loop therefore adds two entries to the same node.
    pub fn add_edge<Q>(&mut self, source: &Q, target: &Q, weight: f64)
    where
        L: Borrow<Q>,
        Q: ?Sized + Hash + Eq + ToOwned<Owned = L>,
    {
        let from = self.get_or_create_node(source);
        let to = self.get_or_create_node(target);

        self.nodes[from as usize].edges.push((to, weight));
        self.nodes[to as usize].edges.push((from, weight));
    }

    /// Get the number of nodes in the graph
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get the number of inserted edges (each undirected edge counted once)
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.edges.len()).sum::<usize>() / 2
    }

    /// Get a node by ID
    pub fn get_node(&self, id: u32) -> Option<&GraphNode<L>> {
        self.nodes.get(id as usize)
    }

    /// Get a node ID by label
    pub fn get_node_id<Q>(&self, label: &Q) -> Option<u32>
    where
        L: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.label_to_id.get(label).copied()
    }

    /// Total outgoing weight of a node, `0.0` for unknown labels
    pub fn out_weight<Q>(&self, label: &Q) -> f64
    where
        L: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        self.get_node_id(label)
            .and_then(|id| self.get_node(id))
            .map_or(0.0, GraphNode::out_weight)
    }

    /// Iterate over the adjacency entries of a node as (neighbor label, weight)
    pub fn neighbors<Q>(&self, label: &Q) -> impl Iterator<Item = (&L, f64)> + '_
    where
        L: Borrow<Q>,
        Q: ?Sized + Hash + Eq,
    {
        let edges = self
            .get_node_id(label)
            .and_then(|id| self.get_node(id))
            .map_or(&[][..], |n| n.edges.as_slice());
        edges
            .iter()
            .map(move |&(to, w)| (&self.nodes[to as usize].label, w))
    }

    /// Iterate over all nodes in ID order
    pub fn nodes(&self) -> impl Iterator<Item = (u32, &GraphNode<L>)> {
        self.nodes.iter().enumerate().map(|(i, n)| (i as u32, n))
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl<L: Clone + Eq + Hash + Ord> WeightedGraph<L> {
    /// Rank all nodes with default settings, ties broken by label
    pub fn rank(&self) -> Vec<Ranked<L>> {
        self.rank_with(&RankConfig::default(), |a, b| a.cmp(b))
    }

    /// Rank all nodes, highest normalized score first
    ///
    /// `tie` orders nodes whose normalized scores are equal.
    pub fn rank_with<F>(&self, config: &RankConfig, tie: F) -> Vec<Ranked<L>>
    where
        F: Fn(&L, &L) -> Ordering,
    {
        if self.is_empty() {
            return Vec::new();
        }

        let csr = CsrGraph::from_graph(self);
        let result = StandardPageRank::from_config(config).run(&csr);
        let normalized = normalize_scores(&result.scores);

        tracing::debug!(
            nodes = csr.num_nodes,
            entries = csr.num_edges(),
            iterations = result.iterations,
            delta = result.delta,
            "ranked graph"
        );

        let mut ranked: Vec<Ranked<L>> = csr
            .labels
            .into_iter()
            .zip(normalized)
            .map(|(label, score)| Ranked::new(label, score))
            .collect();
        sort_ranked(&mut ranked, tie);
        ranked
    }
}

/// Pre-aggregates edge weights keyed by unordered label pair
#[derive(Debug, Clone)]
pub struct EdgeAccumulator<L> {
    weights: FxHashMap<(L, L), f64>,
}

impl<L> Default for EdgeAccumulator<L> {
    fn default() -> Self {
        Self {
            weights: FxHashMap::default(),
        }
    }
}

impl<L: Clone + Eq + Hash + Ord> EdgeAccumulator<L> {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(a: L, b: L) -> (L, L) {
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    /// Add `weight` to the pair `{a, b}`
    pub fn increment(&mut self, a: L, b: L, weight: f64) {
        *self.weights.entry(Self::key(a, b)).or_insert(0.0) += weight;
    }

    /// Set the weight of the pair `{a, b}`, replacing any previous value
    pub fn set(&mut self, a: L, b: L, weight: f64) {
        self.weights.insert(Self::key(a, b), weight);
    }

    /// Accumulated weight of the pair `{a, b}`
    pub fn get(&self, a: L, b: L) -> Option<f64> {
        self.weights.get(&Self::key(a, b)).copied()
    }

    /// Number of distinct pairs
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Insert one edge per pair, in ascending pair order
    pub fn into_graph(self) -> WeightedGraph<L> {
        let mut pairs: Vec<_> = self.weights.into_iter().collect();
        pairs.sort_by(|a, b| a.0.cmp(&b.0));

        let mut graph = WeightedGraph::with_capacity(pairs.len());
        for ((a, b), weight) in pairs {
            graph.add_edge(&a, &b, weight);
        }
        graph
    }
}
