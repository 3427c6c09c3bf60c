//! In-memory link graph storage
//!
//! Nodes live in an insertion-ordered registry that hands out dense indices;
//! adjacency is kept per index. Any identifier mentioned by an edge, as source
//! or destination, is registered on first sight.

use super::types::NodeId;
use indexmap::IndexSet;
use serde::Serialize;

/// Summary counters for a graph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GraphStatistics {
    pub node_count: usize,
    pub edge_count: usize,
    /// Nodes with no outgoing edges
    pub dangling_count: usize,
    pub self_loop_count: usize,
}

/// In-memory directed graph keyed by string identifiers
///
/// - nodes: registry NodeId -> dense index (first-seen order)
/// - outgoing: dense index -> destination indices (insertion order, duplicates kept)
#[derive(Debug, Clone, Default)]
pub struct GraphStore {
    /// Node registry
    nodes: IndexSet<NodeId>,

    /// Outgoing edges for each node (adjacency list)
    outgoing: Vec<Vec<usize>>,

    /// Total edges, parallel edges included
    edge_count: usize,
}

impl GraphStore {
    /// Create a new empty graph store
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node without adding any edge. Returns its dense index.
    pub fn add_node(&mut self, id: impl Into<NodeId>) -> usize {
        let (idx, inserted) = self.nodes.insert_full(id.into());
        if inserted {
            self.outgoing.push(Vec::new());
        }
        idx
    }

    /// Add a directed edge `from -> to`.
    ///
    /// Self-loops and repeated edges are accepted; each occurrence adds one to
    /// the source's out-degree.
    pub fn add_edge(&mut self, from: impl Into<NodeId>, to: impl Into<NodeId>) {
        let from_idx = self.add_node(from);
        let to_idx = self.add_node(to);
        self.outgoing[from_idx].push(to_idx);
        self.edge_count += 1;
    }

    /// Get total number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Get total number of edges
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.nodes.contains(id)
    }

    /// Dense index of a node
    pub fn index_of(&self, id: &str) -> Option<usize> {
        self.nodes.get_index_of(id)
    }

    /// Node registered at a dense index
    pub fn node_at(&self, idx: usize) -> Option<&NodeId> {
        self.nodes.get_index(idx)
    }

    /// All nodes in first-seen order
    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.nodes.iter()
    }

    /// Out-degree of a node, or `None` if it was never seen
    pub fn out_degree(&self, id: &str) -> Option<usize> {
        self.index_of(id).map(|idx| self.outgoing[idx].len())
    }

    /// Destinations of a node's outgoing edges, in insertion order
    pub fn successors(&self, id: &str) -> Option<impl Iterator<Item = &NodeId> + '_> {
        let idx = self.index_of(id)?;
        Some(
            self.outgoing[idx]
                .iter()
                .filter_map(move |&target| self.nodes.get_index(target)),
        )
    }

    /// Outgoing adjacency indexed by dense node index
    pub fn adjacency(&self) -> &[Vec<usize>] {
        &self.outgoing
    }

    pub fn statistics(&self) -> GraphStatistics {
        let dangling_count = self.outgoing.iter().filter(|targets| targets.is_empty()).count();
        let self_loop_count = self
            .outgoing
            .iter()
            .enumerate()
            .map(|(idx, targets)| targets.iter().filter(|&&target| target == idx).count())
            .sum();

        GraphStatistics {
            node_count: self.node_count(),
            edge_count: self.edge_count,
            dangling_count,
            self_loop_count,
        }
    }
}

impl<A, B> Extend<(A, B)> for GraphStore
where
    A: Into<NodeId>,
    B: Into<NodeId>,
{
    fn extend<T: IntoIterator<Item = (A, B)>>(&mut self, edges: T) {
        for (from, to) in edges {
            self.add_edge(from, to);
        }
    }
}

impl<A, B> FromIterator<(A, B)> for GraphStore
where
    A: Into<NodeId>,
    B: Into<NodeId>,
{
    fn from_iter<T: IntoIterator<Item = (A, B)>>(edges: T) -> Self {
        let mut store = GraphStore::new();
        store.extend(edges);
        store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_edge_registers_both_endpoints() {
        let mut store = GraphStore::new();
        store.add_edge("amazon.com", "bloomberg.com");

        assert_eq!(store.node_count(), 2);
        assert_eq!(store.edge_count(), 1);
        assert!(store.contains_node("bloomberg.com"));
        assert_eq!(store.out_degree("amazon.com"), Some(1));
        assert_eq!(store.out_degree("bloomberg.com"), Some(0));
        assert_eq!(store.out_degree("citadel.com"), None);
    }

    #[test]
    fn test_parallel_edges_and_self_loops() {
        let mut store = GraphStore::new();
        store.add_edge("a", "b");
        store.add_edge("a", "b");
        store.add_edge("a", "a");

        assert_eq!(store.node_count(), 2);
        assert_eq!(store.out_degree("a"), Some(3));

        let successors: Vec<&str> = store.successors("a").unwrap().map(NodeId::as_str).collect();
        assert_eq!(successors, vec!["b", "b", "a"]);

        let stats = store.statistics();
        assert_eq!(stats.edge_count, 3);
        assert_eq!(stats.self_loop_count, 1);
        assert_eq!(stats.dangling_count, 1);
    }

    #[test]
    fn test_add_node_is_idempotent() {
        let mut store = GraphStore::new();
        let first = store.add_node("dell.com");
        store.add_edge("amazon.com", "dell.com");
        let second = store.add_node("dell.com");

        assert_eq!(first, second);
        assert_eq!(store.node_count(), 2);
        assert_eq!(store.out_degree("dell.com"), Some(0));
    }

    #[test]
    fn test_first_seen_order() {
        let store: GraphStore = vec![("c", "a"), ("b", "c")].into_iter().collect();

        let nodes: Vec<&str> = store.nodes().map(NodeId::as_str).collect();
        assert_eq!(nodes, vec!["c", "a", "b"]);
        assert_eq!(store.index_of("b"), Some(2));
        assert_eq!(store.node_at(1).map(NodeId::as_str), Some("a"));
        let expected: Vec<Vec<usize>> = vec![vec![1], vec![], vec![0]];
        assert_eq!(store.adjacency(), expected.as_slice());
    }

    #[test]
    fn test_empty_store_statistics() {
        let store = GraphStore::new();

        assert!(store.is_empty());
        assert_eq!(store.statistics(), GraphStatistics::default());
    }
}
