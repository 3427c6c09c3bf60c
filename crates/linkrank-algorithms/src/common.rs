//! Shared utilities for graph algorithms
//!
//! Provides a read-only, dense view of the graph topology for algorithm execution.

/// A dense, integer-indexed view of the graph topology using Compressed Sparse Row (CSR) format.
///
/// Parallel edges are stored once per occurrence, so degrees count multiplicity.
#[derive(Debug, Clone)]
pub struct GraphView {
    /// Number of nodes
    pub node_count: usize,

    /// Outgoing edges CSR structure
    /// Offsets into `out_targets`. Size = node_count + 1
    pub out_offsets: Vec<usize>,
    /// Contiguous array of target node indices
    pub out_targets: Vec<usize>,

    /// Incoming edges CSR structure (Compressed Sparse Column effectively)
    /// Offsets into `in_sources`. Size = node_count + 1
    pub in_offsets: Vec<usize>,
    /// Contiguous array of source node indices
    pub in_sources: Vec<usize>,
}

impl GraphView {
    /// Get the out-degree of a node (by index)
    pub fn out_degree(&self, idx: usize) -> usize {
        self.out_offsets[idx + 1] - self.out_offsets[idx]
    }

    /// Get the in-degree of a node (by index)
    pub fn in_degree(&self, idx: usize) -> usize {
        self.in_offsets[idx + 1] - self.in_offsets[idx]
    }

    /// Get incoming neighbors (predecessors) of a node
    pub fn predecessors(&self, idx: usize) -> &[usize] {
        let start = self.in_offsets[idx];
        let end = self.in_offsets[idx + 1];
        &self.in_sources[start..end]
    }

    /// Total number of edges, counting parallel edges separately
    pub fn edge_count(&self) -> usize {
        self.out_targets.len()
    }

    /// Indices of nodes without outgoing edges
    pub fn dangling_nodes(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.node_count).filter(move |&idx| self.out_degree(idx) == 0)
    }

    /// Build a view from per-node outgoing adjacency lists.
    ///
    /// The incoming side is derived here; within each node the predecessor
    /// order follows source index, then edge insertion order.
    pub fn from_adjacency_list(outgoing: Vec<Vec<usize>>) -> Self {
        let node_count = outgoing.len();
        let mut out_offsets = Vec::with_capacity(node_count + 1);
        let mut out_targets = Vec::new();
        let mut temp_incoming: Vec<Vec<usize>> = vec![Vec::new(); node_count];

        out_offsets.push(0);
        for (u_idx, neighbors) in outgoing.into_iter().enumerate() {
            for &v_idx in &neighbors {
                temp_incoming[v_idx].push(u_idx);
            }
            out_targets.extend(neighbors);
            out_offsets.push(out_targets.len());
        }

        let mut in_offsets = Vec::with_capacity(node_count + 1);
        let mut in_sources = Vec::with_capacity(out_targets.len());

        in_offsets.push(0);
        for sources in temp_incoming {
            in_sources.extend(sources);
            in_offsets.push(in_sources.len());
        }

        GraphView {
            node_count,
            out_offsets,
            out_targets,
            in_offsets,
            in_sources,
        }
    }
}
