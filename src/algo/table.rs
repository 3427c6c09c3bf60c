use crate::graph::{GraphStore, NodeId};
use std::collections::HashMap;

/// Final rank per node identifier
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RankTable {
    ranks: HashMap<NodeId, f64>,
}

impl RankTable {
    /// Pair dense-index scores with the store's identifiers
    pub fn from_scores(store: &GraphStore, scores: &[f64]) -> Self {
        let ranks = store.nodes().cloned().zip(scores.iter().copied()).collect();
        Self { ranks }
    }

    pub fn get(&self, id: &str) -> Option<f64> {
        self.ranks.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, f64)> {
        self.ranks.iter().map(|(id, &rank)| (id, rank))
    }

    /// Sum of all ranks
    pub fn total(&self) -> f64 {
        self.ranks.values().sum()
    }

    /// Entries in ascending identifier order
    pub fn sorted(&self) -> Vec<(&NodeId, f64)> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl FromIterator<(NodeId, f64)> for RankTable {
    fn from_iter<T: IntoIterator<Item = (NodeId, f64)>>(iter: T) -> Self {
        Self {
            ranks: iter.into_iter().collect(),
        }
    }
}
