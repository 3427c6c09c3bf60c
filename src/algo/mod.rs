//! Graph algorithms module
//!
//! The propagation itself lives in the `linkrank-algorithms` crate, which
//! works on dense indices. This module projects a [`GraphStore`] into that
//! form and maps the scores back onto node identifiers.

pub mod table;

use crate::graph::GraphStore;
use linkrank_algorithms::GraphView;
use tracing::{debug, info, trace};

// Re-export algorithms
pub use linkrank_algorithms::{page_rank, PageRank, PageRankConfig, RankError, RankResult};
pub use table::RankTable;

/// Build a GraphView from the store for algorithm execution
pub fn build_view(store: &GraphStore) -> GraphView {
    GraphView::from_adjacency_list(store.adjacency().to_vec())
}

/// Rank every node in the store.
///
/// Runs exactly `config.iterations` propagation rounds after uniform
/// initialization. An empty store is rejected with [`RankError::EmptyGraph`].
pub fn rank(store: &GraphStore, config: PageRankConfig) -> RankResult<RankTable> {
    let stats = store.statistics();
    info!(
        "Ranking {} nodes, {} edges ({} dangling) over {} rounds",
        stats.node_count, stats.edge_count, stats.dangling_count, config.iterations
    );

    let view = build_view(store);
    let mut ranker = PageRank::initialize(&view)?.parallel(config.parallel);
    debug!("Initialized ranks to 1/{}", view.node_count);

    for _ in 0..config.iterations {
        ranker.step();
        trace!("Completed round {}", ranker.rounds_completed());
    }

    Ok(RankTable::from_scores(store, ranker.scores()))
}
