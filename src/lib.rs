//! LinkRank
//!
//! PageRank centrality for directed graphs given as edge lists of opaque
//! string identifiers, computed with a fixed number of power-iteration rounds.
//!
//! # Pipeline
//!
//! edges → [`GraphStore`] → uniform initialization → propagation rounds →
//! [`format_ranks`]
//!
//! The recurrence has no damping term. A node without outgoing edges spreads
//! its rank evenly over every node (itself included), so with enough rounds
//! disconnected components still mix, while an absorbing cycle starves every
//! node outside it.
//!
//! ## Example Usage
//!
//! ```rust
//! use linkrank::{algo, format_ranks, GraphStore, PageRankConfig, RankFormat};
//!
//! let mut store = GraphStore::new();
//! store.add_edge("amazon.com", "bloomberg.com");
//!
//! let config = PageRankConfig { iterations: 1, parallel: false };
//! let table = algo::rank(&store, config).unwrap();
//!
//! assert_eq!(
//!     format_ranks(&table, RankFormat::Truncated),
//!     "amazon.com 0.25\nbloomberg.com 0.75"
//! );
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod algo;
pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod input;

// Re-export main types for convenience
pub use algo::{PageRank, PageRankConfig, RankError, RankResult, RankTable};
pub use config::{ConfigError, RankConfig};
pub use error::{LinkRankError, LinkRankResult};
pub use format::{format_ranks, format_rows, RankFormat, RankRow};
pub use graph::{GraphStatistics, GraphStore, NodeId};
pub use input::{EdgeList, InputError};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}

/// Parse an edge list, rank it with the header's iteration count and render
/// the result.
///
/// An edge list without edges yields an empty string rather than an error.
pub fn rank_edge_list(text: &str, mode: RankFormat) -> LinkRankResult<String> {
    let list = EdgeList::parse(text)?;
    rank_list(&list, mode)
}

/// Rank an already parsed edge list and render the result.
pub fn rank_list(list: &EdgeList, mode: RankFormat) -> LinkRankResult<String> {
    let store = list.to_graph();
    if store.is_empty() {
        return Ok(String::new());
    }

    let config = PageRankConfig {
        iterations: list.iterations,
        parallel: false,
    };
    let table = algo::rank(&store, config)?;
    Ok(format_ranks(&table, mode))
}
