pub mod common;
pub mod pagerank;

pub use common::GraphView;
pub use pagerank::{page_rank, PageRank, PageRankConfig, RankError, RankResult};
