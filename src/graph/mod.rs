//! Link graph construction
//!
//! Directed, unweighted edges between opaque string identifiers. Parallel
//! edges and self-loops are kept as given.

pub mod store;
pub mod types;

// Re-export main types
pub use store::{GraphStatistics, GraphStore};
pub use types::NodeId;
