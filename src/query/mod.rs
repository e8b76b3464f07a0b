//! Reachability queries over the graph representations.
//!
//! Every query is a method on [`QueryEngine`], which only carries the walk
//! configuration. The free functions re-exported here run the same queries
//! with the default engine.

pub mod key;
pub mod mutual;
pub mod network;
pub mod vertex;

use crate::graph::WalkStrategy;

pub use key::{positive_path_exists, sorted_reachable_keys};
pub use mutual::{one_way, two_way};
pub use network::{extended_network, has_extended_connection_at_company};
pub use vertex::{odd_count, reachable_count, sorted_reachable};

/// Stateless query executor. Holds only the walk configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryEngine {
    strategy: WalkStrategy,
}

impl QueryEngine {
    /// Create a query engine with the default (iterative) walk.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a query engine that walks with the given strategy.
    pub fn with_strategy(strategy: WalkStrategy) -> Self {
        Self { strategy }
    }

    /// The walk strategy this engine uses.
    pub fn strategy(&self) -> WalkStrategy {
        self.strategy
    }
}
