//! reachkit: reachability queries over cyclic graphs.
//!
//! Answers "what can I reach from here" over node-object graphs, integer
//! key-adjacency graphs and professional contact graphs, all through one
//! cycle-safe depth-first walk. Also enumerates one-step moves on an
//! obstacle grid.

pub mod graph;
pub mod grid;
pub mod query;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{
    Adjacency, KeyGraph, Network, NetworkBuilder, Professional, ProfessionalId, Step,
    VertexGraph, VertexGraphBuilder, WalkOutcome, WalkStrategy,
};
pub use grid::{next_moves, Board};
pub use query::{
    extended_network, has_extended_connection_at_company, odd_count, one_way,
    positive_path_exists, reachable_count, sorted_reachable, sorted_reachable_keys, two_way,
    QueryEngine,
};
pub use types::{
    Direction, Parity, Position, ReachError, ReachResult, VertexId, DEFAULT_OBSTACLE,
};
