//! Error types for the reachkit library.

use thiserror::Error;

/// All errors that can occur while building graphs.
///
/// Queries themselves never fail: a missing start degrades to the empty
/// result of the query.
#[derive(Error, Debug)]
pub enum ReachError {
    /// A link references a vertex that was never added.
    #[error("Vertex ID {0} not found")]
    VertexNotFound(usize),

    /// A key graph lists a neighbour that is not itself a key.
    #[error("Key {key} lists neighbour {neighbor} which is not a key of the graph")]
    DanglingNeighbor { key: i64, neighbor: i64 },

    /// Two professionals were registered under the same name.
    #[error("Professional already registered: {0}")]
    DuplicateProfessional(String),

    /// A connection references a professional that was never added.
    #[error("Professional ID {0} not found")]
    ProfessionalNotFound(usize),

    /// JSON parse error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type for reachkit operations.
pub type ReachResult<T> = Result<T, ReachError>;
