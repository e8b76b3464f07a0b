//! Shared data types for the reachkit library.

pub mod error;
pub mod parity;
pub mod position;

pub use error::{ReachError, ReachResult};
pub use parity::Parity;
pub use position::{Direction, Position};

use serde::{Deserialize, Serialize};

/// Cell character that marks an impassable grid square unless a board says otherwise.
pub const DEFAULT_OBSTACLE: char = 'X';

/// Stable handle to a vertex inside a [`crate::graph::VertexGraph`].
///
/// Identity, not value, is what traversal tracks: two vertices holding
/// equal values have different IDs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VertexId(pub(crate) usize);

impl VertexId {
    /// Raw arena index of this vertex.
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for VertexId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "v{}", self.0)
    }
}
