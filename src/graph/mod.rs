//! Graph representations and the shared traversal.

pub mod builder;
pub mod key_graph;
pub mod network;
pub mod traversal;
pub mod vertex_graph;

pub use builder::VertexGraphBuilder;
pub use key_graph::KeyGraph;
pub use network::{Network, NetworkBuilder, Professional, ProfessionalId};
pub use traversal::{depth_first, reachable, Adjacency, Step, WalkOutcome, WalkStrategy};
pub use vertex_graph::VertexGraph;
