//! Fluent API for building VertexGraph instances.

use crate::types::{ReachResult, VertexId};

use super::VertexGraph;

/// Fluent builder for constructing a [`VertexGraph`].
pub struct VertexGraphBuilder<T> {
    values: Vec<T>,
    links: Vec<(VertexId, VertexId)>,
}

impl<T> VertexGraphBuilder<T> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            links: Vec::new(),
        }
    }

    /// Add a vertex, returns its ID.
    pub fn add_vertex(&mut self, value: T) -> VertexId {
        let id = VertexId(self.values.len());
        self.values.push(value);
        id
    }

    /// Append `to` to the neighbour list of `from`.
    pub fn link(&mut self, from: VertexId, to: VertexId) -> &mut Self {
        self.links.push((from, to));
        self
    }

    /// Append every ID in `to`, in order, to the neighbour list of `from`.
    pub fn link_all(&mut self, from: VertexId, to: &[VertexId]) -> &mut Self {
        self.links.extend(to.iter().map(|&target| (from, target)));
        self
    }

    /// Build the final graph. Fails if a link names a vertex that was never added.
    pub fn build(self) -> ReachResult<VertexGraph<T>> {
        let graph = VertexGraph::from_parts(self.values, self.links)?;
        log::debug!(
            "built vertex graph: {} vertices, {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}

impl<T> Default for VertexGraphBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
