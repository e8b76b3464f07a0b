//! Node-object graph: vertex values plus ordered neighbour lists, stored as an arena.

use std::collections::HashSet;

use crate::types::{ReachError, ReachResult, VertexId};

use super::traversal::Adjacency;

/// One vertex: a value and its outgoing neighbours in listed order.
#[derive(Debug, Clone)]
struct Vertex<T> {
    value: T,
    neighbors: Vec<VertexId>,
}

/// Immutable directed graph of valued vertices.
///
/// Cycles, self-loops, repeated neighbour entries and equal values on
/// distinct vertices are all legal.
#[derive(Debug, Clone)]
pub struct VertexGraph<T> {
    vertices: Vec<Vertex<T>>,
}

impl<T> VertexGraph<T> {
    /// Create from pre-existing values and `(source, target)` links (used by the builder).
    pub fn from_parts(values: Vec<T>, links: Vec<(VertexId, VertexId)>) -> ReachResult<Self> {
        let mut vertices: Vec<Vertex<T>> = values
            .into_iter()
            .map(|value| Vertex {
                value,
                neighbors: Vec::new(),
            })
            .collect();

        let count = vertices.len();
        for (source, target) in links {
            if source.0 >= count {
                return Err(ReachError::VertexNotFound(source.0));
            }
            if target.0 >= count {
                return Err(ReachError::VertexNotFound(target.0));
            }
            vertices[source.0].neighbors.push(target);
        }

        Ok(Self { vertices })
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges, counting repeated neighbour entries.
    pub fn edge_count(&self) -> usize {
        self.vertices.iter().map(|v| v.neighbors.len()).sum()
    }

    /// Whether `id` names a vertex of this graph.
    pub fn contains(&self, id: VertexId) -> bool {
        id.0 < self.vertices.len()
    }

    /// Value held by a vertex.
    pub fn value(&self, id: VertexId) -> Option<&T> {
        self.vertices.get(id.0).map(|v| &v.value)
    }

    /// Outgoing neighbours of a vertex; empty for unknown IDs.
    pub fn neighbors(&self, id: VertexId) -> &[VertexId] {
        match self.vertices.get(id.0) {
            Some(vertex) => &vertex.neighbors,
            None => &[],
        }
    }

    /// All vertex IDs in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.vertices.len()).map(VertexId)
    }

    /// Values of a set of vertices. Unknown IDs are skipped.
    pub fn values_of<'a>(&'a self, ids: &'a HashSet<VertexId>) -> impl Iterator<Item = &'a T> + 'a {
        ids.iter().filter_map(move |&id| self.value(id))
    }
}

impl<T> Adjacency for VertexGraph<T> {
    type Id = VertexId;
    type Successors<'a> = std::iter::Copied<std::slice::Iter<'a, VertexId>>
    where
        Self: 'a;

    fn successors(&self, id: VertexId) -> Self::Successors<'_> {
        self.neighbors(id).iter().copied()
    }
}
