//! Professional contact graph.

use std::collections::{HashMap, HashSet};

use serde::Serialize;

use crate::types::{ReachError, ReachResult, VertexId};

use super::traversal::Adjacency;
use super::VertexGraph;

/// Handle to a professional inside a [`Network`].
pub type ProfessionalId = VertexId;

/// A person in the contact graph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Professional {
    /// Unique name within the network.
    pub name: String,
    /// Current employer.
    pub company: String,
    /// Years of experience. Not used by any query.
    pub years: u32,
}

/// Directed graph of professionals and their outgoing connections.
#[derive(Debug, Clone)]
pub struct Network {
    graph: VertexGraph<Professional>,
    by_name: HashMap<String, ProfessionalId>,
}

impl Network {
    /// Number of professionals.
    pub fn len(&self) -> usize {
        self.graph.vertex_count()
    }

    /// True if the network has no professionals.
    pub fn is_empty(&self) -> bool {
        self.graph.vertex_count() == 0
    }

    /// Look up a professional by name.
    pub fn find(&self, name: &str) -> Option<ProfessionalId> {
        self.by_name.get(name).copied()
    }

    /// Get a professional by ID.
    pub fn professional(&self, id: ProfessionalId) -> Option<&Professional> {
        self.graph.value(id)
    }

    /// Outgoing connections of a professional.
    pub fn connections(&self, id: ProfessionalId) -> &[ProfessionalId] {
        self.graph.neighbors(id)
    }
}

impl Adjacency for Network {
    type Id = ProfessionalId;
    type Successors<'a> = std::iter::Copied<std::slice::Iter<'a, ProfessionalId>>;

    fn successors(&self, id: ProfessionalId) -> Self::Successors<'_> {
        self.graph.successors(id)
    }
}

/// Fluent builder for constructing a [`Network`].
#[derive(Default)]
pub struct NetworkBuilder {
    professionals: Vec<Professional>,
    by_name: HashMap<String, ProfessionalId>,
    connections: Vec<(ProfessionalId, ProfessionalId)>,
    seen: HashSet<(ProfessionalId, ProfessionalId)>,
}

impl NetworkBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a professional. Names must be unique.
    pub fn add(
        &mut self,
        name: impl Into<String>,
        company: impl Into<String>,
        years: u32,
    ) -> ReachResult<ProfessionalId> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(ReachError::DuplicateProfessional(name));
        }

        let id = VertexId(self.professionals.len());
        self.by_name.insert(name.clone(), id);
        self.professionals.push(Professional {
            name,
            company: company.into(),
            years,
        });
        Ok(id)
    }

    /// Add a connection from `from` to `to`. Repeating a connection is a no-op.
    pub fn connect(&mut self, from: ProfessionalId, to: ProfessionalId) -> &mut Self {
        if self.seen.insert((from, to)) {
            self.connections.push((from, to));
        }
        self
    }

    /// Build the final network. Fails if a connection names an unknown professional.
    pub fn build(self) -> ReachResult<Network> {
        let graph = VertexGraph::from_parts(self.professionals, self.connections).map_err(
            |err| match err {
                ReachError::VertexNotFound(index) => ReachError::ProfessionalNotFound(index),
                other => other,
            },
        )?;
        log::debug!(
            "built network: {} professionals, {} connections",
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(Network {
            graph,
            by_name: self.by_name,
        })
    }
}
