//! Extended-network queries over the professional contact graph.

use std::collections::HashSet;

use crate::graph::{depth_first, Network, ProfessionalId, Step};

use super::QueryEngine;

impl QueryEngine {
    /// Whether anyone reachable from `start` (start included) works at `company`.
    ///
    /// Company names must match exactly. `None` yields false.
    pub fn has_extended_connection_at_company(
        &self,
        network: &Network,
        start: Option<ProfessionalId>,
        company: &str,
    ) -> bool {
        let Some(start) = start else {
            return false;
        };

        let mut visited = HashSet::new();
        let found = depth_first(network, start, &mut visited, self.strategy, |id| {
            match network.professional(id) {
                Some(p) if p.company == company => Step::Stop,
                Some(_) => Step::Descend,
                None => Step::Prune,
            }
        })
        .is_stopped();

        log::debug!(
            "has_extended_connection_at_company from {} at {:?}: {}",
            start,
            company,
            found
        );
        found
    }

    /// Names of everyone reachable from `start` (start included), ascending.
    pub fn extended_network(&self, network: &Network, start: Option<ProfessionalId>) -> Vec<String> {
        let Some(start) = start else {
            return Vec::new();
        };

        let mut visited = HashSet::new();
        let mut names = Vec::new();
        depth_first(network, start, &mut visited, self.strategy, |id| {
            match network.professional(id) {
                Some(p) => {
                    names.push(p.name.clone());
                    Step::Descend
                }
                None => Step::Prune,
            }
        });
        names.sort();
        names
    }
}

/// [`QueryEngine::has_extended_connection_at_company`] with the default engine.
pub fn has_extended_connection_at_company(
    network: &Network,
    start: Option<ProfessionalId>,
    company: &str,
) -> bool {
    QueryEngine::new().has_extended_connection_at_company(network, start, company)
}

/// [`QueryEngine::extended_network`] with the default engine.
pub fn extended_network(network: &Network, start: Option<ProfessionalId>) -> Vec<String> {
    QueryEngine::new().extended_network(network, start)
}
