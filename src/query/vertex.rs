//! Counting and collecting queries over node-object graphs.

use std::collections::HashSet;

use crate::graph::{depth_first, Step, VertexGraph};
use crate::types::{Parity, VertexId};

use super::QueryEngine;

impl QueryEngine {
    /// Number of distinct vertices reachable from `start` (start included) whose value is odd.
    ///
    /// `None` or an ID outside the graph yields 0.
    pub fn odd_count<T: Parity>(&self, graph: &VertexGraph<T>, start: Option<VertexId>) -> usize {
        let Some(start) = start.filter(|&id| graph.contains(id)) else {
            return 0;
        };

        let mut visited = HashSet::new();
        let mut total = 0;
        depth_first(graph, start, &mut visited, self.strategy, |id| {
            if graph.value(id).is_some_and(|value| value.is_odd()) {
                total += 1;
            }
            Step::Descend
        });

        log::debug!(
            "odd_count from {}: {} odd of {} reachable",
            start,
            total,
            visited.len()
        );
        total
    }

    /// Values of every vertex reachable from `start` (start included), ascending.
    ///
    /// Distinct vertices with equal values each contribute one entry.
    pub fn sorted_reachable<T: Ord + Clone>(
        &self,
        graph: &VertexGraph<T>,
        start: Option<VertexId>,
    ) -> Vec<T> {
        let Some(start) = start.filter(|&id| graph.contains(id)) else {
            return Vec::new();
        };

        let mut visited = HashSet::new();
        depth_first(graph, start, &mut visited, self.strategy, |_| Step::Descend);

        let mut values: Vec<T> = graph.values_of(&visited).cloned().collect();
        values.sort();

        log::debug!("sorted_reachable from {}: {} values", start, values.len());
        values
    }

    /// Number of distinct vertices reachable from `start`, start included.
    pub fn reachable_count<T>(&self, graph: &VertexGraph<T>, start: Option<VertexId>) -> usize {
        let Some(start) = start.filter(|&id| graph.contains(id)) else {
            return 0;
        };

        let mut visited = HashSet::new();
        depth_first(graph, start, &mut visited, self.strategy, |_| Step::Descend);
        visited.len()
    }
}

/// [`QueryEngine::odd_count`] with the default engine.
pub fn odd_count<T: Parity>(graph: &VertexGraph<T>, start: Option<VertexId>) -> usize {
    QueryEngine::new().odd_count(graph, start)
}

/// [`QueryEngine::sorted_reachable`] with the default engine.
pub fn sorted_reachable<T: Ord + Clone>(graph: &VertexGraph<T>, start: Option<VertexId>) -> Vec<T> {
    QueryEngine::new().sorted_reachable(graph, start)
}

/// [`QueryEngine::reachable_count`] with the default engine.
pub fn reachable_count<T>(graph: &VertexGraph<T>, start: Option<VertexId>) -> usize {
    QueryEngine::new().reachable_count(graph, start)
}
