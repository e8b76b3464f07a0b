//! One-way and two-way reachability between vertices.

use std::collections::HashSet;

use crate::graph::{depth_first, Step, VertexGraph};
use crate::types::VertexId;

use super::QueryEngine;

impl QueryEngine {
    /// Whether `to` is reachable from `from`. A vertex always reaches itself.
    ///
    /// `None` or an ID outside the graph on either side yields false.
    pub fn one_way<T>(
        &self,
        graph: &VertexGraph<T>,
        from: Option<VertexId>,
        to: Option<VertexId>,
    ) -> bool {
        let (Some(from), Some(to)) = (from, to) else {
            return false;
        };
        if !graph.contains(from) || !graph.contains(to) {
            return false;
        }

        let mut visited = HashSet::new();
        depth_first(graph, from, &mut visited, self.strategy, |id| {
            if id == to {
                Step::Stop
            } else {
                Step::Descend
            }
        })
        .is_stopped()
    }

    /// Whether `a` reaches `b` and `b` reaches `a`.
    ///
    /// Each direction runs with its own visited set. `None` on either side
    /// yields false, including when both are `None`.
    pub fn two_way<T>(
        &self,
        graph: &VertexGraph<T>,
        a: Option<VertexId>,
        b: Option<VertexId>,
    ) -> bool {
        let (Some(a), Some(b)) = (a, b) else {
            return false;
        };
        if !graph.contains(a) || !graph.contains(b) {
            return false;
        }
        if a == b {
            return true;
        }

        let connected =
            self.one_way(graph, Some(a), Some(b)) && self.one_way(graph, Some(b), Some(a));
        log::debug!("two_way {} <-> {}: {}", a, b, connected);
        connected
    }
}

/// [`QueryEngine::one_way`] with the default engine.
pub fn one_way<T>(graph: &VertexGraph<T>, from: Option<VertexId>, to: Option<VertexId>) -> bool {
    QueryEngine::new().one_way(graph, from, to)
}

/// [`QueryEngine::two_way`] with the default engine.
pub fn two_way<T>(graph: &VertexGraph<T>, a: Option<VertexId>, b: Option<VertexId>) -> bool {
    QueryEngine::new().two_way(graph, a, b)
}
