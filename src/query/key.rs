//! Queries over key-adjacency graphs.

use std::collections::HashSet;

use crate::graph::{depth_first, KeyGraph, Step};

use super::QueryEngine;

impl QueryEngine {
    /// Every key reachable from `start` (start included), ascending.
    ///
    /// A start key absent from the graph yields an empty list.
    pub fn sorted_reachable_keys(&self, graph: &KeyGraph, start: i64) -> Vec<i64> {
        if !graph.contains(start) {
            return Vec::new();
        }

        let mut visited = HashSet::new();
        let mut keys = Vec::new();
        depth_first(graph, start, &mut visited, self.strategy, |key| {
            keys.push(key);
            Step::Descend
        });
        keys.sort_unstable();

        log::debug!("sorted_reachable_keys from {}: {} keys", start, keys.len());
        keys
    }

    /// Whether a path from `start` to `end` exists that only passes through positive keys.
    ///
    /// Both endpoints must be strictly positive and present in the graph. A
    /// key always reaches itself. Non-positive keys met along the way prune
    /// that branch only.
    pub fn positive_path_exists(&self, graph: &KeyGraph, start: i64, end: i64) -> bool {
        if start <= 0 || end <= 0 || !graph.contains(start) || !graph.contains(end) {
            return false;
        }

        let mut visited = HashSet::new();
        let found = depth_first(graph, start, &mut visited, self.strategy, |key| {
            if key <= 0 {
                Step::Prune
            } else if key == end {
                Step::Stop
            } else {
                Step::Descend
            }
        })
        .is_stopped();

        log::debug!("positive_path_exists {} -> {}: {}", start, end, found);
        found
    }
}

/// [`QueryEngine::sorted_reachable_keys`] with the default engine.
pub fn sorted_reachable_keys(graph: &KeyGraph, start: i64) -> Vec<i64> {
    QueryEngine::new().sorted_reachable_keys(graph, start)
}

/// [`QueryEngine::positive_path_exists`] with the default engine.
pub fn positive_path_exists(graph: &KeyGraph, start: i64, end: i64) -> bool {
    QueryEngine::new().positive_path_exists(graph, start, end)
}
