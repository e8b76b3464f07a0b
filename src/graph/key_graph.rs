//! Key-adjacency graph: integer keys mapped to sets of neighbour keys.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::types::{ReachError, ReachResult};

use super::traversal::Adjacency;

type AdjacencyMap = HashMap<i64, HashSet<i64>>;

/// Directed graph over integer keys with no separate vertex objects.
///
/// A key present in the mapping exists even with no neighbours. Every
/// neighbour must itself be a key; construction rejects dangling
/// references.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "AdjacencyMap", into = "AdjacencyMap")]
pub struct KeyGraph {
    adjacency: AdjacencyMap,
}

impl KeyGraph {
    /// Wrap an adjacency mapping after checking every neighbour is a key.
    pub fn from_adjacency(adjacency: HashMap<i64, HashSet<i64>>) -> ReachResult<Self> {
        if let Some((key, neighbor)) = first_dangling(&adjacency) {
            return Err(ReachError::DanglingNeighbor { key, neighbor });
        }
        log::debug!("built key graph: {} keys", adjacency.len());
        Ok(Self { adjacency })
    }

    /// Build from `(key, neighbours)` pairs. Repeated keys merge their neighbours.
    pub fn from_edges<I, N>(entries: I) -> ReachResult<Self>
    where
        I: IntoIterator<Item = (i64, N)>,
        N: IntoIterator<Item = i64>,
    {
        let mut adjacency = AdjacencyMap::new();
        for (key, neighbors) in entries {
            adjacency.entry(key).or_default().extend(neighbors);
        }
        Self::from_adjacency(adjacency)
    }

    /// Parse a JSON object such as `{"1": [2, 3], "2": [], "3": []}`.
    pub fn from_json(json: &str) -> ReachResult<Self> {
        let adjacency: AdjacencyMap = serde_json::from_str(json)?;
        Self::from_adjacency(adjacency)
    }

    /// Whether `key` exists in the mapping.
    pub fn contains(&self, key: i64) -> bool {
        self.adjacency.contains_key(&key)
    }

    /// Neighbour set of a key, or `None` if the key does not exist.
    pub fn neighbors(&self, key: i64) -> Option<&HashSet<i64>> {
        self.adjacency.get(&key)
    }

    /// Number of keys.
    pub fn key_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(HashSet::len).sum()
    }

    /// All keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = i64> + '_ {
        self.adjacency.keys().copied()
    }
}

/// Lowest key (then lowest neighbour) whose neighbour is missing from the mapping.
fn first_dangling(adjacency: &AdjacencyMap) -> Option<(i64, i64)> {
    let mut keys: Vec<i64> = adjacency.keys().copied().collect();
    keys.sort_unstable();

    for key in keys {
        let missing = adjacency[&key]
            .iter()
            .copied()
            .filter(|n| !adjacency.contains_key(n))
            .min();
        if let Some(neighbor) = missing {
            return Some((key, neighbor));
        }
    }
    None
}

impl TryFrom<AdjacencyMap> for KeyGraph {
    type Error = ReachError;

    fn try_from(adjacency: AdjacencyMap) -> ReachResult<Self> {
        Self::from_adjacency(adjacency)
    }
}

impl From<KeyGraph> for AdjacencyMap {
    fn from(graph: KeyGraph) -> Self {
        graph.adjacency
    }
}

impl Adjacency for KeyGraph {
    type Id = i64;
    type Successors<'a> = std::iter::Copied<
        std::iter::Flatten<std::option::IntoIter<&'a HashSet<i64>>>,
    >;

    fn successors(&self, key: i64) -> Self::Successors<'_> {
        self.adjacency.get(&key).into_iter().flatten().copied()
    }
}
