//! Phase 4 tests: Randomised properties over cyclic graphs.

use std::collections::{HashMap, HashSet, VecDeque};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use reachkit::graph::traversal::reachable;
use reachkit::graph::{KeyGraph, VertexGraph, VertexGraphBuilder, WalkStrategy};
use reachkit::query::QueryEngine;
use reachkit::types::{Parity, VertexId};

const SEEDS: u64 = 40;

// ==================== Helper ====================

fn engines() -> [QueryEngine; 2] {
    [
        QueryEngine::with_strategy(WalkStrategy::Recursive),
        QueryEngine::with_strategy(WalkStrategy::Iterative),
    ]
}

/// Random graph with duplicate values, self-loops and cycles.
/// Returns the graph plus its value list and edge list for rebuilding.
fn random_graph(rng: &mut StdRng) -> (VertexGraph<i64>, Vec<i64>, Vec<(usize, usize)>) {
    let n = rng.gen_range(1..40);
    let values: Vec<i64> = (0..n).map(|_| rng.gen_range(-10..10)).collect();
    let edge_count = rng.gen_range(0..n * 3);
    let edges: Vec<(usize, usize)> = (0..edge_count)
        .map(|_| (rng.gen_range(0..n), rng.gen_range(0..n)))
        .collect();
    (build(&values, &edges), values, edges)
}

fn build(values: &[i64], edges: &[(usize, usize)]) -> VertexGraph<i64> {
    let mut b = VertexGraphBuilder::new();
    let ids: Vec<VertexId> = values.iter().map(|&v| b.add_vertex(v)).collect();
    for &(from, to) in edges {
        b.link(ids[from], ids[to]);
    }
    b.build().unwrap()
}

/// Breadth-first oracle, independent of the library walk.
fn oracle_reach(graph: &VertexGraph<i64>, start: VertexId) -> HashSet<VertexId> {
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(id) = queue.pop_front() {
        for &next in graph.neighbors(id) {
            if seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    seen
}

fn random_key_graph(rng: &mut StdRng) -> KeyGraph {
    let keys: Vec<i64> = (0..rng.gen_range(1..25)).map(|_| rng.gen_range(-5..20)).collect();
    let mut map: HashMap<i64, HashSet<i64>> = keys.iter().map(|&k| (k, HashSet::new())).collect();
    for _ in 0..keys.len() * 2 {
        let from = keys[rng.gen_range(0..keys.len())];
        let to = keys[rng.gen_range(0..keys.len())];
        map.get_mut(&from).unwrap().insert(to);
    }
    KeyGraph::from_adjacency(map).unwrap()
}

fn oracle_positive_path(graph: &KeyGraph, start: i64, end: i64) -> bool {
    if start <= 0 || end <= 0 || !graph.contains(start) || !graph.contains(end) {
        return false;
    }
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(key) = queue.pop_front() {
        if key == end {
            return true;
        }
        for &next in graph.neighbors(key).unwrap() {
            if next > 0 && seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    false
}

// ==================== Vertex Graph Properties ====================

#[test]
fn test_odd_count_matches_oracle() {
    for seed in 0..SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let (graph, _, _) = random_graph(&mut rng);

        for start in graph.ids() {
            let expected = oracle_reach(&graph, start)
                .into_iter()
                .filter(|&id| graph.value(id).unwrap().is_odd())
                .count();
            for engine in engines() {
                assert_eq!(engine.odd_count(&graph, Some(start)), expected, "seed {}", seed);
            }
        }
    }
}

#[test]
fn test_sorted_reachable_sorted_and_sized() {
    for seed in 0..SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let (graph, _, _) = random_graph(&mut rng);

        for start in graph.ids() {
            let reach = oracle_reach(&graph, start);
            for engine in engines() {
                let values = engine.sorted_reachable(&graph, Some(start));
                assert!(values.windows(2).all(|w| w[0] <= w[1]), "seed {}", seed);
                assert_eq!(values.len(), reach.len());
                assert_eq!(engine.reachable_count(&graph, Some(start)), reach.len());

                let mut expected: Vec<i64> =
                    reach.iter().map(|&id| *graph.value(id).unwrap()).collect();
                expected.sort_unstable();
                assert_eq!(values, expected);
            }
        }
    }
}

#[test]
fn test_sorted_reachable_invariant_under_relabeling() {
    for seed in 0..SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let (graph, values, edges) = random_graph(&mut rng);
        let n = values.len();

        // Reverse the insertion order: old index i becomes n - 1 - i.
        let relabel = |i: usize| n - 1 - i;
        let rev_values: Vec<i64> = values.iter().rev().copied().collect();
        let rev_edges: Vec<(usize, usize)> =
            edges.iter().map(|&(a, b)| (relabel(a), relabel(b))).collect();
        let relabeled = build(&rev_values, &rev_edges);

        let old_ids: Vec<VertexId> = graph.ids().collect();
        let new_ids: Vec<VertexId> = relabeled.ids().collect();
        for i in 0..n {
            let engine = QueryEngine::new();
            assert_eq!(
                engine.sorted_reachable(&graph, Some(old_ids[i])),
                engine.sorted_reachable(&relabeled, Some(new_ids[relabel(i)])),
                "seed {}",
                seed
            );
        }
    }
}

#[test]
fn test_strategies_share_preorder() {
    for seed in 0..SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let (graph, _, _) = random_graph(&mut rng);

        for start in graph.ids() {
            assert_eq!(
                reachable(&graph, start, WalkStrategy::Recursive),
                reachable(&graph, start, WalkStrategy::Iterative),
                "seed {}",
                seed
            );
        }
    }
}

#[test]
fn test_queries_are_idempotent() {
    let mut rng = StdRng::seed_from_u64(7);
    let (graph, _, _) = random_graph(&mut rng);
    let engine = QueryEngine::new();
    let start = graph.ids().next();

    assert_eq!(engine.odd_count(&graph, start), engine.odd_count(&graph, start));
    assert_eq!(
        engine.sorted_reachable(&graph, start),
        engine.sorted_reachable(&graph, start)
    );
}

// ==================== Mutual Reachability Properties ====================

#[test]
fn test_two_way_symmetric_and_matches_oracle() {
    for seed in 0..SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let (graph, _, _) = random_graph(&mut rng);
        let reach: HashMap<VertexId, HashSet<VertexId>> =
            graph.ids().map(|id| (id, oracle_reach(&graph, id))).collect();

        for a in graph.ids() {
            for b in graph.ids() {
                let expected = reach[&a].contains(&b) && reach[&b].contains(&a);
                for engine in engines() {
                    let ab = engine.two_way(&graph, Some(a), Some(b));
                    assert_eq!(ab, engine.two_way(&graph, Some(b), Some(a)));
                    assert_eq!(ab, expected, "seed {} {} {}", seed, a, b);
                    assert_eq!(engine.one_way(&graph, Some(a), Some(b)), reach[&a].contains(&b));
                }
            }
            assert!(QueryEngine::new().two_way(&graph, Some(a), Some(a)));
        }
    }
}

// ==================== Key Graph Properties ====================

#[test]
fn test_positive_path_matches_oracle() {
    for seed in 0..SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = random_key_graph(&mut rng);
        let keys: Vec<i64> = graph.keys().collect();

        for &start in &keys {
            for &end in keys.iter().chain([0, -1, 100].iter()) {
                let expected = oracle_positive_path(&graph, start, end);
                for engine in engines() {
                    assert_eq!(
                        engine.positive_path_exists(&graph, start, end),
                        expected,
                        "seed {} {} -> {}",
                        seed,
                        start,
                        end
                    );
                }
                if start <= 0 || end <= 0 {
                    assert!(!expected);
                }
            }
        }
    }
}

#[test]
fn test_sorted_reachable_keys_are_unique_and_sorted() {
    for seed in 0..SEEDS {
        let mut rng = StdRng::seed_from_u64(seed);
        let graph = random_key_graph(&mut rng);

        for start in graph.keys() {
            let keys = QueryEngine::new().sorted_reachable_keys(&graph, start);
            assert!(keys.windows(2).all(|w| w[0] < w[1]), "seed {}", seed);
            assert!(keys.binary_search(&start).is_ok());
            assert!(keys.iter().all(|&k| graph.contains(k)));
        }
    }
}
