//! Depth-first walk shared by every reachability query.
//!
//! The walk is written once against [`Adjacency`] and specialised by the
//! caller through a visit callback. A per-call visited set guarantees each
//! identity is expanded at most once, so cycles and self-loops terminate.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

/// A directed graph whose outgoing edges can be enumerated per identity.
pub trait Adjacency {
    /// Identity tracked by the visited set.
    type Id: Copy + Eq + Hash + Debug;

    /// Iterator over the outgoing neighbours of one identity.
    type Successors<'a>: Iterator<Item = Self::Id>
    where
        Self: 'a;

    /// Outgoing neighbours of `id`, in listed order. Unknown identities have none.
    fn successors(&self, id: Self::Id) -> Self::Successors<'_>;
}

/// How the walk keeps its frontier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WalkStrategy {
    /// Native call-stack recursion. Stack depth grows with the number of reachable identities.
    Recursive,
    /// Explicit worklist with the same preorder and short-circuit behaviour.
    #[default]
    Iterative,
}

/// What the visit callback wants done with an identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Mark visited and expand successors.
    Descend,
    /// Leave unmarked and unexpanded; other branches continue.
    Prune,
    /// Abort the whole walk.
    Stop,
}

/// How a walk ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkOutcome {
    /// Every reachable, unpruned identity was expanded.
    Exhausted,
    /// The callback returned [`Step::Stop`].
    Stopped,
}

impl WalkOutcome {
    /// True if the walk was aborted by the callback.
    pub fn is_stopped(self) -> bool {
        self == WalkOutcome::Stopped
    }
}

/// Depth-first walk from `start`, skipping anything already in `visited`.
///
/// `visit` is called once per identity reached that is not yet visited,
/// before it is marked. Successors are explored in the order the graph
/// lists them.
pub fn depth_first<G, F>(
    graph: &G,
    start: G::Id,
    visited: &mut HashSet<G::Id>,
    strategy: WalkStrategy,
    mut visit: F,
) -> WalkOutcome
where
    G: Adjacency + ?Sized,
    F: FnMut(G::Id) -> Step,
{
    match strategy {
        WalkStrategy::Recursive => walk_recursive(graph, start, visited, &mut visit),
        WalkStrategy::Iterative => walk_iterative(graph, start, visited, &mut visit),
    }
}

/// All identities reachable from `start` (start included), in preorder.
pub fn reachable<G>(graph: &G, start: G::Id, strategy: WalkStrategy) -> Vec<G::Id>
where
    G: Adjacency + ?Sized,
{
    let mut visited = HashSet::new();
    let mut order = Vec::new();
    depth_first(graph, start, &mut visited, strategy, |id| {
        order.push(id);
        Step::Descend
    });
    order
}

fn walk_recursive<G, F>(
    graph: &G,
    id: G::Id,
    visited: &mut HashSet<G::Id>,
    visit: &mut F,
) -> WalkOutcome
where
    G: Adjacency + ?Sized,
    F: FnMut(G::Id) -> Step,
{
    if visited.contains(&id) {
        return WalkOutcome::Exhausted;
    }
    match visit(id) {
        Step::Stop => return WalkOutcome::Stopped,
        Step::Prune => {
            log::trace!("pruned {:?}", id);
            return WalkOutcome::Exhausted;
        }
        Step::Descend => {}
    }

    visited.insert(id);
    log::trace!("expanding {:?}", id);

    for next in graph.successors(id) {
        if walk_recursive(graph, next, visited, visit).is_stopped() {
            return WalkOutcome::Stopped;
        }
    }

    WalkOutcome::Exhausted
}

fn walk_iterative<G, F>(
    graph: &G,
    start: G::Id,
    visited: &mut HashSet<G::Id>,
    visit: &mut F,
) -> WalkOutcome
where
    G: Adjacency + ?Sized,
    F: FnMut(G::Id) -> Step,
{
    let mut stack: Vec<G::Id> = vec![start];
    let mut successors: Vec<G::Id> = Vec::new();

    while let Some(id) = stack.pop() {
        if visited.contains(&id) {
            continue;
        }
        match visit(id) {
            Step::Stop => return WalkOutcome::Stopped,
            Step::Prune => {
                log::trace!("pruned {:?}", id);
                continue;
            }
            Step::Descend => {}
        }

        visited.insert(id);
        log::trace!("expanding {:?}", id);

        // Push in reverse so the first listed successor is popped first.
        successors.extend(graph.successors(id));
        stack.extend(successors.drain(..).rev());
    }

    WalkOutcome::Exhausted
}
