use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

use crate::traits::Graph;

/// Sentinel cost meaning "unreachable" / impassable.
///
/// All cost arithmetic in the engines saturates, so edge weights and
/// heuristics may return this value freely without overflow.
pub const UNREACHABLE: i32 = i32::MAX;

// ---------------------------------------------------------------------------
// Internal node state for A*
// ---------------------------------------------------------------------------

pub(crate) struct NodeState<N, K> {
    pub(crate) node: N,
    pub(crate) g: i32,
    pub(crate) f: i32,
    pub(crate) parent: Option<K>,
    pub(crate) open: bool,
}

/// Open-set entry, ordered by `f` for use in `BinaryHeap`.
///
/// Ordering considers `f` only; ties among equal `f` pop in an unspecified
/// order, so callers must not depend on a specific tie-break.
pub(crate) struct OpenEntry<K> {
    pub(crate) key: K,
    pub(crate) f: i32,
}

impl<K> PartialEq for OpenEntry<K> {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f
    }
}

impl<K> Eq for OpenEntry<K> {}

impl<K> Ord for OpenEntry<K> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest f first.
        other.f.cmp(&self.f)
    }
}

impl<K> PartialOrd for OpenEntry<K> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// ---------------------------------------------------------------------------
// Searcher
// ---------------------------------------------------------------------------

/// Central coordinator for searches over a graph type `G`.
///
/// `Searcher` owns all internal caches (node-state map, open-set heap, flood
/// seen-set and worklist, neighbor scratch buffer). Caches are cleared, not
/// reallocated, at the start of each query, so repeated queries reuse
/// capacity and no state leaks between invocations — running the same query
/// twice, or the same graph under different heuristics, always gives
/// independent results.
pub struct Searcher<G: Graph> {
    pub(crate) nodes: HashMap<G::Key, NodeState<G::Node, G::Key>>,
    pub(crate) open: BinaryHeap<OpenEntry<G::Key>>,
    pub(crate) seen: HashSet<G::Key>,
    pub(crate) worklist: VecDeque<G::Node>,
    pub(crate) nbuf: Vec<G::Node>,
}

impl<G: Graph> Searcher<G> {
    /// Create a new `Searcher` with empty caches.
    pub fn new() -> Self {
        Self {
            nodes: HashMap::new(),
            open: BinaryHeap::new(),
            seen: HashSet::new(),
            worklist: VecDeque::new(),
            nbuf: Vec::with_capacity(8),
        }
    }
}

impl<G: Graph> Default for Searcher<G> {
    fn default() -> Self {
        Self::new()
    }
}
