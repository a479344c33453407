use std::hash::Hash;

/// Minimal search interface — node identity and neighbor enumeration.
///
/// `Node` is opaque to the engines: they never inspect it, only pass it back
/// to the graph and derive a [`Key`](Graph::Key) from it. Two nodes that
/// denote the same place must map to equal keys, and the engines treat
/// key-equality as node-identity.
pub trait Graph {
    /// Caller-defined search-space element (grid cell, vertex, ...).
    type Node: Clone;
    /// Structurally comparable/hashable identity derived from a node.
    type Key: Eq + Hash + Clone;

    /// Derive the key for `n`. Must be pure and deterministic.
    fn key(&self, n: &Self::Node) -> Self::Key;

    /// Append neighbors of `n` into `buf`. The caller clears `buf` before
    /// calling. May include already-visited nodes or `n` itself; the engines
    /// de-duplicate by key.
    fn neighbors(&self, n: &Self::Node, buf: &mut Vec<Self::Node>);
}

/// Graph with weighted edges.
pub trait WeightedGraph: Graph {
    /// Cost of the single step from `from` to adjacent `to`. Must be >= 0.
    /// Return [`UNREACHABLE`](crate::UNREACHABLE) for an impassable edge
    /// without excluding it from [`neighbors`](Graph::neighbors).
    fn cost(&self, from: &Self::Node, to: &Self::Node) -> i32;
}

/// Full A* graph with an admissible heuristic.
pub trait AstarGraph: WeightedGraph {
    /// Heuristic estimate of the remaining cost from `from` to `to`.
    /// Must be non-negative and never overestimate the true cost
    /// (admissible). The engine assumes this; it does not verify it.
    fn estimate(&self, from: &Self::Node, to: &Self::Node) -> i32;
}
