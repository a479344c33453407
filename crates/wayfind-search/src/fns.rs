//! Closure-based graph adapter.
//!
//! [`GraphFns`] bundles `key` / `neighbors` / `cost` / `estimate` closures
//! into a value implementing the graph traits, for callers that don't want
//! to define a type just to run one search.

use std::hash::Hash;
use std::marker::PhantomData;

use crate::traits::{AstarGraph, Graph, WeightedGraph};

/// Edge function used by [`GraphFns::unweighted`] (unit cost, zero estimate).
pub type FlatCost<N> = fn(&N, &N) -> i32;

/// A graph assembled from closures.
pub struct GraphFns<N, K, FK, FN, FC, FE> {
    key: FK,
    neighbors: FN,
    cost: FC,
    estimate: FE,
    _marker: PhantomData<fn(&N) -> K>,
}

impl<N, K, FK, FN, FC, FE> GraphFns<N, K, FK, FN, FC, FE>
where
    N: Clone,
    K: Eq + Hash + Clone,
    FK: Fn(&N) -> K,
    FN: Fn(&N, &mut Vec<N>),
    FC: Fn(&N, &N) -> i32,
    FE: Fn(&N, &N) -> i32,
{
    /// Assemble a full A*-capable graph from the four callbacks.
    pub fn new(key: FK, neighbors: FN, cost: FC, estimate: FE) -> Self {
        Self {
            key,
            neighbors,
            cost,
            estimate,
            _marker: PhantomData,
        }
    }
}

impl<N, K, FK, FN> GraphFns<N, K, FK, FN, FlatCost<N>, FlatCost<N>>
where
    N: Clone,
    K: Eq + Hash + Clone,
    FK: Fn(&N) -> K,
    FN: Fn(&N, &mut Vec<N>),
{
    /// Assemble a graph with unit edge cost and a zero (always admissible)
    /// heuristic — enough for flood traversal and unweighted shortest paths.
    pub fn unweighted(key: FK, neighbors: FN) -> Self {
        Self {
            key,
            neighbors,
            cost: |_, _| 1,
            estimate: |_, _| 0,
            _marker: PhantomData,
        }
    }
}

impl<N, K, FK, FN, FC, FE> Graph for GraphFns<N, K, FK, FN, FC, FE>
where
    N: Clone,
    K: Eq + Hash + Clone,
    FK: Fn(&N) -> K,
    FN: Fn(&N, &mut Vec<N>),
{
    type Node = N;
    type Key = K;

    fn key(&self, n: &N) -> K {
        (self.key)(n)
    }

    fn neighbors(&self, n: &N, buf: &mut Vec<N>) {
        (self.neighbors)(n, buf);
    }
}

impl<N, K, FK, FN, FC, FE> WeightedGraph for GraphFns<N, K, FK, FN, FC, FE>
where
    N: Clone,
    K: Eq + Hash + Clone,
    FK: Fn(&N) -> K,
    FN: Fn(&N, &mut Vec<N>),
    FC: Fn(&N, &N) -> i32,
{
    fn cost(&self, from: &N, to: &N) -> i32 {
        (self.cost)(from, to)
    }
}

impl<N, K, FK, FN, FC, FE> AstarGraph for GraphFns<N, K, FK, FN, FC, FE>
where
    N: Clone,
    K: Eq + Hash + Clone,
    FK: Fn(&N) -> K,
    FN: Fn(&N, &mut Vec<N>),
    FC: Fn(&N, &N) -> i32,
    FE: Fn(&N, &N) -> i32,
{
    fn estimate(&self, from: &N, to: &N) -> i32 {
        (self.estimate)(from, to)
    }
}

#[cfg(test)]
mod tests {
    use wayfind_core::Point;

    use super::GraphFns;
    use crate::Searcher;
    use crate::distance::manhattan;

    #[test]
    fn closure_graph_runs_astar() {
        let graph = GraphFns::new(
            |p: &Point| *p,
            |p: &Point, buf: &mut Vec<Point>| {
                buf.extend(p.neighbors_4().into_iter().filter(|n| {
                    n.x >= 0 && n.x < 4 && n.y >= 0 && n.y < 4
                }));
            },
            |_: &Point, _: &Point| 1,
            |a: &Point, b: &Point| manhattan(*a, *b),
        );
        let mut searcher = Searcher::new();
        let path = searcher
            .astar_path(&graph, Point::ZERO, Point::new(3, 3))
            .unwrap();
        assert_eq!(path.len(), 7);
    }

    #[test]
    fn unweighted_graph_has_unit_cost() {
        use crate::traits::{AstarGraph, WeightedGraph};

        let graph = GraphFns::unweighted(
            |p: &Point| *p,
            |p: &Point, buf: &mut Vec<Point>| buf.extend(p.neighbors_4()),
        );
        let a = Point::ZERO;
        let b = Point::new(0, 1);
        assert_eq!(graph.cost(&a, &b), 1);
        assert_eq!(graph.estimate(&a, &b), 0);
    }
}
