//! Flood traversal: exhaustive reachable-set visiting from a start node.

use crate::searcher::Searcher;
use crate::traits::Graph;

/// Returned by a flood `visit` callback to continue or halt the traversal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FloodControl {
    /// Keep traversing.
    Continue,
    /// Halt immediately; enqueued-but-unvisited nodes are discarded.
    Stop,
}

impl<G: Graph> Searcher<G> {
    /// Visit every node reachable from `start`, breadth-first, exactly once
    /// per distinct key. Returns the visited nodes in visit order.
    ///
    /// `visit` is called when a node is dequeued, before its neighbors are
    /// enumerated. Returning [`FloodControl::Stop`] halts the whole
    /// traversal; the stopping node counts as visited, nothing after it
    /// does.
    ///
    /// The traversal uses an explicit worklist rather than recursion, so
    /// regions of tens of thousands of cells (e.g. voxel fields) cannot
    /// overflow the call stack.
    pub fn flood(
        &mut self,
        graph: &G,
        start: G::Node,
        mut visit: impl FnMut(&G::Node) -> FloodControl,
    ) -> Vec<G::Node> {
        self.seen.clear();
        self.worklist.clear();

        self.seen.insert(graph.key(&start));
        self.worklist.push_back(start);

        let mut nbuf = std::mem::take(&mut self.nbuf);
        let mut visited = Vec::new();

        while let Some(node) = self.worklist.pop_front() {
            if visit(&node) == FloodControl::Stop {
                visited.push(node);
                self.worklist.clear();
                break;
            }

            nbuf.clear();
            graph.neighbors(&node, &mut nbuf);
            for n in nbuf.drain(..) {
                // De-duplicate at enqueue time; neighbors may repeat nodes.
                if self.seen.insert(graph.key(&n)) {
                    self.worklist.push_back(n);
                }
            }

            visited.push(node);
        }

        self.nbuf = nbuf;
        log::trace!("flood: visited {} nodes", visited.len());
        visited
    }
}

#[cfg(test)]
mod tests {
    use wayfind_core::{Point, Point3};

    use super::FloodControl;
    use crate::Searcher;
    use crate::fns::GraphFns;
    use crate::traits::Graph;

    struct Bounded {
        width: i32,
        height: i32,
    }

    impl Graph for Bounded {
        type Node = Point;
        type Key = Point;

        fn key(&self, n: &Point) -> Point {
            *n
        }

        fn neighbors(&self, n: &Point, buf: &mut Vec<Point>) {
            buf.extend(n.neighbors_4().into_iter().filter(|p| {
                p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
            }));
        }
    }

    #[test]
    fn flood_visits_every_node_exactly_once() {
        let graph = Bounded {
            width: 7,
            height: 5,
        };
        let mut searcher = Searcher::new();
        let mut calls = 0;
        let visited = searcher.flood(&graph, Point::new(3, 2), |_| {
            calls += 1;
            FloodControl::Continue
        });
        assert_eq!(visited.len(), 35);
        assert_eq!(calls, 35);
        let unique: std::collections::HashSet<_> = visited.iter().copied().collect();
        assert_eq!(unique.len(), 35);
    }

    #[test]
    fn flood_early_stop_visits_nothing_further() {
        let graph = Bounded {
            width: 10,
            height: 10,
        };
        let mut searcher = Searcher::new();
        let mut calls = 0;
        let visited = searcher.flood(&graph, Point::ZERO, |_| {
            calls += 1;
            if calls == 5 {
                FloodControl::Stop
            } else {
                FloodControl::Continue
            }
        });
        assert_eq!(calls, 5);
        assert_eq!(visited.len(), 5);
    }

    #[test]
    fn flood_is_breadth_first() {
        let graph = Bounded {
            width: 9,
            height: 9,
        };
        let mut searcher = Searcher::new();
        let start = Point::new(4, 4);
        let visited = searcher.flood(&graph, start, |_| FloodControl::Continue);
        // Distances from the start never decrease along the visit order.
        let dist = |p: Point| (p.x - start.x).abs() + (p.y - start.y).abs();
        for w in visited.windows(2) {
            assert!(dist(w[0]) <= dist(w[1]));
        }
    }

    #[test]
    fn flood_with_closure_graph() {
        // 3D voxel shell: all cells of a 6x6x6 box, via the closure adapter.
        let in_box = |p: &Point3| {
            p.x >= 0 && p.x < 6 && p.y >= 0 && p.y < 6 && p.z >= 0 && p.z < 6
        };
        let graph = GraphFns::unweighted(
            |p: &Point3| *p,
            move |p: &Point3, buf: &mut Vec<Point3>| {
                buf.extend(p.neighbors_6().into_iter().filter(in_box));
            },
        );
        let mut searcher = Searcher::new();
        let visited = searcher.flood(&graph, Point3::ZERO, |_| FloodControl::Continue);
        assert_eq!(visited.len(), 6 * 6 * 6);
    }

    #[test]
    fn flood_large_region_does_not_recurse() {
        // 300x300 = 90_000 cells; a recursive fill would risk the stack.
        let graph = Bounded {
            width: 300,
            height: 300,
        };
        let mut searcher = Searcher::new();
        let visited = searcher.flood(&graph, Point::ZERO, |_| FloodControl::Continue);
        assert_eq!(visited.len(), 90_000);
    }

    #[test]
    fn flood_single_node_graph() {
        struct Lone;
        impl Graph for Lone {
            type Node = u32;
            type Key = u32;
            fn key(&self, n: &u32) -> u32 {
                *n
            }
            fn neighbors(&self, _: &u32, _: &mut Vec<u32>) {}
        }
        let mut searcher = Searcher::new();
        let visited = searcher.flood(&Lone, 7, |_| FloodControl::Continue);
        assert_eq!(visited, vec![7]);
    }

    #[test]
    fn flood_duplicate_neighbors_never_double_visit() {
        struct Dupes;
        impl Graph for Dupes {
            type Node = i32;
            type Key = i32;
            fn key(&self, n: &i32) -> i32 {
                *n
            }
            fn neighbors(&self, n: &i32, buf: &mut Vec<i32>) {
                // Repeats every neighbor, and the node itself.
                for _ in 0..3 {
                    buf.push(*n);
                    if *n < 5 {
                        buf.push(*n + 1);
                    }
                    if *n > 0 {
                        buf.push(*n - 1);
                    }
                }
            }
        }
        let mut searcher = Searcher::new();
        let mut calls = 0;
        let visited = searcher.flood(&Dupes, 0, |_| {
            calls += 1;
            FloodControl::Continue
        });
        assert_eq!(visited, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(calls, 6);
    }
}
