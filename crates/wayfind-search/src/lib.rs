//! Pathfinding and traversal engines over arbitrary node types.
//!
//! This crate provides two generic, composable search algorithms:
//!
//! - **A\*** shortest-path search ([`Searcher::astar_path`])
//! - **Flood traversal** with early stop ([`Searcher::flood`])
//!
//! Both operate through [`Searcher`], which owns and reuses internal caches
//! so that repeated queries incur few allocations after warm-up, and never
//! leak state between invocations.
//!
//! Nodes are opaque: the engines only see them through the graph traits,
//! which derive a hashable [`Key`](Graph::Key) identity per node. Graphs are
//! either types implementing the trait hierarchy or ad-hoc closures bundled
//! with [`GraphFns`].
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Graph`] | flood traversal |
//! | [`WeightedGraph`] : [`Graph`] | edge costs |
//! | [`AstarGraph`] : [`WeightedGraph`] | A* |

mod astar;
mod distance;
mod flood;
mod fns;
mod searcher;
mod traits;

pub use distance::{chebyshev, manhattan, manhattan3};
pub use flood::FloodControl;
pub use fns::{FlatCost, GraphFns};
pub use searcher::{Searcher, UNREACHABLE};
pub use traits::{AstarGraph, Graph, WeightedGraph};
