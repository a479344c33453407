//! **wayfind-core** — Shared primitives for the *wayfind* crates.
//!
//! This crate provides the foundational types used across the *wayfind*
//! ecosystem: integer geometry for 2D and 3D search spaces, an owned
//! row-major grid container, and combination/subset enumeration helpers.

pub mod combin;
pub mod geom;
pub mod grid;

pub use combin::{combinations, subsets};
pub use geom::{Point, Point3};
pub use grid::Grid;
