//! Exterior surface area of a voxel droplet via bounded flood fill.
//!
//! Floods the air around the droplet inside a bounding box one cell larger
//! than the droplet on every side, counting every face where the flood
//! touches a voxel. Interior air pockets are never reached, so their faces
//! are not counted.
//!
//! Run: cargo run --bin voxels

use std::collections::HashSet;

use wayfind_core::Point3;
use wayfind_search::{FloodControl, GraphFns, Searcher};

const DROPLET: &[[i32; 3]] = &[
    [2, 2, 2],
    [1, 2, 2],
    [3, 2, 2],
    [2, 1, 2],
    [2, 3, 2],
    [2, 2, 1],
    [2, 2, 3],
    [2, 2, 4],
    [2, 2, 6],
    [1, 2, 5],
    [3, 2, 5],
    [2, 1, 5],
    [2, 3, 5],
];

fn main() {
    let voxels: HashSet<Point3> = DROPLET
        .iter()
        .map(|&[x, y, z]| Point3::new(x, y, z))
        .collect();

    let min = Point3::new(
        voxels.iter().map(|v| v.x).min().unwrap_or(0) - 1,
        voxels.iter().map(|v| v.y).min().unwrap_or(0) - 1,
        voxels.iter().map(|v| v.z).min().unwrap_or(0) - 1,
    );
    let max = Point3::new(
        voxels.iter().map(|v| v.x).max().unwrap_or(0) + 1,
        voxels.iter().map(|v| v.y).max().unwrap_or(0) + 1,
        voxels.iter().map(|v| v.z).max().unwrap_or(0) + 1,
    );

    let air = GraphFns::unweighted(
        |p: &Point3| *p,
        |p: &Point3, buf: &mut Vec<Point3>| {
            buf.extend(p.neighbors_6().into_iter().filter(|n| {
                n.x >= min.x
                    && n.x <= max.x
                    && n.y >= min.y
                    && n.y <= max.y
                    && n.z >= min.z
                    && n.z <= max.z
                    && !voxels.contains(n)
            }));
        },
    );

    let mut searcher = Searcher::new();
    let mut faces = 0;
    searcher.flood(&air, min, |cell| {
        faces += cell
            .neighbors_6()
            .into_iter()
            .filter(|n| voxels.contains(n))
            .count();
        FloodControl::Continue
    });

    println!("droplet of {} voxels", voxels.len());
    println!("exterior surface area: {faces}");
}
