//! Hill-climbing pathfinding over a character heightmap.
//!
//! Heights run `a..=z`; a step may climb at most one unit. `S` marks the
//! start (height `a`), `E` the goal (height `z`).
//!
//! Run: cargo run --bin heightmap

use wayfind_core::{Grid, Point};
use wayfind_search::{AstarGraph, Graph, Searcher, UNREACHABLE, WeightedGraph, manhattan};

const MAP: &str = "Sabqponm
abcryxxl
accszExk
acctuvwj
abdefghi";

struct Heightmap {
    grid: Grid<u8>,
}

impl Heightmap {
    fn parse(s: &str) -> (Self, Point, Point) {
        let rows: Vec<Vec<u8>> = s.lines().map(|l| l.bytes().collect()).collect();
        let mut grid = Grid::from_rows(rows).expect("ragged heightmap");
        let start = grid.find(|&c| c == b'S').expect("no start cell");
        let goal = grid.find(|&c| c == b'E').expect("no goal cell");
        grid.set(start, b'a');
        grid.set(goal, b'z');
        (Self { grid }, start, goal)
    }
}

impl Graph for Heightmap {
    type Node = Point;
    type Key = Point;

    fn key(&self, n: &Point) -> Point {
        *n
    }

    fn neighbors(&self, n: &Point, buf: &mut Vec<Point>) {
        buf.extend(n.neighbors_4().into_iter().filter(|p| self.grid.contains(*p)));
    }
}

impl WeightedGraph for Heightmap {
    fn cost(&self, from: &Point, to: &Point) -> i32 {
        let a = *self.grid.get(*from).expect("from out of bounds") as i32;
        let b = *self.grid.get(*to).expect("to out of bounds") as i32;
        if b - a > 1 { UNREACHABLE } else { 1 }
    }
}

impl AstarGraph for Heightmap {
    fn estimate(&self, from: &Point, to: &Point) -> i32 {
        manhattan(*from, *to)
    }
}

fn main() {
    let (map, start, goal) = Heightmap::parse(MAP);
    let mut searcher = Searcher::new();

    match searcher.astar_path(&map, start, goal) {
        Some(path) => {
            println!("reached {goal} in {} steps", path.len() - 1);
            let on_path: std::collections::HashSet<_> = path.iter().copied().collect();
            for y in 0..map.grid.height() {
                let row: String = (0..map.grid.width())
                    .map(|x| {
                        let p = Point::new(x as i32, y as i32);
                        if on_path.contains(&p) {
                            *map.grid.get(p).unwrap() as char
                        } else {
                            '.'
                        }
                    })
                    .collect();
                println!("{row}");
            }
        }
        None => println!("no path from {start} to {goal}"),
    }
}
