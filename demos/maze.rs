//! A* and flood fill on a randomly generated obstacle field.
//!
//! Run: cargo run --bin maze

use rand::{RngExt, SeedableRng};
use wayfind_core::{Grid, Point};
use wayfind_search::{
    AstarGraph, FloodControl, Graph, Searcher, WeightedGraph, manhattan,
};

const WIDTH: usize = 48;
const HEIGHT: usize = 24;

struct Field {
    walls: Grid<bool>,
}

impl Graph for Field {
    type Node = Point;
    type Key = Point;

    fn key(&self, n: &Point) -> Point {
        *n
    }

    fn neighbors(&self, n: &Point, buf: &mut Vec<Point>) {
        buf.extend(
            n.neighbors_4()
                .into_iter()
                .filter(|p| self.walls.get(*p) == Some(&false)),
        );
    }
}

impl WeightedGraph for Field {
    fn cost(&self, _: &Point, _: &Point) -> i32 {
        1
    }
}

impl AstarGraph for Field {
    fn estimate(&self, from: &Point, to: &Point) -> i32 {
        manhattan(*from, *to)
    }
}

fn main() {
    let mut rng = rand::rngs::StdRng::seed_from_u64(7);
    let mut walls = Grid::new(WIDTH, HEIGHT, false);
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            let p = Point::new(x as i32, y as i32);
            walls.set(p, rng.random_range(0..100) < 30);
        }
    }

    let start = Point::ZERO;
    let goal = Point::new(WIDTH as i32 - 1, HEIGHT as i32 - 1);
    walls.set(start, false);
    walls.set(goal, false);

    let field = Field { walls };
    let mut searcher = Searcher::new();

    let reachable = searcher.flood(&field, start, |_| FloodControl::Continue);
    println!(
        "{} of {} open cells reachable from {start}",
        reachable.len(),
        field.walls.iter().filter(|&(_, w)| !*w).count()
    );

    match searcher.astar_path(&field, start, goal) {
        Some(path) => println!("path to {goal}: {} steps", path.len() - 1),
        None => println!("{goal} is cut off"),
    }
}
