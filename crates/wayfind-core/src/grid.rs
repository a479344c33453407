//! A generic row-major [`Grid`] container.
//!
//! Unlike a terminal cell grid, this one is a plain owned 2D array of any
//! `T`, intended for heightmaps, obstacle fields, and other search spaces.

use crate::geom::Point;

/// A 2D grid of `T` with row-major storage.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid<T> {
    cells: Vec<T>,
    width: usize,
    height: usize,
}

impl<T: Clone> Grid<T> {
    /// Create a new grid of the given dimensions, filled with clones of `fill`.
    pub fn new(width: usize, height: usize, fill: T) -> Self {
        Self {
            cells: vec![fill; width * height],
            width,
            height,
        }
    }
}

impl<T> Grid<T> {
    /// Build a grid from rows. Returns `None` if the rows are ragged.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        if rows.iter().any(|r| r.len() != width) {
            return None;
        }
        let mut cells = Vec::with_capacity(width * height);
        for row in rows {
            cells.extend(row);
        }
        Some(Self {
            cells,
            width,
            height,
        })
    }

    /// Width in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Whether `p` is inside the grid.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if self.contains(p) {
            Some((p.y as usize) * self.width + (p.x as usize))
        } else {
            None
        }
    }

    /// Read the cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, p: Point) -> Option<&T> {
        self.index(p).map(|i| &self.cells[i])
    }

    /// Mutable access to the cell at `p`, or `None` if out of bounds.
    #[inline]
    pub fn get_mut(&mut self, p: Point) -> Option<&mut T> {
        self.index(p).map(|i| &mut self.cells[i])
    }

    /// Set the cell at `p`. Returns `false` (and does nothing) if out of bounds.
    pub fn set(&mut self, p: Point, value: T) -> bool {
        match self.index(p) {
            Some(i) => {
                self.cells[i] = value;
                true
            }
            None => false,
        }
    }

    /// Row-major iterator over `(Point, &T)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Point, &T)> {
        self.cells.iter().enumerate().map(|(i, v)| {
            let p = Point::new((i % self.width) as i32, (i / self.width) as i32);
            (p, v)
        })
    }

    /// Find the first cell (row-major) for which `pred` returns `true`.
    pub fn find(&self, mut pred: impl FnMut(&T) -> bool) -> Option<Point> {
        self.iter().find(|&(_, v)| pred(v)).map(|(p, _)| p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_new_and_get() {
        let g = Grid::new(4, 3, 0u8);
        assert_eq!(g.width(), 4);
        assert_eq!(g.height(), 3);
        assert_eq!(g.get(Point::new(0, 0)), Some(&0));
        assert_eq!(g.get(Point::new(4, 0)), None);
        assert_eq!(g.get(Point::new(0, -1)), None);
    }

    #[test]
    fn grid_set_and_get_mut() {
        let mut g = Grid::new(4, 3, 0u8);
        assert!(g.set(Point::new(2, 1), 7));
        assert_eq!(g.get(Point::new(2, 1)), Some(&7));
        *g.get_mut(Point::new(2, 1)).unwrap() = 9;
        assert_eq!(g.get(Point::new(2, 1)), Some(&9));
        // out of bounds is a no-op
        assert!(!g.set(Point::new(10, 10), 1));
    }

    #[test]
    fn grid_from_rows() {
        let g = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(g.width(), 3);
        assert_eq!(g.height(), 2);
        assert_eq!(g.get(Point::new(2, 1)), Some(&6));
    }

    #[test]
    fn grid_from_ragged_rows_fails() {
        assert!(Grid::from_rows(vec![vec![1, 2], vec![3]]).is_none());
    }

    #[test]
    fn grid_iter_is_row_major() {
        let g = Grid::from_rows(vec![vec!['a', 'b'], vec!['c', 'd']]).unwrap();
        let cells: Vec<_> = g.iter().map(|(p, c)| (p, *c)).collect();
        assert_eq!(cells[0], (Point::new(0, 0), 'a'));
        assert_eq!(cells[1], (Point::new(1, 0), 'b'));
        assert_eq!(cells[2], (Point::new(0, 1), 'c'));
        assert_eq!(cells[3], (Point::new(1, 1), 'd'));
    }

    #[test]
    fn grid_find() {
        let g = Grid::from_rows(vec![vec!['a', 'b'], vec!['c', 'd']]).unwrap();
        assert_eq!(g.find(|&c| c == 'c'), Some(Point::new(0, 1)));
        assert_eq!(g.find(|&c| c == 'z'), None);
    }
}
