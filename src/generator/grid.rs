/*
grid.rs

Copyright 2025 Hervé Quatremain

This file is part of Zip Connect.

Zip Connect is free software: you can redistribute it and/or modify it under
the terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Zip Connect is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Zip Connect. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Square grid geometry.
//!
//! Cells are identified by their index in row-major order: the cell at column `x` and row `y`
//! has the index `y * size + x`.

use serde::Serialize;

/// Smallest supported grid size.
pub const MIN_SIZE: usize = 2;

/// Largest grid size that the levels use.
pub const MAX_SIZE: usize = 8;

/// Orthogonal directions from a cell.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// The four directions, in clockwise order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Column and row offsets for the direction.
    fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (0, -1),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
        }
    }
}

/// N×N grid.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct Grid {
    /// Number of cells per row and per column.
    size: usize,
}

impl Grid {
    /// Create a [`Grid`] object.
    ///
    /// # Panics
    ///
    /// Panics if `size` is smaller than [`MIN_SIZE`].
    pub fn new(size: usize) -> Self {
        assert!(size >= MIN_SIZE, "grid size must be at least {MIN_SIZE}");
        Self { size }
    }

    /// Number of cells per row.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells in the grid.
    pub fn num_cells(&self) -> usize {
        self.size * self.size
    }

    /// Whether the index designates a cell of the grid.
    pub fn contains(&self, cell: usize) -> bool {
        cell < self.num_cells()
    }

    /// Return the index of the cell at the given column and row.
    pub fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.size && y < self.size {
            Some(y * self.size + x)
        } else {
            None
        }
    }

    /// Return the column and the row of the given cell.
    pub fn coords(&self, cell: usize) -> (usize, usize) {
        (cell % self.size, cell / self.size)
    }

    /// Whether the two cells share a side. Diagonals and wraparounds are not adjacent.
    pub fn is_adjacent(&self, cell1: usize, cell2: usize) -> bool {
        if !self.contains(cell1) || !self.contains(cell2) {
            return false;
        }
        let (x1, y1) = self.coords(cell1);
        let (x2, y2) = self.coords(cell2);
        x1.abs_diff(x2) + y1.abs_diff(y2) == 1
    }

    /// Return the neighbor of the cell in the given direction, or None at the border.
    pub fn neighbor(&self, cell: usize, direction: Direction) -> Option<usize> {
        let (x, y) = self.coords(cell);
        let (dx, dy) = direction.delta();
        let nx: usize = x.checked_add_signed(dx)?;
        let ny: usize = y.checked_add_signed(dy)?;
        self.index(nx, ny)
    }

    /// Return all the orthogonal neighbors of the cell.
    pub fn neighbors(&self, cell: usize) -> Vec<usize> {
        Direction::ALL
            .iter()
            .filter_map(|d| self.neighbor(cell, *d))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_and_coords_are_row_major() {
        let grid = Grid::new(3);
        assert_eq!(grid.num_cells(), 9);
        assert_eq!(grid.coords(5), (2, 1));
        assert_eq!(grid.coords(6), (0, 2));
        assert_eq!(grid.index(2, 1), Some(5));
        assert_eq!(grid.index(3, 0), None);
    }

    #[test]
    fn adjacency_is_orthogonal_only() {
        let grid = Grid::new(3);
        assert!(grid.is_adjacent(4, 1));
        assert!(grid.is_adjacent(4, 5));
        assert!(grid.is_adjacent(4, 7));
        assert!(grid.is_adjacent(4, 3));
        // diagonal
        assert!(!grid.is_adjacent(4, 0));
        // no wraparound from the end of a row to the start of the next one
        assert!(!grid.is_adjacent(2, 3));
        assert!(!grid.is_adjacent(4, 4));
        assert!(!grid.is_adjacent(8, 9));
    }

    #[test]
    fn neighbors_stop_at_the_border() {
        let grid = Grid::new(4);
        let mut corner = grid.neighbors(0);
        corner.sort_unstable();
        assert_eq!(corner, vec![1, 4]);

        let mut center = grid.neighbors(5);
        center.sort_unstable();
        assert_eq!(center, vec![1, 4, 6, 9]);

        assert_eq!(grid.neighbor(3, Direction::Right), None);
        assert_eq!(grid.neighbor(3, Direction::Down), Some(7));
    }

    #[test]
    #[should_panic]
    fn too_small_grid_is_rejected() {
        Grid::new(1);
    }
}
