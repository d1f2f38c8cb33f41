/*
path.rs

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

//! Path of cells in the grid.
//!
//! The same type stores the generated solution and the cells that the player traced.

use serde::Serialize;
use std::collections::HashSet;

use super::grid::Grid;

/// Path object.
#[derive(Serialize, Debug, Default, Clone)]
#[serde(transparent)]
pub struct Path {
    /// Path as an ordered list of cells.
    path: Vec<usize>,

    /// Stores the visited status of the cells.
    /// Instead of looking for the cell in the [`Path::path`] vector, this
    /// [`std::collections::HashSet`] speeds up the lookup.
    #[serde(skip)]
    visited: HashSet<usize>,
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Path {
    /// Create a [`Path`] object.
    pub fn new(num_cells: usize) -> Self {
        Self {
            path: Vec::with_capacity(num_cells),
            visited: HashSet::with_capacity(num_cells),
        }
    }

    /// Create a [`Path`] object from a slice of cells.
    pub fn from_vec(path: &[usize]) -> Self {
        Self {
            path: path.to_vec(),
            visited: path.iter().copied().collect(),
        }
    }

    /// Remove all the cells from the path.
    pub fn clear(&mut self) {
        self.path.clear();
        self.visited.clear();
    }

    /// Add a cell to the path.
    pub fn push(&mut self, cell: usize) {
        self.path.push(cell);
        self.visited.insert(cell);
    }

    /// Remove the last cell from the path and return it.
    pub fn pop(&mut self) -> Option<usize> {
        let cell: usize = self.path.pop()?;
        self.visited.remove(&cell);
        Some(cell)
    }

    /// Keep the first `len` cells and drop the others.
    pub fn truncate(&mut self, len: usize) {
        while self.path.len() > len {
            self.pop();
        }
    }

    /// Get the number of cells in the path.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Whether the path has no cells.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Whether the cell is in the path or not.
    pub fn contains(&self, cell: usize) -> bool {
        self.visited.contains(&cell)
    }

    /// Return the path as a slice.
    pub fn get(&self) -> &[usize] {
        &self.path
    }

    /// Return the position of the given cell in the path. Add one to the return value to get
    /// the cell value.
    pub fn cell_index(&self, cell: usize) -> Option<usize> {
        self.path.iter().position(|c| *c == cell)
    }

    /// Return the first cell in the path.
    pub fn get_first(&self) -> Option<usize> {
        self.path.first().copied()
    }

    /// Return the last cell in the path.
    pub fn get_last(&self) -> Option<usize> {
        self.path.last().copied()
    }

    /// Return the cell for the given value (cell values start from 1).
    pub fn get_cell_from_value(&self, value: usize) -> Option<usize> {
        if value == 0 {
            None
        } else {
            self.path.get(value - 1).copied()
        }
    }

    /// Whether the path visits every cell of the grid exactly once, moving between adjacent
    /// cells only.
    pub fn is_hamiltonian(&self, grid: &Grid) -> bool {
        if self.path.len() != grid.num_cells() {
            return false;
        }
        let mut cells: Vec<usize> = self.path.clone();
        cells.sort_unstable();
        if cells.iter().enumerate().any(|(i, c)| i != *c) {
            return false;
        }
        self.path.windows(2).all(|w| grid.is_adjacent(w[0], w[1]))
    }
}
