/*
clues.rs

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

//! Select the clues of a puzzle.
//!
//! A clue is a cell whose number is provided from the beginning of the game. The first and the
//! last cells of the solution are always clues. The number of the other clues decreases as the
//! level increases.

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;
use std::collections::BTreeMap;

use super::path::Path;

/// Clues of a puzzle, as a map from the cell index to the cell number.
#[derive(Serialize, Debug, Default, Clone, PartialEq)]
#[serde(transparent)]
pub struct Clues {
    clues: BTreeMap<usize, usize>,
}

/// Number of clues to reveal in addition to the first and the last cells.
pub fn num_intermediate(num_cells: usize, level: usize) -> usize {
    (num_cells / 3).saturating_sub(level / 3)
}

impl Clues {
    /// Create an empty [`Clues`] object.
    pub fn new() -> Self {
        Self {
            clues: BTreeMap::new(),
        }
    }

    /// Select the clues for the given solution path and level.
    pub fn select<R: Rng + ?Sized>(solution: &Path, level: usize, rng: &mut R) -> Self {
        let mut obj: Clues = Clues::new();
        let num_cells: usize = solution.len();

        let (Some(first), Some(last)) = (solution.get_first(), solution.get_last()) else {
            return obj;
        };
        obj.clues.insert(first, 1);
        obj.clues.insert(last, num_cells);

        // Positions in the path, between the first and the last cells
        let mut positions: Vec<usize> = (1..num_cells.saturating_sub(1)).collect();
        positions.shuffle(rng);

        let count: usize = num_intermediate(num_cells, level).min(positions.len());
        for position in &positions[..count] {
            obj.clues.insert(solution.get()[*position], position + 1);
        }

        debug!("Clues = {:?}", obj.clues);
        obj
    }

    /// Create a [`Clues`] object from a list of (cell, number) pairs.
    pub fn from_pairs(pairs: &[(usize, usize)]) -> Self {
        Self {
            clues: pairs.iter().copied().collect(),
        }
    }

    /// Return the number of the given cell if the cell is a clue.
    pub fn get(&self, cell: usize) -> Option<usize> {
        self.clues.get(&cell).copied()
    }

    /// Whether the cell is a clue.
    pub fn contains(&self, cell: usize) -> bool {
        self.clues.contains_key(&cell)
    }

    /// Return the cell that carries the given number, if it is a clue.
    pub fn get_cell_from_value(&self, value: usize) -> Option<usize> {
        self.clues
            .iter()
            .find(|(_, v)| **v == value)
            .map(|(cell, _)| *cell)
    }

    /// Number of clues, including the first and the last cells.
    pub fn len(&self) -> usize {
        self.clues.len()
    }

    /// Whether there are no clues.
    pub fn is_empty(&self) -> bool {
        self.clues.is_empty()
    }

    /// Iterate over the (cell, number) pairs, sorted by cell.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.clues.iter().map(|(c, v)| (*c, *v))
    }
}
