/*
puzzle.rs

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

//! Puzzle of a level: the solution path and its clues.

use log::info;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;

use super::clues::Clues;
use super::grid::Grid;
use super::path::Path;
use super::random_path::RandomPath;

/// Puzzle object.
///
/// The solution and the clues are fixed for the lifetime of the level: the object only provides
/// read access to them.
#[derive(Serialize, Debug, Clone)]
pub struct Puzzle {
    /// Grid of the puzzle.
    grid: Grid,

    /// Level the puzzle was generated for.
    level: usize,

    /// Solution path, which visits every cell once.
    solution: Path,

    /// Cells with a number provided from the beginning of the game.
    clues: Clues,
}

impl Puzzle {
    /// Generate a random puzzle for the given grid size and level.
    ///
    /// # Panics
    ///
    /// Panics if `size` is smaller than [`super::grid::MIN_SIZE`].
    pub fn generate<R: Rng + ?Sized>(size: usize, level: usize, rng: &mut R) -> Self {
        let mut random_path: RandomPath = RandomPath::new(Grid::new(size));
        Self::generate_with(&mut random_path, level, rng)
    }

    /// Generate a reproducible puzzle from a seed.
    pub fn generate_with_seed(size: usize, level: usize, seed: u64) -> Self {
        let mut rng: StdRng = StdRng::seed_from_u64(seed);
        Self::generate(size, level, &mut rng)
    }

    /// Generate a random puzzle by using the provided [`RandomPath`] object, which keeps the
    /// generation statistics.
    pub fn generate_with<R: Rng + ?Sized>(
        random_path: &mut RandomPath,
        level: usize,
        rng: &mut R,
    ) -> Self {
        let solution: Path = random_path.generate(rng);
        let clues: Clues = Clues::select(&solution, level, rng);

        info!(
            "New {0}x{0} puzzle for level {1} with {2} clues",
            random_path.grid.size(),
            level,
            clues.len()
        );
        Self {
            grid: random_path.grid,
            level,
            solution,
            clues,
        }
    }

    /// Create a [`Puzzle`] object from a known solution and clues.
    pub fn from_parts(grid: Grid, level: usize, solution: Path, clues: Clues) -> Self {
        Self {
            grid,
            level,
            solution,
            clues,
        }
    }

    /// Grid of the puzzle.
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Level the puzzle was generated for.
    pub fn level(&self) -> usize {
        self.level
    }

    /// Solution path.
    pub fn solution(&self) -> &Path {
        &self.solution
    }

    /// Clues of the puzzle.
    pub fn clues(&self) -> &Clues {
        &self.clues
    }

    /// Total number of cells.
    pub fn num_cells(&self) -> usize {
        self.grid.num_cells()
    }

    /// Cell with the number 1.
    pub fn start_cell(&self) -> Option<usize> {
        self.solution.get_first()
    }

    /// Cell with the last number.
    pub fn end_cell(&self) -> Option<usize> {
        self.solution.get_last()
    }

    /// Return the number of the cell in the solution.
    pub fn solution_value(&self, cell: usize) -> Option<usize> {
        self.solution.cell_index(cell).map(|i| i + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::clues::num_intermediate;

    #[test]
    fn solution_is_a_permutation_of_adjacent_cells() {
        for size in 2..=6 {
            for seed in 0..4 {
                let puzzle = Puzzle::generate_with_seed(size, 1, seed);
                assert!(puzzle.solution().is_hamiltonian(&puzzle.grid()));
            }
        }
    }

    #[test]
    fn endpoints_are_clues() {
        let puzzle = Puzzle::generate_with_seed(4, 7, 11);
        let n: usize = puzzle.num_cells();
        assert_eq!(puzzle.clues().get(puzzle.solution().get()[0]), Some(1));
        assert_eq!(puzzle.clues().get(puzzle.solution().get()[n - 1]), Some(n));
        assert_eq!(puzzle.start_cell(), puzzle.clues().get_cell_from_value(1));
        assert_eq!(puzzle.end_cell(), puzzle.clues().get_cell_from_value(n));
    }

    #[test]
    fn clue_count_follows_the_level() {
        for (size, level) in [(3, 1), (3, 5), (4, 6), (5, 20), (6, 30), (3, 50)] {
            let puzzle = Puzzle::generate_with_seed(size, level, level as u64);
            let n: usize = size * size;
            let expected: usize = num_intermediate(n, level).min(n - 2);
            assert_eq!(puzzle.clues().len(), expected + 2, "size {size} level {level}");
        }
    }

    #[test]
    fn level_one_three_by_three_has_five_clues() {
        let puzzle = Puzzle::generate_with_seed(3, 1, 2024);
        assert_eq!(puzzle.num_cells(), 9);
        assert_eq!(puzzle.clues().len(), 5);
        for (cell, value) in puzzle.clues().iter() {
            assert_eq!(puzzle.solution_value(cell), Some(value));
        }
    }

    #[test]
    fn same_seed_same_puzzle() {
        let puzzle1 = Puzzle::generate_with_seed(5, 3, 99);
        let puzzle2 = Puzzle::generate_with_seed(5, 3, 99);
        assert_eq!(puzzle1.solution(), puzzle2.solution());
        assert_eq!(puzzle1.clues(), puzzle2.clues());
    }

    #[test]
    fn serializes_to_json() {
        let puzzle = Puzzle::from_parts(
            Grid::new(2),
            1,
            Path::from_vec(&[0, 1, 3, 2]),
            Clues::from_pairs(&[(0, 1), (2, 4)]),
        );
        let json: String = serde_json::to_string(&puzzle).unwrap();
        assert_eq!(
            json,
            r#"{"grid":2,"level":1,"solution":[0,1,3,2],"clues":{"0":1,"2":4}}"#
        );
    }
}
