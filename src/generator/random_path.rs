/*
random_path.rs

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

//! Generate a random path that visits every cell of the grid.

use log::{debug, warn};
use rand::Rng;
use rand::seq::SliceRandom;
use std::time::Instant;

use super::grid::{Direction, Grid};
use super::path::Path;

// Max number of search nodes for one starting cell. With the pruning in
// `RandomPath::can_cover_remaining`, an 8x8 path needs far fewer nodes.
const MAX_ITERATIONS: usize = 200_000;

// Max number of starting cells to try before falling back to the serpentine path.
const MAX_ATTEMPTS: usize = 50;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum RandomPathError {
    /// No possible path from the starting cell.
    NoPath,

    /// No path found before the iteration budget was spent.
    BudgetExceeded,
}

/// [`RandomPath`] object.
pub struct RandomPath {
    /// Grid to cover.
    pub grid: Grid,

    /// Starting cell of the last attempt.
    pub starting_cell: usize,

    /// Number of starting cells tried for the last random path.
    pub attempts: usize,

    /// Number of iterations it took to generate the last random path, over all attempts.
    pub iteration: usize,

    /// Duration in seconds it took to generate the last random path.
    pub duration: f32,

    /// Whether the last path is the serpentine fallback.
    pub fallback: bool,

    /// Number of iterations for the current attempt.
    attempt_iteration: usize,
}

impl RandomPath {
    /// Create the object.
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            starting_cell: 0,
            attempts: 0,
            iteration: 0,
            duration: 0.0,
            fallback: false,
            attempt_iteration: 0,
        }
    }

    /// Generate and return a random path.
    ///
    /// A new random starting cell is chosen for each attempt. If all the attempts fail, then the
    /// serpentine path is returned.
    pub fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Path {
        let start: Instant = Instant::now();

        self.attempts = 0;
        self.iteration = 0;
        self.fallback = false;

        while self.attempts < MAX_ATTEMPTS {
            self.attempts += 1;
            let starting_cell: usize = rng.random_range(0..self.grid.num_cells());
            match self.generate_from(starting_cell, rng) {
                Ok(path) => {
                    self.duration = start.elapsed().as_secs_f32();
                    debug!(
                        "Attempts = {}  Iterations = {}  Duration = {}",
                        self.attempts, self.iteration, self.duration
                    );
                    return path;
                }
                Err(e) => debug!("Attempt {} from cell {starting_cell}: {e:?}", self.attempts),
            }
        }

        warn!(
            "No random path found for a {0}x{0} grid after {1} attempts, using the serpentine path",
            self.grid.size(),
            self.attempts
        );
        self.fallback = true;
        self.duration = start.elapsed().as_secs_f32();
        serpentine(self.grid)
    }

    /// Search for a random path from the given starting cell.
    ///
    /// # Errors
    ///
    /// The method returns an error if no path exists from this cell, or if the search takes too
    /// many iterations. In both cases, another starting cell can be tried.
    pub fn generate_from<R: Rng + ?Sized>(
        &mut self,
        starting_cell: usize,
        rng: &mut R,
    ) -> Result<Path, RandomPathError> {
        if !self.grid.contains(starting_cell) {
            return Err(RandomPathError::NoPath);
        }
        self.starting_cell = starting_cell;
        self.attempt_iteration = 0;

        debug!(
            "Starting cell = {}  Number of cells = {}",
            starting_cell,
            self.grid.num_cells()
        );

        let mut path: Path = Path::new(self.grid.num_cells());
        let res: Result<(), RandomPathError> = self.find_path(starting_cell, &mut path, rng);
        self.iteration += self.attempt_iteration;
        res.map(|()| path)
    }

    /// Recursively find a path.
    fn find_path<R: Rng + ?Sized>(
        &mut self,
        current_cell: usize,
        path: &mut Path,
        rng: &mut R,
    ) -> Result<(), RandomPathError> {
        path.push(current_cell);
        if path.len() == self.grid.num_cells() {
            return Ok(());
        }

        self.attempt_iteration += 1;
        if self.attempt_iteration >= MAX_ITERATIONS {
            return Err(RandomPathError::BudgetExceeded);
        }

        // Cut the branch early if the remaining cells cannot be covered anymore
        if !self.can_cover_remaining(current_cell, path) {
            path.pop();
            return Err(RandomPathError::NoPath);
        }

        // Randomize the order in which to test the neighbors
        let mut directions: [Direction; 4] = Direction::ALL;
        directions.shuffle(rng);

        for direction in directions {
            let Some(next_cell) = self.grid.neighbor(current_cell, direction) else {
                continue;
            };
            if path.contains(next_cell) {
                continue;
            }
            match self.find_path(next_cell, path, rng) {
                Ok(()) => return Ok(()),
                Err(RandomPathError::BudgetExceeded) => {
                    return Err(RandomPathError::BudgetExceeded);
                }
                Err(RandomPathError::NoPath) => (),
            }
        }
        path.pop();
        Err(RandomPathError::NoPath)
    }

    /// Verify whether the cells that are not in the path can still be covered by a path
    /// continuing from the current cell.
    ///
    /// # Errors
    ///
    /// Return `false` if the color balance of the remaining cells is wrong, if more than one
    /// remaining cell must be the end of the path, or if the remaining cells are disconnected.
    fn can_cover_remaining(&self, current_cell: usize, path: &Path) -> bool {
        let num_cells: usize = self.grid.num_cells();
        let remaining: usize = num_cells - path.len();
        let color = |cell: usize| -> usize {
            let (x, y) = self.grid.coords(cell);
            (x + y) % 2
        };

        // In a checkerboard coloring, the colors alternate along the path, starting with the
        // color opposite to the current cell
        let current_color: usize = color(current_cell);
        let same: usize = (0..num_cells)
            .filter(|c| !path.contains(*c) && color(*c) == current_color)
            .count();
        let opposite: usize = remaining - same;
        if opposite != same && opposite != same + 1 {
            debug!("    Back: {opposite}/{same} remaining cells cannot alternate colors");
            return false;
        }

        // A remaining cell with a single free neighbor can only be the end of the path
        let mut num_ends: usize = 0;
        for cell in (0..num_cells).filter(|c| !path.contains(*c)) {
            if self.grid.is_adjacent(cell, current_cell) {
                continue;
            }
            let free: usize = self
                .grid
                .neighbors(cell)
                .iter()
                .filter(|n| !path.contains(**n))
                .count();
            if free == 0 {
                debug!("    Back: cell {cell} is isolated");
                return false;
            }
            if free == 1 {
                num_ends += 1;
                if num_ends > 1 {
                    debug!("    Back: several dead-end cells");
                    return false;
                }
            }
        }

        // All the remaining cells must be reachable from the current cell
        let mut reached: Vec<bool> = vec![false; num_cells];
        let mut num_reached: usize = 0;
        let mut stack: Vec<usize> = vec![current_cell];
        while let Some(cell) = stack.pop() {
            for n in self.grid.neighbors(cell) {
                if !path.contains(n) && !reached[n] {
                    reached[n] = true;
                    num_reached += 1;
                    stack.push(n);
                }
            }
        }
        if num_reached != remaining {
            debug!("    Back: {} remaining cells are cut off", remaining - num_reached);
            return false;
        }
        true
    }
}

/// Return the serpentine path: left to right on even rows, right to left on odd rows.
pub fn serpentine(grid: Grid) -> Path {
    let size: usize = grid.size();
    let mut path: Path = Path::new(grid.num_cells());

    for y in 0..size {
        for i in 0..size {
            let x: usize = if y % 2 == 0 { i } else { size - 1 - i };
            path.push(y * size + x);
        }
    }
    path
}
