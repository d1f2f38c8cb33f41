/*
session.rs

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

//! Manage the path that the player traces.
//!
//! The player starts on the cell with the number 1 and then moves to adjacent cells. Every move
//! is validated before being applied:
//!
//! * a cell cannot be visited twice,
//! * the next cell must share a side with the last cell of the path,
//! * a clue cell can only be reached at its own number.
//!
//! Because every move is validated, a path that covers the whole grid is a solution: completion
//! only compares the length of the path with the number of cells.

use log::debug;
use std::fmt;

use crate::generator::path::Path;
use crate::generator::puzzle::Puzzle;

/// Reason for rejecting a move.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InvalidMove {
    /// The path must start on the cell with the number 1.
    InvalidStart,

    /// The path has not started yet.
    NotStarted,

    /// The puzzle is already solved.
    Won,

    /// The cell is not in the grid.
    OutOfGrid,

    /// The cell is already in the path.
    AlreadyVisited,

    /// The cell does not share a side with the last cell of the path.
    NotAdjacent,

    /// The cell is a clue with another number than the next one.
    ClueOutOfOrder { expected: usize, found: usize },
}

impl fmt::Display for InvalidMove {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InvalidMove::InvalidStart => write!(f, "the path must start on number 1"),
            InvalidMove::NotStarted => write!(f, "the path has not started"),
            InvalidMove::Won => write!(f, "the puzzle is already solved"),
            InvalidMove::OutOfGrid => write!(f, "the cell is outside the grid"),
            InvalidMove::AlreadyVisited => write!(f, "the cell is already in the path"),
            InvalidMove::NotAdjacent => write!(f, "the cell is not next to the end of the path"),
            InvalidMove::ClueOutOfOrder { expected, found } => {
                write!(f, "the next number is {expected}, not {found}")
            }
        }
    }
}

/// Status of the session.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    /// No cell in the path.
    Empty,

    /// The player is tracing the path.
    InProgress,

    /// The path covers the grid. No more changes are accepted.
    Won,
}

/// Player's path for a puzzle.
///
/// The session takes the puzzle of the level, which only provides read access to its solution
/// and clues.
#[derive(Debug, Clone)]
pub struct Session {
    /// Puzzle being played.
    puzzle: Puzzle,

    /// Cells that the player traced, in order.
    path: Path,

    /// Whether the path covers the whole grid.
    won: bool,
}

impl Session {
    /// Create a [`Session`] object with an empty path.
    pub fn new(puzzle: Puzzle) -> Self {
        let num_cells: usize = puzzle.num_cells();
        Self {
            puzzle,
            path: Path::new(num_cells),
            won: false,
        }
    }

    /// Return the puzzle.
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }

    /// Return the cells of the path, in order.
    pub fn current_path(&self) -> &[usize] {
        self.path.get()
    }

    /// Number of cells in the path, which is also the number of the last cell.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Whether the path has no cells.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Last cell of the path.
    pub fn last(&self) -> Option<usize> {
        self.path.get_last()
    }

    /// Cell before the last cell of the path.
    pub fn previous(&self) -> Option<usize> {
        let len: usize = self.path.len();
        if len >= 2 {
            Some(self.path.get()[len - 2])
        } else {
            None
        }
    }

    /// Whether the cell is in the path.
    pub fn contains(&self, cell: usize) -> bool {
        self.path.contains(cell)
    }

    /// Return the number that the player gave to the cell, if the cell is in the path.
    pub fn value(&self, cell: usize) -> Option<usize> {
        self.path.cell_index(cell).map(|i| i + 1)
    }

    /// Return the status of the session.
    pub fn status(&self) -> SessionStatus {
        if self.won {
            SessionStatus::Won
        } else if self.path.is_empty() {
            SessionStatus::Empty
        } else {
            SessionStatus::InProgress
        }
    }

    /// Start the path on the given cell, which must be the clue with the number 1.
    ///
    /// Return `false` if the cell is not the start or if the path is not empty.
    pub fn try_start(&mut self, cell: usize) -> bool {
        if self.won || !self.path.is_empty() {
            return false;
        }
        if self.puzzle.clues().get(cell) != Some(1) {
            debug!("Cell {cell}: {}", InvalidMove::InvalidStart);
            return false;
        }
        self.path.push(cell);
        self.update_won();
        true
    }

    /// Verify whether the cell can be added to the end of the path.
    ///
    /// # Errors
    ///
    /// The method returns the reason why the move is invalid.
    pub fn check_next_move(&self, cell: usize) -> Result<(), InvalidMove> {
        if self.won {
            return Err(InvalidMove::Won);
        }
        let last: usize = self.path.get_last().ok_or(InvalidMove::NotStarted)?;
        if !self.puzzle.grid().contains(cell) {
            return Err(InvalidMove::OutOfGrid);
        }
        if self.path.contains(cell) {
            return Err(InvalidMove::AlreadyVisited);
        }
        if !self.puzzle.grid().is_adjacent(last, cell) {
            return Err(InvalidMove::NotAdjacent);
        }

        // Clues are checkpoints that the path must reach at their own number
        let expected: usize = self.path.len() + 1;
        match self.puzzle.clues().get(cell) {
            Some(found) if found != expected => {
                Err(InvalidMove::ClueOutOfOrder { expected, found })
            }
            _ => Ok(()),
        }
    }

    /// Whether the cell can be added to the end of the path.
    pub fn is_valid_next_move(&self, cell: usize) -> bool {
        self.check_next_move(cell).is_ok()
    }

    /// Add the cell to the end of the path.
    ///
    /// Return `false`, without changing the path, if the move is not valid.
    pub fn extend(&mut self, cell: usize) -> bool {
        if let Err(e) = self.check_next_move(cell) {
            debug!("Cell {cell}: {e}");
            return false;
        }
        self.path.push(cell);
        self.update_won();
        true
    }

    /// Remove the last cell of the path.
    ///
    /// Return `false` if the path is empty or if the puzzle is solved.
    pub fn retreat_one(&mut self) -> bool {
        if self.won {
            return false;
        }
        self.path.pop().is_some()
    }

    /// Remove all the cells after the given cell.
    ///
    /// Return `false` if the cell is not in the path or if the puzzle is solved.
    pub fn truncate_to(&mut self, cell: usize) -> bool {
        if self.won {
            return false;
        }
        match self.path.cell_index(cell) {
            Some(i) => {
                self.path.truncate(i + 1);
                true
            }
            None => false,
        }
    }

    /// Clear the path.
    ///
    /// Return `false` if the puzzle is solved.
    pub fn restart(&mut self) -> bool {
        if self.won {
            return false;
        }
        self.path.clear();
        true
    }

    /// Whether the path covers the whole grid.
    pub fn is_complete(&self) -> bool {
        self.path.len() == self.puzzle.num_cells()
    }

    fn update_won(&mut self) {
        if self.is_complete() {
            debug!("Puzzle solved in {} steps", self.path.len());
            self.won = true;
        }
    }

    #[cfg(test)]
    pub(crate) fn with_path(puzzle: Puzzle, cells: &[usize]) -> Self {
        let mut session: Session = Session::new(puzzle);
        session.path = Path::from_vec(cells);
        session.update_won();
        session
    }
}
