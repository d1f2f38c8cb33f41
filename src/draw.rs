/*
draw.rs

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

//! Draw the grid as text.

use crate::generator::puzzle::Puzzle;
use crate::session::Session;

/// Return the width of the largest number in the grid.
fn cell_width(puzzle: &Puzzle) -> usize {
    puzzle.num_cells().to_string().len()
}

/// Draw the grid with the player's path.
///
/// Cells in the path show their step number, and the last cell of the path is followed by `*`.
/// Clues that the path has not reached yet show their number. The other cells show a dot.
pub fn draw_board(session: &Session) -> String {
    let puzzle: &Puzzle = session.puzzle();
    let width: usize = cell_width(puzzle);
    let size: usize = puzzle.grid().size();
    let mut s: String = String::new();

    for y in 0..size {
        for x in 0..size {
            let cell: usize = y * size + x;
            let text: String = match (session.value(cell), puzzle.clues().get(cell)) {
                (Some(v), _) | (None, Some(v)) => v.to_string(),
                (None, None) => String::from("."),
            };
            let marker: char = if session.last() == Some(cell) {
                '*'
            } else if session.contains(cell) {
                '-'
            } else {
                ' '
            };
            s.push_str(&format!(" {text:>width$}{marker}"));
        }
        s.push('\n');
    }
    s
}

/// Draw the grid with the solution number of every cell.
pub fn draw_solution(puzzle: &Puzzle) -> String {
    let width: usize = cell_width(puzzle);
    let size: usize = puzzle.grid().size();
    let mut s: String = String::new();

    for y in 0..size {
        for x in 0..size {
            let cell: usize = y * size + x;
            let value: usize = puzzle.solution_value(cell).unwrap_or(0);
            s.push_str(&format!(" {value:>width$} "));
        }
        s.push('\n');
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::clues::Clues;
    use crate::generator::grid::Grid;
    use crate::generator::path::Path;

    fn puzzle() -> Puzzle {
        Puzzle::from_parts(
            Grid::new(2),
            1,
            Path::from_vec(&[0, 1, 3, 2]),
            Clues::from_pairs(&[(0, 1), (2, 4)]),
        )
    }

    #[test]
    fn empty_board_shows_the_clues() {
        let session = Session::new(puzzle());
        assert_eq!(draw_board(&session), " 1  . \n 4  . \n");
    }

    #[test]
    fn board_shows_the_path() {
        let mut session = Session::new(puzzle());
        session.try_start(0);
        session.extend(1);
        assert_eq!(draw_board(&session), " 1- 2*\n 4  . \n");
    }

    #[test]
    fn solution_grid() {
        assert_eq!(draw_solution(&puzzle()), " 1  2 \n 4  3 \n");
    }
}
