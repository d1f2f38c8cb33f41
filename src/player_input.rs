/*
player_input.rs

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

//! Translate the player's gestures into path moves.
//!
//! A press on a cell starts, extends, or rewinds the path. Dragging over cells extends the path,
//! or shortens it when the pointer goes back to the previous cell.
//! Each gesture returns a [`Feedback`] value that the interface uses for sounds and visual
//! effects.

use log::debug;

use crate::session::{InvalidMove, Session};

/// Result of a gesture.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Feedback {
    /// Nothing changed.
    None,

    /// The path changed. The value is the new length of the path.
    Pop(usize),

    /// The move was rejected.
    Error(InvalidMove),

    /// The path covers the whole grid.
    Won,
}

/// Track the dragging state between the press and the release of the pointer.
#[derive(Debug, Default, Clone)]
pub struct PlayerInput {
    /// Whether the pointer is pressed.
    dragging: bool,
}

impl PlayerInput {
    /// Create a [`PlayerInput`] object.
    pub fn new() -> Self {
        Self { dragging: false }
    }

    /// Whether the player is dragging.
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Process a press on the given cell.
    pub fn press(&mut self, session: &mut Session, cell: usize) -> Feedback {
        if session.is_complete() {
            return Feedback::None;
        }
        self.dragging = true;

        // On an empty board, only the cell with the number 1 is accepted
        if session.is_empty() {
            if session.try_start(cell) {
                return self.changed(session);
            }
            return Feedback::Error(InvalidMove::InvalidStart);
        }

        // Pressing the end of the path only prepares for dragging
        if session.last() == Some(cell) {
            return Feedback::None;
        }

        match session.check_next_move(cell) {
            Ok(()) => {
                session.extend(cell);
                self.changed(session)
            }
            // Pressing a cell of the path rewinds the path to that cell
            Err(InvalidMove::AlreadyVisited) => {
                session.truncate_to(cell);
                self.changed(session)
            }
            Err(e) => {
                debug!("Press on cell {cell} rejected: {e}");
                Feedback::Error(e)
            }
        }
    }

    /// Process the pointer moving over the given cell while pressed.
    pub fn drag_over(&mut self, session: &mut Session, cell: usize) -> Feedback {
        if !self.dragging || session.is_complete() || session.is_empty() {
            return Feedback::None;
        }

        if session.extend(cell) {
            return self.changed(session);
        }

        // Going back over the previous cell removes the last cell
        if session.previous() == Some(cell) {
            session.retreat_one();
            return self.changed(session);
        }
        Feedback::None
    }

    /// Process the pointer release.
    pub fn release(&mut self) {
        self.dragging = false;
    }

    fn changed(&mut self, session: &Session) -> Feedback {
        if session.is_complete() {
            self.dragging = false;
            Feedback::Won
        } else {
            Feedback::Pop(session.len())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::clues::Clues;
    use crate::generator::grid::Grid;
    use crate::generator::path::Path;
    use crate::generator::puzzle::Puzzle;

    // Solution on the 3x3 grid: 0 1 2 5 4 3 6 7 8, with clues 1 on 0, 4 on 5, and 9 on 8.
    fn session() -> Session {
        Session::new(Puzzle::from_parts(
            Grid::new(3),
            1,
            Path::from_vec(&[0, 1, 2, 5, 4, 3, 6, 7, 8]),
            Clues::from_pairs(&[(0, 1), (5, 4), (8, 9)]),
        ))
    }

    #[test]
    fn press_starts_only_on_number_one() {
        let mut session = session();
        let mut input = PlayerInput::new();
        assert_eq!(
            input.press(&mut session, 4),
            Feedback::Error(InvalidMove::InvalidStart)
        );
        assert!(session.is_empty());
        assert_eq!(input.press(&mut session, 0), Feedback::Pop(1));
        assert!(input.is_dragging());
    }

    #[test]
    fn press_extends_rewinds_or_rejects() {
        let mut session = session();
        let mut input = PlayerInput::new();
        input.press(&mut session, 0);
        assert_eq!(input.press(&mut session, 1), Feedback::Pop(2));
        assert_eq!(input.press(&mut session, 2), Feedback::Pop(3));
        // End of the path
        assert_eq!(input.press(&mut session, 2), Feedback::None);
        // Not adjacent
        assert_eq!(
            input.press(&mut session, 6),
            Feedback::Error(InvalidMove::NotAdjacent)
        );
        // Rewind
        assert_eq!(input.press(&mut session, 0), Feedback::Pop(1));
        assert_eq!(session.current_path(), &[0]);
    }

    #[test]
    fn drag_extends_and_retreats() {
        let mut session = session();
        let mut input = PlayerInput::new();

        // Not pressed
        assert_eq!(input.drag_over(&mut session, 1), Feedback::None);

        input.press(&mut session, 0);
        assert_eq!(input.drag_over(&mut session, 3), Feedback::Pop(2));
        assert_eq!(input.drag_over(&mut session, 4), Feedback::Pop(3));
        assert_eq!(input.drag_over(&mut session, 1), Feedback::Pop(4));
        assert_eq!(input.drag_over(&mut session, 2), Feedback::Pop(5));
        // Clue 4 cannot be reached at step 6, and dragging never reports errors
        assert_eq!(input.drag_over(&mut session, 5), Feedback::None);
        // Back over the previous cell
        assert_eq!(input.drag_over(&mut session, 1), Feedback::Pop(4));
        assert_eq!(session.current_path(), &[0, 3, 4, 1]);

        input.release();
        assert_eq!(input.drag_over(&mut session, 2), Feedback::None);
        assert_eq!(session.current_path(), &[0, 3, 4, 1]);
    }

    #[test]
    fn dragging_the_solution_wins() {
        let mut session = session();
        let mut input = PlayerInput::new();
        input.press(&mut session, 0);
        let mut feedback: Feedback = Feedback::None;
        for cell in [1, 2, 5, 4, 3, 6, 7, 8] {
            feedback = input.drag_over(&mut session, cell);
        }
        assert_eq!(feedback, Feedback::Won);
        assert!(!input.is_dragging());
        assert_eq!(input.press(&mut session, 0), Feedback::None);
        assert_eq!(session.len(), 9);
    }
}
