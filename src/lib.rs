/*
lib.rs

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

//! Zip Connect puzzle core.
//!
//! The player connects every cell of a square grid in one path, moving between cells that share
//! a side. A few cells show their number in the path from the beginning, and the path must reach
//! each of them at exactly that number.
//!
//! * [`generator`] builds random puzzles: the solution path and the clues.
//! * [`session`] validates and applies the player's moves.
//! * [`player_input`] turns presses and drags into moves.
//! * [`game`] chains the levels.
//! * [`level`] defines the grid size for each level.
//! * [`draw`] renders the grid as text.

pub mod draw;
pub mod game;
pub mod generator;
pub mod level;
pub mod player_input;
pub mod session;
