/*
generator.rs

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

//! Generate random puzzles.
//!
//! A puzzle is composed of two parts:
//!
//! * A random path that visits every cell of the grid once, represented by a [`path::Path`]
//!   object.
//!   You create this object by creating a [`random_path::RandomPath`] object and by using its
//!   [`random_path::RandomPath::generate`] method.
//!   If no path is found from a random starting cell, another starting cell is tried.
//!   After too many attempts, the method returns the serpentine path, which always exists.
//!
//! * A list of clues represented by a [`clues::Clues`] object.
//!   Clues are the cells with a number that is provided from the beginning of the game.
//!   You create this object by using the [`clues::Clues::select`] method.
//!
//! [`puzzle::Puzzle::generate`] builds both parts.
//! All the random decisions use the random number generator provided by the caller, so that a
//! seeded generator produces the same puzzle.

pub mod clues;
pub mod grid;
pub mod path;
pub mod puzzle;
pub mod random_path;
