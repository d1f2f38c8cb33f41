/*
level.rs

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

//! Level progression.
//!
//! The grid grows with the level, and fewer clues are provided (see
//! [`crate::generator::clues::num_intermediate`]). After the last level, the game starts over
//! from level 1.

use serde::Serialize;

/// Default number of levels.
pub const DEFAULT_MAX_LEVEL: usize = 50;

/// Return the grid size for the given level.
pub fn grid_size_for(level: usize) -> usize {
    match level {
        0..=5 => 3,
        6..=15 => 4,
        16..=25 => 5,
        26..=35 => 6,
        36..=45 => 7,
        _ => 8,
    }
}

/// Current level and the level count.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub struct Level {
    /// Level number, from 1 to [`Level::max`].
    number: usize,

    /// Last level.
    max: usize,
}

impl Default for Level {
    fn default() -> Self {
        Self::new(1, DEFAULT_MAX_LEVEL)
    }
}

impl Level {
    /// Create a [`Level`] object.
    ///
    /// The level number is clamped between 1 and `max`. A `max` of zero is changed to one.
    pub fn new(number: usize, max: usize) -> Self {
        let max: usize = max.max(1);
        Self {
            number: number.clamp(1, max),
            max,
        }
    }

    /// Level number.
    pub fn number(&self) -> usize {
        self.number
    }

    /// Last level.
    pub fn max(&self) -> usize {
        self.max
    }

    /// Grid size for the level.
    pub fn grid_size(&self) -> usize {
        grid_size_for(self.number)
    }

    /// Whether this is the last level.
    pub fn is_last(&self) -> bool {
        self.number >= self.max
    }

    /// Return the following level. The level after the last one is level 1.
    pub fn next(&self) -> Self {
        if self.is_last() {
            Self::new(1, self.max)
        } else {
            Self::new(self.number + 1, self.max)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_size_tiers() {
        assert_eq!(grid_size_for(1), 3);
        assert_eq!(grid_size_for(5), 3);
        assert_eq!(grid_size_for(6), 4);
        assert_eq!(grid_size_for(15), 4);
        assert_eq!(grid_size_for(16), 5);
        assert_eq!(grid_size_for(26), 6);
        assert_eq!(grid_size_for(36), 7);
        assert_eq!(grid_size_for(45), 7);
        assert_eq!(grid_size_for(46), 8);
        assert_eq!(grid_size_for(50), 8);
    }

    #[test]
    fn levels_wrap_after_the_max() {
        let level = Level::new(49, DEFAULT_MAX_LEVEL);
        let level = level.next();
        assert_eq!(level.number(), 50);
        assert!(level.is_last());
        assert_eq!(level.next().number(), 1);
    }

    #[test]
    fn configured_max() {
        let level = Level::new(3, 3);
        assert!(level.is_last());
        assert_eq!(level.next(), Level::new(1, 3));
    }

    #[test]
    fn out_of_range_numbers_are_clamped() {
        assert_eq!(Level::new(0, 10).number(), 1);
        assert_eq!(Level::new(99, 10).number(), 10);
        assert_eq!(Level::new(1, 0).max(), 1);
        assert_eq!(Level::default().number(), 1);
        assert_eq!(Level::default().max(), DEFAULT_MAX_LEVEL);
    }
}
