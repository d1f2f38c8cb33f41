/*
game.rs

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

//! Manage the status of a game in progress.
//!
//! A [`Game`] object owns the current level, the puzzle for that level, and the player's path.
//! When the player solves the puzzle, [`Game::next_level`] moves to the following level and
//! generates a new puzzle.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::time::{Duration, Instant};

use crate::generator::grid::Grid;
use crate::generator::puzzle::Puzzle;
use crate::generator::random_path::RandomPath;
use crate::level::Level;
use crate::player_input::{Feedback, PlayerInput};
use crate::session::Session;

/// Manage the status of the game in progress.
pub struct Game {
    /// Current level.
    level: Level,

    /// Grid size to use instead of the size that the level defines.
    size_override: Option<usize>,

    /// Puzzle and player's path for the current level.
    session: Session,

    /// Pointer state.
    player_input: PlayerInput,

    /// Random number generator for all the puzzles of the game.
    rng: StdRng,

    /// Seed of the random number generator.
    seed: u64,

    /// Number of rejected moves for the current level.
    mistakes: usize,

    /// Time when the current level started. Used to compute the level duration.
    start_time: Instant,
}

impl Game {
    /// Create a [`Game`] object and generate the puzzle for the first level.
    ///
    /// Without a seed, a random one is used.
    pub fn new(level: Level, size_override: Option<usize>, seed: Option<u64>) -> Self {
        let seed: u64 = seed.unwrap_or_else(|| rand::rng().next_u64());
        let mut rng: StdRng = StdRng::seed_from_u64(seed);
        debug!("Game seed = {seed}");

        let puzzle: Puzzle = Self::new_puzzle(level, size_override, &mut rng);
        Self {
            level,
            size_override,
            session: Session::new(puzzle),
            player_input: PlayerInput::new(),
            rng,
            seed,
            mistakes: 0,
            start_time: Instant::now(),
        }
    }

    /// Generate the puzzle for the given level.
    fn new_puzzle(level: Level, size_override: Option<usize>, rng: &mut StdRng) -> Puzzle {
        let size: usize = size_override.unwrap_or_else(|| level.grid_size());
        let mut random_path: RandomPath = RandomPath::new(Grid::new(size));
        Puzzle::generate_with(&mut random_path, level.number(), rng)
    }

    /// Current level.
    pub fn level(&self) -> Level {
        self.level
    }

    /// Seed of the random number generator.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Puzzle and player's path for the current level.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Puzzle for the current level.
    pub fn puzzle(&self) -> &Puzzle {
        self.session.puzzle()
    }

    /// Whether the puzzle is solved.
    pub fn is_solved(&self) -> bool {
        self.session.is_complete()
    }

    /// Whether solving the current puzzle completes the whole game.
    pub fn is_final_level(&self) -> bool {
        self.level.is_last()
    }

    /// Return the number of rejected moves for the current level.
    pub fn get_mistakes(&self) -> usize {
        self.mistakes
    }

    /// Process a press on the given cell.
    pub fn press(&mut self, cell: usize) -> Feedback {
        let feedback: Feedback = self.player_input.press(&mut self.session, cell);
        self.record(feedback)
    }

    /// Process the pointer moving over the given cell.
    pub fn drag_over(&mut self, cell: usize) -> Feedback {
        let feedback: Feedback = self.player_input.drag_over(&mut self.session, cell);
        self.record(feedback)
    }

    /// Process the pointer release.
    pub fn release(&mut self) {
        self.player_input.release();
    }

    /// Remove the last cell of the path.
    pub fn undo(&mut self) -> Feedback {
        if self.session.retreat_one() {
            Feedback::Pop(self.session.len())
        } else {
            Feedback::None
        }
    }

    /// Clear the path, but keep the puzzle.
    pub fn restart(&mut self) -> Feedback {
        if !self.session.is_empty() && self.session.restart() {
            self.player_input.release();
            Feedback::Pop(0)
        } else {
            Feedback::None
        }
    }

    /// Move to the following level and generate its puzzle.
    ///
    /// After the last level, the game starts over from level 1.
    /// Return `false`, without changing the level, if the puzzle is not solved yet.
    pub fn next_level(&mut self) -> bool {
        if !self.session.is_complete() {
            debug!("Level {} is not solved yet", self.level.number());
            return false;
        }
        if self.level.is_last() {
            info!("All {} levels completed, starting over", self.level.max());
        }
        self.level = self.level.next();
        let puzzle: Puzzle = Self::new_puzzle(self.level, self.size_override, &mut self.rng);
        self.session = Session::new(puzzle);
        self.player_input = PlayerInput::new();
        self.mistakes = 0;
        self.start_time = Instant::now();
        info!("Level {}", self.level.number());
        true
    }

    /// Return the duration of the current level.
    pub fn get_duration(&self) -> Duration {
        self.start_time.elapsed()
    }

    /// Return the duration of the current level in hours, minutes, and seconds.
    pub fn get_duration_hms(&self) -> (u64, u64, u64) {
        let duration: u64 = self.start_time.elapsed().as_secs();
        (
            duration / 3600,
            (duration % 3600) / 60,
            (duration % 3600) % 60,
        )
    }

    fn record(&mut self, feedback: Feedback) -> Feedback {
        match feedback {
            Feedback::Error(e) => {
                self.mistakes += 1;
                debug!("Mistake: {e} (mistake count = {})", self.mistakes);
            }
            Feedback::Won => {
                let (h, m, s) = self.get_duration_hms();
                info!(
                    "Level {} solved in {h:02}:{m:02}:{s:02} with {} mistakes",
                    self.level.number(),
                    self.mistakes
                );
            }
            Feedback::None | Feedback::Pop(_) => (),
        }
        feedback
    }
}
