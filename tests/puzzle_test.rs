/*
tests/puzzle_test.rs

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

//! Generate puzzles for every level and solve them through the public API.

use rand::SeedableRng;
use rand::rngs::StdRng;

use zipconnect::game::Game;
use zipconnect::generator::clues::num_intermediate;
use zipconnect::generator::grid::Grid;
use zipconnect::generator::puzzle::Puzzle;
use zipconnect::generator::random_path::{RandomPath, serpentine};
use zipconnect::level::{DEFAULT_MAX_LEVEL, Level};
use zipconnect::player_input::Feedback;
use zipconnect::session::Session;

#[test]
fn every_level_generates_a_solvable_puzzle() {
    let mut rng = StdRng::seed_from_u64(2025);

    for number in (1..=DEFAULT_MAX_LEVEL).step_by(5) {
        let level = Level::new(number, DEFAULT_MAX_LEVEL);
        let size: usize = level.grid_size();
        let mut random_path = RandomPath::new(Grid::new(size));
        let puzzle = Puzzle::generate_with(&mut random_path, number, &mut rng);
        let n: usize = size * size;

        assert!(!random_path.fallback, "level {number}");

        assert!(puzzle.solution().is_hamiltonian(&puzzle.grid()));
        assert_eq!(puzzle.clues().get(puzzle.solution().get()[0]), Some(1));
        assert_eq!(puzzle.clues().get(puzzle.solution().get()[n - 1]), Some(n));
        assert_eq!(
            puzzle.clues().len() - 2,
            num_intermediate(n, number).min(n - 2)
        );

        let solution: Vec<usize> = puzzle.solution().get().to_vec();
        let mut session = Session::new(puzzle);
        assert!(session.try_start(solution[0]));
        for cell in &solution[1..] {
            assert!(session.is_valid_next_move(*cell));
            assert!(session.extend(*cell));
        }
        assert!(session.is_complete());
    }
}

#[test]
fn largest_grids_get_random_solutions() {
    for size in [7, 8] {
        let grid = Grid::new(size);
        let mut random_path = RandomPath::new(grid);
        for seed in 100..110 {
            let mut rng = StdRng::seed_from_u64(seed);
            let puzzle = Puzzle::generate_with(&mut random_path, 46, &mut rng);
            assert!(!random_path.fallback, "size {size} seed {seed}");
            assert_ne!(puzzle.solution(), &serpentine(grid));
        }
    }
}

#[test]
fn unvisited_clues_are_checkpoints() {
    let puzzle = Puzzle::generate_with_seed(5, 1, 77);
    let mut session = Session::new(puzzle.clone());
    let start: usize = puzzle.start_cell().unwrap_or(0);
    assert!(session.try_start(start));

    // A clue next to the start can only be entered if it carries number 2
    for neighbor in puzzle.grid().neighbors(start) {
        match puzzle.clues().get(neighbor) {
            Some(2) | None => assert!(session.is_valid_next_move(neighbor)),
            Some(_) => assert!(!session.is_valid_next_move(neighbor)),
        }
    }
}

#[test]
fn a_short_game() {
    let mut game = Game::new(Level::new(4, 5), None, Some(31));

    for expected_level in [4, 5, 1] {
        assert_eq!(game.level().number(), expected_level);
        let solution: Vec<usize> = game.puzzle().solution().get().to_vec();
        let mut feedback: Feedback = Feedback::None;
        for cell in solution {
            feedback = game.press(cell);
            game.release();
        }
        assert_eq!(feedback, Feedback::Won);
        assert_eq!(game.get_mistakes(), 0);
        assert!(game.next_level());
    }
}
