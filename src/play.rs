/*
play.rs

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

//! Play in the terminal.
//!
//! The grid is printed after each command. Commands are read from the standard input, one per
//! line:
//!
//! * `X Y` or `N`: press the cell at column `X` and row `Y` (starting from 0), or the cell with
//!   the index `N`.
//! * `d X Y` or `d N`: drag over the cell.
//! * `u`: undo the last move.
//! * `r`: restart the level.
//! * `n`: next level, once the puzzle is solved.
//! * `q`: quit.

use log::debug;
use std::error::Error;
use std::io::{self, BufRead, Write};

use zipconnect::draw;
use zipconnect::game::Game;
use zipconnect::generator::grid::Grid;
use zipconnect::level::Level;
use zipconnect::player_input::Feedback;

/// Player command.
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Press(usize),
    Drag(usize),
    Undo,
    Restart,
    Next,
    Help,
    Quit,
}

const HELP: &str = "\
Commands:
  X Y | N      press the cell at column X and row Y, or the cell with index N
  d X Y | d N  drag over the cell
  u            undo the last move
  r            restart the level
  n            next level, once the puzzle is solved
  h            this help
  q            quit";

/// Parse a cell given as `X Y` or as an index.
fn parse_cell(words: &[&str], grid: &Grid) -> Result<usize, String> {
    let numbers: Vec<usize> = words
        .iter()
        .map(|w| w.parse::<usize>().map_err(|_| format!("Not a number: {w}")))
        .collect::<Result<Vec<usize>, String>>()?;

    let cell: Option<usize> = match numbers.as_slice() {
        [index] if grid.contains(*index) => Some(*index),
        [x, y] => grid.index(*x, *y),
        [_] => None,
        _ => return Err(String::from("Expected a cell as X Y or as an index")),
    };
    cell.ok_or_else(|| String::from("The cell is outside the grid"))
}

/// Parse a command line.
fn parse_command(line: &str, grid: &Grid) -> Result<Command, String> {
    let words: Vec<&str> = line.split_whitespace().collect();

    match words.as_slice() {
        [] => Err(String::from("Empty command")),
        ["u"] => Ok(Command::Undo),
        ["r"] => Ok(Command::Restart),
        ["n"] => Ok(Command::Next),
        ["h"] | ["?"] => Ok(Command::Help),
        ["q"] => Ok(Command::Quit),
        ["d", rest @ ..] => parse_cell(rest, grid).map(Command::Drag),
        _ => parse_cell(&words, grid).map(Command::Press),
    }
}

/// Print the status line and the grid.
fn print_game(out: &mut impl Write, game: &Game) -> io::Result<()> {
    let level: Level = game.level();
    writeln!(
        out,
        "Level {}/{}  step {}/{}  mistakes {}",
        level.number(),
        level.max(),
        game.session().len(),
        game.puzzle().num_cells(),
        game.get_mistakes()
    )?;
    write!(out, "{}", draw::draw_board(game.session()))
}

/// Print the feedback of a command.
fn print_feedback(out: &mut impl Write, game: &Game, feedback: Feedback) -> io::Result<()> {
    match feedback {
        Feedback::Error(e) => writeln!(out, "Invalid move: {e}"),
        Feedback::Won => {
            let (h, m, s) = game.get_duration_hms();
            if game.is_final_level() {
                writeln!(
                    out,
                    "You won the entire game in {h:02}:{m:02}:{s:02}! Enter n to play again from level 1."
                )
            } else {
                writeln!(
                    out,
                    "Level {} complete in {h:02}:{m:02}:{s:02}! Enter n for the next level.",
                    game.level().number()
                )
            }
        }
        Feedback::None | Feedback::Pop(_) => Ok(()),
    }
}

/// Run the game loop on the standard input and output.
pub fn run(level: Level, size: Option<usize>, seed: Option<u64>) -> Result<(), Box<dyn Error>> {
    let stdin = io::stdin();
    let mut out = io::stdout().lock();
    run_with(&mut stdin.lock(), &mut out, level, size, seed)
}

/// Run the game loop on the given input and output.
fn run_with(
    input: &mut impl BufRead,
    out: &mut impl Write,
    level: Level,
    size: Option<usize>,
    seed: Option<u64>,
) -> Result<(), Box<dyn Error>> {
    let mut game: Game = Game::new(level, size, seed);
    debug!("Playing with seed {}", game.seed());

    writeln!(out, "{HELP}")?;
    print_game(out, &game)?;

    let mut line: String = String::new();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        let command: Command = match parse_command(&line, &game.puzzle().grid()) {
            Ok(c) => c,
            Err(msg) => {
                writeln!(out, "{msg}")?;
                continue;
            }
        };

        let feedback: Feedback = match command {
            Command::Press(cell) => {
                // Each line is a complete press and release
                let f: Feedback = game.press(cell);
                game.release();
                f
            }
            Command::Drag(cell) => {
                // Dragging continues from the end of the path
                if let Some(last) = game.session().last() {
                    game.press(last);
                }
                let f: Feedback = game.drag_over(cell);
                game.release();
                f
            }
            Command::Undo => game.undo(),
            Command::Restart => game.restart(),
            Command::Next => {
                if !game.next_level() {
                    writeln!(out, "Solve the puzzle first")?;
                    continue;
                }
                Feedback::None
            }
            Command::Help => {
                writeln!(out, "{HELP}")?;
                continue;
            }
            Command::Quit => break,
        };
        print_feedback(out, &game, feedback)?;
        print_game(out, &game)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands() {
        let grid = Grid::new(3);
        assert_eq!(parse_command("u\n", &grid), Ok(Command::Undo));
        assert_eq!(parse_command(" q ", &grid), Ok(Command::Quit));
        assert_eq!(parse_command("2 1", &grid), Ok(Command::Press(5)));
        assert_eq!(parse_command("7", &grid), Ok(Command::Press(7)));
        assert_eq!(parse_command("d 0 2", &grid), Ok(Command::Drag(6)));
        assert_eq!(parse_command("d 4", &grid), Ok(Command::Drag(4)));
        assert!(parse_command("", &grid).is_err());
        assert!(parse_command("9", &grid).is_err());
        assert!(parse_command("3 0", &grid).is_err());
        assert!(parse_command("a b", &grid).is_err());
        assert!(parse_command("1 2 3", &grid).is_err());
    }

    #[test]
    fn play_a_level_to_the_end() {
        let game: Game = Game::new(Level::default(), None, Some(12));
        let mut script: String = String::new();
        for cell in game.puzzle().solution().get() {
            script.push_str(&format!("{cell}\n"));
        }
        script.push_str("n\nq\n");

        let mut output: Vec<u8> = Vec::new();
        run_with(
            &mut script.as_bytes(),
            &mut output,
            Level::default(),
            None,
            Some(12),
        )
        .unwrap();
        let output: String = String::from_utf8(output).unwrap();
        assert!(output.contains("Level 1 complete"));
        assert!(output.contains("Level 2/50"));
        assert!(!output.contains("Invalid move"));
    }

    #[test]
    fn invalid_moves_are_reported() {
        let game: Game = Game::new(Level::default(), None, Some(4));
        let start: usize = game.puzzle().start_cell().unwrap_or(0);
        let other: usize = (0..9).find(|c| *c != start).unwrap_or(0);
        let script: String = format!("{other}\nn\nq\n");

        let mut output: Vec<u8> = Vec::new();
        run_with(&mut script.as_bytes(), &mut output, Level::default(), None, Some(4)).unwrap();
        let output: String = String::from_utf8(output).unwrap();
        assert!(output.contains("Invalid move: the path must start on number 1"));
        assert!(output.contains("mistakes 1"));
        assert!(output.contains("Solve the puzzle first"));
    }
}
