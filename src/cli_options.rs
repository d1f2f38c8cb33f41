/*
cli_options.rs

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

//! Process command-line options.
//!
//! By default, Zip Connect generates puzzles and prints them.
//! With the `--play` option, the puzzles are played in the terminal.
//!
//! # Examples
//!
//! Generate two puzzles for level 12 in JSON format:
//!
//! ```
//! $ zipconnect -l 12 -c 2 -f json --seed 7
//! {"grid":4,"level":12,"solution":[...],"clues":{...}}
//! {"grid":4,"level":12,"solution":[...],"clues":{...}}
//! ```
//!
//! Print a 6x6 puzzle with its solution and some statistics:
//!
//! ```
//! $ zipconnect -s 6 --solution --summary
//! ```

use clap::{Parser, ValueEnum};
use log::debug;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::env;
use std::error::Error;
use std::io::{self, BufWriter, Write};

use zipconnect::draw;
use zipconnect::generator::grid::{Grid, MAX_SIZE, MIN_SIZE};
use zipconnect::generator::puzzle::Puzzle;
use zipconnect::generator::random_path::RandomPath;
use zipconnect::level::{DEFAULT_MAX_LEVEL, Level};
use zipconnect::session::Session;

use crate::play;

/// Output format of the generated puzzles.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum, Default)]
pub enum Format {
    /// Grid with the clues.
    #[default]
    Text,

    /// One JSON object per line.
    Json,
}

/// Generate and play Zip Connect puzzles.
#[derive(Parser, Debug)]
#[command(about, long_about = None, version)]
struct Args {
    /// Level of the puzzle
    #[arg(short, long, default_value_t = 1)]
    level: usize,

    /// Last level, after which the game starts over from level 1
    #[arg(short, long, default_value_t = DEFAULT_MAX_LEVEL)]
    max_level: usize,

    /// Grid size, instead of the size that the level defines
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(MIN_SIZE as i64..=MAX_SIZE as i64))]
    size: Option<u8>,

    /// Seed for the random number generator
    #[arg(long)]
    seed: Option<u64>,

    /// Number of puzzles to generate
    #[arg(short, long, default_value_t = 1, conflicts_with = "play")]
    count: usize,

    /// Output format
    #[arg(value_enum, short, long, default_value_t = Format::Text, conflicts_with = "play")]
    format: Format,

    /// Also print the solution
    #[arg(long, default_value_t = false, conflicts_with = "play")]
    solution: bool,

    /// Print some statistics after generating the puzzles
    #[arg(long, default_value_t = false, conflicts_with = "play")]
    summary: bool,

    /// Play in the terminal
    #[arg(short, long, default_value_t = false)]
    play: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process command-line options, and return the exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let level: Level = Level::new(args.level, args.max_level);
    let size: Option<usize> = args.size.map(usize::from);

    let ret: Result<(), Box<dyn Error>> = if args.play {
        play::run(level, size, args.seed)
    } else {
        generate(&args, level, size)
    };
    match ret {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("Error: {e}");
            1
        }
    }
}

/// Generate the puzzles and print them.
fn generate(args: &Args, level: Level, size: Option<usize>) -> Result<(), Box<dyn Error>> {
    let seed: u64 = args.seed.unwrap_or_else(|| rand::rng().next_u64());
    let mut rng: StdRng = StdRng::seed_from_u64(seed);
    let size: usize = size.unwrap_or_else(|| level.grid_size());
    let mut random_path: RandomPath = RandomPath::new(Grid::new(size));
    let mut out = BufWriter::new(io::stdout().lock());

    debug!("Seed = {seed}");

    let mut total: f32 = 0.0;
    let mut max: f32 = 0.0;
    let mut attempts: usize = 0;
    let mut iterations: usize = 0;
    let mut fallbacks: usize = 0;

    for i in 0..args.count {
        debug!("Puzzle {i}");
        let puzzle: Puzzle = Puzzle::generate_with(&mut random_path, level.number(), &mut rng);

        total += random_path.duration;
        if random_path.duration > max {
            max = random_path.duration;
        }
        attempts += random_path.attempts;
        iterations += random_path.iteration;
        if random_path.fallback {
            fallbacks += 1;
        }

        match args.format {
            Format::Json => {
                serde_json::to_writer(&mut out, &puzzle)?;
                writeln!(out)?;
            }
            Format::Text => {
                if i > 0 {
                    writeln!(out)?;
                }
                writeln!(
                    out,
                    "Level {}  {}x{}  {} clues",
                    puzzle.level(),
                    size,
                    size,
                    puzzle.clues().len()
                )?;
                write!(out, "{}", draw::draw_board(&Session::new(puzzle.clone())))?;
                if args.solution {
                    writeln!(out, "Solution")?;
                    write!(out, "{}", draw::draw_solution(&puzzle))?;
                }
            }
        }
    }

    if args.summary && args.count > 0 {
        writeln!(
            out,
            "
              seed = {}
        total time = {}s
      average time = {}s
          max time = {}s
  average attempts = {}
average iterations = {}
         fallbacks = {}",
            seed,
            total,
            total / args.count as f32,
            max,
            attempts / args.count,
            iterations / args.count,
            fallbacks
        )?;
    }
    out.flush()?;
    Ok(())
}
