use std::env;
use std::fs;

use aoc_paths::config::{Puzzle, SolveConfig};
use aoc_paths::puzzles::{Maze, RamRun};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let config = SolveConfig::from_args(env::args().skip(1))?;
    log::debug!("Running with {:?}", config);

    let input = fs::read_to_string(&config.input)?;

    match config.puzzle {
        Puzzle::ReindeerMaze => {
            let score = Maze::parse(&input)?.solve()?;
            println!("Lowest score: {}", score.lowest_score);
            println!("Best seats:   {}", score.best_seats);
        }
        Puzzle::RamRun => {
            let run = RamRun::parse(&input, config.grid_size)?;
            match run.escape_length(config.bytes_fallen)? {
                Some(steps) => {
                    println!("Escape after {} bytes: {} steps", config.bytes_fallen, steps)
                }
                None => println!("Escape after {} bytes: unreachable", config.bytes_fallen),
            }
            match run.first_blocking_byte()? {
                Some(byte) => println!("First blocking byte: {}", byte),
                None => println!("First blocking byte: none"),
            }
        }
    }

    Ok(())
}
