use std::path::PathBuf;
use std::str::FromStr;

use crate::{Error, Result};

/// Which puzzle the `solve` binary runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Puzzle {
    ReindeerMaze,
    RamRun,
}

impl FromStr for Puzzle {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "reindeer-maze" | "16" => Ok(Puzzle::ReindeerMaze),
            "ram-run" | "18" => Ok(Puzzle::RamRun),
            other => Err(Error::Config(format!(
                "unknown puzzle '{}' (expected reindeer-maze or ram-run)",
                other
            ))),
        }
    }
}

/// Configuration for a single `solve` run
#[derive(Debug, Clone)]
pub struct SolveConfig {
    /// Puzzle to run
    pub puzzle: Puzzle,

    /// Puzzle input file
    pub input: PathBuf,

    /// Side length of the RAM Run memory grid
    pub grid_size: usize,

    /// Bytes fallen before the RAM Run escape is measured
    pub bytes_fallen: usize,
}

impl Default for SolveConfig {
    fn default() -> Self {
        SolveConfig {
            puzzle: Puzzle::ReindeerMaze,
            input: PathBuf::from("input.txt"),
            grid_size: 71,
            bytes_fallen: 1024,
        }
    }
}

impl SolveConfig {
    pub const USAGE: &'static str =
        "usage: solve <reindeer-maze|ram-run> <input> [grid_size] [bytes_fallen]";

    /// Builds a configuration from positional arguments (program name
    /// already stripped). Missing optional values keep their defaults.
    pub fn from_args<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut args = args.into_iter();
        let mut config = SolveConfig::default();

        let puzzle = args
            .next()
            .ok_or_else(|| Error::Config(Self::USAGE.to_string()))?;
        config.puzzle = puzzle.as_ref().parse()?;

        let input = args
            .next()
            .ok_or_else(|| Error::Config(Self::USAGE.to_string()))?;
        config.input = PathBuf::from(input.as_ref());

        if let Some(size) = args.next() {
            config.grid_size = parse_count("grid_size", size.as_ref())?;
        }
        if let Some(fallen) = args.next() {
            config.bytes_fallen = parse_count("bytes_fallen", fallen.as_ref())?;
        }
        if args.next().is_some() {
            return Err(Error::Config(Self::USAGE.to_string()));
        }

        Ok(config)
    }
}

fn parse_count(name: &str, value: &str) -> Result<usize> {
    value
        .parse()
        .map_err(|e| Error::Config(format!("invalid {} '{}': {}", name, value, e)))
}
