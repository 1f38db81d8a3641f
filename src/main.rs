//! Tourney CLI - evolve a knight's tour from a chosen starting square.

// Allow print in the CLI binary, and unwrap in its tests
#![allow(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod cli;

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tourney::{SearchConfig, Square};

/// Tourney - evolutionary knight's tour search
#[derive(Parser, Debug)]
#[command(name = "tourney")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Starting square, e.g. E4
    square: Square,

    /// JSON file with a full search configuration
    #[arg(long)]
    config: Option<PathBuf>,

    /// Population size
    #[arg(short, long)]
    population: Option<usize>,

    /// Generation budget
    #[arg(short, long)]
    generations: Option<usize>,

    /// Target fitness that stops the search early
    #[arg(short, long)]
    target: Option<u32>,

    /// Random seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Crossover probability
    #[arg(long)]
    crossover_rate: Option<f64>,

    /// Tournament sample size
    #[arg(long)]
    tournament_size: Option<usize>,

    /// Disable elitism
    #[arg(long)]
    no_elitism: bool,

    /// Suppress the progress bar
    #[arg(short, long)]
    quiet: bool,
}

impl Args {
    /// Resolve the effective configuration: config file (or defaults)
    /// overridden by any explicit flags.
    fn resolve_config(&self) -> Result<SearchConfig, cli::CliError> {
        let mut config = match &self.config {
            Some(path) => cli::load_config(path)?,
            None => SearchConfig::default(),
        };
        if let Some(population) = self.population {
            config.population_size = population;
        }
        if let Some(generations) = self.generations {
            config.generations = generations;
        }
        if let Some(target) = self.target {
            config.target_fitness = target;
        }
        if let Some(seed) = self.seed {
            config.seed = seed;
        }
        if let Some(rate) = self.crossover_rate {
            config.breeding.crossover_rate = rate;
        }
        if let Some(size) = self.tournament_size {
            config.breeding.tournament_size = size;
        }
        if self.no_elitism {
            config.elitism = false;
        }
        Ok(config)
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let result = args
        .resolve_config()
        .and_then(|config| cli::execute(&config, args.square, args.quiet));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
