// Allow unwrap and unreadable literals in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::unreadable_literal))]
//! Tourney: evolutionary search for knight's tours on an 8x8 board.
//!
//! Candidate tours are fixed-length bit strings, three bits per intended
//! move. A generational genetic algorithm evolves them; fitness is how far
//! a board simulator gets replaying the sequence, patching illegal moves
//! with a greedy local repair as it goes.
//!
//! # Example
//!
//! ```no_run
//! use tourney::{search, SearchConfig, Square};
//!
//! let start: Square = "E4".parse()?;
//! let report = search(&SearchConfig::default(), start)?;
//! println!("best fitness: {}", report.best_fitness);
//! # Ok::<(), tourney::Error>(())
//! ```

pub mod board;
pub mod error;
pub mod ga;

pub use board::{Board, Square, TourFitness, UNVISITED, VisitMatrix};
pub use error::{Error, SearchResult};
pub use ga::{
    BreedingConfig, Evaluation, Fitness, Genome, Individual, MutationSchedule, Outcome,
    Population, SearchConfig, SearchReport, search, search_with_observer,
};
