//! Evolutionary engine for the tour search.
//!
//! A generational genetic algorithm over fixed-length bit-string genomes:
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │          Search Loop                │
//! ├─────────────────────────────────────┤
//! │  Selection │ Crossover │ Mutation   │
//! ├─────────────────────────────────────┤
//! │   Fitness (board replay + repair)   │
//! └─────────────────────────────────────┘
//! ```
//!
//! Each genome encodes 64 intended knight moves as 3-bit codewords. Fitness
//! is the number of moves the board simulator manages to execute, counting
//! greedy repairs.

mod crossover;
mod evolution;
mod genome;
mod individual;
mod mutation;
mod population;
mod selection;

pub use crossover::crossover;
pub use evolution::{Outcome, SearchConfig, SearchReport, search, search_with_observer};
pub use genome::{DEFAULT_SLOTS, Genome};
pub use individual::Individual;
pub use mutation::{MutationSchedule, mutate};
pub use population::{BreedingConfig, Evaluation, Fitness, Population};
pub use selection::{ScoreStats, select_parents, tournament_select};
