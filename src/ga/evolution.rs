//! The generation loop.
//!
//! Seeds a population, advances it for a bounded number of generations with
//! a periodic mutation-rate annealing schedule, and stops early when the
//! target fitness shows up.

use crate::board::{Board, Square, TourFitness, VisitMatrix};
use crate::error::SearchResult;
use crate::ga::individual::Individual;
use crate::ga::mutation::MutationSchedule;
use crate::ga::population::{BreedingConfig, Population};
use crate::ga::selection::ScoreStats;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

/// All tunables for one search run.
///
/// All fields are plain data; a run never mutates its configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Move slots per genome (3 bits each).
    pub genome_slots: usize,
    /// Individuals per generation.
    pub population_size: usize,
    /// Whether the best individual survives each generation unchanged.
    pub elitism: bool,
    /// Fitness that ends the search early.
    pub target_fitness: u32,
    /// Crossover probability and tournament size.
    pub breeding: BreedingConfig,
    /// Mutation-rate annealing schedule.
    pub mutation: MutationSchedule,
    /// Generation budget.
    pub generations: usize,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            genome_slots: 64,
            population_size: 50,
            elitism: true,
            target_fitness: 63,
            breeding: BreedingConfig::default(),
            mutation: MutationSchedule::default(),
            generations: 2000,
            seed: 42,
        }
    }
}

/// How a search run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Target fitness reached at the given generation index.
    Solved {
        /// Generation index at which the target first appeared.
        generation: usize,
    },
    /// Generation budget exhausted; the report carries the best effort.
    Exhausted,
}

/// Result of a search run: outcome, best individual, and its visit matrix.
#[derive(Debug, Clone)]
pub struct SearchReport {
    /// Whether the target was reached, and when.
    pub outcome: Outcome,
    /// Best fitness at the end of the run.
    pub best_fitness: u32,
    /// The best individual (its genome is a repair fixpoint).
    pub best: Individual,
    /// Visit-order matrix of the best individual's walk.
    pub matrix: VisitMatrix,
}

/// Run the evolutionary search from the given starting square.
///
/// # Errors
///
/// Returns an error on an invalid configuration (zero population size).
pub fn search(config: &SearchConfig, start: Square) -> SearchResult<SearchReport> {
    search_with_observer(config, start, |_, _| {})
}

/// Run the search, invoking `observer` with each generation's index and
/// fitness statistics.
///
/// Exhausting the generation budget is a normal outcome, not an error.
///
/// # Errors
///
/// Returns an error on an invalid configuration (zero population size).
pub fn search_with_observer<O>(
    config: &SearchConfig,
    start: Square,
    mut observer: O,
) -> SearchResult<SearchReport>
where
    O: FnMut(usize, ScoreStats),
{
    let mut rng = SmallRng::seed_from_u64(config.seed);
    let fitness = TourFitness::new(start);
    let mut population = Population::new(
        config.population_size,
        config.genome_slots,
        fitness,
        config.breeding,
        &mut rng,
    )?;

    let mut outcome = Outcome::Exhausted;
    for generation in 0..config.generations {
        let rate = config.mutation.rate_at(generation);
        let reached = population.advance_generation(
            config.elitism,
            config.target_fitness,
            rate,
            &mut rng,
        )?;

        let stats = population.stats()?;
        log::debug!(
            "gen {generation:>4}: best={} mean={:.2} rate={rate}",
            stats.best,
            stats.mean
        );
        observer(generation, stats);

        if reached {
            log::info!("target fitness {} reached at generation {generation}", config.target_fitness);
            outcome = Outcome::Solved { generation };
            break;
        }
    }

    let (best, _) = population.best()?;
    let best_fitness = best.fitness(&fitness)?;
    if matches!(outcome, Outcome::Exhausted) {
        log::info!(
            "budget of {} generations exhausted, best fitness {best_fitness}",
            config.generations
        );
    }
    let matrix = Board::new(start).render(&best.genome)?;

    Ok(SearchReport {
        outcome,
        best_fitness,
        best,
        matrix,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(s: &str) -> Square {
        s.parse().expect("valid square")
    }

    #[test]
    fn test_config_defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.genome_slots, 64);
        assert_eq!(config.population_size, 50);
        assert_eq!(config.target_fitness, 63);
        assert_eq!(config.generations, 2000);
        assert!(config.elitism);
    }

    #[test]
    fn test_search_is_reproducible() {
        let config = SearchConfig {
            generations: 10,
            ..SearchConfig::default()
        };
        let a = search(&config, square("E4")).unwrap();
        let b = search(&config, square("E4")).unwrap();
        assert_eq!(a.best_fitness, b.best_fitness);
        assert_eq!(a.best, b.best);
        assert_eq!(a.matrix, b.matrix);
    }

    #[test]
    fn test_observer_sees_every_generation() {
        let config = SearchConfig {
            generations: 8,
            target_fitness: 64, // above the 63-move maximum, never reached
            ..SearchConfig::default()
        };
        let mut seen = Vec::new();
        let report = search_with_observer(&config, square("C3"), |generation, _| {
            seen.push(generation);
        })
        .unwrap();
        assert_eq!(seen, (0..8).collect::<Vec<_>>());
        assert_eq!(report.outcome, Outcome::Exhausted);
    }
}
