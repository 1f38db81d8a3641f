//! Generation container: scoring, selection, and generation advance.

use crate::error::Error;
use crate::ga::genome::Genome;
use crate::ga::individual::Individual;
use crate::ga::selection::{ScoreStats, select_parents};
use rand::Rng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Result of scoring one genome: the (possibly repaired) genome copy and
/// the number of move slots consumed.
///
/// Scoring is value-semantic: the input genome is never mutated. Repairs
/// surface here instead, and the population writes them back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// The genome after any repairs.
    pub genome: Genome,
    /// Count of successfully consumed move slots.
    pub score: u32,
}

/// A source of fitness scores for genomes.
///
/// Implementations must be safe to call from multiple threads at once:
/// scoring within a generation runs in parallel, each call on its own
/// simulator state.
pub trait Fitness: Sync {
    /// Score a genome, returning the repaired genome alongside the score.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGenomeLength`] when the genome's bit length
    /// is not a multiple of the codeword width.
    fn score(&self, genome: &Genome) -> Result<Evaluation, Error>;
}

/// Tunables for parent selection and breeding.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BreedingConfig {
    /// Probability that a slot is filled by crossover rather than a mutated
    /// copy of the first parent.
    pub crossover_rate: f64,
    /// Tournament sample size (with replacement).
    pub tournament_size: usize,
}

impl Default for BreedingConfig {
    fn default() -> Self {
        Self {
            crossover_rate: 0.8,
            tournament_size: 3,
        }
    }
}

/// One generation of candidate solutions plus a staging buffer for the
/// next.
///
/// Invariants: the live individual count equals the construction size at
/// the end of every [`advance_generation`](Population::advance_generation)
/// call, and the staging buffer is empty between calls.
pub struct Population<F> {
    individuals: Vec<Individual>,
    staging: Vec<Individual>,
    fitness: F,
    breeding: BreedingConfig,
}

impl<F> std::fmt::Debug for Population<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Population")
            .field("size", &self.individuals.len())
            .field("breeding", &self.breeding)
            .finish_non_exhaustive()
    }
}

impl<F: Fitness> Population<F> {
    /// Create a population of `size` randomized individuals.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPopulation`] when `size` is 0.
    pub fn new<R: Rng>(
        size: usize,
        genome_slots: usize,
        fitness: F,
        breeding: BreedingConfig,
        rng: &mut R,
    ) -> Result<Self, Error> {
        if size == 0 {
            return Err(Error::EmptyPopulation);
        }
        let individuals = (0..size)
            .map(|_| Individual::random(rng, genome_slots))
            .collect();
        Ok(Self {
            individuals,
            staging: Vec::with_capacity(size),
            fitness,
            breeding,
        })
    }

    /// Number of live individuals.
    #[must_use]
    pub fn size(&self) -> usize {
        self.individuals.len()
    }

    /// The individual at the given index.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of range.
    #[must_use]
    pub fn individual(&self, index: usize) -> &Individual {
        &self.individuals[index]
    }

    /// Score every individual, writing repaired genomes back.
    ///
    /// Evaluations run in parallel; each scoring call is independent and
    /// the write-back happens only after all of them finish. Repaired
    /// genomes are fixpoints, so repeated scoring is stable.
    ///
    /// # Errors
    ///
    /// Propagates scoring errors.
    pub fn evaluate_all(&mut self) -> Result<Vec<u32>, Error> {
        let fitness = &self.fitness;
        let evaluations: Vec<Evaluation> = self
            .individuals
            .par_iter()
            .map(|individual| fitness.score(&individual.genome))
            .collect::<Result<_, _>>()?;

        let mut scores = Vec::with_capacity(evaluations.len());
        for (individual, evaluation) in self.individuals.iter_mut().zip(evaluations) {
            individual.genome = evaluation.genome;
            scores.push(evaluation.score);
        }
        Ok(scores)
    }

    /// The fittest individual and its index.
    ///
    /// Comparison is strict, so ties keep the lowest index; an all-zero
    /// generation yields index 0.
    ///
    /// # Errors
    ///
    /// Propagates scoring errors.
    pub fn best(&mut self) -> Result<(Individual, usize), Error> {
        let scores = self.evaluate_all()?;
        let index = best_index(&scores);
        Ok((self.individuals[index].clone(), index))
    }

    /// Fitness statistics over the current generation.
    ///
    /// # Errors
    ///
    /// Propagates scoring errors.
    pub fn stats(&mut self) -> Result<ScoreStats, Error> {
        Ok(ScoreStats::from_scores(&self.evaluate_all()?))
    }

    /// Select a parent pair by two independent tournaments over the current
    /// generation's scores.
    #[must_use]
    pub fn tournament_select<R: Rng>(&self, scores: &[u32], rng: &mut R) -> (usize, usize) {
        select_parents(scores, self.breeding.tournament_size, rng)
    }

    /// Build and install the next generation.
    ///
    /// With `elite` set, the best individual is cloned unchanged into the
    /// first slot. Every other slot is filled from a tournament-selected
    /// parent pair: with probability `crossover_rate` a crossover child,
    /// otherwise a copy of the first parent; either way one mutation pass
    /// at `mutation_rate` is applied to the new individual only, never to a
    /// member of the outgoing generation.
    ///
    /// Returns true iff the new generation's best fitness equals `target`
    /// exactly.
    ///
    /// # Errors
    ///
    /// Propagates scoring errors.
    pub fn advance_generation<R: Rng>(
        &mut self,
        elite: bool,
        target: u32,
        mutation_rate: f64,
        rng: &mut R,
    ) -> Result<bool, Error> {
        debug_assert!(self.staging.is_empty());
        let scores = self.evaluate_all()?;
        let size = self.individuals.len();
        let crossover_rate = self.breeding.crossover_rate.clamp(0.0, 1.0);

        if elite {
            let best = best_index(&scores);
            self.staging.push(self.individuals[best].clone());
        }

        while self.staging.len() < size {
            let (p1, p2) = self.tournament_select(&scores, rng);
            let mut child = if rng.gen_bool(crossover_rate) {
                self.individuals[p1].crossover(&self.individuals[p2], rng)
            } else {
                self.individuals[p1].clone()
            };
            child.mutate(mutation_rate, rng);
            self.staging.push(child);
        }

        self.individuals = std::mem::take(&mut self.staging);

        let new_scores = self.evaluate_all()?;
        Ok(new_scores.iter().copied().max().unwrap_or(0) == target)
    }
}

/// Index of the strictly greatest score; first index wins ties.
fn best_index(scores: &[u32]) -> usize {
    let mut best_val = 0u32;
    let mut best_idx = 0usize;
    for (idx, &score) in scores.iter().enumerate() {
        if score > best_val {
            best_val = score;
            best_idx = idx;
        }
    }
    best_idx
}
