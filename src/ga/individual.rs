//! A single candidate solution.

use crate::error::Error;
use crate::ga::crossover::crossover;
use crate::ga::genome::Genome;
use crate::ga::mutation::mutate;
use crate::ga::population::Fitness;
use rand::Rng;

/// One candidate move sequence: a genome plus its genetic operators.
///
/// Fitness is never cached here; the genome can change between scorings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Individual {
    /// The candidate's genome. Owned exclusively; crossover children never
    /// alias their parents.
    pub genome: Genome,
}

impl Individual {
    /// Create an individual with an all-zero genome.
    #[must_use]
    pub fn zeroed(slots: usize) -> Self {
        Self {
            genome: Genome::zeroed(slots),
        }
    }

    /// Create an individual with a uniformly random genome.
    #[must_use]
    pub fn random<R: Rng>(rng: &mut R, slots: usize) -> Self {
        Self {
            genome: Genome::random(rng, slots),
        }
    }

    /// Refill the genome with uniform random bits.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        self.genome.randomize(rng);
    }

    /// Score this individual's genome with the supplied fitness source.
    ///
    /// # Errors
    ///
    /// Propagates scoring errors (malformed genome length).
    pub fn fitness<F: Fitness>(&self, fitness: &F) -> Result<u32, Error> {
        Ok(fitness.score(&self.genome)?.score)
    }

    /// Breed a child with one-point crossover; the cut point is re-drawn
    /// per call.
    #[must_use]
    pub fn crossover<R: Rng>(&self, other: &Self, rng: &mut R) -> Self {
        Self {
            genome: crossover(&self.genome, &other.genome, rng),
        }
    }

    /// Mutate the genome in place. Rates outside `[0, 1]` clamp to 0.
    pub fn mutate<R: Rng>(&mut self, rate: f64, rng: &mut R) {
        mutate(&mut self.genome, rate, rng);
    }
}
