//! Per-bit mutation and the mutation-rate annealing schedule.

use crate::ga::genome::Genome;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Flip each bit of the genome independently with probability `rate`.
///
/// Rates outside `[0, 1]` (including NaN) are silently treated as 0 rather
/// than raised as an error.
pub fn mutate<R: Rng>(genome: &mut Genome, rate: f64, rng: &mut R) {
    let rate = if (0.0..=1.0).contains(&rate) { rate } else { 0.0 };
    for bit in genome.bits_mut() {
        if rng.gen_bool(rate) {
            *bit = !*bit;
        }
    }
}

/// Periodic mutation-rate schedule: exploration bursts followed by
/// exploitation at a low base rate.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct MutationSchedule {
    /// Rate outside burst windows.
    pub base_rate: f64,
    /// Rate during burst windows.
    pub burst_rate: f64,
    /// Window length in generations.
    pub period: usize,
    /// Burst length at the start of each window, in generations.
    pub burst_len: usize,
}

impl Default for MutationSchedule {
    fn default() -> Self {
        Self {
            base_rate: 0.01,
            burst_rate: 0.1,
            period: 350,
            burst_len: 50,
        }
    }
}

impl MutationSchedule {
    /// Mutation rate for the given generation index.
    #[must_use]
    pub fn rate_at(&self, generation: usize) -> f64 {
        if self.period > 0 && generation % self.period < self.burst_len {
            self.burst_rate
        } else {
            self.base_rate
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn test_mutate_zero_rate_is_identity() {
        let mut rng = SmallRng::seed_from_u64(3);
        let original = Genome::random(&mut rng, 64);
        let mut genome = original.clone();
        mutate(&mut genome, 0.0, &mut rng);
        assert_eq!(genome, original);
    }

    #[test]
    fn test_mutate_full_rate_flips_every_bit() {
        let mut rng = SmallRng::seed_from_u64(4);
        let original = Genome::random(&mut rng, 64);
        let mut genome = original.clone();
        mutate(&mut genome, 1.0, &mut rng);
        for (a, b) in genome.as_bits().iter().zip(original.as_bits()) {
            assert_ne!(a, b);
        }
    }

    #[test]
    fn test_out_of_range_rate_clamps_to_zero() {
        let mut rng = SmallRng::seed_from_u64(5);
        let original = Genome::random(&mut rng, 64);
        for rate in [-0.5, 1.5, f64::NAN] {
            let mut genome = original.clone();
            mutate(&mut genome, rate, &mut rng);
            assert_eq!(genome, original);
        }
    }

    #[test]
    fn test_schedule_bursts() {
        let schedule = MutationSchedule::default();
        assert!((schedule.rate_at(0) - 0.1).abs() < f64::EPSILON);
        assert!((schedule.rate_at(49) - 0.1).abs() < f64::EPSILON);
        assert!((schedule.rate_at(50) - 0.01).abs() < f64::EPSILON);
        assert!((schedule.rate_at(349) - 0.01).abs() < f64::EPSILON);
        assert!((schedule.rate_at(350) - 0.1).abs() < f64::EPSILON);
        assert!((schedule.rate_at(399) - 0.1).abs() < f64::EPSILON);
        assert!((schedule.rate_at(400) - 0.01).abs() < f64::EPSILON);
    }
}
