//! Tournament selection and fitness statistics.

// Statistics use intentional precision-losing casts
#![allow(clippy::cast_precision_loss)]

use rand::Rng;

/// Fallback tournament size when the configured size exceeds the
/// population.
const FALLBACK_TOURNAMENT_SIZE: usize = 3;

/// Tournament selection: draw `k` individuals uniformly with replacement
/// over the whole population and return the index of the fittest draw.
///
/// The same individual may be drawn more than once. A `k` larger than the
/// population falls back to 3 draws with a diagnostic warning; the sampling
/// range is always the live population size.
///
/// # Panics
///
/// Panics if `scores` is empty.
#[must_use]
pub fn tournament_select<R: Rng>(scores: &[u32], k: usize, rng: &mut R) -> usize {
    let pool = scores.len();
    assert!(pool > 0, "tournament over an empty population");

    let k = if k > pool {
        log::warn!("tournament size {k} exceeds population {pool}, falling back to {FALLBACK_TOURNAMENT_SIZE}");
        FALLBACK_TOURNAMENT_SIZE
    } else {
        k.max(1)
    };

    let mut best_idx = rng.gen_range(0..pool);
    let mut best = scores[best_idx];
    for _ in 1..k {
        let idx = rng.gen_range(0..pool);
        if scores[idx] > best {
            best_idx = idx;
            best = scores[idx];
        }
    }
    best_idx
}

/// Select a parent pair with two independent tournaments.
///
/// The second tournament samples from the full population again; the first
/// parent is not excluded and may be drawn twice.
///
/// # Panics
///
/// Panics if `scores` is empty.
#[must_use]
pub fn select_parents<R: Rng>(scores: &[u32], k: usize, rng: &mut R) -> (usize, usize) {
    let parent1 = tournament_select(scores, k, rng);
    let parent2 = tournament_select(scores, k, rng);
    (parent1, parent2)
}

/// Per-generation fitness statistics, for progress reporting.
#[derive(Debug, Clone, Copy)]
pub struct ScoreStats {
    /// Best fitness in the generation.
    pub best: u32,
    /// Mean fitness.
    pub mean: f64,
}

impl ScoreStats {
    /// Compute statistics from a generation's fitness scores.
    #[must_use]
    pub fn from_scores(scores: &[u32]) -> Self {
        if scores.is_empty() {
            return Self { best: 0, mean: 0.0 };
        }
        let best = scores.iter().copied().max().unwrap_or(0);
        let mean = f64::from(scores.iter().sum::<u32>()) / scores.len() as f64;
        Self { best, mean }
    }
}
