//! One-point crossover.

use crate::ga::genome::Genome;
use rand::Rng;

/// Breed a child genome from two parents with one-point crossover.
///
/// A cut point is drawn uniformly from `[0, len - 1]` on every call. The
/// child takes the first parent's bits through the cut point inclusive and
/// the second parent's bits after it. Parents must have equal length; the
/// child aliases neither.
#[must_use]
pub fn crossover<R: Rng>(parent1: &Genome, parent2: &Genome, rng: &mut R) -> Genome {
    debug_assert_eq!(parent1.len(), parent2.len());
    let len = parent1.len();
    if len == 0 {
        return parent1.clone();
    }
    let cut = rng.gen_range(0..len);
    let mut bits = Vec::with_capacity(len);
    bits.extend_from_slice(&parent1.as_bits()[..=cut]);
    bits.extend_from_slice(&parent2.as_bits()[cut + 1..]);
    Genome::from_bits(bits)
}
