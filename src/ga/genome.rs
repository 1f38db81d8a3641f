//! Bit-string genome representation.
//!
//! A genome is an ordered sequence of bits, three per intended move. The
//! engine only constructs genomes whose length is a multiple of the
//! codeword width, but raw construction is unchecked so that the simulator
//! can fail fast on malformed input instead of silently truncating.

use crate::board::CODEWORD_BITS;
use crate::error::Error;
use rand::Rng;

/// Default number of move slots (one per board cell).
pub const DEFAULT_SLOTS: usize = 64;

/// A fixed-length bit-string genome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genome {
    bits: Vec<bool>,
}

impl Genome {
    /// Create an all-zero genome with the given number of move slots.
    #[must_use]
    pub fn zeroed(slots: usize) -> Self {
        Self {
            bits: vec![false; slots * CODEWORD_BITS],
        }
    }

    /// Create a genome with independent uniform random bits.
    #[must_use]
    pub fn random<R: Rng>(rng: &mut R, slots: usize) -> Self {
        let mut genome = Self::zeroed(slots);
        genome.randomize(rng);
        genome
    }

    /// Wrap a raw bit sequence without length validation.
    #[must_use]
    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Total bit length.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether the genome holds no bits.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Number of move slots, failing fast when the bit length is not a
    /// multiple of the codeword width.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGenomeLength`] on a malformed length.
    pub fn checked_slots(&self) -> Result<usize, Error> {
        if self.bits.len() % CODEWORD_BITS != 0 {
            return Err(Error::InvalidGenomeLength {
                len: self.bits.len(),
            });
        }
        Ok(self.bits.len() / CODEWORD_BITS)
    }

    /// Codeword at the given slot.
    ///
    /// # Panics
    ///
    /// Panics if the slot is out of range.
    #[must_use]
    pub fn slot(&self, index: usize) -> [bool; CODEWORD_BITS] {
        let base = index * CODEWORD_BITS;
        [self.bits[base], self.bits[base + 1], self.bits[base + 2]]
    }

    /// Overwrite the codeword at the given slot.
    ///
    /// # Panics
    ///
    /// Panics if the slot is out of range.
    pub fn set_slot(&mut self, index: usize, codeword: [bool; CODEWORD_BITS]) {
        let base = index * CODEWORD_BITS;
        self.bits[base..base + CODEWORD_BITS].copy_from_slice(&codeword);
    }

    /// The raw bit sequence.
    #[must_use]
    pub fn as_bits(&self) -> &[bool] {
        &self.bits
    }

    /// Mutable access to the raw bit sequence.
    pub fn bits_mut(&mut self) -> &mut [bool] {
        &mut self.bits
    }

    /// Refill the genome with independent uniform random bits.
    pub fn randomize<R: Rng>(&mut self, rng: &mut R) {
        for bit in &mut self.bits {
            *bit = rng.gen_bool(0.5);
        }
    }
}
