//! Error types for the tour search engine.

use std::fmt;

/// Errors raised by the board simulator and the evolutionary engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A move index outside [0,7] was passed to the codec.
    InvalidMoveIndex(u8),
    /// A genome's bit length is not a multiple of the codeword width.
    InvalidGenomeLength {
        /// The offending bit length.
        len: usize,
    },
    /// A board square outside A1..H8 was supplied.
    InvalidSquare(String),
    /// A population was constructed with zero individuals.
    EmptyPopulation,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidMoveIndex(index) => {
                write!(f, "invalid move index: {index} (expected 0..=7)")
            }
            Error::InvalidGenomeLength { len } => {
                write!(f, "invalid genome length: {len} bits (must be a multiple of 3)")
            }
            Error::InvalidSquare(s) => {
                write!(f, "invalid square: {s:?} (expected A1..H8)")
            }
            Error::EmptyPopulation => write!(f, "population size must be at least 1"),
        }
    }
}

impl std::error::Error for Error {}

/// Result type for search engine operations.
pub type SearchResult<T> = Result<T, Error>;
