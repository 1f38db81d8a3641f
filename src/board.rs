//! Board layer for the tour search.
//!
//! Implements the 8x8 board the knight walks on:
//! - Square coordinates with the external A1..H8 notation
//! - The 3-bit move codec mapping codewords to knight offsets
//! - The board simulator that replays and repairs move sequences

mod moves;
mod simulator;
mod square;

pub use moves::{CODEWORD_BITS, KNIGHT_OFFSETS, decode_move, encode_move};
pub use simulator::{Board, TourFitness, UNVISITED, VisitMatrix};
pub use square::Square;
