//! The 3-bit move codec.
//!
//! Each move slot in a genome is a 3-bit codeword naming one of the eight
//! knight offsets. The offset table order matters: the simulator's repair
//! heuristic scans candidate moves in table order, so the table is a fixed
//! named constant rather than an artifact of branch order.

use crate::error::Error;

/// Bits per move codeword.
pub const CODEWORD_BITS: usize = 3;

/// Knight move offsets as (rank delta, file delta), indexed by codeword
/// value. The order is load-bearing for repair scanning.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, 1),
    (-1, 2),
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
];

/// Decode a codeword as a big-endian 3-bit integer in 0..=7.
#[must_use]
#[inline]
pub fn decode_move(codeword: [bool; CODEWORD_BITS]) -> u8 {
    (u8::from(codeword[0]) << 2) | (u8::from(codeword[1]) << 1) | u8::from(codeword[2])
}

/// Encode a move index as a big-endian 3-bit codeword.
///
/// # Errors
///
/// Returns [`Error::InvalidMoveIndex`] if `index` is outside 0..=7.
#[inline]
pub fn encode_move(index: u8) -> Result<[bool; CODEWORD_BITS], Error> {
    if index > 7 {
        return Err(Error::InvalidMoveIndex(index));
    }
    Ok([index & 4 != 0, index & 2 != 0, index & 1 != 0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_decode_round_trip() {
        for index in 0..8u8 {
            let codeword = encode_move(index).unwrap();
            assert_eq!(decode_move(codeword), index);
        }
    }

    #[test]
    fn test_decode_is_big_endian() {
        assert_eq!(decode_move([false, false, false]), 0);
        assert_eq!(decode_move([false, false, true]), 1);
        assert_eq!(decode_move([true, false, false]), 4);
        assert_eq!(decode_move([true, true, true]), 7);
    }

    #[test]
    fn test_encode_rejects_out_of_range() {
        assert_eq!(encode_move(8), Err(Error::InvalidMoveIndex(8)));
        assert_eq!(encode_move(255), Err(Error::InvalidMoveIndex(255)));
    }

    #[test]
    fn test_offsets_are_knight_moves() {
        for (dr, df) in KNIGHT_OFFSETS {
            assert_eq!(dr.abs() + df.abs(), 3);
            assert!(dr != 0 && df != 0);
        }
    }
}
