//! Board square coordinates.

use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// A square on the 8x8 board.
///
/// Rank and file are 0-based with the origin at A1 (bottom-left). The
/// external representation is a file letter A-H followed by a rank digit
/// 1-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    /// File (column), 0 = A.
    file: u8,
    /// Rank (row), 0 = rank 1.
    rank: u8,
}

impl Square {
    /// Create a square from 0-based file and rank indices.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSquare`] if either index is outside 0..=7.
    pub fn new(file: u8, rank: u8) -> Result<Self, Error> {
        if file > 7 || rank > 7 {
            return Err(Error::InvalidSquare(format!("file {file}, rank {rank}")));
        }
        Ok(Self { file, rank })
    }

    /// 0-based file (column) index.
    #[must_use]
    #[inline]
    pub const fn file(self) -> usize {
        self.file as usize
    }

    /// 0-based rank (row) index, counted from the bottom.
    #[must_use]
    #[inline]
    pub const fn rank(self) -> usize {
        self.rank as usize
    }
}

impl FromStr for Square {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidSquare(s.to_string());
        let mut chars = s.chars();
        let file_char = chars.next().ok_or_else(invalid)?;
        let rank_char = chars.next().ok_or_else(invalid)?;
        if chars.next().is_some() {
            return Err(invalid());
        }
        let file = match file_char.to_ascii_uppercase() {
            c @ 'A'..='H' => c as u8 - b'A',
            _ => return Err(invalid()),
        };
        let rank = match rank_char {
            c @ '1'..='8' => c as u8 - b'1',
            _ => return Err(invalid()),
        };
        Ok(Self { file, rank })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'A' + self.file) as char, self.rank + 1)
    }
}
