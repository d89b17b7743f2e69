//! Board squares addressed by file and rank

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BoardError;

/// One of the 64 board squares
///
/// File 0-7 maps to a-h, rank 0-7 maps to 1-8, so `index = rank * 8 + file`
/// puts a1 at 0 and h8 at 63.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    file: u8,
    rank: u8,
}

impl Square {
    /// Number of addressable squares
    pub const COUNT: usize = 64;

    /// Builds a square from 0-based file and rank; both must be below 8
    pub fn new(file: u8, rank: u8) -> Square {
        debug_assert!(file < 8 && rank < 8, "square out of range: {file},{rank}");
        Square { file, rank }
    }

    /// Builds a square from its 0-63 index
    pub fn from_index(index: usize) -> Square {
        debug_assert!(index < Self::COUNT, "square index out of range: {index}");
        Square {
            file: (index % 8) as u8,
            rank: (index / 8) as u8,
        }
    }

    pub fn index(self) -> usize {
        self.rank as usize * 8 + self.file as usize
    }

    pub fn file(self) -> u8 {
        self.file
    }

    pub fn rank(self) -> u8 {
        self.rank
    }

    /// Iterates all 64 squares in index order (a1, b1, .., h8)
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Self::COUNT).map(Square::from_index)
    }

    /// Chebyshev distance: the number of king steps between two squares
    pub fn distance(self, other: Square) -> u8 {
        let files = self.file.abs_diff(other.file);
        let ranks = self.rank.abs_diff(other.rank);
        files.max(ranks)
    }
}

impl FromStr for Square {
    type Err = BoardError;

    fn from_str(name: &str) -> Result<Square, BoardError> {
        let invalid = || BoardError::InvalidSquare {
            name: name.to_string(),
        };
        let bytes = name.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let file = bytes[0].wrapping_sub(b'a');
        let rank = bytes[1].wrapping_sub(b'1');
        if file > 7 || rank > 7 {
            return Err(invalid());
        }
        Ok(Square { file, rank })
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.file) as char, self.rank + 1)
    }
}
