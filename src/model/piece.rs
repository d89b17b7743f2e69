//! Piece color and kind value types

use std::fmt;

use serde::{Deserialize, Serialize};

/// Side of a piece; also names the board orientation (the color rendered at
/// the bottom edge)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceColor {
    White,
    Black,
}

impl PieceColor {
    pub fn opposite(self) -> PieceColor {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }
}

/// Kind of piece occupying a square
///
/// `Wildcard` and `Chip` are reserved for extensions that want to render
/// non-standard glyphs (practice targets, ghost pieces); their FEN letters
/// are `w` and `c`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
    Wildcard,
    Chip,
}

impl PieceType {
    /// Lowercase FEN letter for this kind
    pub fn fen_letter(self) -> char {
        match self {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
            PieceType::Wildcard => 'w',
            PieceType::Chip => 'c',
        }
    }

    /// Inverse of [`PieceType::fen_letter`]; expects a lowercase letter
    pub fn from_fen_letter(letter: char) -> Option<PieceType> {
        match letter {
            'p' => Some(PieceType::Pawn),
            'n' => Some(PieceType::Knight),
            'b' => Some(PieceType::Bishop),
            'r' => Some(PieceType::Rook),
            'q' => Some(PieceType::Queen),
            'k' => Some(PieceType::King),
            'w' => Some(PieceType::Wildcard),
            'c' => Some(PieceType::Chip),
            _ => None,
        }
    }
}

/// A colored piece occupying one square
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub color: PieceColor,
    pub kind: PieceType,
}

impl Piece {
    pub fn new(color: PieceColor, kind: PieceType) -> Piece {
        Piece { color, kind }
    }

    /// Decodes a FEN character; uppercase is white, lowercase is black
    pub fn from_fen_char(ch: char) -> Option<Piece> {
        let color = if ch.is_ascii_uppercase() {
            PieceColor::White
        } else {
            PieceColor::Black
        };
        let kind = PieceType::from_fen_letter(ch.to_ascii_lowercase())?;
        Some(Piece { color, kind })
    }

    /// Encodes this piece as its FEN character
    pub fn to_fen_char(self) -> char {
        let letter = self.kind.fen_letter();
        match self.color {
            PieceColor::White => letter.to_ascii_uppercase(),
            PieceColor::Black => letter,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fen_char())
    }
}
