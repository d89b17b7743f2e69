//! Minimal per-piece operations between two positions
//!
//! A piece appearing at a square is matched against a vacated square holding
//! the same piece; among several candidates the smallest Chebyshev distance
//! wins, so the closest piece travels. Unmatched appearances and vacations
//! become appear/disappear operations.

use crate::model::{Piece, Position, Square};

/// One visual operation derived from a position pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceOp {
    /// A piece travels between two squares
    Move { piece: Piece, from: Square, to: Square },
    /// A piece fades in at a square
    Appear { piece: Piece, at: Square },
    /// A piece fades out at a square
    Disappear { piece: Piece, at: Square },
}

/// The set of operations turning one position into another
#[derive(Debug, Clone, Default)]
pub struct PositionDiff {
    ops: Vec<PieceOp>,
}

impl PositionDiff {
    /// Computes the operations turning `from` into `to`
    pub fn between(from: &Position, to: &Position) -> PositionDiff {
        let mut appeared: Vec<(Square, Piece)> = Vec::new();
        let mut disappeared: Vec<(Square, Piece)> = Vec::new();
        for square in Square::all() {
            let before = from.piece_on(square);
            let after = to.piece_on(square);
            if before != after {
                if let Some(piece) = after {
                    appeared.push((square, piece));
                }
                if let Some(piece) = before {
                    disappeared.push((square, piece));
                }
            }
        }

        let mut ops = Vec::with_capacity(appeared.len() + disappeared.len());
        for (to_square, piece) in appeared {
            // Nearest vacated square holding the same piece becomes the
            // move origin; each origin is consumed at most once.
            let mut best: Option<(usize, u8)> = None;
            for (i, &(from_square, candidate)) in disappeared.iter().enumerate() {
                if candidate != piece {
                    continue;
                }
                let distance = to_square.distance(from_square);
                if best.is_none_or(|(_, d)| distance < d) {
                    best = Some((i, distance));
                }
            }
            match best {
                Some((i, _)) => {
                    let (from_square, _) = disappeared.remove(i);
                    ops.push(PieceOp::Move {
                        piece,
                        from: from_square,
                        to: to_square,
                    });
                }
                None => ops.push(PieceOp::Appear {
                    piece,
                    at: to_square,
                }),
            }
        }
        for (square, piece) in disappeared {
            ops.push(PieceOp::Disappear { piece, at: square });
        }
        PositionDiff { ops }
    }

    pub fn ops(&self) -> &[PieceOp] {
        &self.ops
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Applies the operations to `from`
    ///
    /// Origins are cleared before destinations are written, so overlapping
    /// squares (a piece leaving a square another piece appears on) resolve
    /// the same way regardless of operation order. For any pair of positions,
    /// `PositionDiff::between(a, b).apply_to(a) == b`.
    pub fn apply_to(&self, from: &Position) -> Position {
        let mut next = from.clone();
        for op in &self.ops {
            match *op {
                PieceOp::Move { from, .. } => next.set_piece(from, None),
                PieceOp::Disappear { at, .. } => next.set_piece(at, None),
                PieceOp::Appear { .. } => {}
            }
        }
        for op in &self.ops {
            match *op {
                PieceOp::Move { piece, to, .. } => next.set_piece(to, Some(piece)),
                PieceOp::Appear { piece, at } => next.set_piece(at, Some(piece)),
                PieceOp::Disappear { .. } => {}
            }
        }
        next
    }
}
