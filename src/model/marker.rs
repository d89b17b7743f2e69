//! Square markers independent of piece occupancy

use serde::{Deserialize, Serialize};

use super::square::Square;

/// Visual marker styles a view knows how to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarkerType {
    Frame,
    Square,
    Dot,
    Circle,
}

/// A marker attached to one square
///
/// At most one marker per `(square, kind)` pair exists on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    pub square: Square,
    pub kind: MarkerType,
}
