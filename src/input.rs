//! Move-input and square-select events
//!
//! The rendering integration turns pointer/touch gestures into these events
//! and delivers them through [`crate::board::Chessboard::dispatch_move_input`]
//! and [`crate::board::Chessboard::dispatch_square_select`].

use crate::model::{PieceColor, Square};

/// Events produced while the user enters a move with the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveInputEvent {
    /// The user picked up the piece on `square`; the handler returns false
    /// to veto the gesture
    Started { square: Square },
    /// The user dropped the piece; the handler returns false to reject the
    /// move
    Validate { from: Square, to: Square },
    /// The gesture was canceled (drop outside the board, second click, ...)
    Canceled { square: Square },
}

/// Which pointer button selected a square
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquareSelectType {
    Primary,
    Secondary,
}

/// A square click/tap delivered to the square-select handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareSelectEvent {
    pub square: Square,
    pub select_type: SquareSelectType,
}

/// Handler consulted for every move-input event
pub type MoveInputHandler = Box<dyn FnMut(&MoveInputEvent) -> bool + Send>;

/// Handler notified of square selections
pub type SquareSelectHandler = Box<dyn FnMut(&SquareSelectEvent) + Send>;

/// Active move-input registration: the handler plus an optional restriction
/// to pieces of one color
pub(crate) struct MoveInputMode {
    pub(crate) handler: MoveInputHandler,
    pub(crate) color: Option<PieceColor>,
}
