//! Mutable board state: position, orientation, markers and input modes
//!
//! `BoardState` is the single authoritative holder; it is mutated only
//! through the public board API and notifies registered extension hooks
//! synchronously.

use tracing::warn;

use crate::input::{
    MoveInputEvent, MoveInputHandler, MoveInputMode, SquareSelectEvent, SquareSelectHandler,
};

use super::extension::{ExtensionContext, ExtensionPoint, ExtensionRegistry};
use super::marker::{Marker, MarkerType};
use super::piece::{Piece, PieceColor};
use super::position::Position;
use super::square::Square;

/// Authoritative state of one board instance
pub struct BoardState {
    position: Position,
    orientation: PieceColor,
    markers: Vec<Marker>,
    move_input: Option<MoveInputMode>,
    square_select: Option<SquareSelectHandler>,
    extensions: ExtensionRegistry,
}

impl BoardState {
    pub fn new(position: Position, orientation: PieceColor) -> BoardState {
        BoardState {
            position,
            orientation,
            markers: Vec::new(),
            move_input: None,
            square_select: None,
            extensions: ExtensionRegistry::default(),
        }
    }

    // Position ---------------------------------------------------------------

    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Replaces the current position wholesale
    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>) {
        self.position.set_piece(square, piece);
    }

    pub fn move_piece(&mut self, from: Square, to: Square) -> bool {
        self.position.move_piece(from, to)
    }

    // Orientation ------------------------------------------------------------

    pub fn orientation(&self) -> PieceColor {
        self.orientation
    }

    pub fn set_orientation(&mut self, orientation: PieceColor) {
        self.orientation = orientation;
    }

    // Markers ----------------------------------------------------------------

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Adds a marker; returns false when the `(square, kind)` pair already
    /// exists
    pub fn add_marker(&mut self, square: Square, kind: MarkerType) -> bool {
        let marker = Marker { square, kind };
        if self.markers.contains(&marker) {
            return false;
        }
        self.markers.push(marker);
        true
    }

    /// Markers matching the filter; `None` acts as a wildcard on its axis
    pub fn markers_matching(
        &self,
        square: Option<Square>,
        kind: Option<MarkerType>,
    ) -> Vec<Marker> {
        self.markers
            .iter()
            .copied()
            .filter(|marker| Self::marker_matches(marker, square, kind))
            .collect()
    }

    /// Removes markers matching the filter; both `None` clears everything
    pub fn remove_markers(&mut self, square: Option<Square>, kind: Option<MarkerType>) {
        self.markers
            .retain(|marker| !Self::marker_matches(marker, square, kind));
    }

    fn marker_matches(marker: &Marker, square: Option<Square>, kind: Option<MarkerType>) -> bool {
        square.is_none_or(|s| marker.square == s) && kind.is_none_or(|k| marker.kind == k)
    }

    // Extension points -------------------------------------------------------

    pub fn register_extension<F>(&mut self, point: ExtensionPoint, hook: F)
    where
        F: FnMut(&ExtensionContext) + Send + 'static,
    {
        self.extensions.register(point, hook);
    }

    /// Synchronously calls every hook registered for `point`, in
    /// registration order; hooks receive a snapshot of the current state
    pub fn invoke_extension_points(&mut self, point: ExtensionPoint, board_id: &str) {
        let ctx = ExtensionContext {
            point,
            board_id: board_id.to_string(),
            fen: self.position.to_fen(),
            orientation: self.orientation,
        };
        self.extensions.invoke(&ctx);
    }

    // Input modes ------------------------------------------------------------

    pub fn move_input_enabled(&self) -> bool {
        self.move_input.is_some()
    }

    /// Registers the move-input handler; returns false (and changes nothing)
    /// when one is already registered
    pub fn enable_move_input(
        &mut self,
        handler: MoveInputHandler,
        color: Option<PieceColor>,
    ) -> bool {
        if self.move_input.is_some() {
            return false;
        }
        self.move_input = Some(MoveInputMode { handler, color });
        true
    }

    pub fn disable_move_input(&mut self) {
        self.move_input = None;
    }

    /// Delivers a move-input event to the registered handler
    ///
    /// Returns false when input is disabled, when a `Started` event names an
    /// empty square or a piece outside the color restriction, or when the
    /// handler vetoes the event.
    pub fn dispatch_move_input(&mut self, event: &MoveInputEvent) -> bool {
        let Some(mode) = self.move_input.as_mut() else {
            return false;
        };
        if let MoveInputEvent::Started { square } = *event {
            let allowed = match (mode.color, self.position.piece_on(square)) {
                (_, None) => false,
                (None, Some(_)) => true,
                (Some(color), Some(piece)) => piece.color == color,
            };
            if !allowed {
                warn!(%square, "move input rejected by color restriction");
                return false;
            }
        }
        (mode.handler)(event)
    }

    pub fn square_select_enabled(&self) -> bool {
        self.square_select.is_some()
    }

    /// Registers the square-select handler; returns false (and changes
    /// nothing) when one is already registered
    pub fn enable_square_select(&mut self, handler: SquareSelectHandler) -> bool {
        if self.square_select.is_some() {
            return false;
        }
        self.square_select = Some(handler);
        true
    }

    pub fn disable_square_select(&mut self) {
        self.square_select = None;
    }

    pub fn dispatch_square_select(&mut self, event: &SquareSelectEvent) {
        if let Some(handler) = self.square_select.as_mut() {
            handler(event);
        }
    }
}
