//! Rendering collaborator contract
//!
//! The core never draws anything itself; it drives an implementation of
//! [`BoardView`]. Sprite loading, theming and actual pixel work live entirely
//! on the view side.

use std::time::Duration;

use async_trait::async_trait;

use crate::model::{Marker, Piece, PieceColor, Position, Square};

/// Rendering collaborator driven by the animation queue
///
/// Each animation primitive returns a future that resolves exactly once,
/// when the visual effect has finished. The queue only ever holds a shared
/// reference, so implementations that need mutable state use interior
/// mutability.
#[async_trait]
pub trait BoardView: Send + Sync {
    /// Animates a piece traveling from one square to another
    async fn animate_move(&self, from: Square, to: Square, piece: Piece, duration: Duration);

    /// Animates a piece fading in at a square
    async fn animate_appear(&self, square: Square, piece: Piece, duration: Duration);

    /// Animates a piece fading out at a square
    async fn animate_disappear(&self, square: Square, piece: Piece, duration: Duration);

    /// Redraws all pieces from the given position, ending any animation state
    fn draw_pieces(&self, position: &Position);

    /// Redraws the marker layer
    fn draw_markers(&self, markers: &[Marker]);

    /// Redraws the board itself with the given orientation at the bottom
    fn redraw_board(&self, orientation: PieceColor);
}

/// View that renders nothing
///
/// Lets the core run headless: logic-only consumers and tests construct a
/// board over a `NullView` and every animation resolves immediately.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullView;

#[async_trait]
impl BoardView for NullView {
    async fn animate_move(&self, _from: Square, _to: Square, _piece: Piece, _duration: Duration) {}

    async fn animate_appear(&self, _square: Square, _piece: Piece, _duration: Duration) {}

    async fn animate_disappear(&self, _square: Square, _piece: Piece, _duration: Duration) {}

    fn draw_pieces(&self, _position: &Position) {}

    fn draw_markers(&self, _markers: &[Marker]) {}

    fn redraw_board(&self, _orientation: PieceColor) {}
}
