//! Public chessboard facade
//!
//! The board mutates the authoritative [`BoardState`] synchronously, fires
//! extension points, then enqueues the old/new position snapshots so the view
//! catches up asynchronously. Awaiting the returned [`Completion`] is
//! optional; the transition plays either way.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{debug, warn};

use crate::animation::queue::{AnimationQueue, Completion, TurnGuard};
use crate::config::BoardConfig;
use crate::error::{BoardError, BoardResult};
use crate::ident::{IdGenerator, RandomIdGenerator};
use crate::input::{MoveInputEvent, MoveInputHandler, SquareSelectEvent, SquareSelectHandler};
use crate::model::extension::{ExtensionContext, ExtensionPoint};
use crate::model::state::BoardState;
use crate::model::{Marker, MarkerType, Piece, PieceColor, Position, Square};
use crate::view::BoardView;

/// A chessboard widget: position model, markers, input modes and an ordered
/// animation queue over a pluggable view
pub struct Chessboard {
    id: String,
    config: BoardConfig,
    state: BoardState,
    view: Arc<dyn BoardView>,
    queue: AnimationQueue,
    turning: Arc<AtomicBool>,
}

impl Chessboard {
    /// Creates a board and performs the initial draw
    ///
    /// Fails with [`BoardError::Construction`] when no tokio runtime is
    /// available to drive animations, and with a FEN error when the
    /// configured position is malformed.
    pub fn new(view: Arc<dyn BoardView>, config: BoardConfig) -> BoardResult<Chessboard> {
        let mut ids = RandomIdGenerator;
        Chessboard::new_with_ids(view, config, &mut ids)
    }

    /// Like [`Chessboard::new`] with an explicit id generator, for
    /// deterministic instance ids in tests
    pub fn new_with_ids(
        view: Arc<dyn BoardView>,
        config: BoardConfig,
        ids: &mut dyn IdGenerator,
    ) -> BoardResult<Chessboard> {
        if tokio::runtime::Handle::try_current().is_err() {
            return Err(BoardError::Construction {
                message: "no tokio runtime available to drive animations".to_string(),
            });
        }
        let position = Position::from_fen(&config.position)?;
        let state = BoardState::new(position, config.orientation);
        let queue = AnimationQueue::new(Arc::clone(&view), config.animation_duration);
        let mut board = Chessboard {
            id: ids.generate(),
            config,
            state,
            view,
            queue,
            turning: Arc::new(AtomicBool::new(false)),
        };
        board.view.redraw_board(board.state.orientation());
        board.view.draw_pieces(board.state.position());
        board
            .state
            .invoke_extension_points(ExtensionPoint::PositionChanged, &board.id);
        debug!(board = %board.id, "chessboard created");
        Ok(board)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    // Position ---------------------------------------------------------------

    /// Puts `piece` on `square` (or clears it with `None`)
    pub fn set_piece(&mut self, square: Square, piece: Option<Piece>, animated: bool) -> Completion {
        let previous = self.state.position().clone();
        self.state.set_piece(square, piece);
        self.after_position_mutation(previous, animated)
    }

    /// Moves the piece on `from` to `to`
    ///
    /// Moving from an empty square is a no-op that returns an already
    /// resolved completion.
    pub fn move_piece(&mut self, from: Square, to: Square, animated: bool) -> Completion {
        let previous = self.state.position().clone();
        if !self.state.move_piece(from, to) {
            warn!(board = %self.id, %from, "no piece to move");
        }
        self.after_position_mutation(previous, animated)
    }

    /// Replaces the whole position from a FEN string
    pub fn set_position(&mut self, fen: &str, animated: bool) -> BoardResult<Completion> {
        let next = Position::from_fen(fen)?;
        let previous = self.state.position().clone();
        self.state.set_position(next);
        Ok(self.after_position_mutation(previous, animated))
    }

    /// Fires `PositionChanged` when the position actually changed, then
    /// queues the visual catch-up
    fn after_position_mutation(&mut self, previous: Position, animated: bool) -> Completion {
        let current = self.state.position().clone();
        if current != previous {
            self.state
                .invoke_extension_points(ExtensionPoint::PositionChanged, &self.id);
        }
        self.queue
            .enqueue_position_change(previous, current, animated)
    }

    /// Current position as a FEN string
    pub fn fen(&self) -> String {
        self.state.position().to_fen()
    }

    /// Snapshot of the current position
    pub fn position(&self) -> Position {
        self.state.position().clone()
    }

    pub fn piece_on(&self, square: Square) -> Option<Piece> {
        self.state.position().piece_on(square)
    }

    // Orientation ------------------------------------------------------------

    pub fn orientation(&self) -> PieceColor {
        self.state.orientation()
    }

    /// Flips the board so `orientation` is rendered at the bottom
    ///
    /// At most one flip may be in flight; a concurrent call is ignored with a
    /// warning and returns an already resolved completion. Orientation and
    /// the `BoardChanged` hook update synchronously; only the visual flip is
    /// queued.
    pub fn set_orientation(&mut self, orientation: PieceColor, animated: bool) -> Completion {
        if self.turning.swap(true, Ordering::AcqRel) {
            warn!(board = %self.id, "orientation flip already in flight, ignoring");
            return Completion::resolved();
        }
        self.state.set_orientation(orientation);
        self.state
            .invoke_extension_points(ExtensionPoint::BoardChanged, &self.id);
        let guard = TurnGuard::new(Arc::clone(&self.turning));
        self.queue.enqueue_turn_board_guarded(
            self.state.position().clone(),
            orientation,
            animated,
            guard,
        )
    }

    // Markers ----------------------------------------------------------------

    /// Adds a marker; a duplicate `(square, kind)` pair is ignored with a
    /// warning
    pub fn add_marker(&mut self, kind: MarkerType, square: Square) {
        if !self.state.add_marker(square, kind) {
            warn!(board = %self.id, %square, ?kind, "duplicate marker ignored");
        }
        self.view.draw_markers(self.state.markers());
    }

    /// Markers matching the filter; `None` acts as a wildcard on its axis
    pub fn get_markers(&self, kind: Option<MarkerType>, square: Option<Square>) -> Vec<Marker> {
        self.state.markers_matching(square, kind)
    }

    /// Removes markers matching the filter; `(None, None)` clears everything
    pub fn remove_markers(&mut self, kind: Option<MarkerType>, square: Option<Square>) {
        self.state.remove_markers(square, kind);
        self.view.draw_markers(self.state.markers());
    }

    // Input ------------------------------------------------------------------

    /// Registers the move-input handler, optionally restricted to pieces of
    /// one color; a second registration is ignored with a warning
    pub fn enable_move_input(&mut self, handler: MoveInputHandler, color: Option<PieceColor>) {
        if !self.state.enable_move_input(handler, color) {
            warn!(board = %self.id, "move input already enabled, ignoring");
        }
    }

    pub fn disable_move_input(&mut self) {
        self.state.disable_move_input();
    }

    pub fn move_input_enabled(&self) -> bool {
        self.state.move_input_enabled()
    }

    /// Registers the square-select handler; a second registration is ignored
    /// with a warning
    pub fn enable_square_select(&mut self, handler: SquareSelectHandler) {
        if !self.state.enable_square_select(handler) {
            warn!(board = %self.id, "square select already enabled, ignoring");
        }
    }

    pub fn disable_square_select(&mut self) {
        self.state.disable_square_select();
    }

    pub fn square_select_enabled(&self) -> bool {
        self.state.square_select_enabled()
    }

    /// Delivers a pointer-derived move-input event from the rendering layer
    pub fn dispatch_move_input(&mut self, event: MoveInputEvent) -> bool {
        self.state.dispatch_move_input(&event)
    }

    /// Delivers a pointer-derived square selection from the rendering layer
    pub fn dispatch_square_select(&mut self, event: SquareSelectEvent) {
        self.state.dispatch_square_select(&event)
    }

    // Extensions -------------------------------------------------------------

    /// Registers a hook for an extension point; hooks run synchronously in
    /// registration order and receive a state snapshot
    pub fn register_extension<F>(&mut self, point: ExtensionPoint, hook: F)
    where
        F: FnMut(&ExtensionContext) + Send + 'static,
    {
        self.state.register_extension(point, hook);
    }

    // Lifecycle --------------------------------------------------------------

    /// Fires the `Destroy` extension point and tears down the queue
    ///
    /// Every outstanding completion handle resolves without playing. Dropping
    /// the board without calling `destroy` tears the queue down too, but
    /// skips the extension point.
    pub fn destroy(mut self) {
        self.state
            .invoke_extension_points(ExtensionPoint::Destroy, &self.id);
        self.queue.destroy();
        debug!(board = %self.id, "chessboard destroyed");
    }
}
