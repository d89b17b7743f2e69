//! Headless chessboard widget core
//!
//! Owns the position model, markers and input state, and serializes visual
//! transitions through an ordered animation queue that drives a pluggable
//! [`view::BoardView`]. Rendering itself lives entirely on the view side.

pub mod animation;
pub mod board;
pub mod config;
pub mod error;
pub mod ident;
pub mod input;
pub mod model;
pub mod view;

pub use animation::{AnimationQueue, Completion, PieceOp, PositionDiff};
pub use board::Chessboard;
pub use config::{BoardConfig, BoardConfigBuilder, BorderType, StyleConfig};
pub use error::{BoardError, BoardResult, FenError};
pub use ident::{IdGenerator, RandomIdGenerator};
pub use input::{
    MoveInputEvent, MoveInputHandler, SquareSelectEvent, SquareSelectHandler, SquareSelectType,
};
pub use model::extension::{ExtensionContext, ExtensionPoint};
pub use model::{
    BoardState, Marker, MarkerType, Piece, PieceColor, PieceType, Position, Square, FEN_EMPTY,
    FEN_START,
};
pub use view::{BoardView, NullView};
