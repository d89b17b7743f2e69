//! Error types for the board widget
//!
//! Provides custom error types for board construction, FEN parsing and
//! configuration validation. Usage errors (a second orientation flip while
//! one is in flight, duplicate handlers) are not represented here; they are
//! logged at warning level and the redundant operation is ignored.

use thiserror::Error;

/// Errors that can occur while constructing or driving a board
#[derive(Error, Debug)]
pub enum BoardError {
    /// Board could not be wired up (e.g. no async runtime to drive animations)
    #[error("board construction failed: {message}")]
    Construction { message: String },

    /// Malformed FEN text
    #[error("invalid FEN: {0}")]
    InvalidFen(#[from] FenError),

    /// Square name outside a1..h8
    #[error("invalid square name: {name:?}")]
    InvalidSquare { name: String },

    /// Configuration rejected by the builder
    #[error("invalid configuration: {message}")]
    Config { message: String },
}

/// Parse failures for the board-placement FEN field
///
/// Parse errors are surfaced to the caller as-is; malformed input is never
/// silently repaired.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Wrong number of `/`-separated ranks
    #[error("expected 8 ranks, found {found}")]
    RankCount { found: usize },

    /// Character that is neither a piece letter nor an empty-run digit 1-8
    #[error("invalid character {ch:?} in rank {rank}")]
    InvalidCharacter { ch: char, rank: u8 },

    /// Rank that does not describe exactly 8 files
    #[error("rank {rank} describes {width} files, expected 8")]
    RankWidth { rank: u8, width: usize },
}

/// Result type alias for board operations
pub type BoardResult<T> = Result<T, BoardError>;
