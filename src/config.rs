//! Immutable board configuration
//!
//! Built once through a validated builder, so board instances never share
//! mutable defaults. Styling fields are hints forwarded to the view; the
//! core only reads `position`, `orientation` and `animation_duration`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{BoardError, BoardResult};
use crate::model::position::FEN_EMPTY;
use crate::model::{MarkerType, PieceColor};

/// Border drawn around the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BorderType {
    #[default]
    None,
    Thin,
    Frame,
}

/// Visual styling hints forwarded to the view
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StyleConfig {
    /// Show ranks and files along the edges
    pub show_coordinates: bool,
    pub border: BorderType,
    /// Height/width ratio of the rendered board
    pub aspect_ratio: f32,
    /// Marker drawn on the square a move starts from
    pub move_from_marker: MarkerType,
    /// Marker drawn on the square a move ends on
    pub move_to_marker: MarkerType,
}

impl Default for StyleConfig {
    fn default() -> StyleConfig {
        StyleConfig {
            show_coordinates: true,
            border: BorderType::None,
            aspect_ratio: 1.0,
            move_from_marker: MarkerType::Frame,
            move_to_marker: MarkerType::Frame,
        }
    }
}

/// Immutable configuration for one board instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Initial position as a board-placement FEN
    pub position: String,
    /// Color rendered at the bottom edge
    pub orientation: PieceColor,
    /// Shared duration for all piece animations; zero disables animation
    pub animation_duration: Duration,
    pub style: StyleConfig,
}

impl Default for BoardConfig {
    fn default() -> BoardConfig {
        BoardConfig {
            position: FEN_EMPTY.to_string(),
            orientation: PieceColor::White,
            animation_duration: Duration::from_millis(300),
            style: StyleConfig::default(),
        }
    }
}

impl BoardConfig {
    pub fn builder() -> BoardConfigBuilder {
        BoardConfigBuilder::default()
    }
}

/// Builder for [`BoardConfig`]; `build` validates the result
#[derive(Debug, Default, Clone)]
pub struct BoardConfigBuilder {
    position: Option<String>,
    orientation: Option<PieceColor>,
    animation_duration: Option<Duration>,
    style: Option<StyleConfig>,
}

impl BoardConfigBuilder {
    pub fn position(mut self, fen: impl Into<String>) -> Self {
        self.position = Some(fen.into());
        self
    }

    pub fn orientation(mut self, orientation: PieceColor) -> Self {
        self.orientation = Some(orientation);
        self
    }

    pub fn animation_duration(mut self, duration: Duration) -> Self {
        self.animation_duration = Some(duration);
        self
    }

    pub fn style(mut self, style: StyleConfig) -> Self {
        self.style = Some(style);
        self
    }

    /// Merges the configured fields over the defaults and validates them
    ///
    /// The FEN in `position` is parsed later, at board construction.
    pub fn build(self) -> BoardResult<BoardConfig> {
        let defaults = BoardConfig::default();
        let config = BoardConfig {
            position: self.position.unwrap_or(defaults.position),
            orientation: self.orientation.unwrap_or(defaults.orientation),
            animation_duration: self.animation_duration.unwrap_or(defaults.animation_duration),
            style: self.style.unwrap_or(defaults.style),
        };
        if !config.style.aspect_ratio.is_finite() || config.style.aspect_ratio <= 0.0 {
            return Err(BoardError::Config {
                message: format!(
                    "aspect ratio must be positive and finite, got {}",
                    config.style.aspect_ratio
                ),
            });
        }
        Ok(config)
    }
}
