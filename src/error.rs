//! Error types for card construction and layout.

use thiserror::Error;

/// Errors that can occur when constructing cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Numeric rank outside 2..=10.
    #[error("numeric rank must have 2 to 10 pips, got {0}")]
    InvalidPips(u8),
    /// Face kind other than J, Q or K.
    #[error("face rank must be J, Q or K")]
    InvalidFace,
    /// Rank order outside 1..=13.
    #[error("rank order must be between 1 and 13, got {0}")]
    InvalidOrder(u8),
    /// Rank text that is neither a number nor a face letter.
    #[error("unrecognized rank")]
    InvalidRank,
    /// Glyph that is not one of the four suits.
    #[error("unrecognized suit glyph")]
    UnknownSuit,
}

/// Errors that can occur while fitting text into a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FitError {
    /// Row maximum is zero.
    #[error("row count must be at least 1")]
    ZeroRows,
    /// Column maximum is zero.
    #[error("column count must be at least 1")]
    ZeroColumns,
    /// Target area has no positive width or height.
    #[error("target area is empty")]
    EmptyArea,
    /// Non-empty text measured to zero height.
    #[error("text measured to zero height")]
    ZeroHeight,
}

/// Errors that can occur when changing the zoom factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ZoomError {
    /// Zoom factor or pinch multiplier is not a positive finite number.
    #[error("zoom scale must be positive and finite")]
    InvalidScale,
}

/// Errors that can occur while rendering a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RenderError {
    /// Pip glyph could not be fitted.
    #[error("pip layout failed: {0}")]
    Fit(#[from] FitError),
}
