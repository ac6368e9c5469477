//! Corner label placement.

use alloc::string::String;

use crate::card::{Rank, Suit};
use crate::geometry::{Point, Rect, Size};
use crate::metrics::TextMeasurer;
use crate::options::{CardOptions, CornerMetrics};

/// Rotation applied to drawn text about the center of its frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Rotation {
    /// Drawn as laid out.
    #[default]
    Upright,
    /// Rotated 180° so it reads upright from the opposite side.
    HalfTurn,
}

/// A positioned corner label.
#[derive(Debug, Clone, PartialEq)]
pub struct CornerLabel {
    /// Frame of the label, before rotation.
    pub frame: Rect,
    /// Rotation about the frame center.
    pub rotation: Rotation,
    /// Whether the label is drawn.
    pub visible: bool,
}

impl CornerLabel {
    /// Returns the area the label covers once rotated.
    ///
    /// A half turn about the frame center maps the frame onto itself.
    #[must_use]
    pub const fn visual_bounds(&self) -> Rect {
        self.frame
    }
}

/// Both corner labels of a card.
#[derive(Debug, Clone, PartialEq)]
pub struct CornerLabels {
    /// Text shown in both corners, rank above suit.
    pub text: String,
    /// Font size of the label text.
    pub font_size: f64,
    /// Extent of the text before it is rounded up to the label frame.
    pub text_size: Size,
    /// Label in the upper-left corner.
    pub upper_left: CornerLabel,
    /// Label in the lower-right corner, turned upside down.
    pub lower_right: CornerLabel,
}

/// Returns the two-line corner text for a rank and suit.
///
/// # Example
///
/// ```
/// use cardface::{Rank, Suit, corner::corner_text};
///
/// assert_eq!(corner_text(Rank::Ace, Suit::Spades), "A\n♠️");
/// ```
#[must_use]
pub fn corner_text(rank: Rank, suit: Suit) -> String {
    alloc::format!("{rank}\n{suit}")
}

/// Places the corner labels for a card drawn in `bounds`.
///
/// The upper-left label sits `offset` in from the top-left corner. The
/// lower-right label has the same size, is turned a half turn, and has its
/// bottom-right corner `offset` in from the bottom-right corner of `bounds`.
/// Both are hidden when the card is face down.
#[must_use]
pub fn place_corner_labels<M: TextMeasurer>(
    bounds: &Rect,
    metrics: &CornerMetrics,
    text: String,
    is_face_up: bool,
    measurer: &M,
) -> CornerLabels {
    let text_size = measurer.measure(&text, metrics.font_size);
    let label_size = text_size.ceil();

    let upper_left = CornerLabel {
        frame: Rect::from_origin_size(
            bounds.origin.offset_by(metrics.offset, metrics.offset),
            label_size,
        ),
        rotation: Rotation::Upright,
        visible: is_face_up,
    };

    let lower_right_origin = Point::new(bounds.max_x(), bounds.max_y())
        .offset_by(-metrics.offset, -metrics.offset)
        .offset_by(-label_size.width, -label_size.height);
    let lower_right = CornerLabel {
        frame: Rect::from_origin_size(lower_right_origin, label_size),
        rotation: Rotation::HalfTurn,
        visible: is_face_up,
    };

    CornerLabels {
        text,
        font_size: metrics.font_size,
        text_size,
        upper_left,
        lower_right,
    }
}

/// Convenience wrapper deriving the corner metrics from `options`.
#[must_use]
pub fn place_for_card<M: TextMeasurer>(
    bounds: &Rect,
    options: &CardOptions,
    rank: Rank,
    suit: Suit,
    is_face_up: bool,
    measurer: &M,
) -> CornerLabels {
    let metrics = options.corner_metrics(bounds);
    place_corner_labels(bounds, &metrics, corner_text(rank, suit), is_face_up, measurer)
}
