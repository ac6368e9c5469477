//! Presentation state of a card view.

use crate::card::{Card, FaceKind, Rank, Suit};
use crate::error::{CardError, ZoomError};
use crate::options::CardOptions;

/// Everything a single draw reads, captured at once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardSnapshot {
    /// Rank shown.
    pub rank: Rank,
    /// Suit shown.
    pub suit: Suit,
    /// Whether the face is shown.
    pub is_face_up: bool,
    /// Zoom applied to face artwork.
    pub zoom_factor: f64,
}

impl CardSnapshot {
    /// Returns the card shown.
    #[must_use]
    pub const fn card(&self) -> Card {
        Card::new(self.suit, self.rank)
    }
}

const fn validate_zoom(zoom: f64) -> Result<f64, ZoomError> {
    if zoom.is_finite() && zoom > 0.0 {
        Ok(zoom)
    } else {
        Err(ZoomError::InvalidScale)
    }
}

/// Mutable presentation state: the card shown, its side, and the artwork zoom.
///
/// Every change raises the redraw flag, which the host clears through
/// [`CardView::take_needs_display`] when it repaints.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    rank: Rank,
    suit: Suit,
    is_face_up: bool,
    zoom_factor: f64,
    needs_display: bool,
}

impl Default for CardView {
    fn default() -> Self {
        Self {
            rank: Rank::Face(FaceKind::Queen),
            suit: Suit::Hearts,
            is_face_up: true,
            zoom_factor: 0.75,
            needs_display: true,
        }
    }
}

impl CardView {
    /// Creates a view with the default card and the zoom from `options`.
    ///
    /// # Errors
    ///
    /// Returns [`ZoomError::InvalidScale`] when the default zoom is not a
    /// positive finite number.
    pub fn with_options(options: &CardOptions) -> Result<Self, ZoomError> {
        Ok(Self {
            zoom_factor: validate_zoom(options.default_zoom)?,
            ..Self::default()
        })
    }

    /// Returns the rank shown.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the suit shown.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns whether the face is shown.
    #[must_use]
    pub const fn is_face_up(&self) -> bool {
        self.is_face_up
    }

    /// Returns the artwork zoom.
    #[must_use]
    pub const fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    /// Sets the rank shown.
    pub const fn set_rank(&mut self, rank: Rank) {
        self.rank = rank;
        self.needs_display = true;
    }

    /// Sets the rank shown from its order.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidOrder`] when `order` is outside `1..=13`;
    /// the view is left unchanged.
    pub fn set_rank_order(&mut self, order: u8) -> Result<(), CardError> {
        self.set_rank(Rank::from_order(order)?);
        Ok(())
    }

    /// Sets the suit shown.
    pub const fn set_suit(&mut self, suit: Suit) {
        self.suit = suit;
        self.needs_display = true;
    }

    /// Sets the suit shown from its glyph.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::UnknownSuit`] for an unrecognized glyph; the view
    /// is left unchanged.
    pub fn set_suit_glyph(&mut self, glyph: &str) -> Result<(), CardError> {
        self.set_suit(Suit::from_glyph(glyph)?);
        Ok(())
    }

    /// Shows `card`.
    pub const fn show(&mut self, card: Card) {
        self.set_rank(card.rank);
        self.set_suit(card.suit);
    }

    /// Sets which side is shown.
    pub const fn set_face_up(&mut self, is_face_up: bool) {
        self.is_face_up = is_face_up;
        self.needs_display = true;
    }

    /// Turns the card over and returns the new side.
    pub const fn flip(&mut self) -> bool {
        self.set_face_up(!self.is_face_up);
        self.is_face_up
    }

    /// Sets the artwork zoom.
    ///
    /// # Errors
    ///
    /// Returns [`ZoomError::InvalidScale`] when `zoom` is not a positive
    /// finite number.
    pub fn set_zoom_factor(&mut self, zoom: f64) -> Result<(), ZoomError> {
        self.zoom_factor = validate_zoom(zoom)?;
        self.needs_display = true;
        Ok(())
    }

    /// Multiplies the artwork zoom by `multiplier` and returns the new zoom.
    ///
    /// # Errors
    ///
    /// Returns [`ZoomError::InvalidScale`] when `multiplier` or the result is
    /// not a positive finite number.
    pub fn scale_zoom(&mut self, multiplier: f64) -> Result<f64, ZoomError> {
        validate_zoom(multiplier)?;
        self.set_zoom_factor(self.zoom_factor * multiplier)?;
        Ok(self.zoom_factor)
    }

    /// Returns whether a redraw was requested since the last call, and clears
    /// the request.
    pub const fn take_needs_display(&mut self) -> bool {
        let needed = self.needs_display;
        self.needs_display = false;
        needed
    }

    /// Captures the state a draw reads.
    #[must_use]
    pub const fn snapshot(&self) -> CardSnapshot {
        CardSnapshot {
            rank: self.rank,
            suit: self.suit,
            is_face_up: self.is_face_up,
            zoom_factor: self.zoom_factor,
        }
    }
}
