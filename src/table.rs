//! Controller wiring gestures to the card view and the deck.

use log::debug;

use crate::card::Card;
use crate::deck::{Deck, DrawCard};
use crate::error::{RenderError, ZoomError};
use crate::geometry::Rect;
use crate::metrics::TextMeasurer;
use crate::render::{AssetResolver, CardRenderer, DisplayList};
use crate::sync::{Mutex, with_locked};
use crate::view::{CardSnapshot, CardView};

/// A discrete event delivered by the host's gesture recognizers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// Turn the card over.
    Flip,
    /// Show the next card from the deck.
    Next,
    /// Multiply the artwork zoom by the given factor.
    Pinch(f64),
}

/// Phase of a continuous gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GesturePhase {
    /// Gesture recognized, no movement yet.
    Began,
    /// Gesture moved.
    Changed,
    /// Gesture finished.
    Ended,
    /// Gesture abandoned.
    Cancelled,
}

/// State of a pinch recognizer.
///
/// `scale` accumulates the pinch since it was last reset to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinchGesture {
    /// Current phase.
    pub phase: GesturePhase,
    /// Scale accumulated since the last reset.
    pub scale: f64,
}

impl PinchGesture {
    /// Creates a pinch update.
    #[must_use]
    pub const fn new(phase: GesturePhase, scale: f64) -> Self {
        Self { phase, scale }
    }
}

/// Owns the card view and the deck, and applies gestures to them.
///
/// Methods take `&self`; the view and the deck sit behind locks so that a
/// draw always reads a consistent [`CardSnapshot`].
pub struct CardTable<D = Deck> {
    view: Mutex<CardView>,
    deck: Mutex<D>,
}

impl CardTable<Deck> {
    /// Creates a table with a freshly shuffled deck.
    ///
    /// # Example
    ///
    /// ```
    /// use cardface::{CardTable, GestureEvent};
    ///
    /// let table = CardTable::new(7);
    /// table.handle(GestureEvent::Flip).unwrap();
    /// assert!(!table.snapshot().is_face_up);
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::with_deck(CardView::default(), Deck::new(seed))
    }
}

impl<D: DrawCard> CardTable<D> {
    /// Creates a table from a view and any card source.
    #[must_use]
    pub const fn with_deck(view: CardView, deck: D) -> Self {
        Self {
            view: Mutex::new(view),
            deck: Mutex::new(deck),
        }
    }

    /// Applies a gesture event.
    ///
    /// # Errors
    ///
    /// Returns [`ZoomError::InvalidScale`] for a pinch factor that is not a
    /// positive finite number.
    pub fn handle(&self, event: GestureEvent) -> Result<(), ZoomError> {
        match event {
            GestureEvent::Flip => {
                self.flip();
            }
            GestureEvent::Next => {
                self.next_card();
            }
            GestureEvent::Pinch(factor) => {
                self.scale_zoom(factor)?;
            }
        }
        Ok(())
    }

    /// Turns the card over and returns whether it is now face up.
    pub fn flip(&self) -> bool {
        let face_up = with_locked(&self.view, CardView::flip);
        debug!("flipped card, face up: {face_up}");
        face_up
    }

    /// Shows the next card from the deck.
    ///
    /// Only a face-up card is replaced. Returns the card shown, or `None`
    /// when the card is face down or the deck is exhausted.
    #[expect(
        clippy::significant_drop_tightening,
        reason = "the view stays locked while the deck is drawn from"
    )]
    pub fn next_card(&self) -> Option<Card> {
        let mut view = self.view.lock();
        if !view.is_face_up() {
            debug!("ignoring next card while face down");
            return None;
        }
        let Some(card) = self.deck.lock().draw() else {
            debug!("deck exhausted");
            return None;
        };
        view.show(card);
        debug!("showing {card}");
        Some(card)
    }

    /// Multiplies the artwork zoom by `factor` and returns the new zoom.
    ///
    /// # Errors
    ///
    /// Returns [`ZoomError::InvalidScale`] for a factor that is not a
    /// positive finite number.
    pub fn scale_zoom(&self, factor: f64) -> Result<f64, ZoomError> {
        let zoom = with_locked(&self.view, |view| view.scale_zoom(factor))?;
        debug!("zoom factor now {zoom}");
        Ok(zoom)
    }

    /// Applies a pinch recognizer update.
    ///
    /// While the pinch is changing or has just ended, its accumulated scale
    /// is applied to the zoom and then reset to 1, so consecutive updates
    /// compose by multiplication. Other phases are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ZoomError::InvalidScale`] for a scale that is not a positive
    /// finite number; the gesture is left untouched.
    pub fn pinch(&self, gesture: &mut PinchGesture) -> Result<(), ZoomError> {
        match gesture.phase {
            GesturePhase::Changed | GesturePhase::Ended => {
                self.scale_zoom(gesture.scale)?;
                gesture.scale = 1.0;
            }
            GesturePhase::Began | GesturePhase::Cancelled => {}
        }
        Ok(())
    }

    /// Returns the state the next draw will read.
    pub fn snapshot(&self) -> CardSnapshot {
        self.view.lock().snapshot()
    }

    /// Returns whether a redraw was requested, and clears the request.
    pub fn take_needs_display(&self) -> bool {
        with_locked(&self.view, CardView::take_needs_display)
    }

    /// Renders the current card inside `bounds`.
    ///
    /// # Errors
    ///
    /// Propagates [`RenderError`] from the renderer.
    pub fn render<M: TextMeasurer, A: AssetResolver>(
        &self,
        renderer: &CardRenderer<'_, M, A>,
        bounds: Rect,
    ) -> Result<DisplayList, RenderError> {
        renderer.render(&self.snapshot(), bounds)
    }
}
