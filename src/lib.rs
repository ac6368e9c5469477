//! A playing card face layout and rendering engine with optional `no_std`
//! support.
//!
//! The crate lays out one card inside arbitrary bounds: rounded substrate,
//! rank and suit corner labels, a pip grid for ace through ten, face or back
//! artwork supplied by the host, and a pinch-adjustable zoom for face
//! artwork. [`CardRenderer`] produces a [`DisplayList`] the host paints;
//! [`CardTable`] wires gesture events to a [`CardView`] and a [`Deck`].
//!
//! # Example
//!
//! ```
//! use cardface::{CardOptions, CardRenderer, CardTable, GestureEvent, NoAssets, ProportionalMetrics, Rect};
//!
//! let options = CardOptions::default();
//! let renderer = CardRenderer::new(&options, ProportionalMetrics::default(), NoAssets);
//! let table = CardTable::new(42);
//!
//! table.handle(GestureEvent::Next).unwrap();
//! let list = table.render(&renderer, Rect::new(0.0, 0.0, 250.0, 350.0)).unwrap();
//! assert!(!list.is_empty());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod corner;
pub mod deck;
pub mod error;
pub mod fit;
pub mod geometry;
pub mod metrics;
pub mod options;
pub mod pips;
pub mod render;
mod sync;
pub mod table;
pub mod view;

// Re-export main types
pub use card::{Card, DECK_SIZE, FaceKind, Pips, Rank, Suit};
pub use corner::{CornerLabel, CornerLabels, Rotation};
pub use deck::{Deck, DrawCard};
pub use error::{CardError, FitError, RenderError, ZoomError};
pub use fit::{FittedText, FontFitter};
pub use geometry::{Point, Rect, Size};
pub use metrics::{ProportionalMetrics, TextMeasurer};
pub use options::{CardOptions, Color, CornerMetrics};
pub use render::{
    AssetCatalog, AssetResolver, BACK_KEY, CardRenderer, DisplayItem, DisplayList, ImageId,
    NoAssets, TextRole,
};
pub use table::{CardTable, GestureEvent, GesturePhase, PinchGesture};
pub use view::{CardSnapshot, CardView};
