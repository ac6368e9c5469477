//! Artwork lookup.

use alloc::string::String;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::card::{Rank, Suit};

/// Key of the card back artwork.
pub const BACK_KEY: &str = "back";

/// Opaque handle to artwork owned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageId(pub u32);

/// Resolves artwork keys to images.
///
/// Keys are `"<rank><suit glyph>"` for faces (for example `"Q♥️"`) and
/// [`BACK_KEY`] for the card back. A miss is not an error: the renderer
/// falls back to drawing pips.
pub trait AssetResolver {
    /// Returns the image for `key`, if the host has one.
    fn resolve(&self, key: &str) -> Option<ImageId>;
}

impl<A: AssetResolver + ?Sized> AssetResolver for &A {
    fn resolve(&self, key: &str) -> Option<ImageId> {
        (**self).resolve(key)
    }
}

/// Returns the artwork key for a card face.
#[must_use]
pub fn face_key(rank: Rank, suit: Suit) -> String {
    alloc::format!("{rank}{suit}")
}

/// Resolver without any artwork.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAssets;

impl AssetResolver for NoAssets {
    fn resolve(&self, _key: &str) -> Option<ImageId> {
        None
    }
}

/// Map-backed resolver.
///
/// ```
/// use cardface::{AssetCatalog, AssetResolver, ImageId, Rank, Suit};
///
/// let mut catalog = AssetCatalog::new();
/// catalog.insert_face(Rank::face("K").unwrap(), Suit::Spades, ImageId(3));
/// assert_eq!(catalog.resolve("K♠️"), Some(ImageId(3)));
/// assert_eq!(catalog.resolve("back"), None);
/// ```
#[derive(Debug, Clone, Default)]
pub struct AssetCatalog {
    images: HashMap<String, ImageId>,
}

impl AssetCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers artwork under an arbitrary key.
    pub fn insert(&mut self, key: impl Into<String>, image: ImageId) {
        self.images.insert(key.into(), image);
    }

    /// Registers face artwork for a rank and suit.
    pub fn insert_face(&mut self, rank: Rank, suit: Suit, image: ImageId) {
        self.insert(face_key(rank, suit), image);
    }

    /// Registers the card back artwork.
    pub fn insert_back(&mut self, image: ImageId) {
        self.insert(BACK_KEY, image);
    }

    /// Number of registered images.
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns whether the catalog holds no artwork.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl AssetResolver for AssetCatalog {
    fn resolve(&self, key: &str) -> Option<ImageId> {
        self.images.get(key).copied()
    }
}
