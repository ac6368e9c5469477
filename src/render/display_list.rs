//! Draw primitives produced by the renderer.

use alloc::string::String;
use alloc::vec::Vec;

use crate::corner::Rotation;
use crate::geometry::Rect;
use crate::options::Color;
use crate::render::assets::ImageId;

/// What a text run depicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextRole {
    /// Rank and suit shown in a corner.
    CornerLabel,
    /// A single pip of the pip grid.
    Pip,
}

/// A single display list item.
#[derive(Debug, Clone, PartialEq)]
pub enum DisplayItem {
    /// Clip all following items to a rounded rectangle.
    ClipRoundedRect {
        /// Clipped area.
        rect: Rect,
        /// Corner radius.
        radius: f64,
    },
    /// Fill a rounded rectangle.
    FillRoundedRect {
        /// Filled area.
        rect: Rect,
        /// Corner radius.
        radius: f64,
        /// Fill colour.
        color: Color,
    },
    /// Draw an image stretched to `rect`.
    Image {
        /// Target area.
        rect: Rect,
        /// Handle returned by the asset resolver.
        image: ImageId,
    },
    /// Draw horizontally centered text starting at the top of `rect`.
    Text {
        /// Text, lines separated by `\n`.
        text: String,
        /// Font size.
        font_size: f64,
        /// Layout frame.
        rect: Rect,
        /// Rotation about the frame center.
        rotation: Rotation,
        /// What the text depicts.
        role: TextRole,
    },
}

/// Ordered draw primitives for one card.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DisplayList {
    /// Items in paint order.
    pub items: Vec<DisplayItem>,
}

impl DisplayList {
    /// Creates an empty display list.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends an item.
    pub fn push(&mut self, item: DisplayItem) {
        self.items.push(item);
    }

    /// Returns whether nothing is drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the text runs with the given role.
    pub fn texts(&self, role: TextRole) -> impl Iterator<Item = (&str, &Rect)> + '_ {
        self.items.iter().filter_map(move |item| match item {
            DisplayItem::Text {
                text,
                rect,
                role: item_role,
                ..
            } if *item_role == role => Some((text.as_str(), rect)),
            _ => None,
        })
    }

    /// Number of pips drawn.
    #[must_use]
    pub fn pip_count(&self) -> usize {
        self.texts(TextRole::Pip).count()
    }

    /// Returns the images drawn, in paint order.
    pub fn images(&self) -> impl Iterator<Item = (ImageId, &Rect)> + '_ {
        self.items.iter().filter_map(|item| match item {
            DisplayItem::Image { rect, image } => Some((*image, rect)),
            _ => None,
        })
    }
}
