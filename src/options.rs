//! Card layout options.

use crate::geometry::Rect;

/// An RGBA colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Color {
    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Creates an opaque colour.
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Corner geometry derived from the card bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CornerMetrics {
    /// Radius of the rounded card outline.
    pub radius: f64,
    /// Inset of the corner labels from the card edges.
    pub offset: f64,
    /// Font size of the corner labels.
    pub font_size: f64,
}

/// Proportions used to lay out a card.
///
/// All sizes scale with the height of the bounds the card is drawn in.
///
/// ```
/// use cardface::CardOptions;
///
/// let options = CardOptions::default()
///     .with_corner_font_size_ratio(0.1)
///     .with_default_zoom(1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CardOptions {
    /// Corner label font size relative to the bounds height.
    pub corner_font_size_ratio: f64,
    /// Corner radius relative to the bounds height.
    pub corner_radius_ratio: f64,
    /// Corner label inset relative to the corner radius.
    pub corner_offset_ratio: f64,
    /// Zoom applied to face artwork until the user pinches.
    pub default_zoom: f64,
    /// Fill colour of the card substrate.
    pub background: Color,
}

impl Default for CardOptions {
    fn default() -> Self {
        Self {
            corner_font_size_ratio: 0.085,
            corner_radius_ratio: 0.06,
            corner_offset_ratio: 0.33,
            default_zoom: 0.75,
            background: Color::WHITE,
        }
    }
}

impl CardOptions {
    /// Sets the corner label font size ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use cardface::CardOptions;
    ///
    /// let options = CardOptions::default().with_corner_font_size_ratio(0.1);
    /// assert_eq!(options.corner_font_size_ratio, 0.1);
    /// ```
    #[must_use]
    pub const fn with_corner_font_size_ratio(mut self, ratio: f64) -> Self {
        self.corner_font_size_ratio = ratio;
        self
    }

    /// Sets the corner radius ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use cardface::CardOptions;
    ///
    /// let options = CardOptions::default().with_corner_radius_ratio(0.08);
    /// assert_eq!(options.corner_radius_ratio, 0.08);
    /// ```
    #[must_use]
    pub const fn with_corner_radius_ratio(mut self, ratio: f64) -> Self {
        self.corner_radius_ratio = ratio;
        self
    }

    /// Sets the corner label inset ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use cardface::CardOptions;
    ///
    /// let options = CardOptions::default().with_corner_offset_ratio(0.5);
    /// assert_eq!(options.corner_offset_ratio, 0.5);
    /// ```
    #[must_use]
    pub const fn with_corner_offset_ratio(mut self, ratio: f64) -> Self {
        self.corner_offset_ratio = ratio;
        self
    }

    /// Sets the initial face artwork zoom.
    ///
    /// # Example
    ///
    /// ```
    /// use cardface::CardOptions;
    ///
    /// let options = CardOptions::default().with_default_zoom(1.0);
    /// assert_eq!(options.default_zoom, 1.0);
    /// ```
    #[must_use]
    pub const fn with_default_zoom(mut self, zoom: f64) -> Self {
        self.default_zoom = zoom;
        self
    }

    /// Sets the substrate colour.
    ///
    /// # Example
    ///
    /// ```
    /// use cardface::{CardOptions, Color};
    ///
    /// let ivory = Color::rgb(255, 255, 240);
    /// let options = CardOptions::default().with_background(ivory);
    /// assert_eq!(options.background, ivory);
    /// ```
    #[must_use]
    pub const fn with_background(mut self, color: Color) -> Self {
        self.background = color;
        self
    }

    /// Derives the corner radius, label inset and label font size for `bounds`.
    #[must_use]
    pub fn corner_metrics(&self, bounds: &Rect) -> CornerMetrics {
        let height = bounds.size.height;
        let radius = height * self.corner_radius_ratio;
        CornerMetrics {
            radius,
            offset: radius * self.corner_offset_ratio,
            font_size: height * self.corner_font_size_ratio,
        }
    }
}
