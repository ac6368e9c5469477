//! Text measurement.
//!
//! Layout never guesses text extents. Everything goes through a
//! [`TextMeasurer`], normally backed by the host's font engine.

use crate::geometry::Size;

/// Measures centered, newline-separated text at a given font size.
pub trait TextMeasurer {
    /// Returns the bounding box of `text` rendered at `font_size`.
    ///
    /// Empty text measures to [`Size::ZERO`].
    fn measure(&self, text: &str, font_size: f64) -> Size;
}

impl<M: TextMeasurer + ?Sized> TextMeasurer for &M {
    fn measure(&self, text: &str, font_size: f64) -> Size {
        (**self).measure(text, font_size)
    }
}

/// Deterministic measurer with fixed per-character advances.
///
/// ASCII characters advance by `ascii_advance × font_size`, other visible
/// characters (the suit symbols) by `symbol_advance × font_size`, and
/// variation selectors and joiners take no space. Each line is
/// `line_height × font_size` tall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProportionalMetrics {
    /// Advance of an ASCII character, relative to the font size.
    pub ascii_advance: f64,
    /// Advance of a non-ASCII character, relative to the font size.
    pub symbol_advance: f64,
    /// Line height, relative to the font size.
    pub line_height: f64,
}

impl Default for ProportionalMetrics {
    fn default() -> Self {
        Self {
            ascii_advance: 0.6,
            symbol_advance: 1.25,
            line_height: 1.2,
        }
    }
}

impl ProportionalMetrics {
    fn advance(&self, ch: char) -> f64 {
        match ch {
            '\u{FE00}'..='\u{FE0F}' | '\u{200D}' => 0.0,
            c if c.is_ascii() => self.ascii_advance,
            _ => self.symbol_advance,
        }
    }
}

impl TextMeasurer for ProportionalMetrics {
    fn measure(&self, text: &str, font_size: f64) -> Size {
        let mut lines = 0_u32;
        let mut widest: f64 = 0.0;
        for line in text.lines() {
            lines += 1;
            let width: f64 = line.chars().map(|ch| self.advance(ch)).sum();
            widest = widest.max(width);
        }
        Size::new(
            widest * font_size,
            f64::from(lines) * self.line_height * font_size,
        )
    }
}
