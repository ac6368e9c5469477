//! Font fitting for pip glyphs.

use crate::error::FitError;
use crate::geometry::Size;
use crate::metrics::TextMeasurer;

/// Text sized to fit a cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FittedText {
    /// Chosen font size.
    pub font_size: f64,
    /// Text extent measured at `font_size`.
    pub size: Size,
}

impl FittedText {
    /// Result for empty text.
    pub const EMPTY: Self = Self {
        font_size: 0.0,
        size: Size::ZERO,
    };
}

/// Sizes text so that it fits one cell of a grid.
///
/// The grid divides an area into `max_rows` rows and `max_columns` columns.
/// Callers pass the maxima across the whole pip table so that the glyph size
/// does not change with the rank.
#[derive(Debug, Clone, Copy)]
pub struct FontFitter<M> {
    measurer: M,
    max_rows: usize,
    max_columns: usize,
}

impl<M: TextMeasurer> FontFitter<M> {
    /// Creates a fitter for a grid of `max_rows` by `max_columns` cells.
    ///
    /// # Errors
    ///
    /// Returns [`FitError::ZeroRows`] or [`FitError::ZeroColumns`] when either
    /// count is zero.
    pub fn new(measurer: M, max_rows: usize, max_columns: usize) -> Result<Self, FitError> {
        if max_rows == 0 {
            return Err(FitError::ZeroRows);
        }
        if max_columns == 0 {
            return Err(FitError::ZeroColumns);
        }
        Ok(Self {
            measurer,
            max_rows,
            max_columns,
        })
    }

    /// Height of one grid row inside `area`.
    #[must_use]
    #[expect(clippy::cast_precision_loss, reason = "grid counts are tiny")]
    pub fn row_spacing(&self, area: Size) -> f64 {
        area.height / self.max_rows as f64
    }

    /// Width of one grid column inside `area`.
    #[must_use]
    #[expect(clippy::cast_precision_loss, reason = "grid counts are tiny")]
    pub fn column_budget(&self, area: Size) -> f64 {
        area.width / self.max_columns as f64
    }

    /// Picks a font size for `text` that fits one cell of `area`.
    ///
    /// The text is first measured at the row height and rescaled so its
    /// measured height matches the row. If the rescaled text is then wider
    /// than a column it is rescaled once more to the column width. There are
    /// never more than these two corrections.
    ///
    /// # Errors
    ///
    /// Returns [`FitError::EmptyArea`] when `area` has no positive width or
    /// height, and [`FitError::ZeroHeight`] when non-empty text measures to
    /// zero height.
    ///
    /// # Example
    ///
    /// ```
    /// use cardface::{FontFitter, ProportionalMetrics, Size};
    ///
    /// let fitter = FontFitter::new(ProportionalMetrics::default(), 5, 2).unwrap();
    /// let fitted = fitter.fit("♠️", Size::new(200.0, 300.0)).unwrap();
    /// assert!(fitted.size.height <= 60.0 + 1e-9);
    /// assert!(fitted.size.width <= 100.0 + 1e-9);
    /// ```
    pub fn fit(&self, text: &str, area: Size) -> Result<FittedText, FitError> {
        if text.is_empty() {
            return Ok(FittedText::EMPTY);
        }
        if area.is_empty() {
            return Err(FitError::EmptyArea);
        }

        let row_spacing = self.row_spacing(area);
        let attempted = self.measurer.measure(text, row_spacing);
        if attempted.height <= 0.0 {
            return Err(FitError::ZeroHeight);
        }

        let row_fitted_size = row_spacing / (attempted.height / row_spacing);
        let row_fitted = self.measurer.measure(text, row_fitted_size);

        let column_budget = self.column_budget(area);
        if row_fitted.width > column_budget {
            let font_size = row_fitted_size / (row_fitted.width / column_budget);
            Ok(FittedText {
                font_size,
                size: self.measurer.measure(text, font_size),
            })
        } else {
            Ok(FittedText {
                font_size: row_fitted_size,
                size: row_fitted,
            })
        }
    }
}
