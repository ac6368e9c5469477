//! Card rendering.
//!
//! [`CardRenderer`] turns a [`CardSnapshot`] and the bounds to draw into a
//! [`DisplayList`]. Nothing is cached between calls: every draw recomputes
//! the layout from the bounds it is given.

use alloc::string::ToString;

use log::{debug, trace};

use crate::corner::{self, CornerLabel, CornerLabels, Rotation};
use crate::error::RenderError;
use crate::fit::FontFitter;
use crate::geometry::Rect;
use crate::metrics::TextMeasurer;
use crate::options::{CardOptions, CornerMetrics};
use crate::pips;
use crate::view::CardSnapshot;

pub mod assets;
pub mod display_list;

pub use assets::{AssetCatalog, AssetResolver, BACK_KEY, ImageId, NoAssets};
pub use display_list::{DisplayItem, DisplayList, TextRole};

/// Builds display lists for a card face or back.
///
/// ```
/// use cardface::{CardOptions, CardRenderer, CardView, NoAssets, ProportionalMetrics, Rect};
///
/// let options = CardOptions::default();
/// let renderer = CardRenderer::new(&options, ProportionalMetrics::default(), NoAssets);
/// let list = renderer
///     .render(&CardView::default().snapshot(), Rect::new(0.0, 0.0, 300.0, 400.0))
///     .unwrap();
/// assert!(!list.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct CardRenderer<'a, M, A> {
    options: &'a CardOptions,
    measurer: M,
    assets: A,
}

impl<'a, M: TextMeasurer, A: AssetResolver> CardRenderer<'a, M, A> {
    /// Creates a renderer.
    #[must_use]
    pub const fn new(options: &'a CardOptions, measurer: M, assets: A) -> Self {
        Self {
            options,
            measurer,
            assets,
        }
    }

    /// Returns the options the renderer lays out with.
    #[must_use]
    pub const fn options(&self) -> &CardOptions {
        self.options
    }

    /// Renders `card` inside `bounds`.
    ///
    /// Bounds without area produce an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Fit`] when the pip glyph cannot be sized, which
    /// only happens with a measurer that reports zero height for it.
    pub fn render(&self, card: &CardSnapshot, bounds: Rect) -> Result<DisplayList, RenderError> {
        let mut list = DisplayList::new();
        if bounds.is_empty() {
            return Ok(list);
        }

        let metrics = self.options.corner_metrics(&bounds);
        trace!(
            "corner metrics for {}x{}: radius={} offset={} font={}",
            bounds.size.width, bounds.size.height, metrics.radius, metrics.offset, metrics.font_size
        );

        list.push(DisplayItem::ClipRoundedRect {
            rect: bounds,
            radius: metrics.radius,
        });
        list.push(DisplayItem::FillRoundedRect {
            rect: bounds,
            radius: metrics.radius,
            color: self.options.background,
        });

        if card.is_face_up {
            self.draw_face(card, &bounds, &metrics, &mut list)?;
        } else {
            self.draw_back(&bounds, &mut list);
        }

        Ok(list)
    }

    fn draw_face(
        &self,
        card: &CardSnapshot,
        bounds: &Rect,
        metrics: &CornerMetrics,
        list: &mut DisplayList,
    ) -> Result<(), RenderError> {
        let labels = corner::place_corner_labels(
            bounds,
            metrics,
            corner::corner_text(card.rank, card.suit),
            card.is_face_up,
            &self.measurer,
        );

        let key = assets::face_key(card.rank, card.suit);
        if let Some(image) = self.assets.resolve(&key) {
            list.push(DisplayItem::Image {
                rect: bounds.zoom(card.zoom_factor),
                image,
            });
        } else {
            debug!("no artwork for {key}, drawing pips");
            self.draw_pips(card, bounds, metrics, &labels, list)?;
        }

        push_label(list, &labels, &labels.upper_left);
        push_label(list, &labels, &labels.lower_right);
        Ok(())
    }

    fn draw_pips(
        &self,
        card: &CardSnapshot,
        bounds: &Rect,
        metrics: &CornerMetrics,
        labels: &CornerLabels,
        list: &mut DisplayList,
    ) -> Result<(), RenderError> {
        let rows = pips::rows_for(usize::from(card.rank.order()));
        if rows.is_empty() {
            return Ok(());
        }

        let mut pip_rect = bounds
            .inset_by(metrics.offset, metrics.offset)
            .inset_by(labels.text_size.width, labels.text_size.height / 2.0);
        if pip_rect.is_empty() {
            debug!("no room for pips inside {}x{}", bounds.size.width, bounds.size.height);
            return Ok(());
        }

        let fitter = FontFitter::new(
            &self.measurer,
            pips::max_vertical_count(),
            usize::from(pips::max_horizontal_count()),
        )?;
        let glyph = card.suit.glyph();
        let pip = fitter.fit(glyph, pip_rect.size)?;
        trace!("pip font size {} for {}", pip.font_size, card.card());

        #[expect(clippy::cast_precision_loss, reason = "at most five rows")]
        let row_spacing = pip_rect.size.height / rows.len() as f64;
        pip_rect.size.height = pip.size.height;
        pip_rect.origin.y += (row_spacing - pip_rect.size.height) / 2.0;

        for &count in rows {
            match count {
                1 => push_pip(list, glyph, pip.font_size, pip_rect),
                2 => {
                    push_pip(list, glyph, pip.font_size, pip_rect.left_half());
                    push_pip(list, glyph, pip.font_size, pip_rect.right_half());
                }
                _ => {}
            }
            pip_rect.origin.y += row_spacing;
        }
        Ok(())
    }

    fn draw_back(&self, bounds: &Rect, list: &mut DisplayList) {
        match self.assets.resolve(BACK_KEY) {
            Some(image) => list.push(DisplayItem::Image {
                rect: *bounds,
                image,
            }),
            None => debug!("no card back artwork, leaving the back blank"),
        }
    }
}

fn push_pip(list: &mut DisplayList, glyph: &str, font_size: f64, rect: Rect) {
    list.push(DisplayItem::Text {
        text: glyph.to_string(),
        font_size,
        rect,
        rotation: Rotation::Upright,
        role: TextRole::Pip,
    });
}

fn push_label(list: &mut DisplayList, labels: &CornerLabels, label: &CornerLabel) {
    if label.visible {
        list.push(DisplayItem::Text {
            text: labels.text.clone(),
            font_size: labels.font_size,
            rect: label.frame,
            rotation: label.rotation,
            role: TextRole::CornerLabel,
        });
    }
}
