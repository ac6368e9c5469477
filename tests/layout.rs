//! Font fitting and corner label placement tests.

use cardface::corner::{corner_text, place_corner_labels, place_for_card};
use cardface::pips::{max_horizontal_count, max_vertical_count};
use cardface::{
    CardOptions, FitError, FontFitter, ProportionalMetrics, Rank, Rect, Rotation, Size, Suit,
};
use proptest::prelude::*;

const TOLERANCE: f64 = 1e-9;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < TOLERANCE
}

#[test]
fn corner_metrics_scale_with_height() {
    let metrics = CardOptions::default().corner_metrics(&Rect::new(0.0, 0.0, 300.0, 400.0));
    assert!(close(metrics.radius, 24.0));
    assert!(close(metrics.offset, 7.92));
    assert!(close(metrics.font_size, 34.0));
}

#[test]
fn lower_right_far_corner_is_offset_from_bounds() {
    let bounds = Rect::new(0.0, 0.0, 300.0, 400.0);
    let labels = place_for_card(
        &bounds,
        &CardOptions::default(),
        Rank::face("Q").unwrap(),
        Suit::Hearts,
        true,
        &ProportionalMetrics::default(),
    );

    assert!(close(labels.lower_right.frame.max_x(), 292.08));
    assert!(close(labels.lower_right.frame.max_y(), 392.08));
    assert_eq!(labels.lower_right.rotation, Rotation::HalfTurn);

    assert!(close(labels.upper_left.frame.min_x(), 7.92));
    assert!(close(labels.upper_left.frame.min_y(), 7.92));
    assert_eq!(labels.upper_left.rotation, Rotation::Upright);
    assert_eq!(labels.text, "Q\n♥️");
}

#[test]
fn labels_follow_bounds_origin() {
    let bounds = Rect::new(50.0, 20.0, 300.0, 400.0);
    let metrics = CardOptions::default().corner_metrics(&bounds);
    let labels = place_corner_labels(
        &bounds,
        &metrics,
        corner_text(Rank::Ace, Suit::Clubs),
        true,
        &ProportionalMetrics::default(),
    );
    assert!(close(labels.upper_left.frame.min_x(), 57.92));
    assert!(close(labels.upper_left.frame.min_y(), 27.92));
    assert!(close(labels.lower_right.frame.max_x(), 342.08));
    assert!(close(labels.lower_right.frame.max_y(), 412.08));
}

#[test]
fn fitter_rejects_zero_grid() {
    let metrics = ProportionalMetrics::default();
    assert_eq!(FontFitter::new(metrics, 0, 1).unwrap_err(), FitError::ZeroRows);
    assert_eq!(FontFitter::new(metrics, 1, 0).unwrap_err(), FitError::ZeroColumns);
}

#[test]
fn pip_glyph_size_does_not_depend_on_rank() {
    let fitter = FontFitter::new(
        ProportionalMetrics::default(),
        max_vertical_count(),
        usize::from(max_horizontal_count()),
    )
    .unwrap();
    let area = Size::new(180.0, 300.0);
    let spades = fitter.fit(Suit::Spades.glyph(), area).unwrap();
    let hearts = fitter.fit(Suit::Hearts.glyph(), area).unwrap();
    assert!(close(spades.font_size, hearts.font_size));
}

fn sample_text() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["♠️", "♥️", "♣️", "♦️", "A", "10", "Q\n♥️", "10\n♣️"])
}

proptest! {
    #[test]
    fn fitted_text_fits_one_cell(
        text in sample_text(),
        width in 1.0_f64..2000.0,
        height in 1.0_f64..2000.0,
        rows in 1_usize..8,
        columns in 1_usize..4,
    ) {
        let fitter = FontFitter::new(ProportionalMetrics::default(), rows, columns).unwrap();
        let area = Size::new(width, height);
        let fitted = fitter.fit(text, area).unwrap();

        let row_spacing = fitter.row_spacing(area);
        let column_budget = fitter.column_budget(area);
        prop_assert!(fitted.font_size > 0.0);
        prop_assert!(fitted.size.height <= row_spacing * (1.0 + TOLERANCE));
        prop_assert!(fitted.size.width <= column_budget * (1.0 + TOLERANCE));
    }

    #[test]
    fn lower_right_label_stays_inside_inset_bounds(
        x in -500.0_f64..500.0,
        y in -500.0_f64..500.0,
        height in 100.0_f64..1500.0,
        aspect in 0.5_f64..1.5,
        order in 1_u8..=13,
        suit in prop::sample::select(Suit::ALL.to_vec()),
    ) {
        let bounds = Rect::new(x, y, height * aspect, height);
        let options = CardOptions::default();
        let metrics = options.corner_metrics(&bounds);
        let labels = place_for_card(
            &bounds,
            &options,
            Rank::from_order(order).unwrap(),
            suit,
            true,
            &ProportionalMetrics::default(),
        );
        let inner = bounds.inset_by(metrics.offset, metrics.offset);
        let tolerance = 1e-6;
        prop_assert!(inner.contains_rect(&labels.lower_right.visual_bounds(), tolerance));
        prop_assert!(inner.contains_rect(&labels.upper_left.visual_bounds(), tolerance));
        prop_assert!((labels.lower_right.frame.max_x() - inner.max_x()).abs() < tolerance);
        prop_assert!((labels.lower_right.frame.max_y() - inner.max_y()).abs() < tolerance);
    }
}
