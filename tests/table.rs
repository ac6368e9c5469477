//! Card view and gesture handling tests.

use cardface::{
    Card, CardError, CardOptions, CardRenderer, CardTable, CardView, Deck, GestureEvent,
    GesturePhase, NoAssets, PinchGesture, ProportionalMetrics, Rank, Rect, Suit, TextRole,
    ZoomError,
};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-12
}

fn stacked_table(cards: &[Card]) -> CardTable {
    CardTable::with_deck(CardView::default(), Deck::from_cards(cards))
}

#[test]
fn view_defaults() {
    let view = CardView::default();
    assert_eq!(view.rank().order(), 12);
    assert_eq!(view.suit(), Suit::Hearts);
    assert!(view.is_face_up());
    assert!(close(view.zoom_factor(), 0.75));
}

#[test]
fn view_zoom_comes_from_options() {
    let options = CardOptions::default().with_default_zoom(1.0);
    let view = CardView::with_options(&options).unwrap();
    assert!(close(view.zoom_factor(), 1.0));

    let options = CardOptions::default().with_default_zoom(0.0);
    assert_eq!(CardView::with_options(&options).unwrap_err(), ZoomError::InvalidScale);
}

#[test]
fn every_mutation_requests_a_redraw() {
    let mut view = CardView::default();
    assert!(view.take_needs_display());
    assert!(!view.take_needs_display());

    view.set_suit(Suit::Spades);
    assert!(view.take_needs_display());
    view.set_rank(Rank::Ace);
    assert!(view.take_needs_display());
    view.flip();
    assert!(view.take_needs_display());
    view.set_zoom_factor(2.0).unwrap();
    assert!(view.take_needs_display());
}

#[test]
fn host_values_are_validated() {
    let mut view = CardView::default();
    view.take_needs_display();

    assert_eq!(view.set_rank_order(14), Err(CardError::InvalidOrder(14)));
    assert_eq!(view.set_suit_glyph("?"), Err(CardError::UnknownSuit));
    assert_eq!(view.set_zoom_factor(-1.0), Err(ZoomError::InvalidScale));
    assert_eq!(view.set_zoom_factor(f64::NAN), Err(ZoomError::InvalidScale));
    assert!(!view.take_needs_display());

    view.set_rank_order(3).unwrap();
    view.set_suit_glyph("♦️").unwrap();
    assert_eq!(view.rank(), Rank::numeric(3).unwrap());
    assert_eq!(view.suit(), Suit::Diamonds);
}

#[test]
fn flip_toggles_face_up() {
    let table = CardTable::new(1);
    assert!(table.snapshot().is_face_up);
    table.handle(GestureEvent::Flip).unwrap();
    assert!(!table.snapshot().is_face_up);
    assert!(table.flip());
}

#[test]
fn next_card_updates_a_face_up_card() {
    let card = Card::new(Suit::Clubs, Rank::numeric(8).unwrap());
    let table = stacked_table(&[card]);

    assert_eq!(table.next_card(), Some(card));
    let snapshot = table.snapshot();
    assert_eq!(snapshot.card(), card);
}

#[test]
fn next_card_is_ignored_while_face_down() {
    let card = Card::new(Suit::Clubs, Rank::numeric(8).unwrap());
    let table = stacked_table(&[card]);

    table.handle(GestureEvent::Flip).unwrap();
    table.handle(GestureEvent::Next).unwrap();
    assert_eq!(table.snapshot().rank.order(), 12);

    table.handle(GestureEvent::Flip).unwrap();
    assert_eq!(table.next_card(), Some(card));
}

#[test]
fn exhausted_deck_keeps_the_current_card() {
    let card = Card::new(Suit::Spades, Rank::Ace);
    let table = stacked_table(&[card]);
    table.next_card();
    table.take_needs_display();

    assert_eq!(table.next_card(), None);
    assert_eq!(table.snapshot().card(), card);
    assert!(!table.take_needs_display());
}

#[test]
fn pinch_deltas_compose_by_multiplication() {
    let table = CardTable::new(1);
    let before = table.snapshot().zoom_factor;

    table.handle(GestureEvent::Pinch(1.2)).unwrap();
    table.handle(GestureEvent::Pinch(1.5)).unwrap();

    assert!(close(table.snapshot().zoom_factor, before * 1.8));
}

#[test]
fn pinch_gesture_resets_its_scale() {
    let table = CardTable::new(1);
    let before = table.snapshot().zoom_factor;

    let mut gesture = PinchGesture::new(GesturePhase::Began, 3.0);
    table.pinch(&mut gesture).unwrap();
    assert!(close(table.snapshot().zoom_factor, before));
    assert!(close(gesture.scale, 3.0));

    gesture = PinchGesture::new(GesturePhase::Changed, 1.2);
    table.pinch(&mut gesture).unwrap();
    assert!(close(gesture.scale, 1.0));

    gesture.scale *= 1.5;
    gesture.phase = GesturePhase::Ended;
    table.pinch(&mut gesture).unwrap();
    assert!(close(gesture.scale, 1.0));
    assert!(close(table.snapshot().zoom_factor, before * 1.8));

    let mut cancelled = PinchGesture::new(GesturePhase::Cancelled, 4.0);
    table.pinch(&mut cancelled).unwrap();
    assert!(close(table.snapshot().zoom_factor, before * 1.8));
}

#[test]
fn invalid_pinch_leaves_zoom_alone() {
    let table = CardTable::new(1);
    let before = table.snapshot().zoom_factor;

    assert_eq!(table.handle(GestureEvent::Pinch(0.0)), Err(ZoomError::InvalidScale));
    assert_eq!(table.scale_zoom(f64::INFINITY), Err(ZoomError::InvalidScale));

    let mut gesture = PinchGesture::new(GesturePhase::Changed, -2.0);
    assert_eq!(table.pinch(&mut gesture), Err(ZoomError::InvalidScale));
    assert!(close(gesture.scale, -2.0));
    assert!(close(table.snapshot().zoom_factor, before));
}

#[test]
fn table_renders_its_current_card() {
    let options = CardOptions::default();
    let renderer = CardRenderer::new(&options, ProportionalMetrics::default(), NoAssets);
    let card = Card::new(Suit::Hearts, Rank::numeric(6).unwrap());
    let table = stacked_table(&[card]);
    table.next_card();

    let bounds = Rect::new(0.0, 0.0, 250.0, 350.0);
    let list = table.render(&renderer, bounds).unwrap();
    assert_eq!(list.pip_count(), 6);

    table.flip();
    let list = table.render(&renderer, bounds).unwrap();
    assert_eq!(list.pip_count(), 0);
    assert_eq!(list.texts(TextRole::CornerLabel).count(), 0);
}
