//! Card model and deck tests.

use std::collections::HashSet;

use cardface::{Card, CardError, DECK_SIZE, Deck, DrawCard, FaceKind, Rank, Suit};

#[test]
fn rank_orders_cover_one_through_thirteen_in_order() {
    let orders: Vec<u8> = Rank::ALL.iter().map(|rank| rank.order()).collect();
    assert_eq!(orders, (1..=13).collect::<Vec<u8>>());

    for rank in Rank::ALL {
        assert_eq!(Rank::from_order(rank.order()), Ok(rank));
    }
}

#[test]
fn rank_display_strings() {
    let shown: Vec<String> = Rank::ALL.iter().map(ToString::to_string).collect();
    assert_eq!(
        shown,
        ["A", "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K"]
    );
}

#[test]
fn invalid_ranks_are_rejected() {
    assert_eq!(Rank::numeric(1), Err(CardError::InvalidPips(1)));
    assert_eq!(Rank::numeric(11), Err(CardError::InvalidPips(11)));
    assert_eq!(Rank::numeric(15), Err(CardError::InvalidPips(15)));
    assert_eq!(Rank::face("X"), Err(CardError::InvalidFace));
    assert_eq!(Rank::from_order(0), Err(CardError::InvalidOrder(0)));
    assert_eq!(Rank::from_order(14), Err(CardError::InvalidOrder(14)));
    assert_eq!("Z".parse::<Rank>(), Err(CardError::InvalidRank));
    assert_eq!("1".parse::<Rank>(), Err(CardError::InvalidPips(1)));
}

#[test]
fn ranks_parse_from_their_display() {
    for rank in Rank::ALL {
        assert_eq!(rank.to_string().parse::<Rank>(), Ok(rank));
    }
    assert_eq!(Rank::face("K"), Ok(Rank::Face(FaceKind::King)));
    assert!(Rank::face("J").unwrap().is_face());
    assert!(!Rank::Ace.is_face());
}

#[test]
fn suits_have_four_distinct_glyphs_in_order() {
    let glyphs: Vec<&str> = Suit::ALL.iter().map(|suit| suit.glyph()).collect();
    assert_eq!(glyphs, ["♠️", "♥️", "♣️", "♦️"]);
    let unique: HashSet<&str> = glyphs.iter().copied().collect();
    assert_eq!(unique.len(), 4);

    for suit in Suit::ALL {
        assert_eq!(Suit::from_glyph(suit.glyph()), Ok(suit));
    }
    assert_eq!(Suit::from_glyph("♤"), Err(CardError::UnknownSuit));
}

#[test]
fn card_display_shows_suit_then_rank() {
    let card = Card::new(Suit::Spades, Rank::Ace);
    assert_eq!(card.to_string(), "♠️ A");
    assert_eq!(Card::new(Suit::Hearts, Rank::Ace), Card::new(Suit::Hearts, Rank::Ace));
}

#[test]
fn deck_deals_every_card_once() {
    let mut deck = Deck::new(11);
    let mut seen = HashSet::new();
    while let Some(card) = deck.draw() {
        assert!(seen.insert(card), "{card} dealt twice");
    }
    assert_eq!(seen.len(), DECK_SIZE);
    assert!(deck.is_empty());

    deck.reshuffle();
    assert_eq!(deck.remaining(), DECK_SIZE);
}

#[test]
fn same_seed_same_order() {
    let mut first = Deck::new(3);
    let mut second = Deck::new(3);
    for _ in 0..DECK_SIZE {
        assert_eq!(first.draw(), second.draw());
    }
}

#[test]
fn stacked_deck_deals_in_given_order() {
    let cards = [
        Card::new(Suit::Clubs, Rank::Ace),
        Card::new(Suit::Diamonds, Rank::numeric(9).unwrap()),
    ];
    let mut deck = Deck::from_cards(&cards);
    assert_eq!(deck.draw(), Some(cards[0]));
    assert_eq!(deck.draw(), Some(cards[1]));
    assert_eq!(deck.draw(), None);
}
