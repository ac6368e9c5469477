//! Deck of cards shown one at a time.

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};

/// Source of the next card to show.
pub trait DrawCard {
    /// Takes the next card, or `None` once the source is exhausted.
    fn draw(&mut self) -> Option<Card>;
}

/// A shuffled 52-card deck.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a full deck shuffled with the given seed.
    ///
    /// # Example
    ///
    /// ```
    /// use cardface::{Deck, DrawCard, DECK_SIZE};
    ///
    /// let mut deck = Deck::new(42);
    /// assert_eq!(deck.remaining(), DECK_SIZE);
    /// assert!(deck.draw().is_some());
    /// ```
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cards = Self::shuffled(&mut rng);
        Self { cards, rng }
    }

    /// Creates a deck that deals `cards` in the given order.
    #[must_use]
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut cards = cards.to_vec();
        cards.reverse();
        Self {
            cards,
            rng: ChaCha8Rng::seed_from_u64(0),
        }
    }

    /// Creates and shuffles one of every card.
    fn shuffled(rng: &mut ChaCha8Rng) -> Vec<Card> {
        let mut cards = Vec::with_capacity(DECK_SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
        cards.shuffle(rng);
        cards
    }

    /// Refills the deck with all 52 cards and shuffles it.
    pub fn reshuffle(&mut self) {
        self.cards = Self::shuffled(&mut self.rng);
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether every card has been drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl DrawCard for Deck {
    fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }
}

impl<D: DrawCard + ?Sized> DrawCard for &mut D {
    fn draw(&mut self) -> Option<Card> {
        (**self).draw()
    }
}
