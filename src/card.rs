//! Card types: suits, ranks, and the order a rank implies.

use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// Emoji presentation selector appended to the suit glyphs.
const VARIATION_SELECTOR: char = '\u{FE0F}';

/// Card suit.
///
/// Declaration order is the canonical display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Hearts.
    Hearts,
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
}

impl Suit {
    /// All suits in display order.
    pub const ALL: [Self; 4] = [Self::Spades, Self::Hearts, Self::Clubs, Self::Diamonds];

    /// Returns the glyph drawn for this suit.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Spades => "♠️",
            Self::Hearts => "♥️",
            Self::Clubs => "♣️",
            Self::Diamonds => "♦️",
        }
    }

    /// Parses a suit glyph, with or without the emoji presentation selector.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::UnknownSuit`] for anything that is not one of the
    /// four suit glyphs.
    ///
    /// # Example
    ///
    /// ```
    /// use cardface::Suit;
    ///
    /// assert_eq!(Suit::from_glyph("♣️"), Ok(Suit::Clubs));
    /// assert_eq!(Suit::from_glyph("♣"), Ok(Suit::Clubs));
    /// assert!(Suit::from_glyph("x").is_err());
    /// ```
    pub fn from_glyph(glyph: &str) -> Result<Self, CardError> {
        let bare = glyph.strip_suffix(VARIATION_SELECTOR).unwrap_or(glyph);
        match bare {
            "♠" => Ok(Self::Spades),
            "♥" => Ok(Self::Hearts),
            "♣" => Ok(Self::Clubs),
            "♦" => Ok(Self::Diamonds),
            _ => Err(CardError::UnknownSuit),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.glyph())
    }
}

/// Pip count of a numeric rank, always within `2..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pips(u8);

impl Pips {
    /// Validates a pip count.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidPips`] when `count` is outside `2..=10`.
    pub const fn new(count: u8) -> Result<Self, CardError> {
        if matches!(count, 2..=10) {
            Ok(Self(count))
        } else {
            Err(CardError::InvalidPips(count))
        }
    }

    /// Returns the pip count.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

/// Court card kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FaceKind {
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl FaceKind {
    /// Returns the letter shown in the corners.
    #[must_use]
    pub const fn letter(self) -> &'static str {
        match self {
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }
}

impl FromStr for FaceKind {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "J" => Ok(Self::Jack),
            "Q" => Ok(Self::Queen),
            "K" => Ok(Self::King),
            _ => Err(CardError::InvalidFace),
        }
    }
}

/// Card rank.
///
/// Payloads are validated on construction, so a numeric rank of 15 or a
/// face of "X" cannot exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// Ace (order 1).
    Ace,
    /// Numeric rank 2 through 10.
    Numeric(Pips),
    /// Jack, queen or king (order 11, 12, 13).
    Face(FaceKind),
}

impl Rank {
    /// The 13 ranks in canonical order: A, 2..10, J, Q, K.
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Numeric(Pips(2)),
        Self::Numeric(Pips(3)),
        Self::Numeric(Pips(4)),
        Self::Numeric(Pips(5)),
        Self::Numeric(Pips(6)),
        Self::Numeric(Pips(7)),
        Self::Numeric(Pips(8)),
        Self::Numeric(Pips(9)),
        Self::Numeric(Pips(10)),
        Self::Face(FaceKind::Jack),
        Self::Face(FaceKind::Queen),
        Self::Face(FaceKind::King),
    ];

    /// Creates a numeric rank.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidPips`] when `pips` is outside `2..=10`.
    pub const fn numeric(pips: u8) -> Result<Self, CardError> {
        match Pips::new(pips) {
            Ok(pips) => Ok(Self::Numeric(pips)),
            Err(err) => Err(err),
        }
    }

    /// Creates a face rank from its letter.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidFace`] unless `kind` is `"J"`, `"Q"` or `"K"`.
    pub fn face(kind: &str) -> Result<Self, CardError> {
        kind.parse().map(Self::Face)
    }

    /// Creates a rank from its order.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidOrder`] when `order` is outside `1..=13`.
    ///
    /// # Example
    ///
    /// ```
    /// use cardface::Rank;
    ///
    /// assert_eq!(Rank::from_order(1), Ok(Rank::Ace));
    /// assert_eq!(Rank::from_order(12).map(Rank::order), Ok(12));
    /// assert!(Rank::from_order(0).is_err());
    /// ```
    pub const fn from_order(order: u8) -> Result<Self, CardError> {
        match order {
            1 => Ok(Self::Ace),
            2..=10 => Ok(Self::Numeric(Pips(order))),
            11 => Ok(Self::Face(FaceKind::Jack)),
            12 => Ok(Self::Face(FaceKind::Queen)),
            13 => Ok(Self::Face(FaceKind::King)),
            _ => Err(CardError::InvalidOrder(order)),
        }
    }

    /// Returns the order of the rank (1 = Ace, 11 = Jack, 12 = Queen, 13 = King).
    #[must_use]
    pub const fn order(self) -> u8 {
        match self {
            Self::Ace => 1,
            Self::Numeric(pips) => pips.get(),
            Self::Face(FaceKind::Jack) => 11,
            Self::Face(FaceKind::Queen) => 12,
            Self::Face(FaceKind::King) => 13,
        }
    }

    /// Returns whether this is a jack, queen or king.
    #[must_use]
    pub const fn is_face(self) -> bool {
        matches!(self, Self::Face(_))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ace => f.write_str("A"),
            Self::Numeric(pips) => write!(f, "{}", pips.get()),
            Self::Face(kind) => f.write_str(kind.letter()),
        }
    }
}

impl FromStr for Rank {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Self::Ace),
            "J" | "Q" | "K" => Self::face(s),
            _ => s
                .parse::<u8>()
                .map_err(|_| CardError::InvalidRank)
                .and_then(Self::numeric),
        }
    }
}

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.suit, self.rank)
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
