//! Cards, suits, colors and the standard 52-card deck.
//!
//! ## Text Form
//!
//! Cards render as two characters: rank (`A23456789TJQK`) then suit (`CDHS`).
//!
//! ```
//! use freecell_engine::core::{Card, Color, Suit};
//!
//! let card: Card = "TH".parse().unwrap();
//! assert_eq!(card, Card::new(10, Suit::Hearts));
//! assert_eq!(card.color(), Color::Red);
//! assert_eq!(card.to_string(), "TH");
//! ```

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lowest rank (Ace).
pub const ACE: u8 = 1;

/// Highest rank (King).
pub const KING: u8 = 13;

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

const RANK_CHARS: [char; 13] = ['A', '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K'];

/// Card color, derived from the suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Black,
    Red,
}

impl Color {
    /// The other color.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Black => Color::Red,
            Color::Red => Color::Black,
        }
    }
}

/// One of the four suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Suit {
    Clubs,
    Diamonds,
    Hearts,
    Spades,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Clubs and spades are black, diamonds and hearts are red.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Clubs | Suit::Spades => Color::Black,
            Suit::Diamonds | Suit::Hearts => Color::Red,
        }
    }

    /// Single-character symbol used in the text form.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        }
    }

    fn from_symbol(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'C' => Some(Suit::Clubs),
            'D' => Some(Suit::Diamonds),
            'H' => Some(Suit::Hearts),
            'S' => Some(Suit::Spades),
            _ => None,
        }
    }
}

/// A playing card. Pure value: no identity beyond `(rank, suit)`.
///
/// Deserialization goes through [`Card::try_new`], so an out-of-range rank
/// is rejected rather than stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCard")]
pub struct Card {
    rank: u8,
    suit: Suit,
}

/// Unchecked wire form of a [`Card`].
#[derive(Deserialize)]
struct RawCard {
    rank: u8,
    suit: Suit,
}

/// A card rank outside `1..=13`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidRankError(pub u8);

impl std::fmt::Display for InvalidRankError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "card rank {} is outside 1..=13", self.0)
    }
}

impl std::error::Error for InvalidRankError {}

impl TryFrom<RawCard> for Card {
    type Error = InvalidRankError;

    fn try_from(raw: RawCard) -> Result<Self, Self::Error> {
        Card::try_new(raw.rank, raw.suit).ok_or(InvalidRankError(raw.rank))
    }
}

impl Card {
    /// Create a card.
    ///
    /// Panics if `rank` is outside `1..=13`.
    #[must_use]
    pub const fn new(rank: u8, suit: Suit) -> Self {
        assert!(rank >= ACE && rank <= KING, "card rank must be in 1..=13");
        Self { rank, suit }
    }

    /// Create a card, returning `None` for an out-of-range rank.
    #[must_use]
    pub const fn try_new(rank: u8, suit: Suit) -> Option<Self> {
        if rank >= ACE && rank <= KING {
            Some(Self { rank, suit })
        } else {
            None
        }
    }

    /// Rank, 1 (Ace) through 13 (King).
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.rank
    }

    #[must_use]
    pub const fn suit(self) -> Suit {
        self.suit
    }

    /// Derived color of the card.
    #[must_use]
    pub const fn color(self) -> Color {
        self.suit.color()
    }
}

/// Free-function form of [`Card::color`].
#[must_use]
pub const fn color_of(card: Card) -> Color {
    card.color()
}

/// The 52-card deck in a fixed order: ranks ascending, suits within each rank.
///
/// Only used as the pre-shuffle source for dealing.
#[must_use]
pub fn make_deck() -> Vec<Card> {
    (ACE..=KING)
        .flat_map(|rank| Suit::ALL.into_iter().map(move |suit| Card::new(rank, suit)))
        .collect()
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", RANK_CHARS[(self.rank - 1) as usize], self.suit.symbol())
    }
}

/// Error parsing a card from text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseCardError {
    input: String,
}

impl std::fmt::Display for ParseCardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid card {:?}: expected rank (A,2-9,T/10,J,Q,K) then suit (C,D,H,S)", self.input)
    }
}

impl std::error::Error for ParseCardError {}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseCardError { input: s.to_string() };
        let trimmed = s.trim();

        let mut chars = trimmed.chars();
        let suit = chars.next_back().and_then(Suit::from_symbol).ok_or_else(err)?;
        let rank_text = chars.as_str();

        let rank = match rank_text.to_ascii_uppercase().as_str() {
            "10" => 10,
            text => {
                let mut rank_chars = text.chars();
                let c = rank_chars.next().ok_or_else(err)?;
                if rank_chars.next().is_some() {
                    return Err(err());
                }
                let pos = RANK_CHARS.iter().position(|&r| r == c).ok_or_else(err)?;
                pos as u8 + 1
            }
        };

        Ok(Card::new(rank, suit))
    }
}
