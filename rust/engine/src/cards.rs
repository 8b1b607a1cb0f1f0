use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::EngineError;

/// Number of cards in a single standard deck.
pub const DECK_SIZE: usize = 52;

/// Represents one of the four suits in a standard 52-card deck.
/// Suits never score on their own; they only distinguish otherwise equal cards.
/// Declaration order is the deck index order (Hearts occupy indices 0..13).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Hearts suit (♥)
    Hearts,
    /// Clubs suit (♣)
    Clubs,
    /// Diamonds suit (♦)
    Diamonds,
    /// Spades suit (♠)
    Spades,
}

impl Suit {
    pub fn from_position(position: usize) -> Option<Suit> {
        all_suits().get(position).copied()
    }

    pub fn position(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Suit::Hearts => "Hearts",
            Suit::Clubs => "Clubs",
            Suit::Diamonds => "Diamonds",
            Suit::Spades => "Spades",
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Spades => 'S',
        }
    }
}

impl FromStr for Suit {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "H" => Ok(Suit::Hearts),
            "C" => Ok(Suit::Clubs),
            "D" => Ok(Suit::Diamonds),
            "S" => Ok(Suit::Spades),
            _ => Err(EngineError::InvalidSuit(s.to_string())),
        }
    }
}

/// Represents the rank of a playing card from Ace (low) through King.
/// The discriminant is the rank ordinal used for run adjacency; Ace never wraps
/// around past King.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Ace (1)
    Ace = 1,
    /// Rank 2
    Two,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
}

impl Rank {
    /// Position of the rank inside a suit block of the deck (Ace = 0).
    pub fn from_position(position: usize) -> Option<Rank> {
        all_ranks().get(position).copied()
    }

    pub fn position(self) -> usize {
        self.ordinal() as usize - 1
    }

    /// Ordinal used for run adjacency: Ace = 1 through King = 13.
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Counting value: face value for Ace through Nine, 10 for Ten and the court cards.
    pub fn value(self) -> u8 {
        self.ordinal().min(10)
    }

    pub fn name(self) -> &'static str {
        match self {
            Rank::Ace => "Ace",
            Rank::Two => "Two",
            Rank::Three => "Three",
            Rank::Four => "Four",
            Rank::Five => "Five",
            Rank::Six => "Six",
            Rank::Seven => "Seven",
            Rank::Eight => "Eight",
            Rank::Nine => "Nine",
            Rank::Ten => "Ten",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "T",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

impl FromStr for Rank {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rank = match s.to_ascii_uppercase().as_str() {
            "A" | "1" => Rank::Ace,
            "2" => Rank::Two,
            "3" => Rank::Three,
            "4" => Rank::Four,
            "5" => Rank::Five,
            "6" => Rank::Six,
            "7" => Rank::Seven,
            "8" => Rank::Eight,
            "9" => Rank::Nine,
            "T" | "10" => Rank::Ten,
            "J" => Rank::Jack,
            "Q" => Rank::Queen,
            "K" => Rank::King,
            _ => return Err(EngineError::InvalidRank(s.to_string())),
        };
        Ok(rank)
    }
}

/// Represents a single playing card with a suit and rank.
/// Cards are immutable values; equality covers both rank and suit.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The rank of the card (Ace through King)
    pub rank: Rank,
    /// The suit of the card (Hearts, Clubs, Diamonds or Spades)
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Card { rank, suit }
    }

    /// Builds the card at `index` of an unshuffled deck: rank is `index % 13`,
    /// suit is `index / 13`.
    pub fn from_index(index: usize) -> Result<Card, EngineError> {
        let invalid = || EngineError::InvalidCardIndex {
            index,
            limit: DECK_SIZE,
        };
        let rank = Rank::from_position(index % 13).ok_or_else(invalid)?;
        let suit = Suit::from_position(index / 13).ok_or_else(invalid)?;
        Ok(Card { rank, suit })
    }

    pub fn index(&self) -> usize {
        self.rank.position() + self.suit.position() * 13
    }

    pub fn value(&self) -> u8 {
        self.rank.value()
    }

    pub fn is_pair_with(&self, other: &Card) -> bool {
        self.rank == other.rank
    }

    /// Long form, e.g. `Five of Hearts (4)`.
    pub fn describe(&self) -> String {
        format!("{} of {} ({})", self.rank.name(), self.suit.name(), self.index())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank.symbol(), self.suit.symbol())
    }
}

impl FromStr for Card {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let Some((split, _)) = text.char_indices().last() else {
            return Err(EngineError::InvalidCardNotation(s.to_string()));
        };
        if split == 0 {
            return Err(EngineError::InvalidCardNotation(s.to_string()));
        }
        let (rank, suit) = text.split_at(split);
        Ok(Card {
            rank: rank.parse()?,
            suit: suit.parse()?,
        })
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Hearts, Suit::Clubs, Suit::Diamonds, Suit::Spades]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ]
}

/// The 52 cards in deck index order.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(DECK_SIZE);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card { suit: s, rank: r });
        }
    }
    v
}

/// Parses whitespace- or comma-separated card notation such as `"5H 6D, JC"`.
pub fn parse_cards(text: &str) -> Result<Vec<Card>, EngineError> {
    text.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect()
}
