use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::{parse_cards, Card};
use crate::errors::EngineError;
use crate::scoring::{self, ScoreBreakdown};
use crate::subsets::{select, SubsetMasks};

/// Cards kept in a standard show hand.
pub const KEEP_SIZE: usize = 4;

/// An ordered collection of cards: four kept cards, a six-card deal, or any
/// other group of cards to be scored. Order is insertion order and never
/// affects the score.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<Card>,
}

/// One way of keeping `kept` and throwing away `discarded`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keep {
    pub kept: Hand,
    pub discarded: Vec<Card>,
    pub score: u32,
}

impl Hand {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Exactly two cards of the same rank.
    pub fn is_pair(&self) -> bool {
        self.cards.len() == 2 && self.cards[0].is_pair_with(&self.cards[1])
    }

    pub fn score(&self) -> u32 {
        self.breakdown().total()
    }

    pub fn breakdown(&self) -> ScoreBreakdown {
        scoring::breakdown(&self.cards)
    }

    /// Every way to keep `keep_len` cards, in subset generation order.
    pub fn choices(&self, keep_len: usize) -> Vec<Keep> {
        if keep_len == 0 || keep_len > self.cards.len() {
            return Vec::new();
        }
        let masks = SubsetMasks::new(self.cards.len(), Some(keep_len), Some(keep_len));
        let full = (1u32 << self.cards.len()) - 1;
        masks
            .map(|mask| {
                let kept = Hand::new(select(&self.cards, mask));
                let score = kept.score();
                Keep {
                    kept,
                    discarded: select(&self.cards, full & !mask),
                    score,
                }
            })
            .collect()
    }

    /// The highest scoring keep of `keep_len` cards. Candidates are scanned in
    /// generation order and a candidate replaces the best on `>=`, so the last
    /// of several equal scores wins.
    pub fn best_keep(&self, keep_len: usize) -> Option<Keep> {
        let mut best: Option<Keep> = None;
        for choice in self.choices(keep_len) {
            if best.as_ref().is_none_or(|b| choice.score >= b.score) {
                best = Some(choice);
            }
        }
        if let Some(b) = &best {
            debug!(hand = %self, kept = %b.kept, score = b.score, "best keep found");
        }
        best
    }

    /// The best scoring sub-hand of `keep_len` cards, or the hand itself when
    /// it holds fewer than `keep_len` cards.
    pub fn find_optimal(&self, keep_len: usize) -> Hand {
        if self.cards.len() < keep_len {
            return self.clone();
        }
        match self.best_keep(keep_len) {
            Some(keep) => keep.kept,
            None => self.clone(),
        }
    }

    /// Comma separated long form, e.g. `Five of Hearts (4), Six of Hearts (5)`.
    pub fn describe(&self) -> String {
        self.cards
            .iter()
            .map(Card::describe)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Hand::new(cards)
    }
}

impl FromStr for Hand {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_cards(s).map(Hand::new)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text: Vec<String> = self.cards.iter().map(Card::to_string).collect();
        f.write_str(&text.join(" "))
    }
}
