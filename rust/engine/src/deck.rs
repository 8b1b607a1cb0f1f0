use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card};
use crate::errors::EngineError;
use crate::hand::Hand;

#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
    position: usize,
    rng: ChaCha20Rng,
}

impl Deck {
    pub fn new_with_seed(seed: u64) -> Self {
        let rng = ChaCha20Rng::seed_from_u64(seed);
        // Keep index order until shuffle is called explicitly
        Self {
            cards: full_deck(),
            position: 0,
            rng,
        }
    }

    pub fn shuffle(&mut self) {
        self.cards = full_deck();
        self.cards.shuffle(&mut self.rng);
        self.position = 0;
    }

    pub fn deal_card(&mut self) -> Option<Card> {
        if self.position >= self.cards.len() {
            None
        } else {
            let c = self.cards[self.position];
            self.position += 1;
            Some(c)
        }
    }

    /// Deals `count` cards, or none at all if fewer remain.
    pub fn deal_hand(&mut self, count: usize) -> Result<Hand, EngineError> {
        if self.remaining() < count {
            return Err(EngineError::DeckExhausted {
                requested: count,
                remaining: self.remaining(),
            });
        }
        let cards = self.cards[self.position..self.position + count].to_vec();
        self.position += count;
        Ok(Hand::new(cards))
    }

    pub fn reset(&mut self) {
        self.cards = full_deck();
        self.position = 0;
    }

    pub fn remaining(&self) -> usize {
        self.cards.len().saturating_sub(self.position)
    }
}

/// Every `hand_size`-card deal from an unshuffled deck, in lexicographic order of
/// deck indices: `{0,1,2,3,4,5}`, `{0,1,2,3,4,6}`, ... `{46,...,51}`.
#[derive(Debug, Clone)]
pub struct Deals {
    deck: Vec<Card>,
    indices: Vec<usize>,
    done: bool,
}

impl Deals {
    pub fn new(hand_size: usize) -> Self {
        Self::from_cards(full_deck(), hand_size)
    }

    /// Deals drawn from an arbitrary card sequence, in the same index order.
    pub fn from_cards(deck: Vec<Card>, hand_size: usize) -> Self {
        let done = hand_size == 0 || hand_size > deck.len();
        Self {
            deck,
            indices: (0..hand_size).collect(),
            done,
        }
    }

    /// Number of deals the full walk produces, C(deck, hand_size).
    pub fn total(&self) -> u64 {
        binomial(self.deck.len() as u64, self.indices.len() as u64)
    }

    fn advance(&mut self) {
        let n = self.deck.len();
        let k = self.indices.len();
        // rightmost index that can still move right
        let Some(i) = (0..k).rev().find(|&i| self.indices[i] < n - k + i) else {
            self.done = true;
            return;
        };
        self.indices[i] += 1;
        for j in i + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
    }
}

impl Iterator for Deals {
    type Item = Hand;

    fn next(&mut self) -> Option<Hand> {
        if self.done {
            return None;
        }
        let hand = Hand::new(self.indices.iter().map(|&i| self.deck[i]).collect());
        self.advance();
        Some(hand)
    }
}

pub fn binomial(n: u64, k: u64) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}
