//! # crib-engine: Cribbage Hand Scoring Core
//!
//! Scores hands of playing cards under cribbage-style show rules: two points
//! per pair, two points per combination of cards counting exactly fifteen, and
//! one point per card in every maximal run. Also searches all fixed-size
//! sub-hands for the best one to keep.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card), deck index scheme and notation parsing
//! - [`subsets`] - Bitmask power-set enumeration
//! - [`scoring`] - Pair, fifteen and run rules and the per-rule breakdown
//! - [`hand`] - Hand scoring, keep choices and optimal sub-hand search
//! - [`deck`] - Seeded shuffling and the exhaustive deal walk
//! - [`logger`] - JSONL score records
//! - [`errors`] - Error types for card construction and dealing
//!
//! ## Quick Start
//!
//! ```rust
//! use crib_engine::cards::{Card, Rank, Suit};
//! use crib_engine::hand::Hand;
//!
//! let hand = Hand::new(vec![
//!     Card::new(Rank::Five, Suit::Hearts),
//!     Card::new(Rank::Five, Suit::Clubs),
//!     Card::new(Rank::Five, Suit::Diamonds),
//!     Card::new(Rank::Jack, Suit::Spades),
//! ]);
//!
//! let b = hand.breakdown();
//! assert_eq!((b.pairs, b.fifteens, b.runs), (6, 8, 0));
//! assert_eq!(hand.score(), 14);
//! ```
//!
//! ## Choosing a Keep
//!
//! ```rust
//! use crib_engine::hand::Hand;
//!
//! let dealt: Hand = "3H 4C 5D 6S 7H KC".parse().unwrap();
//! let kept = dealt.find_optimal(4);
//! assert_eq!(kept.len(), 4);
//! assert!(kept.score() >= 4);
//! ```

pub mod cards;
pub mod deck;
pub mod errors;
pub mod hand;
pub mod logger;
pub mod scoring;
pub mod subsets;
