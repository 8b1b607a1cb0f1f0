use std::collections::HashSet;

use crib_engine::cards::Card;
use crib_engine::deck::Deck;

#[test]
fn deck_reset_has_52_unique_cards() {
    let mut deck = Deck::new_with_seed(42);
    deck.reset();
    let mut set = HashSet::new();
    for i in 0..52 {
        let c = deck.deal_card().expect("should have 52 cards");
        assert_eq!(c.index(), i, "unshuffled deck is in index order");
        assert!(set.insert(c), "card {:?} duplicated at position {}", c, i);
    }
    assert!(
        deck.deal_card().is_none(),
        "after 52 cards, deck should be empty"
    );
}

#[test]
fn shuffle_is_deterministic_with_same_seed() {
    let mut d1 = Deck::new_with_seed(12345);
    let mut d2 = Deck::new_with_seed(12345);
    d1.shuffle();
    d2.shuffle();
    let a = d1.deal_hand(6).unwrap();
    let b = d2.deal_hand(6).unwrap();
    assert_eq!(a, b, "same seed must yield identical deals");
}

#[test]
fn shuffle_differs_with_different_seed() {
    let mut d1 = Deck::new_with_seed(1);
    let mut d2 = Deck::new_with_seed(2);
    d1.shuffle();
    d2.shuffle();
    let a: Vec<Card> = (0..10).map(|_| d1.deal_card().unwrap()).collect();
    let b: Vec<Card> = (0..10).map(|_| d2.deal_card().unwrap()).collect();
    assert_ne!(
        a, b,
        "different seeds should produce different orders (high probability)"
    );
}

#[test]
fn consecutive_deals_never_share_cards() {
    let mut deck = Deck::new_with_seed(777);
    deck.shuffle();
    let mut set = HashSet::new();
    for _ in 0..8 {
        let hand = deck.deal_hand(6).unwrap();
        for &c in hand.cards() {
            assert!(set.insert(c));
        }
    }
    assert_eq!(deck.remaining(), 4);
    assert!(deck.deal_hand(6).is_err());
}
