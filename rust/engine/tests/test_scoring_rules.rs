use crib_engine::cards::{Card, Rank as R, Suit as S};
use crib_engine::deck::Deck;
use crib_engine::hand::Hand;
use crib_engine::scoring::{fifteen_score, pair_score, run_score, sum_score};

fn c(r: R, s: S) -> Card {
    Card { rank: r, suit: s }
}

fn from_indices(indices: &[usize]) -> Hand {
    Hand::new(
        indices
            .iter()
            .map(|&i| Card::from_index(i).unwrap())
            .collect(),
    )
}

#[test]
fn pair_of_equal_ranks_scores_two() {
    assert_eq!(pair_score(&[c(R::Nine, S::Hearts), c(R::Nine, S::Spades)]), 2);
    assert_eq!(pair_score(&[c(R::Nine, S::Hearts), c(R::Ten, S::Hearts)]), 0);
}

#[test]
fn three_of_a_kind_is_three_pairs() {
    let cards = [
        c(R::Queen, S::Hearts),
        c(R::Queen, S::Clubs),
        c(R::Queen, S::Diamonds),
    ];
    assert_eq!(pair_score(&cards), 6);
}

#[test]
fn three_fives_and_a_jack() {
    let cards = [
        c(R::Five, S::Hearts),
        c(R::Five, S::Clubs),
        c(R::Five, S::Diamonds),
        c(R::Jack, S::Spades),
    ];
    // 5+J three ways and 5+5+5 once
    assert_eq!(fifteen_score(&cards), 8);
    assert_eq!(pair_score(&cards), 6);
    assert_eq!(run_score(&cards), 0);
    assert_eq!(Hand::new(cards.to_vec()).score(), 14);
}

#[test]
fn overlapping_fifteens_all_score() {
    // 5+K and 5+Q share the five
    let cards = [
        c(R::Five, S::Hearts),
        c(R::King, S::Clubs),
        c(R::Queen, S::Diamonds),
    ];
    assert_eq!(fifteen_score(&cards), 4);
}

#[test]
fn sum_rule_accepts_other_targets() {
    let cards = [c(R::Ace, S::Hearts), c(R::Two, S::Clubs), c(R::Three, S::Spades)];
    // {3}, {1,2}
    assert_eq!(sum_score(&cards, 3), 4);
    assert_eq!(sum_score(&cards, 6), 2);
}

#[test]
fn five_card_fifteen_scores() {
    // A+2+3+4+5 is the only fifteen
    let hand: Hand = "AH 2C 3D 4S 5H".parse().unwrap();
    let b = hand.breakdown();
    assert_eq!(b.fifteens, 2);
    assert_eq!(b.runs, 5);
    assert_eq!(b.pairs, 0);
    assert_eq!(hand.score(), 7);
}

#[test]
fn four_card_fifteen_scores() {
    // 2+3+4+6 and nothing shorter
    let hand: Hand = "2H 3C 4D 6S".parse().unwrap();
    assert_eq!(fifteen_score(hand.cards()), 2);
    assert_eq!(hand.breakdown().runs, 3);
    assert_eq!(hand.score(), 5);
}

#[test]
fn five_card_run_scores_once() {
    let hand: Hand = "3H 4C 5D 6S 7H".parse().unwrap();
    let b = hand.breakdown();
    assert_eq!(b.runs, 5);
    // 3+5+7 and 4+5+6
    assert_eq!(b.fifteens, 4);
    assert_eq!(b.pairs, 0);
    assert_eq!(hand.score(), 9);
}

#[test]
fn index_dealt_hand_with_gap_scores_four() {
    let hand = from_indices(&[4, 5, 11, 7, 8]);
    let ranks: Vec<R> = hand.cards().iter().map(|c| c.rank).collect();
    assert_eq!(ranks, vec![R::Five, R::Six, R::Queen, R::Eight, R::Nine]);
    let b = hand.breakdown();
    assert_eq!(b.runs, 0);
    assert_eq!(b.fifteens, 4);
    assert_eq!(hand.score(), 4);
}

#[test]
fn duplicated_rank_scores_both_runs() {
    let hand: Hand = "5H 5C 6D 7S".parse().unwrap();
    assert_eq!(run_score(hand.cards()), 6);
    assert_eq!(hand.score(), 8);
}

#[test]
fn double_double_run_scores_four_runs() {
    let hand: Hand = "5H 5C 6D 6S 7H".parse().unwrap();
    assert_eq!(run_score(hand.cards()), 12);
}

#[test]
fn longer_run_suppresses_its_sub_runs() {
    let hand: Hand = "3H 4C 5D 6S KH".parse().unwrap();
    assert_eq!(run_score(hand.cards()), 4);
}

#[test]
fn disjoint_runs_both_score() {
    let hand: Hand = "3H 4C 5D 7S 8H 9C".parse().unwrap();
    assert_eq!(run_score(hand.cards()), 6);
}

#[test]
fn card_order_does_not_change_score() {
    let a: Hand = "7H 3C 5D 4S 6H".parse().unwrap();
    let b: Hand = "3C 4S 5D 6H 7H".parse().unwrap();
    assert_eq!(a.breakdown(), b.breakdown());
}

#[test]
fn score_is_sum_of_independent_rules() {
    let mut deck = Deck::new_with_seed(2024);
    for size in 1..=8 {
        for _ in 0..20 {
            deck.shuffle();
            let hand = deck.deal_hand(size).unwrap();
            let cards = hand.cards();
            let expected = pair_score(cards) + fifteen_score(cards) + run_score(cards);
            assert_eq!(hand.score(), expected, "hand {}", hand);
            assert_eq!(hand.score(), hand.score(), "scoring is repeatable");
        }
    }
}

#[test]
fn empty_hand_scores_zero() {
    assert_eq!(Hand::default().score(), 0);
}
