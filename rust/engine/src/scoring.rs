//! Point rules for pairs, fifteens and runs.
//!
//! Each rule consumes a subset enumeration of the hand. [`breakdown`]
//! enumerates once and feeds the same subsets to all three rules; the
//! single-rule helpers enumerate on their own for callers that only need one.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::cards::Card;
use crate::subsets::enumerate_subsets;

/// Sum a subset must reach to score under the fifteens rule.
pub const FIFTEEN: u32 = 15;
/// Points for each pair of equal-rank cards.
pub const PAIR_POINTS: u32 = 2;
/// Points for each subset summing to the target.
pub const SUM_POINTS: u32 = 2;
/// Shortest run that scores.
pub const MIN_RUN: usize = 3;

/// Per-rule contributions to a hand's score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub pairs: u32,
    pub fifteens: u32,
    pub runs: u32,
}

impl ScoreBreakdown {
    pub fn total(&self) -> u32 {
        self.pairs + self.fifteens + self.runs
    }
}

/// Scores `cards` under all three rules from one shared subset enumeration.
pub fn breakdown(cards: &[Card]) -> ScoreBreakdown {
    let subsets = enumerate_subsets(cards, None, None);
    ScoreBreakdown {
        pairs: pairs_in(&subsets),
        fifteens: sums_in(&subsets, FIFTEEN),
        runs: runs_in(&subsets),
    }
}

pub fn pair_score(cards: &[Card]) -> u32 {
    pairs_in(&enumerate_subsets(cards, Some(2), Some(2)))
}

pub fn fifteen_score(cards: &[Card]) -> u32 {
    sum_score(cards, FIFTEEN)
}

/// Two points for every subset, of any length, whose values add up to `target`.
pub fn sum_score(cards: &[Card], target: u32) -> u32 {
    sums_in(&enumerate_subsets(cards, None, None), target)
}

pub fn run_score(cards: &[Card]) -> u32 {
    runs_in(&enumerate_subsets(cards, Some(MIN_RUN), None))
}

fn pairs_in(subsets: &[Vec<Card>]) -> u32 {
    subsets
        .iter()
        .filter(|s| s.len() == 2 && s[0].is_pair_with(&s[1]))
        .count() as u32
        * PAIR_POINTS
}

fn sums_in(subsets: &[Vec<Card>], target: u32) -> u32 {
    subsets
        .iter()
        .filter(|s| s.iter().map(|c| c.value() as u32).sum::<u32>() == target)
        .count() as u32
        * SUM_POINTS
}

/// Longest runs first; a run that is contained (as a multiset of cards) in an
/// already scored run does not score again. Runs that differ only in which of
/// two equal-rank cards they use are not contained in each other and both score.
fn runs_in(subsets: &[Vec<Card>]) -> u32 {
    let mut candidates: Vec<&Vec<Card>> = subsets.iter().filter(|s| s.len() >= MIN_RUN).collect();
    // stable: equal lengths keep generation order
    candidates.sort_by_key(|s| std::cmp::Reverse(s.len()));

    let mut scored: Vec<Vec<Card>> = Vec::new();
    let mut points = 0;
    for candidate in candidates {
        let mut sorted = candidate.clone();
        sorted.sort_by_key(|c| c.rank);
        if !is_run(&sorted) {
            continue;
        }
        if scored.iter().any(|run| is_sub_multiset(&sorted, run)) {
            continue;
        }
        trace!(len = sorted.len(), run = ?sorted, "run scored");
        points += sorted.len() as u32;
        scored.push(sorted);
    }
    points
}

/// `cards` must be sorted by rank.
fn is_run(cards: &[Card]) -> bool {
    cards
        .windows(2)
        .all(|w| w[1].rank.ordinal() == w[0].rank.ordinal() + 1)
}

fn is_sub_multiset(candidate: &[Card], run: &[Card]) -> bool {
    let mut remaining = run.to_vec();
    candidate.iter().all(|card| {
        match remaining.iter().position(|c| c == card) {
            Some(i) => {
                remaining.swap_remove(i);
                true
            }
            None => false,
        }
    })
}
