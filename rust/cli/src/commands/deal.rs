//! Deal command handler for single hand dealing and keep advice.
//!
//! Shuffles a deck with a seed (flag, then config, then random), deals one
//! hand and prints its score and the best keep. The seed is always printed so
//! a deal can be reproduced.

use super::best::write_keep;
use crate::config::{Config, validate_sizes};
use crate::error::CliError;
use crate::formatters::{format_cards, format_points};
use crib_engine::deck::Deck;
use std::io::Write;
use tracing::info;

/// Handle the deal command.
pub fn handle_deal_command(
    seed: Option<u64>,
    size: Option<usize>,
    keep: Option<usize>,
    config: &Config,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let size = size.unwrap_or(config.deal_size);
    let keep = keep.unwrap_or(config.keep);
    validate_sizes(size, keep).map_err(CliError::InvalidInput)?;

    let seed = seed.or(config.seed).unwrap_or_else(rand::random);
    let mut deck = Deck::new_with_seed(seed);
    deck.shuffle();
    let hand = deck.deal_hand(size)?;
    info!(seed, hand = %hand, "dealt hand");

    writeln!(out, "Seed: {}", seed)?;
    writeln!(
        out,
        "Hand: {} ({})",
        format_cards(hand.cards()),
        format_points(hand.score())
    )?;
    if let Some(best) = hand.best_keep(keep) {
        write_keep(out, &best)?;
    }
    Ok(())
}
