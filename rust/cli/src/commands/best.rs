//! Best-keep command handler.
//!
//! Searches every sub-hand of the requested size and prints the highest
//! scoring one together with the cards it throws away. Among equal scores the
//! last candidate in generation order is reported.

use crate::config::Config;
use crate::error::CliError;
use crate::formatters::{format_cards, format_points};
use crate::ui;
use crate::validation::{parse_hand, validate_keep};
use crib_engine::hand::Keep;
use std::io::Write;
use tracing::info;

/// Handle the best command.
///
/// `keep` overrides the configured keep size. A hand shorter than the keep
/// size is reported whole, with a warning on `err`.
pub fn handle_best_command(
    cards: &[String],
    keep: Option<usize>,
    config: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let hand = parse_hand(cards)?;
    let keep = validate_keep(keep.unwrap_or(config.keep))?;

    let best = match hand.best_keep(keep) {
        Some(best) => best,
        None => {
            ui::display_warning(
                err,
                &format!(
                    "hand has {} cards, fewer than keep size {}; keeping the whole hand",
                    hand.len(),
                    keep
                ),
            )?;
            Keep {
                score: hand.score(),
                kept: hand.clone(),
                discarded: Vec::new(),
            }
        }
    };
    info!(hand = %hand, keep, score = best.score, "best keep");

    writeln!(out, "Hand: {}", format_cards(hand.cards()))?;
    write_keep(out, &best)?;
    Ok(())
}

/// `Keep:` and `Discard:` lines for a chosen keep.
pub(crate) fn write_keep(out: &mut dyn Write, keep: &Keep) -> Result<(), CliError> {
    writeln!(
        out,
        "Keep: {} ({})",
        format_cards(keep.kept.cards()),
        format_points(keep.score)
    )?;
    writeln!(out, "Discard: {}", format_cards(&keep.discarded))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_best_reports_keep_and_discard() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_best_command(
            &args(&["3H", "4C", "5D", "6S", "7H", "KC"]),
            None,
            &Config::default(),
            &mut out,
            &mut err,
        )
        .unwrap();
        let output = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("Keep: 4"));
        assert!(lines[1].ends_with("(7 points)"));
        assert!(lines[2].starts_with("Discard: 3"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_best_keep_flag_overrides_config() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_best_command(
            &args(&["5H", "5C", "5D", "JS"]),
            Some(2),
            &Config::default(),
            &mut out,
            &mut err,
        )
        .unwrap();
        let output = String::from_utf8(out).unwrap();
        // 5+J is worth the same as any pair of fives; the last candidate wins
        assert!(output.contains("(2 points)"));
        assert!(output.lines().nth(1).unwrap().contains('J'));
    }

    #[test]
    fn test_best_short_hand_warns() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_best_command(
            &args(&["5H", "JS"]),
            None,
            &Config::default(),
            &mut out,
            &mut err,
        )
        .unwrap();
        let warning = String::from_utf8(err).unwrap();
        assert!(warning.starts_with("WARNING:"));
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("Keep: 5"));
        assert!(output.contains("(2 points)"));
        assert!(output.contains("Discard: -"));
    }

    #[test]
    fn test_best_zero_keep_is_rejected() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_best_command(
            &args(&["5H", "JS"]),
            Some(0),
            &Config::default(),
            &mut out,
            &mut err,
        );
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
