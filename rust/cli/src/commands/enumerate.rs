//! Enumerate command handler.
//!
//! Walks every deal of an unshuffled deck in deck index order, printing each
//! hand with its score followed by every possible keep and its score. The
//! full walk over six-card deals is C(52, 6) hands, so `--limit` bounds it.
//! With `--output`, one [`ScoreRecord`] per deal is appended as JSONL.

use crate::config::{Config, validate_sizes};
use crate::error::CliError;
use crib_engine::deck::Deals;
use crib_engine::logger::{ScoreLogger, ScoreRecord};
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

/// Handle the enumerate command.
///
/// # Example Output
///
/// ```text
/// Here's a hand: Ace of Hearts (0), ..., Six of Hearts (5) whose score(sum) is 14
/// possible choice: Ace of Hearts (0), ..., Four of Hearts (3) whose score(sum) is 4
/// ...
/// Walked 1 of 20358520 deals
/// ```
pub fn handle_enumerate_command(
    size: Option<usize>,
    keep: Option<usize>,
    limit: u64,
    output: Option<&Path>,
    config: &Config,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let size = size.unwrap_or(config.deal_size);
    let keep = keep.unwrap_or(config.keep);
    validate_sizes(size, keep).map_err(CliError::InvalidInput)?;
    if limit == 0 {
        return Err(CliError::InvalidInput("limit must be at least 1".into()));
    }

    let mut logger = match output {
        Some(path) => ScoreLogger::create(path)?,
        None => ScoreLogger::sink(),
    };
    let deals = Deals::new(size);
    let total = deals.total();
    info!(size, keep, limit, total, "walking deals");

    let mut walked = 0u64;
    for hand in deals.take(usize::try_from(limit).unwrap_or(usize::MAX)) {
        writeln!(
            out,
            "Here's a hand: {} whose score(sum) is {}",
            hand.describe(),
            hand.score()
        )?;
        for choice in hand.choices(keep) {
            writeln!(
                out,
                "possible choice: {} whose score(sum) is {}",
                choice.kept.describe(),
                choice.score
            )?;
        }
        let best = hand.best_keep(keep);
        let record = ScoreRecord::new(logger.next_id(), None, &hand, best.as_ref());
        logger.write(&record)?;
        debug!(hand_id = %record.hand_id, total = record.total, "deal scored");
        walked += 1;
    }
    writeln!(out, "Walked {} of {} deals", walked, total)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enumerate_first_deal() {
        let mut out = Vec::new();
        handle_enumerate_command(None, None, 1, None, &Config::default(), &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        // hand line, 15 choices, summary
        assert_eq!(lines.len(), 17);
        assert!(lines[0].starts_with("Here's a hand: Ace of Hearts (0), Two of Hearts (1)"));
        assert!(
            lines[1].starts_with("possible choice: Ace of Hearts (0), Two of Hearts (1), Three of Hearts (2), Four of Hearts (3)")
        );
        assert!(lines[0].ends_with(" whose score(sum) is 14"));
        assert!(lines[1].ends_with(" whose score(sum) is 4"));
        assert_eq!(lines[16], "Walked 1 of 20358520 deals");
    }

    #[test]
    fn test_enumerate_limit_counts_deals() {
        let mut out = Vec::new();
        handle_enumerate_command(Some(5), Some(4), 3, None, &Config::default(), &mut out)
            .unwrap();
        let output = String::from_utf8(out).unwrap();
        assert_eq!(output.matches("Here's a hand:").count(), 3);
        assert_eq!(output.matches("possible choice:").count(), 15);
        assert!(output.ends_with("Walked 3 of 2598960 deals\n"));
    }

    #[test]
    fn test_enumerate_rejects_zero_limit() {
        let mut out = Vec::new();
        let result = handle_enumerate_command(None, None, 0, None, &Config::default(), &mut out);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_enumerate_writes_jsonl() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deals.jsonl");
        let mut out = Vec::new();
        handle_enumerate_command(None, None, 2, Some(&path), &Config::default(), &mut out)
            .unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let records: Vec<ScoreRecord> = content
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].hand_id, "crib-000001");
        assert_eq!(records[1].hand_id, "crib-000002");
        assert!(records.iter().all(|r| r.best.is_some()));
    }
}
