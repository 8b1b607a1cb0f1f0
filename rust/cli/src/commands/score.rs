//! Score command handler.
//!
//! Parses the cards given on the command line and prints the per-rule
//! breakdown and total, either as text or as a JSON object.

use crate::error::CliError;
use crate::formatters::{format_breakdown, format_cards};
use crate::validation::parse_hand;
use std::io::Write;
use tracing::info;

/// Handle the score command.
///
/// # Example Output
///
/// ```text
/// Hand: 5♥ 5♣ 5♦ J♠
/// Pairs: 6
/// Fifteens: 8
/// Runs: 0
/// Total: 14
/// ```
pub fn handle_score_command(
    cards: &[String],
    json: bool,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let hand = parse_hand(cards)?;
    let breakdown = hand.breakdown();
    info!(hand = %hand, total = breakdown.total(), "scored hand");

    if json {
        let display = serde_json::json!({
            "cards": hand.cards().iter().map(|c| c.to_string()).collect::<Vec<_>>(),
            "pairs": breakdown.pairs,
            "fifteens": breakdown.fifteens,
            "runs": breakdown.runs,
            "total": breakdown.total(),
        });
        let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
        writeln!(out, "{}", json_str)?;
    } else {
        writeln!(out, "Hand: {}", format_cards(hand.cards()))?;
        writeln!(out, "{}", format_breakdown(&breakdown))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_score_text_output() {
        let mut out = Vec::new();
        handle_score_command(&args(&["3H", "4C", "5D", "6S", "7H"]), false, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("Hand: "));
        assert_eq!(lines[1], "Pairs: 0");
        assert_eq!(lines[2], "Fifteens: 4");
        assert_eq!(lines[3], "Runs: 5");
        assert_eq!(lines[4], "Total: 9");
    }

    #[test]
    fn test_score_json_output() {
        let mut out = Vec::new();
        handle_score_command(&args(&["5H", "5C", "5D", "JS"]), true, &mut out).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["total"].as_u64(), Some(14));
        assert_eq!(json["pairs"].as_u64(), Some(6));
        assert_eq!(json["cards"][3].as_str(), Some("JS"));
    }

    #[test]
    fn test_score_rejects_bad_card() {
        let mut out = Vec::new();
        let result = handle_score_command(&args(&["5H", "1Z"]), false, &mut out);
        assert!(result.is_err());
        assert!(out.is_empty(), "nothing is printed for a rejected hand");
    }
}
