//! Input validation shared by the command handlers.

use crate::config::MAX_HAND_SIZE;
use crate::error::CliError;
use crib_engine::cards::parse_cards;
use crib_engine::hand::Hand;

/// Joins positional card arguments and parses them into a hand.
///
/// Each argument may hold one card (`5H`) or several separated by spaces or
/// commas (`"5H,6D JC"`).
///
/// ```rust
/// use crib_cli::validation::parse_hand;
///
/// let hand = parse_hand(&["5H".to_string(), "6D,7C".to_string()]).unwrap();
/// assert_eq!(hand.len(), 3);
/// assert!(parse_hand(&["5X".to_string()]).is_err());
/// ```
pub fn parse_hand(args: &[String]) -> Result<Hand, CliError> {
    let cards = parse_cards(&args.join(" "))?;
    if cards.is_empty() {
        return Err(CliError::InvalidInput("no cards given".into()));
    }
    if cards.len() > MAX_HAND_SIZE {
        return Err(CliError::InvalidInput(format!(
            "{} cards given, at most {} can be scored",
            cards.len(),
            MAX_HAND_SIZE
        )));
    }
    Ok(Hand::new(cards))
}

pub fn validate_keep(keep: usize) -> Result<usize, CliError> {
    if keep == 0 {
        return Err(CliError::InvalidInput("keep must be at least 1".into()));
    }
    Ok(keep)
}
