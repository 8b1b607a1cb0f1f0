//! Card and hand formatters for terminal display.
//!
//! Suits render as Unicode symbols (♥ ♣ ♦ ♠) with an ASCII letter fallback
//! for Windows consoles that cannot draw them. Ranks use single characters
//! (`A 2-9 T J Q K`).
//!
//! ## Example
//!
//! ```rust
//! use crib_engine::cards::{Card, Rank, Suit};
//! use crib_cli::formatters::format_card;
//!
//! let five = Card::new(Rank::Five, Suit::Hearts);
//! assert!(format_card(&five) == "5♥" || format_card(&five) == "5h");
//! ```

use crib_engine::cards::{Card, Suit};
use crib_engine::scoring::ScoreBreakdown;

/// Check if the terminal supports Unicode card symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        suit.symbol().to_ascii_lowercase().to_string()
    }
}

/// String like "5♥" (Unicode) or "5h" (ASCII).
pub fn format_card(card: &Card) -> String {
    format!("{}{}", card.rank.symbol(), format_suit(&card.suit))
}

/// Space separated cards, or `-` for none.
///
/// ```rust
/// use crib_engine::cards::parse_cards;
/// # use crib_cli::formatters::format_cards;
///
/// let cards = parse_cards("AH KS").unwrap();
/// assert!(format_cards(&cards).starts_with('A'));
/// assert_eq!(format_cards(&[]), "-");
/// ```
pub fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        "-".to_string()
    } else {
        let formatted: Vec<String> = cards.iter().map(format_card).collect();
        formatted.join(" ")
    }
}

/// One `Rule: points` line per rule followed by the total.
pub fn format_breakdown(breakdown: &ScoreBreakdown) -> String {
    format!(
        "Pairs: {}\nFifteens: {}\nRuns: {}\nTotal: {}",
        breakdown.pairs,
        breakdown.fifteens,
        breakdown.runs,
        breakdown.total()
    )
}

pub fn format_points(points: u32) -> String {
    if points == 1 {
        "1 point".to_string()
    } else {
        format!("{} points", points)
    }
}
