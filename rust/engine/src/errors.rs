use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid card index: {index}, must be below {limit}")]
    InvalidCardIndex { index: usize, limit: usize },
    #[error("Invalid rank symbol: {0:?}")]
    InvalidRank(String),
    #[error("Invalid suit symbol: {0:?}")]
    InvalidSuit(String),
    #[error("Invalid card notation: {0:?} (expected e.g. 5H, 10D, QS)")]
    InvalidCardNotation(String),
    #[error("Deck exhausted: requested {requested} cards, {remaining} remaining")]
    DeckExhausted { requested: usize, remaining: usize },
}
