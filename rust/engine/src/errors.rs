use thiserror::Error;

use crate::cards::Card;
use crate::state::GamePhase;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Card pool exhausted")]
    PoolExhausted,
    #[error("Unknown action: {0}")]
    UnknownAction(String),
    #[error("Invalid phase: expected {expected}, found {actual}")]
    InvalidPhase {
        expected: GamePhase,
        actual: GamePhase,
    },
    #[error("Dealer policy has no strategy: {0}")]
    UnimplementedPolicy(String),
    #[error("Card not available in pool: {0}")]
    CardNotInPool(Card),
    #[error("Invalid card notation: {0:?}")]
    InvalidCard(String),
}
