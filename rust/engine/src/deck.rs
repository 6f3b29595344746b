use rand::Rng;
use std::collections::VecDeque;

use crate::cards::{full_deck, Card};
use crate::errors::GameError;

/// The undealt cards of one round.
///
/// Built fresh from the canonical template each round and sampled without
/// replacement. A stacked pool deals a fixed prefix first, then falls back to
/// uniform sampling.
#[derive(Debug, Clone)]
pub struct CardPool {
    cards: Vec<Card>,
    stacked: VecDeque<Card>,
}

impl Default for CardPool {
    fn default() -> Self {
        Self::new()
    }
}

impl CardPool {
    pub fn new() -> Self {
        Self {
            cards: full_deck(),
            stacked: VecDeque::new(),
        }
    }

    /// Full pool whose first deals are `order`, in sequence.
    pub fn stacked(order: &[Card]) -> Result<Self, GameError> {
        let mut pool = Self::new();
        for (i, card) in order.iter().enumerate() {
            if order[..i].contains(card) {
                return Err(GameError::CardNotInPool(*card));
            }
            pool.stacked.push_back(*card);
        }
        Ok(pool)
    }

    pub fn deal_card<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Card, GameError> {
        if let Some(card) = self.stacked.pop_front() {
            let idx = self
                .cards
                .iter()
                .position(|c| *c == card)
                .ok_or(GameError::CardNotInPool(card))?;
            return Ok(self.cards.remove(idx));
        }
        if self.cards.is_empty() {
            return Err(GameError::PoolExhausted);
        }
        let idx = rng.random_range(0..self.cards.len());
        Ok(self.cards.remove(idx))
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.contains(card)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
