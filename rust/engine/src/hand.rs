use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::Card;

/// Totals at or above this value are bust.
pub const BUST_THRESHOLD: u32 = 22;

/// A card as held in a hand, with the hand-local ace demotion marker.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct HeldCard {
    pub card: Card,
    /// Set once when an ace is counted as 1 instead of 11.
    pub demoted: bool,
}

impl HeldCard {
    pub fn value(&self) -> u32 {
        if self.demoted {
            1
        } else {
            self.card.point_value()
        }
    }

    pub fn is_usable_ace(&self) -> bool {
        self.card.is_ace() && !self.demoted
    }
}

/// Ordered cards of one participant for one round.
///
/// Insertion order is kept for display; the total is order independent.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Hand {
    cards: Vec<HeldCard>,
}

impl Hand {
    pub fn new() -> Self {
        Self { cards: Vec::new() }
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(HeldCard {
            card,
            demoted: false,
        });
    }

    pub fn held(&self) -> &[HeldCard] {
        &self.cards
    }

    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().map(|h| h.card)
    }

    pub fn first(&self) -> Option<&HeldCard> {
        self.cards.first()
    }

    pub fn contains(&self, card: &Card) -> bool {
        self.cards.iter().any(|h| h.card == *card)
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn has_usable_ace(&self) -> bool {
        self.cards.iter().any(HeldCard::is_usable_ace)
    }

    /// Demotes the first usable ace to 1. Returns `false` when there is none,
    /// so repeated calls never touch an already demoted ace.
    pub fn use_ace(&mut self) -> bool {
        match self.cards.iter_mut().find(|h| h.is_usable_ace()) {
            Some(ace) => {
                ace.demoted = true;
                true
            }
            None => false,
        }
    }

    pub fn calculate_total(&self) -> u32 {
        self.cards.iter().map(HeldCard::value).sum()
    }

    pub fn is_bust(&self) -> bool {
        self.calculate_total() >= BUST_THRESHOLD
    }

    /// Demotes usable aces one at a time while the hand is bust.
    /// Returns how many aces were demoted.
    pub fn resolve_aces(&mut self) -> usize {
        let mut demoted = 0;
        while self.is_bust() && self.use_ace() {
            demoted += 1;
        }
        demoted
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hand: [")?;
        for (i, h) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{} ({})", h.card, h.value())?;
        }
        write!(f, "]")
    }
}
