//! Snapshot types handed to callers of [`crate::game::Game`].
//!
//! Snapshots are plain owned data: holding one never borrows the game, and a
//! later action never changes a snapshot already returned.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cards::Card;
use crate::hand::Hand;

/// Phase of the round state machine:
/// `Setup -> PlayerTurn -> DealerTurn -> EndOfRound`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    Setup,
    PlayerTurn,
    DealerTurn,
    EndOfRound,
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            GamePhase::Setup => "SETUP",
            GamePhase::PlayerTurn => "PLAYER_TURN",
            GamePhase::DealerTurn => "DEALER_TURN",
            GamePhase::EndOfRound => "END_OF_ROUND",
        };
        f.write_str(s)
    }
}

/// Result of a finished round, from the player's point of view.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Won,
    LostByPoints,
    LostByBust,
    Draw,
}

impl Outcome {
    pub const ALL: [Outcome; 4] = [
        Outcome::Won,
        Outcome::LostByPoints,
        Outcome::LostByBust,
        Outcome::Draw,
    ];

    /// Classifies a finished round. Bust checks come before the point
    /// comparison, player bust first.
    ///
    /// # Examples
    ///
    /// ```
    /// use blackjack_engine::state::Outcome;
    ///
    /// assert_eq!(Outcome::resolve(25, 23, true, true), Outcome::LostByBust);
    /// assert_eq!(Outcome::resolve(12, 24, false, true), Outcome::Won);
    /// assert_eq!(Outcome::resolve(18, 20, false, false), Outcome::LostByPoints);
    /// assert_eq!(Outcome::resolve(19, 19, false, false), Outcome::Draw);
    /// ```
    pub fn resolve(
        player_total: u32,
        dealer_total: u32,
        player_bust: bool,
        dealer_bust: bool,
    ) -> Outcome {
        if player_bust {
            Outcome::LostByBust
        } else if dealer_bust {
            Outcome::Won
        } else if player_total < dealer_total {
            Outcome::LostByPoints
        } else if player_total > dealer_total {
            Outcome::Won
        } else {
            Outcome::Draw
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Outcome::Won => "WON",
            Outcome::LostByPoints => "LOST_BY_POINTS",
            Outcome::LostByBust => "LOST_BY_BUST",
            Outcome::Draw => "DRAW",
        }
    }

    pub fn is_loss(self) -> bool {
        matches!(self, Outcome::LostByPoints | Outcome::LostByBust)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What the player can see: their own hand, the dealer's first card and
/// every card not visibly dealt (the dealer's hole card counts as undealt).
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub player_hand: Hand,
    pub dealer_revealed_card: Card,
    pub remaining_cards: Vec<Card>,
}

/// Compact state key: the player's total, whether it holds a usable ace and
/// the value of the dealer's revealed card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Observation {
    pub player_total: u32,
    pub usable_ace: bool,
    pub dealer_up_value: u32,
}

impl PlayerState {
    pub fn observation(&self) -> Observation {
        Observation {
            player_total: self.player_hand.calculate_total(),
            usable_ace: self.player_hand.has_usable_ace(),
            dealer_up_value: self.dealer_revealed_card.point_value(),
        }
    }
}

impl fmt::Display for PlayerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let remaining: Vec<String> = self.remaining_cards.iter().map(|c| c.to_string()).collect();
        write!(
            f,
            "Player {}, Dealer revealed card: {} ({})\nRemaining cards: [{}]",
            self.player_hand,
            self.dealer_revealed_card,
            self.dealer_revealed_card.point_value(),
            remaining.join(", ")
        )
    }
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            self.player_total, self.usable_ace, self.dealer_up_value
        )
    }
}

/// Round progress after an action. `outcome` is present exactly when
/// `has_round_ended` is true.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundState {
    pub has_round_ended: bool,
    pub outcome: Option<Outcome>,
    pub player_total: Option<u32>,
    pub dealer_total: Option<u32>,
}

impl RoundState {
    pub fn in_progress(player_total: u32, dealer_total: u32) -> Self {
        Self {
            has_round_ended: false,
            outcome: None,
            player_total: Some(player_total),
            dealer_total: Some(dealer_total),
        }
    }

    pub fn ended(outcome: Outcome, player_total: u32, dealer_total: u32) -> Self {
        Self {
            has_round_ended: true,
            outcome: Some(outcome),
            player_total: Some(player_total),
            dealer_total: Some(dealer_total),
        }
    }
}

impl fmt::Display for RoundState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let opt = |v: Option<u32>| v.map_or_else(|| "-".to_string(), |t| t.to_string());
        write!(
            f,
            "Has round ended: {}, Player victory state: {}, Player total: {}, Dealer total: {}",
            self.has_round_ended,
            self.outcome.map_or("-", Outcome::name),
            opt(self.player_total),
            opt(self.dealer_total)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_covers_every_combination_exactly_once() {
        for player_bust in [false, true] {
            for dealer_bust in [false, true] {
                for player_total in 2..=30 {
                    for dealer_total in 2..=30 {
                        let outcome =
                            Outcome::resolve(player_total, dealer_total, player_bust, dealer_bust);
                        let expected = if player_bust {
                            Outcome::LostByBust
                        } else if dealer_bust {
                            Outcome::Won
                        } else {
                            match player_total.cmp(&dealer_total) {
                                std::cmp::Ordering::Less => Outcome::LostByPoints,
                                std::cmp::Ordering::Greater => Outcome::Won,
                                std::cmp::Ordering::Equal => Outcome::Draw,
                            }
                        };
                        assert_eq!(outcome, expected);
                    }
                }
            }
        }
    }

    #[test]
    fn bust_takes_precedence_over_points() {
        // a higher busted player total would otherwise compare as a win
        assert_eq!(Outcome::resolve(23, 18, true, false), Outcome::LostByBust);
        // a lower dealer total after bust is irrelevant
        assert_eq!(Outcome::resolve(10, 22, false, true), Outcome::Won);
    }

    #[test]
    fn in_progress_has_no_outcome() {
        let rs = RoundState::in_progress(14, 10);
        assert!(!rs.has_round_ended);
        assert!(rs.outcome.is_none());
        let rs = RoundState::ended(Outcome::Draw, 20, 20);
        assert!(rs.has_round_ended);
        assert_eq!(rs.outcome, Some(Outcome::Draw));
        assert!(rs.to_string().contains("DRAW"));
    }
}
