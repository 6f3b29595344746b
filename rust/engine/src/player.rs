use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::GameError;
use crate::hand::Hand;

/// The two moves available to the player during [`crate::state::GamePhase::PlayerTurn`].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Take one more card
    Hit,
    /// End the turn and let the dealer play
    Stand,
}

impl PlayerAction {
    pub const ALL: [PlayerAction; 2] = [PlayerAction::Hit, PlayerAction::Stand];

    /// Numeric code used by agents that index actions (0 = HIT, 1 = STAND).
    pub fn code(self) -> u8 {
        match self {
            PlayerAction::Hit => 0,
            PlayerAction::Stand => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PlayerAction::Hit => "HIT",
            PlayerAction::Stand => "STAND",
        }
    }
}

impl fmt::Display for PlayerAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for PlayerAction {
    type Error = GameError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(PlayerAction::Hit),
            1 => Ok(PlayerAction::Stand),
            other => Err(GameError::UnknownAction(other.to_string())),
        }
    }
}

impl FromStr for PlayerAction {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hit" | "h" => Ok(PlayerAction::Hit),
            "stand" | "s" => Ok(PlayerAction::Stand),
            other => Err(GameError::UnknownAction(other.to_string())),
        }
    }
}

/// A participant at the table. The dealer is a `Player` too; hiding the
/// dealer's second card is the game's job.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    hand: Hand,
    /// Set when the participant stands or busts. Nothing in the state
    /// machine branches on it.
    is_done: bool,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
            is_done: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    pub(crate) fn hand_mut(&mut self) -> &mut Hand {
        &mut self.hand
    }

    pub fn is_done(&self) -> bool {
        self.is_done
    }

    pub(crate) fn mark_done(&mut self) {
        self.is_done = true;
    }
}
