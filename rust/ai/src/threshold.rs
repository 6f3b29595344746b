//! Fixed-total agent: hits until its total reaches a stopping point,
//! ignoring the dealer's card. Mirrors the house rule the dealer plays by.

use crate::Agent;
use blackjack_engine::dealer::DEFAULT_THRESHOLD;
use blackjack_engine::player::PlayerAction;
use blackjack_engine::state::PlayerState;

#[derive(Debug, Clone)]
pub struct ThresholdAgent {
    stand_on: u32,
}

impl Default for ThresholdAgent {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl ThresholdAgent {
    pub fn new(stand_on: u32) -> Self {
        Self { stand_on }
    }

    pub fn stand_on(&self) -> u32 {
        self.stand_on
    }
}

impl Agent for ThresholdAgent {
    fn choose_action(&mut self, state: &PlayerState) -> PlayerAction {
        if state.player_hand.calculate_total() >= self.stand_on {
            PlayerAction::Stand
        } else {
            PlayerAction::Hit
        }
    }

    fn name(&self) -> &str {
        "ThresholdAgent"
    }
}
