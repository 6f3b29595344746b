//! Baseline agent for Blackjack.
//!
//! A rule-based reference with no learning: HIT/STAND basic strategy keyed on
//! the player's total, whether it is soft, and the dealer's revealed card.
//! Useful as the bar a trained agent should clear.

use crate::Agent;
use blackjack_engine::player::PlayerAction;
use blackjack_engine::state::{Observation, PlayerState};

/// Dealer-aware basic strategy restricted to HIT and STAND.
///
/// # Strategy
///
/// **Soft totals** (usable ace): hit through 17, stand on 18 or more.
///
/// **Hard totals:**
/// - 11 or less: always hit
/// - 12: stand against a dealer 4-6, otherwise hit
/// - 13-16: stand against a dealer 2-6, otherwise hit
/// - 17 or more: stand
///
/// # Example
///
/// ```rust
/// use blackjack_ai::baseline::BaselineAgent;
/// use blackjack_ai::Agent;
/// use blackjack_engine::dealer::DealerPolicy;
/// use blackjack_engine::game::Game;
///
/// let mut agent = BaselineAgent::new();
/// let mut game = Game::new(DealerPolicy::reach17(), Some(42));
/// let state = game.next_round().expect("round starts");
/// let _action = agent.choose_action(&state);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BaselineAgent;

impl BaselineAgent {
    pub fn new() -> Self {
        Self
    }

    fn decide(obs: Observation) -> PlayerAction {
        let weak_dealer = (2..=6).contains(&obs.dealer_up_value);
        let stand = if obs.usable_ace {
            obs.player_total >= 18
        } else {
            match obs.player_total {
                0..=11 => false,
                12 => (4..=6).contains(&obs.dealer_up_value),
                13..=16 => weak_dealer,
                _ => true,
            }
        };
        if stand {
            PlayerAction::Stand
        } else {
            PlayerAction::Hit
        }
    }
}

impl Agent for BaselineAgent {
    fn choose_action(&mut self, state: &PlayerState) -> PlayerAction {
        Self::decide(state.observation())
    }

    fn name(&self) -> &str {
        "BaselineAgent"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn obs(player_total: u32, usable_ace: bool, dealer_up_value: u32) -> Observation {
        Observation {
            player_total,
            usable_ace,
            dealer_up_value,
        }
    }

    #[test]
    fn hard_totals() {
        assert_eq!(BaselineAgent::decide(obs(9, false, 6)), PlayerAction::Hit);
        assert_eq!(BaselineAgent::decide(obs(12, false, 5)), PlayerAction::Stand);
        assert_eq!(BaselineAgent::decide(obs(12, false, 2)), PlayerAction::Hit);
        assert_eq!(BaselineAgent::decide(obs(15, false, 6)), PlayerAction::Stand);
        assert_eq!(BaselineAgent::decide(obs(15, false, 10)), PlayerAction::Hit);
        assert_eq!(BaselineAgent::decide(obs(17, false, 11)), PlayerAction::Stand);
    }

    #[test]
    fn soft_totals() {
        assert_eq!(BaselineAgent::decide(obs(17, true, 5)), PlayerAction::Hit);
        assert_eq!(BaselineAgent::decide(obs(18, true, 10)), PlayerAction::Stand);
    }
}
