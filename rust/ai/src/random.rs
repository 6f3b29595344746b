//! Uniform random agent, the exploration end of an epsilon-greedy learner.

use crate::Agent;
use blackjack_engine::player::PlayerAction;
use blackjack_engine::state::PlayerState;
use rand::SeedableRng;
use rand::seq::IndexedRandom;
use rand_chacha::ChaCha8Rng;

#[derive(Debug, Clone)]
pub struct RandomAgent {
    rng: ChaCha8Rng,
}

impl RandomAgent {
    /// Seeded agents repeat their choices exactly; `None` draws a seed from
    /// the thread RNG.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Agent for RandomAgent {
    fn choose_action(&mut self, _state: &PlayerState) -> PlayerAction {
        *PlayerAction::ALL
            .choose(&mut self.rng)
            .unwrap_or(&PlayerAction::Stand)
    }

    fn name(&self) -> &str {
        "RandomAgent"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blackjack_engine::dealer::DealerPolicy;
    use blackjack_engine::game::Game;

    #[test]
    fn same_seed_same_choices() {
        let state = Game::new(DealerPolicy::Greedy, Some(4)).next_round().unwrap();
        let mut a = RandomAgent::new(Some(99));
        let mut b = RandomAgent::new(Some(99));
        let xs: Vec<_> = (0..32).map(|_| a.choose_action(&state)).collect();
        let ys: Vec<_> = (0..32).map(|_| b.choose_action(&state)).collect();
        assert_eq!(xs, ys);
        assert!(xs.contains(&PlayerAction::Hit));
        assert!(xs.contains(&PlayerAction::Stand));
    }
}
