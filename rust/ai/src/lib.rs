//! # blackjack-ai: Agent Interface for the Blackjack Engine
//!
//! Defines the boundary learning agents plug into, plus a few non-learning
//! reference agents used for simulation and benchmarking.
//!
//! ## Core Components
//!
//! - [`Agent`] - Trait an agent implements to choose HIT or STAND from a snapshot
//! - [`baseline`] - Dealer-aware basic strategy
//! - [`threshold`] - Hits below a fixed total
//! - [`random`] - Seeded uniform choice, the exploration baseline
//! - [`create_agent`] - Factory resolving agents by name
//! - [`play_round`] - Drives one full round of a [`Game`] with an agent
//!
//! ## Quick Start
//!
//! ```rust
//! use blackjack_ai::{create_agent, play_round};
//! use blackjack_engine::dealer::DealerPolicy;
//! use blackjack_engine::game::Game;
//!
//! let mut agent = create_agent("baseline", Some(1)).expect("known agent");
//! let mut game = Game::new(DealerPolicy::reach17(), Some(42));
//!
//! let summary = play_round(&mut game, agent.as_mut()).expect("round completes");
//! assert!(summary.round.has_round_ended);
//! println!("{} -> {:?}", agent.name(), summary.round.outcome);
//! ```

use blackjack_engine::errors::GameError;
use blackjack_engine::game::Game;
use blackjack_engine::player::PlayerAction;
use blackjack_engine::state::{PlayerState, RoundState};
use rand::Rng;
use thiserror::Error;

pub mod baseline;
pub mod random;
pub mod threshold;

/// Trait implemented by anything that picks actions from engine snapshots.
///
/// # Example Implementation
///
/// ```rust
/// use blackjack_ai::Agent;
/// use blackjack_engine::player::PlayerAction;
/// use blackjack_engine::state::PlayerState;
///
/// struct AlwaysStand;
///
/// impl Agent for AlwaysStand {
///     fn choose_action(&mut self, _state: &PlayerState) -> PlayerAction {
///         PlayerAction::Stand
///     }
///
///     fn name(&self) -> &str {
///         "AlwaysStand"
///     }
/// }
/// ```
pub trait Agent: Send {
    /// Decide the next action from the player-facing snapshot.
    fn choose_action(&mut self, state: &PlayerState) -> PlayerAction;

    /// Name of this agent implementation.
    fn name(&self) -> &str;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AgentError {
    #[error("Unknown agent type: {0}")]
    UnknownAgent(String),
}

/// Creates an agent by name.
///
/// Supported names:
/// - `"baseline"` - dealer-aware basic strategy
/// - `"threshold"` or `"threshold<N>"` - stand from N (default 17)
/// - `"random"` - uniform HIT/STAND, seeded with `seed`
///
/// # Example
///
/// ```rust
/// use blackjack_ai::{create_agent, AgentError};
///
/// let agent = create_agent("threshold15", None).unwrap();
/// assert_eq!(agent.name(), "ThresholdAgent");
/// assert!(matches!(create_agent("qlearner", None), Err(AgentError::UnknownAgent(_))));
/// ```
pub fn create_agent(name: &str, seed: Option<u64>) -> Result<Box<dyn Agent>, AgentError> {
    let lowered = name.trim().to_ascii_lowercase();
    match lowered.as_str() {
        "baseline" => Ok(Box::new(baseline::BaselineAgent::new())),
        "random" => Ok(Box::new(random::RandomAgent::new(seed))),
        "threshold" => Ok(Box::new(threshold::ThresholdAgent::default())),
        other => other
            .strip_prefix("threshold")
            .and_then(|n| n.parse::<u32>().ok())
            .map(|stand_on| Box::new(threshold::ThresholdAgent::new(stand_on)) as Box<dyn Agent>)
            .ok_or_else(|| AgentError::UnknownAgent(name.to_string())),
    }
}

/// Everything that happened in one agent-driven round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary {
    /// Snapshot returned when the round was dealt
    pub opening: PlayerState,
    /// Actions in the order the agent took them
    pub actions: Vec<PlayerAction>,
    /// Terminal round state
    pub round: RoundState,
}

/// Deals a new round and lets `agent` act until it ends.
pub fn play_round<R: Rng>(
    game: &mut Game<R>,
    agent: &mut dyn Agent,
) -> Result<RoundSummary, GameError> {
    let opening = game.next_round()?;
    let mut state = opening.clone();
    let mut actions = Vec::new();
    loop {
        let action = agent.choose_action(&state);
        actions.push(action);
        let (next, round) = game.act(action)?;
        if round.has_round_ended {
            return Ok(RoundSummary {
                opening,
                actions,
                round,
            });
        }
        state = next;
    }
}
