//! # blackjack-engine: Blackjack Game Engine Core
//!
//! A deterministic, turn-based Blackjack engine for one player against one
//! dealer. Each round uses a fresh 52-card deck sampled through an injected,
//! seedable RNG, so every round can be reproduced exactly for training and
//! debugging of learning agents.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and the canonical deck
//! - [`hand`] - Hand totals and soft/hard ace resolution
//! - [`player`] - Participants and the HIT/STAND action set
//! - [`deck`] - The per-round card pool, sampled without replacement
//! - [`dealer`] - Dealer drawing policies (Greedy, ReachThreshold)
//! - [`state`] - Phases, outcomes and the snapshots returned to callers
//! - [`game`] - The round state machine
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use blackjack_engine::dealer::DealerPolicy;
//! use blackjack_engine::game::Game;
//! use blackjack_engine::player::PlayerAction;
//!
//! let mut game = Game::new(DealerPolicy::reach17(), Some(42));
//! let mut state = game.next_round().expect("round starts");
//!
//! loop {
//!     let action = if state.player_hand.calculate_total() < 17 {
//!         PlayerAction::Hit
//!     } else {
//!         PlayerAction::Stand
//!     };
//!     let (next, round) = game.act(action).expect("action accepted");
//!     state = next;
//!     if round.has_round_ended {
//!         println!("Outcome: {}", round.outcome.expect("finished rounds carry an outcome"));
//!         break;
//!     }
//! }
//! ```
//!
//! ## Deterministic Gameplay
//!
//! ```rust
//! use blackjack_engine::dealer::DealerPolicy;
//! use blackjack_engine::game::Game;
//!
//! let mut a = Game::new(DealerPolicy::Greedy, Some(9));
//! let mut b = Game::new(DealerPolicy::Greedy, Some(9));
//! assert_eq!(a.next_round().unwrap(), b.next_round().unwrap());
//! ```

pub mod cards;
pub mod dealer;
pub mod deck;
pub mod errors;
pub mod game;
pub mod hand;
pub mod player;
pub mod state;
