//! Random number generator check.
//!
//! Prints the first outputs of the ChaCha20 generator the engine uses, and
//! the opening cards a game with the same seed deals, so a seed can be
//! checked for reproducibility across machines.

use crate::error::CliError;
use crate::formatters::format_cards;
use blackjack_engine::dealer::DealerPolicy;
use blackjack_engine::game::Game;
use rand::{RngCore, SeedableRng};
use std::io::Write;

/// Handle the rng command. Without a seed a random one is drawn and printed.
pub fn handle_rng_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let s = seed.unwrap_or_else(rand::random);
    let mut rng = rand_chacha::ChaCha20Rng::seed_from_u64(s);
    let vals: Vec<u64> = (0..5).map(|_| rng.next_u64()).collect();
    writeln!(out, "Seed: {}", s)?;
    writeln!(out, "RNG sample: {:?}", vals)?;

    let mut game = Game::new(DealerPolicy::default(), Some(s));
    game.next_round()?;
    let dealt = game
        .player()
        .hand()
        .cards()
        .zip(game.dealer().hand().cards())
        .flat_map(|(p, d)| [p, d]);
    writeln!(out, "Opening deal: {}", format_cards(dealt))?;
    Ok(())
}
