//! Deal command: one opening position, as the player sees it.
//!
//! With `--cards` the listed cards are dealt first (player, dealer, player,
//! dealer, then hits), which makes specific positions easy to inspect.

use crate::error::CliError;
use crate::formatters::{format_card, format_hand};
use crate::ui;
use crate::validation::parse_card_list;
use blackjack_engine::dealer::DealerPolicy;
use blackjack_engine::game::Game;
use std::io::Write;

/// Handle the deal command.
///
/// # Examples
///
/// ```ignore
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// handle_deal_command(Some(42), None, DealerPolicy::reach17(), &mut out, &mut err).unwrap();
/// ```
pub fn handle_deal_command(
    seed: Option<u64>,
    cards: Option<String>,
    policy: DealerPolicy,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let base_seed = seed.unwrap_or_else(rand::random);
    let mut game = Game::new(policy, Some(base_seed));

    let dealt = match cards.as_deref() {
        Some(list) => {
            let order = match parse_card_list(list) {
                Ok(order) => order,
                Err(e) => {
                    ui::write_error(err, &e)?;
                    return Err(CliError::InvalidInput(e));
                }
            };
            game.next_round_stacked(&order)
        }
        None => game.next_round(),
    };
    let state = match dealt {
        Ok(state) => state,
        Err(e) => {
            ui::write_error(err, &format!("Failed to deal: {}", e))?;
            return Err(e.into());
        }
    };

    writeln!(out, "Seed: {}", base_seed)?;
    writeln!(out, "Player: {}", format_hand(&state.player_hand))?;
    writeln!(
        out,
        "Dealer: {} ??",
        format_card(&state.dealer_revealed_card)
    )?;
    writeln!(out, "Observation: {}", state.observation())?;
    writeln!(out, "Unseen cards: {}", state.remaining_cards.len())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deal(seed: Option<u64>, cards: Option<&str>) -> (Result<(), CliError>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result = handle_deal_command(
            seed,
            cards.map(str::to_string),
            DealerPolicy::reach17(),
            &mut out,
            &mut err,
        );
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn seeded_deal_is_reproducible() {
        let (r1, out1, _) = deal(Some(42), None);
        let (r2, out2, _) = deal(Some(42), None);
        assert!(r1.is_ok() && r2.is_ok());
        assert_eq!(out1, out2);
        assert!(out1.contains("Player: ["));
        assert!(out1.contains("Unseen cards: 49"));
    }

    #[test]
    fn stacked_cards_are_dealt_first() {
        let (result, out, _) = deal(Some(1), Some("AS,KH,7D,5C"));
        assert!(result.is_ok());
        assert!(out.contains("Observation: (18, true, 10)"), "{out}");
    }

    #[test]
    fn bad_card_notation_is_rejected() {
        let (result, _, err) = deal(Some(1), Some("AS,1X"));
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
        assert!(err.starts_with("Error:"));
    }

    #[test]
    fn duplicate_cards_are_an_engine_error() {
        let (result, _, err) = deal(Some(1), Some("AS,AS"));
        assert!(matches!(result, Err(CliError::Engine(_))));
        assert!(err.contains("Failed to deal"));
    }
}
