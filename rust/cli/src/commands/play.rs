//! # Play Command
//!
//! Plays rounds against the dealer, either from stdin or with an agent
//! choosing the actions.
//!
//! - **Interactive**: the player types `h`/`hit`, `s`/`stand` or `q` to quit.
//!   EOF on stdin ends the session like `q`.
//! - **Agent**: `--agent NAME` lets a reference agent decide; each action is
//!   echoed so the round can be followed.
//!
//! After every round the dealer's full hand and the result are shown; a
//! session summary closes the run.

use crate::commands::stats::OutcomeTally;
use crate::error::CliError;
use crate::formatters::{format_action, format_hand, format_player_view, format_round_result};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{ParseResult, parse_player_action};
use blackjack_ai::{Agent, create_agent};
use blackjack_engine::dealer::DealerPolicy;
use blackjack_engine::game::Game;
use blackjack_engine::player::PlayerAction;
use std::io::{BufRead, Write};

#[derive(Debug, Clone)]
pub struct PlayOptions {
    /// `None` reads actions from stdin
    pub agent: Option<String>,
    pub rounds: u32,
    pub seed: Option<u64>,
    pub policy: DealerPolicy,
}

/// Handle the play command.
///
/// # Errors
///
/// `CliError::InvalidInput` for zero rounds or an unknown agent,
/// `CliError::Engine` if the engine rejects an action.
pub fn handle_play_command(
    opts: PlayOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    if opts.rounds == 0 {
        ui::write_error(err, "rounds must be >= 1")?;
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }
    let seed = opts.seed.unwrap_or_else(rand::random);

    let mut agent: Option<Box<dyn Agent>> = match opts.agent.as_deref() {
        Some(name) => match create_agent(name, Some(seed)) {
            Ok(a) => Some(a),
            Err(e) => {
                ui::write_error(err, &e.to_string())?;
                return Err(e.into());
            }
        },
        None => None,
    };
    let mode = agent.as_ref().map_or("human", |a| a.name());
    writeln!(
        out,
        "play: mode={} rounds={} seed={} dealer={}",
        mode, opts.rounds, seed, opts.policy
    )?;

    let mut game = Game::new(opts.policy, Some(seed));
    let mut tally = OutcomeTally::default();

    'session: for i in 1..=opts.rounds {
        writeln!(out, "Round {}", i)?;
        let mut state = game.next_round()?;
        loop {
            writeln!(out, "{}", format_player_view(&state))?;
            let action = match agent.as_mut() {
                Some(a) => a.choose_action(&state),
                None => match prompt_action(out, err, stdin)? {
                    Some(action) => action,
                    None => break 'session,
                },
            };
            writeln!(out, "Action: {}", format_action(&action))?;

            let (next, round) = game.act(action)?;
            if round.has_round_ended {
                writeln!(out, "Your hand: {}", format_hand(game.player().hand()))?;
                writeln!(out, "Dealer hand: {}", format_hand(game.dealer().hand()))?;
                writeln!(out, "{}", format_round_result(&round))?;
                if let Some(outcome) = round.outcome {
                    tally.record(outcome);
                }
                break;
            }
            state = next;
        }
    }

    writeln!(out, "Session: played {}", tally.total())?;
    tally.write_report(out)?;
    Ok(())
}

/// Prompts until a usable action is typed. `None` means quit or EOF.
fn prompt_action(
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<Option<PlayerAction>, CliError> {
    loop {
        write!(out, "Enter action (hit/stand/q): ")?;
        out.flush()?;
        let Some(input) = read_stdin_line(stdin) else {
            return Ok(None);
        };
        match parse_player_action(&input) {
            ParseResult::Action(action) => return Ok(Some(action)),
            ParseResult::Quit => return Ok(None),
            ParseResult::Invalid(msg) => ui::write_error(err, &msg)?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn play(opts: PlayOptions, input: &str) -> (Result<(), CliError>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(input.as_bytes().to_vec());
        let result = handle_play_command(opts, &mut out, &mut err, &mut stdin);
        (
            result,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    fn human(rounds: u32) -> PlayOptions {
        PlayOptions {
            agent: None,
            rounds,
            seed: Some(42),
            policy: DealerPolicy::reach17(),
        }
    }

    #[test]
    fn standing_finishes_each_round() {
        let (result, out, _) = play(human(2), "s\nstand\n");
        assert!(result.is_ok());
        assert_eq!(out.matches("Result: ").count(), 2);
        assert!(out.contains("Session: played 2"));
    }

    #[test]
    fn quit_ends_session_early() {
        let (result, out, _) = play(human(3), "q\n");
        assert!(result.is_ok());
        assert!(!out.contains("Result: "));
        assert!(out.contains("Session: played 0"));
    }

    #[test]
    fn eof_behaves_like_quit() {
        let (result, out, _) = play(human(1), "");
        assert!(result.is_ok());
        assert!(out.contains("Session: played 0"));
    }

    #[test]
    fn invalid_input_reprompts() {
        let (result, out, err) = play(human(1), "double\nstand\n");
        assert!(result.is_ok());
        assert!(err.contains("Unrecognized action 'double'"));
        assert!(out.contains("Action: STAND"));
        assert_eq!(out.matches("Enter action").count(), 2);
    }

    #[test]
    fn agent_mode_needs_no_input() {
        let opts = PlayOptions {
            agent: Some("baseline".into()),
            rounds: 5,
            seed: Some(7),
            policy: DealerPolicy::Greedy,
        };
        let (result, out, _) = play(opts, "");
        assert!(result.is_ok());
        assert!(out.starts_with("play: mode=BaselineAgent"));
        assert!(!out.contains("Enter action"));
        assert_eq!(out.matches("Result: ").count(), 5);
    }

    #[test]
    fn zero_rounds_is_rejected() {
        let (result, _, err) = play(human(0), "");
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
        assert!(err.contains("rounds must be >= 1"));
    }
}
