//! # Blackjack CLI Library
//!
//! Command-line harness for the deterministic Blackjack engine: interactive
//! and agent-driven play, bulk simulation with JSONL round histories, and
//! inspection helpers.
//!
//! ## Main Entry Point
//!
//! [`run`] parses the arguments, dispatches to a subcommand and returns the
//! process exit code.
//!
//! ```no_run
//! use std::io;
//! let args = vec!["blackjack", "sim", "--rounds", "100", "--seed", "7"];
//! let code = blackjack_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play rounds from stdin, or watch an agent play them
//! - `sim`: Run many agent-driven rounds, optionally writing a history
//! - `stats`: Aggregate outcome counts from a history file
//! - `deal`: Deal one opening position for inspection
//! - `cfg`: Display the resolved configuration
//! - `rng`: Show generator output for a seed

use clap::Parser;
use std::io::Write;

#[macro_use]
mod macros;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod history;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{BlackjackCli, Commands};
use commands::play::PlayOptions;
use commands::sim::{BREAK_AFTER_ENV, SimOptions};
use commands::{
    handle_cfg_command, handle_deal_command, handle_play_command, handle_rng_command,
    handle_sim_command, handle_stats_command,
};
use config::Config;

pub use commands::OutcomeTally;
pub use error::{BatchValidationError, CliError};

const COMMANDS: &[&str] = &["play", "sim", "stats", "deal", "cfg", "rng"];

/// Main entry point for the CLI application.
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors, `130` for interruptions
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["blackjack", "deal", "--seed", "42"];
/// let code = blackjack_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
///
/// # Available Commands
///
/// - `play [--agent NAME] [--rounds N] [--seed S] [--dealer P]`
/// - `sim [--rounds N] [--agent NAME] [--seed S] [--dealer P] [--output FILE]`
/// - `stats --input FILE`
/// - `deal [--seed S] [--cards LIST]`
/// - `cfg`
/// - `rng [--seed S]`
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match BlackjackCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return usage_error(e, out, err),
    };

    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out, err),
        Commands::Rng { seed } => handle_rng_command(seed, out),
        Commands::Stats { input } => handle_stats_command(input, out, err),
        cmd => match config::load() {
            Ok(cfg) => dispatch_game_command(cmd, &cfg, out, err),
            Err(e) => Err(e.into()),
        },
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::Interrupted(_)) => exit_code::INTERRUPTED,
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

/// Runs the commands that play rounds. Flags override `cfg`.
fn dispatch_game_command(
    cmd: Commands,
    cfg: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    match cmd {
        Commands::Play {
            agent,
            rounds,
            seed,
            dealer,
        } => {
            let opts = PlayOptions {
                agent,
                rounds: rounds.unwrap_or(cfg.rounds),
                seed: seed.or(cfg.seed),
                policy: resolve_policy(dealer.as_deref(), cfg)?,
            };
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            handle_play_command(opts, out, err, &mut stdin_lock)
        }
        Commands::Sim {
            rounds,
            agent,
            seed,
            dealer,
            output,
        } => {
            let opts = SimOptions {
                rounds: rounds.unwrap_or(cfg.rounds),
                agent: agent.unwrap_or_else(|| cfg.agent.clone()),
                seed: seed.or(cfg.seed),
                policy: resolve_policy(dealer.as_deref(), cfg)?,
                output,
                break_after: std::env::var(BREAK_AFTER_ENV)
                    .ok()
                    .and_then(|v| v.trim().parse::<usize>().ok()),
            };
            handle_sim_command(opts, out, err)
        }
        Commands::Deal { seed, cards } => {
            let policy = resolve_policy(None, cfg)?;
            handle_deal_command(seed.or(cfg.seed), cards, policy, out, err)
        }
        Commands::Cfg | Commands::Rng { .. } | Commands::Stats { .. } => Err(
            CliError::InvalidInput("command does not play rounds".to_string()),
        ),
    }
}

fn resolve_policy(
    flag: Option<&str>,
    cfg: &Config,
) -> Result<blackjack_engine::dealer::DealerPolicy, CliError> {
    let resolved = match flag {
        Some(name) => cfg.policy_named(name),
        None => cfg.dealer_policy(),
    };
    resolved.map_err(|e| CliError::InvalidInput(e.to_string()))
}

fn usage_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // help and version go to stdout
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            write_or_exit!(out, "{}", e);
            exit_code::SUCCESS
        }
        _ => {
            write_or_exit!(err, "{}", e);
            write_or_exit!(err, "Blackjack CLI");
            write_or_exit!(err, "Usage: blackjack <command> [options]\n");
            write_or_exit!(err, "Commands:");
            for c in COMMANDS {
                write_or_exit!(err, "  {}", c);
            }
            write_or_exit!(err, "\nFor full help, run: blackjack --help");
            exit_code::ERROR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_command_parses() {
        let commands = vec![
            vec!["blackjack", "cfg"],
            vec!["blackjack", "play"],
            vec!["blackjack", "play", "--agent", "random", "--rounds", "3"],
            vec!["blackjack", "sim", "--rounds", "1"],
            vec!["blackjack", "stats", "--input", "rounds.jsonl"],
            vec!["blackjack", "deal", "--cards", "AS,KD"],
            vec!["blackjack", "rng", "--seed", "1"],
        ];
        for args in commands {
            assert!(BlackjackCli::try_parse_from(&args).is_ok(), "{args:?}");
        }
    }

    #[test]
    fn stats_requires_input() {
        assert!(BlackjackCli::try_parse_from(["blackjack", "stats"]).is_err());
    }

    #[test]
    fn dealer_flag_overrides_config() {
        let cfg = Config::default();
        assert_eq!(
            resolve_policy(Some("greedy"), &cfg).unwrap(),
            blackjack_engine::dealer::DealerPolicy::Greedy
        );
        assert_eq!(
            resolve_policy(None, &cfg).unwrap(),
            blackjack_engine::dealer::DealerPolicy::reach17()
        );
        let e = resolve_policy(Some("h17"), &cfg).unwrap_err();
        assert!(e.to_string().contains("h17"));
    }
}
