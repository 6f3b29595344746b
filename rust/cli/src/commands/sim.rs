//! Simulation command: many agent-driven rounds on one seeded game.
//!
//! All rounds share a single [`Game`] whose generator is seeded once, so a
//! run is reproducible from its base seed as a whole. With `--output` each
//! round is appended to a JSONL history that `stats` can read back.
//!
//! # Environment Variables
//!
//! - `BLACKJACK_SIM_BREAK_AFTER`: stop after N rounds and exit with 130
//!   (read by `run` and passed in as [`SimOptions::break_after`])

use crate::commands::stats::OutcomeTally;
use crate::error::CliError;
use crate::history::{RoundLogger, RoundRecord};
use crate::ui;
use blackjack_ai::{create_agent, play_round};
use blackjack_engine::dealer::DealerPolicy;
use blackjack_engine::game::Game;
use std::io::Write;
use tracing::info;

pub const BREAK_AFTER_ENV: &str = "BLACKJACK_SIM_BREAK_AFTER";

#[derive(Debug, Clone)]
pub struct SimOptions {
    pub rounds: u32,
    pub agent: String,
    pub seed: Option<u64>,
    pub policy: DealerPolicy,
    pub output: Option<String>,
    /// Stop with `CliError::Interrupted` once this many rounds are done
    pub break_after: Option<usize>,
}

/// Handle the sim command.
pub fn handle_sim_command(
    opts: SimOptions,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if opts.rounds == 0 {
        ui::write_error(err, "rounds must be >= 1")?;
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }
    let total = opts.rounds as usize;
    let base_seed = opts.seed.unwrap_or_else(rand::random);

    let mut agent = match create_agent(&opts.agent, Some(base_seed)) {
        Ok(a) => a,
        Err(e) => {
            ui::write_error(err, &e.to_string())?;
            return Err(e.into());
        }
    };
    let mut logger = match opts.output.as_deref() {
        Some(path) => match RoundLogger::append(path) {
            Ok(l) => Some(l),
            Err(e) => {
                ui::write_error(err, &format!("Failed to open output file: {}", e))?;
                return Err(CliError::Io(e));
            }
        },
        None => None,
    };

    let mut game = Game::new(opts.policy, Some(base_seed));
    writeln!(
        out,
        "sim: rounds={} agent={} dealer={} seed={}",
        total,
        agent.name(),
        opts.policy,
        base_seed
    )?;
    info!(rounds = total, seed = base_seed, agent = agent.name(), policy = %opts.policy, "simulation started");

    let mut tally = OutcomeTally::default();
    for i in 0..total {
        let summary = play_round(&mut game, agent.as_mut())?;
        let outcome = summary
            .round
            .outcome
            .ok_or_else(|| CliError::Engine("round ended without an outcome".into()))?;
        tally.record(outcome);

        if let Some(logger) = logger.as_mut() {
            let rec = RoundRecord {
                round_id: logger.next_id(),
                seed: Some(base_seed),
                dealer: opts.policy.to_string(),
                agent: agent.name().to_string(),
                actions: summary.actions,
                player_cards: game.player().hand().cards().collect(),
                dealer_cards: game.dealer().hand().cards().collect(),
                player_total: summary.round.player_total.unwrap_or_default(),
                dealer_total: summary.round.dealer_total.unwrap_or_default(),
                outcome,
                ts: None,
            };
            logger.write(&rec)?;
        }

        let completed = i + 1;
        if opts.break_after == Some(completed) {
            if let Some(logger) = logger.as_mut() {
                logger.flush()?;
            }
            writeln!(out, "Interrupted: saved {}/{}", completed, total)?;
            return Err(CliError::Interrupted(format!(
                "Interrupted: saved {}/{}",
                completed, total
            )));
        }
    }
    if let Some(logger) = logger.as_mut() {
        logger.flush()?;
    }

    writeln!(out, "Simulated: {} rounds", total)?;
    tally.write_report(out)?;
    info!(
        rounds = total,
        won = tally.won,
        lost = tally.lost(),
        draw = tally.draw,
        "simulation finished"
    );
    Ok(())
}
