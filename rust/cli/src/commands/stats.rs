//! Outcome statistics over a round history.
//!
//! Reads a JSONL file written by `sim --output` (plain, or `.zst`
//! compressed) and prints outcome counts and rates. Lines that are not
//! valid records are skipped and reported on stderr.

use crate::error::{BatchValidationError, CliError};
use crate::history::RoundRecord;
use crate::io_utils::read_text_auto;
use crate::ui;
use blackjack_engine::state::Outcome;
use std::io::Write;

/// Running count of round outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutcomeTally {
    pub won: u64,
    pub lost_by_points: u64,
    pub lost_by_bust: u64,
    pub draw: u64,
}

impl OutcomeTally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won => self.won += 1,
            Outcome::LostByPoints => self.lost_by_points += 1,
            Outcome::LostByBust => self.lost_by_bust += 1,
            Outcome::Draw => self.draw += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.won + self.lost() + self.draw
    }

    pub fn lost(&self) -> u64 {
        self.lost_by_points + self.lost_by_bust
    }

    /// Writes the counts with their share of all rounds.
    pub fn write_report(&self, out: &mut dyn Write) -> std::io::Result<()> {
        let total = self.total();
        writeln!(out, "Won: {} ({})", self.won, ui::percent(self.won, total))?;
        writeln!(
            out,
            "Lost: {} ({}) [points {}, bust {}]",
            self.lost(),
            ui::percent(self.lost(), total),
            self.lost_by_points,
            self.lost_by_bust
        )?;
        writeln!(out, "Draw: {} ({})", self.draw, ui::percent(self.draw, total))
    }
}

/// Handle the stats command.
///
/// # Errors
///
/// `CliError::InvalidInput` when the file cannot be read or holds no valid
/// record at all.
pub fn handle_stats_command(
    input: String,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let content = match read_text_auto(&input) {
        Ok(c) => c,
        Err(e) => {
            ui::write_error(err, &format!("Failed to read {}: {}", input, e))?;
            return Err(CliError::InvalidInput(format!(
                "Failed to read {}: {}",
                input, e
            )));
        }
    };

    let mut tally = OutcomeTally::default();
    let mut failures: Vec<BatchValidationError<usize>> = Vec::new();
    for (i, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<RoundRecord>(line) {
            Ok(rec) => tally.record(rec.outcome),
            Err(e) => failures.push(BatchValidationError {
                item_context: i + 1,
                message: e.to_string(),
            }),
        }
    }

    for failure in &failures {
        ui::display_warning(err, &format!("skipped line {}", failure))?;
    }
    if tally.total() == 0 {
        ui::write_error(err, "no valid round records")?;
        return Err(CliError::InvalidInput(format!(
            "{} holds no valid round records",
            input
        )));
    }

    writeln!(out, "Rounds: {}", tally.total())?;
    tally.write_report(out)?;
    if !failures.is_empty() {
        writeln!(out, "Skipped: {}", failures.len())?;
    }
    Ok(())
}
