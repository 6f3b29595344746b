//! Round history records, one JSON object per line.

use blackjack_engine::cards::Card;
use blackjack_engine::player::PlayerAction;
use blackjack_engine::state::Outcome;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::io_utils::ensure_parent_dir;

/// Everything needed to audit one simulated round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// `<yyyymmdd>-<seq>`, unique within one run
    pub round_id: String,
    /// Base seed of the run the round belongs to
    pub seed: Option<u64>,
    pub dealer: String,
    pub agent: String,
    pub actions: Vec<PlayerAction>,
    pub player_cards: Vec<Card>,
    pub dealer_cards: Vec<Card>,
    pub player_total: u32,
    pub dealer_total: u32,
    pub outcome: Outcome,
    /// RFC3339 time the record was written
    #[serde(default)]
    pub ts: Option<String>,
}

pub fn format_round_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

/// Appends records to a JSONL file and hands out round ids.
pub struct RoundLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl RoundLogger {
    /// Opens `path` for appending, creating it and its directory if needed.
    pub fn append<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        ensure_parent_dir(path.as_ref()).map_err(std::io::Error::other)?;
        let f = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    /// A logger that only numbers rounds, writing nothing.
    pub fn detached(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_round_id(&self.date, self.seq)
    }

    /// Writes one record, stamping `ts` when it is missing.
    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
        }
        Ok(())
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        if let Some(w) = &mut self.writer {
            w.flush()?;
        }
        Ok(())
    }
}
