//! Command-line argument definitions.
//!
//! The clap derive types live here so `lib.rs` only has to dispatch.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "blackjack",
    version,
    about = "Deterministic Blackjack engine CLI"
)]
pub struct BlackjackCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play rounds interactively, or watch an agent play them
    Play {
        /// Agent that chooses actions; omit to play from stdin
        #[arg(long)]
        agent: Option<String>,
        #[arg(long)]
        rounds: Option<u32>,
        #[arg(long)]
        seed: Option<u64>,
        /// Dealer policy: greedy, threshold, reach<N>
        #[arg(long)]
        dealer: Option<String>,
    },
    /// Run many agent-driven rounds and report outcome rates
    Sim {
        #[arg(long)]
        rounds: Option<u32>,
        #[arg(long)]
        agent: Option<String>,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        dealer: Option<String>,
        /// Append one JSON record per round to this file
        #[arg(long)]
        output: Option<String>,
    },
    /// Aggregate outcome counts from a round history (JSONL or .zst)
    Stats {
        #[arg(long)]
        input: String,
    },
    /// Deal one opening position and print what the player sees
    Deal {
        #[arg(long)]
        seed: Option<u64>,
        /// Cards to deal first, e.g. "AS,10H,7D,KC"
        #[arg(long)]
        cards: Option<String>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
    /// Print a sample from the seeded generator
    Rng {
        #[arg(long)]
        seed: Option<u64>,
    },
}
