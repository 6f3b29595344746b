//! Command handlers for the `blackjack` CLI.
//!
//! Every subcommand lives in its own module and follows the same shape:
//!
//! - Public handler: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams passed in as `&mut dyn Write` so tests can capture them
//! - Errors propagated as [`crate::CliError`]; `run` maps them to exit codes

pub mod cfg;
pub mod deal;
pub mod play;
pub mod rng;
pub mod sim;
pub mod stats;

pub use cfg::handle_cfg_command;
pub use deal::handle_deal_command;
pub use play::handle_play_command;
pub use rng::handle_rng_command;
pub use sim::handle_sim_command;
pub use stats::{OutcomeTally, handle_stats_command};
