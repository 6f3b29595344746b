//! Exit codes returned by [`crate::run`].

pub const SUCCESS: i32 = 0;

/// Any command failure, including argument errors.
pub const ERROR: i32 = 2;

/// Run stopped early (`BLACKJACK_SIM_BREAK_AFTER`).
pub const INTERRUPTED: i32 = 130;
