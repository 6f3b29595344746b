//! Dealer drawing policies.
//!
//! A policy only decides whether the dealer takes another card. The game
//! performs the draw (including ace resolution) and hands back the new total,
//! so every decision sees the dealer's current hand.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::GameError;

/// Stopping total used by house rules when none is given.
pub const DEFAULT_THRESHOLD: u32 = 17;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum DealerPolicy {
    /// Draw while behind the player's total; stops only on meeting it or busting.
    Greedy,
    /// Draw while behind the player's total and below `threshold`.
    ReachThreshold { threshold: u32 },
}

impl Default for DealerPolicy {
    fn default() -> Self {
        DealerPolicy::reach17()
    }
}

impl DealerPolicy {
    pub fn reach17() -> Self {
        DealerPolicy::ReachThreshold {
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// Resolves a policy by name: `greedy`, `reach17`, `threshold` (17), or
    /// `reach<N>` for another stopping total.
    ///
    /// # Examples
    ///
    /// ```
    /// use blackjack_engine::dealer::DealerPolicy;
    /// use blackjack_engine::errors::GameError;
    ///
    /// assert_eq!(DealerPolicy::from_name("greedy"), Ok(DealerPolicy::Greedy));
    /// assert_eq!(
    ///     DealerPolicy::from_name("reach16"),
    ///     Ok(DealerPolicy::ReachThreshold { threshold: 16 })
    /// );
    /// assert!(matches!(
    ///     DealerPolicy::from_name("stand-on-soft-17"),
    ///     Err(GameError::UnimplementedPolicy(_))
    /// ));
    /// ```
    pub fn from_name(name: &str) -> Result<Self, GameError> {
        let lowered = name.trim().to_ascii_lowercase();
        match lowered.as_str() {
            "greedy" => Ok(DealerPolicy::Greedy),
            "threshold" | "reach" => Ok(DealerPolicy::reach17()),
            other => other
                .strip_prefix("reach")
                .and_then(|n| n.parse::<u32>().ok())
                .map(|threshold| DealerPolicy::ReachThreshold { threshold })
                .ok_or_else(|| GameError::UnimplementedPolicy(name.to_string())),
        }
    }

    /// Whether the dealer takes another card at `dealer_total` when the
    /// player stood on `target_total`.
    pub fn wants_card(&self, dealer_total: u32, target_total: u32) -> bool {
        match *self {
            DealerPolicy::Greedy => target_total > dealer_total,
            DealerPolicy::ReachThreshold { threshold } => {
                dealer_total < target_total && dealer_total < threshold
            }
        }
    }

    /// Plays the dealer's turn. `draw` deals one card to the dealer and
    /// returns the dealer's total afterwards. Returns the number of cards drawn.
    pub fn run<F>(&self, dealer_total: u32, target_total: u32, mut draw: F) -> Result<usize, GameError>
    where
        F: FnMut() -> Result<u32, GameError>,
    {
        let mut total = dealer_total;
        let mut drawn = 0;
        while self.wants_card(total, target_total) {
            total = draw()?;
            drawn += 1;
        }
        Ok(drawn)
    }
}

impl fmt::Display for DealerPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DealerPolicy::Greedy => write!(f, "greedy"),
            DealerPolicy::ReachThreshold { threshold } => write!(f, "reach{}", threshold),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scripted(totals: &[u32]) -> impl FnMut() -> Result<u32, GameError> + '_ {
        let mut next = totals.iter();
        move || next.next().copied().ok_or(GameError::PoolExhausted)
    }

    #[test]
    fn greedy_draws_until_target_met() {
        let drawn = DealerPolicy::Greedy
            .run(12, 18, scripted(&[15, 17, 21, 25]))
            .unwrap();
        assert_eq!(drawn, 3);
    }

    #[test]
    fn greedy_stops_on_equal_total() {
        let drawn = DealerPolicy::Greedy.run(20, 20, scripted(&[])).unwrap();
        assert_eq!(drawn, 0);
    }

    #[test]
    fn threshold_halts_even_when_behind() {
        let drawn = DealerPolicy::reach17().run(17, 20, scripted(&[])).unwrap();
        assert_eq!(drawn, 0);

        let drawn = DealerPolicy::reach17()
            .run(10, 20, scripted(&[14, 18, 30]))
            .unwrap();
        assert_eq!(drawn, 2);
    }

    #[test]
    fn threshold_stops_once_ahead_of_player() {
        let drawn = DealerPolicy::reach17().run(13, 12, scripted(&[])).unwrap();
        assert_eq!(drawn, 0);
    }

    #[test]
    fn draw_errors_propagate() {
        let err = DealerPolicy::Greedy.run(2, 21, scripted(&[5])).unwrap_err();
        assert_eq!(err, GameError::PoolExhausted);
    }

    #[test]
    fn names_round_trip() {
        for policy in [DealerPolicy::Greedy, DealerPolicy::reach17()] {
            assert_eq!(DealerPolicy::from_name(&policy.to_string()), Ok(policy));
        }
        assert_eq!(DealerPolicy::from_name("threshold"), Ok(DealerPolicy::reach17()));
        assert_eq!(
            DealerPolicy::from_name("house"),
            Err(GameError::UnimplementedPolicy("house".to_string()))
        );
    }
}
