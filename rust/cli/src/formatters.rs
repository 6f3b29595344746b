//! Card, hand and outcome formatters for terminal display.
//!
//! Pure functions producing the compact notation the CLI prints. Suits use
//! Unicode symbols where the terminal supports them, with an ASCII letter
//! fallback.
//!
//! ## Example
//!
//! ```rust
//! use blackjack_engine::cards::{Card, Rank, Suit};
//! use blackjack_cli::formatters::format_card;
//!
//! let ace_spades = Card::new(Rank::Ace, Suit::Spades);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! ```

use blackjack_engine::cards::{Card, Rank, Suit};
use blackjack_engine::hand::Hand;
use blackjack_engine::player::PlayerAction;
use blackjack_engine::state::{Outcome, PlayerState, RoundState};

/// Whether the terminal can render suit symbols. On Windows only modern
/// terminals are assumed to; elsewhere always.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

/// Rank symbol as typed on the command line (`A`, `2`-`10`, `J`, `Q`, `K`).
pub fn format_rank(rank: &Rank) -> String {
    match rank {
        Rank::Ace => "A".to_string(),
        Rank::Jack => "J".to_string(),
        Rank::Queen => "Q".to_string(),
        Rank::King => "K".to_string(),
        other => (*other as u8).to_string(),
    }
}

pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit))
}

/// Space-separated cards in brackets, e.g. `[A♠ 7♦]`.
pub fn format_cards<I>(cards: I) -> String
where
    I: IntoIterator<Item = Card>,
{
    let parts: Vec<String> = cards.into_iter().map(|c| format_card(&c)).collect();
    format!("[{}]", parts.join(" "))
}

/// Cards plus total, marking soft totals: `[A♠ 7♦] 18 soft`.
pub fn format_hand(hand: &Hand) -> String {
    let soft = if hand.has_usable_ace() { " soft" } else { "" };
    format!(
        "{} {}{}",
        format_cards(hand.cards()),
        hand.calculate_total(),
        soft
    )
}

pub fn format_action(action: &PlayerAction) -> String {
    action.name().to_string()
}

pub fn format_outcome(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Won => "Player wins",
        Outcome::LostByPoints => "Dealer wins on points",
        Outcome::LostByBust => "Player busts",
        Outcome::Draw => "Push",
    }
    .to_string()
}

/// The two lines shown before each decision.
pub fn format_player_view(state: &PlayerState) -> String {
    format!(
        "Dealer shows: {} ({})\nYour hand: {}",
        format_card(&state.dealer_revealed_card),
        state.dealer_revealed_card.point_value(),
        format_hand(&state.player_hand)
    )
}

/// One-line summary of a finished round.
pub fn format_round_result(round: &RoundState) -> String {
    let totals = |v: Option<u32>| v.map_or_else(|| "-".to_string(), |t| t.to_string());
    let verdict = round
        .outcome
        .map_or_else(|| "In progress".to_string(), |o| format_outcome(&o));
    format!(
        "Result: {} (player {}, dealer {})",
        verdict,
        totals(round.player_total),
        totals(round.dealer_total)
    )
}
