//! Input parsing for interactive play and card lists.

use blackjack_engine::cards::Card;
use blackjack_engine::player::PlayerAction;

/// Outcome of parsing one line typed at the action prompt.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    Action(PlayerAction),
    /// `q` or `quit`
    Quit,
    /// Unusable input, with the message to show
    Invalid(String),
}

/// Parses an action line (case-insensitive): `h`/`hit`, `s`/`stand`, `q`/`quit`.
///
/// # Example
///
/// ```rust
/// # use blackjack_cli::validation::{parse_player_action, ParseResult};
/// use blackjack_engine::player::PlayerAction;
///
/// assert_eq!(parse_player_action("H"), ParseResult::Action(PlayerAction::Hit));
/// assert_eq!(parse_player_action("quit"), ParseResult::Quit);
/// assert!(matches!(parse_player_action("double"), ParseResult::Invalid(_)));
/// ```
pub fn parse_player_action(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }
    if input == "q" || input == "quit" {
        return ParseResult::Quit;
    }
    match input.parse::<PlayerAction>() {
        Ok(action) => ParseResult::Action(action),
        Err(_) => ParseResult::Invalid(format!(
            "Unrecognized action '{}'. Use hit (h), stand (s) or quit (q)",
            input
        )),
    }
}

/// Parses a comma- or whitespace-separated card list such as `"AS, 10h KD"`.
/// Duplicates are left for the card pool to reject.
pub fn parse_card_list(input: &str) -> Result<Vec<Card>, String> {
    let cards = input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<Card>().map_err(|e| e.to_string()))
        .collect::<Result<Vec<_>, _>>()?;
    if cards.is_empty() {
        return Err("card list is empty".to_string());
    }
    Ok(cards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use blackjack_engine::cards::{Rank, Suit};

    #[test]
    fn action_aliases() {
        assert_eq!(parse_player_action("hit"), ParseResult::Action(PlayerAction::Hit));
        assert_eq!(parse_player_action(" s "), ParseResult::Action(PlayerAction::Stand));
        assert_eq!(parse_player_action("Q"), ParseResult::Quit);
    }

    #[test]
    fn empty_and_unknown_input_is_invalid() {
        assert_eq!(
            parse_player_action("   "),
            ParseResult::Invalid("Empty input".to_string())
        );
        match parse_player_action("split") {
            ParseResult::Invalid(msg) => assert!(msg.contains("split")),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn card_lists_accept_mixed_separators() {
        let cards = parse_card_list("AS,10h  KD").unwrap();
        assert_eq!(
            cards,
            vec![
                Card::new(Rank::Ace, Suit::Spades),
                Card::new(Rank::Ten, Suit::Hearts),
                Card::new(Rank::King, Suit::Diamonds),
            ]
        );
    }

    #[test]
    fn card_lists_report_bad_notation() {
        let e = parse_card_list("AS,ZZ").unwrap_err();
        assert!(e.contains("ZZ"), "{e}");
        assert!(parse_card_list(" , ").is_err());
    }
}
