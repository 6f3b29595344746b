use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::GameError;

/// Represents one of the four suits in a standard 52-card deck.
/// Used as a component of [`Card`] to fully define a playing card.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Spades suit (♠)
    Spades,
    /// Hearts suit (♥)
    Hearts,
    /// Clubs suit (♣)
    Clubs,
    /// Diamonds suit (♦)
    Diamonds,
}

impl Suit {
    pub fn name(self) -> &'static str {
        match self {
            Suit::Spades => "spades",
            Suit::Hearts => "hearts",
            Suit::Clubs => "clubs",
            Suit::Diamonds => "diamonds",
        }
    }

    fn from_letter(c: char) -> Option<Suit> {
        match c.to_ascii_lowercase() {
            's' => Some(Suit::Spades),
            'h' => Some(Suit::Hearts),
            'c' => Some(Suit::Clubs),
            'd' => Some(Suit::Diamonds),
            _ => None,
        }
    }
}

/// Represents the rank of a playing card from Ace through King.
/// The discriminant is the card's face number (Ace = 1, King = 13).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Ace (1), worth 11 until demoted
    Ace = 1,
    /// Rank 2
    Two,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack (11)
    Jack,
    /// Queen (12)
    Queen,
    /// King (13)
    King,
}

impl Rank {
    pub fn from_u8(v: u8) -> Option<Rank> {
        match v {
            1 => Some(Rank::Ace),
            2 => Some(Rank::Two),
            3 => Some(Rank::Three),
            4 => Some(Rank::Four),
            5 => Some(Rank::Five),
            6 => Some(Rank::Six),
            7 => Some(Rank::Seven),
            8 => Some(Rank::Eight),
            9 => Some(Rank::Nine),
            10 => Some(Rank::Ten),
            11 => Some(Rank::Jack),
            12 => Some(Rank::Queen),
            13 => Some(Rank::King),
            _ => None,
        }
    }

    /// Point value before any ace demotion: 11 for an Ace, 10 for Ten and
    /// the face cards, the face number otherwise.
    pub fn base_value(self) -> u32 {
        match self {
            Rank::Ace => 11,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
            r => r as u32,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Rank::Ace => "Ace",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "Jack",
            Rank::Queen => "Queen",
            Rank::King => "King",
        }
    }

    fn from_symbol(s: &str) -> Option<Rank> {
        match s.to_ascii_uppercase().as_str() {
            "A" => Some(Rank::Ace),
            "T" | "10" => Some(Rank::Ten),
            "J" => Some(Rank::Jack),
            "Q" => Some(Rank::Queen),
            "K" => Some(Rank::King),
            n => n.parse::<u8>().ok().filter(|v| (2..=9).contains(v)).and_then(Rank::from_u8),
        }
    }
}

/// A single playing card. Cards are immutable values; equality is by
/// rank and suit. Ace demotion is tracked by the [`crate::hand::Hand`]
/// holding the card, never on the card itself.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The rank of the card (Ace through King)
    pub rank: Rank,
    /// The suit of the card
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    pub fn point_value(&self) -> u32 {
        self.rank.base_value()
    }

    pub fn is_ace(&self) -> bool {
        self.rank == Rank::Ace
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.rank.name(), self.suit.name())
    }
}

/// Parses the short notation used on the command line: rank symbol followed
/// by a suit letter, e.g. `AS`, `10h`, `Td`, `7c`.
impl FromStr for Card {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let suit = chars
            .next_back()
            .and_then(Suit::from_letter)
            .ok_or_else(|| GameError::InvalidCard(s.to_string()))?;
        let rank =
            Rank::from_symbol(chars.as_str()).ok_or_else(|| GameError::InvalidCard(s.to_string()))?;
        Ok(Card { rank, suit })
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Spades, Suit::Hearts, Suit::Clubs, Suit::Diamonds]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ]
}

/// The canonical 52-card template every round's pool is rebuilt from.
pub fn full_deck() -> Vec<Card> {
    let mut v = Vec::with_capacity(52);
    for &s in &all_suits() {
        for &r in &all_ranks() {
            v.push(Card { rank: r, suit: s });
        }
    }
    v
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_values_follow_blackjack_rules() {
        assert_eq!(Rank::Ace.base_value(), 11);
        assert_eq!(Rank::Seven.base_value(), 7);
        for r in [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King] {
            assert_eq!(r.base_value(), 10);
        }
    }

    #[test]
    fn parses_short_notation() {
        assert_eq!("AS".parse::<Card>().unwrap(), Card::new(Rank::Ace, Suit::Spades));
        assert_eq!("10h".parse::<Card>().unwrap(), Card::new(Rank::Ten, Suit::Hearts));
        assert_eq!("Td".parse::<Card>().unwrap(), Card::new(Rank::Ten, Suit::Diamonds));
        assert_eq!("7c".parse::<Card>().unwrap(), Card::new(Rank::Seven, Suit::Clubs));
        assert!(matches!("1s".parse::<Card>(), Err(GameError::InvalidCard(_))));
        assert!(matches!("Kx".parse::<Card>(), Err(GameError::InvalidCard(_))));
        assert!("".parse::<Card>().is_err());
    }

    #[test]
    fn display_matches_long_form() {
        assert_eq!(Card::new(Rank::Queen, Suit::Clubs).to_string(), "Queen of clubs");
    }
}
