//! Card identity: suits, ranks, and the immutable (rank, suit) pair.
//!
//! ## Rank ordering
//!
//! Ranks carry a fixed zero-based position in the full nine-rank order
//! (`6` through `A`). That position is `Rank::value()` and is the only
//! number ever used for card comparisons, regardless of which rank subset
//! a deck was built from.

use serde::{Deserialize, Serialize};

/// One of the four French suits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    /// All four suits in a fixed order.
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    /// Unicode glyph for display.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Card rank, ordered from `Six` (lowest) to `Ace` (highest).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    /// All nine ranks in ascending order.
    pub const ALL: [Rank; 9] = [
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Zero-based position in the full nine-rank order.
    ///
    /// Used for every card comparison in the engine.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Short label (`"6"`..`"10"`, `"J"`, `"Q"`, `"K"`, `"A"`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Immutable playing card, identified by its (rank, suit) pair.
///
/// A single physical deck is assumed: no two equal cards ever coexist in
/// any container at the same time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    /// Create a card from its rank and suit.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Rank position used for comparisons.
    #[must_use]
    pub const fn rank_value(self) -> u8 {
        self.rank.value()
    }

    /// Whether this card belongs to the given trump suit.
    #[must_use]
    pub fn is_trump(self, trump: Suit) -> bool {
        self.suit == trump
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_values_ascend() {
        for pair in Rank::ALL.windows(2) {
            assert!(pair[0].value() < pair[1].value());
        }
        assert_eq!(Rank::Six.value(), 0);
        assert_eq!(Rank::Ace.value(), 8);
    }

    #[test]
    fn test_card_identity() {
        let a = Card::new(Rank::Queen, Suit::Spades);
        let b = Card::new(Rank::Queen, Suit::Spades);
        let c = Card::new(Rank::Queen, Suit::Hearts);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_is_trump() {
        let card = Card::new(Rank::Ten, Suit::Clubs);
        assert!(card.is_trump(Suit::Clubs));
        assert!(!card.is_trump(Suit::Spades));
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::new(Rank::Ten, Suit::Hearts).to_string(), "10♥");
        assert_eq!(Card::new(Rank::Ace, Suit::Spades).to_string(), "A♠");
    }

    #[test]
    fn test_card_serde_round_trip() {
        let card = Card::new(Rank::Jack, Suit::Diamonds);
        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();
        assert_eq!(card, back);
    }
}
