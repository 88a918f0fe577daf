//! Players: seats, hands, and the decision strategy.
//!
//! ## Seat
//!
//! Exactly two players sit at a durak table. `Seat` is a type-safe
//! two-value identifier; roles (attacker/defender) are tracked in the
//! game state as the attacking seat, with the defender derived via
//! [`Seat::other`].
//!
//! ## Strategy
//!
//! A player is one record carrying a [`Strategy`] value rather than a
//! trait object: `External` players are driven entirely by the host
//! (human input), `Heuristic` players are driven by [`crate::ai`]
//! through the orchestrator.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use crate::cards::{Card, Rank, Suit};

/// One of the two seats at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    A,
    B,
}

impl Seat {
    /// Both seats in a fixed order.
    pub const ALL: [Seat; 2] = [Seat::A, Seat::B];

    /// The opposite seat.
    #[must_use]
    pub const fn other(self) -> Seat {
        match self {
            Seat::A => Seat::B,
            Seat::B => Seat::A,
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::A => f.write_str("seat A"),
            Seat::B => f.write_str("seat B"),
        }
    }
}

/// Per-seat data storage with O(1) access.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatPair<T> {
    a: T,
    b: T,
}

impl<T> SeatPair<T> {
    /// Create a pair from the seat A and seat B values.
    #[must_use]
    pub fn new(a: T, b: T) -> Self {
        Self { a, b }
    }
}

impl<T> Index<Seat> for SeatPair<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &T {
        match seat {
            Seat::A => &self.a,
            Seat::B => &self.b,
        }
    }
}

impl<T> IndexMut<Seat> for SeatPair<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut T {
        match seat {
            Seat::A => &mut self.a,
            Seat::B => &mut self.b,
        }
    }
}

/// How a player's decisions are made.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Decisions arrive from outside the engine (a human at a UI).
    External,
    /// Decisions come from the built-in heuristics via `computer_move`.
    Heuristic,
}

/// A player: a name, a hand of cards, and a decision strategy.
///
/// The hand keeps insertion order between sorts so renderers see a stable
/// layout; [`Player::sort_hand`] re-orders it for display and AI scans.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    hand: Vec<Card>,
    strategy: Strategy,
}

impl Player {
    /// Create a player with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>, strategy: Strategy) -> Self {
        Self {
            name: name.into(),
            hand: Vec::new(),
            strategy,
        }
    }

    /// The player's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The player's decision strategy.
    #[must_use]
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Whether this player is heuristic-driven.
    #[must_use]
    pub fn is_computer(&self) -> bool {
        self.strategy == Strategy::Heuristic
    }

    /// The hand in its current order.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Number of cards held.
    #[must_use]
    pub fn hand_len(&self) -> usize {
        self.hand.len()
    }

    /// Whether the hand is empty.
    #[must_use]
    pub fn hand_is_empty(&self) -> bool {
        self.hand.is_empty()
    }

    /// Add a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Remove a card from the hand.
    ///
    /// Removing an absent card is a no-op; callers validate presence
    /// before acting on it.
    pub fn remove_card(&mut self, card: Card) {
        if let Some(pos) = self.hand.iter().position(|&c| c == card) {
            self.hand.remove(pos);
        }
    }

    /// Whether the hand contains the card.
    #[must_use]
    pub fn has_card(&self, card: Card) -> bool {
        self.hand.contains(&card)
    }

    /// Whether the hand contains any card of the given rank.
    #[must_use]
    pub fn has_rank(&self, rank: Rank) -> bool {
        self.hand.iter().any(|c| c.rank == rank)
    }

    /// All held cards of the given rank.
    #[must_use]
    pub fn cards_of_rank(&self, rank: Rank) -> Vec<Card> {
        self.hand.iter().copied().filter(|c| c.rank == rank).collect()
    }

    /// Sort the hand for display and AI scans: non-trump cards first,
    /// each group ascending by rank value.
    pub fn sort_hand(&mut self, trump: Suit) {
        self.hand
            .sort_by_key(|card| (card.is_trump(trump), card.rank_value()));
    }

    /// Replace the whole hand (used by save/load).
    pub fn set_hand(&mut self, hand: Vec<Card>) {
        self.hand = hand;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    #[test]
    fn test_seat_other() {
        assert_eq!(Seat::A.other(), Seat::B);
        assert_eq!(Seat::B.other(), Seat::A);
    }

    #[test]
    fn test_add_remove_query() {
        let mut player = Player::new("Anna", Strategy::External);
        let six = card(Rank::Six, Suit::Spades);
        let ten = card(Rank::Ten, Suit::Hearts);

        player.add_card(six);
        player.add_card(ten);
        assert!(player.has_card(six));
        assert!(player.has_rank(Rank::Ten));
        assert_eq!(player.cards_of_rank(Rank::Six), vec![six]);

        player.remove_card(six);
        assert!(!player.has_card(six));
        assert_eq!(player.hand_len(), 1);
    }

    #[test]
    fn test_remove_absent_card_is_noop() {
        let mut player = Player::new("Anna", Strategy::External);
        player.add_card(card(Rank::Six, Suit::Spades));

        player.remove_card(card(Rank::Ace, Suit::Clubs));

        assert_eq!(player.hand_len(), 1);
    }

    #[test]
    fn test_sort_hand_trumps_last() {
        let mut player = Player::new("Anna", Strategy::External);
        player.add_card(card(Rank::Seven, Suit::Hearts)); // trump
        player.add_card(card(Rank::Ace, Suit::Spades));
        player.add_card(card(Rank::Six, Suit::Clubs));
        player.add_card(card(Rank::King, Suit::Hearts)); // trump

        player.sort_hand(Suit::Hearts);

        assert_eq!(
            player.hand(),
            &[
                card(Rank::Six, Suit::Clubs),
                card(Rank::Ace, Suit::Spades),
                card(Rank::Seven, Suit::Hearts),
                card(Rank::King, Suit::Hearts),
            ]
        );
    }

    #[test]
    fn test_seat_pair_index() {
        let mut pair = SeatPair::new(1, 2);
        assert_eq!(pair[Seat::A], 1);
        pair[Seat::B] = 5;
        assert_eq!(pair[Seat::B], 5);
    }
}
