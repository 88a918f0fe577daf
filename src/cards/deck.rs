//! Deck construction, shuffling, drawing, and trump selection.
//!
//! A deck is built once per game from a configured rank subset crossed
//! with all four suits. It only ever shrinks, via [`Deck::draw`].

use serde::{Deserialize, Serialize};

use super::card::{Card, Rank, Suit};
use crate::core::{GameError, GameRng};

/// Supported deck sizes for a deal.
///
/// The 24- and 20-card variants drop the lowest ranks; rank values are
/// unaffected (an Ace is worth 8 in every variant).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeckSize {
    /// 36 cards: every rank from `6` up.
    ThirtySix,
    /// 24 cards: ranks from `9` up.
    TwentyFour,
    /// 20 cards: ranks from `10` up.
    Twenty,
}

impl DeckSize {
    /// Map a raw card count to a deck size.
    ///
    /// Any count other than 36, 24, or 20 is a configuration error.
    pub fn from_card_count(count: usize) -> Result<Self, GameError> {
        match count {
            36 => Ok(DeckSize::ThirtySix),
            24 => Ok(DeckSize::TwentyFour),
            20 => Ok(DeckSize::Twenty),
            other => Err(GameError::UnsupportedDeckSize(other)),
        }
    }

    /// Number of physical cards in this deck variant.
    #[must_use]
    pub const fn card_count(self) -> usize {
        match self {
            DeckSize::ThirtySix => 36,
            DeckSize::TwentyFour => 24,
            DeckSize::Twenty => 20,
        }
    }

    /// The rank subset included in this deck variant, ascending.
    #[must_use]
    pub fn ranks(self) -> &'static [Rank] {
        match self {
            DeckSize::ThirtySix => &Rank::ALL,
            DeckSize::TwentyFour => &Rank::ALL[3..],
            DeckSize::Twenty => &Rank::ALL[4..],
        }
    }
}

/// Ordered sequence of remaining cards plus the trump selection.
///
/// Cards are drawn from the end of the internal vec. The trump indicator
/// card stays in the deck after [`Deck::set_trump`] and is eventually
/// drawn like any other card.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
    trump_suit: Option<Suit>,
    trump_card: Option<Card>,
}

/// Two decks are equal when they hold the same card sequence and trump
/// suit. The trump indicator is a transient display hint and is not part
/// of deck identity (save files do not carry it).
impl PartialEq for Deck {
    fn eq(&self, other: &Self) -> bool {
        self.cards == other.cards && self.trump_suit == other.trump_suit
    }
}

impl Eq for Deck {}

impl Deck {
    /// Build an unshuffled deck from the given size's rank subset crossed
    /// with all four suits.
    #[must_use]
    pub fn new(size: DeckSize) -> Self {
        let cards = size
            .ranks()
            .iter()
            .flat_map(|&rank| Suit::ALL.iter().map(move |&suit| Card::new(rank, suit)))
            .collect();

        Self {
            cards,
            trump_suit: None,
            trump_card: None,
        }
    }

    /// Rebuild a deck from an explicit card sequence (used by save/load).
    #[must_use]
    pub fn from_parts(cards: Vec<Card>, trump_suit: Option<Suit>) -> Self {
        Self {
            cards,
            trump_suit,
            trump_card: None,
        }
    }

    /// Shuffle the remaining cards into a uniform random order.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Remove and return the top card, or `None` when the deck is empty.
    ///
    /// An empty deck is a normal late-game condition, not an error.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Select the trump suit from the current last card of the deck.
    ///
    /// Called exactly once per game, after the initial shuffle and before
    /// dealing. The indicator card remains in the deck and is drawn
    /// normally later.
    pub fn set_trump(&mut self) {
        if let Some(&card) = self.cards.last() {
            self.trump_card = Some(card);
            self.trump_suit = Some(card.suit);
        }
    }

    /// The selected trump suit, if [`Deck::set_trump`] has run.
    #[must_use]
    pub fn trump_suit(&self) -> Option<Suit> {
        self.trump_suit
    }

    /// The trump indicator card, while it is known.
    #[must_use]
    pub fn trump_card(&self) -> Option<Card> {
        self.trump_card
    }

    /// Remaining cards, bottom of the draw order first.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the deck has been exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deck_sizes() {
        assert_eq!(Deck::new(DeckSize::ThirtySix).len(), 36);
        assert_eq!(Deck::new(DeckSize::TwentyFour).len(), 24);
        assert_eq!(Deck::new(DeckSize::Twenty).len(), 20);
    }

    #[test]
    fn test_from_card_count() {
        assert_eq!(DeckSize::from_card_count(36).unwrap(), DeckSize::ThirtySix);
        assert_eq!(DeckSize::from_card_count(24).unwrap(), DeckSize::TwentyFour);
        assert_eq!(DeckSize::from_card_count(20).unwrap(), DeckSize::Twenty);
        assert!(DeckSize::from_card_count(52).is_err());
        assert!(DeckSize::from_card_count(0).is_err());
    }

    #[test]
    fn test_short_decks_keep_rank_values() {
        let ranks = DeckSize::Twenty.ranks();
        assert_eq!(ranks.first(), Some(&Rank::Ten));
        assert_eq!(ranks.first().unwrap().value(), 4);
    }

    #[test]
    fn test_no_duplicates() {
        let deck = Deck::new(DeckSize::ThirtySix);
        let mut seen = std::collections::HashSet::new();
        for &card in deck.cards() {
            assert!(seen.insert(card), "duplicate card {card}");
        }
    }

    #[test]
    fn test_draw_from_top() {
        let mut deck = Deck::new(DeckSize::Twenty);
        let expected = *deck.cards().last().unwrap();
        assert_eq!(deck.draw(), Some(expected));
        assert_eq!(deck.len(), 19);
    }

    #[test]
    fn test_draw_empty_is_none() {
        let mut deck = Deck::from_parts(vec![], None);
        assert_eq!(deck.draw(), None);
    }

    #[test]
    fn test_shuffle_is_seeded() {
        let mut a = Deck::new(DeckSize::ThirtySix);
        let mut b = Deck::new(DeckSize::ThirtySix);
        a.shuffle(&mut GameRng::new(7));
        b.shuffle(&mut GameRng::new(7));
        assert_eq!(a.cards(), b.cards());

        let mut c = Deck::new(DeckSize::ThirtySix);
        c.shuffle(&mut GameRng::new(8));
        assert_ne!(a.cards(), c.cards());
    }

    #[test]
    fn test_set_trump_keeps_indicator_in_deck() {
        let mut deck = Deck::new(DeckSize::ThirtySix);
        deck.shuffle(&mut GameRng::new(42));
        deck.set_trump();

        let indicator = deck.trump_card().unwrap();
        assert_eq!(deck.trump_suit(), Some(indicator.suit));
        assert_eq!(deck.len(), 36);
        assert!(deck.cards().contains(&indicator));

        // The indicator stays in the deck and comes out via a normal draw.
        assert_eq!(deck.draw(), Some(indicator));
    }
}
