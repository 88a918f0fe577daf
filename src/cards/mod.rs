//! Card and deck model.

mod card;
mod deck;

pub use card::{Card, Rank, Suit};
pub use deck::{Deck, DeckSize};
