//! Engine error type.
//!
//! Illegal moves and persistence failures are recoverable: the API reports
//! them as `Err` and leaves the game state untouched. The only fatal
//! variant is an unsupported deck size at construction.

use thiserror::Error;

use crate::cards::Card;

/// Everything that can go wrong when driving the engine.
#[derive(Debug, Error)]
pub enum GameError {
    /// Construction was asked for a deck size other than 36, 24, or 20.
    #[error("unsupported deck size: {0} cards")]
    UnsupportedDeckSize(usize),

    /// The acting player does not hold the card.
    #[error("card {0} is not in hand")]
    NotInHand(Card),

    /// The card's rank does not match any rank already on the table.
    #[error("card {0} cannot be added to the table")]
    IllegalAttack(Card),

    /// No undefended table slot carries that attack card.
    #[error("no undefended attack {0} on the table")]
    NoMatchingAttack(Card),

    /// The defense card does not beat the attack card.
    #[error("{defense} does not beat {attack}")]
    CannotBeat { attack: Card, defense: Card },

    /// Undo was requested with an empty history.
    #[error("no moves to undo")]
    NothingToUndo,

    /// No save file with that name exists in the store.
    #[error("save '{0}' not found")]
    SaveNotFound(String),

    /// The save file exists but could not be decoded.
    #[error("corrupt save file: {0}")]
    CorruptSave(String),

    /// The save file was written by an incompatible schema version.
    #[error("unsupported save version: {0}")]
    UnsupportedSaveVersion(u32),

    /// Filesystem failure while saving or loading.
    #[error("save i/o error: {0}")]
    Io(#[from] std::io::Error),
}
