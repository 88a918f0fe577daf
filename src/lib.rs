//! # durak-core
//!
//! Rules engine for the durak ("fool") card game: legal-play
//! enforcement, attacker/defender role tracking, round resolution, a
//! heuristic computer opponent, and save/undo of game state.
//!
//! ## Design Principles
//!
//! 1. **Engine, not UI**: rendering and input are external collaborators.
//!    Drivers call orchestrator actions and re-read state to render.
//!
//! 2. **Deterministic by injection**: all randomness flows through a
//!    seedable [`GameRng`], so deals and tie-breaks are reproducible.
//!
//! 3. **Failures are results**: illegal moves and persistence problems
//!    return `Err` and leave state untouched; no API sequence panics.
//!
//! ## Modules
//!
//! - `cards`: card identity, rank ordering, deck variants, trump selection
//! - `core`: errors, RNG, seats, players, decision strategies
//! - `state`: the table and the game state with its legality predicates
//! - `ai`: pure attack/defense/take heuristics for the computer opponent
//! - `game`: the orchestrator (actions, undo history, computer driver)
//! - `log`: the inert decision-recording side channel
//! - `save`: versioned JSON save files and the save directory handle

pub mod ai;
pub mod cards;
pub mod core;
pub mod game;
pub mod log;
pub mod save;
pub mod state;

// Re-export commonly used types
pub use crate::cards::{Card, Deck, DeckSize, Rank, Suit};
pub use crate::core::{GameError, GameRng, Player, Seat, SeatPair, Strategy};
pub use crate::game::{Durak, DurakBuilder, COMPUTER_NAME};
pub use crate::log::{DecisionLog, DecisionRecord, LoggedAction, Snapshot};
pub use crate::save::{SaveFile, SaveStore, SavedState, SAVE_VERSION};
pub use crate::state::{GameState, Table, TableSlot, HAND_SIZE};
