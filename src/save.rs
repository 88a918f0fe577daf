//! Versioned save files.
//!
//! Saves are explicit-schema JSON (`SaveFile`, version 1): field names
//! are stable and the format is testable independent of the engine's
//! in-memory layout. A [`SaveStore`] is an explicitly opened directory
//! handle; hosts open it once before any save/load, there is no
//! process-wide directory initialization.
//!
//! Loading parses and validates the whole file before touching any
//! in-memory game, so a missing or corrupt save never leaves a game
//! partially overwritten.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::cards::{Card, Deck, Suit};
use crate::core::{GameError, Player, Seat, SeatPair, Strategy};
use crate::game::Durak;
use crate::log::DecisionLog;
use crate::state::{GameState, Table, TableSlot};

/// Current save schema version.
pub const SAVE_VERSION: u32 = 1;

/// Extension appended to save names that lack it.
pub const SAVE_EXTENSION: &str = "save.json";

/// Top-level save file: the current state plus the undo history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveFile {
    pub version: u32,
    pub vs_computer: bool,
    pub state: SavedState,
    pub history: Vec<SavedState>,
}

/// One serialized game state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedState {
    /// Seat A then seat B.
    pub players: [SavedPlayer; 2],
    pub deck: SavedDeck,
    /// Attacker by name; the role is re-derived by name match on load.
    pub attacker: String,
    pub table: Vec<SavedSlot>,
    pub game_over: bool,
    pub winner: Option<String>,
}

/// A player's name and hand.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedPlayer {
    pub name: String,
    pub hand: Vec<Card>,
}

/// The remaining deck and the trump suit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedDeck {
    pub cards: Vec<Card>,
    pub trump_suit: Suit,
}

/// One table slot: the attack and its answer, if any.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSlot {
    pub attack: Card,
    pub defense: Option<Card>,
}

impl SavedState {
    /// Capture a game state into its serialized form.
    #[must_use]
    pub fn capture(state: &GameState) -> Self {
        let saved_player = |seat: Seat| SavedPlayer {
            name: state.player(seat).name().to_string(),
            hand: state.player(seat).hand().to_vec(),
        };

        Self {
            players: [saved_player(Seat::A), saved_player(Seat::B)],
            deck: SavedDeck {
                cards: state.deck().cards().to_vec(),
                trump_suit: state.trump_suit(),
            },
            attacker: state.player(state.attacker()).name().to_string(),
            table: state
                .table()
                .slots()
                .iter()
                .map(|slot| SavedSlot {
                    attack: slot.attack,
                    defense: slot.defense,
                })
                .collect(),
            game_over: state.is_over(),
            winner: state
                .winner()
                .map(|seat| state.player(seat).name().to_string()),
        }
    }

    /// Rebuild a game state.
    ///
    /// Seat B is heuristic-driven when the save was a vs-computer game;
    /// games are always constructed with the human at seat A. Roles and
    /// the winner are re-derived by name match: a name that matches
    /// neither player resolves to seat B.
    #[must_use]
    pub fn restore(&self, vs_computer: bool) -> GameState {
        let strategy_b = if vs_computer {
            Strategy::Heuristic
        } else {
            Strategy::External
        };
        let mut player_a = Player::new(self.players[0].name.clone(), Strategy::External);
        player_a.set_hand(self.players[0].hand.clone());
        let mut player_b = Player::new(self.players[1].name.clone(), strategy_b);
        player_b.set_hand(self.players[1].hand.clone());

        let seat_by_name = |name: &str| {
            if name == self.players[0].name {
                Seat::A
            } else {
                Seat::B
            }
        };
        let attacker = seat_by_name(&self.attacker);
        let winner = self.winner.as_deref().map(seat_by_name);

        let table = Table::from_slots(self.table.iter().map(|slot| TableSlot {
            attack: slot.attack,
            defense: slot.defense,
        }));

        GameState::from_parts(
            SeatPair::new(player_a, player_b),
            Deck::from_parts(self.deck.cards.clone(), Some(self.deck.trump_suit)),
            self.deck.trump_suit,
            attacker,
            table,
            self.game_over,
            winner,
        )
    }
}

/// An opened save directory.
///
/// Created explicitly by the host before any save/load; opening creates
/// the directory when absent.
#[derive(Clone, Debug)]
pub struct SaveStore {
    root: PathBuf,
}

impl SaveStore {
    /// Open (creating if needed) a save directory.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, GameError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// The directory this store writes into.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Full path for a save name, appending the extension when missing.
    #[must_use]
    pub fn path_for(&self, name: &str) -> PathBuf {
        if name.ends_with(SAVE_EXTENSION) {
            self.root.join(name)
        } else {
            self.root.join(format!("{name}.{SAVE_EXTENSION}"))
        }
    }

    /// Write a save file.
    pub fn write(&self, name: &str, save: &SaveFile) -> Result<PathBuf, GameError> {
        let path = self.path_for(name);
        let json = serde_json::to_string_pretty(save)
            .map_err(|e| GameError::CorruptSave(e.to_string()))?;
        fs::write(&path, json)?;
        Ok(path)
    }

    /// Read and validate a save file.
    pub fn read(&self, name: &str) -> Result<SaveFile, GameError> {
        let path = self.path_for(name);
        let json = fs::read_to_string(&path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                GameError::SaveNotFound(name.to_string())
            } else {
                GameError::Io(e)
            }
        })?;
        let save: SaveFile =
            serde_json::from_str(&json).map_err(|e| GameError::CorruptSave(e.to_string()))?;
        if save.version != SAVE_VERSION {
            return Err(GameError::UnsupportedSaveVersion(save.version));
        }
        Ok(save)
    }

    /// Names of all saves in the store.
    pub fn list(&self) -> Result<Vec<String>, GameError> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if let Some(name) = entry.file_name().to_str() {
                if let Some(stem) = name.strip_suffix(&format!(".{SAVE_EXTENSION}")) {
                    names.push(stem.to_string());
                }
            }
        }
        names.sort();
        Ok(names)
    }

    /// Persist a decision log as plain JSON.
    pub fn write_decision_log(&self, name: &str, log: &DecisionLog) -> Result<PathBuf, GameError> {
        let path = self.root.join(format!("{name}.json"));
        let json = serde_json::to_string_pretty(log)
            .map_err(|e| GameError::CorruptSave(e.to_string()))?;
        fs::write(&path, json)?;
        Ok(path)
    }

    /// Read a previously persisted decision log.
    pub fn read_decision_log(&self, name: &str) -> Result<DecisionLog, GameError> {
        let path = self.root.join(format!("{name}.json"));
        let json = fs::read_to_string(&path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                GameError::SaveNotFound(name.to_string())
            } else {
                GameError::Io(e)
            }
        })?;
        serde_json::from_str(&json).map_err(|e| GameError::CorruptSave(e.to_string()))
    }
}

impl Durak {
    /// Save this game (current state and undo history) into the store.
    pub fn save_game(&self, store: &SaveStore, name: &str) -> Result<PathBuf, GameError> {
        let save = SaveFile {
            version: SAVE_VERSION,
            vs_computer: self.vs_computer(),
            state: SavedState::capture(self.state()),
            history: self
                .snapshot_history()
                .iter()
                .map(SavedState::capture)
                .collect(),
        };
        let path = store.write(name, &save)?;
        info!(path = %path.display(), "game saved");
        Ok(path)
    }

    /// Replace this game with one loaded from the store.
    ///
    /// The file is fully parsed and validated first; on any failure the
    /// current game is left untouched.
    pub fn load_game(&mut self, store: &SaveStore, name: &str) -> Result<(), GameError> {
        let save = store.read(name)?;
        let state = save.state.restore(save.vs_computer);
        let history = save
            .history
            .iter()
            .map(|s| s.restore(save.vs_computer))
            .collect();
        self.install(state, history, save.vs_computer);
        info!(name, "game loaded");
        Ok(())
    }
}
