//! Decision log: an inert recording side channel.
//!
//! When wired in, the orchestrator appends one record per successful
//! action, each carrying a snapshot of the game as the computer seat saw
//! it. Nothing in the engine ever reads the log back; games behave
//! identically with or without it. Hosts can persist it through
//! [`crate::save::SaveStore`] for offline analysis.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, Suit};
use crate::state::TableSlot;

/// The game as one seat saw it when an action resolved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// The observed seat's hand.
    pub hand: Vec<Card>,
    /// The table after the action.
    pub table: Vec<TableSlot>,
    /// Trump suit for the deal.
    pub trump_suit: Suit,
    /// Cards left in the deck.
    pub deck_len: usize,
    /// Opponent hand size (their cards are not recorded).
    pub opponent_hand_len: usize,
    /// Whether the observed seat held the attacker role.
    pub is_attacker: bool,
}

/// The action a record describes, with its immediate outcome.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LoggedAction {
    Attack { card: Card },
    Defend { attack: Card, defense: Card },
    TakeCards { cards_taken: usize },
    DoneAttacking { all_defended: bool },
}

/// One logged action with its observation snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionRecord {
    pub snapshot: Snapshot,
    pub action: LoggedAction,
}

/// Append-only sequence of decision records.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionLog {
    records: Vec<DecisionRecord>,
}

impl DecisionLog {
    /// An empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record.
    pub fn push(&mut self, record: DecisionRecord) {
        self.records.push(record);
    }

    /// All records, oldest first.
    #[must_use]
    pub fn records(&self) -> &[DecisionRecord] {
        &self.records
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the log is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Rank;

    #[test]
    fn test_log_serde_round_trip() {
        let mut log = DecisionLog::new();
        log.push(DecisionRecord {
            snapshot: Snapshot {
                hand: vec![Card::new(Rank::Six, Suit::Spades)],
                table: vec![TableSlot::open(Card::new(Rank::Ten, Suit::Clubs))],
                trump_suit: Suit::Hearts,
                deck_len: 24,
                opponent_hand_len: 6,
                is_attacker: false,
            },
            action: LoggedAction::TakeCards { cards_taken: 1 },
        });

        let json = serde_json::to_string(&log).unwrap();
        let back: DecisionLog = serde_json::from_str(&json).unwrap();
        assert_eq!(log, back);
        assert_eq!(back.len(), 1);
    }
}
