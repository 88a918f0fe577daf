//! The table: the in-progress trick of attack/defense card pairs.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, Rank};

/// One attack on the table and its answer, if any.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSlot {
    /// The attacking card; always present.
    pub attack: Card,
    /// The defending card; `None` until the attack is answered.
    pub defense: Option<Card>,
}

impl TableSlot {
    /// A fresh, unanswered attack.
    #[must_use]
    pub const fn open(attack: Card) -> Self {
        Self {
            attack,
            defense: None,
        }
    }

    /// Whether this slot has been answered.
    #[must_use]
    pub const fn is_defended(&self) -> bool {
        self.defense.is_some()
    }
}

/// Ordered sequence of trick slots for the current round.
///
/// Order reflects play order and drives display; rank matching uses the
/// set of ranks present anywhere on the table. A round rarely exceeds six
/// slots, hence the inline capacity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    slots: SmallVec<[TableSlot; 6]>,
}

impl Table {
    /// An empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a table from explicit slots (save/load).
    #[must_use]
    pub fn from_slots(slots: impl IntoIterator<Item = TableSlot>) -> Self {
        Self {
            slots: slots.into_iter().collect(),
        }
    }

    /// All slots in play order.
    #[must_use]
    pub fn slots(&self) -> &[TableSlot] {
        &self.slots
    }

    /// Number of slots (attacks) on the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of physical cards on the table, defenses included.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.slots
            .iter()
            .map(|slot| 1 + usize::from(slot.is_defended()))
            .sum()
    }

    /// Append a new unanswered attack.
    pub fn push_attack(&mut self, card: Card) {
        self.slots.push(TableSlot::open(card));
    }

    /// Fill the defense of the first undefended slot carrying `attack`.
    ///
    /// Returns false, without mutating, when no such slot exists.
    pub fn set_defense(&mut self, attack: Card, defense: Card) -> bool {
        for slot in &mut self.slots {
            if slot.attack == attack && !slot.is_defended() {
                slot.defense = Some(defense);
                return true;
            }
        }
        false
    }

    /// Ranks of every card currently on the table, defended or not.
    #[must_use]
    pub fn ranks_in_play(&self) -> FxHashSet<Rank> {
        let mut ranks = FxHashSet::default();
        for slot in &self.slots {
            ranks.insert(slot.attack.rank);
            if let Some(defense) = slot.defense {
                ranks.insert(defense.rank);
            }
        }
        ranks
    }

    /// Attack cards that have not been answered yet, in play order.
    pub fn undefended(&self) -> impl Iterator<Item = Card> + '_ {
        self.slots
            .iter()
            .filter(|slot| !slot.is_defended())
            .map(|slot| slot.attack)
    }

    /// Whether every slot has been answered. Vacuously true when empty.
    #[must_use]
    pub fn all_defended(&self) -> bool {
        self.slots.iter().all(TableSlot::is_defended)
    }

    /// Every physical card on the table, attacks then their defenses.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.slots
            .iter()
            .flat_map(|slot| std::iter::once(slot.attack).chain(slot.defense))
    }

    /// Remove everything from the table.
    pub fn clear(&mut self) {
        self.slots.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    fn card(rank: Rank, suit: Suit) -> Card {
        Card::new(rank, suit)
    }

    #[test]
    fn test_push_and_defend() {
        let mut table = Table::new();
        let six = card(Rank::Six, Suit::Spades);
        let eight = card(Rank::Eight, Suit::Spades);

        table.push_attack(six);
        assert_eq!(table.len(), 1);
        assert!(!table.all_defended());
        assert_eq!(table.undefended().collect::<Vec<_>>(), vec![six]);

        assert!(table.set_defense(six, eight));
        assert!(table.all_defended());
        assert_eq!(table.card_count(), 2);
    }

    #[test]
    fn test_set_defense_requires_open_slot() {
        let mut table = Table::new();
        let six = card(Rank::Six, Suit::Spades);
        let seven = card(Rank::Seven, Suit::Spades);
        let eight = card(Rank::Eight, Suit::Spades);

        table.push_attack(six);
        assert!(table.set_defense(six, seven));

        // Already answered; a second defense of the same attack fails.
        assert!(!table.set_defense(six, eight));
        // And an attack that is not on the table fails.
        assert!(!table.set_defense(eight, seven));
    }

    #[test]
    fn test_ranks_in_play_includes_defenses() {
        let mut table = Table::new();
        table.push_attack(card(Rank::Six, Suit::Spades));
        table.set_defense(card(Rank::Six, Suit::Spades), card(Rank::Ten, Suit::Spades));
        table.push_attack(card(Rank::Ten, Suit::Hearts));

        let ranks = table.ranks_in_play();
        assert!(ranks.contains(&Rank::Six));
        assert!(ranks.contains(&Rank::Ten));
        assert_eq!(ranks.len(), 2);
    }

    #[test]
    fn test_empty_table_is_vacuously_defended() {
        let table = Table::new();
        assert!(table.all_defended());
        assert_eq!(table.card_count(), 0);
    }
}
