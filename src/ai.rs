//! Heuristic computer opponent.
//!
//! Three pure functions over a read-only [`GameState`]: pick a card to
//! attack with, pick a card to answer an attack, and decide whether to
//! concede the round and take the table. They never mutate state; the
//! orchestrator's `computer_move` applies whatever they return.
//!
//! There is no learning here. The decision log kept by the orchestrator
//! is a recording side channel and is never consulted by these functions.

use crate::cards::Card;
use crate::core::Seat;
use crate::state::{GameState, HAND_SIZE};

/// Pick the card the heuristic attacker plays next, lowest first.
///
/// Preference order:
/// 1. With cards already on the table: the lowest held card whose rank
///    matches a rank in play.
/// 2. Otherwise, while the table has fewer than six slots: the lowest
///    non-trump card, falling back to the lowest card overall.
/// 3. `None` when nothing applies; the attacker should end the round.
#[must_use]
pub fn choose_attack(state: &GameState, seat: Seat) -> Option<Card> {
    let hand = state.hand(seat);
    if hand.is_empty() {
        return None;
    }

    let trump = state.trump_suit();
    let mut sorted: Vec<Card> = hand.to_vec();
    sorted.sort_by_key(|c| (c.is_trump(trump), c.rank_value()));

    if !state.table().is_empty() {
        let ranks = state.table().ranks_in_play();
        if let Some(&card) = sorted.iter().find(|c| ranks.contains(&c.rank)) {
            return Some(card);
        }
    }

    if state.table().len() < HAND_SIZE {
        return sorted
            .iter()
            .find(|c| !c.is_trump(trump))
            .or_else(|| sorted.first())
            .copied();
    }

    None
}

/// Pick the cheapest card that beats `attack`, or `None` if none can.
///
/// Prefers the lowest higher card of the same suit; failing that, the
/// lowest trump when the attack itself is not a trump.
#[must_use]
pub fn choose_defense(state: &GameState, attack: Card, seat: Seat) -> Option<Card> {
    let hand = state.hand(seat);
    let trump = state.trump_suit();

    let same_suit = hand
        .iter()
        .filter(|c| c.suit == attack.suit && c.rank_value() > attack.rank_value())
        .min_by_key(|c| c.rank_value());
    if let Some(&card) = same_suit {
        return Some(card);
    }

    if attack.is_trump(trump) {
        return None;
    }
    hand.iter()
        .filter(|c| c.is_trump(trump))
        .min_by_key(|c| c.rank_value())
        .copied()
}

/// Decide whether the heuristic defender concedes and takes the table.
///
/// Counts the slots whose attack card [`choose_defense`] cannot answer.
/// The scan covers every slot, already-defended ones included, which
/// makes the computer slightly more pessimistic mid-round. Takes when
/// more than half the slots are unanswerable, or when the deck is nearly
/// out and defending would leave the hand short of six cards.
#[must_use]
pub fn should_take(state: &GameState, seat: Seat) -> bool {
    let table = state.table();
    let unbeatable = table
        .slots()
        .iter()
        .filter(|slot| choose_defense(state, slot.attack, seat).is_none())
        .count();

    if 2 * unbeatable > table.len() {
        return true;
    }

    let hand_after = state.hand(seat).len().saturating_sub(unbeatable);
    state.deck().len() < HAND_SIZE && hand_after < HAND_SIZE
}
