//! Game state: hands, deck, trump, roles, table, and legality.
//!
//! `GameState` owns every physical card and exposes the legality
//! predicates and mutation primitives the orchestrator drives. It never
//! sequences actions itself; see [`crate::game`] for that.
//!
//! ## Card conservation
//!
//! At every reachable state, the deck, the two hands, and the table
//! together hold each card of the configured rank × suit cross product
//! exactly once.

use crate::cards::{Card, Deck, DeckSize, Suit};
use crate::core::{GameRng, Player, Seat, SeatPair, Strategy};

use super::table::Table;

/// Cards each player holds at the start of a round, deck permitting.
pub const HAND_SIZE: usize = 6;

/// Complete state of one durak deal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    players: SeatPair<Player>,
    deck: Deck,
    trump_suit: Suit,
    attacker: Seat,
    table: Table,
    game_over: bool,
    winner: Option<Seat>,
}

impl GameState {
    /// Deal a fresh game: shuffle, select trump, deal six cards each,
    /// and determine the first attacker.
    #[must_use]
    pub fn deal(player_a: Player, player_b: Player, size: DeckSize, rng: &mut GameRng) -> Self {
        let mut deck = Deck::new(size);
        deck.shuffle(rng);
        deck.set_trump();
        let trump_suit = deck.trump_suit().expect("freshly built deck is non-empty");

        let mut state = Self {
            players: SeatPair::new(player_a, player_b),
            deck,
            trump_suit,
            attacker: Seat::A,
            table: Table::new(),
            game_over: false,
            winner: None,
        };

        for _ in 0..HAND_SIZE {
            for seat in Seat::ALL {
                if let Some(card) = state.deck.draw() {
                    state.players[seat].add_card(card);
                }
            }
        }
        for seat in Seat::ALL {
            state.players[seat].sort_hand(trump_suit);
        }

        state.attacker = state.determine_first_player(rng);
        state
    }

    /// Reassemble a state from its parts (save/load and tests).
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        players: SeatPair<Player>,
        deck: Deck,
        trump_suit: Suit,
        attacker: Seat,
        table: Table,
        game_over: bool,
        winner: Option<Seat>,
    ) -> Self {
        Self {
            players,
            deck,
            trump_suit,
            attacker,
            table,
            game_over,
            winner,
        }
    }

    /// The player whose lowest trump is lower attacks first. A player
    /// holding the only trump attacks first. With no trumps anywhere the
    /// first attacker is chosen uniformly at random.
    fn determine_first_player(&self, rng: &mut GameRng) -> Seat {
        let min_trump = |seat: Seat| {
            self.players[seat]
                .hand()
                .iter()
                .filter(|c| c.is_trump(self.trump_suit))
                .map(|c| c.rank_value())
                .min()
        };

        match (min_trump(Seat::A), min_trump(Seat::B)) {
            (Some(a), Some(b)) => {
                if a < b {
                    Seat::A
                } else {
                    Seat::B
                }
            }
            (Some(_), None) => Seat::A,
            (None, Some(_)) => Seat::B,
            (None, None) => *rng.choose(&Seat::ALL).expect("two seats"),
        }
    }

    // === Accessors ===

    /// The player at a seat.
    #[must_use]
    pub fn player(&self, seat: Seat) -> &Player {
        &self.players[seat]
    }

    /// Mutable access to the player at a seat.
    pub fn player_mut(&mut self, seat: Seat) -> &mut Player {
        &mut self.players[seat]
    }

    /// A seat's hand in its current order.
    #[must_use]
    pub fn hand(&self, seat: Seat) -> &[Card] {
        self.players[seat].hand()
    }

    /// The seat holding a heuristic strategy, if either does.
    #[must_use]
    pub fn computer_seat(&self) -> Option<Seat> {
        Seat::ALL
            .into_iter()
            .find(|&s| self.players[s].strategy() == Strategy::Heuristic)
    }

    /// The remaining deck.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The trump suit for this deal.
    #[must_use]
    pub fn trump_suit(&self) -> Suit {
        self.trump_suit
    }

    /// The currently attacking seat.
    #[must_use]
    pub fn attacker(&self) -> Seat {
        self.attacker
    }

    /// The currently defending seat.
    #[must_use]
    pub fn defender(&self) -> Seat {
        self.attacker.other()
    }

    /// The in-progress trick.
    #[must_use]
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Mutable access to the trick.
    pub fn table_mut(&mut self) -> &mut Table {
        &mut self.table
    }

    /// Whether the deal has finished.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.game_over
    }

    /// The winning seat, or `None` before the end or on a draw.
    #[must_use]
    pub fn winner(&self) -> Option<Seat> {
        self.winner
    }

    // === Legality predicates ===

    /// Whether a card may be added to the table as an attack.
    ///
    /// An empty table accepts anything; otherwise the card's rank must
    /// already appear among the ranks in play. No table-length cap is
    /// enforced here; the heuristic attacker self-limits to six slots.
    #[must_use]
    pub fn can_add_card(&self, card: Card) -> bool {
        self.table.is_empty() || self.table.ranks_in_play().contains(&card.rank)
    }

    /// Whether `defense` beats `attack` under this deal's trump suit.
    ///
    /// Same suit: strictly higher rank wins, which also settles trump
    /// versus trump. Different suits: only a trump beats a non-trump.
    #[must_use]
    pub fn can_beat_card(&self, attack: Card, defense: Card) -> bool {
        if attack.suit == defense.suit {
            defense.rank_value() > attack.rank_value()
        } else {
            defense.is_trump(self.trump_suit) && !attack.is_trump(self.trump_suit)
        }
    }

    // === Round-resolution primitives ===

    /// Draw both hands back up to six, attacker first.
    ///
    /// The attacker draws before the defender, so on a scarce deck the
    /// attacker is guaranteed priority. Both hands are re-sorted.
    pub fn refill_hands(&mut self) {
        let order = [self.attacker, self.defender()];
        for seat in order {
            while self.players[seat].hand_len() < HAND_SIZE {
                match self.deck.draw() {
                    Some(card) => self.players[seat].add_card(card),
                    None => break,
                }
            }
        }
        let trump = self.trump_suit;
        for seat in order {
            self.players[seat].sort_hand(trump);
        }
    }

    /// Swap the attacker and defender roles.
    pub fn switch_roles(&mut self) {
        self.attacker = self.attacker.other();
    }

    /// Empty the table. Cards must already have been moved elsewhere.
    pub fn clear_table(&mut self) {
        self.table.clear();
    }

    /// Check whether the deal has ended, fixing the result once it has.
    ///
    /// The deal ends exactly when the deck is empty and at least one hand
    /// is empty. The winner is the player who emptied their hand, or
    /// `None` on a simultaneous finish. Once set, the outcome is sticky
    /// and never recomputed.
    pub fn check_game_over(&mut self) -> bool {
        if self.game_over {
            return true;
        }

        let a_empty = self.players[Seat::A].hand_is_empty();
        let b_empty = self.players[Seat::B].hand_is_empty();
        if !self.deck.is_empty() || (!a_empty && !b_empty) {
            return false;
        }

        self.game_over = true;
        self.winner = match (a_empty, b_empty) {
            (true, false) => Some(Seat::A),
            (false, true) => Some(Seat::B),
            _ => None,
        };
        true
    }

    // === Introspection ===

    /// Every physical card in the state: deck, both hands, table.
    ///
    /// The invariant tests assert this equals the configured cross
    /// product exactly once each.
    #[must_use]
    pub fn all_cards(&self) -> Vec<Card> {
        let mut cards: Vec<Card> = self.deck.cards().to_vec();
        for seat in Seat::ALL {
            cards.extend_from_slice(self.players[seat].hand());
        }
        cards.extend(self.table.cards());
        cards
    }
}
