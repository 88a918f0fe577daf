//! Game orchestrator: action sequencing, undo history, computer moves.
//!
//! [`Durak`] validates every action against the state's legality
//! predicates, mutates the state on success, and reports failures without
//! mutating anything. Before each mutating action it pushes a deep
//! snapshot of the pre-action state onto a private history stack;
//! [`Durak::undo_move`] pops and reinstalls the most recent snapshot.
//!
//! The external driver (console loop or GUI) owns the control flow: it
//! calls actions, re-reads state through the accessors to render, and
//! invokes [`Durak::computer_move`] whenever the heuristic seat holds the
//! active role.

use tracing::{debug, info};

use crate::ai;
use crate::cards::{Card, DeckSize, Suit};
use crate::core::{GameError, GameRng, Player, Seat, Strategy};
use crate::log::{DecisionLog, DecisionRecord, LoggedAction, Snapshot};
use crate::state::{GameState, Table};

/// Default name for the heuristic opponent.
pub const COMPUTER_NAME: &str = "Computer";

/// Configuration for a new game.
#[derive(Clone, Debug)]
pub struct DurakBuilder {
    player_name: String,
    opponent_name: String,
    deck_size: DeckSize,
    vs_computer: bool,
    seed: Option<u64>,
    record_decisions: bool,
}

impl Default for DurakBuilder {
    fn default() -> Self {
        Self {
            player_name: "Player".to_string(),
            opponent_name: COMPUTER_NAME.to_string(),
            deck_size: DeckSize::ThirtySix,
            vs_computer: true,
            seed: None,
            record_decisions: false,
        }
    }
}

impl DurakBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Name of the player at seat A.
    pub fn player_name(mut self, name: impl Into<String>) -> Self {
        self.player_name = name.into();
        self
    }

    /// Name of the opponent at seat B.
    pub fn opponent_name(mut self, name: impl Into<String>) -> Self {
        self.opponent_name = name.into();
        self
    }

    /// Deck variant to deal.
    pub fn deck_size(mut self, size: DeckSize) -> Self {
        self.deck_size = size;
        self
    }

    /// Whether seat B is heuristic-driven (default) or a second human.
    pub fn vs_computer(mut self, vs_computer: bool) -> Self {
        self.vs_computer = vs_computer;
        self
    }

    /// Pin the RNG seed; entropy-seeded when unset.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Wire in the decision-log side channel.
    pub fn record_decisions(mut self, record: bool) -> Self {
        self.record_decisions = record;
        self
    }

    /// Deal the game.
    #[must_use]
    pub fn build(self) -> Durak {
        let mut rng = match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };

        let human = Player::new(self.player_name, Strategy::External);
        let opponent = if self.vs_computer {
            Player::new(self.opponent_name, Strategy::Heuristic)
        } else {
            Player::new(self.opponent_name, Strategy::External)
        };

        let state = GameState::deal(human, opponent, self.deck_size, &mut rng);
        info!(
            deck = self.deck_size.card_count(),
            vs_computer = self.vs_computer,
            seed = rng.seed(),
            attacker = %state.player(state.attacker()).name(),
            "new game dealt"
        );

        Durak {
            state,
            rng,
            history: Vec::new(),
            vs_computer: self.vs_computer,
            log: self.record_decisions.then(DecisionLog::new),
        }
    }
}

/// One game of durak: state, undo history, and the computer driver.
#[derive(Debug)]
pub struct Durak {
    state: GameState,
    rng: GameRng,
    history: Vec<GameState>,
    vs_computer: bool,
    log: Option<DecisionLog>,
}

impl Durak {
    /// Start configuring a new game.
    #[must_use]
    pub fn builder() -> DurakBuilder {
        DurakBuilder::new()
    }

    /// Deal a game from a raw card count (36, 24, or 20).
    ///
    /// Rejects any other count; this is the only fatal configuration
    /// error in the engine.
    pub fn new_game(
        player_name: impl Into<String>,
        deck_cards: usize,
        vs_computer: bool,
    ) -> Result<Self, GameError> {
        let size = DeckSize::from_card_count(deck_cards)?;
        let mut builder = Durak::builder()
            .player_name(player_name)
            .deck_size(size)
            .vs_computer(vs_computer);
        if !vs_computer {
            builder = builder.opponent_name("Player 2");
        }
        Ok(builder.build())
    }

    // === Actions ===

    /// Play an attack card onto the table.
    ///
    /// The attacker must hold the card and its rank must be legal for the
    /// current table. Failure leaves the game untouched.
    pub fn attack(&mut self, card: Card) -> Result<(), GameError> {
        let attacker = self.state.attacker();
        if !self.state.player(attacker).has_card(card) {
            return Err(GameError::NotInHand(card));
        }
        if !self.state.can_add_card(card) {
            return Err(GameError::IllegalAttack(card));
        }

        self.push_history();
        self.state.player_mut(attacker).remove_card(card);
        self.state.table_mut().push_attack(card);
        debug!(%card, %attacker, "attack");
        self.record(LoggedAction::Attack { card });
        Ok(())
    }

    /// Answer the undefended attack `attack` with `defense`.
    ///
    /// The defender must hold the defense card, the attack must sit
    /// unanswered on the table, and the defense must beat it. Failure
    /// leaves the game untouched.
    pub fn defend(&mut self, attack: Card, defense: Card) -> Result<(), GameError> {
        let defender = self.state.defender();
        if !self.state.player(defender).has_card(defense) {
            return Err(GameError::NotInHand(defense));
        }
        let open_slot = self
            .state
            .table()
            .slots()
            .iter()
            .any(|slot| slot.attack == attack && !slot.is_defended());
        if !open_slot {
            return Err(GameError::NoMatchingAttack(attack));
        }
        if !self.state.can_beat_card(attack, defense) {
            return Err(GameError::CannotBeat { attack, defense });
        }

        self.push_history();
        self.state.player_mut(defender).remove_card(defense);
        self.state.table_mut().set_defense(attack, defense);
        debug!(%attack, %defense, %defender, "defend");
        self.record(LoggedAction::Defend { attack, defense });
        Ok(())
    }

    /// The defender concedes the round and collects every table card.
    ///
    /// Hands are refilled afterwards; the roles do not change, so the
    /// same attacker opens the next round.
    pub fn take_cards(&mut self) {
        self.push_history();
        let defender = self.state.defender();
        let cards: Vec<Card> = self.state.table().cards().collect();
        for card in &cards {
            self.state.player_mut(defender).add_card(*card);
        }
        self.state.clear_table();
        self.state.refill_hands();
        debug!(%defender, cards_taken = cards.len(), "take cards");
        self.record(LoggedAction::TakeCards {
            cards_taken: cards.len(),
        });
    }

    /// The attacker ends the round.
    ///
    /// The table is cleared and hands refilled. Roles switch only when
    /// every attack was answered; this is vacuously true on an empty
    /// table, so an attacker may pass the attack without playing a card.
    pub fn done_attacking(&mut self) {
        self.push_history();
        let all_defended = self.state.table().all_defended();
        self.state.clear_table();
        self.state.refill_hands();
        if all_defended {
            self.state.switch_roles();
        }
        debug!(all_defended, attacker = %self.state.attacker(), "round ended");
        self.record(LoggedAction::DoneAttacking { all_defended });
    }

    /// Drive one move of the heuristic opponent.
    ///
    /// A no-op unless a heuristic seat exists and holds the active role:
    /// the attacker role always acts; the defender role acts only while
    /// undefended attacks remain.
    pub fn computer_move(&mut self) -> Result<(), GameError> {
        let Some(seat) = self.state.computer_seat() else {
            return Ok(());
        };

        if self.state.attacker() == seat {
            match ai::choose_attack(&self.state, seat) {
                // The heuristic can offer a card the table rejects (no
                // rank match); end the round instead of stalling.
                Some(card) => {
                    if self.attack(card).is_err() {
                        self.done_attacking();
                    }
                }
                None => self.done_attacking(),
            }
            return Ok(());
        }

        let undefended: Vec<Card> = self.state.table().undefended().collect();
        if undefended.is_empty() {
            return Ok(());
        }

        if ai::should_take(&self.state, seat) {
            self.take_cards();
            return Ok(());
        }

        for attack in undefended {
            match ai::choose_defense(&self.state, attack, seat) {
                Some(defense) => self.defend(attack, defense)?,
                None => {
                    self.take_cards();
                    break;
                }
            }
        }
        Ok(())
    }

    /// Undo the most recent action by reinstalling its pre-action state.
    pub fn undo_move(&mut self) -> Result<(), GameError> {
        let previous = self.history.pop().ok_or(GameError::NothingToUndo)?;
        self.state = previous;
        debug!(history_len = self.history.len(), "undo");
        Ok(())
    }

    /// Check (and fix, once true) whether the game has ended.
    pub fn check_game_over(&mut self) -> bool {
        self.state.check_game_over()
    }

    // === Accessors ===

    /// The full game state, for rendering.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Trump suit of the deal.
    #[must_use]
    pub fn trump_suit(&self) -> Suit {
        self.state.trump_suit()
    }

    /// The in-progress trick.
    #[must_use]
    pub fn table(&self) -> &Table {
        self.state.table()
    }

    /// A seat's hand.
    #[must_use]
    pub fn hand(&self, seat: Seat) -> &[Card] {
        self.state.hand(seat)
    }

    /// Cards left in the deck.
    #[must_use]
    pub fn deck_count(&self) -> usize {
        self.state.deck().len()
    }

    /// The attacking seat.
    #[must_use]
    pub fn attacker(&self) -> Seat {
        self.state.attacker()
    }

    /// The defending seat.
    #[must_use]
    pub fn defender(&self) -> Seat {
        self.state.defender()
    }

    /// The heuristic-driven seat, when one exists.
    #[must_use]
    pub fn computer_seat(&self) -> Option<Seat> {
        self.state.computer_seat()
    }

    /// The seat the host drives. Seat A in a vs-computer game; in a
    /// hotseat game both seats are external and A is the primary.
    #[must_use]
    pub fn human_seat(&self) -> Seat {
        self.state
            .computer_seat()
            .map_or(Seat::A, Seat::other)
    }

    /// The winning seat, if decided. `None` also covers a draw.
    #[must_use]
    pub fn winner(&self) -> Option<Seat> {
        self.state.winner()
    }

    /// Whether seat B is heuristic-driven.
    #[must_use]
    pub fn vs_computer(&self) -> bool {
        self.vs_computer
    }

    /// Number of undoable actions.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// The decision log, when wired in.
    #[must_use]
    pub fn decision_log(&self) -> Option<&DecisionLog> {
        self.log.as_ref()
    }

    /// Seed the game was dealt from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    // === Internals ===

    pub(crate) fn snapshot_history(&self) -> &[GameState] {
        &self.history
    }

    pub(crate) fn install(&mut self, state: GameState, history: Vec<GameState>, vs_computer: bool) {
        self.state = state;
        self.history = history;
        self.vs_computer = vs_computer;
    }

    fn push_history(&mut self) {
        self.history.push(self.state.clone());
    }

    /// Append to the decision log, observed from the computer seat.
    fn record(&mut self, action: LoggedAction) {
        let Some(log) = &mut self.log else { return };
        let Some(seat) = self.state.computer_seat() else {
            return;
        };

        let snapshot = Snapshot {
            hand: self.state.hand(seat).to_vec(),
            table: self.state.table().slots().to_vec(),
            trump_suit: self.state.trump_suit(),
            deck_len: self.state.deck().len(),
            opponent_hand_len: self.state.hand(seat.other()).len(),
            is_attacker: self.state.attacker() == seat,
        };
        log.push(DecisionRecord { snapshot, action });
    }
}
