//! End-to-end engine tests: whole games driven through the public API.

use durak_core::{ai, Card, DeckSize, Durak, GameError, Rank, Seat, Suit};

/// Drive one full round with both seats playing the built-in heuristics.
///
/// Returns when the round resolves (take or done) or the game ends.
fn play_round(game: &mut Durak) {
    loop {
        if game.check_game_over() {
            return;
        }

        let defender = game.defender();
        let undefended: Vec<Card> = game.table().undefended().collect();
        if !undefended.is_empty() {
            if ai::should_take(game.state(), defender) {
                game.take_cards();
                return;
            }
            for attack in undefended {
                match ai::choose_defense(game.state(), attack, defender) {
                    Some(defense) => game.defend(attack, defense).unwrap(),
                    None => {
                        game.take_cards();
                        return;
                    }
                }
            }
            continue;
        }

        let attacker = game.attacker();
        match ai::choose_attack(game.state(), attacker) {
            Some(card) => {
                if game.attack(card).is_err() {
                    game.done_attacking();
                    return;
                }
            }
            None => {
                game.done_attacking();
                return;
            }
        }
    }
}

fn play_to_completion(game: &mut Durak) -> usize {
    let mut rounds = 0;
    while !game.check_game_over() {
        play_round(game);
        rounds += 1;
        assert!(rounds < 2000, "game did not terminate");
    }
    rounds
}

#[test]
fn test_full_game_terminates_with_consistent_winner() {
    for seed in [1u64, 7, 42, 1234] {
        let mut game = Durak::builder().player_name("Anna").seed(seed).build();
        play_to_completion(&mut game);

        assert!(game.state().is_over());
        assert!(game.deck_count() == 0);

        match game.winner() {
            Some(winner) => {
                assert!(game.hand(winner).is_empty());
                assert!(!game.hand(winner.other()).is_empty());
            }
            None => {
                // Draw: both hands emptied in the same resolution.
                assert!(game.hand(Seat::A).is_empty());
                assert!(game.hand(Seat::B).is_empty());
            }
        }

        // The outcome is sticky.
        assert!(game.check_game_over());
    }
}

#[test]
fn test_short_deck_variants_play_out() {
    for (cards, size) in [(24, DeckSize::TwentyFour), (20, DeckSize::Twenty)] {
        let mut game = Durak::builder()
            .player_name("Anna")
            .deck_size(size)
            .seed(99)
            .build();
        assert_eq!(game.deck_count() + 12, cards);

        play_to_completion(&mut game);
        assert!(game.state().is_over());
    }
}

#[test]
fn test_no_duplicate_cards_at_any_point() {
    let mut game = Durak::builder().player_name("Anna").seed(3).build();

    let full_deck: std::collections::HashSet<Card> = DeckSize::ThirtySix
        .ranks()
        .iter()
        .flat_map(|&r| Suit::ALL.iter().map(move |&s| Card::new(r, s)))
        .collect();

    while !game.check_game_over() {
        let cards = game.state().all_cards();
        let unique: std::collections::HashSet<Card> = cards.iter().copied().collect();
        assert_eq!(unique.len(), cards.len(), "duplicate card in play");
        assert!(unique.is_subset(&full_deck));
        play_round(&mut game);
    }
}

#[test]
fn test_same_seed_same_game() {
    let build = || Durak::builder().player_name("Anna").seed(42).build();
    let mut left = build();
    let mut right = build();
    assert_eq!(left.state(), right.state());

    play_round(&mut left);
    play_round(&mut right);
    assert_eq!(left.state(), right.state());
}

#[test]
fn test_new_game_interface() {
    let game = Durak::new_game("Anna", 36, true).unwrap();
    assert_eq!(game.hand(Seat::A).len(), 6);
    assert_eq!(game.hand(Seat::B).len(), 6);
    assert_eq!(game.deck_count(), 24);
    assert!(game.vs_computer());
    assert_eq!(game.state().player(Seat::A).name(), "Anna");

    let hotseat = Durak::new_game("Anna", 20, false).unwrap();
    assert!(!hotseat.vs_computer());
    assert_eq!(hotseat.state().player(Seat::B).name(), "Player 2");

    assert!(matches!(
        Durak::new_game("Anna", 32, true),
        Err(GameError::UnsupportedDeckSize(32))
    ));
}

#[test]
fn test_hands_stay_sorted_after_refill() {
    let mut game = Durak::builder().player_name("Anna").seed(11).build();
    play_round(&mut game);

    let trump = game.trump_suit();
    for seat in Seat::ALL {
        let keys: Vec<(bool, u8)> = game
            .hand(seat)
            .iter()
            .map(|c| (c.is_trump(trump), c.rank_value()))
            .collect();
        let mut sorted = keys.clone();
        sorted.sort();
        assert_eq!(keys, sorted, "{seat} hand out of display order");
    }
}

#[test]
fn test_trump_suit_matches_deck() {
    let game = Durak::builder().player_name("Anna").seed(5).build();
    assert_eq!(Some(game.trump_suit()), game.state().deck().trump_suit());
}

#[test]
fn test_undo_rewinds_a_whole_round() {
    let mut game = Durak::builder().player_name("Anna").seed(13).build();
    let dealt = game.state().clone();

    play_round(&mut game);
    let actions = game.history_len();
    assert!(actions > 0);

    for _ in 0..actions {
        game.undo_move().unwrap();
    }
    assert_eq!(game.state(), &dealt);
    assert!(matches!(game.undo_move(), Err(GameError::NothingToUndo)));
}

#[test]
fn test_beat_relation_exhaustive() {
    // The closed-form definition over every attack/defense/trump triple.
    let all_cards: Vec<Card> = Rank::ALL
        .iter()
        .flat_map(|&r| Suit::ALL.iter().map(move |&s| Card::new(r, s)))
        .collect();

    for trump in Suit::ALL {
        // Only the trump matters for the predicate; assemble a bare state.
        let state = durak_core::GameState::from_parts(
            durak_core::SeatPair::new(
                durak_core::Player::new("a", durak_core::Strategy::External),
                durak_core::Player::new("b", durak_core::Strategy::External),
            ),
            durak_core::Deck::from_parts(vec![], Some(trump)),
            trump,
            Seat::A,
            durak_core::Table::new(),
            false,
            None,
        );

        for &attack in &all_cards {
            for &defense in &all_cards {
                let expected = (attack.suit == defense.suit
                    && defense.rank_value() > attack.rank_value())
                    || (defense.suit == trump && attack.suit != trump);
                assert_eq!(
                    state.can_beat_card(attack, defense),
                    expected,
                    "attack {attack} defense {defense} trump {trump}"
                );
            }
        }
    }
}
