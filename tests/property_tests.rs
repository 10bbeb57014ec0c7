//! Property tests for card lookup and card conservation.

mod common;

use proptest::prelude::*;

use uno_engine::{
    card_from_player, full_deck, Card, EngineError, GameStore, Pile, Player, PlayerId,
    DECK_SIZE,
};

fn any_card() -> impl Strategy<Value = Card> {
    let deck = full_deck();
    (0..deck.len()).prop_map(move |i| deck[i])
}

proptest! {
    #[test]
    fn card_from_player_finds_first_match(
        hand in prop::collection::vec(any_card(), 0..20),
        target in any_card(),
    ) {
        let mut player = Player::new(PlayerId::new("p"), "P");
        player.cards = hand.clone();

        let index = card_from_player(&player, &target);

        prop_assert_eq!(index, hand.iter().position(|c| *c == target));
        if let Some(i) = index {
            prop_assert_eq!(player.cards[i], target);
            prop_assert!(hand[..i].iter().all(|c| *c != target));
        }
        prop_assert_eq!(player.cards, hand);
    }

    #[test]
    fn draws_conserve_cards(
        seed in any::<u64>(),
        split in 0usize..=DECK_SIZE,
        draws in 1usize..40,
    ) {
        let mut engine = common::engine(seed);
        let (game, player) = common::setup_game_with_player(&mut engine);

        // Arbitrary split of the deck between draw and discard piles
        let mut game = engine.store().lookup_game(&game.id).unwrap();
        let deck: Vec<_> = game.draw_pile.iter().copied().collect();
        game.draw_pile = Pile::from(deck[..split].to_vec());
        game.discard_pile = Pile::from(deck[split..].to_vec());
        engine.store_mut().save_game(&game).unwrap();

        for n in 1..=draws {
            let before = engine.game(&game.id).unwrap();
            let after = engine.draw_card(&game.id, &player.id).unwrap();

            prop_assert_eq!(after.players[0].cards.len(), n);
            if before.draw_pile.is_empty() && before.discard_pile.len() <= 1 {
                // Fresh deck fallback adds a full deck
                prop_assert_eq!(after.total_cards(), before.total_cards() + DECK_SIZE);
                prop_assert_eq!(&after.discard_pile, &before.discard_pile);
            } else {
                prop_assert_eq!(after.total_cards(), before.total_cards());
            }
            if !before.draw_pile.is_empty() {
                prop_assert_eq!(after.draw_pile.len(), before.draw_pile.len() - 1);
            }
        }
    }

    #[test]
    fn outsiders_never_change_state(seed in any::<u64>(), name in "[a-z ]{1,12}") {
        let mut engine = common::engine(seed);
        let (game, _player) = common::setup_game_with_player(&mut engine);
        let before = engine.game(&game.id).unwrap();

        let result = engine.draw_card(&game.id, &PlayerId::new(name));

        prop_assert!(matches!(result, Err(EngineError::NotParticipant)));
        prop_assert_eq!(engine.game(&game.id).unwrap(), before);
    }
}
