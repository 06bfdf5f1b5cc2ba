use uno::{
    card::{Card, CardColor},
    error::UnoError,
    game::{Game, GameConfig},
    hand::Hand,
    shuffler::{Shuffler, StandardShuffler},
};

fn create_player_names(count: usize) -> Vec<String> {
    let mut player_names = Vec::new();
    for i in 0..count {
        player_names.push(format!("Player {}", i + 1));
    }
    player_names
}

/// Plays the first legal card, calling UNO when down to one, or draws.
fn play_out<S: Shuffler>(hand: &mut Hand<S>) -> usize {
    let mut actions = 0;
    while !hand.has_ended() && actions < 5_000 {
        let player = hand.player_in_turn();
        let playable = (0..hand.player_hand(player).unwrap().len()).find(|&i| hand.can_play(i));
        match playable {
            Some(index) => {
                let card = hand.player_hand(player).unwrap()[index];
                let color = card.is_wild().then_some(CardColor::Green);
                hand.play(index, color).unwrap();
                hand.say_uno(player).unwrap();
            }
            None => {
                hand.draw().unwrap();
            }
        }
        actions += 1;
    }
    actions
}

#[test]
fn games_are_played_to_the_target_score() {
    for seed in 0..10 {
        let mut game = Game::new(
            create_player_names(4),
            GameConfig {
                target_score: 200,
                dealer: Some(0),
                ..GameConfig::default()
            },
            StandardShuffler::seeded(seed),
        )
        .unwrap();

        let mut previous = game.scores().to_vec();
        while !game.has_ended() {
            play_out(game.current_hand_mut());
            assert!(game.current_hand().has_ended(), "seed {seed} stalled");

            game.update_scores().unwrap();

            for (before, after) in previous.iter().zip(game.scores()) {
                assert!(after >= before);
            }
            previous = game.scores().to_vec();
        }

        let winner = game.winner().unwrap();
        assert!(game.score(winner).unwrap() >= 200);
        assert!(game.scores()[..winner].iter().all(|score| *score < 200));

        let total: u32 = game.history().iter().map(|result| result.score).sum();
        assert_eq!(total, game.scores().iter().sum::<u32>());
    }
}

#[test]
fn dealer_rotates_between_hands() {
    let mut game = Game::new(
        create_player_names(3),
        GameConfig {
            target_score: 10_000,
            dealer: Some(2),
            ..GameConfig::default()
        },
        StandardShuffler::seeded(5),
    )
    .unwrap();

    for expected_dealer in [2, 0, 1, 2] {
        assert_eq!(game.current_hand().dealer(), expected_dealer);
        play_out(game.current_hand_mut());
        game.update_scores().unwrap();
    }

    let dealers: Vec<usize> = game.history().iter().map(|result| result.dealer).collect();
    assert_eq!(dealers, vec![2, 0, 1, 2]);
}

#[test]
fn game_accessors_reject_unknown_players() {
    let game = Game::new(
        create_player_names(2),
        GameConfig {
            dealer: Some(1),
            ..GameConfig::default()
        },
        StandardShuffler::seeded(5),
    )
    .unwrap();

    assert_eq!(game.player(1).unwrap(), "Player 2");
    assert_eq!(game.target_score(), 500);
    assert!(matches!(game.player(2), Err(UnoError::InvalidPlayerIndex(2))));
    assert!(matches!(game.score(2), Err(UnoError::InvalidPlayerIndex(2))));
}

#[test]
fn wild_cards_played_in_a_game_keep_their_color_on_the_pile() {
    let mut game = Game::new(
        create_player_names(2),
        GameConfig {
            dealer: Some(0),
            ..GameConfig::default()
        },
        StandardShuffler::seeded(21),
    )
    .unwrap();

    play_out(game.current_hand_mut());

    let hand = game.current_hand();
    assert!(hand
        .discard_pile()
        .iter()
        .filter(|card| matches!(card.into_card(), Card::Wild | Card::WildDraw))
        .all(|card| card.color() == CardColor::Green));
}
