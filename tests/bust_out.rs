use heads_up_holdem::cards::parse_cards;
use heads_up_holdem::config::GameConfig;
use heads_up_holdem::deck::Deck;
use heads_up_holdem::events::GameEvent;
use heads_up_holdem::game::{ActionError, Game, GameError};

const ROYAL_VS_DEUCES: &str = "Ah Kh 2s 2d 4c Qh Jh Th 5c 9h 6c 3c";

fn short_stacked() -> Game {
    let cfg = GameConfig::default().with_names("Ann", "Bob").with_starting_chips(10);
    let deck = Deck::from_top(parse_cards(ROYAL_VS_DEUCES).unwrap());
    Game::with_deck(cfg, deck).unwrap()
}

#[test]
fn losing_an_all_in_ends_the_game() {
    let mut game = short_stacked();
    game.raise(0).unwrap(); // to 4
    game.raise(1).unwrap(); // to 8
    game.raise(0).unwrap(); // all in for 10
    game.call(1).unwrap(); // all in for 10, board runs out

    assert!(game.is_over());
    assert_eq!(game.loser(), Some(1));
    assert_eq!(game.player(0).unwrap().chips(), 20);
    assert_eq!(game.player(1).unwrap().chips(), 0);
    assert_eq!(game.pot(), 0);

    let events = game.drain_events();
    match events.last() {
        Some(GameEvent::GameOver { loser, final_chips, message }) => {
            assert_eq!(*loser, 1);
            assert_eq!(*final_chips, [20, 0]);
            assert_eq!(message, "Bob lost all their money: GAME OVER");
        }
        other => panic!("expected game over, got {other:?}"),
    }
    assert!(events.iter().any(|e| matches!(e, GameEvent::RoundEnded { .. })));
}

#[test]
fn finished_game_rejects_every_action() {
    let mut game = short_stacked();
    game.raise(0).unwrap();
    game.raise(1).unwrap();
    game.raise(0).unwrap();
    game.call(1).unwrap();
    let history = game.history_len();

    for seat in 0..2 {
        assert_eq!(game.fold(seat), Err(GameError::Action(ActionError::GameOver)));
        assert_eq!(game.check(seat), Err(GameError::Action(ActionError::GameOver)));
    }
    assert_eq!(game.history_len(), history);
    assert!(game.check_invariants().is_ok());
}

#[test]
fn folding_a_short_stack_away_ends_the_game() {
    let cfg = GameConfig::default().with_starting_chips(3).with_seed(8);
    let mut game = Game::new(cfg).unwrap();
    // player 0 folds every time; player 1 just calls
    while !game.is_over() {
        match game.current() {
            0 => game.fold(0).unwrap(),
            _ if game.to_call(1) > 0 => game.call(1).unwrap(),
            _ => game.check(1).unwrap(),
        }
        assert!(game.round() < 10, "game should end quickly");
    }
    assert_eq!(game.loser(), Some(0));
    assert_eq!(game.round(), 2);
    assert_eq!(game.player(0).unwrap().chips(), 0);
    assert_eq!(game.player(1).unwrap().chips(), 6);
}
