use heads_up_holdem::config::GameConfig;
use heads_up_holdem::game::{Game, HandHistoryVerb, Phase};

fn new_game() -> Game {
    Game::new(GameConfig::default().with_blinds(5, 10).with_starting_chips(1000).with_seed(4)).unwrap()
}

#[test]
fn history_records_blinds_and_actions() {
    let mut game = new_game();

    let history = game.history_recent(10);
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].verb, HandHistoryVerb::SmallBlind);
    assert_eq!(history[0].amount, Some(5));
    assert_eq!(history[0].seat, 0);
    assert_eq!(history[0].phase, Phase::PreFlop);
    assert_eq!(history[1].verb, HandHistoryVerb::BigBlind);
    assert_eq!(history[1].amount, Some(10));
    assert_eq!(history[1].seat, 1);

    game.call(0).unwrap();
    let recent = game.history_recent(1);
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].verb, HandHistoryVerb::Call);
    assert_eq!(recent[0].amount, Some(5));
    assert_eq!(recent[0].round, 1);

    game.check(1).unwrap();
    let recent = game.history_recent(1);
    assert_eq!(recent[0].verb, HandHistoryVerb::Check);
    assert_eq!(recent[0].amount, None);
}

#[test]
fn fold_records_the_win_and_next_round_blinds() {
    let mut game = new_game();
    game.fold(0).unwrap();
    let verbs: Vec<(u32, usize, HandHistoryVerb)> = game
        .history_recent(4)
        .into_iter()
        .map(|e| (e.round, e.seat, e.verb))
        .collect();
    assert_eq!(
        verbs,
        vec![
            (1, 0, HandHistoryVerb::Fold),
            (1, 1, HandHistoryVerb::Win),
            (2, 1, HandHistoryVerb::SmallBlind),
            (2, 0, HandHistoryVerb::BigBlind),
        ]
    );
    assert_eq!(game.history_recent(3)[0].amount, Some(15));
}

#[test]
fn history_offset_pages_from_the_end() {
    let mut game = new_game();
    game.call(0).unwrap();
    game.check(1).unwrap();
    game.check(1).unwrap();
    game.check(0).unwrap();
    let total = game.history_len();
    assert_eq!(total, 6);

    let window = game.history_recent_offset(3, 0);
    assert_eq!(window.len(), 3);
    let older = game.history_recent_offset(3, 2);
    assert_eq!(older.len(), 3);
    assert_ne!(window[0], older[0]);
    // offsets past the start clamp to the oldest page
    assert_eq!(game.history_recent_offset(3, 100), game.history_recent_offset(3, 3));
    assert!(game.history_recent_offset(0, 0).is_empty());
}
