use crossterm::event::KeyCode;
use heads_up_holdem::config::GameConfig;
use heads_up_holdem::game::{Action, Phase};
use heads_up_holdem::tui::app::{AppState, InputAction, Scene};
use heads_up_holdem::tui::controller::handle_key;
use std::time::Instant;

fn setup_table_app(cfg: GameConfig) -> AppState {
    let mut app = AppState::new(cfg, 0).unwrap();
    app.apply_menu();
    app.on_tick(Instant::now());
    app
}

fn press(app: &mut AppState, c: char) {
    let _ = handle_key(app, KeyCode::Char(c));
}

#[test]
fn menu_navigation_and_apply() {
    let mut app = AppState::new(GameConfig::default().with_seed(1), 0).unwrap();
    assert!(matches!(app.scene, Scene::Menu));
    let start = app.menu_index;
    let _ = app.handle_input(InputAction::MenuNext);
    assert_ne!(app.menu_index, start);
    let _ = app.handle_input(InputAction::MenuPrev);
    assert_eq!(app.menu_index, start);
    let _ = app.handle_input(InputAction::MenuInc);
    assert_eq!(app.cfg.starting_chips, 250);
    let _ = app.handle_input(InputAction::MenuApply);
    assert!(matches!(app.scene, Scene::Table));
    assert_eq!(app.game.player(0).unwrap().chips() + app.game.player(0).unwrap().wager(), 250);
}

#[test]
fn help_and_history_toggle() {
    let mut app = setup_table_app(GameConfig::default().with_seed(2));
    let _ = app.handle_input(InputAction::ToggleHelp);
    assert!(app.help_open());
    let _ = app.handle_input(InputAction::ToggleHistory);
    assert!(!app.help_open());
    assert!(app.history_open());
    let _ = app.handle_input(InputAction::ToggleHistory);
    assert!(!app.history_open());
}

#[test]
fn keys_play_for_their_own_seat() {
    let mut app = setup_table_app(GameConfig::default().with_seed(3));
    assert_eq!(app.game.current(), 0);
    assert_eq!(app.visible_seat(), Some(0));

    // second seat's key while the first seat is to act
    press(&mut app, 'C');
    assert!(app.action_error().is_some());
    assert_eq!(app.game.player(1).unwrap().wager(), 2);

    press(&mut app, 'c');
    assert_eq!(app.visible_seat(), Some(1));
    press(&mut app, 'K');
    assert_eq!(app.view.phase, Some(Phase::Flop));
    assert_eq!(app.view.board.len(), 3);
    assert_eq!(app.visible_seat(), Some(1));
}

#[test]
fn check_down_shows_up_in_the_feed() {
    let mut app = setup_table_app(GameConfig::default().with_seed(4));
    for c in ['c', 'K', 'K', 'k', 'K', 'k', 'K', 'k'] {
        press(&mut app, c);
    }
    assert_eq!(app.game.round(), 2);
    assert_eq!(app.view.round, 2);
    assert!(app.feed().any(|l| l.contains("won the pot") || l.starts_with("Draw")));
}

#[test]
fn space_deals_a_fresh_game_after_a_bust() {
    let mut app = setup_table_app(GameConfig::default().with_starting_chips(2).with_seed(5));
    for _ in 0..200 {
        if app.game.is_over() {
            break;
        }
        let player = app.game.current();
        let action = if app.game.to_call(player) > 0 { Action::Call } else { Action::Check };
        let _ = app.handle_input(InputAction::Act { player, action });
        app.on_tick(Instant::now());
    }
    assert!(app.game.is_over());
    assert!(app.view.game_over.is_some());

    let _ = app.handle_input(InputAction::Continue);
    app.on_tick(Instant::now());
    assert!(!app.game.is_over());
    assert_eq!(app.game.round(), 1);
    assert!(app.view.game_over.is_none());
}

#[test]
fn quit_only_from_the_menu() {
    let mut app = setup_table_app(GameConfig::default().with_seed(6));
    assert!(!handle_key(&mut app, KeyCode::Char('q')));
    press(&mut app, 'm');
    assert!(matches!(app.scene, Scene::Menu));
    assert!(handle_key(&mut app, KeyCode::Char('q')));
}
