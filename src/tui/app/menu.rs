use crate::config::{ReshufflePolicy, CARDS_PER_ROUND};
use crate::deck::STANDARD_SIZE;
use crate::game::Game;

use super::{AppState, Scene};

#[derive(Debug, Clone, Copy)]
enum MenuItem {
    StartingChips,
    SmallBlind,
    BigBlind,
    DeckSize,
    Reshuffle,
    RevealDelayMs,
}

const MENU_ITEMS: [MenuItem; 6] = [
    MenuItem::StartingChips,
    MenuItem::SmallBlind,
    MenuItem::BigBlind,
    MenuItem::DeckSize,
    MenuItem::Reshuffle,
    MenuItem::RevealDelayMs,
];

// smallest deck that still covers one round, rounded up to whole ranks
const MIN_DECK: usize = CARDS_PER_ROUND.div_ceil(4) * 4;

impl MenuItem {
    fn display(self, app: &AppState) -> String {
        match self {
            MenuItem::StartingChips => format!("Starting Chips: {}", app.cfg.starting_chips),
            MenuItem::SmallBlind => format!("Small Blind: {}", app.cfg.small_blind),
            MenuItem::BigBlind => format!("Big Blind: {}", app.cfg.big_blind),
            MenuItem::DeckSize => format!("Deck Size: {}", app.cfg.deck_size),
            MenuItem::Reshuffle => format!("Reshuffle: {}", app.cfg.reshuffle.label()),
            MenuItem::RevealDelayMs => format!("Reveal Delay (ms): {}", app.cfg_reveal_delay_ms),
        }
    }

    fn inc(self, app: &mut AppState) {
        let cfg = &mut app.cfg;
        match self {
            MenuItem::StartingChips => {
                cfg.starting_chips = cfg.starting_chips.saturating_add(50);
            }
            MenuItem::SmallBlind => {
                cfg.small_blind = cfg.small_blind.saturating_add(1);
                if cfg.big_blind < cfg.small_blind {
                    cfg.big_blind = cfg.small_blind;
                }
            }
            MenuItem::BigBlind => {
                cfg.big_blind = cfg.big_blind.saturating_add(1);
            }
            MenuItem::DeckSize => {
                cfg.deck_size = (cfg.deck_size + 4).min(STANDARD_SIZE);
            }
            MenuItem::Reshuffle => cfg.reshuffle = toggle(cfg.reshuffle),
            MenuItem::RevealDelayMs => {
                app.cfg_reveal_delay_ms = app.cfg_reveal_delay_ms.saturating_add(100);
            }
        }
    }

    fn dec(self, app: &mut AppState) {
        let cfg = &mut app.cfg;
        match self {
            MenuItem::StartingChips => {
                cfg.starting_chips = cfg.starting_chips.saturating_sub(50).max(50);
            }
            MenuItem::SmallBlind => {
                if cfg.small_blind > 1 {
                    cfg.small_blind -= 1;
                }
            }
            MenuItem::BigBlind => {
                if cfg.big_blind > 1 {
                    cfg.big_blind -= 1;
                    if cfg.big_blind < cfg.small_blind {
                        cfg.small_blind = cfg.big_blind;
                    }
                }
            }
            MenuItem::DeckSize => {
                cfg.deck_size = cfg.deck_size.saturating_sub(4).max(MIN_DECK);
            }
            MenuItem::Reshuffle => cfg.reshuffle = toggle(cfg.reshuffle),
            MenuItem::RevealDelayMs => {
                app.cfg_reveal_delay_ms = app.cfg_reveal_delay_ms.saturating_sub(100);
            }
        }
    }
}

fn toggle(policy: ReshufflePolicy) -> ReshufflePolicy {
    match policy {
        ReshufflePolicy::EveryRound => ReshufflePolicy::WhenLow,
        ReshufflePolicy::WhenLow => ReshufflePolicy::EveryRound,
    }
}

impl AppState {
    pub fn menu_items_display(&self) -> Vec<String> {
        MENU_ITEMS.iter().map(|item| item.display(self)).collect()
    }

    pub fn toggle_menu(&mut self) {
        self.close_help();
        self.close_history();
        self.scene = match self.scene {
            Scene::Menu => Scene::Table,
            _ => {
                self.open_menu();
                Scene::Menu
            }
        };
    }

    // --- Menu operations ---
    pub fn open_menu(&mut self) {
        self.close_help();
        self.close_history();
        self.menu_index = 0;
        self.cfg = self.game.config().clone();
        self.cfg_reveal_delay_ms = self.reveal_delay_ms;
        self.set_menu_error(None);
        self.scene = Scene::Menu;
    }

    /// Start a new game with the edited settings. Invalid settings keep the menu open.
    pub fn apply_menu(&mut self) {
        match Game::new(self.cfg.clone()) {
            Ok(game) => {
                self.reveal_delay_ms = self.cfg_reveal_delay_ms;
                self.set_menu_error(None);
                self.reset_game(game);
                self.scene = Scene::Table;
            }
            Err(err) => self.set_menu_error(Some(err.to_string())),
        }
    }

    pub fn cancel_menu(&mut self) {
        self.set_menu_error(None);
        self.scene = Scene::Table;
    }

    pub fn menu_next(&mut self) {
        self.menu_index = (self.menu_index + 1) % MENU_ITEMS.len();
    }
    pub fn menu_prev(&mut self) {
        self.menu_index = (self.menu_index + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
    }
    pub fn menu_inc(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.inc(self);
    }
    pub fn menu_dec(&mut self) {
        let item = MENU_ITEMS[self.menu_index % MENU_ITEMS.len()];
        item.dec(self);
    }
}
