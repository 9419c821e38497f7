use crate::cards::Card;
use crate::config::GameConfig;
use crate::events::{CardPosition, GameEvent};
use crate::game::{Action, Game, GameError, Phase, RoundResult};
use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Scene {
    Menu,
    Table,
}

/// High-level input actions for the TUI controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum InputAction {
    MenuNext,
    MenuPrev,
    MenuInc,
    MenuDec,
    MenuApply,
    MenuCancel,
    ToggleMenu,
    ToggleHelp,
    ToggleHistory,
    HistoryUp,
    HistoryDown,
    /// Skip the pause after a round, or deal a fresh game once one is over.
    Continue,
    Act { player: usize, action: Action },
}

/// What the table currently shows. Trails the game while events are replayed.
#[derive(Debug, Clone, Default)]
pub struct TableView {
    pub round: u32,
    pub phase: Option<Phase>,
    pub board: Vec<Card>,
    /// Set when a round's result is replayed, cleared when the next round is.
    pub result: Option<RoundResult>,
    pub game_over: Option<String>,
}

#[derive(Debug)]
#[non_exhaustive]
pub struct AppState {
    pub scene: Scene,
    pub game: Game,
    pub view: TableView,
    // Menu config being edited
    pub menu_index: usize,
    pub cfg: GameConfig,
    pub cfg_reveal_delay_ms: u64,
    pub reveal_delay_ms: u64,
    pending: VecDeque<GameEvent>,
    paused_until: Option<Instant>,
    feed: VecDeque<String>,
    menu_error: Option<String>,
    help_open: bool,
    history_open: bool,
    history_offset: usize,
    action_error: Option<String>,
    action_error_at: Option<Instant>,
}

impl AppState {
    pub const HISTORY_PAGE_SIZE: usize = 20;
    pub const DEFAULT_REVEAL_DELAY_MS: u64 = 600;
    const FEED_LEN: usize = 100;
    const ACTION_ERROR_TTL: Duration = Duration::from_secs(3);

    /// Start on the menu with a game already built from `config`.
    pub fn new(config: GameConfig, reveal_delay_ms: u64) -> Result<Self, GameError> {
        let game = Game::new(config.clone())?;
        let mut app = Self {
            scene: Scene::Menu,
            game,
            view: TableView::default(),
            menu_index: 0,
            cfg: config,
            cfg_reveal_delay_ms: reveal_delay_ms,
            reveal_delay_ms,
            pending: VecDeque::new(),
            paused_until: None,
            feed: VecDeque::new(),
            menu_error: None,
            help_open: false,
            history_open: false,
            history_offset: 0,
            action_error: None,
            action_error_at: None,
        };
        app.pull_events();
        Ok(app)
    }

    /// Swap in a new game and replay it from the first event.
    pub(crate) fn reset_game(&mut self, game: Game) {
        self.game = game;
        self.view = TableView::default();
        self.pending.clear();
        self.paused_until = None;
        self.feed.clear();
        self.history_offset = 0;
        self.clear_action_error();
        self.pull_events();
    }

    /// True while events are still being replayed.
    pub fn busy(&self) -> bool {
        !self.pending.is_empty() || self.paused_until.is_some()
    }

    /// Seat whose hole cards may be shown face up right now.
    pub fn visible_seat(&self) -> Option<usize> {
        if self.busy() || self.game.is_over() || self.game.is_halted() {
            return None;
        }
        Some(self.game.current())
    }

    /// Event feed lines, oldest first.
    pub fn feed(&self) -> impl Iterator<Item = &str> {
        self.feed.iter().map(String::as_str)
    }

    pub fn action_error(&self) -> Option<&str> {
        self.action_error.as_deref()
    }

    pub fn menu_error(&self) -> Option<&str> {
        self.menu_error.as_deref()
    }

    pub(crate) fn set_menu_error(&mut self, msg: Option<String>) {
        self.menu_error = msg;
    }

    fn set_action_error(&mut self, msg: String) {
        self.action_error = Some(msg);
        self.action_error_at = Some(Instant::now());
    }

    fn clear_action_error(&mut self) {
        self.action_error = None;
        self.action_error_at = None;
    }

    pub fn help_open(&self) -> bool {
        self.help_open
    }

    pub fn history_open(&self) -> bool {
        self.history_open
    }

    pub fn history_offset(&self) -> usize {
        self.history_offset
    }

    pub(crate) fn close_help(&mut self) {
        self.help_open = false;
    }

    pub(crate) fn close_history(&mut self) {
        self.history_open = false;
    }

    fn pull_events(&mut self) {
        self.pending.extend(self.game.drain_events());
    }

    fn submit(&mut self, player: usize, action: Action) -> bool {
        if self.scene != Scene::Table {
            return false;
        }
        if self.busy() {
            self.set_action_error("Wait for the deal to finish".to_string());
            return false;
        }
        match self.game.act(player, action) {
            Ok(()) => {
                self.clear_action_error();
                self.pull_events();
                true
            }
            Err(err) => {
                self.set_action_error(err.to_string());
                self.pull_events();
                false
            }
        }
    }

    fn continue_play(&mut self) {
        if self.game.is_over() && !self.busy() {
            match Game::new(self.game.config().clone()) {
                Ok(game) => self.reset_game(game),
                Err(err) => self.set_action_error(err.to_string()),
            }
            return;
        }
        self.paused_until = None;
    }

    pub fn handle_input(&mut self, action: InputAction) -> bool {
        match action {
            InputAction::ToggleMenu => {
                self.toggle_menu();
                false
            }
            InputAction::ToggleHelp => {
                if self.scene == Scene::Table {
                    self.history_open = false;
                    self.help_open = !self.help_open;
                }
                false
            }
            InputAction::ToggleHistory => {
                if self.scene == Scene::Table {
                    self.help_open = false;
                    if !self.history_open {
                        self.history_offset = 0;
                    }
                    self.history_open = !self.history_open;
                }
                false
            }
            InputAction::HistoryUp => {
                if self.scene == Scene::Table && self.history_open {
                    let max_offset =
                        self.game.history_len().saturating_sub(Self::HISTORY_PAGE_SIZE);
                    self.history_offset = (self.history_offset + 1).min(max_offset);
                }
                false
            }
            InputAction::HistoryDown => {
                if self.scene == Scene::Table && self.history_open && self.history_offset > 0 {
                    self.history_offset -= 1;
                }
                false
            }
            InputAction::MenuNext => {
                if self.scene == Scene::Menu {
                    self.menu_next();
                }
                false
            }
            InputAction::MenuPrev => {
                if self.scene == Scene::Menu {
                    self.menu_prev();
                }
                false
            }
            InputAction::MenuInc => {
                if self.scene == Scene::Menu {
                    self.menu_inc();
                }
                false
            }
            InputAction::MenuDec => {
                if self.scene == Scene::Menu {
                    self.menu_dec();
                }
                false
            }
            InputAction::MenuApply => {
                if self.scene == Scene::Menu {
                    self.apply_menu();
                }
                false
            }
            InputAction::MenuCancel => {
                if self.scene == Scene::Menu {
                    self.cancel_menu();
                }
                false
            }
            InputAction::Continue => {
                if self.scene == Scene::Table {
                    self.continue_play();
                }
                false
            }
            InputAction::Act { player, action } => self.submit(player, action),
        }
    }

    /// Replay queued events up to `now`. A community card or a round result
    /// holds the queue for the reveal delay.
    pub fn on_tick(&mut self, now: Instant) {
        if let Some(at) = self.action_error_at {
            if at.elapsed() >= Self::ACTION_ERROR_TTL {
                self.clear_action_error();
            }
        }
        loop {
            if let Some(until) = self.paused_until {
                if until > now {
                    return;
                }
                self.paused_until = None;
            }
            let Some(event) = self.pending.pop_front() else {
                return;
            };
            let hold = match &event {
                GameEvent::CardDealt {
                    position: CardPosition::Community { .. },
                    ..
                } => Some(self.reveal_delay()),
                GameEvent::RoundEnded { .. } => Some(self.reveal_delay() * 4),
                _ => None,
            };
            self.replay(event);
            if let Some(delay) = hold.filter(|d| !d.is_zero()) {
                self.paused_until = Some(now + delay);
            }
        }
    }

    fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }

    fn replay(&mut self, event: GameEvent) {
        let names = {
            let p = self.game.players();
            [p[0].name().to_string(), p[1].name().to_string()]
        };
        match &event {
            GameEvent::RoundStarted { round, .. } => {
                self.view.round = *round;
                self.view.phase = Some(Phase::PreFlop);
                self.view.board.clear();
                self.view.result = None;
            }
            GameEvent::CardDealt {
                card,
                position: CardPosition::Community { .. },
            } => self.view.board.push(*card),
            GameEvent::PhaseAdvanced { phase, .. } => self.view.phase = Some(*phase),
            GameEvent::RoundEnded { .. } => {
                // at most one round ends per action, so this is still the one being replayed
                self.view.result = self.game.last_result().cloned();
                self.view.phase = Some(Phase::Showdown);
            }
            GameEvent::GameOver { message, .. } => self.view.game_over = Some(message.clone()),
            _ => {}
        }
        if matches!(event, GameEvent::TurnChanged { .. } | GameEvent::CardDealt { .. }) {
            return;
        }
        let line = event.describe(&[names[0].as_str(), names[1].as_str()]);
        if self.feed.len() == Self::FEED_LEN {
            self.feed.pop_front();
        }
        self.feed.push_back(line);
    }
}
