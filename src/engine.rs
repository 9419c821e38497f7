// Engine API boundary. Front ends (the TUI, tests, a future network layer)
// drive a session through this trait instead of reaching into `Game`.

use crate::cards::Card;
use crate::events::GameEvent;
use crate::game::{Game, GameError, HandHistoryEntry, Phase, RoundResult};
use crate::player::Player;

pub trait GameEngine {
    // Player actions
    fn fold(&mut self, player: usize) -> Result<(), GameError>;
    fn call(&mut self, player: usize) -> Result<(), GameError>;
    fn raise(&mut self, player: usize) -> Result<(), GameError>;
    fn bet(&mut self, player: usize) -> Result<(), GameError>;
    fn check(&mut self, player: usize) -> Result<(), GameError>;

    // Queries
    fn phase(&self) -> Phase;
    fn pot(&self) -> u64;
    fn top_wager(&self) -> u64;
    fn player(&self, idx: usize) -> Option<&Player>;
    fn community(&self) -> &[Card];
    fn current(&self) -> usize;
    fn dealer(&self) -> usize;
    fn last_result(&self) -> Option<&RoundResult>;
    fn is_over(&self) -> bool;
    fn history_recent(&self, n: usize) -> Vec<HandHistoryEntry>;

    // Notifications
    fn drain_events(&mut self) -> Vec<GameEvent>;
}

impl GameEngine for Game {
    fn fold(&mut self, player: usize) -> Result<(), GameError> {
        Game::fold(self, player)
    }
    fn call(&mut self, player: usize) -> Result<(), GameError> {
        Game::call(self, player)
    }
    fn raise(&mut self, player: usize) -> Result<(), GameError> {
        Game::raise(self, player)
    }
    fn bet(&mut self, player: usize) -> Result<(), GameError> {
        Game::bet(self, player)
    }
    fn check(&mut self, player: usize) -> Result<(), GameError> {
        Game::check(self, player)
    }

    fn phase(&self) -> Phase {
        self.phase
    }
    fn pot(&self) -> u64 {
        self.pot
    }
    fn top_wager(&self) -> u64 {
        self.top_wager
    }
    fn player(&self, idx: usize) -> Option<&Player> {
        self.players.get(idx)
    }
    fn community(&self) -> &[Card] {
        self.board.as_slice()
    }
    fn current(&self) -> usize {
        self.current
    }
    fn dealer(&self) -> usize {
        self.dealer
    }
    fn last_result(&self) -> Option<&RoundResult> {
        Game::last_result(self)
    }
    fn is_over(&self) -> bool {
        Game::is_over(self)
    }
    fn history_recent(&self, n: usize) -> Vec<HandHistoryEntry> {
        Game::history_recent(self, n)
    }

    fn drain_events(&mut self) -> Vec<GameEvent> {
        Game::drain_events(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    fn drive(engine: &mut dyn GameEngine) {
        let dealer = engine.dealer();
        engine.call(dealer).unwrap();
        engine.check(1 - dealer).unwrap();
    }

    #[test]
    fn trait_object_drives_a_phase() {
        let mut game = Game::new(GameConfig::default().with_seed(3)).unwrap();
        drive(&mut game);
        assert_eq!(GameEngine::phase(&game), Phase::Flop);
        assert_eq!(GameEngine::community(&game).len(), 3);
        assert_eq!(GameEngine::pot(&game), 4);
        assert!(!GameEngine::drain_events(&mut game).is_empty());
    }
}
