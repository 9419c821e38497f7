use crate::cards::Card;
use crate::config::{ConfigError, GameConfig, CARDS_PER_ROUND};
use crate::deck::{Deck, DeckError};
use crate::evaluator::{evaluate, Category, EvalError, Evaluation};
use crate::events::{CardPosition, GameEvent};
use crate::hand::{Board, HoleCards};
use crate::player::{Player, WagerOutcome};
use crate::showdown::{self, Verdict};
use log::{debug, error, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Phase {
    PreFlop,
    Flop,
    Turn,
    River,
    Showdown,
}

impl Phase {
    /// Returns the display name, e.g. "Pre-flop".
    pub fn label(self) -> &'static str {
        match self {
            Phase::PreFlop => "Pre-flop",
            Phase::Flop => "Flop",
            Phase::Turn => "Turn",
            Phase::River => "River",
            Phase::Showdown => "Showdown",
        }
    }

    /// The phase after this one. Showdown is terminal.
    pub fn next(self) -> Phase {
        match self {
            Phase::PreFlop => Phase::Flop,
            Phase::Flop => Phase::Turn,
            Phase::Turn => Phase::River,
            Phase::River | Phase::Showdown => Phase::Showdown,
        }
    }

    /// Community cards turned face up on entering this phase.
    fn reveals(self) -> usize {
        match self {
            Phase::Flop => 3,
            Phase::Turn | Phase::River => 1,
            Phase::PreFlop | Phase::Showdown => 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Fold,
    Call,
    Raise,
    Bet,
    Check,
}

impl Action {
    /// Returns the key-hint name, e.g. "Call".
    pub fn label(self) -> &'static str {
        match self {
            Action::Fold => "Fold",
            Action::Call => "Call",
            Action::Raise => "Raise",
            Action::Bet => "Bet",
            Action::Check => "Check",
        }
    }

    /// Returns the verb for the table log, e.g. "called".
    pub fn past_tense(self) -> &'static str {
        match self {
            Action::Fold => "folded",
            Action::Call => "called",
            Action::Raise => "raised",
            Action::Bet => "bet",
            Action::Check => "checked",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandHistoryVerb {
    SmallBlind,
    BigBlind,
    Fold,
    Check,
    Call,
    Bet,
    Raise,
    Returned,
    Win,
    Split,
}

impl HandHistoryVerb {
    /// Returns the short form shown in the history overlay.
    pub fn label(self) -> &'static str {
        match self {
            HandHistoryVerb::SmallBlind => "SB",
            HandHistoryVerb::BigBlind => "BB",
            HandHistoryVerb::Fold => "Fold",
            HandHistoryVerb::Check => "Check",
            HandHistoryVerb::Call => "Call",
            HandHistoryVerb::Bet => "Bet",
            HandHistoryVerb::Raise => "Raise",
            HandHistoryVerb::Returned => "Uncalled",
            HandHistoryVerb::Win => "Win",
            HandHistoryVerb::Split => "Split",
        }
    }
}

impl From<Action> for HandHistoryVerb {
    fn from(a: Action) -> Self {
        match a {
            Action::Fold => HandHistoryVerb::Fold,
            Action::Call => HandHistoryVerb::Call,
            Action::Raise => HandHistoryVerb::Raise,
            Action::Bet => HandHistoryVerb::Bet,
            Action::Check => HandHistoryVerb::Check,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct HandHistoryEntry {
    pub round: u32,
    pub seat: usize,
    pub verb: HandHistoryVerb,
    pub amount: Option<u64>,
    pub phase: Phase,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActionError {
    #[error("it is player {current}'s turn, not player {player}'s")]
    NotYourTurn { player: usize, current: usize },
    #[error("nothing to call: top wager {top}, own wager {wager}")]
    CannotCall { top: u64, wager: u64 },
    #[error("cannot raise before anyone has bet")]
    CannotRaise,
    #[error("cannot bet into an open wager of {top}")]
    CannotBet { top: u64 },
    #[error("cannot check facing a wager: top wager {top}, own wager {wager}")]
    CannotCheck { top: u64, wager: u64 },
    #[error("player has no chips left to wager")]
    NoChips,
    #[error("no player at seat {0}")]
    UnknownPlayer(usize),
    #[error("the game is over")]
    GameOver,
    #[error("the session was halted after an internal fault")]
    Halted,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvariantViolation {
    #[error("chip total is {found}, expected {expected}")]
    ChipTotal { expected: u64, found: u64 },
    #[error("card {0} appears twice")]
    DuplicateCard(Card),
    #[error("{found} cards accounted for, expected {expected}")]
    CardCount { expected: usize, found: usize },
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    #[error(transparent)]
    Action(#[from] ActionError),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Deck(#[from] DeckError),
    #[error("hand evaluation failed: {0}")]
    Eval(#[from] EvalError),
    #[error("invariant violated: {0}")]
    Invariant(#[from] InvariantViolation),
}

/// How the last round ended.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub struct RoundResult {
    pub round: u32,
    pub verdict: Verdict,
    /// True when a fold ended the round before showdown.
    pub by_fold: bool,
    /// Chips each player took from the pot.
    pub amounts: [u64; 2],
    /// Showdown categories; `None` after a fold.
    pub categories: Option<[Category; 2]>,
    /// Hole cards shown at showdown; hidden after a fold.
    pub hands: [Option<HoleCards>; 2],
    pub board: Vec<Card>,
    pub message: String,
}

/// Entries kept in the hand history; the oldest are dropped past this.
pub const HISTORY_LIMIT: usize = 2_000;

/// A heads-up session: two players, one deck, rounds until a stack is empty.
///
/// Every accepted action publishes a handful of [`GameEvent`]s into an outbox
/// that only [`Game::drain_events`] empties, so callers that never drain it
/// keep every event of the session in memory.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Game {
    pub(crate) config: GameConfig,
    pub(crate) players: [Player; 2],
    pub(crate) deck: Deck,
    pub(crate) discard: Deck,
    pub(crate) board: Board,
    pub(crate) phase: Phase,
    pub(crate) pot: u64,
    pub(crate) top_wager: u64,
    pub(crate) dealer: usize,
    pub(crate) current: usize,
    pub(crate) round: u32,
    card_total: usize,
    total_chips: u64,
    rng: ChaCha8Rng,
    loser: Option<usize>,
    halted: bool,
    last_result: Option<RoundResult>,
    events: Vec<GameEvent>,
    hand_history: Vec<HandHistoryEntry>,
}

impl Game {
    /// Validate `config`, shuffle a fresh deck, and start round one with player 0 dealing.
    ///
    /// ```
    /// use heads_up_holdem::config::GameConfig;
    /// use heads_up_holdem::game::{Game, Phase};
    ///
    /// let game = Game::new(GameConfig::default().with_seed(1)).unwrap();
    /// assert_eq!(game.phase(), Phase::PreFlop);
    /// assert_eq!(game.top_wager(), 2);
    /// assert_eq!(game.current(), game.dealer());
    /// ```
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let mut rng = seeded_rng(&config);
        let mut deck = Deck::with_size(config.deck_size)?;
        deck.shuffle_with(&mut rng);
        Self::assemble(config, deck, rng, true)
    }

    /// Start a session on a prepared deck, drawn as given. Later reshuffles
    /// still follow the configured policy.
    pub fn with_deck(config: GameConfig, deck: Deck) -> Result<Self, GameError> {
        config.validate()?;
        if deck.len() < CARDS_PER_ROUND {
            return Err(ConfigError::DeckTooSmall {
                size: deck.len(),
                needed: CARDS_PER_ROUND,
            }
            .into());
        }
        let mut seen = HashSet::new();
        if let Some(dup) = deck.as_slice().iter().find(|c| !seen.insert(**c)) {
            return Err(InvariantViolation::DuplicateCard(*dup).into());
        }
        let rng = seeded_rng(&config);
        Self::assemble(config, deck, rng, false)
    }

    fn assemble(config: GameConfig, deck: Deck, rng: ChaCha8Rng, shuffled: bool) -> Result<Self, GameError> {
        let [first, second] = config.player_names.clone();
        let players = [
            Player::new(first, config.starting_chips),
            Player::new(second, config.starting_chips),
        ];
        let mut game = Self {
            card_total: deck.len(),
            total_chips: config.total_chips(),
            config,
            players,
            deck,
            discard: Deck::empty(),
            board: Board::empty(),
            phase: Phase::PreFlop,
            pot: 0,
            top_wager: 0,
            dealer: 0,
            current: 0,
            round: 0,
            rng,
            loser: None,
            halted: false,
            last_result: None,
            events: Vec::new(),
            hand_history: Vec::new(),
        };
        info!(
            "new session: {} vs {}, {} chips each, blinds {}/{}",
            game.players[0].name,
            game.players[1].name,
            game.config.starting_chips,
            game.config.small_blind,
            game.config.big_blind
        );
        if shuffled {
            game.push_event(GameEvent::DeckShuffled {
                cards: game.deck.len(),
            });
        }
        game.start_round()?;
        Ok(game)
    }

    /// Returns the session configuration
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn player(&self, idx: usize) -> Option<&Player> {
        self.players.get(idx)
    }

    /// Returns the community cards
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn community(&self) -> &[Card] {
        self.board.as_slice()
    }

    /// Returns the current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns chips collected from closed phases
    pub fn pot(&self) -> u64 {
        self.pot
    }

    /// Returns the highest wager in the current phase
    pub fn top_wager(&self) -> u64 {
        self.top_wager
    }

    /// Returns the dealer (small blind) index
    pub fn dealer(&self) -> usize {
        self.dealer
    }

    /// Returns the index of the player to act
    pub fn current(&self) -> usize {
        self.current
    }

    /// Returns the 1-based round number
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn last_result(&self) -> Option<&RoundResult> {
        self.last_result.as_ref()
    }

    pub fn is_over(&self) -> bool {
        self.loser.is_some()
    }

    /// The player who ran out of chips, once the game is over.
    pub fn loser(&self) -> Option<usize> {
        self.loser
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// Cards left in the draw deck.
    pub fn deck_len(&self) -> usize {
        self.deck.len()
    }

    pub fn discard_len(&self) -> usize {
        self.discard.len()
    }

    pub fn total_chips(&self) -> u64 {
        self.total_chips
    }

    /// Chips `idx` must add to match the top wager.
    pub fn to_call(&self, idx: usize) -> u64 {
        self.players
            .get(idx)
            .map_or(0, |p| self.top_wager.saturating_sub(p.wager))
    }

    /// Events published since the last drain, oldest first.
    pub fn pending_events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Takes every pending event, leaving the outbox empty.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn history_recent(&self, n: usize) -> Vec<HandHistoryEntry> {
        self.history_recent_offset(n, 0)
    }

    /// `n` entries ending `offset` entries before the newest.
    pub fn history_recent_offset(&self, n: usize, offset: usize) -> Vec<HandHistoryEntry> {
        let len = self.hand_history.len();
        if n == 0 || len == 0 {
            return Vec::new();
        }
        let offset = offset.min(len.saturating_sub(n));
        let end = len - offset;
        let start = end.saturating_sub(n);
        self.hand_history[start..end].to_vec()
    }

    pub fn history_len(&self) -> usize {
        self.hand_history.len()
    }

    pub fn fold(&mut self, player: usize) -> Result<(), GameError> {
        self.act(player, Action::Fold)
    }

    pub fn call(&mut self, player: usize) -> Result<(), GameError> {
        self.act(player, Action::Call)
    }

    /// Raise to twice the top wager.
    pub fn raise(&mut self, player: usize) -> Result<(), GameError> {
        self.act(player, Action::Raise)
    }

    /// Open the phase for one big blind.
    pub fn bet(&mut self, player: usize) -> Result<(), GameError> {
        self.act(player, Action::Bet)
    }

    pub fn check(&mut self, player: usize) -> Result<(), GameError> {
        self.act(player, Action::Check)
    }

    /// Validate and apply one action, then run the end-of-turn evaluation.
    pub fn act(&mut self, player: usize, action: Action) -> Result<(), GameError> {
        if let Err(e) = self.validate(player, action) {
            debug!("rejected {} from seat {player}: {e}", action.label());
            return Err(e.into());
        }
        let moved = self.apply(player, action);
        info!(
            "{} {} ({} chips moved, top wager {})",
            self.players[player].name,
            action.past_tense(),
            moved,
            self.top_wager
        );
        self.record_history(player, action.into(), (moved > 0).then_some(moved));
        self.push_event(GameEvent::ActionTaken {
            player,
            action,
            amount: moved,
        });

        let outcome = self
            .end_turn()
            .and_then(|()| self.check_invariants().map_err(GameError::from));
        if let Err(e) = &outcome {
            self.halt(e);
        }
        outcome
    }

    fn validate(&self, player: usize, action: Action) -> Result<(), ActionError> {
        if self.halted {
            return Err(ActionError::Halted);
        }
        if self.loser.is_some() {
            return Err(ActionError::GameOver);
        }
        let p = self.players.get(player).ok_or(ActionError::UnknownPlayer(player))?;
        if player != self.current {
            return Err(ActionError::NotYourTurn {
                player,
                current: self.current,
            });
        }
        let (top, wager) = (self.top_wager, p.wager);
        match action {
            Action::Fold => Ok(()),
            Action::Call if top <= wager => Err(ActionError::CannotCall { top, wager }),
            Action::Raise if top == 0 => Err(ActionError::CannotRaise),
            Action::Bet if top != 0 => Err(ActionError::CannotBet { top }),
            Action::Check if top != wager => Err(ActionError::CannotCheck { top, wager }),
            Action::Call | Action::Raise | Action::Bet if p.chips == 0 => Err(ActionError::NoChips),
            _ => Ok(()),
        }
    }

    /// Mutate the ledger for an already validated action. Returns chips moved.
    fn apply(&mut self, player: usize, action: Action) -> u64 {
        let top = self.top_wager;
        let big_blind = self.config.big_blind;
        let p = &mut self.players[player];
        let before = p.chips;
        let mut new_top = top;
        match action {
            Action::Fold => p.folded = true,
            Action::Call => {
                p.wager_chips(top - p.wager);
            }
            Action::Raise => {
                let outcome = p.wager_chips(top.saturating_mul(2).saturating_sub(p.wager));
                if outcome == WagerOutcome::Normal || p.wager > top {
                    new_top = p.wager;
                }
            }
            Action::Bet => {
                p.wager_chips(big_blind);
                new_top = p.wager;
            }
            Action::Check => {}
        }
        p.acted = true;
        let moved = before - p.chips;
        self.top_wager = new_top;
        moved
    }

    fn end_turn(&mut self) -> Result<(), GameError> {
        if let Some(folder) = self.players.iter().position(|p| p.folded) {
            self.collect_wagers();
            return self.finish_round(Verdict::Winner(1 - folder), None);
        }
        self.settle_uncalled();
        let [a, b] = &self.players;
        if a.wager == b.wager && a.acted && b.acted {
            return self.close_phase();
        }
        self.current = 1 - self.current;
        self.push_event(GameEvent::TurnChanged { player: self.current });
        Ok(())
    }

    /// Return the part of a wager the all-in opponent can never match.
    fn settle_uncalled(&mut self) {
        for short in 0..2 {
            let long = 1 - short;
            let (sw, lw) = (self.players[short].wager, self.players[long].wager);
            if self.players[short].chips == 0 && sw < lw {
                let amount = self.players[long].return_wager(lw - sw);
                self.top_wager = sw;
                info!("{amount} uncalled returned to {}", self.players[long].name);
                self.record_history(long, HandHistoryVerb::Returned, Some(amount));
                self.push_event(GameEvent::UncalledReturned { player: long, amount });
            }
        }
    }

    fn close_phase(&mut self) -> Result<(), GameError> {
        self.collect_wagers();
        self.top_wager = 0;
        for p in &mut self.players {
            p.acted = false;
        }
        if self.current == self.dealer {
            self.current = 1 - self.dealer;
        }
        self.advance_phase()?;
        if self.phase != Phase::Showdown && self.players.iter().any(|p| p.chips == 0) {
            info!("a player is all in; running out the board");
            while self.phase != Phase::Showdown {
                self.advance_phase()?;
            }
        }
        if self.phase == Phase::Showdown {
            return self.showdown();
        }
        self.push_event(GameEvent::TurnChanged { player: self.current });
        Ok(())
    }

    fn advance_phase(&mut self) -> Result<(), GameError> {
        let next = self.phase.next();
        let mut revealed = Vec::with_capacity(next.reveals());
        if next.reveals() > 0 {
            let burn = self.deck.draw()?;
            self.discard.add_card(burn);
            self.push_event(GameEvent::CardDealt {
                card: burn,
                position: CardPosition::Burn,
            });
            for _ in 0..next.reveals() {
                let card = self.deck.draw()?;
                let slot = self.board.len();
                self.board.push(card);
                revealed.push(card);
                self.push_event(GameEvent::CardDealt {
                    card,
                    position: CardPosition::Community { slot },
                });
            }
        }
        self.phase = next;
        info!("{} (board: {})", next.label(), self.board);
        self.push_event(GameEvent::PhaseAdvanced { phase: next, revealed });
        Ok(())
    }

    fn showdown(&mut self) -> Result<(), GameError> {
        let evaluations = [self.evaluate_seat(0)?, self.evaluate_seat(1)?];
        info!(
            "showdown: {} has {}, {} has {}",
            self.players[0].name, evaluations[0].category, self.players[1].name, evaluations[1].category
        );
        let verdict = showdown::decide(&evaluations);
        let categories = [evaluations[0].category, evaluations[1].category];
        self.push_event(GameEvent::Showdown { evaluations });
        self.finish_round(verdict, Some(categories))
    }

    fn evaluate_seat(&self, idx: usize) -> Result<Evaluation, EvalError> {
        let mut cards = self.players[idx].hand.clone();
        cards.extend_from_slice(self.board.as_slice());
        evaluate(&cards)
    }

    /// Pay out, tear down, then either end the game or start the next round.
    fn finish_round(&mut self, verdict: Verdict, categories: Option<[Category; 2]>) -> Result<(), GameError> {
        let pot = std::mem::take(&mut self.pot);
        let amounts = showdown::payout(verdict, pot, self.dealer);
        for (p, amount) in self.players.iter_mut().zip(amounts) {
            p.award_chips(amount);
        }
        let message = match verdict {
            Verdict::Winner(w) => format!("{} won the pot ({pot} chips)", self.players[w].name),
            Verdict::Split => "Draw: both players split the pot".to_string(),
        };
        info!("{message}");
        for (seat, amount) in amounts.iter().enumerate().filter(|(_, a)| **a > 0) {
            let verb = match verdict {
                Verdict::Winner(_) => HandHistoryVerb::Win,
                Verdict::Split => HandHistoryVerb::Split,
            };
            self.record_history(seat, verb, Some(*amount));
        }
        let by_fold = categories.is_none();
        let hands = if by_fold {
            [None, None]
        } else {
            [self.players[0].hole(), self.players[1].hole()]
        };
        self.last_result = Some(RoundResult {
            round: self.round,
            verdict,
            by_fold,
            amounts,
            categories,
            hands,
            board: self.board.as_slice().to_vec(),
            message: message.clone(),
        });
        self.push_event(GameEvent::RoundEnded {
            verdict,
            amounts,
            message,
        });

        self.phase = Phase::Showdown;
        self.teardown();
        self.check_invariants()?;

        if let Some(loser) = self.players.iter().position(|p| p.chips == 0) {
            let message = format!("{} lost all their money: GAME OVER", self.players[loser].name);
            info!("{message}");
            self.loser = Some(loser);
            self.push_event(GameEvent::GameOver {
                loser,
                final_chips: [self.players[0].chips, self.players[1].chips],
                message,
            });
            return Ok(());
        }
        self.dealer = 1 - self.dealer;
        self.start_round()
    }

    fn teardown(&mut self) {
        for p in &mut self.players {
            for card in p.clear_hand() {
                self.discard.add_card(card);
            }
        }
        for card in self.board.take_all() {
            self.discard.add_card(card);
        }
    }

    fn start_round(&mut self) -> Result<(), GameError> {
        self.round += 1;
        if self.round > 1 && self.config.reshuffle.wants_reshuffle(self.deck.len()) {
            self.discard.drain_into(&mut self.deck);
            self.deck.shuffle_with(&mut self.rng);
            debug!("reshuffled {} cards", self.deck.len());
            self.push_event(GameEvent::DeckShuffled {
                cards: self.deck.len(),
            });
        }
        self.phase = Phase::PreFlop;
        self.pot = 0;
        self.top_wager = 0;
        for p in &mut self.players {
            p.reset_for_round();
        }
        info!("round {} starts, {} deals", self.round, self.players[self.dealer].name);
        self.push_event(GameEvent::RoundStarted {
            round: self.round,
            dealer: self.dealer,
        });

        for player in 0..2 {
            for slot in 0..2 {
                let card = self.deck.draw()?;
                self.players[player].add_to_hand(card);
                self.push_event(GameEvent::CardDealt {
                    card,
                    position: CardPosition::Hole { player, slot },
                });
            }
        }

        let (sb, bb) = (self.dealer, 1 - self.dealer);
        let small = self.players[sb].pay_blind(self.config.small_blind);
        self.record_history(sb, HandHistoryVerb::SmallBlind, Some(small));
        self.push_event(GameEvent::BlindPosted {
            player: sb,
            amount: small,
            big: false,
        });
        let big = self.players[bb].pay_blind(self.config.big_blind);
        self.record_history(bb, HandHistoryVerb::BigBlind, Some(big));
        self.push_event(GameEvent::BlindPosted {
            player: bb,
            amount: big,
            big: true,
        });
        debug!("blinds posted: {small} and {big}");

        self.top_wager = small.max(big);
        self.current = self.dealer;
        self.settle_uncalled();
        self.push_event(GameEvent::TurnChanged { player: self.current });
        Ok(())
    }

    fn collect_wagers(&mut self) {
        for p in &mut self.players {
            self.pot += p.take_wager();
        }
    }

    /// Chip and card conservation across the whole table.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        let found = self.pot + self.players.iter().map(|p| p.chips + p.wager).sum::<u64>();
        if found != self.total_chips {
            return Err(InvariantViolation::ChipTotal {
                expected: self.total_chips,
                found,
            });
        }
        let mut seen = HashSet::with_capacity(self.card_total);
        let all = self
            .deck
            .as_slice()
            .iter()
            .chain(self.discard.as_slice())
            .chain(self.players.iter().flat_map(|p| p.hand.iter()))
            .chain(self.board.as_slice());
        for card in all {
            if !seen.insert(*card) {
                return Err(InvariantViolation::DuplicateCard(*card));
            }
        }
        if seen.len() != self.card_total {
            return Err(InvariantViolation::CardCount {
                expected: self.card_total,
                found: seen.len(),
            });
        }
        Ok(())
    }

    fn halt(&mut self, err: &GameError) {
        error!("halting session: {err}");
        self.halted = true;
        debug_assert!(!matches!(err, GameError::Invariant(_)), "{err}");
    }

    fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    fn record_history(&mut self, seat: usize, verb: HandHistoryVerb, amount: Option<u64>) {
        if self.hand_history.len() >= HISTORY_LIMIT {
            self.hand_history.remove(0);
        }
        self.hand_history.push(HandHistoryEntry {
            round: self.round,
            seat,
            verb,
            amount,
            phase: self.phase,
        });
    }
}

fn seeded_rng(config: &GameConfig) -> ChaCha8Rng {
    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    ChaCha8Rng::seed_from_u64(seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn stacked(cards: &str, cfg: GameConfig) -> Game {
        Game::with_deck(cfg, Deck::from_top(parse_cards(cards).unwrap())).unwrap()
    }

    // P0 hole, P1 hole, burn, flop, burn, turn, burn, river
    const ROYAL_VS_DEUCES: &str = "Ah Kh 2s 2d 4c Qh Jh Th 5c 9h 6c 3c";

    #[test]
    fn round_one_deals_and_posts_blinds() {
        let g = stacked(ROYAL_VS_DEUCES, GameConfig::default());
        assert_eq!(g.players[0].hand, parse_cards("Ah Kh").unwrap());
        assert_eq!(g.players[1].hand, parse_cards("2s 2d").unwrap());
        assert_eq!((g.players[0].wager, g.players[1].wager), (1, 2));
        assert_eq!(g.top_wager, 2);
        assert_eq!(g.current, 0);
        assert_eq!(g.deck.len(), 8);
        assert!(g.check_invariants().is_ok());
    }

    #[test]
    fn raise_doubles_the_top_wager() {
        let mut g = stacked(ROYAL_VS_DEUCES, GameConfig::default());
        g.raise(0).unwrap();
        assert_eq!(g.players[0].wager, 4);
        assert_eq!(g.top_wager, 4);
        assert_eq!(g.current, 1);
        g.raise(1).unwrap();
        assert_eq!(g.players[1].wager, 8);
        assert_eq!(g.top_wager, 8);
    }

    #[test]
    fn rejected_actions_leave_state_untouched() {
        let mut g = stacked(ROYAL_VS_DEUCES, GameConfig::default());
        let before = (g.players.clone(), g.pot, g.top_wager, g.current);
        let history = g.history_len();
        assert_eq!(
            g.check(0),
            Err(GameError::Action(ActionError::CannotCheck { top: 2, wager: 1 }))
        );
        assert_eq!(g.bet(0), Err(GameError::Action(ActionError::CannotBet { top: 2 })));
        assert!(matches!(g.call(1), Err(GameError::Action(ActionError::NotYourTurn { .. }))));
        assert_eq!(g.fold(2), Err(GameError::Action(ActionError::UnknownPlayer(2))));
        assert_eq!(before, (g.players.clone(), g.pot, g.top_wager, g.current));
        assert_eq!(history, g.history_len());
    }

    #[test]
    fn short_big_blind_lowers_top_wager() {
        let mut g = stacked(ROYAL_VS_DEUCES, GameConfig::default());
        // leave P0 a single chip behind for the next round
        g.players[0].chips = 1;
        g.players[1].chips += 198;
        assert!(g.check_invariants().is_ok());
        g.fold(0).unwrap();
        assert_eq!(g.dealer, 1);
        assert_eq!(g.players[0].wager, 1);
        assert_eq!(g.players[0].chips, 0);
        assert_eq!(g.top_wager, 1);
        assert_eq!(g.current, 1);
        g.check(1).unwrap();
        g.check(0).unwrap();
        let result = g.last_result().unwrap();
        assert_eq!(result.round, 2);
        assert!(!result.by_fold);
        assert_eq!(result.board.len(), 5);
        assert!(g.check_invariants().is_ok());
    }

    #[test]
    fn all_in_call_runs_out_the_board() {
        let cfg = GameConfig::default().with_starting_chips(10);
        let mut g = stacked(ROYAL_VS_DEUCES, cfg);
        g.raise(0).unwrap(); // 4
        g.raise(1).unwrap(); // 8
        g.raise(0).unwrap(); // 16 > 10: all in at 10
        assert_eq!(g.players[0].chips, 0);
        assert_eq!(g.top_wager, 10);
        g.call(1).unwrap();
        // royal flush on the run-out ends the game
        assert!(g.is_over());
        assert_eq!(g.loser(), Some(1));
        let result = g.last_result().unwrap();
        assert_eq!(result.categories, Some([Category::RoyalFlush, Category::Pair]));
        assert_eq!(result.board.len(), 5);
        assert_eq!(g.players[0].chips, 20);
    }

    #[test]
    fn uncalled_excess_goes_back() {
        let cfg = GameConfig::default().with_starting_chips(10);
        let mut g = stacked(ROYAL_VS_DEUCES, cfg);
        g.players[1].chips = 3;
        g.players[0].chips += 5;
        // P1 has 3 behind plus the 2 blind; P0 raises to 4, P1 re-raises all in to 5
        g.raise(0).unwrap();
        g.raise(1).unwrap();
        assert_eq!(g.players[1].wager, 5);
        assert_eq!(g.top_wager, 5);
        g.raise(0).unwrap(); // to 10; P1 can only match 5 of it
        assert_eq!(g.players[0].wager, 0);
        assert!(g.pending_events().iter().any(|e| matches!(e, GameEvent::UncalledReturned { player: 0, amount: 5 })));
    }

    #[test]
    fn game_over_rejects_everything() {
        let cfg = GameConfig::default().with_starting_chips(2);
        let mut g = stacked(ROYAL_VS_DEUCES, cfg);
        // big blind is P1's whole stack
        assert_eq!(g.players[1].chips, 0);
        g.call(0).unwrap();
        g.check(1).unwrap();
        assert!(g.is_over());
        assert_eq!(g.fold(g.current), Err(GameError::Action(ActionError::GameOver)));
        assert!(matches!(g.drain_events().last(), Some(GameEvent::GameOver { loser: 1, .. })));
    }

    #[test]
    #[cfg_attr(debug_assertions, should_panic(expected = "chip total"))]
    fn invariant_fault_halts_the_session() {
        let mut g = stacked(ROYAL_VS_DEUCES, GameConfig::default());
        g.players[0].chips += 1;
        let err = g.call(0).unwrap_err();
        assert!(matches!(err, GameError::Invariant(InvariantViolation::ChipTotal { .. })));
        assert!(g.is_halted());
        assert_eq!(g.check(g.current), Err(GameError::Action(ActionError::Halted)));
    }

    #[test]
    fn history_pages_from_the_end() {
        let mut g = stacked(ROYAL_VS_DEUCES, GameConfig::default());
        g.call(0).unwrap();
        g.check(1).unwrap();
        assert_eq!(g.history_len(), 4);
        let last = g.history_recent(1);
        assert_eq!(last[0].verb, HandHistoryVerb::Check);
        let older = g.history_recent_offset(2, 2);
        assert_eq!(older[0].verb, HandHistoryVerb::SmallBlind);
        assert_eq!(older[1].verb, HandHistoryVerb::BigBlind);
        assert!(g.history_recent(0).is_empty());
    }

    #[test]
    fn history_keeps_only_the_newest_entries() {
        let mut g = Game::new(GameConfig::default().with_seed(9)).unwrap();
        // each folded round logs both blinds, the fold and the win
        for _ in 0..(HISTORY_LIMIT / 4 + 50) {
            let seat = g.current();
            g.fold(seat).unwrap();
        }
        assert!(!g.is_over());
        assert_eq!(g.history_len(), HISTORY_LIMIT);
        let newest = g.history_recent(2);
        assert_eq!(newest[0].verb, HandHistoryVerb::SmallBlind);
        assert_eq!(newest[0].round, g.round());
        assert_eq!(newest[1].verb, HandHistoryVerb::BigBlind);
    }

    #[test]
    fn oversized_stacks_are_rejected_before_play() {
        let cfg = GameConfig::default().with_starting_chips(u64::MAX / 2 + 1);
        assert!(matches!(
            Game::new(cfg),
            Err(GameError::Config(ConfigError::StackTooLarge(_)))
        ));
    }
}
