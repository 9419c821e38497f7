use crate::deck::{self, DeckError, STANDARD_SIZE};

/// Cards a single round can consume: two hole cards each, three burns, five on the board.
pub const CARDS_PER_ROUND: usize = 12;

/// When the discard pile goes back into the draw deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReshufflePolicy {
    /// Gather and shuffle before every round after the first.
    #[default]
    EveryRound,
    /// Only when the draw deck can no longer cover a full round.
    WhenLow,
}

impl ReshufflePolicy {
    pub fn label(self) -> &'static str {
        match self {
            ReshufflePolicy::EveryRound => "every round",
            ReshufflePolicy::WhenLow => "when low",
        }
    }

    /// Whether a draw deck of `remaining` cards needs the discards back.
    pub fn wants_reshuffle(self, remaining: usize) -> bool {
        match self {
            ReshufflePolicy::EveryRound => true,
            ReshufflePolicy::WhenLow => remaining < CARDS_PER_ROUND,
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("blinds must be positive")]
    ZeroBlind,
    #[error("small blind {small} exceeds big blind {big}")]
    SmallAboveBig { small: u64, big: u64 },
    #[error("big blind {big} exceeds the starting stack of {chips}")]
    BigBlindAboveStack { big: u64, chips: u64 },
    #[error("a starting stack of {0} chips is too large")]
    StackTooLarge(u64),
    #[error("a {size}-card deck cannot cover a round ({needed} cards)")]
    DeckTooSmall { size: usize, needed: usize },
    #[error("player {0} needs a name")]
    EmptyName(usize),
    #[error(transparent)]
    Deck(#[from] DeckError),
}

/// Table settings for one session.
///
/// ```
/// use heads_up_holdem::config::GameConfig;
///
/// let cfg = GameConfig::default().with_starting_chips(500).with_blinds(5, 10).with_seed(7);
/// assert!(cfg.validate().is_ok());
/// assert_eq!(cfg.big_blind, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub player_names: [String; 2],
    pub starting_chips: u64,
    pub small_blind: u64,
    pub big_blind: u64,
    pub deck_size: usize,
    pub reshuffle: ReshufflePolicy,
    /// `None` draws a fresh seed from the thread RNG.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player_names: ["P1".to_string(), "P2".to_string()],
            starting_chips: 200,
            small_blind: 1,
            big_blind: 2,
            deck_size: STANDARD_SIZE,
            reshuffle: ReshufflePolicy::EveryRound,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn with_names(mut self, first: impl Into<String>, second: impl Into<String>) -> Self {
        self.player_names = [first.into(), second.into()];
        self
    }

    pub fn with_starting_chips(mut self, chips: u64) -> Self {
        self.starting_chips = chips;
        self
    }

    pub fn with_blinds(mut self, small: u64, big: u64) -> Self {
        self.small_blind = small;
        self.big_blind = big;
        self
    }

    pub fn with_deck_size(mut self, size: usize) -> Self {
        self.deck_size = size;
        self
    }

    pub fn with_reshuffle(mut self, policy: ReshufflePolicy) -> Self {
        self.reshuffle = policy;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Chips on the table for the whole session.
    pub fn total_chips(&self) -> u64 {
        self.starting_chips.saturating_mul(2)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(i) = self.player_names.iter().position(|n| n.trim().is_empty()) {
            return Err(ConfigError::EmptyName(i));
        }
        // a raise can double a wager that already holds both stacks
        if self.starting_chips.checked_mul(4).is_none() {
            return Err(ConfigError::StackTooLarge(self.starting_chips));
        }
        if self.small_blind == 0 || self.big_blind == 0 {
            return Err(ConfigError::ZeroBlind);
        }
        if self.small_blind > self.big_blind {
            return Err(ConfigError::SmallAboveBig {
                small: self.small_blind,
                big: self.big_blind,
            });
        }
        if self.big_blind > self.starting_chips {
            return Err(ConfigError::BigBlindAboveStack {
                big: self.big_blind,
                chips: self.starting_chips,
            });
        }
        deck::validate_size(self.deck_size)?;
        if self.deck_size < CARDS_PER_ROUND {
            return Err(ConfigError::DeckTooSmall {
                size: self.deck_size,
                needed: CARDS_PER_ROUND,
            });
        }
        Ok(())
    }
}
