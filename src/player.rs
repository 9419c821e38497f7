use crate::cards::Card;
use crate::hand::HoleCards;

/// How a wager left the player's stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WagerOutcome {
    /// The full amount was covered.
    Normal,
    /// The stack ran out; everything left was wagered.
    AllIn,
}

/// One seat's chips and per-round state. Only `chips` carries from round to round.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub struct Player {
    pub(crate) name: String,
    pub(crate) chips: u64,
    pub(crate) wager: u64,
    pub(crate) hand: Vec<Card>,
    pub(crate) folded: bool,
    pub(crate) acted: bool,
}

impl Player {
    pub fn new(name: impl Into<String>, chips: u64) -> Self {
        Self {
            name: name.into(),
            chips,
            wager: 0,
            hand: Vec::with_capacity(2),
            folded: false,
            acted: false,
        }
    }

    /// Returns the player's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the chips behind, not counting the current wager
    pub fn chips(&self) -> u64 {
        self.chips
    }

    /// Returns the chips committed in the current phase
    pub fn wager(&self) -> u64 {
        self.wager
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Both hole cards once dealt.
    pub fn hole(&self) -> Option<HoleCards> {
        HoleCards::from_slice(&self.hand).ok()
    }

    pub fn folded(&self) -> bool {
        self.folded
    }

    /// Whether the player has acted voluntarily in the current phase
    pub fn acted(&self) -> bool {
        self.acted
    }

    /// Move `amount` from chips to wager, or everything left if the stack is short.
    ///
    /// ```
    /// use heads_up_holdem::player::{Player, WagerOutcome};
    ///
    /// let mut p = Player::new("P1", 200);
    /// assert_eq!(p.wager_chips(250), WagerOutcome::AllIn);
    /// assert_eq!((p.chips(), p.wager()), (0, 200));
    /// ```
    pub fn wager_chips(&mut self, amount: u64) -> WagerOutcome {
        if amount <= self.chips {
            self.chips -= amount;
            self.wager += amount;
            WagerOutcome::Normal
        } else {
            self.wager += self.chips;
            self.chips = 0;
            WagerOutcome::AllIn
        }
    }

    /// Forced bet; does not count as acting.
    pub(crate) fn pay_blind(&mut self, amount: u64) -> u64 {
        let before = self.wager;
        self.wager_chips(amount);
        self.wager - before
    }

    /// Empty the wager into the caller's hands (the pot).
    pub(crate) fn take_wager(&mut self) -> u64 {
        std::mem::take(&mut self.wager)
    }

    /// Hand back part of the wager that nobody can match.
    pub(crate) fn return_wager(&mut self, amount: u64) -> u64 {
        let back = amount.min(self.wager);
        self.wager -= back;
        self.chips += back;
        back
    }

    pub(crate) fn award_chips(&mut self, amount: u64) {
        self.chips += amount;
    }

    pub(crate) fn add_to_hand(&mut self, card: Card) {
        self.hand.push(card);
    }

    /// Give up the hole cards, e.g. to the discard pile.
    pub(crate) fn clear_hand(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.hand)
    }

    pub(crate) fn reset_for_round(&mut self) {
        self.folded = false;
        self.acted = false;
        self.wager = 0;
    }
}
