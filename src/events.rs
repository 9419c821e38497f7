//! State-change notifications published by [`Game`](crate::game::Game).
//!
//! The game never renders or sleeps. It appends events to an outbox that a
//! front end drains with `drain_events` and replays at its own pace.

use crate::cards::Card;
use crate::evaluator::Evaluation;
use crate::game::{Action, Phase};
use crate::showdown::Verdict;

/// Where a dealt card went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardPosition {
    Hole { player: usize, slot: usize },
    Community { slot: usize },
    Burn,
}

#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum GameEvent {
    RoundStarted { round: u32, dealer: usize },
    DeckShuffled { cards: usize },
    BlindPosted { player: usize, amount: u64, big: bool },
    CardDealt { card: Card, position: CardPosition },
    ActionTaken { player: usize, action: Action, amount: u64 },
    TurnChanged { player: usize },
    PhaseAdvanced { phase: Phase, revealed: Vec<Card> },
    Showdown { evaluations: [Evaluation; 2] },
    UncalledReturned { player: usize, amount: u64 },
    RoundEnded { verdict: Verdict, amounts: [u64; 2], message: String },
    GameOver { loser: usize, final_chips: [u64; 2], message: String },
}

impl GameEvent {
    /// One-line description for logs and the event feed. `names` maps player
    /// indices to display names.
    pub fn describe(&self, names: &[&str; 2]) -> String {
        match self {
            GameEvent::RoundStarted { round, dealer } => {
                format!("Round {round}: {} deals", names[*dealer])
            }
            GameEvent::DeckShuffled { cards } => format!("Shuffled {cards} cards"),
            GameEvent::BlindPosted { player, amount, big } => {
                let which = if *big { "big" } else { "small" };
                format!("{} posts the {which} blind ({amount})", names[*player])
            }
            GameEvent::CardDealt { card, position } => match position {
                CardPosition::Hole { player, .. } => format!("{} is dealt a card", names[*player]),
                CardPosition::Community { .. } => format!("Board: {card}"),
                CardPosition::Burn => "Burn".to_string(),
            },
            GameEvent::ActionTaken { player, action, amount } => {
                if *amount > 0 {
                    format!("{} {} {amount}", names[*player], action.past_tense())
                } else {
                    format!("{} {}", names[*player], action.past_tense())
                }
            }
            GameEvent::TurnChanged { player } => format!("{} to act", names[*player]),
            GameEvent::PhaseAdvanced { phase, revealed } => {
                let cards: Vec<String> = revealed.iter().map(Card::to_string).collect();
                if cards.is_empty() {
                    phase.label().to_string()
                } else {
                    format!("{}: {}", phase.label(), cards.join(" "))
                }
            }
            GameEvent::Showdown { evaluations } => format!(
                "Showdown: {} has {}, {} has {}",
                names[0],
                evaluations[0].category,
                names[1],
                evaluations[1].category
            ),
            GameEvent::UncalledReturned { player, amount } => {
                format!("{amount} uncalled returned to {}", names[*player])
            }
            GameEvent::RoundEnded { message, .. } | GameEvent::GameOver { message, .. } => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_uses_player_names() {
        let names = ["Ann", "Bob"];
        let ev = GameEvent::BlindPosted { player: 1, amount: 2, big: true };
        assert_eq!(ev.describe(&names), "Bob posts the big blind (2)");
        let ev = GameEvent::ActionTaken { player: 0, action: Action::Check, amount: 0 };
        assert_eq!(ev.describe(&names), "Ann checked");
    }

    #[test]
    fn hole_cards_stay_hidden_in_descriptions() {
        let card: Card = "Ah".parse().unwrap();
        let ev = GameEvent::CardDealt { card, position: CardPosition::Hole { player: 0, slot: 0 } };
        assert!(!ev.describe(&["Ann", "Bob"]).contains("Ah"));
    }
}
