pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::{Card, Rank};
use crate::hand::{validate_holdem, Board, HandError, HoleCards};
use core::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

/// Hand category on a 1..=10 scale. Higher is better.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 1,
    Pair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
    RoyalFlush = 10,
}

impl Category {
    pub const fn value(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two pair",
            Category::ThreeOfAKind => "Three of a kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full house",
            Category::FourOfAKind => "Four of a kind",
            Category::StraightFlush => "Straight flush",
            Category::RoyalFlush => "Royal flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Comparable hand strength: category first, then the deciding ranks, highest first.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandValue {
    pub(crate) category: Category,
    pub(crate) tiebreak: Vec<Rank>,
}

impl HandValue {
    /// Category of the hand.
    pub fn category(&self) -> Category {
        self.category
    }

    /// Tie-break key. Only meaningful against keys of the same category.
    pub fn tiebreak(&self) -> &[Rank] {
        &self.tiebreak
    }
}

/// Detailed evaluation result. Ordering and equality follow `value` only,
/// so two hands with different suits but the same ranks compare equal.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Evaluation {
    pub category: Category,
    pub best_five: [Card; 5],
    pub(crate) value: HandValue,
}

impl Evaluation {
    /// Return the comparable value.
    pub fn value(&self) -> &HandValue {
        &self.value
    }

    /// Return the tie-break ranks, highest priority first.
    pub fn tiebreak(&self) -> &[Rank] {
        &self.value.tiebreak
    }
}

impl Ord for Evaluation {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl PartialOrd for Evaluation {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Evaluation {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for Evaluation {}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("invalid hand: {0}")]
    InvalidHand(#[from] HandError),
    #[error("need 5 to 7 distinct cards, got {0}")]
    CardCount(usize),
    #[error("board needs all five cards, has {0}")]
    IncompleteBoard(usize),
}

/// Evaluate the best five-card hand among 5 to 7 cards. Repeated cards count once.
///
/// ```
/// use heads_up_holdem::cards::parse_cards;
/// use heads_up_holdem::evaluator::{evaluate, Category};
///
/// let cards = parse_cards("Ah Kh Qh Jh 10h 9h 3c").unwrap();
/// let eval = evaluate(&cards).unwrap();
/// assert_eq!(eval.category, Category::RoyalFlush);
/// assert_eq!(eval.category.value(), 10);
/// ```
pub fn evaluate(cards: &[Card]) -> Result<Evaluation, EvalError> {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    let mut seen = HashSet::with_capacity(cards.len());
    let distinct: Vec<Card> = cards.iter().copied().filter(|c| seen.insert(*c)).collect();
    if !(5..=7).contains(&distinct.len()) {
        return Err(EvalError::CardCount(distinct.len()));
    }

    let analysis = HandAnalysis::new(&distinct);
    DETECTORS
        .iter()
        .find_map(|d| d.detect(&analysis))
        .ok_or(EvalError::CardCount(distinct.len()))
}

/// Evaluate hole cards against a complete five-card board.
///
/// ```
/// use heads_up_holdem::evaluator::{evaluate_holdem, Category};
/// use heads_up_holdem::hand::{Board, HoleCards};
///
/// let hole: HoleCards = "As Ah".parse().unwrap();
/// let board: Board = "Kc Qd Jh 3s 2c".parse().unwrap();
/// let eval = evaluate_holdem(&hole, &board).unwrap();
/// assert_eq!(eval.category, Category::Pair);
/// ```
pub fn evaluate_holdem(hole: &HoleCards, board: &Board) -> Result<Evaluation, EvalError> {
    validate_holdem(hole, board)?;
    if !board.is_complete() {
        return Err(EvalError::IncompleteBoard(board.len()));
    }
    let mut cards = hole.as_array().to_vec();
    cards.extend_from_slice(board.as_slice());
    evaluate(&cards)
}

/// Total order over evaluations: category, then tie-break key. `Equal` is a tie.
pub fn compare(a: &Evaluation, b: &Evaluation) -> Ordering {
    a.cmp(b)
}

/// Compare two Hold'em hands on a shared board.
pub fn compare_holdem(a: &HoleCards, b: &HoleCards, board: &Board) -> Result<Ordering, EvalError> {
    let va = evaluate_holdem(a, board)?;
    let vb = evaluate_holdem(b, board)?;
    Ok(compare(&va, &vb))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn eval(s: &str) -> Evaluation {
        evaluate(&parse_cards(s).unwrap()).unwrap()
    }

    #[test]
    fn rejects_wrong_card_counts() {
        let four = parse_cards("Ah Kh Qh Jh").unwrap();
        assert_eq!(evaluate(&four), Err(EvalError::CardCount(4)));
        let eight = parse_cards("Ah Kh Qh Jh Th 9h 8h 7h").unwrap();
        assert_eq!(evaluate(&eight), Err(EvalError::CardCount(8)));
    }

    #[test]
    fn duplicates_are_collapsed_before_counting() {
        let cards = parse_cards("Ah Ah Kd 9c 7s 4h").unwrap();
        assert_eq!(evaluate(&cards), Ok(eval("Ah Kd 9c 7s 4h")));
        let short = parse_cards("Ah Ah Kd 9c 7s").unwrap();
        assert_eq!(evaluate(&short), Err(EvalError::CardCount(4)));
    }

    #[test]
    fn short_board_errors() {
        let hole: HoleCards = "As Ks".parse().unwrap();
        let board: Board = "2c 3d 4h".parse().unwrap();
        assert_eq!(evaluate_holdem(&hole, &board), Err(EvalError::IncompleteBoard(3)));
    }

    #[test]
    fn every_category_is_detected() {
        let cases = [
            ("As Ks Qs Js Ts", Category::RoyalFlush),
            ("9h 8h 7h 6h 5h", Category::StraightFlush),
            ("Ac Ad Ah As Kd", Category::FourOfAKind),
            ("Kh Kd Kc Qh Qs", Category::FullHouse),
            ("Ad Jd 9d 5d 2d", Category::Flush),
            ("As 2h 3d 4c 5s", Category::Straight),
            ("Jh Js Jd 9c 7s", Category::ThreeOfAKind),
            ("Ah As Kd Kc Qs", Category::TwoPair),
            ("Jh Js 9d 7c 3s", Category::Pair),
            ("Ah Kh Jd 9c 7s", Category::HighCard),
        ];
        for (cards, cat) in cases {
            assert_eq!(eval(cards).category, cat, "{cards}");
        }
    }

    #[test]
    fn category_scale_and_names() {
        assert_eq!(Category::HighCard.value(), 1);
        assert_eq!(Category::RoyalFlush.value(), 10);
        assert_eq!(Category::FullHouse.to_string(), "Full house");
    }

    #[test]
    fn suits_never_break_ties() {
        let a = eval("Ah Kd 9c 7s 4h");
        let b = eval("As Kc 9d 7h 4s");
        assert_eq!(compare(&a, &b), Ordering::Equal);
    }
}
