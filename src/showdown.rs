//! Deciding a finished round and dividing the pot.

use crate::evaluator::{compare, Evaluation};
use std::cmp::Ordering;

/// Who takes the pot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Winner(usize),
    Split,
}

impl Verdict {
    pub fn winner(self) -> Option<usize> {
        match self {
            Verdict::Winner(i) => Some(i),
            Verdict::Split => None,
        }
    }
}

/// Compare both players' evaluations. Equal hands split.
pub fn decide(evals: &[Evaluation; 2]) -> Verdict {
    match compare(&evals[0], &evals[1]) {
        Ordering::Greater => Verdict::Winner(0),
        Ordering::Less => Verdict::Winner(1),
        Ordering::Equal => Verdict::Split,
    }
}

/// Chips each player receives from `pot`. On a split an odd chip goes to the
/// player out of position (the non-dealer).
///
/// ```
/// use heads_up_holdem::showdown::{payout, Verdict};
///
/// assert_eq!(payout(Verdict::Winner(1), 40, 0), [0, 40]);
/// assert_eq!(payout(Verdict::Split, 41, 0), [20, 21]);
/// ```
pub fn payout(verdict: Verdict, pot: u64, dealer: usize) -> [u64; 2] {
    match verdict {
        Verdict::Winner(0) => [pot, 0],
        Verdict::Winner(_) => [0, pot],
        Verdict::Split => {
            let half = pot / 2;
            let mut shares = [half, half];
            shares[1 - dealer.min(1)] += pot % 2;
            shares
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;
    use crate::evaluator::evaluate;

    fn eval(s: &str) -> Evaluation {
        evaluate(&parse_cards(s).unwrap()).unwrap()
    }

    #[test]
    fn better_hand_wins() {
        let evals = [eval("Ah Kh Qh Jh 10h 9h 3c"), eval("2s 2d Qh Jh 10h 9h 3c")];
        assert_eq!(decide(&evals), Verdict::Winner(0));
        let swapped = [evals[1].clone(), evals[0].clone()];
        assert_eq!(decide(&swapped), Verdict::Winner(1));
    }

    #[test]
    fn same_board_hand_splits() {
        let evals = [eval("2c 3d Ks Kd Qs Qd Ah"), eval("2h 4d Ks Kd Qs Qd Ah")];
        assert_eq!(decide(&evals), Verdict::Split);
    }

    #[test]
    fn split_shares_sum_to_pot() {
        for pot in [0, 1, 4, 7, 400] {
            for dealer in [0, 1] {
                let s = payout(Verdict::Split, pot, dealer);
                assert_eq!(s[0] + s[1], pot);
            }
        }
        assert_eq!(payout(Verdict::Split, 5, 1), [3, 2]);
    }
}
