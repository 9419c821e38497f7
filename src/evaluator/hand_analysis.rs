use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::{Card, Rank};
use crate::evaluator::{Category, Evaluation, HandValue};

/// Pre-computed analysis of 5 to 7 distinct cards.
/// Built once and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    /// Rank descending, suit descending within a rank.
    pub sorted_cards: Vec<Card>,
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
    /// Straight made only from the flush suit's cards.
    pub straight_flush_info: StraightInfo,
}

impl HandAnalysis {
    pub fn new(cards: &[Card]) -> Self {
        let mut sorted_cards = cards.to_vec();
        sorted_cards.sort_by(|a, b| b.rank().cmp(&a.rank()).then(b.suit().cmp(&a.suit())));

        let ranks: Vec<Rank> = sorted_cards.iter().map(|c| c.rank()).collect();
        let rank_groups = RankGroups::from_cards(&sorted_cards);
        let suit_info = SuitInfo::detect(&sorted_cards);
        let straight_info = StraightInfo::detect(&ranks);
        let flush_ranks: Vec<Rank> = suit_info.flush_cards.iter().map(|c| c.rank()).collect();
        let straight_flush_info = StraightInfo::detect(&flush_ranks);

        Self {
            sorted_cards,
            rank_groups,
            suit_info,
            straight_info,
            straight_flush_info,
        }
    }

    /// Up to `n` cards of `rank`, taken from `pool` in order.
    pub fn take(pool: &[Card], rank: Rank, n: usize) -> impl Iterator<Item = Card> + '_ {
        pool.iter().copied().filter(move |c| c.rank() == rank).take(n)
    }

    /// Cards realising `picks` (rank, how many), in the order given.
    pub fn pick(&self, picks: &[(Rank, usize)]) -> Vec<Card> {
        picks
            .iter()
            .flat_map(|&(r, n)| Self::take(&self.sorted_cards, r, n))
            .collect()
    }

    /// Assemble an evaluation. `None` unless exactly five cards were picked.
    pub fn build_evaluation(&self, category: Category, tiebreak: Vec<Rank>, best: Vec<Card>) -> Option<Evaluation> {
        let best_five: [Card; 5] = best.try_into().ok()?;
        Some(Evaluation {
            category,
            best_five,
            value: HandValue { category, tiebreak },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{parse_cards, Suit};

    fn analyse(s: &str) -> HandAnalysis {
        HandAnalysis::new(&parse_cards(s).unwrap())
    }

    #[test]
    fn royal_flush_analysis() {
        let a = analyse("As Ks Qs Js Ts 2d 3h");
        assert!(a.suit_info.is_flush);
        assert_eq!(a.straight_flush_info.top_rank, Some(Rank::Ace));
        assert_eq!(a.rank_groups.quad(), None);
    }

    #[test]
    fn straight_and_flush_need_not_coincide() {
        let a = analyse("9h 8h 7c 6h 5h 2h Kd");
        assert!(a.suit_info.is_flush);
        assert!(a.straight_info.is_straight);
        assert!(!a.straight_flush_info.is_straight);
    }

    #[test]
    fn cards_sorted_descending() {
        let a = analyse("3s Ah 5d Kc 9s");
        let ranks: Vec<Rank> = a.sorted_cards.iter().map(|c| c.rank()).collect();
        assert_eq!(ranks, vec![Rank::Ace, Rank::King, Rank::Nine, Rank::Five, Rank::Three]);
    }

    #[test]
    fn pick_takes_requested_counts() {
        let a = analyse("Kh Ks Kd Qc Qs 2d 3d");
        let cards = a.pick(&[(Rank::King, 3), (Rank::Queen, 2)]);
        assert_eq!(cards.len(), 5);
        assert!(cards[..3].iter().all(|c| c.rank() == Rank::King));
        assert_eq!(cards[3], Card::new(Rank::Queen, Suit::Spades));
    }

    #[test]
    fn build_requires_five_cards() {
        let a = analyse("Ah Kd 9c 7s 4h");
        let four = a.sorted_cards[..4].to_vec();
        assert!(a.build_evaluation(Category::HighCard, vec![], four).is_none());
    }
}
