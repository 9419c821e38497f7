use super::hand_analysis::HandAnalysis;
use crate::cards::{Card, Rank};
use crate::evaluator::{Category, Evaluation};

/// Strategy pattern: each detector recognises one category and builds its evaluation.
/// Returns `None` when the cards do not make that category.
pub trait CategoryDetector {
    fn category(&self) -> Category;
    fn detect(&self, analysis: &HandAnalysis) -> Option<Evaluation>;
}

fn straight_cards(pool: &[Card], ranks: &[Rank]) -> Vec<Card> {
    ranks.iter().flat_map(|&r| HandAnalysis::take(pool, r, 1)).collect()
}

/// Ace-high straight flush.
pub struct RoyalFlushDetector;

impl CategoryDetector for RoyalFlushDetector {
    fn category(&self) -> Category {
        Category::RoyalFlush
    }

    fn detect(&self, a: &HandAnalysis) -> Option<Evaluation> {
        if a.straight_flush_info.top_rank != Some(Rank::Ace) {
            return None;
        }
        let ranks = a.straight_flush_info.ranks()?;
        let best = straight_cards(&a.suit_info.flush_cards, &ranks);
        a.build_evaluation(self.category(), ranks, best)
    }
}

pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn category(&self) -> Category {
        Category::StraightFlush
    }

    fn detect(&self, a: &HandAnalysis) -> Option<Evaluation> {
        let ranks = a.straight_flush_info.ranks()?;
        let best = straight_cards(&a.suit_info.flush_cards, &ranks);
        a.build_evaluation(self.category(), ranks, best)
    }
}

pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn category(&self) -> Category {
        Category::FourOfAKind
    }

    fn detect(&self, a: &HandAnalysis) -> Option<Evaluation> {
        let quad = a.rank_groups.quad()?;
        let kicker = *a.rank_groups.kickers(&[quad], 1).first()?;
        let best = a.pick(&[(quad, 4), (kicker, 1)]);
        a.build_evaluation(self.category(), vec![quad, kicker], best)
    }
}

pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn category(&self) -> Category {
        Category::FullHouse
    }

    fn detect(&self, a: &HandAnalysis) -> Option<Evaluation> {
        let (trips, pair) = a.rank_groups.full_house()?;
        let best = a.pick(&[(trips, 3), (pair, 2)]);
        a.build_evaluation(self.category(), vec![trips, pair], best)
    }
}

pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn category(&self) -> Category {
        Category::Flush
    }

    fn detect(&self, a: &HandAnalysis) -> Option<Evaluation> {
        if !a.suit_info.is_flush {
            return None;
        }
        let best: Vec<Card> = a.suit_info.flush_cards.iter().copied().take(5).collect();
        let ranks = best.iter().map(|c| c.rank()).collect();
        a.build_evaluation(self.category(), ranks, best)
    }
}

pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn category(&self) -> Category {
        Category::Straight
    }

    fn detect(&self, a: &HandAnalysis) -> Option<Evaluation> {
        let ranks = a.straight_info.ranks()?;
        let best = straight_cards(&a.sorted_cards, &ranks);
        a.build_evaluation(self.category(), ranks, best)
    }
}

pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn category(&self) -> Category {
        Category::ThreeOfAKind
    }

    fn detect(&self, a: &HandAnalysis) -> Option<Evaluation> {
        let trips = a.rank_groups.trips()?;
        let kickers = a.rank_groups.kickers(&[trips], 2);
        let mut picks = vec![(trips, 3)];
        picks.extend(kickers.iter().map(|&k| (k, 1)));
        let mut key = vec![trips];
        key.extend(kickers);
        a.build_evaluation(self.category(), key, a.pick(&picks))
    }
}

pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn category(&self) -> Category {
        Category::TwoPair
    }

    fn detect(&self, a: &HandAnalysis) -> Option<Evaluation> {
        let pairs = a.rank_groups.pairs();
        let (&high, &low) = (pairs.first()?, pairs.get(1)?);
        let kicker = *a.rank_groups.kickers(&[high, low], 1).first()?;
        let best = a.pick(&[(high, 2), (low, 2), (kicker, 1)]);
        a.build_evaluation(self.category(), vec![high, low, kicker], best)
    }
}

pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn category(&self) -> Category {
        Category::Pair
    }

    fn detect(&self, a: &HandAnalysis) -> Option<Evaluation> {
        let pair = *a.rank_groups.pairs().first()?;
        let kickers = a.rank_groups.kickers(&[pair], 3);
        let mut picks = vec![(pair, 2)];
        picks.extend(kickers.iter().map(|&k| (k, 1)));
        let mut key = vec![pair];
        key.extend(kickers);
        a.build_evaluation(self.category(), key, a.pick(&picks))
    }
}

/// Fallback: the five highest cards.
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn category(&self) -> Category {
        Category::HighCard
    }

    fn detect(&self, a: &HandAnalysis) -> Option<Evaluation> {
        let best: Vec<Card> = a.sorted_cards.iter().copied().take(5).collect();
        let ranks = best.iter().map(|c| c.rank()).collect();
        a.build_evaluation(self.category(), ranks, best)
    }
}

/// Every detector, strongest category first.
pub const DETECTORS: [&dyn CategoryDetector; 10] = [
    &RoyalFlushDetector,
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];
