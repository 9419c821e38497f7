use crate::cards::{Card, Suit};

/// Flush information: the suit holding five or more cards, and those cards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuitInfo {
    pub is_flush: bool,
    pub flush_suit: Option<Suit>,
    /// Cards of the flush suit, highest rank first. Empty without a flush.
    pub flush_cards: Vec<Card>,
}

impl SuitInfo {
    /// `cards` must already be sorted by rank descending. Seven cards hold at most one flush suit.
    pub fn detect(cards: &[Card]) -> Self {
        let mut counts = [0usize; 4];
        for c in cards {
            counts[c.suit().index()] += 1;
        }
        let flush_suit = Suit::ALL.iter().copied().find(|s| counts[s.index()] >= 5);
        let flush_cards = match flush_suit {
            Some(s) => cards.iter().copied().filter(|c| c.suit() == s).collect(),
            None => Vec::new(),
        };
        SuitInfo {
            is_flush: flush_suit.is_some(),
            flush_suit,
            flush_cards,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{parse_cards, Rank};

    #[test]
    fn five_of_seven_is_a_flush() {
        let cards = parse_cards("Ad Jd 9s 9d 5d 3c 2d").unwrap();
        let info = SuitInfo::detect(&cards);
        assert_eq!(info.flush_suit, Some(Suit::Diamonds));
        assert_eq!(info.flush_cards.len(), 5);
        assert_eq!(info.flush_cards[0].rank(), Rank::Ace);
    }

    #[test]
    fn four_suited_is_not() {
        let cards = parse_cards("As Ks Qs Js 9h 2c").unwrap();
        let info = SuitInfo::detect(&cards);
        assert!(!info.is_flush);
        assert!(info.flush_cards.is_empty());
    }
}
