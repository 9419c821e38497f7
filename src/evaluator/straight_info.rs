use crate::cards::Rank;

/// The best straight among a set of ranks, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub is_straight: bool,
    pub top_rank: Option<Rank>,
}

impl StraightInfo {
    /// Scan any number of ranks (duplicates allowed) for five in a row.
    /// The wheel A-2-3-4-5 counts with Five as its top rank.
    pub fn detect(ranks: &[Rank]) -> Self {
        let mut present = [false; 15];
        for r in ranks {
            present[r.value() as usize] = true;
        }
        // the ace also plays low
        present[1] = present[Rank::Ace.value() as usize];

        let top = (5..=14u8)
            .rev()
            .find(|&hi| (hi - 4..=hi).all(|v| present[v as usize]))
            .and_then(Rank::from_value);

        StraightInfo {
            is_straight: top.is_some(),
            top_rank: top,
        }
    }

    /// The five ranks of the straight, highest first. A wheel reads 5-4-3-2-A.
    pub fn ranks(&self) -> Option<Vec<Rank>> {
        let top = self.top_rank?.value();
        (0..5)
            .map(|i| match top - i {
                1 => Some(Rank::Ace),
                v => Rank::from_value(v),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regular_straight() {
        let info = StraightInfo::detect(&[Rank::King, Rank::Queen, Rank::Jack, Rank::Ten, Rank::Nine]);
        assert!(info.is_straight);
        assert_eq!(info.top_rank, Some(Rank::King));
    }

    #[test]
    fn picks_highest_of_overlapping_runs() {
        let ranks = [Rank::Four, Rank::Five, Rank::Six, Rank::Seven, Rank::Eight, Rank::Nine, Rank::Two];
        assert_eq!(StraightInfo::detect(&ranks).top_rank, Some(Rank::Nine));
    }

    #[test]
    fn wheel_reads_five_high() {
        let info = StraightInfo::detect(&[Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::King]);
        assert_eq!(info.top_rank, Some(Rank::Five));
        assert_eq!(
            info.ranks().unwrap(),
            vec![Rank::Five, Rank::Four, Rank::Three, Rank::Two, Rank::Ace]
        );
    }

    #[test]
    fn six_high_beats_wheel() {
        let ranks = [Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Six];
        assert_eq!(StraightInfo::detect(&ranks).top_rank, Some(Rank::Six));
    }

    #[test]
    fn no_wraparound() {
        let ranks = [Rank::Queen, Rank::King, Rank::Ace, Rank::Two, Rank::Three];
        assert!(!StraightInfo::detect(&ranks).is_straight);
    }

    #[test]
    fn duplicates_do_not_help() {
        let ranks = [Rank::Nine, Rank::Nine, Rank::Eight, Rank::Seven, Rank::Six, Rank::Six];
        assert!(!StraightInfo::detect(&ranks).is_straight);
    }
}
