use crate::cards::{Card, Rank};

/// Ranks present in a hand with their multiplicity, sorted by (count desc, rank desc).
///
/// Example: `K K K 9 9 9 2` groups as [(King, 3), (Nine, 3), (Two, 1)].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut counts = [0u8; 15];
        for c in cards {
            counts[c.rank().value() as usize] += 1;
        }
        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .copied()
            .filter(|r| counts[r.value() as usize] > 0)
            .map(|r| (r, counts[r.value() as usize]))
            .collect();
        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));
        Self { groups }
    }

    /// Highest rank held four times.
    pub fn quad(&self) -> Option<Rank> {
        self.with_count(4).next()
    }

    /// Highest rank held exactly three times.
    pub fn trips(&self) -> Option<Rank> {
        self.with_count(3).next()
    }

    /// Ranks held exactly twice, highest first.
    pub fn pairs(&self) -> Vec<Rank> {
        self.with_count(2).collect()
    }

    /// Best (trips, pair) split. A second set of trips counts as the pair.
    pub fn full_house(&self) -> Option<(Rank, Rank)> {
        let trips = self.trips()?;
        let pair = self
            .groups
            .iter()
            .filter(|(r, n)| *r != trips && *n >= 2)
            .map(|(r, _)| *r)
            .max()?;
        Some((trips, pair))
    }

    /// Distinct ranks outside `used`, highest first, capped at `n`.
    pub fn kickers(&self, used: &[Rank], n: usize) -> Vec<Rank> {
        let mut rest: Vec<Rank> = self
            .groups
            .iter()
            .map(|(r, _)| *r)
            .filter(|r| !used.contains(r))
            .collect();
        rest.sort_by(|a, b| b.cmp(a));
        rest.truncate(n);
        rest
    }

    fn with_count(&self, n: u8) -> impl Iterator<Item = Rank> + '_ {
        self.groups.iter().filter(move |(_, c)| *c == n).map(|(r, _)| *r)
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[(Rank, u8)] {
        &self.groups
    }
}
