use crate::cards::Rank;
use std::collections::BTreeMap;

/// Rank multiplicities of a hand, built once and read by every detector.
///
/// Groups are kept sorted by (count desc, rank desc), so AAAKQ groups as
/// [(Ace, 3), (King, 1), (Queen, 1)].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    counts: BTreeMap<Rank, u8>,
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    pub fn from_ranks(ranks: &[Rank]) -> Self {
        let mut counts = BTreeMap::new();
        for &rank in ranks {
            *counts.entry(rank).or_insert(0u8) += 1;
        }

        let mut groups: Vec<(Rank, u8)> = counts.iter().map(|(&r, &c)| (r, c)).collect();
        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));

        Self { counts, groups }
    }

    /// How many cards of `rank` the hand holds.
    pub fn count(&self, rank: Rank) -> u8 {
        self.counts.get(&rank).copied().unwrap_or(0)
    }

    /// Number of distinct ranks.
    pub fn distinct(&self) -> usize {
        self.groups.len()
    }

    /// Returns the rank of a four-of-a-kind, if present.
    pub fn quad(&self) -> Option<Rank> {
        self.of_size(4).next()
    }

    /// Returns the rank of a three-of-a-kind, if present.
    pub fn trips(&self) -> Option<Rank> {
        self.of_size(3).next()
    }

    /// Returns all pair ranks, in descending order.
    pub fn pairs(&self) -> Vec<Rank> {
        self.of_size(2).collect()
    }

    /// Returns all singleton (kicker) ranks, in descending order.
    pub fn kickers(&self) -> Vec<Rank> {
        self.of_size(1).collect()
    }

    pub fn has_full_house(&self) -> bool {
        self.trips().is_some() && self.of_size(2).next().is_some()
    }

    fn of_size(&self, size: u8) -> impl Iterator<Item = Rank> + '_ {
        self.groups.iter().filter(move |(_, count)| *count == size).map(|(rank, _)| *rank)
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[(Rank, u8)] {
        &self.groups
    }
}
