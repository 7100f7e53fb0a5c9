use crate::cards::{Card, Rank};

/// Ranks grouped by their frequency in a card set, sorted by
/// (count desc, rank desc).
///
/// Example: AAAKQ groups as [(Ace, 3), (King, 1), (Queen, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    /// Group an arbitrary card set by rank.
    pub fn from_cards(cards: &[Card]) -> Self {
        let mut counts = [0u8; 15];
        for c in cards {
            counts[c.rank().value() as usize] += 1;
        }
        let mut groups = Vec::new();
        for rank in Rank::ALL.iter().copied() {
            let count = counts[rank.value() as usize];
            if count > 0 {
                groups.push((rank, count));
            }
        }
        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));
        Self { groups }
    }

    /// Rank of a four-of-a-kind, if present.
    pub fn quad(&self) -> Option<Rank> {
        self.groups.iter().find(|(_, count)| *count == 4).map(|(rank, _)| *rank)
    }

    /// Highest rank held three or more times, if any.
    pub fn trips(&self) -> Option<Rank> {
        self.groups
            .iter()
            .filter(|(_, count)| *count >= 3)
            .map(|(rank, _)| *rank)
            .max()
    }

    /// The pair half of a full house: the highest rank other than `trips`
    /// held at least twice. Two trips in one set yield trips + pair.
    pub fn full_house_pair(&self, trips: Rank) -> Option<Rank> {
        self.groups
            .iter()
            .filter(|(rank, count)| *count >= 2 && *rank != trips)
            .map(|(rank, _)| *rank)
            .max()
    }

    /// All exact-pair ranks, highest first.
    pub fn pairs(&self) -> Vec<Rank> {
        self.groups.iter().filter(|(_, count)| *count == 2).map(|(rank, _)| *rank).collect()
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[(Rank, u8)] {
        &self.groups
    }
}
