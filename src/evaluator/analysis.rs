use crate::cards::{Card, Suit};
use crate::evaluator::rank_groups::RankGroups;
use crate::evaluator::straights::best_straight;

/// Everything category detection needs, computed once per card set:
/// cards sorted descending, rank-frequency groups, flush suit (if any),
/// and both straight scans (whole set, and within the flush suit).
#[derive(Debug, Clone)]
pub struct SetAnalysis {
    sorted: Vec<Card>,
    groups: RankGroups,
    flush: Option<Vec<Card>>,
    straight: Option<[Card; 5]>,
    straight_flush: Option<[Card; 5]>,
}

impl SetAnalysis {
    pub fn new(cards: &[Card]) -> Self {
        let mut sorted = cards.to_vec();
        sorted.sort_by(|a, b| b.cmp(a));

        let groups = RankGroups::from_cards(&sorted);

        let mut suit_counts = [0usize; 4];
        for c in &sorted {
            suit_counts[c.suit() as usize] += 1;
        }
        let flush_suit = Suit::ALL
            .iter()
            .copied()
            .filter(|&s| suit_counts[s as usize] >= 5)
            .max_by_key(|&s| suit_counts[s as usize]);
        let flush = flush_suit
            .map(|s| sorted.iter().copied().filter(|c| c.suit() == s).collect::<Vec<Card>>());

        let straight = best_straight(&sorted);
        // A straight flush must lie within the flush suit, not merely
        // alongside a flush and a straight in the same set.
        let straight_flush = flush.as_deref().and_then(best_straight);

        Self { sorted, groups, flush, straight, straight_flush }
    }

    /// Input cards, descending by rank then suit.
    pub fn sorted(&self) -> &[Card] {
        &self.sorted
    }

    pub fn groups(&self) -> &RankGroups {
        &self.groups
    }

    /// All cards of the flush suit (descending), when ≥5 share a suit.
    pub fn flush(&self) -> Option<&[Card]> {
        self.flush.as_deref()
    }

    pub fn straight(&self) -> Option<&[Card; 5]> {
        self.straight.as_ref()
    }

    pub fn straight_flush(&self) -> Option<&[Card; 5]> {
        self.straight_flush.as_ref()
    }
}
