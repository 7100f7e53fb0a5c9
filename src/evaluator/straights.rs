use crate::cards::{Card, Rank};

/// Find the best straight in a card set sorted descending by rank.
///
/// Scans 5-wide windows of distinct ranks from the top down and returns the
/// first consecutive run; the wheel (5-4-3-2-A, Ace low) is the explicit
/// fallback and is returned with the Five leading and the Ace last.
pub fn best_straight(sorted_desc: &[Card]) -> Option<[Card; 5]> {
    // One card per rank, preserving descending order.
    let mut distinct: Vec<Card> = Vec::with_capacity(sorted_desc.len());
    for &c in sorted_desc {
        if distinct.last().map_or(true, |prev: &Card| prev.rank() != c.rank()) {
            distinct.push(c);
        }
    }

    for w in distinct.windows(5) {
        // Distinct descending ranks spanning exactly 4 are consecutive.
        if w[0].rank().value() - w[4].rank().value() == 4 {
            return Some([w[0], w[1], w[2], w[3], w[4]]);
        }
    }

    let of_rank = |r: Rank| distinct.iter().copied().find(|c| c.rank() == r);
    if let (Some(five), Some(four), Some(three), Some(two), Some(ace)) = (
        of_rank(Rank::Five),
        of_rank(Rank::Four),
        of_rank(Rank::Three),
        of_rank(Rank::Two),
        of_rank(Rank::Ace),
    ) {
        return Some([five, four, three, two, ace]);
    }
    None
}
