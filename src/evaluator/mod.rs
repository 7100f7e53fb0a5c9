pub(crate) mod analysis;
pub(crate) mod rank_groups;
pub(crate) mod straights;

use crate::cards::{Card, Rank};
use crate::hand::{validate_holdem, Board, HandError, HoleCards};
use analysis::SetAnalysis;
use core::cmp::Ordering;
use std::fmt;

/// Hand categories from weakest to strongest. Closed set; exhaustive
/// matching is part of the contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl HandCategory {
    pub const ALL: [HandCategory; 10] = [
        HandCategory::HighCard,
        HandCategory::OnePair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
        HandCategory::RoyalFlush,
    ];

    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn label(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::OnePair => "Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("invalid hand: {0}")]
    InvalidHand(#[from] HandError),
    #[error("need at least five cards to evaluate, got {got}")]
    InsufficientCards { got: usize },
    #[error("duplicate card in input: {0}")]
    DuplicateCard(Card),
}

/// The best five-card hand found in a card set.
///
/// `best_five` is ordered by category significance (quads before the kicker,
/// trips before the pair, straights from the top; the wheel leads with the
/// Five and ends with the Ace). `kickers` holds the input cards left over
/// after the best five, descending; they break ties between hands whose
/// chosen five match exactly.
///
/// Ordering compares category, then the five chosen ranks position by
/// position, then the leftover ranks. Suits never matter: two evaluations
/// with identical rank sequences are equal, which is the split-pot case.
#[derive(Debug, Clone)]
pub struct HandEval {
    pub category: HandCategory,
    pub best_five: [Card; 5],
    kickers: Vec<Card>,
}

impl HandEval {
    /// Input cards not used by the best five, descending by rank.
    pub fn kickers(&self) -> &[Card] {
        &self.kickers
    }
}

impl Ord for HandEval {
    fn cmp(&self, other: &Self) -> Ordering {
        let by_category = self.category.cmp(&other.category);
        if by_category != Ordering::Equal {
            return by_category;
        }
        for (a, b) in self.best_five.iter().zip(other.best_five.iter()) {
            let by_rank = a.rank().cmp(&b.rank());
            if by_rank != Ordering::Equal {
                return by_rank;
            }
        }
        let ours = self.kickers.iter().map(|c| c.rank());
        let theirs = other.kickers.iter().map(|c| c.rank());
        ours.cmp(theirs)
    }
}

impl PartialOrd for HandEval {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HandEval {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HandEval {}

impl fmt::Display for HandEval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.category {
            HandCategory::RoyalFlush => write!(f, "royal flush"),
            HandCategory::StraightFlush => {
                write!(f, "straight flush to the {}", self.best_five[0].rank().name())
            }
            HandCategory::FourOfAKind => {
                write!(f, "four of a kind, {}", self.best_five[0].rank().plural())
            }
            HandCategory::FullHouse => write!(
                f,
                "full house, {} over {}",
                self.best_five[0].rank().plural(),
                self.best_five[3].rank().plural()
            ),
            HandCategory::Flush => write!(f, "flush, {} high", self.best_five[0].rank().name()),
            HandCategory::Straight => {
                write!(f, "straight to the {}", self.best_five[0].rank().name())
            }
            HandCategory::ThreeOfAKind => {
                write!(f, "three of a kind, {}", self.best_five[0].rank().plural())
            }
            HandCategory::TwoPair => write!(
                f,
                "two pair, {} and {}",
                self.best_five[0].rank().plural(),
                self.best_five[2].rank().plural()
            ),
            HandCategory::OnePair => write!(f, "pair of {}", self.best_five[0].rank().plural()),
            HandCategory::HighCard => write!(f, "high card {}", self.best_five[0].rank().name()),
        }
    }
}

/// Evaluate any set of five or more distinct cards.
///
/// ```
/// use holdem_engine::cards::parse_cards;
/// use holdem_engine::evaluator::{evaluate, HandCategory};
///
/// let cards = parse_cards("Ah As Ad Ac Kh 2c 3d").unwrap();
/// let eval = evaluate(&cards).unwrap();
/// assert_eq!(eval.category, HandCategory::FourOfAKind);
/// assert_eq!(eval.to_string(), "four of a kind, Aces");
/// ```
pub fn evaluate(cards: &[Card]) -> Result<HandEval, EvalError> {
    if cards.len() < 5 {
        return Err(EvalError::InsufficientCards { got: cards.len() });
    }
    let mut seen = cards.to_vec();
    seen.sort_unstable();
    if let Some(w) = seen.windows(2).find(|w| w[0] == w[1]) {
        return Err(EvalError::DuplicateCard(w[0]));
    }

    let analysis = SetAnalysis::new(cards);
    let (category, best_five) = classify(&analysis);
    let kickers =
        analysis.sorted().iter().copied().filter(|c| !best_five.contains(c)).collect();
    Ok(HandEval { category, best_five, kickers })
}

/// Evaluate a Hold'em hand: two hole cards plus at least three board cards.
pub fn evaluate_holdem(hole: &HoleCards, board: &Board) -> Result<HandEval, EvalError> {
    validate_holdem(hole, board)?;
    let mut cards = Vec::with_capacity(2 + board.len());
    cards.extend(hole.as_array());
    cards.extend_from_slice(board.as_slice());
    evaluate(&cards)
}

/// Compare two card sets by their best hands.
///
/// `Ordering::Greater` means `a` wins, `Less` means `b` wins, and `Equal`
/// is an exact tie that a caller must treat as a split, never as a winner.
///
/// ```
/// use holdem_engine::cards::parse_cards;
/// use holdem_engine::evaluator::compare;
/// use std::cmp::Ordering;
///
/// let a = parse_cards("Ah As Qc Jd 9h 3s 2c").unwrap();
/// let b = parse_cards("Kh Ks Qc Jd 9h 3s 2c").unwrap();
/// assert_eq!(compare(&a, &b).unwrap(), Ordering::Greater);
/// ```
pub fn compare(a: &[Card], b: &[Card]) -> Result<Ordering, EvalError> {
    let ea = evaluate(a)?;
    let eb = evaluate(b)?;
    Ok(ea.cmp(&eb))
}

fn classify(analysis: &SetAnalysis) -> (HandCategory, [Card; 5]) {
    let sorted = analysis.sorted();
    let groups = analysis.groups();

    if let Some(run) = analysis.straight_flush() {
        let category = if run[0].rank() == Rank::Ace {
            HandCategory::RoyalFlush
        } else {
            HandCategory::StraightFlush
        };
        return (category, *run);
    }
    if let Some(quad) = groups.quad() {
        return (HandCategory::FourOfAKind, fill(sorted, of_rank(sorted, quad, 4)));
    }
    if let Some(trips) = groups.trips() {
        if let Some(pair) = groups.full_house_pair(trips) {
            let mut picked = of_rank(sorted, trips, 3);
            picked.extend(of_rank(sorted, pair, 2));
            return (HandCategory::FullHouse, fill(sorted, picked));
        }
    }
    if let Some(flush) = analysis.flush() {
        return (HandCategory::Flush, fill(sorted, flush[..5].to_vec()));
    }
    if let Some(run) = analysis.straight() {
        return (HandCategory::Straight, *run);
    }
    if let Some(trips) = groups.trips() {
        return (HandCategory::ThreeOfAKind, fill(sorted, of_rank(sorted, trips, 3)));
    }
    let pairs = groups.pairs();
    if pairs.len() >= 2 {
        let mut picked = of_rank(sorted, pairs[0], 2);
        picked.extend(of_rank(sorted, pairs[1], 2));
        return (HandCategory::TwoPair, fill(sorted, picked));
    }
    if let Some(&pair) = pairs.first() {
        return (HandCategory::OnePair, fill(sorted, of_rank(sorted, pair, 2)));
    }
    (HandCategory::HighCard, fill(sorted, sorted[..5].to_vec()))
}

fn of_rank(sorted: &[Card], rank: Rank, n: usize) -> Vec<Card> {
    sorted.iter().copied().filter(|c| c.rank() == rank).take(n).collect()
}

/// Pad `picked` to five with the highest unused cards, in sorted order.
fn fill(sorted: &[Card], picked: Vec<Card>) -> [Card; 5] {
    let mut five = picked;
    for &c in sorted {
        if five.len() == 5 {
            break;
        }
        if !five.contains(&c) {
            five.push(c);
        }
    }
    [five[0], five[1], five[2], five[3], five[4]]
}
