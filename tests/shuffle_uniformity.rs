use holdem_engine::cards::Card;
use holdem_engine::deck::{Deck, DECK_SIZE};
use std::collections::HashMap;

/// Every card should land at every position with roughly equal frequency.
/// Seeded trials keep the test deterministic; the tolerance is several
/// standard deviations wide of the binomial expectation.
#[test]
fn each_card_reaches_each_sampled_position_uniformly() {
    const TRIALS: u64 = 5200;
    let expected = TRIALS as f64 / DECK_SIZE as f64; // 100 per card
    let positions = [0usize, 17, 25, 38, 51];

    let mut counts: Vec<HashMap<Card, u64>> = vec![HashMap::new(); positions.len()];
    for trial in 0..TRIALS {
        let mut deck = Deck::new();
        deck.shuffle_seeded(trial);
        let cards = deck.undrawn();
        for (slot, &pos) in positions.iter().enumerate() {
            *counts[slot].entry(cards[pos]).or_insert(0) += 1;
        }
    }

    for (slot, &pos) in positions.iter().enumerate() {
        assert_eq!(counts[slot].len(), DECK_SIZE, "every card must reach position {pos}");
        for (card, &n) in &counts[slot] {
            let deviation = (n as f64 - expected).abs();
            assert!(
                deviation < expected * 0.6,
                "card {card} hit position {pos} {n} times, expected about {expected}"
            );
        }
    }
}

#[test]
fn shuffle_leaves_the_deck_a_permutation_of_all_52() {
    let mut deck = Deck::new();
    deck.shuffle_seeded(123);
    let unique: std::collections::HashSet<Card> = deck.undrawn().iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
    assert_eq!(deck.remaining(), DECK_SIZE);
}

#[test]
fn different_seeds_give_different_orders() {
    let mut a = Deck::new();
    let mut b = Deck::new();
    a.shuffle_seeded(1);
    b.shuffle_seeded(2);
    assert_ne!(a.undrawn(), b.undrawn());
}
