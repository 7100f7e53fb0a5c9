use holdem_engine::cards::{Card, Rank, Suit};
use holdem_engine::evaluator::{evaluate, HandCategory};
use proptest::prelude::*;
use std::cmp::Ordering;

fn card_from_index(i: usize) -> Card {
    Card::new(Rank::ALL[i % 13], Suit::ALL[i / 13])
}

/// Seven distinct cards, as dealt from a real deck.
fn seven_cards() -> impl Strategy<Value = Vec<Card>> {
    prop::collection::btree_set(0usize..52, 7)
        .prop_map(|set| set.into_iter().map(card_from_index).collect())
}

proptest! {
    #[test]
    fn evaluation_yields_a_category_and_five_input_cards(cards in seven_cards()) {
        let eval = evaluate(&cards).unwrap();
        prop_assert!(HandCategory::ALL.contains(&eval.category));
        prop_assert!(eval.best_five.iter().all(|c| cards.contains(c)));
        let distinct: std::collections::BTreeSet<Card> = eval.best_five.iter().copied().collect();
        prop_assert_eq!(distinct.len(), 5);
        prop_assert_eq!(eval.kickers().len(), 2);
    }

    #[test]
    fn best_five_round_trips_to_the_same_category(cards in seven_cards()) {
        let eval = evaluate(&cards).unwrap();
        let again = evaluate(&eval.best_five).unwrap();
        prop_assert_eq!(again.category, eval.category);
    }

    #[test]
    fn ordering_is_antisymmetric_and_transitive(
        a in seven_cards(),
        b in seven_cards(),
        c in seven_cards(),
    ) {
        let ea = evaluate(&a).unwrap();
        let eb = evaluate(&b).unwrap();
        let ec = evaluate(&c).unwrap();

        // antisymmetric: a >= b and b >= a imply a == b
        if ea >= eb && eb >= ea {
            prop_assert!(ea == eb);
        }
        // transitive
        if ea >= eb && eb >= ec {
            prop_assert!(ea >= ec);
        }
        // total: exactly one of <, ==, > holds
        let ord = ea.cmp(&eb);
        prop_assert_eq!(eb.cmp(&ea), ord.reverse());
    }

    #[test]
    fn higher_category_always_wins(a in seven_cards(), b in seven_cards()) {
        let ea = evaluate(&a).unwrap();
        let eb = evaluate(&b).unwrap();
        match ea.category.cmp(&eb.category) {
            Ordering::Greater => prop_assert!(ea > eb),
            Ordering::Less => prop_assert!(ea < eb),
            Ordering::Equal => {}
        }
    }

    #[test]
    fn best_seven_card_hand_beats_every_five_card_subset(cards in seven_cards()) {
        let best = evaluate(&cards).unwrap();
        for skip_a in 0..6 {
            for skip_b in (skip_a + 1)..7 {
                let five: Vec<Card> = cards
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| *i != skip_a && *i != skip_b)
                    .map(|(_, c)| *c)
                    .collect();
                let sub = evaluate(&five).unwrap();
                prop_assert!(sub.category <= best.category);
            }
        }
    }

    #[test]
    fn adding_cards_never_weakens_a_hand(cards in prop::collection::btree_set(0usize..52, 5..=7)) {
        let cards: Vec<Card> = cards.into_iter().map(card_from_index).collect();
        let all = evaluate(&cards).unwrap();
        let first_five = evaluate(&cards[..5]).unwrap();
        prop_assert!(all.category >= first_five.category);
    }
}
