use holdem_engine::table::{Action, ActionError, Street, Table};

fn three_seats() -> Table {
    let mut t = Table::new(&[("P1", 1000), ("P2", 1000), ("P3", 1000)], 20, 40);
    t.start_hand_seeded(1).unwrap();
    t
}

#[test]
fn blinds_pot_and_opening_turn() {
    // Dealer P1, SB P2, BB P3: start_hand charges P2 20 and P3 40,
    // pot is 60, the table bet is 40, and action opens on P1.
    let t = three_seats();
    assert_eq!(t.dealer(), Some(0));
    assert_eq!(t.players()[1].bet(), 20);
    assert_eq!(t.players()[2].bet(), 40);
    assert_eq!(t.pot(), 60);
    assert_eq!(t.current_bet(), 40);
    assert_eq!(t.current(), 0);
    assert_eq!(t.street(), Street::PreFlop);
}

#[test]
fn small_blind_still_owes_after_a_call_ahead() {
    let mut t = three_seats();
    t.submit(0, Action::Call).unwrap();
    // P2 posted 20 against a 40 bet and must act again.
    assert_eq!(t.current(), 1);
    assert_eq!(t.to_call(1), 20);
    assert_eq!(t.street(), Street::PreFlop);
}

#[test]
fn big_blind_keeps_the_option_even_when_matched() {
    let mut t = three_seats();
    t.submit(0, Action::Call).unwrap();
    t.submit(1, Action::Call).unwrap();
    // Everyone matched 40, but the big blind has not acted yet.
    assert_eq!(t.street(), Street::PreFlop);
    assert_eq!(t.current(), 2);
    assert_eq!(t.to_call(2), 0);
    t.submit(2, Action::Call).unwrap();
    assert_eq!(t.street(), Street::Flop);
    assert_eq!(t.board().len(), 3);
    assert_eq!(t.pot(), 120);
}

#[test]
fn big_blind_raise_on_the_option_reopens_the_round() {
    let mut t = three_seats();
    t.submit(0, Action::Call).unwrap();
    t.submit(1, Action::Call).unwrap();
    t.submit(2, Action::Raise { to: 120 }).unwrap();
    assert_eq!(t.street(), Street::PreFlop);
    assert!(!t.players()[0].has_acted());
    assert!(!t.players()[1].has_acted());
    t.submit(0, Action::Call).unwrap();
    t.submit(1, Action::Call).unwrap();
    assert_eq!(t.street(), Street::Flop);
    assert_eq!(t.pot(), 360);
}

#[test]
fn streets_advance_in_order_to_showdown() {
    let mut t = three_seats();
    let mut seen = vec![t.street()];
    while t.street() != Street::Showdown {
        t.submit(t.current(), Action::Call).unwrap();
        if *seen.last().unwrap() != t.street() {
            seen.push(t.street());
        }
    }
    assert_eq!(
        seen,
        vec![Street::PreFlop, Street::Flop, Street::Turn, Street::River, Street::Showdown]
    );
    assert_eq!(t.board().len(), 5);
}

#[test]
fn postflop_round_starts_fresh_left_of_the_dealer() {
    let mut t = three_seats();
    for seat in [0, 1, 2] {
        t.submit(seat, Action::Call).unwrap();
    }
    assert_eq!(t.street(), Street::Flop);
    assert_eq!(t.current_bet(), 0);
    assert_eq!(t.current(), 1);
    assert!(t.players().iter().all(|p| p.bet() == 0));
}

#[test]
fn invalid_raise_is_rejected_without_consuming_the_turn() {
    let mut t = three_seats();
    let err = t.submit(0, Action::Raise { to: 40 }).unwrap_err();
    assert_eq!(err, ActionError::RaiseTooLow { current: 40, target: 40 });
    assert_eq!(t.pot(), 60);
    assert_eq!(t.current(), 0);
    // The same seat may immediately act correctly.
    t.submit(0, Action::Raise { to: 80 }).unwrap();
    assert_eq!(t.current_bet(), 80);
}

#[test]
fn acting_out_of_turn_is_rejected() {
    let mut t = three_seats();
    assert_eq!(
        t.submit(2, Action::Call).unwrap_err(),
        ActionError::OutOfTurn { seat: 2, current: 0 }
    );
    assert_eq!(t.submit(9, Action::Call).unwrap_err(), ActionError::NotInHand);
}

#[test]
fn acting_at_showdown_is_rejected() {
    let mut t = three_seats();
    t.submit(0, Action::Fold).unwrap();
    t.submit(1, Action::Fold).unwrap();
    assert_eq!(t.street(), Street::Showdown);
    assert_eq!(t.submit(2, Action::Call).unwrap_err(), ActionError::HandOver);
}

#[test]
fn folding_to_one_ends_the_hand_mid_street() {
    let mut t = three_seats();
    t.submit(0, Action::Call).unwrap();
    t.submit(1, Action::Raise { to: 100 }).unwrap();
    t.submit(2, Action::Fold).unwrap();
    t.submit(0, Action::Fold).unwrap();
    // P2 takes the pot with no flop ever dealt.
    assert_eq!(t.street(), Street::Showdown);
    assert_eq!(t.board().len(), 0);
    assert_eq!(t.winners(), &[1]);
    assert_eq!(t.players()[1].stack(), 1080);
    assert_eq!(t.pot(), 0);
}

#[test]
fn chips_are_conserved_through_any_hand() {
    let mut t = three_seats();
    let total = |t: &Table| t.players().iter().map(|p| p.stack()).sum::<u64>() + t.pot();
    assert_eq!(total(&t), 3000);
    t.submit(0, Action::Raise { to: 200 }).unwrap();
    t.submit(1, Action::Call).unwrap();
    assert_eq!(total(&t), 3000);
    t.submit(2, Action::Fold).unwrap();
    while t.street() != Street::Showdown {
        t.submit(t.current(), Action::Call).unwrap();
    }
    assert_eq!(total(&t), 3000);
    assert_eq!(t.pot(), 0);
}

#[test]
fn heads_up_uses_two_roles_and_sb_acts_first_throughout() {
    let mut t = Table::new(&[("a", 1000), ("b", 1000)], 20, 40);
    t.start_hand_seeded(3).unwrap();
    assert_eq!(t.dealer(), None);
    assert_eq!(t.sb_pos(), Some(0));
    assert_eq!(t.bb_pos(), Some(1));
    assert_eq!(t.current(), 0);
    t.submit(0, Action::Call).unwrap();
    t.submit(1, Action::Call).unwrap();
    assert_eq!(t.street(), Street::Flop);
    assert_eq!(t.current(), 0);
}
