//! Seat agents: pluggable decision policies that can fill seats with
//! automated opponents. Agents read the table through the
//! [`TableEngine`] boundary and never mutate it directly; the driver
//! submits whatever they decide. Pacing between actions is a presentation
//! concern and has no place here.

use crate::engine::TableEngine;
use crate::evaluator::evaluate;
use crate::table::{Action, ActionError, Street};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A decision policy for one seat. Returning `None` declines to act; the
/// driver folds for the seat.
pub trait SeatAgent {
    fn act(&mut self, engine: &dyn TableEngine, seat: usize) -> Option<Action>;
}

/// Always checks or calls. Useful as a predictable baseline in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct Caller;

impl SeatAgent for Caller {
    fn act(&mut self, _engine: &dyn TableEngine, _seat: usize) -> Option<Action> {
        Some(Action::Call)
    }
}

/// A seeded bot mixing fold, call, and raise on evaluated hand strength.
/// Deterministic for a given seed and action sequence.
#[derive(Debug)]
pub struct RandomBot {
    rng: StdRng,
    aggression: f64,
}

impl RandomBot {
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed), aggression: 0.3 }
    }

    pub fn with_aggression(mut self, aggression: f64) -> Self {
        self.aggression = aggression.clamp(0.0, 1.0);
        self
    }

    /// Rough hand strength in 0..=1: category-driven once a flop is down,
    /// a pair/high-card heuristic before it.
    fn strength(&self, engine: &dyn TableEngine, seat: usize) -> Option<f64> {
        let hole = engine.hole_cards(seat)?;
        let board = engine.board();
        if board.len() >= 3 {
            let mut cards = hole.as_array().to_vec();
            cards.extend_from_slice(board.as_slice());
            let eval = evaluate(&cards).ok()?;
            let category = f64::from(eval.category.ordinal()) / 9.0;
            let high = f64::from(eval.best_five[0].rank().value()) / 14.0;
            return Some((category * 0.85 + high * 0.15).clamp(0.0, 1.0));
        }
        let a = hole.first().rank();
        let b = hole.second().rank();
        let high = f64::from(a.max(b).value()) / 14.0;
        let mut score = high * 0.5;
        if a == b {
            score += 0.35;
        }
        if hole.first().suit() == hole.second().suit() {
            score += 0.05;
        }
        Some(score.clamp(0.0, 1.0))
    }

    fn raise_target(&mut self, engine: &dyn TableEngine, seat: usize) -> Option<u64> {
        let cap = engine.bet(seat) + engine.stack(seat);
        let step = engine.big_blind().max(engine.pot() / 2);
        let to = (engine.current_bet() + step).min(cap);
        (to > engine.current_bet()).then_some(to)
    }
}

impl SeatAgent for RandomBot {
    fn act(&mut self, engine: &dyn TableEngine, seat: usize) -> Option<Action> {
        let strength = self.strength(engine, seat)?;
        let to_call = engine.to_call(seat);
        if to_call > 0 && strength < 0.3 && self.rng.random::<f64>() < 0.7 {
            return Some(Action::Fold);
        }
        if strength > 0.55 && self.rng.random::<f64>() < self.aggression {
            if let Some(to) = self.raise_target(engine, seat) {
                return Some(Action::Raise { to });
            }
        }
        Some(Action::Call)
    }
}

/// Drive one full hand: start it, then pump agent decisions until showdown.
/// Agents that decline or submit an invalid action fall back to a call,
/// then a fold, so a misbehaving policy can stall but never wedge the hand.
pub fn run_hand(
    engine: &mut dyn TableEngine,
    agents: &mut [Box<dyn SeatAgent>],
) -> Result<(), ActionError> {
    engine.start_hand()?;
    // Raises strictly increase the table bet and stacks are finite, so the
    // loop terminates; the guard only catches a broken engine.
    let mut guard = 0usize;
    while engine.street() != Street::Showdown {
        let seat = engine.current();
        let decided =
            agents.get_mut(seat).and_then(|a| a.act(&*engine, seat)).unwrap_or(Action::Fold);
        if engine.submit(seat, decided).is_err() && engine.submit(seat, Action::Call).is_err() {
            engine.submit(seat, Action::Fold)?;
        }
        guard += 1;
        if guard > 10_000 {
            log::warn!("hand did not terminate, abandoning drive loop");
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Table;

    fn bots(n: usize) -> Vec<Box<dyn SeatAgent>> {
        (0..n).map(|i| Box::new(RandomBot::seeded(i as u64)) as Box<dyn SeatAgent>).collect()
    }

    #[test]
    fn callers_check_a_hand_down_to_showdown() {
        let mut table = Table::new(&[("a", 500), ("b", 500), ("c", 500)], 5, 10);
        let mut agents: Vec<Box<dyn SeatAgent>> =
            vec![Box::new(Caller), Box::new(Caller), Box::new(Caller)];
        run_hand(&mut table, &mut agents).unwrap();
        assert_eq!(table.street(), Street::Showdown);
        assert_eq!(table.pot(), 0);
        assert_eq!(table.players().iter().map(|p| p.stack()).sum::<u64>(), 1500);
    }

    #[test]
    fn bots_play_many_hands_without_losing_chips() {
        let mut table = Table::new(&[("a", 500), ("b", 500), ("c", 500), ("d", 500)], 5, 10);
        let mut agents = bots(4);
        for _ in 0..50 {
            if run_hand(&mut table, &mut agents).is_err() {
                break; // down to one funded player
            }
            assert_eq!(table.players().iter().map(|p| p.stack()).sum::<u64>(), 2000);
        }
    }

    #[test]
    fn bot_decisions_are_reproducible_for_a_seed() {
        let run = || {
            let mut table = Table::new(&[("a", 500), ("b", 500), ("c", 500)], 5, 10);
            let mut agents = bots(3);
            table.start_hand_seeded(11).unwrap();
            while table.street() != Street::Showdown {
                let seat = table.current();
                let action = agents[seat].act(&table, seat).unwrap_or(Action::Fold);
                if table.submit(seat, action).is_err() {
                    table.submit(seat, Action::Call).unwrap();
                }
            }
            table.players().iter().map(|p| p.stack()).collect::<Vec<u64>>()
        };
        assert_eq!(run(), run());
    }
}
