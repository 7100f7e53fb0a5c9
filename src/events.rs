use crate::cards::Card;
use crate::evaluator::HandCategory;
use crate::roles::Role;
use crate::table::Street;
use std::fmt;

/// Structured notifications queued by the table as a hand plays out.
///
/// The table never formats or displays anything itself; hosts drain the
/// queue with [`crate::table::Table::drain_events`] and render the events
/// however they like. `Display` provides a compact default rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TableEvent {
    HandStarted { dealer: Option<usize>, small_blind: usize, big_blind: usize },
    BlindPosted { seat: usize, role: Role, amount: u64 },
    StreetDealt { street: Street, cards: Vec<Card> },
    ActionRequired { seat: usize, to_call: u64 },
    PlayerFolded { seat: usize },
    /// `paid == 0` is a check.
    PlayerCalled { seat: usize, paid: u64 },
    PlayerRaised { seat: usize, to: u64 },
    ShowdownReached { reveals: Vec<(usize, HandCategory)> },
    PotAwarded { seat: usize, amount: u64, split: bool },
}

impl fmt::Display for TableEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableEvent::HandStarted { dealer: Some(d), small_blind, big_blind } => {
                write!(f, "hand started: BTN {d}, SB {small_blind}, BB {big_blind}")
            }
            TableEvent::HandStarted { dealer: None, small_blind, big_blind } => {
                write!(f, "hand started: SB {small_blind}, BB {big_blind}")
            }
            TableEvent::BlindPosted { seat, role, amount } => {
                write!(f, "seat {seat} posts {role} {amount}")
            }
            TableEvent::StreetDealt { street, cards } => {
                write!(f, "{street}:")?;
                for c in cards {
                    write!(f, " {c}")?;
                }
                Ok(())
            }
            TableEvent::ActionRequired { seat, to_call } => {
                write!(f, "seat {seat} to act, {to_call} to call")
            }
            TableEvent::PlayerFolded { seat } => write!(f, "seat {seat} folds"),
            TableEvent::PlayerCalled { seat, paid: 0 } => write!(f, "seat {seat} checks"),
            TableEvent::PlayerCalled { seat, paid } => write!(f, "seat {seat} calls {paid}"),
            TableEvent::PlayerRaised { seat, to } => write!(f, "seat {seat} raises to {to}"),
            TableEvent::ShowdownReached { reveals } => {
                write!(f, "showdown:")?;
                for (seat, category) in reveals {
                    write!(f, " seat {seat} shows {category};")?;
                }
                Ok(())
            }
            TableEvent::PotAwarded { seat, amount, split: true } => {
                write!(f, "seat {seat} splits {amount}")
            }
            TableEvent::PotAwarded { seat, amount, split: false } => {
                write!(f, "seat {seat} wins {amount}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_renderings() {
        let e = TableEvent::HandStarted { dealer: Some(0), small_blind: 1, big_blind: 2 };
        assert_eq!(e.to_string(), "hand started: BTN 0, SB 1, BB 2");

        let e = TableEvent::BlindPosted { seat: 2, role: Role::BigBlind, amount: 40 };
        assert_eq!(e.to_string(), "seat 2 posts BB 40");

        let e = TableEvent::PlayerCalled { seat: 1, paid: 0 };
        assert_eq!(e.to_string(), "seat 1 checks");

        let e = TableEvent::PotAwarded { seat: 0, amount: 120, split: false };
        assert_eq!(e.to_string(), "seat 0 wins 120");
    }

    #[test]
    fn street_dealt_lists_cards() {
        let cards = crate::cards::parse_cards("Ah Kd 2c").unwrap();
        let e = TableEvent::StreetDealt { street: Street::Flop, cards };
        assert_eq!(e.to_string(), "flop: Ah Kd 2c");
    }
}
