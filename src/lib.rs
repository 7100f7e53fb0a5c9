//! holdem-engine: the rules core of a Texas Hold'em table.
//!
//! Goals:
//! - Correct hand evaluation for any set of five or more cards, with a
//!   strict total order over hands including kicker resolution
//! - A turn-serialized betting state machine across the four streets plus
//!   showdown: blinds, pot accounting, role rotation, split pots
//! - No panics for invalid input; every failure is a rejected operation
//!   (`Result`) that leaves the table state untouched
//!
//! Rendering, persistence, and networking are host concerns: the engine
//! queues structured [`events::TableEvent`]s and exposes query accessors,
//! and hosts format or transport them however they like.
//!
//! ## Quick start: play out a betting round
//! ```
//! use holdem_engine::table::{Action, Street, Table};
//!
//! let mut table = Table::new(&[("alice", 1000), ("bob", 1000), ("carol", 1000)], 20, 40);
//! table.start_hand_seeded(7).unwrap();
//!
//! // Blinds are posted automatically; the seat left of the big blind opens.
//! assert_eq!(table.pot(), 60);
//! assert_eq!(table.current(), 0);
//!
//! table.submit(0, Action::Call).unwrap();
//! table.submit(1, Action::Call).unwrap();
//! table.submit(2, Action::Call).unwrap();
//! assert_eq!(table.street(), Street::Flop);
//! ```
//!
//! ## Evaluating hands directly
//! ```
//! use holdem_engine::cards::parse_cards;
//! use holdem_engine::evaluator::{evaluate, HandCategory};
//!
//! let cards = parse_cards("As Ks Qs Js 10s 2c 3d").unwrap();
//! let eval = evaluate(&cards).unwrap();
//! assert_eq!(eval.category, HandCategory::RoyalFlush);
//! ```

pub mod agents;
pub mod cards;
pub mod deck;
pub mod engine;
pub mod evaluator;
pub mod events;
pub mod hand;
pub mod roles;
pub mod table;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
