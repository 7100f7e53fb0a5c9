//! Narrow API boundary over the table. Hosts and agents that drive a game
//! (UIs, bots, simulators) can hold `&mut dyn TableEngine` without depending
//! on the concrete `Table` type. Implemented for [`crate::table::Table`].

use crate::events::TableEvent;
use crate::hand::{Board, HoleCards};
use crate::table::{Action, ActionError, Street, Table};
use std::collections::VecDeque;

pub trait TableEngine {
    // Hand lifecycle
    fn start_hand(&mut self) -> Result<(), ActionError>;
    fn submit(&mut self, seat: usize, action: Action) -> Result<(), ActionError>;
    fn drain_events(&mut self) -> VecDeque<TableEvent>;

    // Queries
    fn to_call(&self, seat: usize) -> u64;
    fn current_bet(&self) -> u64;
    fn pot(&self) -> u64;
    fn small_blind(&self) -> u64;
    fn big_blind(&self) -> u64;
    fn hole_cards(&self, seat: usize) -> Option<HoleCards>;
    fn board(&self) -> &Board;
    fn stack(&self, seat: usize) -> u64;
    fn bet(&self, seat: usize) -> u64;
    fn current(&self) -> usize;
    fn dealer(&self) -> Option<usize>;
    fn street(&self) -> Street;
    fn num_players(&self) -> usize;
}

impl TableEngine for Table {
    fn start_hand(&mut self) -> Result<(), ActionError> {
        self.start_hand()
    }

    fn submit(&mut self, seat: usize, action: Action) -> Result<(), ActionError> {
        self.submit(seat, action)
    }

    fn drain_events(&mut self) -> VecDeque<TableEvent> {
        self.drain_events()
    }

    fn to_call(&self, seat: usize) -> u64 {
        self.to_call(seat)
    }
    fn current_bet(&self) -> u64 {
        self.current_bet()
    }
    fn pot(&self) -> u64 {
        self.pot()
    }
    fn small_blind(&self) -> u64 {
        self.small_blind()
    }
    fn big_blind(&self) -> u64 {
        self.big_blind()
    }
    fn hole_cards(&self, seat: usize) -> Option<HoleCards> {
        self.hole_cards(seat)
    }
    fn board(&self) -> &Board {
        self.board()
    }
    fn stack(&self, seat: usize) -> u64 {
        self.players().get(seat).map_or(0, |p| p.stack())
    }
    fn bet(&self, seat: usize) -> u64 {
        self.players().get(seat).map_or(0, |p| p.bet())
    }
    fn current(&self) -> usize {
        self.current()
    }
    fn dealer(&self) -> Option<usize> {
        self.dealer()
    }
    fn street(&self) -> Street {
        self.street()
    }
    fn num_players(&self) -> usize {
        self.num_players()
    }
}
