//! The betting engine: a turn-based state machine over four streets plus
//! showdown, owning the deck, board, pot, and per-seat state for one hand
//! at a time. Single-pot semantics: there are no side pots, and an all-in
//! player contends for the whole pot.

use crate::cards::Card;
use crate::deck::Deck;
use crate::evaluator::{evaluate_holdem, HandEval};
use crate::events::TableEvent;
use crate::hand::{Board, HoleCards};
use crate::roles::{Role, RoleAssignment};
use rand::Rng;
use std::collections::VecDeque;
use std::fmt;

/// The betting phases of a hand. `Showdown` doubles as "no hand in
/// progress": the table starts there and returns there after every payout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum Street {
    PreFlop,
    Flop,
    Turn,
    River,
    Showdown,
}

impl fmt::Display for Street {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Street::PreFlop => "pre-flop",
            Street::Flop => "flop",
            Street::Turn => "turn",
            Street::River => "river",
            Street::Showdown => "showdown",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum PlayerStatus {
    Active,
    Folded,
    AllIn,
}

/// A player action. `Raise { to }` names the new table total, not the
/// increment: raising to 100 over a 40 bet pays `100 − streetBet`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Action {
    Fold,
    /// Call the outstanding bet, or check when there is nothing to call.
    Call,
    Raise { to: u64 },
}

/// Rejected operations. None of these mutate any table state: a failed
/// action leaves the hand exactly as it was and the turn unconsumed.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActionError {
    #[error("no hand in progress")]
    HandOver,
    #[error("a hand is already in progress")]
    HandInProgress,
    #[error("seat {seat} acted out of turn (seat {current} to act)")]
    OutOfTurn { seat: usize, current: usize },
    #[error("seat is not in the hand")]
    NotInHand,
    #[error("raise target {target} does not exceed current bet {current}")]
    RaiseTooLow { current: u64, target: u64 },
    #[error("raise needs {needed} but only {available} behind")]
    InsufficientFunds { needed: u64, available: u64 },
    #[error("need at least two funded players, have {funded}")]
    NotEnoughPlayers { funded: usize },
}

/// One seat at the table. The chip stack is the only field that survives a
/// hand boundary; everything else resets in `start_hand`.
#[derive(Debug, Clone)]
pub struct Player {
    pub(crate) name: String,
    pub(crate) stack: u64,
    pub(crate) bet: u64,
    pub(crate) acted: bool,
    pub(crate) status: PlayerStatus,
    pub(crate) hole: Option<HoleCards>,
    pub(crate) role: Role,
}

impl Player {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stack(&self) -> u64 {
        self.stack
    }

    /// Chips committed on the current street.
    pub fn bet(&self) -> u64 {
        self.bet
    }

    pub fn status(&self) -> PlayerStatus {
        self.status
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn hole(&self) -> Option<HoleCards> {
        self.hole
    }

    /// Whether this seat has taken a turn since the street (or the last
    /// raise) reset the flag.
    pub fn has_acted(&self) -> bool {
        self.acted
    }
}

/// A poker table running one hand at a time.
///
/// ```
/// use holdem_engine::table::{Action, Street, Table};
///
/// let mut table = Table::new(&[("alice", 1000), ("bob", 1000), ("carol", 1000)], 20, 40);
/// table.start_hand_seeded(7).unwrap();
/// assert_eq!(table.pot(), 60);
/// assert_eq!(table.current_bet(), 40);
/// assert_eq!(table.current(), 0); // first to act, left of the big blind
/// table.submit(0, Action::Call).unwrap();
/// assert_eq!(table.pot(), 100);
/// assert_eq!(table.street(), Street::PreFlop);
/// ```
#[derive(Debug)]
pub struct Table {
    small_blind: u64,
    big_blind: u64,
    players: Vec<Player>,
    deck: Deck,
    board: Board,
    pot: u64,
    current_bet: u64,
    street: Street,
    current: usize,
    roles: Option<RoleAssignment>,
    winners: Vec<usize>,
    events: VecDeque<TableEvent>,
}

impl Table {
    /// Seat the given players. No hand is running until [`Table::start_hand`].
    pub fn new(seats: &[(&str, u64)], small_blind: u64, big_blind: u64) -> Self {
        let players = seats
            .iter()
            .map(|&(name, stack)| Player {
                name: name.to_string(),
                stack,
                bet: 0,
                acted: false,
                status: PlayerStatus::Folded,
                hole: None,
                role: Role::None,
            })
            .collect();
        Self {
            small_blind,
            big_blind,
            players,
            deck: Deck::new(),
            board: Board::empty(),
            pot: 0,
            current_bet: 0,
            street: Street::Showdown,
            current: 0,
            roles: None,
            winners: Vec::new(),
            events: VecDeque::new(),
        }
    }

    pub fn small_blind(&self) -> u64 {
        self.small_blind
    }

    pub fn big_blind(&self) -> u64 {
        self.big_blind
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn pot(&self) -> u64 {
        self.pot
    }

    /// The highest outstanding bet on the current street.
    pub fn current_bet(&self) -> u64 {
        self.current_bet
    }

    /// The seat whose turn it is. Meaningless at showdown.
    pub fn current(&self) -> usize {
        self.current
    }

    pub fn street(&self) -> Street {
        self.street
    }

    /// Dealer seat, if any. Heads-up hands have no dealer.
    pub fn dealer(&self) -> Option<usize> {
        self.roles.and_then(|r| r.dealer)
    }

    pub fn sb_pos(&self) -> Option<usize> {
        self.roles.map(|r| r.small_blind)
    }

    pub fn bb_pos(&self) -> Option<usize> {
        self.roles.map(|r| r.big_blind)
    }

    /// Seats awarded chips at the end of the last completed hand.
    pub fn winners(&self) -> &[usize] {
        &self.winners
    }

    /// What `seat` would pay to match the current bet.
    pub fn to_call(&self, seat: usize) -> u64 {
        if self.street == Street::Showdown {
            return 0;
        }
        self.players.get(seat).map_or(0, |p| self.current_bet.saturating_sub(p.bet))
    }

    pub fn hole_cards(&self, seat: usize) -> Option<HoleCards> {
        self.players.get(seat).and_then(|p| p.hole)
    }

    /// Take all queued events, leaving the queue empty.
    pub fn drain_events(&mut self) -> VecDeque<TableEvent> {
        std::mem::take(&mut self.events)
    }

    /// Begin a new hand with a randomly shuffled deck.
    pub fn start_hand(&mut self) -> Result<(), ActionError> {
        let seed: u64 = rand::rng().random();
        self.start_hand_seeded(seed)
    }

    /// Begin a new hand with a deterministic shuffle, for reproducible deals.
    ///
    /// Rotates roles (or assigns them on the first hand), replaces the deck,
    /// clears board and hole cards, posts the blinds, and hands the turn to
    /// the seat left of the big blind. Seats with an empty stack sit out.
    pub fn start_hand_seeded(&mut self, seed: u64) -> Result<(), ActionError> {
        if self.street != Street::Showdown {
            return Err(ActionError::HandInProgress);
        }
        let funded: Vec<bool> = self.players.iter().map(|p| p.stack > 0).collect();
        let n_funded = funded.iter().filter(|&&f| f).count();
        let roles = match self.roles {
            None => RoleAssignment::assign_initial(&funded),
            Some(prev) => prev.rotate(&funded),
        }
        .ok_or(ActionError::NotEnoughPlayers { funded: n_funded })?;
        self.roles = Some(roles);

        self.deck = Deck::new();
        self.deck.shuffle_seeded(seed);
        self.board = Board::empty();
        self.pot = 0;
        self.current_bet = 0;
        self.street = Street::PreFlop;
        self.winners.clear();

        for (i, p) in self.players.iter_mut().enumerate() {
            p.bet = 0;
            p.acted = false;
            p.hole = None;
            p.role = if Some(i) == roles.dealer {
                Role::Dealer
            } else if i == roles.small_blind {
                Role::SmallBlind
            } else if i == roles.big_blind {
                Role::BigBlind
            } else {
                Role::None
            };
            p.status = if p.stack > 0 { PlayerStatus::Active } else { PlayerStatus::Folded };
        }

        self.deal_hole_cards();
        self.push(TableEvent::HandStarted {
            dealer: roles.dealer,
            small_blind: roles.small_blind,
            big_blind: roles.big_blind,
        });

        self.post_blind(roles.small_blind, Role::SmallBlind, self.small_blind);
        self.post_blind(roles.big_blind, Role::BigBlind, self.big_blind);
        self.current_bet = self.big_blind;

        if self.round_complete() {
            // Both blinds all-in with nobody left to act.
            self.advance_street();
            return Ok(());
        }
        self.current = roles.big_blind;
        self.move_to_next_actor();
        Ok(())
    }

    /// Apply one player action. Validation happens before any mutation, so
    /// an `Err` means nothing changed and the same seat is still to act.
    pub fn submit(&mut self, seat: usize, action: Action) -> Result<(), ActionError> {
        if self.street == Street::Showdown {
            return Err(ActionError::HandOver);
        }
        match self.players.get(seat).map(|p| p.status) {
            Some(PlayerStatus::Active) => {}
            _ => return Err(ActionError::NotInHand),
        }
        if seat != self.current {
            return Err(ActionError::OutOfTurn { seat, current: self.current });
        }

        match action {
            Action::Fold => {
                self.players[seat].status = PlayerStatus::Folded;
                self.players[seat].acted = true;
                self.push(TableEvent::PlayerFolded { seat });
                if let Some(survivor) = self.sole_survivor() {
                    self.award_uncontested(survivor);
                    return Ok(());
                }
            }
            Action::Call => {
                let owed = self.current_bet.saturating_sub(self.players[seat].bet);
                let p = &mut self.players[seat];
                // A short stack calls for whatever it holds and is all-in.
                let paid = p.stack.min(owed);
                p.stack -= paid;
                p.bet += paid;
                p.acted = true;
                if p.stack == 0 {
                    p.status = PlayerStatus::AllIn;
                }
                self.pot += paid;
                self.push(TableEvent::PlayerCalled { seat, paid });
            }
            Action::Raise { to } => {
                if to <= self.current_bet {
                    return Err(ActionError::RaiseTooLow { current: self.current_bet, target: to });
                }
                let needed = to - self.players[seat].bet;
                let available = self.players[seat].stack;
                if needed > available {
                    return Err(ActionError::InsufficientFunds { needed, available });
                }
                let p = &mut self.players[seat];
                p.stack -= needed;
                p.bet = to;
                p.acted = true;
                if p.stack == 0 {
                    p.status = PlayerStatus::AllIn;
                }
                self.pot += needed;
                self.current_bet = to;
                // A raise re-opens the action: everyone else must respond.
                for (i, other) in self.players.iter_mut().enumerate() {
                    if i != seat && other.status == PlayerStatus::Active {
                        other.acted = false;
                    }
                }
                self.push(TableEvent::PlayerRaised { seat, to });
            }
        }

        if self.round_complete() {
            self.advance_street();
        } else {
            self.move_to_next_actor();
        }
        Ok(())
    }

    fn deal_hole_cards(&mut self) {
        for i in 0..self.players.len() {
            if self.players[i].status != PlayerStatus::Active {
                continue;
            }
            match (self.deck.draw(), self.deck.draw()) {
                (Ok(a), Ok(b)) => match HoleCards::try_new(a, b) {
                    Ok(hole) => self.players[i].hole = Some(hole),
                    Err(e) => log::warn!("seat {i} dealt an invalid hand: {e}"),
                },
                _ => log::warn!("deck exhausted, seat {i} skipped in the deal"),
            }
        }
    }

    /// Post a blind, short when the stack cannot cover it (the player is
    /// then all-in on the blind).
    fn post_blind(&mut self, seat: usize, role: Role, amount: u64) {
        let p = &mut self.players[seat];
        let paid = p.stack.min(amount);
        p.stack -= paid;
        p.bet += paid;
        if p.stack == 0 {
            p.status = PlayerStatus::AllIn;
        }
        self.pot += paid;
        self.push(TableEvent::BlindPosted { seat, role, amount: paid });
    }

    fn count_active(&self) -> usize {
        self.players.iter().filter(|p| p.status == PlayerStatus::Active).count()
    }

    /// The last unfolded seat, if exactly one remains.
    fn sole_survivor(&self) -> Option<usize> {
        let mut unfolded =
            self.players.iter().enumerate().filter(|(_, p)| p.status != PlayerStatus::Folded);
        match (unfolded.next(), unfolded.next()) {
            (Some((i, _)), None) => Some(i),
            _ => None,
        }
    }

    /// A betting round ends when every active seat has taken a turn and
    /// matched the current bet. All-in seats are exempt; they cannot act.
    fn round_complete(&self) -> bool {
        self.players
            .iter()
            .filter(|p| p.status == PlayerStatus::Active)
            .all(|p| p.acted && p.bet == self.current_bet)
    }

    fn needs_action(&self, seat: usize) -> bool {
        let p = &self.players[seat];
        p.status == PlayerStatus::Active && (!p.acted || p.bet < self.current_bet)
    }

    /// Move the turn to the next seat still owing a decision and prompt it.
    fn move_to_next_actor(&mut self) {
        let n = self.players.len();
        let mut i = (self.current + 1) % n;
        for _ in 0..n {
            if self.needs_action(i) {
                self.current = i;
                let to_call = self.to_call(i);
                self.push(TableEvent::ActionRequired { seat: i, to_call });
                return;
            }
            i = (i + 1) % n;
        }
    }

    /// Deal the next street, or run the showdown after the river. When
    /// fewer than two seats can still bet, streets deal out with no betting
    /// until the board is complete.
    fn advance_street(&mut self) {
        let next = match self.street {
            Street::PreFlop => Street::Flop,
            Street::Flop => Street::Turn,
            Street::Turn => Street::River,
            Street::River => {
                self.showdown();
                return;
            }
            Street::Showdown => return,
        };
        let dealt = self.deal_board(if next == Street::Flop { 3 } else { 1 });
        self.street = next;
        log::debug!("dealing {next}, board {:?}", self.board.as_slice());
        self.push(TableEvent::StreetDealt { street: next, cards: dealt });

        for p in &mut self.players {
            p.bet = 0;
            p.acted = false;
        }
        self.current_bet = 0;

        if self.count_active() < 2 {
            self.advance_street();
            return;
        }
        // Post-flop the first active seat left of the dealer opens; heads-up
        // there is no dealer and the small blind acts first.
        let start = match self.roles {
            Some(RoleAssignment { dealer: Some(d), .. }) => (d + 1) % self.players.len(),
            Some(RoleAssignment { small_blind, .. }) => small_blind,
            None => 0,
        };
        let n = self.players.len();
        let mut i = start;
        for _ in 0..n {
            if self.players[i].status == PlayerStatus::Active {
                break;
            }
            i = (i + 1) % n;
        }
        self.current = i;
        let to_call = self.to_call(i);
        self.push(TableEvent::ActionRequired { seat: i, to_call });
    }

    fn deal_board(&mut self, n: usize) -> Vec<Card> {
        let mut dealt = Vec::with_capacity(n);
        for _ in 0..n {
            match self.deck.draw() {
                Ok(c) => {
                    self.board.push(c);
                    dealt.push(c);
                }
                Err(e) => {
                    log::warn!("board deal skipped: {e}");
                    break;
                }
            }
        }
        dealt
    }

    /// Everyone folded to one seat: the pot is theirs, with no further
    /// dealing and no evaluation.
    fn award_uncontested(&mut self, seat: usize) {
        let amount = self.pot;
        self.players[seat].stack += amount;
        self.pot = 0;
        self.street = Street::Showdown;
        self.winners = vec![seat];
        log::debug!("uncontested pot of {amount} to seat {seat}");
        self.push(TableEvent::PotAwarded { seat, amount, split: false });
    }

    /// Evaluate every unfolded hand and pay the pot to the best. Exact ties
    /// split it evenly; remainder chips go one each to the tied winners in
    /// seat order starting left of the dealer.
    fn showdown(&mut self) {
        self.street = Street::Showdown;
        let contenders: Vec<usize> = self
            .players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.status != PlayerStatus::Folded && p.hole.is_some())
            .map(|(i, _)| i)
            .collect();
        let Some(&first) = contenders.first() else {
            return;
        };
        if contenders.len() == 1 {
            self.award_uncontested(first);
            return;
        }

        let mut evals: Vec<(usize, HandEval)> = Vec::with_capacity(contenders.len());
        for &i in &contenders {
            let Some(hole) = self.players[i].hole else { continue };
            match evaluate_holdem(&hole, &self.board) {
                Ok(ev) => evals.push((i, ev)),
                Err(e) => log::warn!("seat {i} excluded from showdown: {e}"),
            }
        }
        if evals.is_empty() {
            self.award_uncontested(first);
            return;
        }
        self.push(TableEvent::ShowdownReached {
            reveals: evals.iter().map(|(i, ev)| (*i, ev.category)).collect(),
        });

        let best = evals.iter().map(|(_, ev)| ev).max().cloned();
        let Some(best) = best else { return };
        let mut winners: Vec<usize> =
            evals.iter().filter(|(_, ev)| *ev == best).map(|(i, _)| *i).collect();

        // Odd chips fall to the earliest winners left of the dealer
        // (heads-up: left of the small blind).
        let n = self.players.len();
        let reference = match self.roles {
            Some(RoleAssignment { dealer: Some(d), .. }) => d,
            Some(RoleAssignment { small_blind, .. }) => small_blind,
            None => 0,
        };
        winners.sort_by_key(|&i| (i + n - (reference + 1) % n) % n);

        let share = self.pot / winners.len() as u64;
        let remainder = (self.pot % winners.len() as u64) as usize;
        let split = winners.len() > 1;
        for (idx, &w) in winners.iter().enumerate() {
            let amount = share + u64::from(idx < remainder);
            self.players[w].stack += amount;
            log::debug!("pot share of {amount} to seat {w}");
            self.push(TableEvent::PotAwarded { seat: w, amount, split });
        }
        self.pot = 0;
        self.winners = winners;
    }

    fn push(&mut self, event: TableEvent) {
        self.events.push_back(event);
    }
}
