use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub const DECK_SIZE: usize = 52;

/// Errors raised by deck operations.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("deck is empty")]
    Empty,
}

/// A standard 52-card deck dealt through a cursor.
///
/// The shuffled sequence itself is never mutated after the shuffle; drawing
/// advances an index into it. A drawn card is never re-issued until the deck
/// is replaced for the next hand.
///
/// ```
/// use holdem_engine::deck::Deck;
///
/// let mut deck = Deck::new();
/// deck.shuffle_seeded(7);
/// let first = deck.draw().unwrap();
/// assert_eq!(deck.remaining(), 51);
/// assert!(!deck.undrawn().contains(&first));
/// ```
#[derive(Debug, Clone)]
pub struct Deck {
    cards: [Card; DECK_SIZE],
    next: usize,
}

impl Deck {
    /// A fresh, unshuffled 52-card deck with the cursor at the top.
    pub fn new() -> Self {
        let mut cards = [Card::new(Rank::Two, Suit::Clubs); DECK_SIZE];
        let mut i = 0;
        for &s in &Suit::ALL {
            for &r in &Rank::ALL {
                cards[i] = Card::new(r, s);
                i += 1;
            }
        }
        Self { cards, next: 0 }
    }

    /// Cards not yet drawn.
    pub fn remaining(&self) -> usize {
        DECK_SIZE - self.next
    }

    pub fn is_empty(&self) -> bool {
        self.next == DECK_SIZE
    }

    /// The undrawn tail of the deck, in draw order.
    pub fn undrawn(&self) -> &[Card] {
        &self.cards[self.next..]
    }

    /// Shuffle the undrawn cards with the thread RNG.
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut rand::rng());
    }

    /// Shuffle the undrawn cards with a seeded RNG for reproducible deals.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.shuffle_with(&mut rng);
    }

    /// Shuffle the undrawn cards with the provided RNG.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards[self.next..].shuffle(rng);
    }

    /// Draw the card at the cursor and advance past it.
    pub fn draw(&mut self) -> Result<Card, DeckError> {
        if self.next == DECK_SIZE {
            return Err(DeckError::Empty);
        }
        let card = self.cards[self.next];
        self.next += 1;
        Ok(card)
    }

    /// Draw up to `n` cards, stopping early if the deck runs out.
    pub fn draw_n(&mut self, n: usize) -> Vec<Card> {
        (0..n).map_while(|_| self.draw().ok()).collect()
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
