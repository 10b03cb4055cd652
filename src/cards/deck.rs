use rand::Rng;
use thiserror::Error;
use tracing::debug;

use super::basic::Card;

/// Number of cards in a dealt hand.
pub const HAND_SIZE: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("Not enough cards in deck: needed {needed}, remaining {remaining}")]
    NotEnoughCards { needed: usize, remaining: usize },
}

/// A deck of distinct cards that hands are drawn from.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// A full 52 card deck.
    pub fn new() -> Self {
        Self {
            cards: Card::all_cards(),
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Removes [`HAND_SIZE`] randomly chosen cards from the deck.
    pub fn draw_hand<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Vec<Card>, DeckError> {
        if self.cards.len() < HAND_SIZE {
            return Err(DeckError::NotEnoughCards {
                needed: HAND_SIZE,
                remaining: self.cards.len(),
            });
        }

        let hand: Vec<Card> = (0..HAND_SIZE)
            .map(|_| {
                let idx = rng.random_range(0..self.cards.len());
                self.cards.remove(idx)
            })
            .collect();

        debug!(remaining = self.cards.len(), "Drew hand from deck");
        Ok(hand)
    }
}
