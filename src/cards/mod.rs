pub mod basic;
pub mod deck;
pub mod hands;


pub use basic::{format_hand, parse_hand, Card, CardError, Rank, Suit};
pub use deck::{Deck, DeckError, HAND_SIZE};
pub use hands::{HandCategory, RankedHand};
