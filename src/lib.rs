// Library crate for five-card poker hand ranking
// Exposes the card model, the per-category classifiers and the ranking coordinator

pub mod cards;
pub mod ranking;

pub use cards::{
    format_hand, parse_hand, Card, CardError, Deck, DeckError, HandCategory, Rank, RankedHand,
    Suit, HAND_SIZE,
};
pub use ranking::{rank_hand, RankError};
