use pokerhand::{parse_hand, Card, Deck};
use rand::rngs::StdRng;
use rand::SeedableRng;

// ============================================================================
// Card Creation Macro
// ============================================================================

#[macro_export]
macro_rules! cards {
    ($($rank:ident $suit:ident),* $(,)?) => {
        vec![$(pokerhand::Card::new(pokerhand::Rank::$rank, pokerhand::Suit::$suit)),*]
    };
}

/// Builds a hand from notation such as "5S JD QH AC 4D".
pub fn hand(notation: &str) -> Vec<Card> {
    parse_hand(notation).expect("valid hand notation")
}

/// Draws `count` hands, each from a fresh deck, with a fixed seed.
pub fn sample_hands(count: usize, seed: u64) -> Vec<Vec<Card>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| Deck::new().draw_hand(&mut rng).expect("full deck"))
        .collect()
}
