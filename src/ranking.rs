use std::cmp::Ordering;
use thiserror::Error;
use tracing::{debug, trace};

use crate::cards::hands::{self, Classifier, HandCategory, RankedHand};
use crate::cards::{Card, Rank};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RankError {
    #[error("Cannot rank hand")]
    CannotRank,
}

/// Categories in evaluation order, highest value first.
pub const RANKING_ORDER: [(HandCategory, Classifier); 10] = [
    (HandCategory::RoyalFlush, hands::royal_flush),
    (HandCategory::StraightFlush, hands::straight_flush),
    (HandCategory::FourOfAKind, hands::four_of_a_kind),
    (HandCategory::FullHouse, hands::full_house),
    (HandCategory::Flush, hands::flush),
    (HandCategory::Straight, hands::straight),
    (HandCategory::ThreeOfAKind, hands::three_of_a_kind),
    (HandCategory::TwoPair, hands::two_pair),
    (HandCategory::Pair, hands::pair),
    (HandCategory::HighCard, hands::high_card),
];

/// Ranks a hand as the highest category it satisfies.
///
/// Any non-empty hand ranks at least as a high card, so an error means the
/// caller passed an empty hand.
pub fn rank_hand(hand: &[Card]) -> Result<RankedHand, RankError> {
    for (category, classify) in RANKING_ORDER {
        trace!(?category, "Probing hand category");
        if let Some(matching_cards) = classify(hand) {
            let ranked = RankedHand::new(category, matching_cards);
            debug!(
                category = %category,
                description = %ranked,
                "Ranked hand"
            );
            return Ok(ranked);
        }
    }

    Err(RankError::CannotRank)
}

/// Ace high rank comparison.
pub fn compare_ranks(a: &Card, b: &Card) -> Ordering {
    a.rank.cmp(&b.rank)
}

/// Rank comparison with aces sorted below every other rank.
pub fn compare_ranks_ace_low(a: &Card, b: &Card) -> Ordering {
    match (a.rank == Rank::Ace, b.rank == Rank::Ace) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => compare_ranks(a, b),
    }
}

/// All cards in `hand` sharing the rank of `target`, in hand order.
pub fn matches_in_hand(hand: &[Card], target: &Card) -> Vec<Card> {
    hand.iter()
        .copied()
        .filter(|card| card.rank == target.rank)
        .collect()
}
