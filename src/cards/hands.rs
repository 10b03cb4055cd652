use std::fmt;
use strum_macros::EnumIter;

use super::basic::{Card, Rank, Suit};
use crate::ranking::{compare_ranks, compare_ranks_ace_low, matches_in_hand};

/// Poker hand categories, ordered by value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, EnumIter,
)]
pub enum HandCategory {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl HandCategory {
    pub fn value(&self) -> u8 {
        *self as u8
    }

    pub fn name(&self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::Pair => "Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        }
    }
}

impl PartialOrd for HandCategory {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandCategory {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value().cmp(&other.value())
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Extracts the cards that make up a category from a hand, if present.
pub type Classifier = fn(&[Card]) -> Option<Vec<Card>>;

/// The highest ranked card. Ties keep the first card seen.
pub fn high_card(hand: &[Card]) -> Option<Vec<Card>> {
    let first = *hand.first()?;
    let high = hand
        .iter()
        .fold(first, |high, &card| if card.rank > high.rank { card } else { high });
    Some(vec![high])
}

pub fn pair(hand: &[Card]) -> Option<Vec<Card>> {
    of_a_kind(hand, 2)
}

pub fn three_of_a_kind(hand: &[Card]) -> Option<Vec<Card>> {
    of_a_kind(hand, 3)
}

pub fn four_of_a_kind(hand: &[Card]) -> Option<Vec<Card>> {
    of_a_kind(hand, 4)
}

// Scans left to right and returns every card sharing the first rank seen at
// least `count` times.
fn of_a_kind(hand: &[Card], count: usize) -> Option<Vec<Card>> {
    hand.iter()
        .map(|card| matches_in_hand(hand, card))
        .find(|matches| matches.len() >= count)
}

fn without_rank(hand: &[Card], rank: Rank) -> Vec<Card> {
    hand.iter().copied().filter(|card| card.rank != rank).collect()
}

pub fn two_pair(hand: &[Card]) -> Option<Vec<Card>> {
    let first = pair(hand)?;
    let second = pair(&without_rank(hand, first[0].rank))?;
    Some([first, second].concat())
}

/// The triple is taken first, so four of a kind plus a kicker is never a
/// full house.
pub fn full_house(hand: &[Card]) -> Option<Vec<Card>> {
    let triple = three_of_a_kind(hand)?;
    let pair = pair(&without_rank(hand, triple[0].rank))?;
    Some([triple, pair].concat())
}

pub fn flush(hand: &[Card]) -> Option<Vec<Card>> {
    let suit = hand.first()?.suit;
    hand.iter()
        .all(|card| card.suit == suit)
        .then(|| hand.to_vec())
}

/// Returns the hand ordered low to high, so the last card is the straight's
/// high card. An ace is tried high first and then low, which makes A-2-3-4-5
/// a five high straight.
pub fn straight(hand: &[Card]) -> Option<Vec<Card>> {
    if hand.is_empty() {
        return None;
    }

    let mut ordered = hand.to_vec();
    ordered.sort_by(compare_ranks);
    if is_run(&ordered, |prev, rank| rank.value() == prev.value() + 1) {
        return Some(ordered);
    }

    if !hand.iter().any(|card| card.rank == Rank::Ace) {
        return None;
    }

    let mut ace_low = hand.to_vec();
    ace_low.sort_by(compare_ranks_ace_low);
    is_run(&ace_low, |prev, rank| {
        rank.value() == prev.value() + 1 || (prev == Rank::Ace && rank == Rank::Two)
    })
    .then_some(ace_low)
}

fn is_run(ordered: &[Card], follows: impl Fn(Rank, Rank) -> bool) -> bool {
    ordered
        .windows(2)
        .all(|pair| follows(pair[0].rank, pair[1].rank))
}

pub fn straight_flush(hand: &[Card]) -> Option<Vec<Card>> {
    flush(hand)?;
    straight(hand)
}

/// A straight flush holding both a king and an ace. Checking for the king
/// keeps the wheel straight flush out.
pub fn royal_flush(hand: &[Card]) -> Option<Vec<Card>> {
    let has = |rank: Rank| hand.iter().any(|card| card.rank == rank);
    if !(has(Rank::King) && has(Rank::Ace)) {
        return None;
    }
    straight_flush(hand)
}

/// A hand matched to its category, with the cards that substantiate it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct RankedHand {
    category: HandCategory,
    matching_cards: Vec<Card>,
}

impl RankedHand {
    /// `matching_cards` must be non-empty.
    pub(crate) fn new(category: HandCategory, matching_cards: Vec<Card>) -> Self {
        debug_assert!(!matching_cards.is_empty());
        Self {
            category,
            matching_cards,
        }
    }

    pub fn category(&self) -> HandCategory {
        self.category
    }

    pub fn matching_cards(&self) -> &[Card] {
        &self.matching_cards
    }

    fn first(&self) -> Card {
        self.matching_cards[0]
    }

    fn last(&self) -> Card {
        self.matching_cards[self.matching_cards.len() - 1]
    }

    /// The rank shared by the matched cards of a pair, triple or quad.
    pub fn of_rank(&self) -> Rank {
        self.first().rank
    }

    /// The suit of a flush-type hand.
    pub fn suit(&self) -> Suit {
        self.first().suit
    }

    /// The nominal high card of a straight-type hand.
    pub fn high_rank(&self) -> Rank {
        self.last().rank
    }

    /// Two pair ranks, higher first.
    pub fn pair_ranks(&self) -> (Rank, Rank) {
        let (a, b) = (self.first().rank, self.last().rank);
        if a >= b {
            (a, b)
        } else {
            (b, a)
        }
    }

    /// Full house ranks as (triple, pair).
    pub fn full_house_ranks(&self) -> (Rank, Rank) {
        (self.first().rank, self.last().rank)
    }

    pub fn description(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for RankedHand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.category {
            HandCategory::HighCard => write!(f, "High card, {}", self.of_rank()),
            HandCategory::Pair => write!(f, "Pair, {}s", self.of_rank()),
            HandCategory::TwoPair => {
                let (high, low) = self.pair_ranks();
                write!(f, "Two pair, {high}s and {low}s")
            }
            HandCategory::ThreeOfAKind => write!(f, "Three of a kind, {}s", self.of_rank()),
            HandCategory::Straight => write!(f, "Straight, {} high", self.high_rank()),
            HandCategory::Flush => write!(f, "Flush, {}s", self.suit().name()),
            HandCategory::FullHouse => {
                let (triple, pair) = self.full_house_ranks();
                write!(f, "Full House, {triple}s full of {pair}s")
            }
            HandCategory::FourOfAKind => write!(f, "Four of a kind, {}s", self.of_rank()),
            HandCategory::StraightFlush => write!(
                f,
                "Straight Flush, {}s, {} high",
                self.suit().name(),
                self.high_rank()
            ),
            HandCategory::RoyalFlush => write!(f, "Royal Flush, {}s", self.suit().name()),
        }
    }
}
