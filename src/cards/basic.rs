use std::fmt;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CardError {
    #[error("Invalid rank: {0}")]
    InvalidRank(String),
    #[error("Invalid suit: {0}")]
    InvalidSuit(String),
    #[error("Invalid card: {0}")]
    InvalidCard(String),
    #[error("No cards in hand")]
    EmptyHand,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, EnumIter,
)]
pub enum Suit {
    Hearts,
    Spades,
    Diamonds,
    Clubs,
}

impl Suit {
    /// Title-case singular name, e.g. "Heart".
    pub fn name(&self) -> &'static str {
        match self {
            Suit::Hearts => "Heart",
            Suit::Spades => "Spade",
            Suit::Diamonds => "Diamond",
            Suit::Clubs => "Club",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Suit::Hearts => "H",
                Suit::Spades => "S",
                Suit::Diamonds => "D",
                Suit::Clubs => "C",
            }
        )
    }
}

impl TryFrom<&str> for Suit {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_ascii_uppercase().as_str() {
            "H" => Ok(Suit::Hearts),
            "S" => Ok(Suit::Spades),
            "D" => Ok(Suit::Diamonds),
            "C" => Ok(Suit::Clubs),
            _ => Err(s.to_string()),
        }
    }
}

/// Card ranks, ace high. The discriminant is the rank's ordinal value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, EnumIter,
)]
pub enum Rank {
    Two = 2,
    Three = 3,
    Four = 4,
    Five = 5,
    Six = 6,
    Seven = 7,
    Eight = 8,
    Nine = 9,
    Ten = 10,
    Jack = 11,
    Queen = 12,
    King = 13,
    Ace = 14,
}

impl Rank {
    pub fn value(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Jack => write!(f, "J"),
            Rank::Queen => write!(f, "Q"),
            Rank::King => write!(f, "K"),
            Rank::Ace => write!(f, "A"),
            numeric => write!(f, "{}", numeric.value()),
        }
    }
}

impl TryFrom<&str> for Rank {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.to_ascii_uppercase().as_str() {
            "2" => Ok(Rank::Two),
            "3" => Ok(Rank::Three),
            "4" => Ok(Rank::Four),
            "5" => Ok(Rank::Five),
            "6" => Ok(Rank::Six),
            "7" => Ok(Rank::Seven),
            "8" => Ok(Rank::Eight),
            "9" => Ok(Rank::Nine),
            "10" | "T" => Ok(Rank::Ten),
            "J" => Ok(Rank::Jack),
            "Q" => Ok(Rank::Queen),
            "K" => Ok(Rank::King),
            "A" => Ok(Rank::Ace),
            _ => Err(s.to_string()),
        }
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.value().cmp(&other.value())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Parses a card token such as `"AS"`, `"10h"` or `"TD"`.
    pub fn from_string(s: &str) -> Result<Self, CardError> {
        if !(2..=3).contains(&s.len()) || !s.is_ascii() {
            return Err(CardError::InvalidCard(s.to_string()));
        }

        let (rank, suit) = s.split_at(s.len() - 1);
        let rank = Rank::try_from(rank).map_err(CardError::InvalidRank)?;
        let suit = Suit::try_from(suit).map_err(CardError::InvalidSuit)?;

        Ok(Self::new(rank, suit))
    }

    pub fn all_cards() -> Vec<Card> {
        let mut cards = Vec::new();
        for suit in Suit::iter() {
            for rank in Rank::iter() {
                cards.push(Card::new(rank, suit));
            }
        }
        cards
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

/// Parses a whitespace separated hand such as `"5S JD QH AC 4D"`.
///
/// Hand size and duplicate cards are not checked here.
pub fn parse_hand(s: &str) -> Result<Vec<Card>, CardError> {
    let cards = s
        .split_whitespace()
        .map(Card::from_string)
        .collect::<Result<Vec<_>, _>>()?;

    if cards.is_empty() {
        return Err(CardError::EmptyHand);
    }

    Ok(cards)
}

pub fn format_hand(cards: &[Card]) -> String {
    cards
        .iter()
        .map(Card::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_rank_ordering() {
        assert!(Rank::Ace > Rank::King);
        assert!(Rank::Three > Rank::Two);
        assert_eq!(Rank::Two.value(), 2);
        assert_eq!(Rank::Ace.value(), 14);
    }

    #[rstest]
    #[case(Rank::Two, "2")]
    #[case(Rank::Nine, "9")]
    #[case(Rank::Ten, "10")]
    #[case(Rank::Jack, "J")]
    #[case(Rank::Queen, "Q")]
    #[case(Rank::King, "K")]
    #[case(Rank::Ace, "A")]
    fn test_rank_display(#[case] rank: Rank, #[case] expected: &str) {
        assert_eq!(rank.to_string(), expected);
    }

    #[test]
    fn test_rank_display_round_trips_every_rank() {
        for rank in Rank::iter() {
            assert_eq!(Rank::try_from(rank.to_string().as_str()), Ok(rank));
        }
    }

    #[test]
    fn test_rank_try_from() {
        assert_eq!(Rank::try_from("T"), Ok(Rank::Ten));
        assert_eq!(Rank::try_from("q"), Ok(Rank::Queen));

        // Test invalid ranks
        assert!(Rank::try_from("1").is_err());
        assert!(Rank::try_from("11").is_err());
        assert!(Rank::try_from("X").is_err());
        assert!(Rank::try_from("").is_err());
    }

    #[test]
    fn test_suit_try_from() {
        assert_eq!(Suit::try_from("H"), Ok(Suit::Hearts));
        assert_eq!(Suit::try_from("c"), Ok(Suit::Clubs));
        assert_eq!(Suit::try_from("D"), Ok(Suit::Diamonds));
        assert_eq!(Suit::try_from("S"), Ok(Suit::Spades));

        assert!(Suit::try_from("X").is_err());
        assert!(Suit::try_from("").is_err());
    }

    #[test]
    fn test_suit_name() {
        assert_eq!(Suit::Hearts.name(), "Heart");
        assert_eq!(Suit::Spades.name(), "Spade");
        assert_eq!(Suit::Diamonds.name(), "Diamond");
        assert_eq!(Suit::Clubs.name(), "Club");
    }

    #[test]
    fn test_card_from_string() {
        let king_hearts = Card::from_string("KH").unwrap();
        assert_eq!(king_hearts, Card::new(Rank::King, Suit::Hearts));

        let ten_spades = Card::from_string("10s").unwrap();
        assert_eq!(ten_spades, Card::new(Rank::Ten, Suit::Spades));

        assert_eq!(
            Card::from_string("ZH"),
            Err(CardError::InvalidRank("Z".to_string()))
        );
        assert_eq!(
            Card::from_string("KX"),
            Err(CardError::InvalidSuit("X".to_string()))
        );
        assert_eq!(
            Card::from_string("K"),
            Err(CardError::InvalidCard("K".to_string()))
        );
        assert!(Card::from_string("10HS").is_err());
    }

    #[test]
    fn test_card_display() {
        assert_eq!(Card::new(Rank::Ten, Suit::Hearts).to_string(), "10H");
        assert_eq!(Card::new(Rank::Ace, Suit::Clubs).to_string(), "AC");
    }

    #[test]
    fn test_all_cards_are_distinct() {
        let cards = Card::all_cards();
        assert_eq!(cards.len(), 52);

        let unique: std::collections::HashSet<_> = cards.iter().collect();
        assert_eq!(unique.len(), 52);
    }

    #[test]
    fn test_parse_hand() {
        let hand = parse_hand("5S JD QH AC 4D").unwrap();
        assert_eq!(
            hand,
            vec![
                Card::new(Rank::Five, Suit::Spades),
                Card::new(Rank::Jack, Suit::Diamonds),
                Card::new(Rank::Queen, Suit::Hearts),
                Card::new(Rank::Ace, Suit::Clubs),
                Card::new(Rank::Four, Suit::Diamonds),
            ]
        );
        assert_eq!(format_hand(&hand), "5S JD QH AC 4D");

        assert_eq!(parse_hand("   "), Err(CardError::EmptyHand));
        assert!(parse_hand("5S JD QX").is_err());
    }
}
