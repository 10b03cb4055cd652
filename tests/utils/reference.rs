use pokerhand::{Card, HandCategory, Rank};

/// Categorizes a hand of five distinct cards from rank counts alone.
pub fn reference_category(hand: &[Card]) -> HandCategory {
    let mut counts = [0usize; 15];
    for card in hand {
        counts[card.rank.value() as usize] += 1;
    }
    let mut groups: Vec<usize> = counts.iter().copied().filter(|&n| n > 0).collect();
    groups.sort_unstable_by(|a, b| b.cmp(a));

    let is_flush = hand.iter().all(|card| card.suit == hand[0].suit);
    let mut values: Vec<u8> = hand.iter().map(|card| card.rank.value()).collect();
    values.sort_unstable();
    let is_wheel = values == [2u8, 3, 4, 5, 14];
    let is_straight = groups.len() == 5 && (values[4] - values[0] == 4 || is_wheel);
    let has = |rank: Rank| hand.iter().any(|card| card.rank == rank);

    match (is_straight, is_flush, groups.as_slice()) {
        (true, true, _) if has(Rank::King) && has(Rank::Ace) => HandCategory::RoyalFlush,
        (true, true, _) => HandCategory::StraightFlush,
        (_, _, [4, ..]) => HandCategory::FourOfAKind,
        (_, _, [3, 2]) => HandCategory::FullHouse,
        (_, true, _) => HandCategory::Flush,
        (true, _, _) => HandCategory::Straight,
        (_, _, [3, ..]) => HandCategory::ThreeOfAKind,
        (_, _, [2, 2, ..]) => HandCategory::TwoPair,
        (_, _, [2, ..]) => HandCategory::Pair,
        _ => HandCategory::HighCard,
    }
}
