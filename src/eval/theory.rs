//! Closed-form five-card probabilities.
//!
//! Values are percentages (0-100) over all 2,598,960 five-card hands. They
//! are used for comparison against simulated results only.

use super::hand_type::HandType;

/// Distinct five-card hands in each category, indexed by [`HandType::index`].
pub const COMBINATIONS: [u64; HandType::COUNT] = [
    4, 36, 624, 3_744, 5_108, 10_200, 54_912, 123_552, 1_098_240, 1_302_540,
];

/// Total number of distinct five-card hands, C(52, 5).
pub const TOTAL_HANDS: u64 = 2_598_960;

/// Theoretical probability of a category as a percentage.
pub fn theoretical_percentage(hand_type: HandType) -> f64 {
    match hand_type {
        HandType::RoyalFlush => 0.000154,
        HandType::StraightFlush => 0.00139,
        HandType::FourOfAKind => 0.02401,
        HandType::FullHouse => 0.1441,
        HandType::Flush => 0.1965,
        HandType::Straight => 0.3925,
        HandType::ThreeOfAKind => 2.1128,
        HandType::TwoPair => 4.7539,
        HandType::OnePair => 42.2569,
        HandType::HighCard => 50.1177,
    }
}

/// Exact probability of a category (0.0-1.0) from the combination counts.
pub fn exact_probability(hand_type: HandType) -> f64 {
    COMBINATIONS[hand_type.index()] as f64 / TOTAL_HANDS as f64
}
