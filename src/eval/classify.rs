//! Five-card hand classification.
//!
//! A hand is reduced once to a [`RankProfile`] (rank histogram, rank bitmask
//! and a same-suit flag) and then run through an ordered cascade of
//! predicates. The first predicate that matches decides the category, which
//! keeps the ten categories mutually exclusive.
//!
//! Flush and straight predicates take an `exclusive` flag. With `exclusive`
//! set, a flush that is also a straight is not reported as a flush (and vice
//! versa); with it cleared the raw pattern is reported. The straight flush
//! predicates probe the raw patterns.

use super::hand_type::HandType;
use crate::cards::Card;

/// Rank bitmask of the wheel, A-2-3-4-5.
const WHEEL: u16 = 0b1_0000_0000_1111;

/// Rank bitmask of 10-J-Q-K-A.
const BROADWAY: u16 = 0b1_1111_0000_0000;

/// Precomputed rank and suit facts about five cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankProfile {
    /// Number of cards of each rank.
    counts: [u8; 13],
    /// Bit `r` set when rank `r` is present.
    present: u16,
    /// All five cards share one suit.
    suited: bool,
}

impl RankProfile {
    /// Profile five cards.
    pub fn new(cards: &[Card; 5]) -> Self {
        let mut counts = [0u8; 13];
        let mut present = 0u16;
        for card in cards {
            counts[card.rank_index()] += 1;
            present |= 1 << card.rank_index();
        }
        let suit = cards[0].suit_index();
        let suited = cards.iter().all(|c| c.suit_index() == suit);

        Self {
            counts,
            present,
            suited,
        }
    }

    /// How many ranks appear exactly `n` times.
    #[inline]
    fn ranks_with(&self, n: u8) -> usize {
        self.counts.iter().filter(|&&c| c == n).count()
    }

    /// Some rank appears three or more times.
    #[inline]
    fn has_trips_or_better(&self) -> bool {
        self.counts.iter().any(|&c| c >= 3)
    }

    /// Five consecutive ranks, or the wheel with the ace played low.
    fn is_run(&self) -> bool {
        if self.present == WHEEL {
            return true;
        }
        let min = self.present.trailing_zeros();
        let max = 15 - self.present.leading_zeros();
        // span of exactly four with every rank in between occupied
        max - min == 4 && self.present >> min == 0b1_1111
    }

    /// Suited 10-J-Q-K-A.
    pub fn has_royal_flush(&self) -> bool {
        self.has_flush(false) && self.present == BROADWAY
    }

    /// Raw straight and raw flush together. Royal flushes also match;
    /// the cascade tests them first.
    pub fn has_straight_flush(&self) -> bool {
        self.has_flush(false) && self.has_straight(false)
    }

    /// One rank four times.
    pub fn has_four_of_a_kind(&self) -> bool {
        self.ranks_with(4) == 1
    }

    /// Exactly one rank three times and a different rank exactly twice.
    pub fn has_full_house(&self) -> bool {
        self.ranks_with(3) == 1 && self.ranks_with(2) == 1
    }

    /// All one suit. With `exclusive`, runs are excluded.
    pub fn has_flush(&self, exclusive: bool) -> bool {
        self.suited && (!exclusive || !self.has_straight(false))
    }

    /// Five consecutive ranks, ace high or low. With `exclusive`,
    /// suited runs are excluded.
    pub fn has_straight(&self, exclusive: bool) -> bool {
        self.is_run() && (!exclusive || !self.has_flush(false))
    }

    /// One rank three times, nothing paired alongside it.
    pub fn has_three_of_a_kind(&self) -> bool {
        self.ranks_with(3) == 1 && self.ranks_with(2) == 0 && self.ranks_with(4) == 0
    }

    /// Two ranks twice each and no trips.
    pub fn has_two_pair(&self) -> bool {
        self.ranks_with(2) == 2 && !self.has_trips_or_better()
    }

    /// Exactly one rank twice and no trips.
    pub fn has_one_pair(&self) -> bool {
        self.ranks_with(2) == 1 && !self.has_trips_or_better()
    }

    /// Run the cascade.
    pub fn hand_type(&self) -> HandType {
        if self.has_royal_flush() {
            HandType::RoyalFlush
        } else if self.has_straight_flush() {
            HandType::StraightFlush
        } else if self.has_four_of_a_kind() {
            HandType::FourOfAKind
        } else if self.has_full_house() {
            HandType::FullHouse
        } else if self.has_flush(true) {
            HandType::Flush
        } else if self.has_straight(true) {
            HandType::Straight
        } else if self.has_three_of_a_kind() {
            HandType::ThreeOfAKind
        } else if self.has_two_pair() {
            HandType::TwoPair
        } else if self.has_one_pair() {
            HandType::OnePair
        } else {
            HandType::HighCard
        }
    }
}

/// Classify five cards into exactly one category.
#[inline]
pub fn classify(cards: &[Card; 5]) -> HandType {
    RankProfile::new(cards).hand_type()
}
