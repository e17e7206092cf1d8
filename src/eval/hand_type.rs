//! Hand categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::OddsError;

/// The ten mutually exclusive five-card categories, rarest first.
///
/// The discriminant doubles as the category's slot in a
/// [`TallyTable`](crate::sim::TallyTable).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandType {
    /// Ten through Ace, all one suit.
    RoyalFlush = 0,
    /// Five consecutive ranks in one suit, royal excluded.
    StraightFlush,
    /// Four cards of one rank.
    FourOfAKind,
    /// Three of one rank and two of another.
    FullHouse,
    /// Five cards of one suit, not consecutive.
    Flush,
    /// Five consecutive ranks in mixed suits.
    Straight,
    /// Three cards of one rank, the others unpaired.
    ThreeOfAKind,
    /// Two distinct pairs.
    TwoPair,
    /// A single pair.
    OnePair,
    /// None of the above.
    HighCard,
}

impl HandType {
    /// Number of categories.
    pub const COUNT: usize = 10;

    /// Every category in precedence order.
    pub const ALL: [HandType; Self::COUNT] = [
        HandType::RoyalFlush,
        HandType::StraightFlush,
        HandType::FourOfAKind,
        HandType::FullHouse,
        HandType::Flush,
        HandType::Straight,
        HandType::ThreeOfAKind,
        HandType::TwoPair,
        HandType::OnePair,
        HandType::HighCard,
    ];

    /// Slot index (0-9).
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Category stored in slot `index`, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Get the category name.
    pub fn name(self) -> &'static str {
        match self {
            HandType::RoyalFlush => "Royal Flush",
            HandType::StraightFlush => "Straight Flush",
            HandType::FourOfAKind => "Four of a Kind",
            HandType::FullHouse => "Full House",
            HandType::Flush => "Flush",
            HandType::Straight => "Straight",
            HandType::ThreeOfAKind => "Three of a Kind",
            HandType::TwoPair => "Two Pair",
            HandType::OnePair => "One Pair",
            HandType::HighCard => "High Card",
        }
    }

    /// Short selector accepted on the command line.
    pub fn code(self) -> &'static str {
        match self {
            HandType::RoyalFlush => "rf",
            HandType::StraightFlush => "sf",
            HandType::FourOfAKind => "4k",
            HandType::FullHouse => "fh",
            HandType::Flush => "fl",
            HandType::Straight => "st",
            HandType::ThreeOfAKind => "3k",
            HandType::TwoPair => "2p",
            HandType::OnePair => "1p",
            HandType::HighCard => "hc",
        }
    }
}

impl FromStr for HandType {
    type Err = OddsError;

    /// Accepts the short code ("fh") or the name in any case, with or
    /// without separators ("Full House", "full_house", "fullhouse").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        Self::ALL
            .into_iter()
            .find(|t| {
                let name: String = t
                    .name()
                    .chars()
                    .filter(|c| c.is_ascii_alphanumeric())
                    .map(|c| c.to_ascii_lowercase())
                    .collect();
                key == t.code() || key == name
            })
            .ok_or_else(|| OddsError::UnknownHandType(s.to_string()))
    }
}

impl fmt::Display for HandType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
