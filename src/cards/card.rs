//! Card representation.
//!
//! A card packs its rank and suit into a single byte as `rank << 2 | suit`,
//! so both halves come back out with a shift and a mask:
//! - `Rank`: Two through Ace (0-12)
//! - `Suit`: Hearts, Diamonds, Clubs, Spades (0-3)
//! - `Card`: the packed (rank, suit) pair

use std::fmt;

/// Rank characters for display, indexed by rank value.
const RANK_CHARS: [char; 13] = ['2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A'];

/// Suit characters for display, indexed by suit value.
const SUIT_CHARS: [char; 4] = ['h', 'd', 'c', 's'];

/// Face value of a card, Two (lowest) to Ace (highest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Rank {
    /// Deuce (0).
    Two = 0,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
    /// Ace, always high (12).
    Ace,
}

impl Rank {
    /// All ranks in ascending order.
    pub const ALL: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    /// Rank from its value (0-12).
    #[inline]
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Value of the rank (0-12).
    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Single character used in short card notation.
    pub fn symbol(self) -> char {
        RANK_CHARS[self as usize]
    }

    /// Label used in long card names ("10", "J", ...).
    pub fn label(self) -> &'static str {
        match self {
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
            Rank::Ace => "A",
        }
    }
}

/// Suit of a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Suit {
    /// Hearts (0), short symbol `h`.
    Hearts = 0,
    /// Diamonds (1), `d`.
    Diamonds,
    /// Clubs (2), `c`.
    Clubs,
    /// Spades (3), `s`.
    Spades,
}

impl Suit {
    /// All suits in encoding order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Clubs, Suit::Spades];

    /// Suit from its value (0-3).
    #[inline]
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Value of the suit (0-3).
    #[inline]
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Single character used in short card notation.
    pub fn symbol(self) -> char {
        SUIT_CHARS[self as usize]
    }

    /// Full suit name.
    pub fn name(self) -> &'static str {
        match self {
            Suit::Hearts => "Hearts",
            Suit::Diamonds => "Diamonds",
            Suit::Clubs => "Clubs",
            Suit::Spades => "Spades",
        }
    }
}

/// A single playing card.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    /// Packed value: rank << 2 | suit (0-51).
    id: u8,
}

impl Card {
    /// Number of distinct cards.
    pub const COUNT: usize = 52;

    /// Create a card from a rank and suit.
    #[inline]
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self {
            id: (rank.index() << 2) | suit.index(),
        }
    }

    /// Create a card from its packed value (0-51).
    #[inline]
    pub fn from_id(id: u8) -> Option<Self> {
        (usize::from(id) < Self::COUNT).then_some(Self { id })
    }

    /// Parse a card from short notation like "Ah", "Td" or "10d".
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        let (split, suit_char) = s.char_indices().last()?;

        let rank = match s[..split].to_ascii_uppercase().as_str() {
            "10" => Rank::Ten,
            r if r.len() == 1 => {
                let c = r.chars().next()?;
                Rank::from_index(RANK_CHARS.iter().position(|&x| x == c)? as u8)?
            }
            _ => return None,
        };
        let c = suit_char.to_ascii_lowercase();
        let suit = Suit::from_index(SUIT_CHARS.iter().position(|&x| x == c)? as u8)?;

        Some(Self::new(rank, suit))
    }

    /// Packed value (0-51).
    #[inline]
    pub fn id(&self) -> u8 {
        self.id
    }

    /// Rank value (0-12), the high bits of the packed value.
    #[inline]
    pub fn rank_index(&self) -> usize {
        usize::from(self.id >> 2)
    }

    /// Suit value (0-3), the low two bits of the packed value.
    #[inline]
    pub fn suit_index(&self) -> usize {
        usize::from(self.id & 0x3)
    }

    /// Decoded rank.
    #[inline]
    pub fn rank(&self) -> Rank {
        Rank::ALL[self.rank_index()]
    }

    /// Decoded suit.
    #[inline]
    pub fn suit(&self) -> Suit {
        Suit::ALL[self.suit_index()]
    }

    /// Long form name, e.g. "10 of Hearts".
    pub fn name(&self) -> String {
        format!("{} of {}", self.rank().label(), self.suit().name())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank().symbol(), self.suit().symbol())
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
