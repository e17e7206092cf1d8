//! A player's five-card hand.

use rand::Rng;
use std::fmt;

use super::card::Card;
use super::deck::Deck;
use crate::error::{OddsError, Result};
use crate::eval::{classify, HandType};

/// Cards held by a player, built up one card at a time.
///
/// A hand can only be classified once it holds exactly five cards.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    /// Number of cards in a complete hand.
    pub const SIZE: usize = 5;

    /// Create an empty hand.
    pub fn new() -> Self {
        Self {
            cards: Vec::with_capacity(Self::SIZE),
        }
    }

    /// Create a hand from dealt cards.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Deal five cards from a freshly shuffled deck.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Deck::random_hand(rng)
    }

    /// Parse a hand from space separated short notation, e.g. "Ah Kh Qh Jh Th".
    pub fn parse(s: &str) -> Option<Self> {
        s.split_whitespace()
            .map(Card::parse)
            .collect::<Option<Vec<_>>>()
            .map(Self::from_cards)
    }

    /// Append a card.
    pub fn add(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Number of cards held.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True before any card is added.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in the order they were added (or sorted).
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Sort cards by ascending rank.
    pub fn sort(&mut self) {
        self.cards.sort_by_key(|c| c.rank());
    }

    /// Classify the hand.
    ///
    /// Fails with [`OddsError::InvalidHandSize`] unless exactly five cards are held.
    pub fn hand_type(&self) -> Result<HandType> {
        let five: &[Card; 5] = self
            .cards
            .as_slice()
            .try_into()
            .map_err(|_| OddsError::InvalidHandSize(self.cards.len()))?;
        Ok(classify(five))
    }
}

impl From<[Card; 5]> for Hand {
    fn from(cards: [Card; 5]) -> Self {
        Self::from_cards(cards.to_vec())
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", card.name())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.cards)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_append_and_classify() {
        let mut hand = Hand::new();
        for rank in [Rank::Three, Rank::Four, Rank::Five, Rank::Six, Rank::Seven] {
            hand.add(Card::new(rank, Suit::Spades));
        }
        assert_eq!(hand.len(), 5);
        assert_eq!(hand.hand_type(), Ok(HandType::StraightFlush));
    }

    #[test]
    fn test_wrong_size_fails_fast() {
        let mut hand = Hand::parse("Ah Kh Qh Jh").unwrap();
        assert_eq!(hand.hand_type(), Err(OddsError::InvalidHandSize(4)));

        hand.add(Card::parse("Th").unwrap());
        hand.add(Card::parse("9h").unwrap());
        assert_eq!(hand.hand_type(), Err(OddsError::InvalidHandSize(6)));

        assert_eq!(Hand::new().hand_type(), Err(OddsError::InvalidHandSize(0)));
    }

    #[test]
    fn test_classification_is_idempotent() {
        let hand = Hand::parse("9h 9d 2c 2s 7h").unwrap();
        let first = hand.hand_type().unwrap();
        let second = hand.hand_type().unwrap();
        assert_eq!(first, HandType::TwoPair);
        assert_eq!(first, second);
    }

    #[test]
    fn test_random_hands_classify() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let hand = Hand::random(&mut rng);
            assert_eq!(hand.len(), Hand::SIZE);
            assert!(hand.hand_type().is_ok());
        }
    }

    #[test]
    fn test_sort_and_display() {
        let mut hand = Hand::parse("Kh 2c Th").unwrap();
        hand.sort();
        assert_eq!(hand.to_string(), "2 of Clubs, 10 of Hearts, K of Hearts");
        assert!(Hand::parse("Kh Zz").is_none());
    }
}
