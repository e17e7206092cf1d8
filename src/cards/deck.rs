//! A shrinking 52-card deck.
//!
//! Cards are dealt from the back of the sequence. A deck is owned by one
//! worker at a time and is reset rather than rebuilt between rounds.

use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

use super::card::Card;
use super::hand::Hand;
use crate::error::{OddsError, Result};

/// A deck of playing cards.
#[derive(Clone)]
pub struct Deck {
    /// Remaining cards; the next card dealt is the last element.
    cards: Vec<Card>,
}

impl Deck {
    /// Create a full deck in standard order.
    pub fn new() -> Self {
        let mut deck = Self {
            cards: Vec::with_capacity(Card::COUNT),
        };
        deck.reset();
        deck
    }

    /// Restore all 52 cards in standard order.
    ///
    /// The order is identical after every reset: ascending packed value.
    pub fn reset(&mut self) {
        self.cards.clear();
        self.cards
            .extend((0..Card::COUNT as u8).filter_map(Card::from_id));
    }

    /// Shuffle the remaining cards into a uniformly random order.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Deal the next card, or `None` if the deck is empty.
    #[inline]
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deal `n` cards in deal order.
    ///
    /// Fails without dealing anything if fewer than `n` cards remain.
    pub fn deal_n(&mut self, n: usize) -> Result<Vec<Card>> {
        let remaining = self.remaining();
        if n > remaining {
            return Err(OddsError::DeckExhausted {
                requested: n,
                remaining,
            });
        }
        Ok(self.cards.drain(remaining - n..).rev().collect())
    }

    /// Deal exactly five cards into a fixed-size array.
    #[inline]
    pub fn deal_five(&mut self) -> Result<[Card; 5]> {
        let remaining = self.remaining();
        if remaining < 5 {
            return Err(OddsError::DeckExhausted {
                requested: 5,
                remaining,
            });
        }
        let mut hand = [self.cards[remaining - 1]; 5];
        for (slot, card) in hand.iter_mut().zip(self.cards.drain(remaining - 5..).rev()) {
            *slot = card;
        }
        Ok(hand)
    }

    /// Deal one hand from a freshly shuffled full deck.
    pub fn random_hand<R: Rng + ?Sized>(rng: &mut R) -> Hand {
        let mut deck = Self::new();
        deck.shuffle(rng);
        let top = deck.cards.split_off(Card::COUNT - Hand::SIZE);
        Hand::from_cards(top.into_iter().rev().collect())
    }

    /// Number of cards left to deal.
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Check if every card has been dealt.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Remaining cards, next-to-deal last.
    pub fn remaining_cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Deck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Deck({} remaining)", self.remaining())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_new_deck_is_full_and_unique() {
        let deck = Deck::new();
        assert_eq!(deck.remaining(), 52);
        let mut ids: Vec<u8> = deck.remaining_cards().iter().map(|c| c.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 52);
    }

    #[test]
    fn test_deal_shrinks_from_back() {
        let mut deck = Deck::new();
        let last = *deck.remaining_cards().last().unwrap();
        assert_eq!(deck.deal(), Some(last));
        assert_eq!(deck.remaining(), 51);
    }

    #[test]
    fn test_deal_n_preserves_deal_order() {
        let mut a = Deck::new();
        let mut b = Deck::new();
        let batch = a.deal_n(5).unwrap();
        let single: Vec<Card> = (0..5).map(|_| b.deal().unwrap()).collect();
        assert_eq!(batch, single);

        let mut c = Deck::new();
        assert_eq!(c.deal_five().unwrap().to_vec(), single);
    }

    #[test]
    fn test_exhaustion() {
        let mut deck = Deck::new();
        let all = deck.deal_n(52).unwrap();
        assert_eq!(all.len(), 52);
        assert!(deck.is_empty());
        assert!(deck.deal().is_none());
        assert_eq!(
            deck.deal_n(1),
            Err(OddsError::DeckExhausted {
                requested: 1,
                remaining: 0
            })
        );

        let mut deck = Deck::new();
        deck.deal_n(50).unwrap();
        assert!(deck.deal_five().is_err());
        assert_eq!(deck.remaining(), 2);
    }

    #[test]
    fn test_reset_is_deterministic() {
        let mut rng = StdRng::seed_from_u64(7);
        let fresh = Deck::new();
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);
        deck.deal_n(17).unwrap();
        deck.reset();
        assert_eq!(deck.remaining_cards(), fresh.remaining_cards());
    }

    #[test]
    fn test_random_hand() {
        let mut rng = StdRng::seed_from_u64(11);
        let hand = Deck::random_hand(&mut rng);
        assert_eq!(hand.len(), Hand::SIZE);
        let mut ids: Vec<u8> = hand.cards().iter().map(|c| c.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), Hand::SIZE);
        assert!(hand.hand_type().is_ok());

        // same as shuffling a new deck and dealing five
        let mut rng = StdRng::seed_from_u64(11);
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);
        assert_eq!(hand.cards(), deck.deal_n(5).unwrap().as_slice());

        let other = Deck::random_hand(&mut StdRng::seed_from_u64(12));
        assert_ne!(hand.cards(), other.cards());
    }

    #[test]
    fn test_shuffle_keeps_cards() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut deck = Deck::new();
        deck.shuffle(&mut rng);
        assert_eq!(deck.remaining(), 52);
        assert_ne!(deck.remaining_cards(), Deck::new().remaining_cards());

        let mut ids: Vec<u8> = deck.remaining_cards().iter().map(|c| c.id()).collect();
        ids.sort_unstable();
        assert_eq!(ids, (0..52).collect::<Vec<u8>>());
    }
}
