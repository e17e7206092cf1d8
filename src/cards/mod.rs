//! Cards, decks and hands.
//!
//! - [`card`]: packed (rank, suit) encoding
//! - [`deck`]: a shrinking, shuffleable 52-card deck
//! - [`hand`]: an append-only hand that can be classified once full

pub mod card;
pub mod deck;
pub mod hand;

pub use card::{Card, Rank, Suit};
pub use deck::Deck;
pub use hand::Hand;
