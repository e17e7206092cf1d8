//! # Poker Odds
//!
//! Estimates how often each five-card poker category is dealt by sampling
//! random hands in parallel, and compares the estimates against the
//! closed-form probabilities.
//!
//! ## Features
//!
//! - **Compact cards**: rank and suit packed into one byte
//! - **Exclusive classification**: every five-card hand maps to exactly one
//!   of ten categories
//! - **Lock-free aggregation**: workers merge their counts through a
//!   compare-and-swap on a shared snapshot
//! - **Reference table**: theoretical percentages for every category
//!
//! ## Quick Start
//!
//! ```
//! use poker_odds::{calculate_all_probabilities, theoretical_percentage, HandType};
//!
//! let table = calculate_all_probabilities(20_000).unwrap();
//! for t in HandType::ALL {
//!     let simulated = table.probability(t) * 100.0;
//!     println!("{:<16} {:>8.4}% (theory {:.4}%)", t, simulated, theoretical_percentage(t));
//! }
//! ```
//!
//! ## Modules
//!
//! - [`cards`]: cards, decks and hands
//! - [`eval`]: hand categories and the classifier
//! - [`sim`]: the concurrent sampler and its tallies
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                    Simulator (sim)                       │
//! │  partition → N workers → local TallyTable → SharedTally  │
//! └──────────────────────────────────────────────────────────┘
//!            │ each worker owns                 │
//!            ▼                                  ▼
//!     ┌─────────────┐                    ┌─────────────┐
//!     │ Deck + RNG  │ ── deal five ───▶  │  classify   │
//!     │  (cards)    │                    │   (eval)    │
//!     └─────────────┘                    └─────────────┘
//! ```

#![warn(missing_docs)]

/// Cards, decks and hands.
pub mod cards;

/// Error type and result alias.
pub mod error;

/// Hand categories, classification and reference probabilities.
pub mod eval;

/// Concurrent sampling engine.
pub mod sim;

// Re-export commonly used types at crate root for convenience
pub use cards::{Card, Deck, Hand, Rank, Suit};
pub use error::{OddsError, Result};
pub use eval::{classify, theoretical_percentage, HandType};
pub use sim::{
    calculate_all_probabilities, calculate_hand_type_probability, SimulationConfig, Simulator,
    TallyTable,
};
