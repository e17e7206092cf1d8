//! Error type shared by the whole crate.

use thiserror::Error;

/// Errors raised by card handling, classification and simulation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OddsError {
    /// A simulation was requested with no hands to sample.
    #[error("number of hands must be positive, got {0}")]
    InvalidSampleCount(u64),

    /// A hand type selector did not match any category.
    #[error("invalid hand type: {0}")]
    UnknownHandType(String),

    /// Classification needs exactly five cards.
    #[error("a hand must hold exactly 5 cards, got {0}")]
    InvalidHandSize(usize),

    /// More cards were requested than the deck still holds.
    #[error("cannot deal {requested} cards, only {remaining} remaining")]
    DeckExhausted {
        /// Cards asked for.
        requested: usize,
        /// Cards left in the deck.
        remaining: usize,
    },

    /// Simulation configuration failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Reading a configuration file failed.
    #[error("failed to read configuration: {0}")]
    Io(String),

    /// A configuration file was not valid JSON for the expected schema.
    #[error("failed to parse configuration: {0}")]
    Parse(String),

    /// The operating system refused to start a worker thread.
    #[error("failed to spawn worker thread: {0}")]
    ThreadSpawn(String),

    /// A worker thread panicked before handing back its tally.
    #[error("simulation worker panicked")]
    WorkerPanicked,
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, OddsError>;
