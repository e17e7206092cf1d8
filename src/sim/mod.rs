//! Monte Carlo sampling of hand categories.
//!
//! # Overview
//!
//! A run deals `hands` random five-card hands across a fixed set of worker
//! threads and counts how many land in each category:
//! 1. The sample count is partitioned across workers (last takes the remainder)
//! 2. Each worker resets and shuffles its own deck every `reshuffle_interval`
//!    hands, deals five cards and classifies them
//! 3. Local counts are folded into one shared aggregate with compare-and-swap
//!
//! # Example
//!
//! ```
//! use poker_odds::eval::HandType;
//! use poker_odds::sim::calculate_all_probabilities;
//!
//! let table = calculate_all_probabilities(10_000).unwrap();
//! assert_eq!(table.total(), 10_000);
//! let p = table.probability(HandType::HighCard);
//! assert!(p > 0.0 && p < 1.0);
//! ```

pub mod config;
pub mod partition;
pub mod report;
pub mod simulator;
pub mod tally;

pub use config::{SimulationConfig, SimulationStats, DEFAULT_HANDS, MAX_THREADS};
pub use partition::partition;
pub use report::{Report, ReportRow};
pub use simulator::Simulator;
pub use tally::{SharedTally, TallyTable};

use crate::error::Result;
use crate::eval::HandType;

/// Sample `hands` hands on every core and count all categories.
pub fn calculate_all_probabilities(hands: u64) -> Result<TallyTable> {
    let config = SimulationConfig::new(hands).with_progress(false);
    Simulator::new(config)?.run_all()
}

/// Sample `hands` hands on every core and return the fraction (0.0-1.0)
/// classified as `hand_type`.
pub fn calculate_hand_type_probability(hand_type: HandType, hands: u64) -> Result<f64> {
    let config = SimulationConfig::new(hands).with_progress(false);
    Simulator::new(config)?.probability(hand_type)
}
