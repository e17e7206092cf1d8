//! Configuration options for the sampler.
//!
//! This module provides the run configuration and the statistics recorded
//! for a finished run.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{OddsError, Result};

/// Most hands a single shuffle may serve: 10 hands × 5 cards fits in 52.
pub const MAX_RESHUFFLE_INTERVAL: usize = 10;

/// Worker count used when the core count cannot be detected.
pub const FALLBACK_THREADS: usize = 4;

/// Largest accepted explicit worker count.
pub const MAX_THREADS: usize = 1024;

/// Hands sampled when neither the caller nor a config file sets `hands`.
pub const DEFAULT_HANDS: u64 = 100_000_000;

/// Configuration for a sampling run.
///
/// # Example
/// ```
/// use poker_odds::sim::SimulationConfig;
///
/// let config = SimulationConfig::new(50_000).with_threads(2).with_seed(7);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.reshuffle_interval, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Total number of hands to deal and classify.
    ///
    /// Defaults to [`DEFAULT_HANDS`] when omitted from a config file.
    pub hands: u64,

    /// Number of worker threads, at most [`MAX_THREADS`].
    ///
    /// Set to `None` to use every available core. Workers beyond the hand
    /// count are never started.
    pub threads: Option<usize>,

    /// Hands dealt from one shuffled deck before it is reset and reshuffled.
    ///
    /// The default of 10 amortises shuffling over ten hands, so hands
    /// within a block are dealt without replacement from the same deck.
    /// Set to 1 for a freshly shuffled deck on every hand.
    pub reshuffle_interval: usize,

    /// Show a progress bar driven by the first worker.
    pub progress: bool,

    /// Base seed for reproducible runs.
    ///
    /// Worker `i` seeds its generator with `seed + i`. If `None`, each
    /// worker seeds from operating system entropy.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            hands: DEFAULT_HANDS,
            threads: None,
            reshuffle_interval: MAX_RESHUFFLE_INTERVAL,
            progress: true,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Create a configuration for `hands` samples with default settings.
    pub fn new(hands: u64) -> Self {
        Self {
            hands,
            ..Default::default()
        }
    }

    /// Load a configuration from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            fs::read_to_string(path.as_ref()).map_err(|e| OddsError::Io(e.to_string()))?;
        Self::from_json_str(&content)
    }

    /// Parse a configuration from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| OddsError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Builder method: set the number of hands.
    pub fn with_hands(mut self, hands: u64) -> Self {
        self.hands = hands;
        self
    }

    /// Builder method: set number of threads.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Builder method: set the reshuffle interval.
    pub fn with_reshuffle_interval(mut self, interval: usize) -> Self {
        self.reshuffle_interval = interval;
        self
    }

    /// Builder method: enable or disable the progress bar.
    pub fn with_progress(mut self, enable: bool) -> Self {
        self.progress = enable;
        self
    }

    /// Builder method: set random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Worker count for this run.
    pub fn worker_count(&self) -> usize {
        match self.threads {
            Some(n) => n,
            None => match num_cpus::get() {
                0 => FALLBACK_THREADS,
                n => n,
            },
        }
    }

    /// Validate the configuration and return any errors.
    pub fn validate(&self) -> Result<()> {
        if self.hands == 0 {
            return Err(OddsError::InvalidSampleCount(self.hands));
        }

        match self.threads {
            Some(0) => {
                return Err(OddsError::InvalidConfig(
                    "thread count must be at least 1".to_string(),
                ))
            }
            Some(n) if n > MAX_THREADS => {
                return Err(OddsError::InvalidConfig(format!(
                    "thread count {} exceeds the maximum of {}",
                    n, MAX_THREADS
                )))
            }
            _ => {}
        }

        if !(1..=MAX_RESHUFFLE_INTERVAL).contains(&self.reshuffle_interval) {
            return Err(OddsError::InvalidConfig(format!(
                "reshuffle interval {} is out of range [1, {}]",
                self.reshuffle_interval, MAX_RESHUFFLE_INTERVAL
            )));
        }

        Ok(())
    }
}

/// Statistics recorded for a finished run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationStats {
    /// Hands dealt and classified.
    pub hands: u64,

    /// Worker threads used.
    pub threads: usize,

    /// Wall time of the run (in seconds).
    pub elapsed_seconds: f64,

    /// Hands per second.
    pub hands_per_second: f64,
}

impl SimulationStats {
    /// Create new empty stats.
    pub fn new() -> Self {
        Self::default()
    }

    /// Update hands per second based on elapsed time.
    pub fn update_rate(&mut self) {
        if self.elapsed_seconds > 0.0 {
            self.hands_per_second = self.hands as f64 / self.elapsed_seconds;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimulationConfig::default();
        assert_eq!(config.hands, DEFAULT_HANDS);
        assert_eq!(SimulationConfig::from_json_str("{}").unwrap(), config);
        assert_eq!(config.reshuffle_interval, 10);
        assert!(config.progress);
        assert!(config.validate().is_ok());
        assert!(config.worker_count() >= 1);
    }

    #[test]
    fn test_validation() {
        assert_eq!(
            SimulationConfig::new(0).validate(),
            Err(OddsError::InvalidSampleCount(0))
        );
        assert!(matches!(
            SimulationConfig::new(10).with_threads(0).validate(),
            Err(OddsError::InvalidConfig(_))
        ));
        assert!(SimulationConfig::new(10).with_threads(MAX_THREADS).validate().is_ok());
        assert!(matches!(
            SimulationConfig::new(10).with_threads(MAX_THREADS + 1).validate(),
            Err(OddsError::InvalidConfig(_))
        ));
        assert!(SimulationConfig::new(10)
            .with_reshuffle_interval(0)
            .validate()
            .is_err());
        assert!(SimulationConfig::new(10)
            .with_reshuffle_interval(11)
            .validate()
            .is_err());
        assert!(SimulationConfig::new(10)
            .with_reshuffle_interval(1)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_huge_thread_count_rejected() {
        let config = SimulationConfig::new(1 << 40).with_threads(usize::MAX);
        assert!(matches!(config.validate(), Err(OddsError::InvalidConfig(_))));
        assert!(matches!(
            SimulationConfig::from_json_str(r#"{"hands": 1000, "threads": 4096}"#),
            Err(OddsError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_json_roundtrip_and_defaults() {
        let config = SimulationConfig::from_json_str(r#"{"hands": 5000, "threads": 3}"#).unwrap();
        assert_eq!(config.hands, 5000);
        assert_eq!(config.threads, Some(3));
        assert_eq!(config.reshuffle_interval, 10);
        assert!(config.seed.is_none());

        assert!(matches!(
            SimulationConfig::from_json_str(r#"{"hands": 0}"#),
            Err(OddsError::InvalidSampleCount(0))
        ));
        assert!(matches!(
            SimulationConfig::from_json_str("not json"),
            Err(OddsError::Parse(_))
        ));
        assert!(matches!(
            SimulationConfig::from_json_file("does/not/exist.json"),
            Err(OddsError::Io(_))
        ));
    }

    #[test]
    fn test_stats_rate() {
        let mut stats = SimulationStats {
            hands: 1000,
            elapsed_seconds: 2.0,
            ..Default::default()
        };
        stats.update_rate();
        assert_eq!(stats.hands_per_second, 500.0);

        let mut idle = SimulationStats::new();
        idle.update_rate();
        assert_eq!(idle.hands_per_second, 0.0);
    }
}
