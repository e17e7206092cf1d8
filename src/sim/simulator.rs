//! Concurrent Monte Carlo sampler.
//!
//! A run splits its sample count across a fixed set of scoped worker
//! threads. Each worker owns its deck, generator and local counts, and
//! repeatedly resets and shuffles the deck, deals five cards and classifies
//! them. When a worker finishes it folds its counts into the run's
//! [`SharedTally`]; the run joins every worker before reading the result.

use std::sync::atomic::{AtomicU64, Ordering};
use std::thread;
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::config::{SimulationConfig, SimulationStats};
use super::partition::partition;
use super::tally::{SharedTally, TallyTable};
use crate::cards::{Card, Deck};
use crate::error::{OddsError, Result};
use crate::eval::{classify, HandType};

/// Hands between progress bar updates.
const PROGRESS_INTERVAL: u64 = 10_000;

/// Sampler for five-card category frequencies.
///
/// # Example
/// ```
/// use poker_odds::sim::{SimulationConfig, Simulator};
///
/// let config = SimulationConfig::new(20_000).with_progress(false);
/// let mut simulator = Simulator::new(config).unwrap();
/// let table = simulator.run_all().unwrap();
/// assert_eq!(table.total(), 20_000);
/// ```
#[derive(Debug, Clone)]
pub struct Simulator {
    config: SimulationConfig,
    stats: SimulationStats,
}

impl Simulator {
    /// Create a sampler, rejecting invalid configurations up front.
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            stats: SimulationStats::new(),
        })
    }

    /// Deal and classify every configured hand, counting all categories.
    ///
    /// The returned table always sums to exactly the configured hand count.
    pub fn run_all(&mut self) -> Result<TallyTable> {
        let shared = SharedTally::new();
        self.run(|worker, hands, progress| {
            let mut local = TallyTable::new();
            worker.deal(hands, progress, |t| local.add(t))?;
            let retries = shared.merge(&local);
            log::debug!("worker {} merged {} hands ({} retries)", worker.id, hands, retries);
            Ok(())
        })?;
        Ok(shared.snapshot())
    }

    /// Deal and classify every configured hand, counting only `target`.
    pub fn run_single(&mut self, target: HandType) -> Result<u64> {
        let found = AtomicU64::new(0);
        self.run(|worker, hands, progress| {
            let mut local = 0u64;
            worker.deal(hands, progress, |t| {
                if t == target {
                    local += 1;
                }
            })?;
            found.fetch_add(local, Ordering::Relaxed);
            log::debug!("worker {} found {} in {} hands", worker.id, local, hands);
            Ok(())
        })?;
        Ok(found.into_inner())
    }

    /// Fraction (0.0-1.0) of configured hands that classify as `target`.
    pub fn probability(&mut self, target: HandType) -> Result<f64> {
        let found = self.run_single(target)?;
        Ok(found as f64 / self.config.hands as f64)
    }

    /// Spawn one worker per partition, run `job` on each and join them all.
    fn run<F>(&mut self, job: F) -> Result<()>
    where
        F: Fn(&mut Worker, u64, Option<&ProgressBar>) -> Result<()> + Sync,
    {
        let start_time = Instant::now();
        let chunks = partition(self.config.hands, self.config.worker_count());
        let progress = self.progress_bar(chunks[0]);

        log::info!(
            "simulating {} hands on {} workers",
            self.config.hands,
            chunks.len()
        );

        let results: Vec<Result<()>> = thread::scope(|s| {
            let mut handles = Vec::with_capacity(chunks.len());
            let mut spawn_error = None;
            for (id, &hands) in chunks.iter().enumerate() {
                let job = &job;
                let config = &self.config;
                // only the first worker reports progress
                let progress = (id == 0).then_some(&progress);
                let spawned = thread::Builder::new()
                    .name(format!("odds-worker-{}", id))
                    .spawn_scoped(s, move || {
                        let mut worker = Worker::new(id, config);
                        job(&mut worker, hands, progress)
                    });
                match spawned {
                    Ok(handle) => handles.push(handle),
                    Err(e) => {
                        spawn_error = Some(OddsError::ThreadSpawn(e.to_string()));
                        break;
                    }
                }
            }

            // workers that did start are still joined before reporting
            let joined = handles
                .into_iter()
                .map(|h| h.join().map_err(|_| OddsError::WorkerPanicked).and_then(|r| r));
            spawn_error.map(Err).into_iter().chain(joined).collect()
        });
        progress.finish_and_clear();

        results.into_iter().collect::<Result<Vec<()>>>()?;

        self.stats.hands = self.config.hands;
        self.stats.threads = chunks.len();
        self.stats.elapsed_seconds = start_time.elapsed().as_secs_f64();
        self.stats.update_rate();

        log::info!(
            "simulated {} hands in {:.2}s ({:.0} hands/s)",
            self.stats.hands,
            self.stats.elapsed_seconds,
            self.stats.hands_per_second
        );
        Ok(())
    }

    fn progress_bar(&self, len: u64) -> ProgressBar {
        if !self.config.progress {
            return ProgressBar::hidden();
        }
        let bar = ProgressBar::new(len);
        if let Ok(style) = ProgressStyle::with_template("[{bar:70}] {percent:>3}% {eta}") {
            bar.set_style(style.progress_chars("=> "));
        }
        bar
    }

    /// Get the configuration.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Statistics of the most recent run.
    pub fn stats(&self) -> &SimulationStats {
        &self.stats
    }
}

/// Thread-private sampling state.
struct Worker {
    id: usize,
    deck: Deck,
    rng: StdRng,
    reshuffle_interval: u64,
}

impl Worker {
    fn new(id: usize, config: &SimulationConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(id as u64)),
            None => StdRng::from_entropy(),
        };
        Self {
            id,
            deck: Deck::new(),
            rng,
            reshuffle_interval: config.reshuffle_interval as u64,
        }
    }

    /// Deal hand `i` of this worker's share, reshuffling on the cadence.
    #[inline]
    fn next_hand(&mut self, i: u64) -> Result<[Card; 5]> {
        if i % self.reshuffle_interval == 0 {
            self.deck.reset();
            self.deck.shuffle(&mut self.rng);
        }
        self.deck.deal_five()
    }

    /// Deal and classify `hands` hands, passing each category to `record`.
    fn deal<F>(&mut self, hands: u64, progress: Option<&ProgressBar>, mut record: F) -> Result<()>
    where
        F: FnMut(HandType),
    {
        for i in 0..hands {
            let cards = self.next_hand(i)?;
            record(classify(&cards));

            if let Some(bar) = progress {
                if i % PROGRESS_INTERVAL == 0 {
                    bar.set_position(i);
                }
            }
        }
        Ok(())
    }
}
