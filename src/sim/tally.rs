//! Per-category hand counts.
//!
//! [`TallyTable`] is a plain value owned by one worker. [`SharedTally`] is
//! the single aggregate all workers contribute to: it holds a pointer to an
//! immutable table, and a worker merges by building a new table from the
//! current snapshot plus its own counts and swapping the pointer with a
//! compare-and-swap. A lost race just retries from a fresh snapshot.
//! Superseded snapshots are reclaimed through epoch-based garbage collection
//! once no pinned reader can still see them.

use crossbeam::epoch::{self, Atomic, Owned};
use serde::{Deserialize, Serialize};
use std::ops::Index;
use std::sync::atomic::Ordering;

use crate::eval::HandType;

/// Count of observed hands per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TallyTable {
    counts: [u64; HandType::COUNT],
}

impl TallyTable {
    /// Create a table with every category at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from raw counts indexed by [`HandType::index`].
    pub fn from_counts(counts: [u64; HandType::COUNT]) -> Self {
        Self { counts }
    }

    /// Record one hand.
    #[inline]
    pub fn add(&mut self, hand_type: HandType) {
        self.counts[hand_type.index()] += 1;
    }

    /// Record `n` hands of one category.
    #[inline]
    pub fn add_count(&mut self, hand_type: HandType, n: u64) {
        self.counts[hand_type.index()] += n;
    }

    /// Hands recorded for one category.
    pub fn count(&self, hand_type: HandType) -> u64 {
        self.counts[hand_type.index()]
    }

    /// Raw counts indexed by [`HandType::index`].
    pub fn counts(&self) -> &[u64; HandType::COUNT] {
        &self.counts
    }

    /// Total hands across all categories.
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Fraction of hands (0.0-1.0) in a category; 0.0 for an empty table.
    pub fn probability(&self, hand_type: HandType) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.count(hand_type) as f64 / total as f64,
        }
    }

    /// Add another table's counts into this one.
    pub fn merge(&mut self, other: &TallyTable) {
        for (mine, theirs) in self.counts.iter_mut().zip(other.counts.iter()) {
            *mine += theirs;
        }
    }

    /// Sum of this table and another.
    pub fn merged(&self, other: &TallyTable) -> TallyTable {
        let mut sum = *self;
        sum.merge(other);
        sum
    }

    /// Categories and counts in precedence order.
    pub fn iter(&self) -> impl Iterator<Item = (HandType, u64)> + '_ {
        HandType::ALL.iter().map(move |&t| (t, self.count(t)))
    }
}

impl Index<HandType> for TallyTable {
    type Output = u64;

    fn index(&self, hand_type: HandType) -> &u64 {
        &self.counts[hand_type.index()]
    }
}

/// Aggregate tally shared by all workers of a run.
pub struct SharedTally {
    current: Atomic<TallyTable>,
}

impl SharedTally {
    /// Create an aggregate with every category at zero.
    pub fn new() -> Self {
        Self {
            current: Atomic::new(TallyTable::new()),
        }
    }

    /// Fold a worker's local counts into the aggregate.
    ///
    /// Returns how many times the swap lost a race and had to retry.
    pub fn merge(&self, local: &TallyTable) -> usize {
        let guard = &epoch::pin();
        let mut retries = 0;
        loop {
            let snapshot = self.current.load(Ordering::Acquire, guard);
            // SAFETY: the pointer is never null and the pinned guard keeps
            // the snapshot alive until it is unpinned.
            let base = unsafe { snapshot.deref() };
            let next = Owned::new(base.merged(local));

            match self.current.compare_exchange(
                snapshot,
                next,
                Ordering::AcqRel,
                Ordering::Acquire,
                guard,
            ) {
                Ok(_) => {
                    // SAFETY: the snapshot is unlinked; readers still pinned
                    // in an earlier epoch delay its destruction.
                    unsafe { guard.defer_destroy(snapshot) };
                    return retries;
                }
                Err(_) => retries += 1,
            }
        }
    }

    /// Copy of the current aggregate.
    pub fn snapshot(&self) -> TallyTable {
        let guard = &epoch::pin();
        // SAFETY: non-null, protected by the guard for the duration of the copy.
        unsafe { *self.current.load(Ordering::Acquire, guard).deref() }
    }
}

impl Default for SharedTally {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for SharedTally {
    fn drop(&mut self) {
        // SAFETY: `&mut self` means no other thread can reach the pointer.
        unsafe {
            let current = self.current.load(Ordering::Relaxed, epoch::unprotected());
            if !current.is_null() {
                drop(current.into_owned());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_add_and_probability() {
        let mut table = TallyTable::new();
        assert_eq!(table.total(), 0);
        assert_eq!(table.probability(HandType::OnePair), 0.0);

        table.add(HandType::OnePair);
        table.add(HandType::OnePair);
        table.add(HandType::HighCard);
        table.add_count(HandType::Flush, 1);

        assert_eq!(table.total(), 4);
        assert_eq!(table[HandType::OnePair], 2);
        assert_eq!(table.probability(HandType::OnePair), 0.5);
        assert_eq!(table.probability(HandType::RoyalFlush), 0.0);
        assert_eq!(table.iter().count(), HandType::COUNT);
    }

    #[test]
    fn test_merge() {
        let a = TallyTable::from_counts([1, 0, 0, 0, 0, 0, 0, 0, 3, 5]);
        let b = TallyTable::from_counts([0, 2, 0, 0, 0, 0, 0, 1, 1, 1]);
        let sum = a.merged(&b);
        assert_eq!(*sum.counts(), [1, 2, 0, 0, 0, 0, 0, 1, 4, 6]);
        assert_eq!(sum.total(), a.total() + b.total());
    }

    #[test]
    fn test_shared_merge_loses_nothing() {
        let shared = SharedTally::new();
        let workers = 16;
        let merges_per_worker = 200;

        thread::scope(|s| {
            for w in 0..workers {
                let shared = &shared;
                s.spawn(move || {
                    let mut local = TallyTable::new();
                    local.add_count(HandType::ALL[w % HandType::COUNT], 1);
                    local.add(HandType::HighCard);
                    for _ in 0..merges_per_worker {
                        shared.merge(&local);
                    }
                });
            }
        });

        let total = shared.snapshot();
        assert_eq!(total.total(), (workers * merges_per_worker * 2) as u64);
        // HighCard gets one per merge, plus the workers whose slot is HighCard
        let extra = (0..workers).filter(|w| w % HandType::COUNT == HandType::HighCard.index()).count();
        assert_eq!(
            total[HandType::HighCard],
            ((workers + extra) * merges_per_worker) as u64
        );
    }

    #[test]
    fn test_uncontended_merge_has_no_retries() {
        let shared = SharedTally::new();
        let mut local = TallyTable::new();
        local.add(HandType::TwoPair);
        assert_eq!(shared.merge(&local), 0);
        assert_eq!(shared.snapshot(), local);
    }
}
