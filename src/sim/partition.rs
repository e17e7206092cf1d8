//! Splitting a sample count across workers.

/// Split `total` hands into `workers` nearly equal chunks.
///
/// Every chunk gets `total / workers` hands and the last one also takes the
/// remainder, so the chunks always sum to `total`. The worker count is
/// capped at `total` so no chunk is empty.
pub fn partition(total: u64, workers: usize) -> Vec<u64> {
    let workers = (workers.max(1) as u64).min(total.max(1));
    let base = total / workers;
    let mut chunks = vec![base; workers as usize];
    if let Some(last) = chunks.last_mut() {
        *last = total - base * (workers - 1);
    }
    chunks
}
