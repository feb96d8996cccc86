//! End-to-end pipeline: chunk the range, fan the chunks out over the pool,
//! merge the per-chunk primes back in order.

use crate::{chunker::chunks, primes::find_primes, worker_pool::WorkerPool, Result};

/// Find every prime in `[2, limit]` using `threads` workers over
/// `chunk_size`-wide sub-ranges. Output is sorted ascending.
///
/// Every chunk is submitted before the workers start, so the queue is sized
/// to the exact chunk count; anything smaller would block the submission
/// loop with nobody draining the queue.
pub fn run(limit: u64, chunk_size: u64, threads: usize) -> Result<Vec<u64>> {
    let task_count = chunks(2, limit, chunk_size).count().max(1);

    let mut pool = WorkerPool::new(threads, task_count, |(start, end): (u64, u64)| {
        find_primes(start, end)
    });

    let mut handles = Vec::with_capacity(task_count);
    for range in chunks(2, limit, chunk_size) {
        handles.push(pool.submit(range)?);
    }

    pool.start()?;
    pool.close();

    // handles are read in submission order; completion order is up to the
    // workers
    let mut primes = Vec::new();
    for handle in handles {
        primes.extend(handle.read()?);
    }
    pool.wait();

    primes.sort_unstable();
    Ok(primes)
}

/// Find every prime in `[2, limit]` directly, without the pool.
///
/// Serves as the baseline in benchmarks and as the oracle in tests.
pub fn run_serial(limit: u64) -> Vec<u64> {
    find_primes(2, limit)
}
