//! Exchange types shared between the binary and its consumers.

use serde::{Deserialize, Serialize};

/// Summary of one benchmark run.
#[derive(Debug, Deserialize, Serialize)]
pub struct Report {
    /// How many primes were found in `[2, limit]`.
    pub primes_found: usize,
    /// The largest prime found, absent when the range holds none.
    pub largest_prime: Option<u64>,
    /// Wall time of the whole pipeline in milliseconds.
    pub elapsed_ms: u64,
}
