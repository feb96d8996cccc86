#![deny(missing_docs)]
//! `primepool` splits an integer range into fixed-size chunks, finds the
//! primes in every chunk on a fixed pool of worker threads, and merges the
//! results.
//!
//! The interesting piece is [`worker_pool::WorkerPool`], a bounded
//! producer/consumer pipeline over a fixed worker count: submit tasks (even
//! before the workers start), start the workers, close the queue, read each
//! task's one-shot result handle, then wait for the workers to drain.
//!
//! # Examples
//!
//! ```rust
//! use primepool::worker_pool::WorkerPool;
//!
//! let mut pool = WorkerPool::new(2, 4, |n: u64| n * n);
//!
//! let handle = pool.submit(12).unwrap();
//! pool.start().unwrap();
//! pool.close();
//!
//! assert_eq!(handle.read().unwrap(), 144);
//! pool.wait();
//! ```

pub mod chunker;
pub mod common;
mod error;
pub mod primes;
pub mod runner;
pub mod worker_pool;

pub use error::Error;

/// Alias of `Result` for `primepool`.
pub type Result<T> = std::result::Result<T, Error>;
