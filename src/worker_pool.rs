//! A fixed-size worker pool over a bounded task queue.
//!
//! Tasks carry their payload together with a private one-shot result
//! channel, so every submitter reads exactly its own task's output and the
//! workers never touch shared mutable state beyond the queue itself.
//!
//! The lifecycle is submit → start → close → read handles → wait. Submitting
//! is safe before or after [`WorkerPool::start`], but when every task is
//! enqueued up front the queue capacity must cover all of them, or
//! submission blocks with nobody draining the queue.

use crate::{Error, Result};
use crossbeam::channel::{self, Receiver, SendTimeoutError, Sender};
use std::{
    panic::{self, AssertUnwindSafe},
    sync::Arc,
    thread,
    time::Duration,
};

struct Task<T, R> {
    payload: T,
    result_tx: Sender<R>,
}

/// Write-once, read-once channel carrying one task's output back to its
/// submitter.
#[derive(Debug)]
pub struct ResultHandle<R> {
    result_rx: Receiver<R>,
}

impl<R> ResultHandle<R> {
    /// Block until this task's result arrives and take it.
    ///
    /// Consuming `self` makes a second read impossible. Returns
    /// [`Error::WorkerPanic`] when the task was dropped without a result,
    /// which happens when its `process` call panicked or the pool was torn
    /// down before the task ran.
    pub fn read(self) -> Result<R> {
        self.result_rx.recv().map_err(|_| Error::WorkerPanic)
    }
}

/// A pool of `threads` workers pulling tasks from one bounded FIFO queue.
///
/// `process` is shared by all workers and turns a submitted payload into
/// the result published on that task's [`ResultHandle`].
pub struct WorkerPool<T, R> {
    threads: usize,
    task_tx: Option<Sender<Task<T, R>>>,
    task_rx: Receiver<Task<T, R>>,
    process: Arc<dyn Fn(T) -> R + Send + Sync>,
    workers: Vec<thread::JoinHandle<()>>,
}

impl<T, R> WorkerPool<T, R>
where
    T: Send + 'static,
    R: Send + 'static,
{
    /// Create an idle pool; no worker threads run until [`WorkerPool::start`].
    ///
    /// `queue_capacity` bounds how many unconsumed tasks may be outstanding
    /// at once; a submitter blocks past that until a worker makes room.
    pub fn new<F>(threads: usize, queue_capacity: usize, process: F) -> WorkerPool<T, R>
    where
        F: Fn(T) -> R + Send + Sync + 'static,
    {
        let (task_tx, task_rx) = channel::bounded(queue_capacity);
        WorkerPool {
            threads,
            task_tx: Some(task_tx),
            task_rx,
            process: Arc::new(process),
            workers: Vec::new(),
        }
    }

    /// Enqueue one task and immediately return its result handle.
    ///
    /// Blocks while the queue is full. Returns [`Error::SubmitAfterClose`]
    /// once [`WorkerPool::close`] has been called.
    pub fn submit(&self, payload: T) -> Result<ResultHandle<R>> {
        let task_tx = self.task_tx.as_ref().ok_or(Error::SubmitAfterClose)?;
        let (result_tx, result_rx) = channel::bounded(1);

        task_tx
            .send(Task { payload, result_tx })
            .expect("task queue receiver dropped while the pool is alive");
        Ok(ResultHandle { result_rx })
    }

    /// Like [`WorkerPool::submit`], but give up with
    /// [`Error::BackpressureTimeout`] when the queue stays full past
    /// `timeout`.
    pub fn submit_timeout(&self, payload: T, timeout: Duration) -> Result<ResultHandle<R>> {
        let task_tx = self.task_tx.as_ref().ok_or(Error::SubmitAfterClose)?;
        let (result_tx, result_rx) = channel::bounded(1);

        match task_tx.send_timeout(Task { payload, result_tx }, timeout) {
            Ok(()) => Ok(ResultHandle { result_rx }),
            Err(SendTimeoutError::Timeout(_)) => Err(Error::BackpressureTimeout),
            Err(SendTimeoutError::Disconnected(_)) => Err(Error::SubmitAfterClose),
        }
    }

    /// Launch the worker threads. Call exactly once.
    ///
    /// Each worker pulls tasks in FIFO order until the queue is closed and
    /// drained, then exits. Completion order across tasks is unspecified.
    ///
    /// # Panics
    ///
    /// Panics when the pool was already started.
    pub fn start(&mut self) -> Result<()> {
        assert!(self.workers.is_empty(), "worker pool already started");

        for _ in 0..self.threads {
            let task_rx = self.task_rx.clone();
            let process = Arc::clone(&self.process);
            self.workers
                .push(thread::Builder::new().spawn(move || run_tasks(task_rx, process))?);
        }
        Ok(())
    }
}

impl<T, R> WorkerPool<T, R> {
    /// Mark the queue closed for further submissions.
    ///
    /// Tasks already enqueued still run; workers exit once the queue drains.
    /// Idempotent.
    pub fn close(&mut self) {
        self.task_tx.take();
    }

    /// Block until every worker has drained the queue and exited.
    ///
    /// Must be called after [`WorkerPool::close`], otherwise the workers
    /// never observe the end of the queue.
    pub fn wait(&mut self) {
        debug_assert!(self.task_tx.is_none(), "wait() called before close()");
        for worker in self.workers.drain(..) {
            if worker.join().is_err() {
                eprintln!("worker exited abnormally");
            }
        }
    }
}

impl<T, R> Drop for WorkerPool<T, R> {
    fn drop(&mut self) {
        self.close();
        self.wait();
    }
}

fn run_tasks<T, R>(task_rx: Receiver<Task<T, R>>, process: Arc<dyn Fn(T) -> R + Send + Sync>) {
    // the iterator ends once the queue is closed and empty
    for Task { payload, result_tx } in task_rx {
        match panic::catch_unwind(AssertUnwindSafe(|| process(payload))) {
            // send fails only when the handle was dropped; nobody wants
            // this result then
            Ok(result) => {
                let _ = result_tx.send(result);
            }
            // dropping result_tx unsent makes the handle's read() report
            // the loss instead of hanging
            Err(_) => drop(result_tx),
        }
    }
}
