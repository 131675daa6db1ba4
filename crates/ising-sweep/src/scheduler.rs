//! The Batch Scheduler.
//!
//! # Execution model
//!
//! ```text
//! run(params):
//!   pool  = W named worker threads (owned by this call)
//!   size  = batch_size or max(1, ceil(len / 2W))
//!   for batch in params.chunks(size):            ← strictly sequential
//!     for (i, p) in batch: pool.spawn(send (i, task(p)))
//!     wait for the batch; slot records by i      ← input order restored
//!     sink.write_batch(index, records)           ← before the next batch
//! ```
//!
//! Workers share nothing mutable.  Each task's record travels back over a
//! channel and only the orchestrating thread touches the result buffer.

use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use ising_core::ParameterSet;
use ising_output::{BatchSink, JsonBatchWriter, NoopSink, ResultRecord};
use rayon::{ThreadPool, ThreadPoolBuilder};
use tracing::{debug, info, warn};

use crate::runner::{run_task, worker_name};
use crate::{SweepError, SweepResult};

/// Worker count used when none is configured: the machine's available
/// parallelism, or 1 if that cannot be determined.
pub fn default_workers() -> usize {
    thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
}

/// `max(1, ceil(tasks / (2 * workers)))`.
pub fn default_batch_size(tasks: usize, workers: usize) -> usize {
    tasks.div_ceil(2 * workers.max(1)).max(1)
}

// ── BatchScheduler ────────────────────────────────────────────────────────────

/// Runs parameter sets in sequential batches on a fresh worker pool.
///
/// | Method            | Default                        |
/// |-------------------|--------------------------------|
/// | `.workers(w)`     | [`default_workers`]            |
/// | `.batch_size(b)`  | [`default_batch_size`]         |
/// | `.batch_dir(d)`   | no batch snapshots             |
#[derive(Clone, Debug)]
pub struct BatchScheduler {
    workers:    usize,
    batch_size: Option<usize>,
    batch_dir:  Option<PathBuf>,
}

impl Default for BatchScheduler {
    fn default() -> Self {
        Self {
            workers:    default_workers(),
            batch_size: None,
            batch_dir:  None,
        }
    }
}

impl BatchScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = Some(batch_size);
        self
    }

    pub fn batch_size_opt(mut self, batch_size: Option<usize>) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Write each completed batch to `dir/batch_NNNN.json`.
    pub fn batch_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.batch_dir = Some(dir.into());
        self
    }

    pub fn batch_dir_opt(mut self, dir: Option<PathBuf>) -> Self {
        self.batch_dir = dir;
        self
    }

    pub fn worker_count(&self) -> usize {
        self.workers
    }

    pub fn snapshot_dir(&self) -> Option<&PathBuf> {
        self.batch_dir.as_ref()
    }

    /// Batch size that [`run`](Self::run) would use for `tasks` tasks.
    pub fn resolved_batch_size(&self, tasks: usize) -> usize {
        self.batch_size
            .unwrap_or_else(|| default_batch_size(tasks, self.workers))
    }

    /// Run every parameter set through [`run_task`]; records come back in
    /// input order.
    pub fn run(&self, params: &[ParameterSet]) -> SweepResult<Vec<ResultRecord>> {
        self.run_with(params, run_task)
    }

    /// [`run`](Self::run) with a custom task function.
    pub fn run_with<F>(&self, params: &[ParameterSet], task: F) -> SweepResult<Vec<ResultRecord>>
    where
        F: Fn(&ParameterSet) -> ResultRecord + Sync,
    {
        match &self.batch_dir {
            Some(dir) => self.run_into(params, task, &mut JsonBatchWriter::new(dir)?),
            None => self.run_into(params, task, &mut NoopSink),
        }
    }

    /// Core loop: hands each completed batch to `sink` before starting the
    /// next.  A sink error aborts the run; task failures never do.
    pub fn run_into<F, S>(
        &self,
        params: &[ParameterSet],
        task:   F,
        sink:   &mut S,
    ) -> SweepResult<Vec<ResultRecord>>
    where
        F: Fn(&ParameterSet) -> ResultRecord + Sync,
        S: BatchSink,
    {
        if self.workers == 0 {
            return Err(SweepError::InvalidArgument("worker count must be at least 1".into()));
        }
        let batch_size = self.resolved_batch_size(params.len());
        if batch_size == 0 {
            return Err(SweepError::InvalidArgument("batch size must be at least 1".into()));
        }

        let pool = ThreadPoolBuilder::new()
            .num_threads(self.workers)
            .thread_name(|i| format!("ising-worker-{i}"))
            .build()?;

        info!(
            tasks = params.len(),
            workers = self.workers,
            batch_size,
            batches = params.len().div_ceil(batch_size),
            "scheduler started"
        );

        let mut results = Vec::with_capacity(params.len());
        for (b, batch) in params.chunks(batch_size).enumerate() {
            let index = b + 1;
            let started = Instant::now();
            let records = run_batch(&pool, batch, &task);

            let failures = records.iter().filter(|r| !r.success).count();
            for (i, r) in records.iter().enumerate().filter(|(_, r)| !r.success) {
                warn!(
                    batch = index,
                    task = i,
                    temperature = r.temperature(),
                    error = r.error.as_deref().unwrap_or(""),
                    "task failed"
                );
            }

            sink.write_batch(index, &records)?;
            info!(
                batch = index,
                tasks = records.len(),
                failures,
                elapsed_secs = started.elapsed().as_secs_f64(),
                "batch complete"
            );
            results.extend(records);
        }
        sink.finish()?;
        Ok(results)
    }
}

/// Dispatch one batch to `pool` and return its records in input order.
fn run_batch<F>(pool: &ThreadPool, batch: &[ParameterSet], task: &F) -> Vec<ResultRecord>
where
    F: Fn(&ParameterSet) -> ResultRecord + Sync,
{
    let (tx, rx) = mpsc::channel::<(usize, ResultRecord)>();
    pool.scope(|s| {
        for (i, params) in batch.iter().enumerate() {
            let tx = tx.clone();
            s.spawn(move |_| {
                let record = task(params);
                debug!(
                    task = i,
                    temperature = record.temperature(),
                    worker = %worker_name(),
                    success = record.success,
                    "task complete"
                );
                // The receiver outlives the scope.
                let _ = tx.send((i, record));
            });
        }
    });
    drop(tx);

    let mut slots: Vec<Option<ResultRecord>> = vec![None; batch.len()];
    for (i, record) in rx {
        slots[i] = Some(record);
    }
    slots.into_iter().flatten().collect()
}
