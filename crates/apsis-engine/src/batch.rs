//! Order-preserving batch propagation over a fixed worker pool.

use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Instant;

use crossbeam_channel::Sender;

use apsis_core::{PropagationError, PropagationOutcome};
use apsis_propagator::Satellite;

use crate::config::{BatchConfig, EngineError, ExecutionStrategy};
use crate::worker::{worker_loop, PropagateTask};

/// Metrics for a single batch call.
///
/// Returned alongside the outcomes; the engine keeps no telemetry of its
/// own between calls.
#[derive(Clone, Copy, Debug, Default)]
pub struct BatchMetrics {
    /// Number of time samples in the batch.
    pub items: usize,
    /// Number of samples that resolved to an error outcome.
    pub failures: usize,
    /// Worker threads available to the call (1 for sequential).
    pub workers: usize,
    /// Wall-clock time for the whole batch, in microseconds.
    pub total_us: u64,
}

/// Fixed-size propagation pool.
///
/// Workers are spawned once at construction and live until the engine is
/// dropped; the task channel doubles as the shutdown signal. The
/// sequential strategy spawns nothing and drives items in index order on
/// the calling thread, with the same external contract.
pub struct BatchEngine {
    pool: Option<Pool>,
    workers: usize,
}

struct Pool {
    task_tx: Sender<PropagateTask>,
    handles: Vec<JoinHandle<()>>,
}

impl BatchEngine {
    /// Construct an engine from a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ThreadSpawnFailed`] if a worker thread
    /// cannot be started. Workers spawned before the failure shut down
    /// when the partially-built pool is dropped.
    pub fn new(config: &BatchConfig) -> Result<Self, EngineError> {
        match config.strategy {
            ExecutionStrategy::Sequential => Ok(Self {
                pool: None,
                workers: 1,
            }),
            ExecutionStrategy::Parallel => {
                let workers = config.resolved_worker_count();
                let (task_tx, task_rx) = crossbeam_channel::unbounded::<PropagateTask>();
                let mut handles = Vec::with_capacity(workers);
                for worker_index in 0..workers {
                    let rx = task_rx.clone();
                    let handle = thread::Builder::new()
                        .name(format!("apsis-batch-{worker_index}"))
                        .spawn(move || worker_loop(rx))
                        .map_err(|err| EngineError::ThreadSpawnFailed {
                            reason: format!("worker {worker_index}: {err}"),
                        })?;
                    handles.push(handle);
                }
                Ok(Self {
                    pool: Some(Pool { task_tx, handles }),
                    workers,
                })
            }
        }
    }

    /// Worker threads backing this engine (1 for sequential).
    pub fn worker_count(&self) -> usize {
        self.workers
    }

    /// Propagate one satellite to every offset in `times`.
    ///
    /// The output is index-addressed: `outcomes[i]` is the result for
    /// `times[i]` regardless of which worker finishes first. A per-item
    /// failure resolves at its own index and never affects siblings. The
    /// call blocks until all items have resolved; there is no partial
    /// return and no cancellation.
    pub fn propagate_batch(
        &self,
        satellite: &Arc<Satellite>,
        times: &[f64],
    ) -> (Vec<PropagationOutcome>, BatchMetrics) {
        let started = Instant::now();
        let outcomes = match &self.pool {
            None => times.iter().map(|&t| satellite.propagate(t)).collect(),
            Some(pool) => Self::run_pooled(pool, satellite, times),
        };
        let metrics = BatchMetrics {
            items: times.len(),
            failures: outcomes.iter().filter(|outcome| outcome.is_err()).count(),
            workers: self.workers,
            total_us: u64::try_from(started.elapsed().as_micros()).unwrap_or(u64::MAX),
        };
        (outcomes, metrics)
    }

    fn run_pooled(
        pool: &Pool,
        satellite: &Arc<Satellite>,
        times: &[f64],
    ) -> Vec<PropagationOutcome> {
        let (reply_tx, reply_rx) = crossbeam_channel::bounded(times.len());
        for (index, &offset_s) in times.iter().enumerate() {
            let task = PropagateTask {
                satellite: Arc::clone(satellite),
                index,
                offset_s,
                reply: reply_tx.clone(),
            };
            // The engine holds a task sender for its whole lifetime, so
            // this can only fail if every worker died; the affected slots
            // then resolve as errors below instead of hanging the caller.
            let _ = pool.task_tx.send(task);
        }
        drop(reply_tx);

        let mut slots: Vec<Option<PropagationOutcome>> = times.iter().map(|_| None).collect();
        for (index, outcome) in reply_rx {
            slots[index] = Some(outcome);
        }
        slots
            .into_iter()
            .map(|slot| {
                slot.unwrap_or_else(|| {
                    Err(PropagationError::Model {
                        code: None,
                        detail: "worker exited before replying".to_string(),
                    })
                })
            })
            .collect()
    }
}

impl Drop for BatchEngine {
    fn drop(&mut self) {
        if let Some(pool) = self.pool.take() {
            // Closing the task channel is the shutdown signal.
            drop(pool.task_tx);
            for handle in pool.handles {
                let _ = handle.join();
            }
        }
    }
}
