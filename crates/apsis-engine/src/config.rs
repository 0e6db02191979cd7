//! Batch execution configuration and construction errors.

use std::error::Error;
use std::fmt;

/// How a batch is driven.
///
/// Both strategies produce identical results for identical inputs. The
/// sequential path exists so tests can pin down determinism and so
/// single-core callers can skip the pool entirely; it is not a degraded
/// mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ExecutionStrategy {
    /// Fan items out across the worker pool.
    #[default]
    Parallel,
    /// Run items in index order on the calling thread.
    Sequential,
}

/// Configuration for [`BatchEngine`](crate::BatchEngine).
#[derive(Clone, Debug, Default)]
pub struct BatchConfig {
    /// Execution strategy. Default: parallel.
    pub strategy: ExecutionStrategy,
    /// Number of worker threads for the parallel strategy. `None` =
    /// auto-detect (`available_parallelism`, clamped to `[1, 16]`).
    pub worker_count: Option<usize>,
}

impl BatchConfig {
    /// Resolve the actual worker count, applying auto-detection if `None`.
    ///
    /// Explicit values are clamped to `[1, 64]`. Zero workers would make
    /// every batch hang with no one to drain the task channel.
    pub fn resolved_worker_count(&self) -> usize {
        match self.worker_count {
            Some(n) => n.clamp(1, 64),
            None => std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(4)
                .clamp(1, 16),
        }
    }
}

/// Errors from engine construction.
#[derive(Debug)]
pub enum EngineError {
    /// A worker thread could not be spawned.
    ThreadSpawnFailed {
        /// Description of which spawn failed.
        reason: String,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ThreadSpawnFailed { reason } => write!(f, "thread spawn failed: {reason}"),
        }
    }
}

impl Error for EngineError {}
