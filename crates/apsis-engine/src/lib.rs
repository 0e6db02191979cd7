//! Concurrent batch propagation for the Apsis service.
//!
//! [`BatchEngine`] fans a list of independent time samples out across a
//! fixed-size worker pool and fans the outcomes back in input order. The
//! pool is spawned once at construction; the sequential strategy drives
//! the same contract on the calling thread, so determinism checks can
//! compare the two directly.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod batch;
pub mod config;
mod worker;

pub use batch::{BatchEngine, BatchMetrics};
pub use config::{BatchConfig, EngineError, ExecutionStrategy};
