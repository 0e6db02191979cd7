//! Element-set decoding and propagation for the Apsis service.
//!
//! Wraps the external SGP4 implementation behind three types:
//! [`OrbitalElements`] (the immutable decode result, retaining its input
//! lines), [`PropagationContext`] (the immutable per-satellite template),
//! and [`Satellite`] (the pair, as registered and propagated).
//!
//! The one rule this crate exists to enforce: the model never sees shared
//! mutable state. Every call to [`Satellite::propagate`] derives its own
//! private integrator scratch from the template immediately before
//! invoking the model, so any number of calls may run concurrently over
//! one satellite.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod context;
pub mod elements;
pub mod satellite;

pub use context::PropagationContext;
pub use elements::{ElementsSummary, OrbitalElements};
pub use satellite::Satellite;
