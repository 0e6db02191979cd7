//! Service boundary for Apsis: the satellite handle registry and the
//! public propagation operations.
//!
//! [`OrbitService`] exposes the six boundary operations (single-shot,
//! handle create/propagate/info/release, batch) over one
//! [`SatelliteRegistry`] and one batch engine. Every operation validates
//! input shape before touching shared state, and every failure comes back
//! as a typed [`ServiceError`] value — nothing here aborts the caller.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod registry;
pub mod service;

pub use registry::{SatelliteId, SatelliteRegistry};
pub use service::{HandleInfo, OrbitService, ServiceError};
