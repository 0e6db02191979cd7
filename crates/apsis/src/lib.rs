//! Apsis: a satellite orbit propagation service over two-line element sets.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Apsis sub-crates. For most users, adding `apsis` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use apsis::prelude::*;
//!
//! let line1 = "1 00005U 58002B   00179.78495062  .00000023  00000-0  28098-4 0  4753";
//! let line2 = "2 00005  34.2682 348.7242 1859667 331.7664  19.3264 10.82419157413667";
//!
//! let service = OrbitService::new().unwrap();
//!
//! // Single-shot: decode and propagate in one call.
//! let state = service.propagate_once(line1, line2, 0.0).unwrap();
//! assert!(state.position_m[0] > 6.0e6, "SI metres, not kilometres");
//!
//! // Handle path: decode once, propagate repeatedly.
//! let id = service.create_handle(line1, line2).unwrap();
//! let again = service.propagate_handle(id, 0.0).unwrap();
//! assert_eq!(state, again);
//!
//! // Batch path: many offsets, outcomes in request order.
//! let outcomes = service
//!     .propagate_batch(line1, line2, &[0.0, 3600.0, 7200.0])
//!     .unwrap();
//! assert_eq!(outcomes.len(), 3);
//!
//! service.release_handle(id).unwrap();
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `apsis-core` | state vectors, outcomes, errors, validation |
//! | [`propagator`] | `apsis-propagator` | element decoding, contexts, `Satellite` |
//! | [`engine`] | `apsis-engine` | batch configuration and the worker pool |
//! | [`service`] | `apsis-service` | `OrbitService` and the handle registry |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, errors, and validation (`apsis-core`).
pub use apsis_core as types;

/// Element decoding and propagation (`apsis-propagator`).
pub use apsis_propagator as propagator;

/// Batch configuration and the worker pool (`apsis-engine`).
pub use apsis_engine as engine;

/// The service boundary and handle registry (`apsis-service`).
pub use apsis_service as service;

/// The types most callers need, importable in one line.
pub mod prelude {
    pub use apsis_core::{PropagationOutcome, StateVector};
    pub use apsis_engine::{BatchConfig, ExecutionStrategy};
    pub use apsis_service::{HandleInfo, OrbitService, SatelliteId, ServiceError};
}
