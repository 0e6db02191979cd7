//! Core types for the Apsis satellite propagation service.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by the rest of the workspace: the state-vector and
//! outcome types, the error taxonomy for the validation / decode /
//! propagation phases, input shape validation, and the kilometre-to-metre
//! conversion applied at the service boundary.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod state;
pub mod units;
pub mod validate;

pub use error::{ElementsError, PropagationError, ValidationError};
pub use state::{PropagationOutcome, StateVector};
pub use units::{state_to_si, M_PER_KM};
pub use validate::{validate_batch_times, validate_lines, MAX_LINE_LEN};
