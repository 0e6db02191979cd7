//! Error types for the Apsis propagation service.
//!
//! One enum per failure phase: input shape validation, element decoding,
//! and numeric propagation. Handle-lookup and engine-construction errors
//! live with their subsystems; this crate holds the taxonomy shared by
//! every call path.
//!
//! Model failures carry the algorithm's native numeric code where the
//! failure maps onto the reference implementation's 1-6 taxonomy. The
//! values are opaque here: they are defined by the algorithm's
//! documentation, not reinterpreted by the service.

use std::error::Error;
use std::fmt;

use crate::validate::MAX_LINE_LEN;

/// Errors from input shape validation.
///
/// Reported before any shared resource is touched; a request that fails
/// validation has no side effects.
#[derive(Clone, Debug, PartialEq)]
pub enum ValidationError {
    /// An element line exceeds the fixed-width record length.
    LineTooLong {
        /// Which line failed (1 or 2).
        line: u8,
        /// The offending byte length.
        length: usize,
    },
    /// The batch time list is empty.
    EmptyTimeList,
    /// A batch time entry is NaN or infinite.
    NonFiniteTime {
        /// Index of the offending entry.
        index: usize,
        /// The offending value.
        value: f64,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LineTooLong { line, length } => write!(
                f,
                "element line {line} is {length} bytes, maximum is {MAX_LINE_LEN}"
            ),
            Self::EmptyTimeList => write!(f, "batch time list is empty"),
            Self::NonFiniteTime { index, value } => {
                write!(f, "batch time at index {index} is not finite ({value})")
            }
        }
    }
}

impl Error for ValidationError {}

/// Errors from decoding a two-line element set.
///
/// This is the failure shape of the initialization phase: either the
/// lines could not be parsed at all, or they parsed but the model refused
/// the decoded elements.
#[derive(Clone, Debug, PartialEq)]
pub enum ElementsError {
    /// The element lines could not be parsed.
    Unparsable {
        /// Decoder message describing the malformed field.
        detail: String,
    },
    /// The model rejected the decoded elements (degenerate eccentricity,
    /// non-positive mean motion).
    Rejected {
        /// The model's native numeric code, where known.
        code: Option<u8>,
        /// Model message describing the rejection.
        detail: String,
    },
}

impl fmt::Display for ElementsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unparsable { detail } => write!(f, "element lines unparsable: {detail}"),
            Self::Rejected {
                code: Some(code),
                detail,
            } => write!(f, "elements rejected (code {code}): {detail}"),
            Self::Rejected { code: None, detail } => {
                write!(f, "elements rejected: {detail}")
            }
        }
    }
}

impl Error for ElementsError {}

/// Errors from the numeric propagation step for a single time offset.
///
/// Inside a batch these resolve per index and never affect sibling items.
#[derive(Clone, Debug, PartialEq)]
pub enum PropagationError {
    /// The model reported a failure at this offset. Common causes: the
    /// orbit decayed below the modelled surface, or long-term terms drove
    /// the perturbed eccentricity out of range.
    Model {
        /// The model's native numeric code, where known.
        code: Option<u8>,
        /// Model message describing the failure.
        detail: String,
    },
    /// The model returned a NaN or infinite component.
    NonFinite {
        /// The time offset, in seconds, that produced the value.
        offset_s: f64,
    },
}

impl fmt::Display for PropagationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Model {
                code: Some(code),
                detail,
            } => write!(f, "propagation failed (code {code}): {detail}"),
            Self::Model { code: None, detail } => write!(f, "propagation failed: {detail}"),
            Self::NonFinite { offset_s } => {
                write!(f, "propagation produced a non-finite component at {offset_s} s")
            }
        }
    }
}

impl Error for PropagationError {}
