//! State-vector and outcome types.

use crate::error::PropagationError;

/// Geocentric state in SI units.
///
/// Position and velocity are expressed in the TEME frame of the element
/// epoch, in metres and metres per second. Produced fresh for every
/// propagation; never mutated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StateVector {
    /// Position components (x, y, z), metres.
    pub position_m: [f64; 3],
    /// Velocity components (x, y, z), metres per second.
    pub velocity_m_s: [f64; 3],
}

/// Per-sample propagation result.
///
/// In a batch, index `i` of the output always carries the outcome for
/// index `i` of the request, regardless of completion order.
pub type PropagationOutcome = Result<StateVector, PropagationError>;
