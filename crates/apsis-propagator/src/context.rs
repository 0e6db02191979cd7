//! Immutable propagation template and per-call scratch derivation.
//!
//! The model mutates integrator state while computing a single result:
//! the deep-space resonance terms are stepped numerically, and the
//! stepper's counters and accumulators live outside the decoded elements.
//! Sharing that state between two in-flight calls corrupts both results,
//! so the template here is never handed to the model directly — every
//! call derives its own private scratch immediately before invocation.

use apsis_core::ElementsError;

use crate::elements::OrbitalElements;

/// Immutable template derived once per satellite.
///
/// Holds the model constants computed from the decoded elements. Safe to
/// share by reference across any number of threads; the mutable part of a
/// propagation is the per-call scratch.
pub struct PropagationContext {
    constants: sgp4::Constants,
}

impl PropagationContext {
    /// Derive the template from decoded elements.
    ///
    /// Fails with [`ElementsError::Rejected`] when the model refuses the
    /// elements (degenerate eccentricity, non-positive mean motion), with
    /// the model's native code attached where the failure classifies.
    pub fn from_elements(elements: &OrbitalElements) -> Result<Self, ElementsError> {
        let constants = sgp4::Constants::from_elements(elements.raw()).map_err(|err| {
            ElementsError::Rejected {
                code: elements_code(&err),
                detail: err.to_string(),
            }
        })?;
        Ok(Self { constants })
    }

    /// The model constants.
    pub(crate) fn constants(&self) -> &sgp4::Constants {
        &self.constants
    }

    /// Derive a fresh private integrator scratch for one call.
    ///
    /// `None` for near-Earth objects, whose propagation is closed-form. A
    /// resonant deep-space object gets a new state seeded from the
    /// template every time, so no two calls ever touch the same mutable
    /// memory.
    pub(crate) fn scratch(&self) -> Option<sgp4::ResonanceState> {
        self.constants.initial_state()
    }
}

/// Map a propagation error onto the reference implementation's numeric
/// code taxonomy, where the variant corresponds to one. Unclassified
/// variants carry no code; the message still travels with the error.
pub(crate) fn native_code(err: &sgp4::Error) -> Option<u8> {
    match err {
        sgp4::Error::OutOfRangeEccentricity { .. } => Some(1),
        sgp4::Error::OutOfRangePerturbedEccentricity { .. } => Some(3),
        sgp4::Error::NegativeSemiLatusRectum { .. } => Some(4),
        _ => None,
    }
}

/// Map an element-decoding error onto the same numeric code taxonomy.
/// The model splits rejection failures (`from_elements`) from in-flight
/// propagation failures into distinct error types; both feed the same
/// code space.
pub(crate) fn elements_code(err: &sgp4::ElementsError) -> Option<u8> {
    match err {
        sgp4::ElementsError::OutOfRangeEpochEccentricity(..) => Some(1),
        sgp4::ElementsError::KozaiElementsError(
            sgp4::KozaiElementsError::NegativeBrouwerMeanMotion
            | sgp4::KozaiElementsError::NegativeKozaiMeanMotion,
        ) => Some(2),
    }
}
