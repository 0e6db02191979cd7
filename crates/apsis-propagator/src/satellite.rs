//! The registered-satellite resource and the propagation call.

use apsis_core::{state_to_si, ElementsError, PropagationError, StateVector};

use crate::context::{native_code, PropagationContext};
use crate::elements::{ElementsSummary, OrbitalElements};

/// The model's native time unit is minutes since the element epoch.
const SECONDS_PER_MINUTE: f64 = 60.0;

/// A fully initialized satellite: decoded elements plus the immutable
/// context template every propagation derives from.
///
/// This is the unit of registration — the handle registry stores exactly
/// one `Satellite` per successful initialization — and it is immutable
/// and `Sync`, so batch workers share it by reference.
pub struct Satellite {
    elements: OrbitalElements,
    context: PropagationContext,
}

impl Satellite {
    /// Decode a two-line element set and derive the context template.
    ///
    /// Both phases report through [`ElementsError`]: parse failures as
    /// [`Unparsable`](ElementsError::Unparsable), model rejections as
    /// [`Rejected`](ElementsError::Rejected). Nothing is allocated or
    /// registered on failure.
    pub fn initialize(line1: &str, line2: &str) -> Result<Self, ElementsError> {
        let elements = OrbitalElements::decode(line1, line2)?;
        let context = PropagationContext::from_elements(&elements)?;
        Ok(Self { elements, context })
    }

    /// The decoded elements.
    pub fn elements(&self) -> &OrbitalElements {
        &self.elements
    }

    /// Copy snapshot of the decoded fields.
    pub fn summary(&self) -> ElementsSummary {
        self.elements.summary()
    }

    /// Propagate to `offset_s` seconds from the element epoch.
    ///
    /// Derives a private scratch from the context template, runs the
    /// model on that copy, and scales the result to SI metres. Offsets
    /// may be negative (before epoch).
    ///
    /// For fixed inputs the output is bit-identical across calls: the
    /// scratch starts from the same immutable template every time and the
    /// call keeps no history.
    pub fn propagate(&self, offset_s: f64) -> Result<StateVector, PropagationError> {
        let minutes = sgp4::MinutesSinceEpoch(offset_s / SECONDS_PER_MINUTE);
        let mut scratch = self.context.scratch();
        let prediction = self
            .context
            .constants()
            .propagate_from_state(minutes, scratch.as_mut(), false)
            .map_err(|err| PropagationError::Model {
                code: native_code(&err),
                detail: err.to_string(),
            })?;
        let finite = prediction
            .position
            .iter()
            .chain(prediction.velocity.iter())
            .all(|component| component.is_finite());
        if !finite {
            return Err(PropagationError::NonFinite { offset_s });
        }
        Ok(state_to_si(prediction.position, prediction.velocity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apsis_test_utils::{
        assert_vec3_close, GEO_LINE1, GEO_LINE2, LEO_LINE1, LEO_LINE2, VERIF_LINE1, VERIF_LINE2,
        VERIF_POSITION_T0_KM, VERIF_VELOCITY_T0_KM_S,
    };

    #[test]
    fn verification_object_matches_published_state_at_epoch() {
        let satellite = Satellite::initialize(VERIF_LINE1, VERIF_LINE2).unwrap();
        let state = satellite.propagate(0.0).unwrap();
        let expected_position_m = VERIF_POSITION_T0_KM.map(|c| c * 1000.0);
        let expected_velocity_m_s = VERIF_VELOCITY_T0_KM_S.map(|c| c * 1000.0);
        // 1e-3 m = 1e-6 km, the published reference tolerance.
        assert_vec3_close(state.position_m, expected_position_m, 1e-3);
        assert_vec3_close(state.velocity_m_s, expected_velocity_m_s, 1e-3);
    }

    #[test]
    fn repeated_calls_are_bit_identical() {
        let satellite = Satellite::initialize(LEO_LINE1, LEO_LINE2).unwrap();
        let first = satellite.propagate(5400.0).unwrap();
        let second = satellite.propagate(5400.0).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn deep_space_calls_keep_no_history() {
        // The resonance integrator advances internal state while it runs;
        // if two calls shared one scratch, the second answer would drift.
        let satellite = Satellite::initialize(GEO_LINE1, GEO_LINE2).unwrap();
        let offset = 3.0 * 86400.0;
        let first = satellite.propagate(offset).unwrap();
        let second = satellite.propagate(offset).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn negative_offsets_propagate_before_epoch() {
        let satellite = Satellite::initialize(LEO_LINE1, LEO_LINE2).unwrap();
        assert!(satellite.propagate(-3600.0).is_ok());
    }

    #[test]
    fn output_is_in_metres_not_kilometres() {
        // A LEO radius is ~7e6 m; a km-scale mistake would read ~7e3.
        let satellite = Satellite::initialize(LEO_LINE1, LEO_LINE2).unwrap();
        let state = satellite.propagate(0.0).unwrap();
        let radius = state
            .position_m
            .iter()
            .map(|c| c * c)
            .sum::<f64>()
            .sqrt();
        assert!(
            (6.5e6..8.0e6).contains(&radius),
            "unexpected orbit radius: {radius} m"
        );
    }

    #[test]
    fn nan_offset_is_reported_not_propagated() {
        let satellite = Satellite::initialize(LEO_LINE1, LEO_LINE2).unwrap();
        assert!(satellite.propagate(f64::NAN).is_err());
    }
}
