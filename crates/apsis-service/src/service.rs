//! The public propagation operations.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use apsis_core::{
    validate_batch_times, validate_lines, ElementsError, PropagationError, PropagationOutcome,
    StateVector, ValidationError,
};
use apsis_engine::{BatchConfig, BatchEngine, BatchMetrics, EngineError};
use apsis_propagator::{ElementsSummary, Satellite};

use crate::registry::{SatelliteId, SatelliteRegistry};

/// Boundary error union for [`OrbitService`] operations.
///
/// Every failure is a value; none of these conditions aborts the caller.
#[derive(Clone, Debug, PartialEq)]
pub enum ServiceError {
    /// Input shape validation failed.
    Validation(ValidationError),
    /// The element lines failed to decode or were rejected by the model.
    Initialization(ElementsError),
    /// The propagation step failed for the requested offset.
    Propagation(PropagationError),
    /// The handle id is unknown or was already released.
    NotFound {
        /// The offending id.
        id: SatelliteId,
    },
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "validation: {err}"),
            Self::Initialization(err) => write!(f, "initialization: {err}"),
            Self::Propagation(err) => write!(f, "propagation: {err}"),
            Self::NotFound { id } => write!(f, "no satellite registered under {id}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Initialization(err) => Some(err),
            Self::Propagation(err) => Some(err),
            Self::NotFound { .. } => None,
        }
    }
}

impl From<ValidationError> for ServiceError {
    fn from(err: ValidationError) -> Self {
        Self::Validation(err)
    }
}

impl From<ElementsError> for ServiceError {
    fn from(err: ElementsError) -> Self {
        Self::Initialization(err)
    }
}

impl From<PropagationError> for ServiceError {
    fn from(err: PropagationError) -> Self {
        Self::Propagation(err)
    }
}

/// Snapshot returned by [`OrbitService::handle_info`].
#[derive(Clone, Debug, PartialEq)]
pub struct HandleInfo {
    /// Decoded element fields.
    pub elements: ElementsSummary,
    /// First input line, byte-for-byte as supplied at creation.
    pub line1: String,
    /// Second input line, byte-for-byte as supplied at creation.
    pub line2: String,
}

/// The satellite propagation service.
///
/// Owns the handle registry and the batch pool. All operations validate
/// input shape first, so a malformed request never touches shared state,
/// and all three call paths (single-shot, handle, batch) run the same
/// decode and propagate code.
pub struct OrbitService {
    registry: SatelliteRegistry,
    engine: BatchEngine,
}

impl OrbitService {
    /// Create a service with the default batch configuration.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ThreadSpawnFailed`] if the worker pool
    /// cannot be started.
    pub fn new() -> Result<Self, EngineError> {
        Self::with_config(&BatchConfig::default())
    }

    /// Create a service with an explicit batch configuration.
    pub fn with_config(config: &BatchConfig) -> Result<Self, EngineError> {
        Ok(Self {
            registry: SatelliteRegistry::new(),
            engine: BatchEngine::new(config)?,
        })
    }

    /// Propagate a satellite described inline to one offset from epoch.
    ///
    /// Decodes the lines cold on every call; use the handle path to
    /// amortize decoding across repeated propagations.
    pub fn propagate_once(
        &self,
        line1: &str,
        line2: &str,
        offset_s: f64,
    ) -> Result<StateVector, ServiceError> {
        validate_lines(line1, line2)?;
        let satellite = Satellite::initialize(line1, line2)?;
        Ok(satellite.propagate(offset_s)?)
    }

    /// Decode and register a satellite for repeated propagation.
    ///
    /// On failure nothing is registered; on success exactly one entry
    /// exists until [`release_handle`](Self::release_handle) or service
    /// teardown drops it.
    pub fn create_handle(&self, line1: &str, line2: &str) -> Result<SatelliteId, ServiceError> {
        validate_lines(line1, line2)?;
        let satellite = Satellite::initialize(line1, line2)?;
        Ok(self.registry.insert(Arc::new(satellite)))
    }

    /// Propagate a registered satellite to one offset from epoch.
    pub fn propagate_handle(
        &self,
        id: SatelliteId,
        offset_s: f64,
    ) -> Result<StateVector, ServiceError> {
        let satellite = self.lookup(id)?;
        Ok(satellite.propagate(offset_s)?)
    }

    /// Propagate a satellite described inline to every offset in `times`.
    ///
    /// Decodes once and shares the satellite across all items of this
    /// call. Per-item failures resolve at their own index; the call as a
    /// whole fails only when the lines are invalid or fail to decode, or
    /// when the time list itself is malformed.
    pub fn propagate_batch(
        &self,
        line1: &str,
        line2: &str,
        times: &[f64],
    ) -> Result<Vec<PropagationOutcome>, ServiceError> {
        self.propagate_batch_with_metrics(line1, line2, times)
            .map(|(outcomes, _)| outcomes)
    }

    /// [`propagate_batch`](Self::propagate_batch), also reporting the
    /// engine's per-call metrics.
    pub fn propagate_batch_with_metrics(
        &self,
        line1: &str,
        line2: &str,
        times: &[f64],
    ) -> Result<(Vec<PropagationOutcome>, BatchMetrics), ServiceError> {
        validate_lines(line1, line2)?;
        validate_batch_times(times)?;
        let satellite = Arc::new(Satellite::initialize(line1, line2)?);
        Ok(self.engine.propagate_batch(&satellite, times))
    }

    /// Copy of the decoded fields and retained input lines for a handle.
    pub fn handle_info(&self, id: SatelliteId) -> Result<HandleInfo, ServiceError> {
        let satellite = self.lookup(id)?;
        Ok(HandleInfo {
            elements: satellite.summary(),
            line1: satellite.elements().line1().to_owned(),
            line2: satellite.elements().line2().to_owned(),
        })
    }

    /// Release a handle.
    ///
    /// Idempotent at the contract level: a second release of the same id
    /// reports [`ServiceError::NotFound`], never a crash. The backing
    /// satellite is dropped when its last in-flight user finishes.
    pub fn release_handle(&self, id: SatelliteId) -> Result<(), ServiceError> {
        self.registry
            .remove(id)
            .map(drop)
            .ok_or(ServiceError::NotFound { id })
    }

    /// Number of live handles.
    pub fn live_handles(&self) -> usize {
        self.registry.len()
    }

    fn lookup(&self, id: SatelliteId) -> Result<Arc<Satellite>, ServiceError> {
        self.registry.get(id).ok_or(ServiceError::NotFound { id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_error_display_prefixes_the_phase() {
        let err = ServiceError::Validation(ValidationError::EmptyTimeList);
        assert_eq!(format!("{err}"), "validation: batch time list is empty");

        let err = ServiceError::NotFound {
            id: SatelliteId::from_u64(1),
        };
        assert!(format!("{err}").contains("0x"));
    }

    #[test]
    fn service_error_chains_sources() {
        use std::error::Error as _;
        let err = ServiceError::Propagation(PropagationError::Model {
            code: Some(4),
            detail: "diverged".into(),
        });
        assert!(err.source().is_some());
        let err = ServiceError::NotFound {
            id: SatelliteId::from_u64(7),
        };
        assert!(err.source().is_none());
    }
}
