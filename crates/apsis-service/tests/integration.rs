//! Integration tests for the service boundary.
//!
//! These exercise the full stack — validation, decode, registry, batch
//! engine — through `OrbitService`, not the components in isolation.

use apsis_core::{ElementsError, ValidationError};
use apsis_engine::{BatchConfig, ExecutionStrategy};
use apsis_service::{OrbitService, SatelliteId, ServiceError};
use apsis_test_utils::{
    assert_vec3_close, GEO_LINE1, GEO_LINE2, LEO_LINE1, LEO_LINE2, VERIF_LINE1, VERIF_LINE2,
    VERIF_POSITION_T0_KM,
};

fn service() -> OrbitService {
    OrbitService::new().unwrap()
}

fn sequential_service() -> OrbitService {
    OrbitService::with_config(&BatchConfig {
        strategy: ExecutionStrategy::Sequential,
        worker_count: None,
    })
    .unwrap()
}

// ── Cross-path equivalence ───────────────────────────────────────

#[test]
fn handle_path_matches_single_shot() {
    let service = service();
    let id = service.create_handle(LEO_LINE1, LEO_LINE2).unwrap();

    for offset in [-3600.0, 0.0, 90.0 * 60.0, 86_400.0] {
        let once = service.propagate_once(LEO_LINE1, LEO_LINE2, offset).unwrap();
        let via_handle = service.propagate_handle(id, offset).unwrap();
        // Same decode, same template, same code path: exact equality.
        assert_eq!(once, via_handle);
    }
}

#[test]
fn batch_matches_single_shot_per_index() {
    for service in [service(), sequential_service()] {
        let times: Vec<f64> = (0..24).map(|i| f64::from(i) * 450.0 - 3600.0).collect();
        let outcomes = service.propagate_batch(LEO_LINE1, LEO_LINE2, &times).unwrap();
        assert_eq!(outcomes.len(), times.len());

        for (index, outcome) in outcomes.iter().enumerate() {
            let single = service
                .propagate_once(LEO_LINE1, LEO_LINE2, times[index])
                .unwrap();
            assert_eq!(outcome.as_ref().unwrap(), &single, "index {index}");
        }
    }
}

#[test]
fn deep_space_batch_is_strategy_independent() {
    let parallel = service();
    let sequential = sequential_service();
    let times: Vec<f64> = (0..12).map(|i| f64::from(i) * 7200.0).collect();

    let a = parallel.propagate_batch(GEO_LINE1, GEO_LINE2, &times).unwrap();
    let b = sequential.propagate_batch(GEO_LINE1, GEO_LINE2, &times).unwrap();
    assert_eq!(a, b);
}

// ── Golden regression ────────────────────────────────────────────

#[test]
fn verification_object_at_epoch_matches_reference() {
    let service = service();
    let state = service.propagate_once(VERIF_LINE1, VERIF_LINE2, 0.0).unwrap();
    let expected_m = VERIF_POSITION_T0_KM.map(|c| c * 1000.0);
    assert_vec3_close(state.position_m, expected_m, 1e-3);
}

// ── Handle lifecycle ─────────────────────────────────────────────

#[test]
fn handle_info_round_trips_lines_byte_for_byte() {
    let service = service();
    let id = service.create_handle(LEO_LINE1, LEO_LINE2).unwrap();
    let info = service.handle_info(id).unwrap();
    assert_eq!(info.line1, LEO_LINE1);
    assert_eq!(info.line2, LEO_LINE2);
    assert_eq!(info.elements.catalog_number, 30967);
}

#[test]
fn release_is_idempotent_at_the_contract_level() {
    let service = service();
    let id = service.create_handle(LEO_LINE1, LEO_LINE2).unwrap();
    assert!(service.release_handle(id).is_ok());
    match service.release_handle(id) {
        Err(ServiceError::NotFound { .. }) => {}
        other => panic!("expected NotFound on double release, got {other:?}"),
    }
}

#[test]
fn released_handle_misses_on_every_operation() {
    let service = service();
    let id = service.create_handle(LEO_LINE1, LEO_LINE2).unwrap();
    service.release_handle(id).unwrap();

    assert!(matches!(
        service.propagate_handle(id, 0.0),
        Err(ServiceError::NotFound { .. })
    ));
    assert!(matches!(
        service.handle_info(id),
        Err(ServiceError::NotFound { .. })
    ));
}

#[test]
fn never_issued_id_reports_not_found() {
    let service = service();
    let bogus = SatelliteId::from_u64(u64::MAX);
    assert!(matches!(
        service.propagate_handle(bogus, 0.0),
        Err(ServiceError::NotFound { .. })
    ));
}

#[test]
fn live_handle_count_tracks_create_and_release() {
    let service = service();
    assert_eq!(service.live_handles(), 0);
    let a = service.create_handle(LEO_LINE1, LEO_LINE2).unwrap();
    let b = service.create_handle(GEO_LINE1, GEO_LINE2).unwrap();
    assert_eq!(service.live_handles(), 2);
    service.release_handle(a).unwrap();
    assert_eq!(service.live_handles(), 1);
    service.release_handle(b).unwrap();
    assert_eq!(service.live_handles(), 0);
}

#[test]
fn each_create_returns_a_distinct_id() {
    let service = service();
    let a = service.create_handle(LEO_LINE1, LEO_LINE2).unwrap();
    let b = service.create_handle(LEO_LINE1, LEO_LINE2).unwrap();
    assert_ne!(a, b, "same lines still get distinct handles");
}

#[test]
fn failed_create_registers_nothing() {
    let service = service();
    let result = service.create_handle("garbage", "lines");
    assert!(result.is_err());
    assert_eq!(service.live_handles(), 0);
}

// ── Validation boundaries ────────────────────────────────────────

#[test]
fn record_length_boundary_is_exact() {
    let service = service();
    let just_right = "x".repeat(69);
    let too_long = "x".repeat(70);

    // 69 bytes passes shape validation and fails later, in the decoder.
    match service.propagate_once(&just_right, &just_right, 0.0) {
        Err(ServiceError::Initialization(ElementsError::Unparsable { .. })) => {}
        other => panic!("expected decode failure, got {other:?}"),
    }
    match service.propagate_once(&too_long, &just_right, 0.0) {
        Err(ServiceError::Validation(ValidationError::LineTooLong { line: 1, length: 70 })) => {}
        other => panic!("expected LineTooLong, got {other:?}"),
    }
}

#[test]
fn empty_batch_is_rejected_before_decode() {
    let service = service();
    match service.propagate_batch(LEO_LINE1, LEO_LINE2, &[]) {
        Err(ServiceError::Validation(ValidationError::EmptyTimeList)) => {}
        other => panic!("expected EmptyTimeList, got {other:?}"),
    }
}

#[test]
fn non_finite_batch_entry_is_rejected_with_index() {
    let service = service();
    match service.propagate_batch(LEO_LINE1, LEO_LINE2, &[0.0, 60.0, f64::NAN]) {
        Err(ServiceError::Validation(ValidationError::NonFiniteTime { index: 2, .. })) => {}
        other => panic!("expected NonFiniteTime at 2, got {other:?}"),
    }
}

#[test]
fn batch_with_undecodable_lines_fails_as_a_whole() {
    let service = service();
    match service.propagate_batch("garbage", "lines", &[0.0, 60.0]) {
        Err(ServiceError::Initialization(_)) => {}
        other => panic!("expected Initialization, got {other:?}"),
    }
}

// ── Metrics ──────────────────────────────────────────────────────

#[test]
fn batch_metrics_count_items_and_failures() {
    let service = service();
    let times = [0.0, 3600.0, 7200.0];
    let (outcomes, metrics) = service
        .propagate_batch_with_metrics(LEO_LINE1, LEO_LINE2, &times)
        .unwrap();
    assert_eq!(outcomes.len(), 3);
    assert_eq!(metrics.items, 3);
    assert_eq!(metrics.failures, 0);
    assert!(metrics.workers >= 1);
}
