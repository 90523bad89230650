//! Store failure translation.

use ttl_circuit_breaker::{
    BreakerError, CircuitBreaker, CircuitState, KeyStore, StatusAdapter,
};

mod common;

use common::{FlakyStore, ReadOnlyClient};

#[test]
fn test_failed_writes_raise_adapter_error() {
    let breaker = CircuitBreaker::with_store(FlakyStore::new("ERR connection reset"));
    breaker.store().set_failing(true);
    let expected = BreakerError::Adapter("ERR connection reset".into());

    assert_eq!(breaker.add_failure("svc", 40), Err(expected.clone()));
    assert_eq!(breaker.open_circuit("svc", 40), Err(expected.clone()));
    assert_eq!(breaker.set_circuit_half_open("svc", 40), Err(expected.clone()));

    // Nothing was written.
    assert!(breaker.store().inner.is_empty());
    assert_eq!(breaker.get_state("svc").unwrap(), CircuitState::Closed);
    assert_eq!(breaker.get_total_failures("svc").unwrap(), 0);
}

#[test]
fn test_failed_close_keeps_markers() {
    let breaker = CircuitBreaker::with_store(FlakyStore::new("ERR timeout"));
    breaker.add_failure("svc", 60).unwrap();
    breaker.open_circuit("svc", 60).unwrap();

    breaker.store().set_failing(true);
    let err = breaker.close_circuit("svc").unwrap_err();
    assert_eq!(err.to_string(), "ERR timeout");

    assert_eq!(breaker.get_state("svc").unwrap(), CircuitState::Open);
    assert_eq!(breaker.get_total_failures("svc").unwrap(), 1);

    breaker.store().set_failing(false);
    breaker.close_circuit("svc").unwrap();
    assert_eq!(breaker.get_state("svc").unwrap(), CircuitState::Closed);
}

#[test]
fn test_close_is_usable_as_best_effort() {
    let breaker = CircuitBreaker::with_store(FlakyStore::new("ERR"));
    breaker.store().set_failing(true);

    let _ = breaker.close_circuit("svc");
    assert_eq!(breaker.get_state("svc").unwrap(), CircuitState::Closed);
}

#[test]
fn test_status_client_errors_are_translated() {
    let breaker = CircuitBreaker::with_store(StatusAdapter::new(ReadOnlyClient::new()));

    let err = breaker.add_failure("svc", 40).unwrap_err();
    assert_eq!(
        err.message(),
        "READONLY You can't write against a read only replica."
    );
    let err = breaker.close_circuit("svc").unwrap_err();
    assert!(matches!(err, BreakerError::Adapter(_)));

    // Reads keep working against a read-only client.
    assert_eq!(breaker.get_state("svc").unwrap(), CircuitState::Closed);
    assert_eq!(breaker.get_total_failures("svc").unwrap(), 0);
}

#[test]
fn test_status_client_reads_existing_markers() {
    let client = ReadOnlyClient::new();
    client
        .inner
        .set_with_expiry("circuit_breaker:svc:half_open", "1", 30)
        .unwrap();
    client
        .inner
        .set_with_expiry("circuit_breaker:svc:total_failures:x", "1", 30)
        .unwrap();

    let adapter = StatusAdapter::new(client);
    let breaker = CircuitBreaker::with_store(&adapter);
    assert_eq!(breaker.get_state("svc").unwrap(), CircuitState::HalfOpen);
    assert_eq!(breaker.get_total_failures("svc").unwrap(), 1);

    assert!(breaker.open_circuit("svc", 30).is_err());
    drop(breaker);
    assert_eq!(adapter.into_inner().last_error_calls, 1);
}

#[test]
fn test_failed_reads_raise_adapter_error() {
    let breaker = CircuitBreaker::with_store(FlakyStore::new(
        "LOADING Redis is loading the dataset in memory",
    ));
    breaker.add_failure("svc", 60).unwrap();
    breaker.open_circuit("svc", 60).unwrap();
    breaker.store().set_failing_reads(true);
    let expected = BreakerError::Adapter("LOADING Redis is loading the dataset in memory".into());

    assert_eq!(breaker.get_state("svc"), Err(expected.clone()));
    assert_eq!(breaker.get_total_failures("svc"), Err(expected.clone()));
    assert_eq!(breaker.close_circuit("svc"), Err(expected));

    // Enumeration failed, so nothing was deleted.
    assert_eq!(breaker.store().deletes(), 0);
    breaker.store().set_failing_reads(false);
    assert_eq!(breaker.get_state("svc").unwrap(), CircuitState::Open);
    assert_eq!(breaker.get_total_failures("svc").unwrap(), 1);
}
