//! Circuit breaker backed by a shared TTL store.
//!
//! # Markers
//! - Failure: one key per recorded failure, expiring after the failure window
//! - Open: present while the circuit is open, expiring after the open period
//! - Half-open: present while probing, expiring after the probe period
//!
//! # State Transitions
//! ```text
//! Closed → Open: caller sees get_total_failures >= threshold, calls open_circuit
//! Open → Closed: open marker expires (or close_circuit)
//! Closed → Half-Open: caller calls set_circuit_half_open after the open period
//! Half-Open → Closed: probe succeeds, caller calls close_circuit
//! Half-Open → Open: probe fails, caller calls open_circuit
//! ```
//!
//! # Design Decisions
//! - Any number of processes may share one store; they agree on state without sharing a clock
//! - `close_circuit` enumerates then deletes, so a failure recorded in between may survive
//! - Every mutation returns its store error; `close_circuit` also logs it for best-effort callers

use crate::config::BreakerConfig;
use crate::keys::{KeyNamer, NamespacedKeys};
use crate::observability::metrics;
use crate::resilience::error::{BreakerError, BreakerResult};
use crate::resilience::state::CircuitState;
use crate::store::{KeyStore, StoreError};

/// Value written to every marker. Only presence matters.
const MARKER_VALUE: &str = "1";

/// Marker-driven circuit breaker.
///
/// Holds no state of its own; share it behind an `Arc` or build one per
/// caller over the same store.
#[derive(Debug, Clone)]
pub struct CircuitBreaker<S, K = NamespacedKeys> {
    store: S,
    keys: K,
}

impl<S: KeyStore> CircuitBreaker<S> {
    /// Create a breaker using the default key namespace.
    pub fn with_store(store: S) -> Self {
        Self::new(store, NamespacedKeys::default())
    }

    /// Create a breaker using the configured key namespace.
    pub fn from_config(store: S, config: &BreakerConfig) -> Self {
        Self::new(store, NamespacedKeys::from_config(&config.keys))
    }
}

impl<S: KeyStore, K: KeyNamer> CircuitBreaker<S, K> {
    /// Create a breaker over an explicit store handle and key namer.
    pub fn new(store: S, keys: K) -> Self {
        Self { store, keys }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn keys(&self) -> &K {
        &self.keys
    }

    /// Record one failure of `service`, counted for `time_window_secs`.
    pub fn add_failure(&self, service: &str, time_window_secs: u64) -> BreakerResult<()> {
        let key = self.keys.failure_store_key(service);
        self.store
            .set_with_expiry(&key, MARKER_VALUE, time_window_secs)
            .map_err(|e| adapter_failure("add_failure", service, e))?;

        metrics::record_failure(service);
        tracing::debug!(service, ttl_secs = time_window_secs, "Failure recorded");
        Ok(())
    }

    /// Open the circuit of `service` for `time_open_secs`.
    pub fn open_circuit(&self, service: &str, time_open_secs: u64) -> BreakerResult<()> {
        let key = self.keys.open_key(service);
        self.store
            .set_with_expiry(&key, MARKER_VALUE, time_open_secs)
            .map_err(|e| adapter_failure("open_circuit", service, e))?;

        metrics::record_transition(service, CircuitState::Open);
        tracing::info!(service, ttl_secs = time_open_secs, "Circuit opened");
        Ok(())
    }

    /// Mark the circuit of `service` half-open for `time_open_secs`.
    pub fn set_circuit_half_open(&self, service: &str, time_open_secs: u64) -> BreakerResult<()> {
        let key = self.keys.half_open_key(service);
        self.store
            .set_with_expiry(&key, MARKER_VALUE, time_open_secs)
            .map_err(|e| adapter_failure("set_circuit_half_open", service, e))?;

        metrics::record_transition(service, CircuitState::HalfOpen);
        tracing::info!(service, ttl_secs = time_open_secs, "Circuit half-open");
        Ok(())
    }

    /// Close the circuit of `service` and forget its recorded failures.
    ///
    /// Deletes the open and half-open markers together with every failure
    /// marker live at enumeration time, in a single bulk delete.
    pub fn close_circuit(&self, service: &str) -> BreakerResult<()> {
        let failures = self
            .store
            .keys_matching(&self.keys.failure_search_pattern(service))
            .map_err(|e| adapter_failure("close_circuit", service, e))?;

        let mut doomed = Vec::with_capacity(failures.len() + 2);
        doomed.push(self.keys.open_key(service));
        doomed.push(self.keys.half_open_key(service));
        doomed.extend(failures);

        self.store
            .delete_all(&doomed)
            .map_err(|e| adapter_failure("close_circuit", service, e))?;

        metrics::record_transition(service, CircuitState::Closed);
        tracing::info!(service, failures_cleared = doomed.len() - 2, "Circuit closed");
        Ok(())
    }

    /// Number of failures of `service` still inside their window.
    pub fn get_total_failures(&self, service: &str) -> BreakerResult<u64> {
        let failures = self
            .store
            .keys_matching(&self.keys.failure_search_pattern(service))
            .map_err(|e| adapter_failure("get_total_failures", service, e))?;

        Ok(failures.len() as u64)
    }

    /// Current state of `service`, resolved from its markers.
    pub fn get_state(&self, service: &str) -> BreakerResult<CircuitState> {
        let half_open = self
            .store
            .get(&self.keys.half_open_key(service))
            .map_err(|e| adapter_failure("get_state", service, e))?
            .is_some();
        let open = self
            .store
            .get(&self.keys.open_key(service))
            .map_err(|e| adapter_failure("get_state", service, e))?
            .is_some();

        if open && half_open {
            tracing::warn!(service, "Both open and half-open markers present, reporting open");
        }

        let state = CircuitState::from_markers(open, half_open);
        metrics::record_state_read(state);
        tracing::trace!(service, state = %state, "Circuit state resolved");
        Ok(state)
    }
}

fn adapter_failure(operation: &'static str, service: &str, err: StoreError) -> BreakerError {
    metrics::record_adapter_error(operation);
    tracing::warn!(operation, service, error = %err, "Store operation failed");
    err.into()
}
