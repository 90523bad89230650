//! Breaker metrics.
//!
//! # Metrics
//! - `circuit_breaker_failures_recorded_total` (counter): failure markers written, by service
//! - `circuit_breaker_transitions_total` (counter): markers set or cleared, by service and target state
//! - `circuit_breaker_state_reads_total` (counter): resolved states, by state
//! - `circuit_breaker_adapter_errors_total` (counter): store failures, by operation

use metrics::counter;

use crate::resilience::CircuitState;

/// Record a newly written failure marker.
pub fn record_failure(service: &str) {
    counter!("circuit_breaker_failures_recorded_total", "service" => service.to_string())
        .increment(1);
}

/// Record a requested state change.
pub fn record_transition(service: &str, to: CircuitState) {
    counter!(
        "circuit_breaker_transitions_total",
        "service" => service.to_string(),
        "to" => to.as_str()
    )
    .increment(1);
}

/// Record the outcome of a state query.
pub fn record_state_read(state: CircuitState) {
    counter!("circuit_breaker_state_reads_total", "state" => state.as_str()).increment(1);
}

/// Record a failed store operation.
pub fn record_adapter_error(operation: &'static str) {
    counter!("circuit_breaker_adapter_errors_total", "operation" => operation).increment(1);
}
