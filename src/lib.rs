//! Distributed circuit breaker over a TTL key-value store.
//!
//! # Architecture Overview
//!
//! ```text
//!   caller policy (thresholds, timing, whether to call)
//!        │
//!        ▼
//!   ┌──────────────────┐    ┌──────────┐
//!   │  CircuitBreaker  │───▶│ KeyNamer │  <ns>:<service>:{total_failures:<id>|open|half_open}
//!   │  (resilience)    │    └──────────┘
//!   └────────┬─────────┘
//!            │ set_with_expiry / get / delete_all / keys_matching
//!            ▼
//!   ┌──────────────────┐
//!   │     KeyStore     │  MemoryStore, StatusAdapter<client>, or your own
//!   └──────────────────┘
//! ```
//!
//! All state lives in the store as markers with a TTL. Processes sharing a
//! store share the circuit; expiry is the only clock.
//!
//! ```
//! use ttl_circuit_breaker::{CircuitBreaker, CircuitState, MemoryStore};
//!
//! let breaker = CircuitBreaker::with_store(MemoryStore::new());
//! breaker.add_failure("payments", 40)?;
//! breaker.add_failure("payments", 40)?;
//! assert_eq!(breaker.get_total_failures("payments")?, 2);
//!
//! breaker.open_circuit("payments", 40)?;
//! assert_eq!(breaker.get_state("payments")?, CircuitState::Open);
//!
//! breaker.close_circuit("payments")?;
//! assert_eq!(breaker.get_state("payments")?, CircuitState::Closed);
//! # Ok::<(), ttl_circuit_breaker::BreakerError>(())
//! ```

// Core
pub mod keys;
pub mod resilience;
pub mod store;

// Cross-cutting concerns
pub mod config;
pub mod observability;

pub use config::BreakerConfig;
pub use keys::{KeyNamer, NamespacedKeys};
pub use resilience::{BreakerError, BreakerResult, CircuitBreaker, CircuitState};
pub use store::{KeyStore, MemoryStore, StatusAdapter, StatusStore, StoreError};
