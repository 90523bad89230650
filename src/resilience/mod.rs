//! Resilience subsystem.
//!
//! # Data Flow
//! ```text
//! Caller observes a failed call to a service:
//!     → circuit_breaker.rs add_failure (new self-expiring failure marker)
//!     → get_total_failures over threshold? open_circuit (open marker, TTL)
//!
//! Caller asks whether to let a call through:
//!     → circuit_breaker.rs get_state
//!     → state.rs resolves Closed / Open / HalfOpen from marker presence
//! ```
//!
//! # Design Decisions
//! - No state is held in-process; every fact lives in the store with a TTL
//! - Store expiry replaces timers: open and half-open periods end on their own
//! - Transitions are not guarded; the caller owns the policy loop
//! - A store failure is surfaced once as `BreakerError::Adapter`, never retried

pub mod circuit_breaker;
pub mod error;
pub mod state;

pub use circuit_breaker::CircuitBreaker;
pub use error::{BreakerError, BreakerResult};
pub use state::CircuitState;
