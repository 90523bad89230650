//! Circuit state.
//!
//! # States
//! - Closed: normal operation, calls pass through
//! - Open: service assumed down, calls fail fast
//! - HalfOpen: probing whether the service recovered
//!
//! # Resolution
//! ```text
//! open marker | half-open marker | state
//! ------------+------------------+---------
//! present     | present          | Open (precedence)
//! present     | absent           | Open
//! absent      | present          | HalfOpen
//! absent      | absent           | Closed
//! ```
//!
//! The state is never stored; it is recomputed from marker presence on
//! every query.

use std::fmt;

/// Derived state of a service's circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CircuitState {
    Closed,
    Open,
    HalfOpen,
}

impl CircuitState {
    /// Resolve the state from marker presence.
    pub fn from_markers(open: bool, half_open: bool) -> Self {
        match (open, half_open) {
            (true, _) => CircuitState::Open,
            (false, true) => CircuitState::HalfOpen,
            (false, false) => CircuitState::Closed,
        }
    }

    /// Stable lowercase label, used in logs and metric labels.
    pub fn as_str(&self) -> &'static str {
        match self {
            CircuitState::Closed => "closed",
            CircuitState::Open => "open",
            CircuitState::HalfOpen => "half_open",
        }
    }

    /// Return true if calls should be rejected outright.
    pub fn is_open(&self) -> bool {
        *self == CircuitState::Open
    }
}

impl fmt::Display for CircuitState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
