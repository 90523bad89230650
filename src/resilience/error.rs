//! Breaker error definitions.

use thiserror::Error;

use crate::store::StoreError;

/// Errors surfaced by circuit breaker operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BreakerError {
    /// The backing store rejected an operation. Carries the store's message.
    #[error("{0}")]
    Adapter(String),
}

impl BreakerError {
    /// The store's diagnostic text.
    pub fn message(&self) -> &str {
        match self {
            BreakerError::Adapter(message) => message,
        }
    }
}

impl From<StoreError> for BreakerError {
    fn from(err: StoreError) -> Self {
        BreakerError::Adapter(err.message)
    }
}

/// Result type for breaker operations.
pub type BreakerResult<T> = Result<T, BreakerError>;
