//! Key-value store capability.
//!
//! # Data Flow
//! ```text
//! CircuitBreaker
//!     → KeyStore (set_with_expiry / get / delete_all / keys_matching)
//!         → memory.rs   (in-process, DashMap + TTL)
//!         → status.rs   (adapts bool + last_error clients)
//!         → any external TTL store implementing the trait
//! ```
//!
//! # Design Decisions
//! - TTL expiry in the store is the breaker's only clock
//! - Every failure carries the store's own diagnostic text
//! - Absent keys are `Ok(None)`, never an error

pub mod memory;
pub mod pattern;
pub mod status;

use std::sync::Arc;

use thiserror::Error;

pub use memory::MemoryStore;
pub use status::{StatusAdapter, StatusStore};

/// A failed store operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct StoreError {
    /// Diagnostic text reported by the store.
    pub message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// A TTL-capable key-value store.
///
/// Implementations must be safe to share between threads; the breaker does
/// not serialize access.
pub trait KeyStore: Send + Sync {
    /// Write `value` under `key`, expiring after `ttl_secs`. Overwrites.
    fn set_with_expiry(&self, key: &str, value: &str, ttl_secs: u64) -> StoreResult<()>;

    /// Read `key`. Expired and never-set keys are both `None`.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;

    /// Delete every key in `keys`. Missing keys are ignored.
    fn delete_all(&self, keys: &[String]) -> StoreResult<()>;

    /// Live keys matching a glob `pattern`.
    fn keys_matching(&self, pattern: &str) -> StoreResult<Vec<String>>;
}

impl<T: KeyStore + ?Sized> KeyStore for &T {
    fn set_with_expiry(&self, key: &str, value: &str, ttl_secs: u64) -> StoreResult<()> {
        (**self).set_with_expiry(key, value, ttl_secs)
    }

    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn delete_all(&self, keys: &[String]) -> StoreResult<()> {
        (**self).delete_all(keys)
    }

    fn keys_matching(&self, pattern: &str) -> StoreResult<Vec<String>> {
        (**self).keys_matching(pattern)
    }
}

impl<T: KeyStore + ?Sized> KeyStore for Arc<T> {
    fn set_with_expiry(&self, key: &str, value: &str, ttl_secs: u64) -> StoreResult<()> {
        (**self).set_with_expiry(key, value, ttl_secs)
    }

    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn delete_all(&self, keys: &[String]) -> StoreResult<()> {
        (**self).delete_all(keys)
    }

    fn keys_matching(&self, pattern: &str) -> StoreResult<Vec<String>> {
        (**self).keys_matching(pattern)
    }
}

impl<T: KeyStore + ?Sized> KeyStore for Box<T> {
    fn set_with_expiry(&self, key: &str, value: &str, ttl_secs: u64) -> StoreResult<()> {
        (**self).set_with_expiry(key, value, ttl_secs)
    }

    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn delete_all(&self, keys: &[String]) -> StoreResult<()> {
        (**self).delete_all(keys)
    }

    fn keys_matching(&self, pattern: &str) -> StoreResult<Vec<String>> {
        (**self).keys_matching(pattern)
    }
}
