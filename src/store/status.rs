//! Adapter for status-returning store clients.
//!
//! Many key-value clients report a write as a plain `bool` and expose the
//! reason through a separate "last error" call on the same handle.
//! [`StatusAdapter`] turns that two-step protocol into [`KeyStore`]'s
//! `Result`s by fetching the last error right after a failed write or
//! delete, before anything else can use the handle through the adapter.

use std::sync::Mutex;

use crate::store::{KeyStore, StoreError, StoreResult};

/// A client that signals write failure with `false`.
pub trait StatusStore: Send {
    /// Write with expiry. `false` on failure.
    fn set(&mut self, key: &str, value: &str, ttl_secs: u64) -> bool;

    /// Read a key. Missing or expired yields `None`.
    fn get(&mut self, key: &str) -> Option<String>;

    /// Delete keys. `false` on failure.
    fn del(&mut self, keys: &[String]) -> bool;

    /// Live keys matching a glob pattern.
    fn keys(&mut self, pattern: &str) -> Vec<String>;

    /// Explanation for the most recent failed call.
    fn last_error(&mut self) -> String;
}

/// Exposes a [`StatusStore`] as a [`KeyStore`].
///
/// The client is held behind a mutex so the failed call and its
/// `last_error` lookup happen under one lock.
#[derive(Debug)]
pub struct StatusAdapter<T> {
    client: Mutex<T>,
}

impl<T: StatusStore> StatusAdapter<T> {
    pub fn new(client: T) -> Self {
        Self {
            client: Mutex::new(client),
        }
    }

    /// Recover the wrapped client.
    pub fn into_inner(self) -> T {
        self.client
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn with_client<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut client = self
            .client
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        f(&mut client)
    }
}

impl<T: StatusStore> KeyStore for StatusAdapter<T> {
    fn set_with_expiry(&self, key: &str, value: &str, ttl_secs: u64) -> StoreResult<()> {
        self.with_client(|client| {
            if client.set(key, value, ttl_secs) {
                Ok(())
            } else {
                Err(StoreError::new(client.last_error()))
            }
        })
    }

    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.with_client(|client| client.get(key)))
    }

    fn delete_all(&self, keys: &[String]) -> StoreResult<()> {
        self.with_client(|client| {
            if client.del(keys) {
                Ok(())
            } else {
                Err(StoreError::new(client.last_error()))
            }
        })
    }

    fn keys_matching(&self, pattern: &str) -> StoreResult<Vec<String>> {
        Ok(self.with_client(|client| client.keys(pattern)))
    }
}
