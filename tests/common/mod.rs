//! Shared store doubles for integration tests.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use ttl_circuit_breaker::store::{KeyStore, MemoryStore, StatusStore, StoreError, StoreResult};

/// A `MemoryStore` whose writes and reads can be switched to fail.
#[derive(Default)]
pub struct FlakyStore {
    pub inner: MemoryStore,
    failing: AtomicBool,
    failing_reads: AtomicBool,
    deletes: AtomicUsize,
    message: String,
}

impl FlakyStore {
    pub fn new(message: &str) -> Self {
        Self {
            inner: MemoryStore::new(),
            failing: AtomicBool::new(false),
            failing_reads: AtomicBool::new(false),
            deletes: AtomicUsize::new(0),
            message: message.to_string(),
        }
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn set_failing_reads(&self, failing: bool) {
        self.failing_reads.store(failing, Ordering::SeqCst);
    }

    /// Number of `delete_all` calls that reached the store.
    pub fn deletes(&self) -> usize {
        self.deletes.load(Ordering::SeqCst)
    }

    fn check_reads(&self) -> StoreResult<()> {
        if self.failing_reads.load(Ordering::SeqCst) {
            Err(StoreError::new(self.message.clone()))
        } else {
            Ok(())
        }
    }

    fn check(&self) -> StoreResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            Err(StoreError::new(self.message.clone()))
        } else {
            Ok(())
        }
    }
}

impl KeyStore for FlakyStore {
    fn set_with_expiry(&self, key: &str, value: &str, ttl_secs: u64) -> StoreResult<()> {
        self.check()?;
        self.inner.set_with_expiry(key, value, ttl_secs)
    }

    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        self.check_reads()?;
        self.inner.get(key)
    }

    fn delete_all(&self, keys: &[String]) -> StoreResult<()> {
        self.deletes.fetch_add(1, Ordering::SeqCst);
        self.check()?;
        self.inner.delete_all(keys)
    }

    fn keys_matching(&self, pattern: &str) -> StoreResult<Vec<String>> {
        self.check_reads()?;
        self.inner.keys_matching(pattern)
    }
}

/// A status-returning client over a `MemoryStore`, failing every write.
pub struct ReadOnlyClient {
    pub inner: MemoryStore,
    pub last_error_calls: usize,
}

impl ReadOnlyClient {
    pub fn new() -> Self {
        Self {
            inner: MemoryStore::new(),
            last_error_calls: 0,
        }
    }
}

impl StatusStore for ReadOnlyClient {
    fn set(&mut self, _key: &str, _value: &str, _ttl_secs: u64) -> bool {
        false
    }

    fn get(&mut self, key: &str) -> Option<String> {
        self.inner.get(key).ok().flatten()
    }

    fn del(&mut self, _keys: &[String]) -> bool {
        false
    }

    fn keys(&mut self, pattern: &str) -> Vec<String> {
        self.inner.keys_matching(pattern).unwrap_or_default()
    }

    fn last_error(&mut self) -> String {
        self.last_error_calls += 1;
        "READONLY You can't write against a read only replica.".to_string()
    }
}
