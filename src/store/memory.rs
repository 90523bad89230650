//! In-process TTL store.
//!
//! # Responsibilities
//! - Hold markers with an absolute expiry deadline
//! - Hide expired entries from every read (lazy eviction)
//! - Enumerate live keys by glob pattern
//!
//! # Design Decisions
//! - `DashMap` for lock-sharded concurrent access; handles are shared via `Arc`
//! - No background sweeper: expired entries are dropped when touched or scanned
//! - A manual clock offset lets tests move time forward without sleeping

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use dashmap::DashMap;

use crate::store::pattern::glob_match;
use crate::store::{KeyStore, StoreError, StoreResult};

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expires_at: Instant,
}

/// A thread-safe in-memory `KeyStore` with TTL expiry.
#[derive(Debug)]
pub struct MemoryStore {
    entries: DashMap<String, Entry>,
    /// Milliseconds added to the wall clock (see [`MemoryStore::advance`]).
    offset_ms: AtomicU64,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            offset_ms: AtomicU64::new(0),
        }
    }

    /// Move this store's clock forward by `by`.
    pub fn advance(&self, by: Duration) {
        let ms = u64::try_from(by.as_millis()).unwrap_or(u64::MAX);
        self.offset_ms.fetch_add(ms, Ordering::SeqCst);
    }

    /// Number of live (unexpired) entries.
    pub fn len(&self) -> usize {
        let now = self.now();
        self.entries.iter().filter(|e| e.value().expires_at > now).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every expired entry. Returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        let now = self.now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| entry.expires_at > now);
        before.saturating_sub(self.entries.len())
    }

    fn now(&self) -> Instant {
        Instant::now() + Duration::from_millis(self.offset_ms.load(Ordering::SeqCst))
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyStore for MemoryStore {
    fn set_with_expiry(&self, key: &str, value: &str, ttl_secs: u64) -> StoreResult<()> {
        if ttl_secs == 0 {
            return Err(StoreError::new("invalid expire time in 'set' command"));
        }

        let expires_at = self.now() + Duration::from_secs(ttl_secs);
        self.entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at,
            },
        );
        Ok(())
    }

    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let now = self.now();
        // The read guard must be released before `remove_if` locks the shard.
        let live = self.entries.get(key).map(|e| {
            let entry = e.value();
            (entry.expires_at > now).then(|| entry.value.clone())
        });

        match live {
            Some(Some(value)) => Ok(Some(value)),
            Some(None) => {
                self.entries.remove_if(key, |_, entry| entry.expires_at <= now);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    fn delete_all(&self, keys: &[String]) -> StoreResult<()> {
        for key in keys {
            self.entries.remove(key);
        }
        Ok(())
    }

    fn keys_matching(&self, pattern: &str) -> StoreResult<Vec<String>> {
        let now = self.now();
        Ok(self
            .entries
            .iter()
            .filter(|e| e.value().expires_at > now && glob_match(pattern, e.key()))
            .map(|e| e.key().clone())
            .collect())
    }
}
