//! In-memory counter store.
//!
//! Behaves like the Redis store but keeps everything in a mutex-guarded map.
//! Increments are atomic because the lock is held for the whole
//! read-modify-write.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use pipe_core::error::DomainError;
use pipe_core::traits::{CounterStore, StoreResult};

/// Counter store backed by an in-process map
#[derive(Debug, Default)]
pub struct MemoryCounterStore {
    entries: Mutex<HashMap<String, i64>>,
}

impl MemoryCounterStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored
    pub fn len(&self) -> usize {
        self.lock().map(|m| m.len()).unwrap_or(0)
    }

    /// Whether the store holds no keys
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> StoreResult<std::sync::MutexGuard<'_, HashMap<String, i64>>> {
        self.entries
            .lock()
            .map_err(|_| DomainError::CacheError("counter store lock poisoned".to_string()))
    }
}

#[async_trait]
impl CounterStore for MemoryCounterStore {
    async fn set_counter(&self, key: &str, value: i64) -> StoreResult<()> {
        self.lock()?.insert(key.to_string(), value);
        Ok(())
    }

    async fn get_counter(&self, key: &str) -> StoreResult<Option<i64>> {
        Ok(self.lock()?.get(key).copied())
    }

    async fn incr_by(&self, key: &str, delta: i64) -> StoreResult<i64> {
        let mut entries = self.lock()?;
        let value = entries.entry(key.to_string()).or_insert(0);
        *value += delta;
        Ok(*value)
    }

    async fn set_flag(&self, key: &str, value: bool) -> StoreResult<()> {
        self.lock()?.insert(key.to_string(), i64::from(value));
        Ok(())
    }

    async fn get_flag(&self, key: &str) -> StoreResult<Option<bool>> {
        Ok(self.lock()?.get(key).map(|v| *v != 0))
    }

    async fn flush_all(&self) -> StoreResult<()> {
        self.lock()?.clear();
        Ok(())
    }
}
