//! Redis-backed counter store.
//!
//! Counters are plain integer values; flags are stored as `0`/`1` so the
//! whole namespace stays readable with `redis-cli GET`.

use async_trait::async_trait;
use redis::AsyncCommands;

use pipe_core::error::DomainError;
use pipe_core::traits::{CounterStore, StoreResult};

use crate::pool::{RedisPool, RedisPoolError};

/// Counter store backed by the shared Redis pool
#[derive(Debug, Clone)]
pub struct RedisCounterStore {
    pool: RedisPool,
}

impl RedisCounterStore {
    /// Create a new store on top of an existing pool
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self { pool }
    }

    async fn conn(&self) -> StoreResult<deadpool_redis::Connection> {
        self.pool.get().await.map_err(map_cache_error)
    }
}

fn map_cache_error(err: RedisPoolError) -> DomainError {
    DomainError::CacheError(err.to_string())
}

#[async_trait]
impl CounterStore for RedisCounterStore {
    async fn set_counter(&self, key: &str, value: i64) -> StoreResult<()> {
        let mut conn = self.conn().await?;
        conn.set::<_, _, ()>(key, value)
            .await
            .map_err(|e| map_cache_error(e.into()))?;
        Ok(())
    }

    async fn get_counter(&self, key: &str) -> StoreResult<Option<i64>> {
        let mut conn = self.conn().await?;
        let value: Option<i64> = conn
            .get(key)
            .await
            .map_err(|e| map_cache_error(e.into()))?;
        Ok(value)
    }

    async fn incr_by(&self, key: &str, delta: i64) -> StoreResult<i64> {
        let mut conn = self.conn().await?;
        // INCRBY creates the key at 0 when absent, so a miss still lands on
        // the right total once a rebuild has run.
        let value: i64 = conn
            .incr(key, delta)
            .await
            .map_err(|e| map_cache_error(e.into()))?;
        Ok(value)
    }

    async fn set_flag(&self, key: &str, value: bool) -> StoreResult<()> {
        let mut conn = self.conn().await?;
        conn.set::<_, _, ()>(key, i64::from(value))
            .await
            .map_err(|e| map_cache_error(e.into()))?;
        Ok(())
    }

    async fn get_flag(&self, key: &str) -> StoreResult<Option<bool>> {
        let mut conn = self.conn().await?;
        let value: Option<i64> = conn
            .get(key)
            .await
            .map_err(|e| map_cache_error(e.into()))?;
        Ok(value.map(|v| v != 0))
    }

    async fn flush_all(&self) -> StoreResult<()> {
        let mut conn = self.conn().await?;
        redis::cmd("FLUSHALL")
            .query_async::<()>(&mut conn)
            .await
            .map_err(|e| map_cache_error(e.into()))?;
        tracing::info!("Flushed counter store");
        Ok(())
    }
}
