//! Cache and aggregate ports - the seams of the dual-store consistency layer
//!
//! `CounterStore` is the key-value side (get / set / atomic increment / flush)
//! and `AggregateSource` is the relational ground truth the rebuild derives
//! from. Both are injected through `ServiceContext` so tests can substitute
//! in-memory implementations.

use async_trait::async_trait;

use crate::error::DomainError;

/// Result type for counter store operations
pub type StoreResult<T> = Result<T, DomainError>;

/// Key-value store holding aggregate counters (integers) and flags (booleans).
///
/// Counters have no expiry; they live until the next `flush_all` or explicit
/// overwrite. Absent keys are not errors: callers default counters to zero and
/// the theme flag to light mode.
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Unconditional overwrite. Used only by the rebuild.
    async fn set_counter(&self, key: &str, value: i64) -> StoreResult<()>;

    /// Read a counter. `None` means "never set since the last flush".
    async fn get_counter(&self, key: &str) -> StoreResult<Option<i64>>;

    /// Atomic fetch-and-add; returns the new value. Lost updates under
    /// concurrency are a correctness bug, not an approximation.
    async fn incr_by(&self, key: &str, delta: i64) -> StoreResult<i64>;

    /// Unconditional flag overwrite (theme preference).
    async fn set_flag(&self, key: &str, value: bool) -> StoreResult<()>;

    /// Read a flag. `None` means "never set since the last flush".
    async fn get_flag(&self, key: &str) -> StoreResult<Option<bool>>;

    /// Destroy every key in the store. First step of a rebuild only.
    async fn flush_all(&self) -> StoreResult<()>;
}

/// One (user ID, aggregate value) pair from a grouped query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserCount {
    pub user_id: i64,
    pub total: i64,
}

/// One (livestream ID, aggregate value) pair from a grouped query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LivestreamCount {
    pub livestream_id: i64,
    pub total: i64,
}

/// One (user ID, flag) pair from the theme table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserFlag {
    pub user_id: i64,
    pub value: bool,
}

/// Ground-truth aggregates read from the relational store in one consistent
/// snapshot. Empty vectors are valid (e.g. no user has set a theme yet).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateSnapshot {
    /// COUNT of reactions grouped by reacting user
    pub reactions_by_user: Vec<UserCount>,
    /// COUNT of reactions grouped by livestream
    pub reactions_by_livestream: Vec<LivestreamCount>,
    /// SUM of tip amounts grouped by tipping user
    pub tips_by_user: Vec<UserCount>,
    /// SUM of tip amounts grouped by livestream
    pub tips_by_livestream: Vec<LivestreamCount>,
    /// Every (user, dark_mode) theme row on record
    pub themes: Vec<UserFlag>,
}

impl AggregateSnapshot {
    /// Total number of cache writes this snapshot will produce
    pub fn len(&self) -> usize {
        self.reactions_by_user.len()
            + self.reactions_by_livestream.len()
            + self.tips_by_user.len()
            + self.tips_by_livestream.len()
            + self.themes.len()
    }

    /// True when the relational store held no aggregates at all
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Read side of the relational store: the five grouped-aggregation queries
/// the rebuild derives counters from.
#[async_trait]
pub trait AggregateSource: Send + Sync {
    /// Read all five aggregate groups as one consistent snapshot.
    async fn snapshot(&self) -> StoreResult<AggregateSnapshot>;
}
