//! # pipe-cache
//!
//! Cache layer providing the Redis-backed counter store and the key
//! namespace the aggregate mirror lives under.
//!
//! ## Overview
//!
//! This crate implements the `CounterStore` port from `pipe-core` on top of
//! a deadpool-managed Redis pool. It also ships an in-process
//! `MemoryCounterStore` used by service-level tests.

pub mod counters;
pub mod keys;
pub mod pool;

// Re-export commonly used types
pub use counters::{MemoryCounterStore, RedisCounterStore};
pub use keys::{
    livestream_reactions_key, livestream_tips_key, theme_dark_key, total_reactions_key,
    total_tips_key,
};
pub use pool::{RedisPool, RedisPoolConfig, RedisPoolError, RedisResult, SharedRedisPool};
