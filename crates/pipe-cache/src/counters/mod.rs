//! Counter store implementations
//!
//! `RedisCounterStore` is the production backend; `MemoryCounterStore` is an
//! in-process double with the same observable semantics, used in tests.

mod memory_store;
mod redis_store;

pub use memory_store::MemoryCounterStore;
pub use redis_store::RedisCounterStore;
