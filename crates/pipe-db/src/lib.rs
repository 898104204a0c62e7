//! # pipe-db
//!
//! Database layer implementing the repository and aggregate-source traits
//! with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for the ports defined in
//! `pipe-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Repository implementations for users, livestreams, reactions, tips,
//!   livecomments, and themes
//! - The grouped-aggregation snapshot the cache rebuild derives from

pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    PgAggregateSource, PgLivecommentRepository, PgLivestreamRepository, PgReactionRepository,
    PgThemeRepository, PgTipRepository, PgUserRepository,
};
