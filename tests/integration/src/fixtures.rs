//! Test fixtures and data generators
//!
//! The API has no account-creation surface, so users and livestreams are
//! seeded straight into PostgreSQL.

use std::sync::atomic::{AtomicU64, Ordering};

use anyhow::Result;
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Connect to the test database
pub async fn test_pool() -> Result<PgPool> {
    Ok(pipe_db::create_pool_from_env().await?)
}

/// Insert a user row with a unique login name; returns (id, name)
pub async fn seed_user(pool: &PgPool) -> Result<(i64, String)> {
    let name = format!("testuser{}", unique_suffix());
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO users (name, display_name, description) VALUES ($1, $2, '') RETURNING id",
    )
    .bind(&name)
    .bind(&name)
    .fetch_one(pool)
    .await?;
    Ok((id, name))
}

/// Insert a livestream row owned by the given user; returns its id
pub async fn seed_livestream(pool: &PgPool, user_id: i64) -> Result<i64> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO livestreams (user_id, title, description, start_at, end_at) \
         VALUES ($1, 'test stream', '', NOW(), NOW() + INTERVAL '2 hours') RETURNING id",
    )
    .bind(user_id)
    .fetch_one(pool)
    .await?;
    Ok(id)
}

/// Reaction post body
#[derive(Debug, Serialize)]
pub struct PostReaction {
    pub user_id: i64,
    pub emoji: String,
}

/// Tip post body
#[derive(Debug, Serialize)]
pub struct PostTip {
    pub user_id: i64,
    pub amount: i64,
}

/// Livecomment post body
#[derive(Debug, Serialize)]
pub struct PostLivecomment {
    pub user_id: i64,
    pub comment: String,
}

/// Theme post body
#[derive(Debug, Serialize)]
pub struct PostTheme {
    pub dark_mode: bool,
}

/// Reaction as returned by the API
#[derive(Debug, Deserialize)]
pub struct ReactionBody {
    pub id: i64,
    pub user_id: i64,
    pub livestream_id: i64,
    pub emoji: String,
}

/// Tip as returned by the API
#[derive(Debug, Deserialize)]
pub struct TipBody {
    pub id: i64,
    pub user_id: i64,
    pub livestream_id: i64,
    pub amount: i64,
}

/// Statistics as returned by the API
#[derive(Debug, Deserialize)]
pub struct StatisticsBody {
    pub total_reactions: i64,
    pub total_tips: i64,
}

/// Theme as returned by the API
#[derive(Debug, Deserialize)]
pub struct ThemeBody {
    pub dark_mode: bool,
}

/// Initialize response body
#[derive(Debug, Deserialize)]
pub struct InitializeBody {
    pub language: String,
}
