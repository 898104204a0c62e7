//! PostgreSQL implementation of TipRepository
//!
//! Tip rows are immutable monetary events; the repository only inserts and
//! lists. Aggregate sums live in `PgAggregateSource`.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use pipe_core::traits::{RepoResult, TipRepository};
use pipe_core::{NewTip, Tip};

use crate::models::TipModel;

use super::error::map_db_error;

/// PostgreSQL implementation of TipRepository
#[derive(Clone)]
pub struct PgTipRepository {
    pool: PgPool,
}

impl PgTipRepository {
    /// Create a new PgTipRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TipRepository for PgTipRepository {
    #[instrument(skip(self))]
    async fn create(&self, tip: &NewTip) -> RepoResult<Tip> {
        let result = sqlx::query_as::<_, TipModel>(
            r#"
            INSERT INTO tips (user_id, livestream_id, amount, created_at)
            VALUES ($1, $2, $3, NOW())
            RETURNING id, user_id, livestream_id, amount, created_at
            "#,
        )
        .bind(tip.user_id)
        .bind(tip.livestream_id)
        .bind(tip.amount)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Tip::from(result))
    }

    #[instrument(skip(self))]
    async fn find_by_livestream(&self, livestream_id: i64) -> RepoResult<Vec<Tip>> {
        let results = sqlx::query_as::<_, TipModel>(
            r#"
            SELECT id, user_id, livestream_id, amount, created_at
            FROM tips
            WHERE livestream_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(livestream_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Tip::from).collect())
    }
}
