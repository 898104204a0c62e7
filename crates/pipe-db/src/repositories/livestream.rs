//! PostgreSQL implementation of LivestreamRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use pipe_core::traits::{LivestreamRepository, RepoResult};
use pipe_core::Livestream;

use crate::models::LivestreamModel;

use super::error::map_db_error;

/// PostgreSQL implementation of LivestreamRepository
#[derive(Clone)]
pub struct PgLivestreamRepository {
    pool: PgPool,
}

impl PgLivestreamRepository {
    /// Create a new PgLivestreamRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LivestreamRepository for PgLivestreamRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Livestream>> {
        let result = sqlx::query_as::<_, LivestreamModel>(
            r#"
            SELECT id, user_id, title, description, start_at, end_at
            FROM livestreams
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Livestream::from))
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: i64) -> RepoResult<Vec<Livestream>> {
        let results = sqlx::query_as::<_, LivestreamModel>(
            r#"
            SELECT id, user_id, title, description, start_at, end_at
            FROM livestreams
            WHERE user_id = $1
            ORDER BY start_at
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Livestream::from).collect())
    }
}
