//! PostgreSQL implementation of LivecommentRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use pipe_core::traits::{LivecommentRepository, RepoResult};
use pipe_core::{Livecomment, NewLivecomment};

use crate::models::LivecommentModel;

use super::error::map_db_error;

/// PostgreSQL implementation of LivecommentRepository
#[derive(Clone)]
pub struct PgLivecommentRepository {
    pool: PgPool,
}

impl PgLivecommentRepository {
    /// Create a new PgLivecommentRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LivecommentRepository for PgLivecommentRepository {
    #[instrument(skip(self))]
    async fn create(&self, comment: &NewLivecomment) -> RepoResult<Livecomment> {
        let result = sqlx::query_as::<_, LivecommentModel>(
            r#"
            INSERT INTO livecomments (user_id, livestream_id, comment, created_at)
            VALUES ($1, $2, $3, NOW())
            RETURNING id, user_id, livestream_id, comment, created_at
            "#,
        )
        .bind(comment.user_id)
        .bind(comment.livestream_id)
        .bind(&comment.comment)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Livecomment::from(result))
    }

    #[instrument(skip(self))]
    async fn find_by_livestream(
        &self,
        livestream_id: i64,
        limit: Option<i64>,
    ) -> RepoResult<Vec<Livecomment>> {
        let results = match limit {
            Some(limit) => {
                let limit = limit.clamp(1, 100);
                sqlx::query_as::<_, LivecommentModel>(
                    r#"
                    SELECT id, user_id, livestream_id, comment, created_at
                    FROM livecomments
                    WHERE livestream_id = $1
                    ORDER BY created_at DESC
                    LIMIT $2
                    "#,
                )
                .bind(livestream_id)
                .bind(limit)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, LivecommentModel>(
                    r#"
                    SELECT id, user_id, livestream_id, comment, created_at
                    FROM livecomments
                    WHERE livestream_id = $1
                    ORDER BY created_at DESC
                    "#,
                )
                .bind(livestream_id)
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Livecomment::from).collect())
    }
}
