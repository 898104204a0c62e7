//! PostgreSQL implementation of ReactionRepository
//!
//! Reaction rows are immutable events; the repository only inserts and lists.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use pipe_core::traits::{ReactionRepository, RepoResult};
use pipe_core::{NewReaction, Reaction};

use crate::models::ReactionModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ReactionRepository
#[derive(Clone)]
pub struct PgReactionRepository {
    pool: PgPool,
}

impl PgReactionRepository {
    /// Create a new PgReactionRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReactionRepository for PgReactionRepository {
    #[instrument(skip(self))]
    async fn create(&self, reaction: &NewReaction) -> RepoResult<Reaction> {
        let result = sqlx::query_as::<_, ReactionModel>(
            r#"
            INSERT INTO reactions (user_id, livestream_id, emoji, created_at)
            VALUES ($1, $2, $3, NOW())
            RETURNING id, user_id, livestream_id, emoji, created_at
            "#,
        )
        .bind(reaction.user_id)
        .bind(reaction.livestream_id)
        .bind(&reaction.emoji)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Reaction::from(result))
    }

    #[instrument(skip(self))]
    async fn find_by_livestream(&self, livestream_id: i64) -> RepoResult<Vec<Reaction>> {
        let results = sqlx::query_as::<_, ReactionModel>(
            r#"
            SELECT id, user_id, livestream_id, emoji, created_at
            FROM reactions
            WHERE livestream_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(livestream_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Reaction::from).collect())
    }
}
