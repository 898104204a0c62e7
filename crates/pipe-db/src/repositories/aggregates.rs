//! PostgreSQL implementation of AggregateSource
//!
//! The five grouped-aggregation reads the cache rebuild derives counters
//! from. All five run inside one REPEATABLE READ transaction so the rebuild
//! integrates a single consistent snapshot of the relational store even if
//! writes race it.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use pipe_core::traits::StoreResult;
use pipe_core::{AggregateSnapshot, AggregateSource, LivestreamCount, UserCount, UserFlag};

use crate::models::{LivestreamTotalModel, UserThemeModel, UserTotalModel};

use super::error::map_db_error;

/// PostgreSQL implementation of AggregateSource
#[derive(Clone)]
pub struct PgAggregateSource {
    pool: PgPool,
}

impl PgAggregateSource {
    /// Create a new PgAggregateSource
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AggregateSource for PgAggregateSource {
    #[instrument(skip(self))]
    async fn snapshot(&self) -> StoreResult<AggregateSnapshot> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query("SET TRANSACTION ISOLATION LEVEL REPEATABLE READ")
            .execute(&mut *tx)
            .await
            .map_err(map_db_error)?;

        let reactions_by_user: Vec<UserCount> = sqlx::query_as::<_, UserTotalModel>(
            r#"
            SELECT user_id, COUNT(*) AS total
            FROM reactions
            GROUP BY user_id
            "#,
        )
        .fetch_all(&mut *tx)
        .await
        .map_err(map_db_error)?
        .into_iter()
        .map(UserCount::from)
        .collect();

        let reactions_by_livestream: Vec<LivestreamCount> =
            sqlx::query_as::<_, LivestreamTotalModel>(
                r#"
                SELECT livestream_id, COUNT(*) AS total
                FROM reactions
                GROUP BY livestream_id
                "#,
            )
            .fetch_all(&mut *tx)
            .await
            .map_err(map_db_error)?
            .into_iter()
            .map(LivestreamCount::from)
            .collect();

        let tips_by_user: Vec<UserCount> = sqlx::query_as::<_, UserTotalModel>(
            r#"
            SELECT user_id, SUM(amount)::BIGINT AS total
            FROM tips
            GROUP BY user_id
            "#,
        )
        .fetch_all(&mut *tx)
        .await
        .map_err(map_db_error)?
        .into_iter()
        .map(UserCount::from)
        .collect();

        let tips_by_livestream: Vec<LivestreamCount> =
            sqlx::query_as::<_, LivestreamTotalModel>(
                r#"
                SELECT livestream_id, SUM(amount)::BIGINT AS total
                FROM tips
                GROUP BY livestream_id
                "#,
            )
            .fetch_all(&mut *tx)
            .await
            .map_err(map_db_error)?
            .into_iter()
            .map(LivestreamCount::from)
            .collect();

        // Zero rows here only means no user has set a non-default theme yet.
        let themes: Vec<UserFlag> = sqlx::query_as::<_, UserThemeModel>(
            r#"
            SELECT user_id, dark_mode
            FROM themes
            "#,
        )
        .fetch_all(&mut *tx)
        .await
        .map_err(map_db_error)?
        .into_iter()
        .map(UserFlag::from)
        .collect();

        tx.commit().await.map_err(map_db_error)?;

        Ok(AggregateSnapshot {
            reactions_by_user,
            reactions_by_livestream,
            tips_by_user,
            tips_by_livestream,
            themes,
        })
    }
}
