//! PostgreSQL implementation of ThemeRepository
//!
//! One row per user; upsert keeps latest-write-wins semantics.

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use pipe_core::traits::{RepoResult, ThemeRepository};
use pipe_core::Theme;

use crate::models::ThemeModel;

use super::error::map_db_error;

/// PostgreSQL implementation of ThemeRepository
#[derive(Clone)]
pub struct PgThemeRepository {
    pool: PgPool,
}

impl PgThemeRepository {
    /// Create a new PgThemeRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ThemeRepository for PgThemeRepository {
    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: i64) -> RepoResult<Option<Theme>> {
        let result = sqlx::query_as::<_, ThemeModel>(
            r#"
            SELECT user_id, dark_mode
            FROM themes
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Theme::from))
    }

    #[instrument(skip(self))]
    async fn upsert(&self, theme: &Theme) -> RepoResult<()> {
        sqlx::query(
            r#"
            INSERT INTO themes (user_id, dark_mode)
            VALUES ($1, $2)
            ON CONFLICT (user_id) DO UPDATE SET dark_mode = EXCLUDED.dark_mode
            "#,
        )
        .bind(theme.user_id)
        .bind(theme.dark_mode)
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}
