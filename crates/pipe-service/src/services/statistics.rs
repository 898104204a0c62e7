//! Statistics service
//!
//! Serves aggregate totals straight from the counter store. Absent keys
//! read as zero; the relational store is never consulted here.

use tracing::instrument;

use pipe_cache::keys;

use crate::dto::StatisticsResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Statistics service
pub struct StatisticsService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> StatisticsService<'a> {
    /// Create a new StatisticsService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Aggregate totals for a user, looked up by login name
    #[instrument(skip(self))]
    pub async fn user_statistics(&self, username: &str) -> ServiceResult<StatisticsResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_name(username)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", username))?;

        let store = self.ctx.counter_store();
        let total_reactions = store
            .get_counter(&keys::total_reactions_key(user.id))
            .await?
            .unwrap_or(0);
        let total_tips = store
            .get_counter(&keys::total_tips_key(user.id))
            .await?
            .unwrap_or(0);

        Ok(StatisticsResponse {
            total_reactions,
            total_tips,
        })
    }

    /// Aggregate totals for a livestream
    #[instrument(skip(self))]
    pub async fn livestream_statistics(
        &self,
        livestream_id: i64,
    ) -> ServiceResult<StatisticsResponse> {
        self.ctx
            .livestream_repo()
            .find_by_id(livestream_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Livestream", livestream_id.to_string()))?;

        let store = self.ctx.counter_store();
        let total_reactions = store
            .get_counter(&keys::livestream_reactions_key(livestream_id))
            .await?
            .unwrap_or(0);
        let total_tips = store
            .get_counter(&keys::livestream_tips_key(livestream_id))
            .await?
            .unwrap_or(0);

        Ok(StatisticsResponse {
            total_reactions,
            total_tips,
        })
    }
}
