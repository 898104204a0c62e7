//! Livestream service

use tracing::instrument;

use crate::dto::LivestreamResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Livestream service
pub struct LivestreamService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LivestreamService<'a> {
    /// Create a new LivestreamService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get a livestream by ID
    #[instrument(skip(self))]
    pub async fn get_livestream(&self, livestream_id: i64) -> ServiceResult<LivestreamResponse> {
        let stream = self
            .ctx
            .livestream_repo()
            .find_by_id(livestream_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Livestream", livestream_id.to_string()))?;

        Ok(LivestreamResponse::from(stream))
    }

    /// List livestreams owned by a user, looked up by login name
    #[instrument(skip(self))]
    pub async fn list_user_livestreams(
        &self,
        username: &str,
    ) -> ServiceResult<Vec<LivestreamResponse>> {
        let user = self
            .ctx
            .user_repo()
            .find_by_name(username)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", username))?;

        let streams = self.ctx.livestream_repo().find_by_user(user.id).await?;

        Ok(streams.into_iter().map(LivestreamResponse::from).collect())
    }
}
