//! Livecomment service
//!
//! Plain relational writes; livecomments contribute to no cached counter.

use tracing::instrument;

use pipe_core::{DomainError, NewLivecomment};

use crate::dto::{LivecommentResponse, PostLivecommentRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Livecomment service
pub struct LivecommentService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LivecommentService<'a> {
    /// Create a new LivecommentService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Post a livecomment to a livestream
    #[instrument(skip(self, request))]
    pub async fn post_livecomment(
        &self,
        livestream_id: i64,
        request: PostLivecommentRequest,
    ) -> ServiceResult<LivecommentResponse> {
        self.ctx
            .livestream_repo()
            .find_by_id(livestream_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Livestream", livestream_id.to_string()))?;

        self.ctx
            .user_repo()
            .find_by_id(request.user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", request.user_id.to_string()))?;

        if request.comment.trim().is_empty() {
            return Err(DomainError::EmptyComment.into());
        }

        let comment = self
            .ctx
            .livecomment_repo()
            .create(&NewLivecomment::new(
                request.user_id,
                livestream_id,
                request.comment,
            ))
            .await?;

        Ok(LivecommentResponse::from(comment))
    }

    /// List livecomments on a livestream, newest first
    #[instrument(skip(self))]
    pub async fn list_livecomments(
        &self,
        livestream_id: i64,
        limit: Option<i64>,
    ) -> ServiceResult<Vec<LivecommentResponse>> {
        self.ctx
            .livestream_repo()
            .find_by_id(livestream_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Livestream", livestream_id.to_string()))?;

        let comments = self
            .ctx
            .livecomment_repo()
            .find_by_livestream(livestream_id, limit)
            .await?;

        Ok(comments.into_iter().map(LivecommentResponse::from).collect())
    }
}
