//! Reaction service
//!
//! Posts reactions and keeps the two reaction counters in step with the
//! relational rows.

use tracing::{instrument, warn};

use pipe_cache::keys;
use pipe_core::NewReaction;

use crate::dto::{PostReactionRequest, ReactionResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Reaction service
pub struct ReactionService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ReactionService<'a> {
    /// Create a new ReactionService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Post a reaction to a livestream
    ///
    /// The relational insert is authoritative. A counter failure after the
    /// commit is logged and the request still succeeds; the next rebuild
    /// corrects the drift.
    #[instrument(skip(self, request))]
    pub async fn post_reaction(
        &self,
        livestream_id: i64,
        request: PostReactionRequest,
    ) -> ServiceResult<ReactionResponse> {
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

        if request.emoji.is_empty() {
            return Err(ServiceError::validation("emoji must not be empty"));
        }

        let reaction = self
            .ctx
            .reaction_repo()
            .create(&NewReaction::new(
                request.user_id,
                livestream_id,
                request.emoji,
            ))
            .await?;

        let store = self.ctx.counter_store();
        if let Err(e) = store
            .incr_by(&keys::total_reactions_key(reaction.user_id), 1)
            .await
        {
            warn!(
                user_id = reaction.user_id,
                error = %e,
                "Reaction committed but user counter update failed"
            );
        }
        if let Err(e) = store
            .incr_by(&keys::livestream_reactions_key(livestream_id), 1)
            .await
        {
            warn!(
                livestream_id,
                error = %e,
                "Reaction committed but livestream counter update failed"
            );
        }

        Ok(ReactionResponse::from(reaction))
    }

    /// List reactions on a livestream, newest first
    #[instrument(skip(self))]
    pub async fn list_reactions(&self, livestream_id: i64) -> ServiceResult<Vec<ReactionResponse>> {
        self.ctx
            .livestream_repo()
            .find_by_id(livestream_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Livestream", livestream_id.to_string()))?;

        let reactions = self
            .ctx
            .reaction_repo()
            .find_by_livestream(livestream_id)
            .await?;

        Ok(reactions.into_iter().map(ReactionResponse::from).collect())
    }
}
