//! Tip service
//!
//! Posts tips and adds their amounts to the two tip counters.

use tracing::{instrument, warn};

use pipe_cache::keys;
use pipe_core::{DomainError, NewTip};

use crate::dto::{PostTipRequest, TipResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Tip service
pub struct TipService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> TipService<'a> {
    /// Create a new TipService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Post a tip to a livestream
    ///
    /// Same post-commit rule as reactions: a counter failure after the
    /// relational insert does not fail the request.
    #[instrument(skip(self, request))]
    pub async fn post_tip(
        &self,
        livestream_id: i64,
        request: PostTipRequest,
    ) -> ServiceResult<TipResponse> {
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

        let new_tip = NewTip::new(request.user_id, livestream_id, request.amount);
        if !new_tip.is_valid() {
            return Err(DomainError::InvalidTipAmount(request.amount).into());
        }

        let tip = self.ctx.tip_repo().create(&new_tip).await?;

        let store = self.ctx.counter_store();
        if let Err(e) = store
            .incr_by(&keys::total_tips_key(tip.user_id), tip.amount)
            .await
        {
            warn!(
                user_id = tip.user_id,
                amount = tip.amount,
                error = %e,
                "Tip committed but user counter update failed"
            );
        }
        if let Err(e) = store
            .incr_by(&keys::livestream_tips_key(livestream_id), tip.amount)
            .await
        {
            warn!(
                livestream_id,
                amount = tip.amount,
                error = %e,
                "Tip committed but livestream counter update failed"
            );
        }

        Ok(TipResponse::from(tip))
    }

    /// List tips on a livestream, newest first
    #[instrument(skip(self))]
    pub async fn list_tips(&self, livestream_id: i64) -> ServiceResult<Vec<TipResponse>> {
        self.ctx
            .livestream_repo()
            .find_by_id(livestream_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Livestream", livestream_id.to_string()))?;

        let tips = self.ctx.tip_repo().find_by_livestream(livestream_id).await?;

        Ok(tips.into_iter().map(TipResponse::from).collect())
    }
}
