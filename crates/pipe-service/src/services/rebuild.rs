//! Rebuild service
//!
//! Wipes the counter store and repopulates it from the relational aggregate
//! snapshot. This is the reset entry point behind `POST /api/initialize`.

use tracing::{info, instrument, warn};

use pipe_cache::keys;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Rebuild service
pub struct RebuildService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RebuildService<'a> {
    /// Create a new RebuildService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Wipe the counter store and repopulate it from relational ground truth.
    ///
    /// Any failure aborts the whole rebuild and leaves the cache in an
    /// undefined state until the next successful run; nothing papers over a
    /// partial repopulation.
    #[instrument(skip(self))]
    pub async fn rebuild(&self) -> ServiceResult<()> {
        let store = self.ctx.counter_store();

        store.flush_all().await.map_err(|e| {
            warn!(error = %e, "Cache flush failed, aborting rebuild");
            ServiceError::rebuild(format!("cache flush failed: {e}"))
        })?;

        let snapshot = self.ctx.aggregate_source().snapshot().await.map_err(|e| {
            warn!(error = %e, "Aggregate snapshot failed, aborting rebuild");
            ServiceError::rebuild(format!("aggregate snapshot failed: {e}"))
        })?;

        for count in &snapshot.reactions_by_user {
            store
                .set_counter(&keys::total_reactions_key(count.user_id), count.total)
                .await
                .map_err(abort)?;
        }
        for count in &snapshot.reactions_by_livestream {
            store
                .set_counter(
                    &keys::livestream_reactions_key(count.livestream_id),
                    count.total,
                )
                .await
                .map_err(abort)?;
        }
        for count in &snapshot.tips_by_user {
            store
                .set_counter(&keys::total_tips_key(count.user_id), count.total)
                .await
                .map_err(abort)?;
        }
        for count in &snapshot.tips_by_livestream {
            store
                .set_counter(&keys::livestream_tips_key(count.livestream_id), count.total)
                .await
                .map_err(abort)?;
        }
        for flag in &snapshot.themes {
            store
                .set_flag(&keys::theme_dark_key(flag.user_id), flag.value)
                .await
                .map_err(abort)?;
        }

        info!(keys_written = snapshot.len(), "Counter store rebuilt");

        Ok(())
    }
}

fn abort(err: pipe_core::DomainError) -> ServiceError {
    warn!(error = %err, "Cache repopulation failed, aborting rebuild");
    ServiceError::rebuild(format!("cache repopulation failed: {err}"))
}
