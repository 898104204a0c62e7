//! Theme service
//!
//! The relational theme row is authoritative; reads are served from the
//! cached flag, with an absent key meaning light mode.

use tracing::{instrument, warn};

use pipe_cache::keys;
use pipe_core::Theme;

use crate::dto::{ThemeResponse, UpdateThemeRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Theme service
pub struct ThemeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ThemeService<'a> {
    /// Create a new ThemeService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get a user's theme from the cached flag
    #[instrument(skip(self))]
    pub async fn get_theme(&self, username: &str) -> ServiceResult<ThemeResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_name(username)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", username))?;

        let dark_mode = self
            .ctx
            .counter_store()
            .get_flag(&keys::theme_dark_key(user.id))
            .await?
            .unwrap_or(false);

        Ok(ThemeResponse { dark_mode })
    }

    /// Set a user's theme: upsert the relational row, then overwrite the flag
    #[instrument(skip(self, request))]
    pub async fn set_theme(
        &self,
        username: &str,
        request: UpdateThemeRequest,
    ) -> ServiceResult<ThemeResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_name(username)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", username))?;

        let theme = Theme::new(user.id, request.dark_mode);
        self.ctx.theme_repo().upsert(&theme).await?;

        if let Err(e) = self
            .ctx
            .counter_store()
            .set_flag(&keys::theme_dark_key(user.id), request.dark_mode)
            .await
        {
            warn!(
                user_id = user.id,
                dark_mode = request.dark_mode,
                error = %e,
                "Theme row committed but flag update failed"
            );
        }

        Ok(ThemeResponse::from(theme))
    }
}
