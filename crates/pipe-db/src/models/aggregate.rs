//! Row shapes for the grouped-aggregation queries the rebuild reads

use pipe_core::{LivestreamCount, UserCount, UserFlag};
use sqlx::FromRow;

/// One row of a per-user aggregate (reaction count or tip sum)
#[derive(Debug, Clone, FromRow)]
pub struct UserTotalModel {
    pub user_id: i64,
    pub total: i64,
}

impl From<UserTotalModel> for UserCount {
    fn from(model: UserTotalModel) -> Self {
        UserCount {
            user_id: model.user_id,
            total: model.total,
        }
    }
}

/// One row of a per-livestream aggregate (reaction count or tip sum)
#[derive(Debug, Clone, FromRow)]
pub struct LivestreamTotalModel {
    pub livestream_id: i64,
    pub total: i64,
}

impl From<LivestreamTotalModel> for LivestreamCount {
    fn from(model: LivestreamTotalModel) -> Self {
        LivestreamCount {
            livestream_id: model.livestream_id,
            total: model.total,
        }
    }
}

/// One (user, dark_mode) row from the themes table
#[derive(Debug, Clone, FromRow)]
pub struct UserThemeModel {
    pub user_id: i64,
    pub dark_mode: bool,
}

impl From<UserThemeModel> for UserFlag {
    fn from(model: UserThemeModel) -> Self {
        UserFlag {
            user_id: model.user_id,
            value: model.dark_mode,
        }
    }
}
