//! Livecomment database model

use chrono::{DateTime, Utc};
use pipe_core::Livecomment;
use sqlx::FromRow;

/// Database model for the livecomments table
#[derive(Debug, Clone, FromRow)]
pub struct LivecommentModel {
    pub id: i64,
    pub user_id: i64,
    pub livestream_id: i64,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl From<LivecommentModel> for Livecomment {
    fn from(model: LivecommentModel) -> Self {
        Livecomment {
            id: model.id,
            user_id: model.user_id,
            livestream_id: model.livestream_id,
            comment: model.comment,
            created_at: model.created_at,
        }
    }
}
