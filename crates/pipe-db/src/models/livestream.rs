//! Livestream database model

use chrono::{DateTime, Utc};
use pipe_core::Livestream;
use sqlx::FromRow;

/// Database model for the livestreams table
#[derive(Debug, Clone, FromRow)]
pub struct LivestreamModel {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: String,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
}

impl From<LivestreamModel> for Livestream {
    fn from(model: LivestreamModel) -> Self {
        Livestream {
            id: model.id,
            user_id: model.user_id,
            title: model.title,
            description: model.description,
            start_at: model.start_at,
            end_at: model.end_at,
        }
    }
}
