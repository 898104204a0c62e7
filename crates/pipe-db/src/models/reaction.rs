//! Reaction database model

use chrono::{DateTime, Utc};
use pipe_core::Reaction;
use sqlx::FromRow;

/// Database model for the reactions table
#[derive(Debug, Clone, FromRow)]
pub struct ReactionModel {
    pub id: i64,
    pub user_id: i64,
    pub livestream_id: i64,
    pub emoji: String,
    pub created_at: DateTime<Utc>,
}

impl From<ReactionModel> for Reaction {
    fn from(model: ReactionModel) -> Self {
        Reaction {
            id: model.id,
            user_id: model.user_id,
            livestream_id: model.livestream_id,
            emoji: model.emoji,
            created_at: model.created_at,
        }
    }
}
