//! Tip database model

use chrono::{DateTime, Utc};
use pipe_core::Tip;
use sqlx::FromRow;

/// Database model for the tips table
#[derive(Debug, Clone, FromRow)]
pub struct TipModel {
    pub id: i64,
    pub user_id: i64,
    pub livestream_id: i64,
    pub amount: i64,
    pub created_at: DateTime<Utc>,
}

impl From<TipModel> for Tip {
    fn from(model: TipModel) -> Self {
        Tip {
            id: model.id,
            user_id: model.user_id,
            livestream_id: model.livestream_id,
            amount: model.amount,
            created_at: model.created_at,
        }
    }
}
