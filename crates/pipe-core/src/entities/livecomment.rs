//! Livecomment entity - a chat message posted on a livestream

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Livecomment entity (persisted row, ID assigned by the database)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Livecomment {
    pub id: i64,
    pub user_id: i64,
    pub livestream_id: i64,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

/// A livecomment about to be inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLivecomment {
    pub user_id: i64,
    pub livestream_id: i64,
    pub comment: String,
}

impl NewLivecomment {
    /// Create a new NewLivecomment
    pub fn new(user_id: i64, livestream_id: i64, comment: String) -> Self {
        Self {
            user_id,
            livestream_id,
            comment,
        }
    }
}
