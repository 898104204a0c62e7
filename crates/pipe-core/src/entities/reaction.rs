//! Reaction entity - an immutable event row linking a user and a livestream
//!
//! Each reaction contributes +1 to two aggregate counters: total reactions
//! by the reacting user and total reactions on the livestream.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reaction entity (persisted row, ID assigned by the database)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reaction {
    pub id: i64,
    pub user_id: i64,
    pub livestream_id: i64,
    pub emoji: String,
    pub created_at: DateTime<Utc>,
}

/// A reaction about to be inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReaction {
    pub user_id: i64,
    pub livestream_id: i64,
    pub emoji: String,
}

impl NewReaction {
    /// Create a new NewReaction
    pub fn new(user_id: i64, livestream_id: i64, emoji: String) -> Self {
        Self {
            user_id,
            livestream_id,
            emoji,
        }
    }
}
