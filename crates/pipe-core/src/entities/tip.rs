//! Tip entity - an immutable monetary event row
//!
//! Each tip contributes its amount to two aggregate counters: total tips
//! by the tipping user and total tips on the livestream.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tip entity (persisted row, ID assigned by the database)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tip {
    pub id: i64,
    pub user_id: i64,
    pub livestream_id: i64,
    /// Monetary amount, always positive
    pub amount: i64,
    pub created_at: DateTime<Utc>,
}

/// A tip about to be inserted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewTip {
    pub user_id: i64,
    pub livestream_id: i64,
    pub amount: i64,
}

impl NewTip {
    /// Create a new NewTip
    pub fn new(user_id: i64, livestream_id: i64, amount: i64) -> Self {
        Self {
            user_id,
            livestream_id,
            amount,
        }
    }

    /// Tips must carry a positive amount
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.amount > 0
    }
}
