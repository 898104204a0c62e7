//! Livestream entity - a scheduled broadcast owned by exactly one user

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Livestream entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Livestream {
    pub id: i64,
    /// Owning user
    pub user_id: i64,
    pub title: String,
    pub description: String,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
}

impl Livestream {
    /// Check whether the stream is live at the given instant
    #[inline]
    pub fn is_live_at(&self, at: DateTime<Utc>) -> bool {
        self.start_at <= at && at < self.end_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_is_live_at() {
        let stream = Livestream {
            id: 100,
            user_id: 7,
            title: "morning show".to_string(),
            description: String::new(),
            start_at: Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap(),
            end_at: Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
        };

        assert!(stream.is_live_at(Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap()));
        assert!(!stream.is_live_at(Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()));
        assert!(!stream.is_live_at(Utc.with_ymd_and_hms(2024, 1, 1, 8, 59, 59).unwrap()));
    }
}
