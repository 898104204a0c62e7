//! Theme entity - one preference record per user, latest write wins

use serde::{Deserialize, Serialize};

/// Theme preference for a single user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub user_id: i64,
    /// Dark mode on/off; a user without a row defaults to light mode
    pub dark_mode: bool,
}

impl Theme {
    /// Create a new Theme
    pub fn new(user_id: i64, dark_mode: bool) -> Self {
        Self { user_id, dark_mode }
    }

    /// The default preference for users who never set one
    pub fn light(user_id: i64) -> Self {
        Self {
            user_id,
            dark_mode: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_light() {
        assert!(!Theme::light(5).dark_mode);
    }
}
