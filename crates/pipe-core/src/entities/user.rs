//! User entity - an account that owns livestreams and acts in reactions and tips

use serde::{Deserialize, Serialize};

/// User entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    /// Unique login name, used in URL paths
    pub name: String,
    pub display_name: String,
    pub description: String,
}

impl User {
    /// Create a new User
    pub fn new(id: i64, name: String, display_name: String, description: String) -> Self {
        Self {
            id,
            name,
            display_name,
            description,
        }
    }
}
