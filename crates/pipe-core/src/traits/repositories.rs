//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern: the domain layer defines what
//! it needs, and the infrastructure layer provides the implementation.

use async_trait::async_trait;

use crate::entities::{
    Livecomment, Livestream, NewLivecomment, NewReaction, NewTip, Reaction, Theme, Tip, User,
};
use crate::error::DomainError;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<User>>;

    /// Find user by unique login name
    async fn find_by_name(&self, name: &str) -> RepoResult<Option<User>>;
}

// ============================================================================
// Livestream Repository
// ============================================================================

#[async_trait]
pub trait LivestreamRepository: Send + Sync {
    /// Find livestream by ID
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Livestream>>;

    /// List all livestreams owned by a user
    async fn find_by_user(&self, user_id: i64) -> RepoResult<Vec<Livestream>>;
}

// ============================================================================
// Reaction Repository
// ============================================================================

#[async_trait]
pub trait ReactionRepository: Send + Sync {
    /// Insert a new reaction row; the database assigns the ID
    async fn create(&self, reaction: &NewReaction) -> RepoResult<Reaction>;

    /// List reactions on a livestream, newest first
    async fn find_by_livestream(&self, livestream_id: i64) -> RepoResult<Vec<Reaction>>;
}

// ============================================================================
// Tip Repository
// ============================================================================

#[async_trait]
pub trait TipRepository: Send + Sync {
    /// Insert a new tip row; the database assigns the ID
    async fn create(&self, tip: &NewTip) -> RepoResult<Tip>;

    /// List tips on a livestream, newest first
    async fn find_by_livestream(&self, livestream_id: i64) -> RepoResult<Vec<Tip>>;
}

// ============================================================================
// Livecomment Repository
// ============================================================================

#[async_trait]
pub trait LivecommentRepository: Send + Sync {
    /// Insert a new livecomment row; the database assigns the ID
    async fn create(&self, comment: &NewLivecomment) -> RepoResult<Livecomment>;

    /// List livecomments on a livestream, newest first, optionally limited
    async fn find_by_livestream(
        &self,
        livestream_id: i64,
        limit: Option<i64>,
    ) -> RepoResult<Vec<Livecomment>>;
}

// ============================================================================
// Theme Repository
// ============================================================================

#[async_trait]
pub trait ThemeRepository: Send + Sync {
    /// Get the theme row for a user, if any
    async fn find_by_user(&self, user_id: i64) -> RepoResult<Option<Theme>>;

    /// Insert or overwrite the user's theme row (latest write wins)
    async fn upsert(&self, theme: &Theme) -> RepoResult<()>;
}
