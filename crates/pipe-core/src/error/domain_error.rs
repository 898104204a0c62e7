//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(i64),

    #[error("User not found: {0}")]
    UserNameNotFound(String),

    #[error("Livestream not found: {0}")]
    LivestreamNotFound(i64),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Tip amount must be positive, got {0}")]
    InvalidTipAmount(i64),

    #[error("Comment must not be empty")]
    EmptyComment,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::UserNotFound(_) | Self::UserNameNotFound(_) => "UNKNOWN_USER",
            Self::LivestreamNotFound(_) => "UNKNOWN_LIVESTREAM",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidTipAmount(_) => "INVALID_TIP_AMOUNT",
            Self::EmptyComment => "EMPTY_COMMENT",
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_) | Self::UserNameNotFound(_) | Self::LivestreamNotFound(_)
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::InvalidTipAmount(_) | Self::EmptyComment
        )
    }

    /// Check if this is a cache-layer error
    pub fn is_cache(&self) -> bool {
        matches!(self, Self::CacheError(_))
    }
}
