//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;

use pipe_core::{Livecomment, Livestream, Reaction, Theme, Tip};

// ============================================================================
// Initialize Response
// ============================================================================

/// Body returned by `POST /api/initialize` on success
#[derive(Debug, Clone, Serialize)]
pub struct InitializeResponse {
    pub language: String,
}

impl InitializeResponse {
    #[must_use]
    pub fn new() -> Self {
        Self {
            language: "rust".to_string(),
        }
    }
}

impl Default for InitializeResponse {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Event Row Responses
// ============================================================================

/// Reaction response
#[derive(Debug, Clone, Serialize)]
pub struct ReactionResponse {
    pub id: i64,
    pub user_id: i64,
    pub livestream_id: i64,
    pub emoji: String,
    pub created_at: DateTime<Utc>,
}

impl From<Reaction> for ReactionResponse {
    fn from(reaction: Reaction) -> Self {
        Self {
            id: reaction.id,
            user_id: reaction.user_id,
            livestream_id: reaction.livestream_id,
            emoji: reaction.emoji,
            created_at: reaction.created_at,
        }
    }
}

/// Tip response
#[derive(Debug, Clone, Serialize)]
pub struct TipResponse {
    pub id: i64,
    pub user_id: i64,
    pub livestream_id: i64,
    pub amount: i64,
    pub created_at: DateTime<Utc>,
}

impl From<Tip> for TipResponse {
    fn from(tip: Tip) -> Self {
        Self {
            id: tip.id,
            user_id: tip.user_id,
            livestream_id: tip.livestream_id,
            amount: tip.amount,
            created_at: tip.created_at,
        }
    }
}

/// Livecomment response
#[derive(Debug, Clone, Serialize)]
pub struct LivecommentResponse {
    pub id: i64,
    pub user_id: i64,
    pub livestream_id: i64,
    pub comment: String,
    pub created_at: DateTime<Utc>,
}

impl From<Livecomment> for LivecommentResponse {
    fn from(comment: Livecomment) -> Self {
        Self {
            id: comment.id,
            user_id: comment.user_id,
            livestream_id: comment.livestream_id,
            comment: comment.comment,
            created_at: comment.created_at,
        }
    }
}

// ============================================================================
// Livestream Responses
// ============================================================================

/// Livestream response
#[derive(Debug, Clone, Serialize)]
pub struct LivestreamResponse {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub description: String,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
}

impl From<Livestream> for LivestreamResponse {
    fn from(stream: Livestream) -> Self {
        Self {
            id: stream.id,
            user_id: stream.user_id,
            title: stream.title,
            description: stream.description,
            start_at: stream.start_at,
            end_at: stream.end_at,
        }
    }
}

// ============================================================================
// Theme and Statistics Responses
// ============================================================================

/// Theme response (`GET`/`POST /api/user/:username/theme`)
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ThemeResponse {
    pub dark_mode: bool,
}

impl From<Theme> for ThemeResponse {
    fn from(theme: Theme) -> Self {
        Self {
            dark_mode: theme.dark_mode,
        }
    }
}

/// Aggregate totals for a user or a livestream, read from the cache
#[derive(Debug, Clone, Copy, Serialize)]
pub struct StatisticsResponse {
    pub total_reactions: i64,
    pub total_tips: i64,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each backing store
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
    pub redis: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool, redis_healthy: bool) -> Self {
        let all_healthy = database_healthy && redis_healthy;
        Self {
            status: if all_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
                redis: if redis_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}
