//! Request DTOs for API endpoints

use serde::Deserialize;

/// Body of `POST /api/livestream/:livestream_id/reaction`
#[derive(Debug, Clone, Deserialize)]
pub struct PostReactionRequest {
    pub user_id: i64,
    pub emoji: String,
}

/// Body of `POST /api/livestream/:livestream_id/tip`
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PostTipRequest {
    pub user_id: i64,
    pub amount: i64,
}

/// Body of `POST /api/livestream/:livestream_id/livecomment`
#[derive(Debug, Clone, Deserialize)]
pub struct PostLivecommentRequest {
    pub user_id: i64,
    pub comment: String,
}

/// Body of `POST /api/user/:username/theme`
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct UpdateThemeRequest {
    pub dark_mode: bool,
}
