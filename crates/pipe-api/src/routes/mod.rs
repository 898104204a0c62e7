//! Route definitions
//!
//! All API routes organized by domain and mounted under /api.

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{
    health, initialize, livecomments, livestreams, reactions, statistics, themes, tips,
};
use crate::state::AppState;

/// Create the main API router with all routes
pub fn create_router() -> Router<AppState> {
    Router::new()
        .nest("/api", api_routes())
        .merge(health_routes())
}

/// Health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API routes
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/initialize", post(initialize::initialize))
        .merge(livestream_routes())
        .merge(user_routes())
}

/// Livestream routes
fn livestream_routes() -> Router<AppState> {
    Router::new()
        .route("/livestream/:livestream_id", get(livestreams::get_livestream))
        .route(
            "/livestream/:livestream_id/reaction",
            post(reactions::post_reaction).get(reactions::list_reactions),
        )
        .route(
            "/livestream/:livestream_id/tip",
            post(tips::post_tip).get(tips::list_tips),
        )
        .route(
            "/livestream/:livestream_id/livecomment",
            post(livecomments::post_livecomment).get(livecomments::list_livecomments),
        )
        .route(
            "/livestream/:livestream_id/statistics",
            get(statistics::livestream_statistics),
        )
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/user/:username/theme",
            get(themes::get_theme).post(themes::set_theme),
        )
        .route(
            "/user/:username/livestream",
            get(livestreams::list_user_livestreams),
        )
        .route(
            "/user/:username/statistics",
            get(statistics::user_statistics),
        )
}
