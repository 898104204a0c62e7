//! Theme handlers
//!
//! The GET path reads the cached flag; the POST path writes the relational
//! row first and then overwrites the flag.

use axum::{
    extract::{Path, State},
    Json,
};

use pipe_service::dto::{ThemeResponse, UpdateThemeRequest};
use pipe_service::ThemeService;

use crate::response::{ApiJson, ApiResult};
use crate::state::AppState;

/// Get a user's theme
///
/// GET /api/user/{username}/theme
pub async fn get_theme(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<ApiJson<ThemeResponse>> {
    let service = ThemeService::new(state.service_context());
    let theme = service.get_theme(&username).await?;
    Ok(ApiJson(theme))
}

/// Set a user's theme
///
/// POST /api/user/{username}/theme
pub async fn set_theme(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Json(request): Json<UpdateThemeRequest>,
) -> ApiResult<ApiJson<ThemeResponse>> {
    let service = ThemeService::new(state.service_context());
    let theme = service.set_theme(&username, request).await?;
    Ok(ApiJson(theme))
}
