//! Livestream handlers

use axum::extract::{Path, State};

use pipe_service::dto::LivestreamResponse;
use pipe_service::LivestreamService;

use super::parse_id;
use crate::response::{ApiJson, ApiResult};
use crate::state::AppState;

/// Get a livestream by ID
///
/// GET /api/livestream/{livestream_id}
pub async fn get_livestream(
    State(state): State<AppState>,
    Path(livestream_id): Path<String>,
) -> ApiResult<ApiJson<LivestreamResponse>> {
    let livestream_id = parse_id(&livestream_id, "livestream_id")?;

    let service = LivestreamService::new(state.service_context());
    let stream = service.get_livestream(livestream_id).await?;
    Ok(ApiJson(stream))
}

/// List livestreams owned by a user
///
/// GET /api/user/{username}/livestream
pub async fn list_user_livestreams(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<ApiJson<Vec<LivestreamResponse>>> {
    let service = LivestreamService::new(state.service_context());
    let streams = service.list_user_livestreams(&username).await?;
    Ok(ApiJson(streams))
}
