//! Statistics handlers
//!
//! Aggregate totals served from the counter store; absent keys read as zero.

use axum::extract::{Path, State};

use pipe_service::dto::StatisticsResponse;
use pipe_service::StatisticsService;

use super::parse_id;
use crate::response::{ApiJson, ApiResult};
use crate::state::AppState;

/// Aggregate totals for a user
///
/// GET /api/user/{username}/statistics
pub async fn user_statistics(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<ApiJson<StatisticsResponse>> {
    let service = StatisticsService::new(state.service_context());
    let stats = service.user_statistics(&username).await?;
    Ok(ApiJson(stats))
}

/// Aggregate totals for a livestream
///
/// GET /api/livestream/{livestream_id}/statistics
pub async fn livestream_statistics(
    State(state): State<AppState>,
    Path(livestream_id): Path<String>,
) -> ApiResult<ApiJson<StatisticsResponse>> {
    let livestream_id = parse_id(&livestream_id, "livestream_id")?;

    let service = StatisticsService::new(state.service_context());
    let stats = service.livestream_statistics(livestream_id).await?;
    Ok(ApiJson(stats))
}
