//! Livecomment handlers
//!
//! Endpoints for posting and listing livecomments on a livestream.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use pipe_service::dto::{LivecommentResponse, PostLivecommentRequest};
use pipe_service::LivecommentService;

use super::parse_id;
use crate::response::{ApiJson, ApiResult, Created};
use crate::state::AppState;

/// Query parameters for listing livecomments
#[derive(Debug, Deserialize)]
pub struct ListLivecommentsQuery {
    pub limit: Option<i64>,
}

/// Post a livecomment to a livestream
///
/// POST /api/livestream/{livestream_id}/livecomment
pub async fn post_livecomment(
    State(state): State<AppState>,
    Path(livestream_id): Path<String>,
    Json(request): Json<PostLivecommentRequest>,
) -> ApiResult<Created<ApiJson<LivecommentResponse>>> {
    let livestream_id = parse_id(&livestream_id, "livestream_id")?;

    let service = LivecommentService::new(state.service_context());
    let comment = service.post_livecomment(livestream_id, request).await?;
    Ok(Created(ApiJson(comment)))
}

/// List livecomments on a livestream, newest first
///
/// GET /api/livestream/{livestream_id}/livecomment?limit=N
pub async fn list_livecomments(
    State(state): State<AppState>,
    Path(livestream_id): Path<String>,
    Query(query): Query<ListLivecommentsQuery>,
) -> ApiResult<ApiJson<Vec<LivecommentResponse>>> {
    let livestream_id = parse_id(&livestream_id, "livestream_id")?;

    let service = LivecommentService::new(state.service_context());
    let comments = service.list_livecomments(livestream_id, query.limit).await?;
    Ok(ApiJson(comments))
}
