//! Tip handlers
//!
//! Endpoints for posting and listing tips on a livestream.

use axum::{
    extract::{Path, State},
    Json,
};
use pipe_service::dto::{PostTipRequest, TipResponse};
use pipe_service::TipService;

use super::parse_id;
use crate::response::{ApiJson, ApiResult, Created};
use crate::state::AppState;

/// Post a tip to a livestream
///
/// POST /api/livestream/{livestream_id}/tip
pub async fn post_tip(
    State(state): State<AppState>,
    Path(livestream_id): Path<String>,
    Json(request): Json<PostTipRequest>,
) -> ApiResult<Created<ApiJson<TipResponse>>> {
    let livestream_id = parse_id(&livestream_id, "livestream_id")?;

    let service = TipService::new(state.service_context());
    let tip = service.post_tip(livestream_id, request).await?;
    Ok(Created(ApiJson(tip)))
}

/// List tips on a livestream, newest first
///
/// GET /api/livestream/{livestream_id}/tip
pub async fn list_tips(
    State(state): State<AppState>,
    Path(livestream_id): Path<String>,
) -> ApiResult<ApiJson<Vec<TipResponse>>> {
    let livestream_id = parse_id(&livestream_id, "livestream_id")?;

    let service = TipService::new(state.service_context());
    let tips = service.list_tips(livestream_id).await?;
    Ok(ApiJson(tips))
}
