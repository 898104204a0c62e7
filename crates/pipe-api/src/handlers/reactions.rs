//! Reaction handlers
//!
//! Endpoints for posting and listing reactions on a livestream.

use axum::{
    extract::{Path, State},
    Json,
};
use pipe_service::dto::{PostReactionRequest, ReactionResponse};
use pipe_service::ReactionService;

use super::parse_id;
use crate::response::{ApiJson, ApiResult, Created};
use crate::state::AppState;

/// Post a reaction to a livestream
///
/// POST /api/livestream/{livestream_id}/reaction
pub async fn post_reaction(
    State(state): State<AppState>,
    Path(livestream_id): Path<String>,
    Json(request): Json<PostReactionRequest>,
) -> ApiResult<Created<ApiJson<ReactionResponse>>> {
    let livestream_id = parse_id(&livestream_id, "livestream_id")?;

    let service = ReactionService::new(state.service_context());
    let reaction = service.post_reaction(livestream_id, request).await?;
    Ok(Created(ApiJson(reaction)))
}

/// List reactions on a livestream, newest first
///
/// GET /api/livestream/{livestream_id}/reaction
pub async fn list_reactions(
    State(state): State<AppState>,
    Path(livestream_id): Path<String>,
) -> ApiResult<ApiJson<Vec<ReactionResponse>>> {
    let livestream_id = parse_id(&livestream_id, "livestream_id")?;

    let service = ReactionService::new(state.service_context());
    let reactions = service.list_reactions(livestream_id).await?;
    Ok(ApiJson(reactions))
}
