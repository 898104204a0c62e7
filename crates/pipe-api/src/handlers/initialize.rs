//! Initialize handler
//!
//! Wipes the counter store and repopulates it from relational ground truth.

use axum::extract::State;
use pipe_service::dto::InitializeResponse;
use pipe_service::RebuildService;

use crate::response::{ApiJson, ApiResult};
use crate::state::AppState;

/// Rebuild the cached aggregates from the relational store
///
/// POST /api/initialize
pub async fn initialize(State(state): State<AppState>) -> ApiResult<ApiJson<InitializeResponse>> {
    let service = RebuildService::new(state.service_context());
    service.rebuild().await?;
    Ok(ApiJson(InitializeResponse::new()))
}
