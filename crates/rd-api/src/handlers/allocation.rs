//! Allocation summary and reassignment impact handlers

use axum::{extract::State, Json};
use rd_core::traits::Id;
use rd_services::{AllocationSummary, ReassignmentImpact};
use serde::Deserialize;

use crate::error::ApiResult;
use crate::extractors::{AppState, JsonBody};

/// GET /api/v1/allocation/summary
pub async fn get_summary(State(state): State<AppState>) -> ApiResult<Json<AllocationSummary>> {
    Ok(Json(state.allocation.get_allocation_summary().await?))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImpactRequest {
    pub task_ids: Vec<Id>,
    /// Omitted or null projects an unassignment
    #[serde(default)]
    pub assignee_id: Option<Id>,
}

/// POST /api/v1/allocation/impact
pub async fn calculate_impact(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<ImpactRequest>,
) -> ApiResult<Json<ReassignmentImpact>> {
    let impact = state
        .allocation
        .calculate_reassignment_impact(&request.task_ids, request.assignee_id)
        .await?;
    Ok(Json(impact))
}
