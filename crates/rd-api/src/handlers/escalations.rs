//! Escalation handlers

use axum::{extract::State, Json};
use rd_models::TaskInput;
use rd_services::EscalationResult;
use serde::Deserialize;

use super::Collection;
use crate::error::ApiResult;
use crate::extractors::{AppState, JsonBody};

/// GET /api/v1/escalations
///
/// Scans every stored task, most severe first.
pub async fn scan_escalations(
    State(state): State<AppState>,
) -> ApiResult<Json<Collection<EscalationResult>>> {
    let results = state.escalation.scan().await?;
    Ok(Json(Collection::new(results)))
}

#[derive(Debug, Deserialize)]
pub struct EscalationRequest {
    pub tasks: Vec<TaskInput>,
}

/// POST /api/v1/escalations
///
/// Classifies submitted tasks without touching the store. A malformed date
/// fails the request.
pub async fn process_escalations(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<EscalationRequest>,
) -> ApiResult<Json<Collection<EscalationResult>>> {
    let results = state.escalation.process_inputs(request.tasks)?;
    Ok(Json(Collection::new(results)))
}
