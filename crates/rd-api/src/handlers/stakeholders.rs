//! Stakeholder directory handlers

use axum::{
    extract::{Path, State},
    Json,
};
use rd_core::traits::Id;
use rd_models::StakeholderResource;

use super::Collection;
use crate::error::ApiResult;
use crate::extractors::AppState;

/// GET /api/v1/stakeholders
pub async fn list_stakeholders(
    State(state): State<AppState>,
) -> ApiResult<Json<Collection<StakeholderResource>>> {
    let resources = state.allocation.stakeholder_resources().await?;
    Ok(Json(Collection::new(resources)))
}

/// GET /api/v1/stakeholders/:id
pub async fn get_stakeholder(
    State(state): State<AppState>,
    Path(id): Path<Id>,
) -> ApiResult<Json<StakeholderResource>> {
    Ok(Json(state.allocation.stakeholder_resource(id).await?))
}
