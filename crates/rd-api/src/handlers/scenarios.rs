//! Scenario planning handlers

use axum::{
    extract::{Path, State},
    Json,
};
use rd_core::traits::Id;
use rd_services::{OptimizationConstraint, OptimizationResult, ProjectScenario, ResourceCost};

use super::Collection;
use crate::error::ApiResult;
use crate::extractors::{AppState, JsonBody};

/// GET /api/v1/scenarios
pub async fn list_scenarios(State(state): State<AppState>) -> Json<Collection<ProjectScenario>> {
    Json(Collection::new(state.scenarios.scenarios()))
}

/// GET /api/v1/scenarios/:id
pub async fn get_scenario(
    State(state): State<AppState>,
    Path(id): Path<Id>,
) -> ApiResult<Json<ProjectScenario>> {
    Ok(Json(state.scenarios.scenario(id)?))
}

/// GET /api/v1/scenarios/costs
pub async fn list_resource_costs(State(state): State<AppState>) -> Json<Collection<ResourceCost>> {
    Json(Collection::new(state.scenarios.resource_costs()))
}

/// POST /api/v1/scenarios/optimize
pub async fn run_optimization(
    State(state): State<AppState>,
    JsonBody(constraints): JsonBody<OptimizationConstraint>,
) -> ApiResult<Json<OptimizationResult>> {
    Ok(Json(state.scenarios.run_optimization(&constraints)?))
}
