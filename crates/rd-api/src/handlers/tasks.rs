//! Task listing and assignment handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use rd_core::result::{BatchResult, RdResult};
use rd_core::traits::Id;
use rd_models::{Priority, Task, TaskStatus};
use rd_queries::{DueWindow, TaskFilter, TaskSort};
use rd_services::AssigneeScope;
use serde::Deserialize;
use std::str::FromStr;
use tracing::debug;

use super::Collection;
use crate::error::ApiResult;
use crate::extractors::{AppState, JsonBody};

/// Query string of the task list. List-valued parameters are comma separated.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskListParams {
    /// Stakeholder id or `unassigned`; absent lists every task
    pub assignee: Option<String>,
    pub search: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub tag: Option<String>,
    pub due: Option<String>,
    pub sort: Option<String>,
    pub show_completed: Option<bool>,
    pub min_hours: Option<f64>,
    pub max_hours: Option<f64>,
    pub min_completion: Option<f64>,
    pub max_completion: Option<f64>,
}

fn split_list<T: FromStr>(raw: Option<&str>) -> Result<Vec<T>, T::Err> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(T::from_str)
        .collect()
}

impl TaskListParams {
    pub fn scope(&self) -> RdResult<AssigneeScope> {
        match self.assignee.as_deref() {
            Some(raw) => raw.parse(),
            None => Ok(AssigneeScope::All),
        }
    }

    pub fn filter(&self) -> RdResult<TaskFilter> {
        let mut filter = TaskFilter::new()
            .estimated_hours(self.min_hours, self.max_hours)
            .completion(self.min_completion, self.max_completion);

        if let Some(search) = &self.search {
            filter = filter.search(search.as_str());
        }
        for priority in split_list::<Priority>(self.priority.as_deref())? {
            filter = filter.priority(priority);
        }
        for status in split_list::<TaskStatus>(self.status.as_deref())? {
            filter = filter.status(status);
        }
        for tag in split_list::<String>(self.tag.as_deref()).unwrap_or_default() {
            filter = filter.tag(tag);
        }
        if let Some(due) = self.due.as_deref().filter(|d| !d.is_empty()) {
            filter = filter.due_within(due.parse::<DueWindow>()?);
        }
        if self.show_completed == Some(false) {
            filter = filter.hide_completed();
        }
        Ok(filter)
    }

    pub fn sort(&self) -> RdResult<Option<TaskSort>> {
        self.sort
            .as_deref()
            .filter(|s| !s.is_empty())
            .map(str::parse)
            .transpose()
    }
}

/// GET /api/v1/tasks
pub async fn list_tasks(
    State(state): State<AppState>,
    Query(params): Query<TaskListParams>,
) -> ApiResult<Json<Collection<Task>>> {
    let scope = params.scope()?;
    let filter = params.filter()?;
    let sort = params.sort()?;
    debug!(?scope, ?sort, filtered = !filter.is_empty(), "listing tasks");

    let tasks = state
        .allocation
        .find_tasks(scope, &filter, sort, state.clock.today())
        .await?;
    Ok(Json(Collection::new(tasks)))
}

/// GET /api/v1/tasks/:id
pub async fn get_task(State(state): State<AppState>, Path(id): Path<Id>) -> ApiResult<Json<Task>> {
    Ok(Json(state.allocation.find_task(id).await?))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignRequest {
    /// Null unassigns
    #[serde(default)]
    pub assignee_id: Option<Id>,
}

/// PUT /api/v1/tasks/:id/assignee
pub async fn assign_task(
    State(state): State<AppState>,
    Path(id): Path<Id>,
    JsonBody(request): JsonBody<AssignRequest>,
) -> ApiResult<Json<Task>> {
    Ok(Json(state.allocation.assign_task(id, request.assignee_id).await?))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkAssignRequest {
    pub task_ids: Vec<Id>,
    #[serde(default)]
    pub assignee_id: Option<Id>,
}

/// POST /api/v1/tasks/bulk_assign
pub async fn bulk_assign(
    State(state): State<AppState>,
    JsonBody(request): JsonBody<BulkAssignRequest>,
) -> ApiResult<Json<BatchResult<Task>>> {
    let batch = state
        .allocation
        .bulk_assign_tasks(&request.task_ids, request.assignee_id)
        .await?;
    Ok(Json(batch))
}
