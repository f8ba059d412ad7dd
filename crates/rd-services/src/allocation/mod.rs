//! Allocation engine
//!
//! Stakeholder aggregates are recomputed on every read from the current task
//! set, so an assignment is visible in the next summary without any
//! incremental bookkeeping.

mod impact;
mod summary;

pub use impact::{project_reassignment, ReassignmentImpact, StakeholderImpact};
pub use summary::{AllocationBand, AllocationSummary};

use std::str::FromStr;
use std::sync::Arc;

use chrono::NaiveDate;
use rd_core::config::AllocationConfig;
use rd_core::error::RdError;
use rd_core::result::{BatchResult, RdResult};
use rd_core::traits::{Entity, Id};
use rd_models::{Stakeholder, StakeholderResource, Task};
use rd_queries::{TaskFilter, TaskSort};
use rd_store::ResourceStore;
use tracing::{debug, info};

/// Which owner a task listing is restricted to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssigneeScope {
    All,
    Unassigned,
    Stakeholder(Id),
}

impl AssigneeScope {
    fn assignee(&self) -> Option<Option<Id>> {
        match self {
            Self::All => None,
            Self::Unassigned => Some(None),
            Self::Stakeholder(id) => Some(Some(*id)),
        }
    }
}

impl From<Option<Id>> for AssigneeScope {
    fn from(assignee_id: Option<Id>) -> Self {
        match assignee_id {
            Some(id) => Self::Stakeholder(id),
            None => Self::Unassigned,
        }
    }
}

impl FromStr for AssigneeScope {
    type Err = RdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "all" => Ok(Self::All),
            "unassigned" | "none" | "null" => Ok(Self::Unassigned),
            other => other.parse::<Id>().map(Self::Stakeholder).map_err(|_| {
                RdError::invalid_range("assignee", format!("'{}' is not a stakeholder id", s))
            }),
        }
    }
}

/// Assignment bookkeeping and capacity queries over a [`ResourceStore`]
pub struct AllocationService<S: ResourceStore> {
    store: Arc<S>,
    config: AllocationConfig,
}

impl<S: ResourceStore> Clone for AllocationService<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            config: self.config,
        }
    }
}

impl<S: ResourceStore> AllocationService<S> {
    pub fn new(store: Arc<S>, config: AllocationConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &AllocationConfig {
        &self.config
    }

    pub async fn get_allocation_summary(&self) -> RdResult<AllocationSummary> {
        let snapshot = self.store.snapshot().await?;
        let resources = derive_all(&snapshot.stakeholders, &snapshot.tasks);
        let summary = AllocationSummary::build(resources, &snapshot.tasks, &self.config);

        debug!(
            stakeholders = summary.total_stakeholders,
            overallocated = summary.overallocated_stakeholders,
            underallocated = summary.underallocated_stakeholders,
            "allocation summary computed"
        );
        Ok(summary)
    }

    /// Every stakeholder with derived utilization, in directory order
    pub async fn stakeholder_resources(&self) -> RdResult<Vec<StakeholderResource>> {
        let snapshot = self.store.snapshot().await?;
        Ok(derive_all(&snapshot.stakeholders, &snapshot.tasks))
    }

    pub async fn stakeholder_resource(&self, id: Id) -> RdResult<StakeholderResource> {
        let snapshot = self.store.snapshot().await?;
        let stakeholder = snapshot
            .stakeholder(id)
            .ok_or_else(|| RdError::not_found(Stakeholder::TYPE_NAME, id))?;
        Ok(StakeholderResource::derive(stakeholder, &snapshot.tasks))
    }

    /// Tasks owned by `assignee_id` (`None` = unassigned) in store order
    pub async fn get_tasks_for_assignee(&self, assignee_id: Option<Id>) -> RdResult<Vec<Task>> {
        self.store.tasks_by_assignee(assignee_id).await
    }

    /// Scoped, filtered, and optionally sorted task listing
    pub async fn find_tasks(
        &self,
        scope: AssigneeScope,
        filter: &TaskFilter,
        sort: Option<TaskSort>,
        today: NaiveDate,
    ) -> RdResult<Vec<Task>> {
        let tasks = match scope.assignee() {
            Some(assignee_id) => self.store.tasks_by_assignee(assignee_id).await?,
            None => self.store.list_tasks().await?,
        };

        let mut tasks = filter.apply(tasks, today);
        if let Some(sort) = sort {
            sort.apply(&mut tasks);
        }
        Ok(tasks)
    }

    pub async fn find_task(&self, id: Id) -> RdResult<Task> {
        self.store
            .find_task(id)
            .await?
            .ok_or_else(|| RdError::not_found(Task::TYPE_NAME, id))
    }

    /// Set the owner of one task; fails `NotFound` for an unknown task or
    /// stakeholder
    pub async fn assign_task(&self, task_id: Id, assignee_id: Option<Id>) -> RdResult<Task> {
        self.store.assign_task(task_id, assignee_id).await
    }

    /// Best-effort bulk assignment; unknown task ids land in `skipped`
    pub async fn bulk_assign_tasks(
        &self,
        task_ids: &[Id],
        assignee_id: Option<Id>,
    ) -> RdResult<BatchResult<Task>> {
        let batch = self.store.assign_tasks(task_ids, assignee_id).await?;
        if batch.is_partial() {
            info!(skipped = ?batch.skipped, "bulk assignment partially applied");
        }
        Ok(batch)
    }

    /// Projected utilization if the tasks moved; nothing is written
    pub async fn calculate_reassignment_impact(
        &self,
        task_ids: &[Id],
        new_assignee_id: Option<Id>,
    ) -> RdResult<ReassignmentImpact> {
        let snapshot = self.store.snapshot().await?;
        Ok(project_reassignment(&snapshot, task_ids, new_assignee_id))
    }
}

fn derive_all(stakeholders: &[Stakeholder], tasks: &[Task]) -> Vec<StakeholderResource> {
    stakeholders
        .iter()
        .map(|s| StakeholderResource::derive(s, tasks))
        .collect()
}
