//! Repository traits
//!
//! Stores are async so a persistent backend can replace the in-memory one
//! without touching the services.

use async_trait::async_trait;
use rd_core::result::{BatchResult, RdResult};
use rd_core::traits::Id;
use rd_models::{Stakeholder, Task};

/// Task persistence and queries
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Find a task by id
    async fn find_task(&self, id: Id) -> RdResult<Option<Task>>;

    /// All tasks in natural (insertion) order
    async fn list_tasks(&self) -> RdResult<Vec<Task>>;

    /// Tasks owned by `assignee_id`; `None` selects unassigned tasks
    async fn tasks_by_assignee(&self, assignee_id: Option<Id>) -> RdResult<Vec<Task>>;

    /// Add a task, rejecting duplicate ids and dangling assignees
    async fn insert_task(&self, task: Task) -> RdResult<Task>;

    /// Set the assignee of one task, leaving every other field untouched
    async fn assign_task(&self, task_id: Id, assignee_id: Option<Id>) -> RdResult<Task>;

    /// Set the assignee of many tasks in one write; unknown ids are skipped
    async fn assign_tasks(
        &self,
        task_ids: &[Id],
        assignee_id: Option<Id>,
    ) -> RdResult<BatchResult<Task>>;
}

/// Stakeholder directory
#[async_trait]
pub trait StakeholderRepository: Send + Sync {
    async fn find_stakeholder(&self, id: Id) -> RdResult<Option<Stakeholder>>;

    async fn list_stakeholders(&self) -> RdResult<Vec<Stakeholder>>;

    async fn insert_stakeholder(&self, stakeholder: Stakeholder) -> RdResult<Stakeholder>;
}

/// Consistent view of tasks and stakeholders taken at one instant
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub tasks: Vec<Task>,
    pub stakeholders: Vec<Stakeholder>,
}

impl Snapshot {
    pub fn task(&self, id: Id) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn stakeholder(&self, id: Id) -> Option<&Stakeholder> {
        self.stakeholders.iter().find(|s| s.id == id)
    }
}

/// A store holding both tasks and stakeholders.
///
/// Derived aggregates are computed from a [`Snapshot`], so a reader never
/// sees an updated assignee next to stale stakeholder numbers.
#[async_trait]
pub trait ResourceStore: TaskRepository + StakeholderRepository {
    async fn snapshot(&self) -> RdResult<Snapshot>;
}
