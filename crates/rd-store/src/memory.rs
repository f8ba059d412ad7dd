//! In-memory store
//!
//! One `RwLock` guards both collections. Every write takes the write lock,
//! which serializes concurrent (bulk) assignments touching the same task.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use rd_core::error::RdError;
use rd_core::result::{BatchResult, RdResult};
use rd_core::traits::{Entity, Id};
use rd_models::{Stakeholder, Task};
use tracing::{debug, info, warn};

use crate::repository::{ResourceStore, Snapshot, StakeholderRepository, TaskRepository};

#[derive(Debug, Default)]
struct StoreState {
    tasks: Vec<Task>,
    stakeholders: Vec<Stakeholder>,
}

impl StoreState {
    fn has_stakeholder(&self, id: Id) -> bool {
        self.stakeholders.iter().any(|s| s.id == id)
    }

    fn ensure_assignee(&self, assignee_id: Option<Id>) -> RdResult<()> {
        match assignee_id {
            Some(id) if !self.has_stakeholder(id) => {
                Err(RdError::not_found(Stakeholder::TYPE_NAME, id))
            }
            _ => Ok(()),
        }
    }
}

/// Store object holding tasks and stakeholders in memory.
///
/// Cloning shares the underlying state; separate `MemoryStore::new()` calls
/// never interfere with each other.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    state: Arc<RwLock<StoreState>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from stakeholders and tasks, validating every record
    pub fn with_data(stakeholders: Vec<Stakeholder>, tasks: Vec<Task>) -> RdResult<Self> {
        let store = Self::new();
        {
            let mut state = store.state.write();
            for stakeholder in stakeholders {
                Self::insert_stakeholder_locked(&mut state, stakeholder)?;
            }
            for task in tasks {
                Self::insert_task_locked(&mut state, task)?;
            }
        }
        Ok(store)
    }

    pub fn task_count(&self) -> usize {
        self.state.read().tasks.len()
    }

    pub fn stakeholder_count(&self) -> usize {
        self.state.read().stakeholders.len()
    }

    fn insert_stakeholder_locked(
        state: &mut StoreState,
        stakeholder: Stakeholder,
    ) -> RdResult<Stakeholder> {
        stakeholder.ensure_valid()?;
        if state.has_stakeholder(stakeholder.id) {
            return Err(RdError::Conflict(format!(
                "stakeholder {} already exists",
                stakeholder.id
            )));
        }
        state.stakeholders.push(stakeholder.clone());
        Ok(stakeholder)
    }

    fn insert_task_locked(state: &mut StoreState, task: Task) -> RdResult<Task> {
        task.ensure_valid()?;
        if state.tasks.iter().any(|t| t.id == task.id) {
            return Err(RdError::Conflict(format!("task {} already exists", task.id)));
        }
        state.ensure_assignee(task.assignee_id)?;
        state.tasks.push(task.clone());
        Ok(task)
    }
}

#[async_trait]
impl TaskRepository for MemoryStore {
    async fn find_task(&self, id: Id) -> RdResult<Option<Task>> {
        Ok(self.state.read().tasks.iter().find(|t| t.id == id).cloned())
    }

    async fn list_tasks(&self) -> RdResult<Vec<Task>> {
        Ok(self.state.read().tasks.clone())
    }

    async fn tasks_by_assignee(&self, assignee_id: Option<Id>) -> RdResult<Vec<Task>> {
        Ok(self
            .state
            .read()
            .tasks
            .iter()
            .filter(|t| t.is_assigned_to(assignee_id))
            .cloned()
            .collect())
    }

    async fn insert_task(&self, task: Task) -> RdResult<Task> {
        let mut state = self.state.write();
        let task = Self::insert_task_locked(&mut state, task)?;
        debug!(task_id = task.id, "task inserted");
        Ok(task)
    }

    async fn assign_task(&self, task_id: Id, assignee_id: Option<Id>) -> RdResult<Task> {
        let mut state = self.state.write();
        state.ensure_assignee(assignee_id)?;

        let task = state
            .tasks
            .iter_mut()
            .find(|t| t.id == task_id)
            .ok_or_else(|| RdError::not_found(Task::TYPE_NAME, task_id))?;

        task.assignee_id = assignee_id;
        info!(task_id, assignee_id = ?assignee_id, "task assigned");
        Ok(task.clone())
    }

    async fn assign_tasks(
        &self,
        task_ids: &[Id],
        assignee_id: Option<Id>,
    ) -> RdResult<BatchResult<Task>> {
        let mut state = self.state.write();
        state.ensure_assignee(assignee_id)?;

        let mut seen = HashSet::new();
        let mut batch = BatchResult::new();

        for &task_id in task_ids {
            if !seen.insert(task_id) {
                continue;
            }
            match state.tasks.iter_mut().find(|t| t.id == task_id) {
                Some(task) => {
                    task.assignee_id = assignee_id;
                    batch.push_applied(task.clone());
                }
                None => {
                    warn!(task_id, "bulk assignment skipped unknown task");
                    batch.push_skipped(task_id);
                }
            }
        }

        info!(
            assignee_id = ?assignee_id,
            applied = batch.applied.len(),
            skipped = batch.skipped_count(),
            "bulk assignment applied"
        );
        Ok(batch)
    }
}

#[async_trait]
impl StakeholderRepository for MemoryStore {
    async fn find_stakeholder(&self, id: Id) -> RdResult<Option<Stakeholder>> {
        Ok(self
            .state
            .read()
            .stakeholders
            .iter()
            .find(|s| s.id == id)
            .cloned())
    }

    async fn list_stakeholders(&self) -> RdResult<Vec<Stakeholder>> {
        Ok(self.state.read().stakeholders.clone())
    }

    async fn insert_stakeholder(&self, stakeholder: Stakeholder) -> RdResult<Stakeholder> {
        let mut state = self.state.write();
        Self::insert_stakeholder_locked(&mut state, stakeholder)
    }
}

#[async_trait]
impl ResourceStore for MemoryStore {
    async fn snapshot(&self) -> RdResult<Snapshot> {
        let state = self.state.read();
        Ok(Snapshot {
            tasks: state.tasks.clone(),
            stakeholders: state.stakeholders.clone(),
        })
    }
}
