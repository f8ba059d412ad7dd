//! Reassignment impact projection
//!
//! Works on a [`Snapshot`] and never writes back, so repeated calls over
//! unchanged state give identical results.

use std::collections::{BTreeMap, HashSet};

use rd_core::traits::Id;
use rd_core::types::Hours;
use rd_models::{utilization_rate, Stakeholder, Task};
use rd_store::Snapshot;
use serde::Serialize;
use tracing::{debug, warn};

/// Before/after numbers for one stakeholder
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StakeholderImpact {
    pub stakeholder_id: Id,
    pub current_allocated_hours: Hours,
    pub projected_allocated_hours: Hours,
    pub current_utilization_rate: i64,
    pub projected_utilization_rate: i64,
}

impl StakeholderImpact {
    fn project(stakeholder: &Stakeholder, tasks: &[Task], delta: Hours) -> Self {
        let current = stakeholder.allocated_hours(tasks);
        let projected = (current + delta).max(0.0);
        Self {
            stakeholder_id: stakeholder.id,
            current_allocated_hours: current,
            projected_allocated_hours: projected,
            current_utilization_rate: utilization_rate(current, stakeholder.available_hours),
            projected_utilization_rate: utilization_rate(projected, stakeholder.available_hours),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReassignmentImpact {
    /// One entry per current owner of the moved tasks, ordered by id
    pub current_assignee_impact: Vec<StakeholderImpact>,
    /// `None` when unassigning, or when the target is not in the directory
    pub new_assignee_impact: Option<StakeholderImpact>,
}

/// Project utilization if `task_ids` moved to `new_assignee_id`.
///
/// Unknown task ids are ignored. An owner that also receives the tasks gets
/// the net change.
pub fn project_reassignment(
    snapshot: &Snapshot,
    task_ids: &[Id],
    new_assignee_id: Option<Id>,
) -> ReassignmentImpact {
    let wanted: HashSet<Id> = task_ids.iter().copied().collect();
    let moving: Vec<&Task> = snapshot
        .tasks
        .iter()
        .filter(|t| wanted.contains(&t.id))
        .collect();

    let mut released: BTreeMap<Id, Hours> = BTreeMap::new();
    for task in &moving {
        if let Some(owner) = task.assignee_id {
            *released.entry(owner).or_insert(0.0) += task.remaining_hours();
        }
    }
    let added: Hours = moving.iter().map(|t| t.remaining_hours()).sum();

    debug!(
        tasks = moving.len(),
        owners = released.len(),
        added_hours = added,
        "projecting reassignment"
    );

    let delta_for = |id: Id, released_hours: Hours| {
        if new_assignee_id == Some(id) {
            added - released_hours
        } else {
            -released_hours
        }
    };

    let current_assignee_impact = released
        .iter()
        .filter_map(|(&id, &hours)| match snapshot.stakeholder(id) {
            Some(stakeholder) => Some(StakeholderImpact::project(
                stakeholder,
                &snapshot.tasks,
                delta_for(id, hours),
            )),
            None => {
                warn!(stakeholder_id = id, "task owner missing from directory");
                None
            }
        })
        .collect();

    let new_assignee_impact = new_assignee_id.and_then(|id| match snapshot.stakeholder(id) {
        Some(stakeholder) => {
            let released_hours = released.get(&id).copied().unwrap_or(0.0);
            Some(StakeholderImpact::project(
                stakeholder,
                &snapshot.tasks,
                delta_for(id, released_hours),
            ))
        }
        None => {
            warn!(stakeholder_id = id, "reassignment target not found");
            None
        }
    });

    ReassignmentImpact {
        current_assignee_impact,
        new_assignee_impact,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rd_models::TaskStatus;

    fn due() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 20).unwrap()
    }

    /// A holds 38h (18 reserved, 10 from task 1, 10 from task 2); B holds 20h.
    fn snapshot() -> Snapshot {
        Snapshot {
            stakeholders: vec![
                Stakeholder::new(1, "Ann", "Developer", "ann@example.com", 40.0)
                    .with_reserved_hours(18.0),
                Stakeholder::new(2, "Bob", "Designer", "bob@example.com", 40.0)
                    .with_reserved_hours(20.0),
            ],
            tasks: vec![
                Task::new(1, "Half done", due())
                    .with_assignee(1)
                    .with_estimated_hours(20.0)
                    .with_completion(50.0),
                Task::new(2, "Fresh", due())
                    .with_assignee(1)
                    .with_estimated_hours(10.0),
                Task::new(3, "Finished", due())
                    .with_assignee(1)
                    .with_estimated_hours(12.0)
                    .with_status(TaskStatus::Completed)
                    .with_completion(100.0),
                Task::new(4, "Backlog", due()).with_estimated_hours(8.0),
            ],
        }
    }

    #[test]
    fn test_unassign_releases_incomplete_effort() {
        let impact = project_reassignment(&snapshot(), &[1], None);

        assert!(impact.new_assignee_impact.is_none());
        let ann = &impact.current_assignee_impact[0];
        assert_eq!(ann.current_allocated_hours, 38.0);
        assert_eq!(ann.current_utilization_rate, 95);
        assert_eq!(ann.projected_allocated_hours, 28.0);
        assert_eq!(ann.projected_utilization_rate, 70);
    }

    #[test]
    fn test_move_is_monotonic() {
        let impact = project_reassignment(&snapshot(), &[2], Some(2));

        let ann = &impact.current_assignee_impact[0];
        assert!(ann.projected_utilization_rate < ann.current_utilization_rate);

        let bob = impact.new_assignee_impact.unwrap();
        assert!(bob.projected_utilization_rate > bob.current_utilization_rate);
        assert_eq!(bob.projected_allocated_hours, 30.0);
    }

    #[test]
    fn test_completed_task_changes_nothing() {
        let impact = project_reassignment(&snapshot(), &[3], Some(2));

        let ann = &impact.current_assignee_impact[0];
        assert_eq!(ann.projected_utilization_rate, ann.current_utilization_rate);
        let bob = impact.new_assignee_impact.unwrap();
        assert_eq!(bob.projected_utilization_rate, bob.current_utilization_rate);
    }

    #[test]
    fn test_unassigned_tasks_only_add() {
        let impact = project_reassignment(&snapshot(), &[4], Some(2));
        assert!(impact.current_assignee_impact.is_empty());
        assert_eq!(impact.new_assignee_impact.unwrap().projected_allocated_hours, 28.0);
    }

    #[test]
    fn test_same_owner_nets_to_zero() {
        let impact = project_reassignment(&snapshot(), &[1, 2], Some(1));
        let ann = impact.new_assignee_impact.unwrap();
        assert_eq!(ann.projected_allocated_hours, ann.current_allocated_hours);
        assert_eq!(impact.current_assignee_impact[0], ann);
    }

    #[test]
    fn test_cancelled_task_moves_its_incomplete_effort() {
        let mut snapshot = snapshot();
        snapshot.tasks.push(
            Task::new(5, "Dropped", due())
                .with_assignee(1)
                .with_estimated_hours(20.0)
                .with_completion(50.0)
                .with_status(TaskStatus::Cancelled),
        );

        let impact = project_reassignment(&snapshot, &[5], Some(2));

        let ann = &impact.current_assignee_impact[0];
        assert_eq!(ann.current_allocated_hours - ann.projected_allocated_hours, 10.0);
        let bob = impact.new_assignee_impact.unwrap();
        assert_eq!(bob.projected_allocated_hours, 30.0);
    }

    #[test]
    fn test_unknown_ids_and_target_are_ignored() {
        let impact = project_reassignment(&snapshot(), &[404], Some(99));
        assert!(impact.current_assignee_impact.is_empty());
        assert!(impact.new_assignee_impact.is_none());
    }

    #[test]
    fn test_projection_is_idempotent() {
        let snapshot = snapshot();
        let first = project_reassignment(&snapshot, &[1, 2, 4], Some(2));
        let second = project_reassignment(&snapshot, &[1, 2, 4], Some(2));
        assert_eq!(first, second);
    }
}
