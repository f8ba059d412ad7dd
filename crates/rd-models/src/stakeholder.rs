//! Stakeholder model and its derived resource view

use rd_core::error::RdError;
use rd_core::result::RdResult;
use rd_core::traits::{Entity, Id, Identifiable};
use rd_core::types::Hours;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::priority::Priority;
use crate::status::TaskStatus;
use crate::task::Task;
use crate::validation::validate_entity;

/// A person who can be assigned work
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Stakeholder {
    pub id: Id,

    #[validate(length(min = 1, max = 255, message = "must not be blank"))]
    pub name: String,

    pub role: String,

    #[validate(email(message = "is not a valid email address"))]
    pub email: String,

    #[serde(default)]
    pub department: Option<String>,

    /// Capacity per planning period
    pub available_hours: Hours,

    /// Hours committed outside tracked tasks (meetings, support rotation)
    #[serde(default)]
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub reserved_hours: f64,
}

impl Identifiable for Stakeholder {
    fn id(&self) -> Id {
        self.id
    }
}

impl Entity for Stakeholder {
    const TYPE_NAME: &'static str = "Stakeholder";
}

impl Stakeholder {
    pub fn new(
        id: Id,
        name: impl Into<String>,
        role: impl Into<String>,
        email: impl Into<String>,
        available_hours: Hours,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            role: role.into(),
            email: email.into(),
            department: None,
            available_hours,
            reserved_hours: 0.0,
        }
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    pub fn with_reserved_hours(mut self, hours: Hours) -> Self {
        self.reserved_hours = hours;
        self
    }

    pub fn ensure_valid(&self) -> RdResult<()> {
        validate_entity(self)?;
        if !(self.available_hours > 0.0 && self.available_hours.is_finite()) {
            return Err(RdError::invalid_range(
                "available_hours",
                "must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Hours allocated given the current task set
    pub fn allocated_hours(&self, tasks: &[Task]) -> Hours {
        self.reserved_hours
            + tasks
                .iter()
                .filter(|t| t.assignee_id == Some(self.id))
                .map(Task::remaining_hours)
                .sum::<Hours>()
    }
}

/// `round(allocated / available × 100)`; not capped at 100.
///
/// Zero or negative capacity yields 0 rather than dividing by zero.
pub fn utilization_rate(allocated: Hours, available: Hours) -> i64 {
    if available <= 0.0 {
        return 0;
    }
    ((allocated / available) * 100.0).round().max(0.0) as i64
}

/// Task counts per priority tier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TasksByPriority {
    pub low: u32,
    pub medium: u32,
    pub high: u32,
    pub critical: u32,
}

impl TasksByPriority {
    pub fn increment(&mut self, priority: Priority) {
        match priority {
            Priority::Low => self.low += 1,
            Priority::Medium => self.medium += 1,
            Priority::High => self.high += 1,
            Priority::Critical => self.critical += 1,
        }
    }

    pub fn get(&self, priority: Priority) -> u32 {
        match priority {
            Priority::Low => self.low,
            Priority::Medium => self.medium,
            Priority::High => self.high,
            Priority::Critical => self.critical,
        }
    }

    pub fn total(&self) -> u32 {
        self.low + self.medium + self.high + self.critical
    }
}

/// Stakeholder plus the aggregates derived from the tasks assigned to them.
///
/// Always rebuilt from the current task set; never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StakeholderResource {
    #[serde(flatten)]
    pub stakeholder: Stakeholder,
    pub allocated_hours: Hours,
    pub utilization_rate: i64,
    pub total_tasks: u32,
    pub completed_tasks: u32,
    pub tasks_by_priority: TasksByPriority,
}

impl StakeholderResource {
    pub fn derive(stakeholder: &Stakeholder, tasks: &[Task]) -> Self {
        let mut total_tasks = 0;
        let mut completed_tasks = 0;
        let mut tasks_by_priority = TasksByPriority::default();

        for task in tasks.iter().filter(|t| t.assignee_id == Some(stakeholder.id)) {
            total_tasks += 1;
            if task.status == TaskStatus::Completed {
                completed_tasks += 1;
            }
            tasks_by_priority.increment(task.priority);
        }

        let allocated_hours = stakeholder.allocated_hours(tasks);
        Self {
            stakeholder: stakeholder.clone(),
            allocated_hours,
            utilization_rate: utilization_rate(allocated_hours, stakeholder.available_hours),
            total_tasks,
            completed_tasks,
            tasks_by_priority,
        }
    }

    pub fn id(&self) -> Id {
        self.stakeholder.id
    }

    pub fn available_hours(&self) -> Hours {
        self.stakeholder.available_hours
    }
}
