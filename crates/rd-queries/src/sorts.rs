//! Task sort orders
//!
//! Sorting is stable, so tasks that compare equal keep their store order.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use rd_core::error::RdError;
use rd_models::Task;
use serde::{Deserialize, Serialize};

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }

    pub fn reverse(&self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    fn apply(&self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }
}

/// Attribute a task list can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskSortKey {
    DueDate,
    /// Severity order, low to critical
    Priority,
    EstimatedHours,
    Completion,
}

impl TaskSortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DueDate => "due_date",
            Self::Priority => "priority",
            Self::EstimatedHours => "estimated_hours",
            Self::Completion => "completion",
        }
    }

    fn compare(&self, a: &Task, b: &Task) -> Ordering {
        match self {
            Self::DueDate => a.due_date.cmp(&b.due_date),
            Self::Priority => a.priority.cmp(&b.priority),
            Self::EstimatedHours => a.estimated_hours.total_cmp(&b.estimated_hours),
            Self::Completion => a.completion_percentage.total_cmp(&b.completion_percentage),
        }
    }
}

/// Sort option as offered by the task list, e.g. `priority_desc`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSort {
    pub key: TaskSortKey,
    pub direction: SortDirection,
}

impl Default for TaskSort {
    fn default() -> Self {
        Self::asc(TaskSortKey::DueDate)
    }
}

impl TaskSort {
    pub fn new(key: TaskSortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }

    pub fn asc(key: TaskSortKey) -> Self {
        Self::new(key, SortDirection::Asc)
    }

    pub fn desc(key: TaskSortKey) -> Self {
        Self::new(key, SortDirection::Desc)
    }

    pub fn compare(&self, a: &Task, b: &Task) -> Ordering {
        self.direction.apply(self.key.compare(a, b))
    }

    pub fn apply(&self, tasks: &mut [Task]) {
        tasks.sort_by(|a, b| self.compare(a, b));
    }
}

impl fmt::Display for TaskSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.key.as_str(), self.direction.as_str())
    }
}

impl FromStr for TaskSort {
    type Err = RdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || RdError::invalid_range("sort", format!("unknown sort option '{}'", s));

        let lower = s.to_lowercase();
        let (key, direction) = lower.rsplit_once('_').ok_or_else(unknown)?;
        let direction = match direction {
            "asc" => SortDirection::Asc,
            "desc" => SortDirection::Desc,
            _ => return Err(unknown()),
        };
        let key = match key {
            "due_date" => TaskSortKey::DueDate,
            "priority" => TaskSortKey::Priority,
            "estimated_hours" => TaskSortKey::EstimatedHours,
            "completion" => TaskSortKey::Completion,
            _ => return Err(unknown()),
        };
        Ok(Self::new(key, direction))
    }
}
