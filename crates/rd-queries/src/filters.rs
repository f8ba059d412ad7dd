//! Task filters
//!
//! A `TaskFilter` is a conjunction of optional conditions. Empty conditions
//! match everything, so `TaskFilter::default()` keeps every task.

use std::collections::HashSet;
use std::str::FromStr;

use chrono::{Datelike, Duration, NaiveDate};
use rd_core::error::RdError;
use rd_core::traits::Id;
use rd_core::types::Hours;
use rd_models::{Priority, Task, TaskStatus};
use serde::{Deserialize, Serialize};

/// Due-date window relative to a supplied "today"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DueWindow {
    Overdue,
    Today,
    ThisWeek,
    NextWeek,
    ThisMonth,
}

impl DueWindow {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Overdue => "overdue",
            Self::Today => "today",
            Self::ThisWeek => "this_week",
            Self::NextWeek => "next_week",
            Self::ThisMonth => "this_month",
        }
    }

    /// Weeks start on Sunday.
    pub fn contains(&self, due: NaiveDate, today: NaiveDate) -> bool {
        match self {
            Self::Overdue => due < today,
            Self::Today => due == today,
            Self::ThisWeek => {
                let start = week_start(today);
                (start..=start + Duration::days(6)).contains(&due)
            }
            Self::NextWeek => {
                let start = week_start(today) + Duration::days(7);
                (start..=start + Duration::days(6)).contains(&due)
            }
            Self::ThisMonth => due.year() == today.year() && due.month() == today.month(),
        }
    }
}

fn week_start(day: NaiveDate) -> NaiveDate {
    day - Duration::days(i64::from(day.weekday().num_days_from_sunday()))
}

impl FromStr for DueWindow {
    type Err = RdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "overdue" => Ok(Self::Overdue),
            "today" => Ok(Self::Today),
            "this_week" => Ok(Self::ThisWeek),
            "next_week" => Ok(Self::NextWeek),
            "this_month" => Ok(Self::ThisMonth),
            other => Err(RdError::invalid_range(
                "due",
                format!("unknown due window '{}'", other),
            )),
        }
    }
}

/// Filter over tasks; every set condition must hold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskFilter {
    /// Case-insensitive substring of title or description
    pub search: Option<String>,
    pub priorities: HashSet<Priority>,
    pub statuses: HashSet<TaskStatus>,
    /// Any-match
    pub tags: HashSet<String>,
    /// Unassigned tasks never match a non-empty assignee set
    pub assignees: HashSet<Id>,
    pub min_estimated_hours: Option<Hours>,
    pub max_estimated_hours: Option<Hours>,
    pub min_completion: Option<f64>,
    pub max_completion: Option<f64>,
    pub due: Option<DueWindow>,
    pub show_completed: bool,
}

impl Default for TaskFilter {
    fn default() -> Self {
        Self {
            search: None,
            priorities: HashSet::new(),
            statuses: HashSet::new(),
            tags: HashSet::new(),
            assignees: HashSet::new(),
            min_estimated_hours: None,
            max_estimated_hours: None,
            min_completion: None,
            max_completion: None,
            due: None,
            show_completed: true,
        }
    }
}

impl TaskFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.search = if text.trim().is_empty() { None } else { Some(text) };
        self
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priorities.insert(priority);
        self
    }

    pub fn status(mut self, status: TaskStatus) -> Self {
        self.statuses.insert(status);
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    pub fn assignee(mut self, id: Id) -> Self {
        self.assignees.insert(id);
        self
    }

    pub fn estimated_hours(mut self, min: Option<Hours>, max: Option<Hours>) -> Self {
        self.min_estimated_hours = min;
        self.max_estimated_hours = max;
        self
    }

    pub fn completion(mut self, min: Option<f64>, max: Option<f64>) -> Self {
        self.min_completion = min;
        self.max_completion = max;
        self
    }

    pub fn due_within(mut self, window: DueWindow) -> Self {
        self.due = Some(window);
        self
    }

    pub fn hide_completed(mut self) -> Self {
        self.show_completed = false;
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, task: &Task, today: NaiveDate) -> bool {
        if let Some(needle) = &self.search {
            let needle = needle.to_lowercase();
            if !task.title.to_lowercase().contains(&needle)
                && !task.description.to_lowercase().contains(&needle)
            {
                return false;
            }
        }

        if !self.priorities.is_empty() && !self.priorities.contains(&task.priority) {
            return false;
        }
        if !self.statuses.is_empty() && !self.statuses.contains(&task.status) {
            return false;
        }
        if !self.show_completed && task.status == TaskStatus::Completed {
            return false;
        }
        if !self.tags.is_empty() && !task.tags.iter().any(|t| self.tags.contains(t)) {
            return false;
        }
        if !self.assignees.is_empty() {
            match task.assignee_id {
                Some(id) if self.assignees.contains(&id) => {}
                _ => return false,
            }
        }

        if self.min_estimated_hours.is_some_and(|min| task.estimated_hours < min) {
            return false;
        }
        if self.max_estimated_hours.is_some_and(|max| task.estimated_hours > max) {
            return false;
        }
        if self.min_completion.is_some_and(|min| task.completion_percentage < min) {
            return false;
        }
        if self.max_completion.is_some_and(|max| task.completion_percentage > max) {
            return false;
        }

        match self.due {
            Some(window) => window.contains(task.due_date, today),
            None => true,
        }
    }

    /// Keep matching tasks, preserving their order
    pub fn apply(&self, tasks: Vec<Task>, today: NaiveDate) -> Vec<Task> {
        tasks.into_iter().filter(|t| self.matches(t, today)).collect()
    }
}
