//! Task model

use chrono::NaiveDate;
use rd_core::error::RdError;
use rd_core::result::RdResult;
use rd_core::traits::{Entity, Id, Identifiable};
use rd_core::types::{parse_date, parse_optional_date, Hours};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::priority::Priority;
use crate::status::TaskStatus;
use crate::validation::validate_entity;

/// A unit of work.
///
/// Ownership is by reference: `assignee_id` points at a stakeholder, `None`
/// means unassigned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: Id,

    #[validate(length(min = 1, max = 255, message = "must not be blank"))]
    pub title: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub priority: Priority,

    #[serde(default)]
    pub status: TaskStatus,

    pub due_date: NaiveDate,

    #[serde(default)]
    pub start_date: Option<NaiveDate>,

    /// Planned effort
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub estimated_hours: f64,

    /// Logged effort, informational only
    #[serde(default)]
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub actual_hours: Option<f64>,

    /// May be fractional
    #[validate(range(min = 0.0, max = 100.0, message = "must be between 0 and 100"))]
    pub completion_percentage: f64,

    #[serde(default)]
    pub assignee_id: Option<Id>,

    #[serde(default)]
    pub project_id: Option<Id>,

    /// Free-text labels; order is kept for display
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Identifiable for Task {
    fn id(&self) -> Id {
        self.id
    }
}

impl Entity for Task {
    const TYPE_NAME: &'static str = "Task";
}

impl Task {
    pub fn new(id: Id, title: impl Into<String>, due_date: NaiveDate) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            priority: Priority::default(),
            status: TaskStatus::default(),
            due_date,
            start_date: None,
            estimated_hours: 0.0,
            actual_hours: None,
            completion_percentage: 0.0,
            assignee_id: None,
            project_id: None,
            tags: Vec::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_estimated_hours(mut self, hours: Hours) -> Self {
        self.estimated_hours = hours;
        self
    }

    pub fn with_completion(mut self, percentage: f64) -> Self {
        self.completion_percentage = percentage;
        self
    }

    pub fn with_assignee(mut self, assignee_id: Id) -> Self {
        self.assignee_id = Some(assignee_id);
        self
    }

    pub fn with_project(mut self, project_id: Id) -> Self {
        self.project_id = Some(project_id);
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Estimated hours not yet reflected by the completion percentage.
    ///
    /// Status plays no part; only 100% completion zeroes it.
    pub fn remaining_hours(&self) -> Hours {
        let done = self.completion_percentage.clamp(0.0, 100.0) / 100.0;
        (self.estimated_hours * (1.0 - done)).max(0.0)
    }

    pub fn is_assigned_to(&self, assignee_id: Option<Id>) -> bool {
        self.assignee_id == assignee_id
    }

    pub fn is_unassigned(&self) -> bool {
        self.assignee_id.is_none()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Check field ranges, failing with `InvalidRange`
    pub fn ensure_valid(&self) -> RdResult<()> {
        validate_entity(self)?;
        if !self.estimated_hours.is_finite() {
            return Err(RdError::invalid_range("estimated_hours", "must be finite"));
        }
        if !self.completion_percentage.is_finite() {
            return Err(RdError::invalid_range(
                "completion_percentage",
                "must be between 0 and 100",
            ));
        }
        if let Some(start) = self.start_date {
            if start > self.due_date {
                return Err(RdError::invalid_range(
                    "start_date",
                    "must not be after the due date",
                ));
            }
        }
        Ok(())
    }
}

/// Wire form of a task as submitted by clients, with dates still as text.
///
/// Converting into [`Task`] parses the dates and checks ranges, so a
/// malformed due date fails fast instead of producing a meaningless day count.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskInput {
    pub id: Id,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: TaskStatus,
    pub due_date: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub estimated_hours: f64,
    #[serde(default)]
    pub actual_hours: Option<f64>,
    #[serde(default)]
    pub completion_percentage: f64,
    #[serde(default)]
    pub assignee_id: Option<Id>,
    #[serde(default)]
    pub project_id: Option<Id>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl TryFrom<TaskInput> for Task {
    type Error = RdError;

    fn try_from(input: TaskInput) -> Result<Self, Self::Error> {
        let due_date = parse_date(&input.due_date)?;
        let start_date = parse_optional_date(input.start_date.as_deref())?;

        let pct = input.completion_percentage;
        if !pct.is_finite() || !(0.0..=100.0).contains(&pct) {
            return Err(RdError::invalid_range(
                "completion_percentage",
                "must be between 0 and 100",
            ));
        }

        let task = Task {
            id: input.id,
            title: input.title,
            description: input.description,
            priority: input.priority,
            status: input.status,
            due_date,
            start_date,
            estimated_hours: input.estimated_hours,
            actual_hours: input.actual_hours,
            completion_percentage: pct,
            assignee_id: input.assignee_id,
            project_id: input.project_id,
            tags: input.tags,
        };
        task.ensure_valid()?;
        Ok(task)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn due() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 20).unwrap()
    }

    fn input(due_date: &str) -> TaskInput {
        TaskInput {
            id: 1,
            title: "Design user dashboard".into(),
            description: String::new(),
            priority: Priority::High,
            status: TaskStatus::InProgress,
            due_date: due_date.into(),
            start_date: None,
            estimated_hours: 16.0,
            actual_hours: None,
            completion_percentage: 60.0,
            assignee_id: Some(3),
            project_id: Some(1),
            tags: vec!["design".into()],
        }
    }

    #[test]
    fn test_remaining_hours() {
        let task = Task::new(1, "Write tests", due())
            .with_estimated_hours(20.0)
            .with_completion(50.0);
        assert_eq!(task.remaining_hours(), 10.0);
    }

    #[test]
    fn test_remaining_hours_zero_when_done() {
        let done = Task::new(1, "Done", due())
            .with_estimated_hours(20.0)
            .with_completion(100.0);
        assert_eq!(done.remaining_hours(), 0.0);
    }

    #[test]
    fn test_remaining_hours_ignores_status() {
        let cancelled = Task::new(2, "Dropped", due())
            .with_estimated_hours(20.0)
            .with_completion(50.0)
            .with_status(TaskStatus::Cancelled);
        assert_eq!(cancelled.remaining_hours(), 10.0);
    }

    #[test]
    fn test_remaining_hours_fractional_completion() {
        let task = Task::new(1, "Partial", due())
            .with_estimated_hours(10.0)
            .with_completion(12.5);
        assert!((task.remaining_hours() - 8.75).abs() < 1e-9);
    }

    #[test]
    fn test_negative_hours_rejected() {
        let task = Task::new(1, "Bad", due()).with_estimated_hours(-4.0);
        let err = task.ensure_valid().unwrap_err();
        assert!(matches!(err, RdError::InvalidRange { ref field, .. } if field == "estimated_hours"));
    }

    #[test]
    fn test_completion_over_100_rejected() {
        let task = Task::new(1, "Bad", due()).with_completion(120.0);
        assert!(task.ensure_valid().is_err());
    }

    #[test]
    fn test_input_conversion() {
        let task = Task::try_from(input("2025-05-20")).unwrap();
        assert_eq!(task.due_date, due());
        assert_eq!(task.completion_percentage, 60.0);
        assert_eq!(task.assignee_id, Some(3));
    }

    #[test]
    fn test_input_malformed_date_fails_fast() {
        let err = Task::try_from(input("next tuesday")).unwrap_err();
        assert!(matches!(err, RdError::InvalidDate { .. }));
    }

    #[test]
    fn test_input_completion_out_of_range() {
        let mut raw = input("2025-05-20");
        raw.completion_percentage = -5.0;
        let err = Task::try_from(raw).unwrap_err();
        assert!(matches!(err, RdError::InvalidRange { .. }));
    }

    #[test]
    fn test_input_keeps_fractional_completion() {
        let mut raw = input("2025-05-20");
        raw.completion_percentage = 64.4;
        let task = Task::try_from(raw).unwrap();
        assert_eq!(task.completion_percentage, 64.4);
    }

    #[test]
    fn test_task_json_accepts_fractional_completion() {
        let json = serde_json::json!({
            "id": 3,
            "title": "Docs",
            "dueDate": "2025-05-20",
            "estimatedHours": 8.0,
            "completionPercentage": 64.5
        });
        let task: Task = serde_json::from_value(json).unwrap();
        assert_eq!(task.completion_percentage, 64.5);
        assert!(task.ensure_valid().is_ok());
    }

    #[test]
    fn test_task_json_shape() {
        let task = Task::new(7, "Onboarding", due()).with_assignee(3);
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["dueDate"], "2025-05-20");
        assert_eq!(json["assigneeId"], 3);
        assert_eq!(json["status"], "not_started");
    }
}
