//! Deadline/progress classifier
//!
//! Each task is measured against a linear progress curve over a nominal
//! duration ending on the due date. Tasks behind the curve escalate by how
//! close the deadline is.

use chrono::NaiveDate;
use rd_core::config::EscalationConfig;
use rd_core::result::RdResult;
use rd_core::types::days_between;
use rd_models::{Task, TaskInput};
use serde::Serialize;
use tracing::debug;

use super::level::{EscalationAction, EscalationLevel, EscalationRole};

/// Per-task classifier output; only produced for levels above `None`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EscalationResult {
    pub task: Task,
    pub level: EscalationLevel,
    /// Negative when overdue
    pub days_until_due: i64,
    pub expected_progress: f64,
    pub actions: Vec<EscalationAction>,
    pub message: String,
    pub escalation_path: Vec<EscalationRole>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EscalationClassifier {
    config: EscalationConfig,
}

impl EscalationClassifier {
    pub fn new(config: EscalationConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EscalationConfig {
        &self.config
    }

    /// Percentage a task should have reached `days_until_due` days before
    /// its deadline, clamped to `[0, 100]`
    pub fn expected_progress(&self, days_until_due: i64) -> f64 {
        let total = self.config.nominal_duration_days as f64;
        if total <= 0.0 {
            return 100.0;
        }
        let elapsed = total - days_until_due as f64;
        (elapsed / total * 100.0).clamp(0.0, 100.0)
    }

    /// First matching threshold wins, most urgent first
    pub fn calculate_level(
        &self,
        days_until_due: i64,
        completion_percentage: f64,
        expected_progress: f64,
    ) -> EscalationLevel {
        if completion_percentage >= 100.0 || completion_percentage >= expected_progress {
            return EscalationLevel::None;
        }

        let c = &self.config;
        if days_until_due <= 0 {
            EscalationLevel::Critical
        } else if days_until_due <= c.high_threshold_days {
            EscalationLevel::High
        } else if days_until_due <= c.medium_threshold_days {
            EscalationLevel::Medium
        } else if days_until_due <= c.low_threshold_days {
            EscalationLevel::Low
        } else {
            EscalationLevel::None
        }
    }

    pub fn process_task(&self, task: &Task, today: NaiveDate) -> Option<EscalationResult> {
        if task.status.is_terminal() {
            return None;
        }

        let days_until_due = days_between(today, task.due_date);
        let expected = self.expected_progress(days_until_due);
        let pct = task.completion_percentage;
        let level = self.calculate_level(days_until_due, pct, expected);

        debug!(
            task_id = task.id,
            days_until_due,
            expected_progress = expected,
            completion = pct,
            level = %level,
            "task classified"
        );

        if level == EscalationLevel::None {
            return None;
        }

        Some(EscalationResult {
            message: escalation_message(level, days_until_due, &task.title, pct),
            task: task.clone(),
            level,
            days_until_due,
            expected_progress: expected,
            actions: level.actions().to_vec(),
            escalation_path: level.escalation_path().to_vec(),
        })
    }

    /// Classify every task, dropping those that need no escalation
    pub fn process_tasks(&self, tasks: &[Task], today: NaiveDate) -> Vec<EscalationResult> {
        tasks
            .iter()
            .filter_map(|t| self.process_task(t, today))
            .collect()
    }

    /// Parse submitted tasks and classify them; the first malformed date
    /// fails the whole call
    pub fn process_inputs(
        &self,
        inputs: Vec<TaskInput>,
        today: NaiveDate,
    ) -> RdResult<Vec<EscalationResult>> {
        let tasks = inputs
            .into_iter()
            .map(Task::try_from)
            .collect::<RdResult<Vec<_>>>()?;
        Ok(self.process_tasks(&tasks, today))
    }
}

fn due_phrase(days_until_due: i64) -> String {
    match days_until_due {
        d if d <= 0 => "overdue".to_string(),
        1 => "due tomorrow".to_string(),
        d => format!("due in {} days", d),
    }
}

pub fn escalation_message(level: EscalationLevel, days_until_due: i64, title: &str, pct: f64) -> String {
    let due = due_phrase(days_until_due);
    match level {
        EscalationLevel::Critical => format!(
            "CRITICAL: Task \"{}\" is {} with only {}% completion. Immediate action required!",
            title, due, pct
        ),
        EscalationLevel::High => format!(
            "HIGH RISK: Task \"{}\" is {} with insufficient progress ({}%). Urgent attention needed.",
            title, due, pct
        ),
        EscalationLevel::Medium => format!(
            "ATTENTION: Task \"{}\" is {} but only at {}% completion. Action required soon.",
            title, due, pct
        ),
        EscalationLevel::Low => format!(
            "NOTICE: Task \"{}\" is {} with {}% completion. Progress review recommended.",
            title, due, pct
        ),
        EscalationLevel::None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use rd_core::error::RdError;
    use rd_models::{Priority, TaskStatus};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 15).unwrap()
    }

    fn task_due_in(days: i64, pct: f64) -> Task {
        Task::new(1, "Implement authentication service", today() + Duration::days(days))
            .with_status(TaskStatus::InProgress)
            .with_priority(Priority::Critical)
            .with_completion(pct)
    }

    fn classifier() -> EscalationClassifier {
        EscalationClassifier::default()
    }

    #[test]
    fn test_due_today_low_progress_is_critical() {
        let result = classifier().process_task(&task_due_in(0, 10.0), today()).unwrap();

        assert_eq!(result.level, EscalationLevel::Critical);
        assert_eq!(result.days_until_due, 0);
        for action in [
            EscalationAction::NotifyAssignee,
            EscalationAction::NotifyManager,
            EscalationAction::NotifyStakeholders,
            EscalationAction::EscalateToExecutive,
            EscalationAction::EmergencyMeeting,
        ] {
            assert!(result.actions.contains(&action));
        }
        assert_eq!(result.escalation_path.len(), 4);
        assert_eq!(result.escalation_path.last(), Some(&EscalationRole::ExecutiveSponsor));
        assert_eq!(
            result.message,
            "CRITICAL: Task \"Implement authentication service\" is overdue with only 10% completion. Immediate action required!"
        );
    }

    #[test]
    fn test_ahead_of_curve_is_not_escalated() {
        // expected ≈ 64%
        assert!((classifier().expected_progress(5) - 64.2857).abs() < 0.001);
        assert!(classifier().process_task(&task_due_in(5, 80.0), today()).is_none());
    }

    #[test]
    fn test_thresholds() {
        let c = classifier();
        let level = |days| c.process_task(&task_due_in(days, 0.0), today()).map(|r| r.level);

        assert_eq!(level(-3), Some(EscalationLevel::Critical));
        assert_eq!(level(1), Some(EscalationLevel::High));
        assert_eq!(level(3), Some(EscalationLevel::Medium));
        assert_eq!(level(7), Some(EscalationLevel::Low));
        assert_eq!(level(8), None);
    }

    #[test]
    fn test_severity_never_drops_as_deadline_nears() {
        let c = classifier();
        let pct = 5.0;
        let mut previous = EscalationLevel::None;
        for days in (-5..=20).rev() {
            let expected = c.expected_progress(days);
            if pct >= expected {
                continue;
            }
            let level = c.calculate_level(days, pct, expected);
            assert!(level >= previous, "level dropped at {} days", days);
            previous = level;
        }
        assert_eq!(previous, EscalationLevel::Critical);
    }

    #[test]
    fn test_on_track_suppression() {
        let c = classifier();
        for days in -10..=30 {
            let expected = c.expected_progress(days);
            let pct = expected;
            assert!(
                c.process_task(&task_due_in(days, pct), today()).is_none(),
                "escalated on-track task at {} days",
                days
            );
        }
    }

    #[test]
    fn test_fractional_completion_at_the_boundary() {
        // due in 5 days: expected 64.2857%
        let c = classifier();
        let inputs = |pct: f64| {
            vec![TaskInput {
                id: 4,
                title: "Implement data visualization components".into(),
                description: String::new(),
                priority: Priority::High,
                status: TaskStatus::InProgress,
                due_date: "2025-05-20".into(),
                start_date: None,
                estimated_hours: 20.0,
                actual_hours: None,
                completion_percentage: pct,
                assignee_id: Some(2),
                project_id: None,
                tags: vec![],
            }]
        };

        assert!(c.process_inputs(inputs(64.4), today()).unwrap().is_empty());

        let behind = c.process_inputs(inputs(64.2), today()).unwrap();
        assert_eq!(behind.len(), 1);
        assert_eq!(behind[0].level, EscalationLevel::Low);
        assert!(behind[0].message.contains("with 64.2% completion"));
    }

    #[test]
    fn test_almost_done_still_escalates() {
        let result = classifier().process_task(&task_due_in(0, 99.6), today()).unwrap();
        assert_eq!(result.level, EscalationLevel::Critical);
        assert!(result.message.contains("only 99.6% completion"));
    }

    #[test]
    fn test_terminal_tasks_never_escalate() {
        let c = classifier();
        for status in [TaskStatus::Completed, TaskStatus::Cancelled] {
            let task = task_due_in(-10, 0.0).with_status(status);
            assert!(c.process_task(&task, today()).is_none());
        }
    }

    #[test]
    fn test_messages_use_due_phrases() {
        let high = classifier().process_task(&task_due_in(1, 0.0), today()).unwrap();
        assert!(high.message.starts_with("HIGH RISK:"));
        assert!(high.message.contains("is due tomorrow"));

        let low = classifier().process_task(&task_due_in(6, 0.0), today()).unwrap();
        assert_eq!(
            low.message,
            "NOTICE: Task \"Implement authentication service\" is due in 6 days with 0% completion. Progress review recommended."
        );
    }

    #[test]
    fn test_batch_drops_non_escalated() {
        let tasks = vec![task_due_in(0, 10.0), task_due_in(5, 80.0), task_due_in(2, 0.0)];
        let results = classifier().process_tasks(&tasks, today());
        assert_eq!(results.len(), 2);
        assert_eq!(results[1].level, EscalationLevel::Medium);
    }

    #[test]
    fn test_malformed_date_fails_fast() {
        let input = TaskInput {
            id: 9,
            title: "Broken".into(),
            description: String::new(),
            priority: Priority::Low,
            status: TaskStatus::InProgress,
            due_date: "2025-13-45".into(),
            start_date: None,
            estimated_hours: 1.0,
            actual_hours: None,
            completion_percentage: 0.0,
            assignee_id: None,
            project_id: None,
            tags: vec![],
        };
        let err = classifier().process_inputs(vec![input], today()).unwrap_err();
        assert!(matches!(err, RdError::InvalidDate { .. }));
    }

    #[test]
    fn test_configured_thresholds() {
        let c = EscalationClassifier::new(EscalationConfig {
            nominal_duration_days: 28,
            low_threshold_days: 14,
            medium_threshold_days: 7,
            high_threshold_days: 2,
        });
        let result = c.process_task(&task_due_in(10, 0.0), today()).unwrap();
        assert_eq!(result.level, EscalationLevel::Low);
    }
}
