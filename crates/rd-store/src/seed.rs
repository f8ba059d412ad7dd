//! Demo data set
//!
//! Six stakeholders and twenty tasks for one project, three of them
//! unassigned. Loaded at startup when demo data is enabled.

use chrono::NaiveDate;
use rd_core::error::RdError;
use rd_core::result::RdResult;
use rd_core::traits::Id;
use rd_models::{Priority, Stakeholder, Task, TaskStatus};

use crate::memory::MemoryStore;

const DEMO_PROJECT: Id = 1;

pub fn demo_stakeholders() -> Vec<Stakeholder> {
    vec![
        Stakeholder::new(1, "John Smith", "Project Manager", "john.smith@example.com", 40.0)
            .with_department("Management")
            .with_reserved_hours(20.0),
        Stakeholder::new(2, "Sarah Johnson", "Lead Developer", "sarah.johnson@example.com", 40.0)
            .with_department("Engineering"),
        Stakeholder::new(3, "Michael Chen", "UX Designer", "michael.chen@example.com", 40.0)
            .with_department("Design")
            .with_reserved_hours(4.0),
        Stakeholder::new(4, "Emily Rodriguez", "QA Engineer", "emily.rodriguez@example.com", 40.0)
            .with_department("Engineering"),
        Stakeholder::new(5, "David Kim", "Backend Developer", "david.kim@example.com", 40.0)
            .with_department("Engineering"),
        Stakeholder::new(6, "Lisa Wang", "Data Analyst", "lisa.wang@example.com", 40.0)
            .with_department("Analytics"),
    ]
}

struct Row {
    id: Id,
    title: &'static str,
    description: &'static str,
    priority: Priority,
    status: TaskStatus,
    due: (i32, u32, u32),
    hours: f64,
    pct: u8,
    assignee: Option<Id>,
    tags: &'static [&'static str],
}

const TASKS: &[Row] = &[
    Row { id: 1, title: "Design user dashboard", description: "Create wireframes and mockups for the main user dashboard", priority: Priority::High, status: TaskStatus::InProgress, due: (2025, 5, 20), hours: 16.0, pct: 60, assignee: Some(3), tags: &["design", "ui", "dashboard"] },
    Row { id: 2, title: "Implement authentication service", description: "Develop the authentication service with JWT support", priority: Priority::Critical, status: TaskStatus::InProgress, due: (2025, 5, 15), hours: 24.0, pct: 40, assignee: Some(5), tags: &["backend", "auth", "security"] },
    Row { id: 3, title: "Create API documentation", description: "Document all API endpoints using Swagger", priority: Priority::Medium, status: TaskStatus::NotStarted, due: (2025, 5, 25), hours: 12.0, pct: 0, assignee: Some(5), tags: &["documentation", "api"] },
    Row { id: 4, title: "Implement data visualization components", description: "Create reusable chart components for the dashboard", priority: Priority::High, status: TaskStatus::InProgress, due: (2025, 5, 18), hours: 20.0, pct: 30, assignee: Some(2), tags: &["frontend", "charts", "components"] },
    Row { id: 5, title: "Write unit tests for authentication", description: "Create comprehensive test suite for auth service", priority: Priority::Medium, status: TaskStatus::NotStarted, due: (2025, 5, 22), hours: 10.0, pct: 0, assignee: Some(4), tags: &["testing", "auth", "quality"] },
    Row { id: 6, title: "Optimize database queries", description: "Improve performance of dashboard queries", priority: Priority::High, status: TaskStatus::NotStarted, due: (2025, 5, 19), hours: 14.0, pct: 0, assignee: Some(5), tags: &["database", "performance", "optimization"] },
    Row { id: 7, title: "Create user onboarding flow", description: "Design and implement user onboarding experience", priority: Priority::Medium, status: TaskStatus::InProgress, due: (2025, 5, 28), hours: 18.0, pct: 20, assignee: Some(3), tags: &["design", "onboarding", "user-experience"] },
    Row { id: 8, title: "Implement notification system", description: "Create real-time notification system for users", priority: Priority::Medium, status: TaskStatus::NotStarted, due: (2025, 5, 30), hours: 22.0, pct: 0, assignee: Some(2), tags: &["frontend", "notifications", "real-time"] },
    Row { id: 9, title: "Conduct usability testing", description: "Organize and run usability tests with sample users", priority: Priority::High, status: TaskStatus::NotStarted, due: (2025, 6, 5), hours: 16.0, pct: 0, assignee: Some(4), tags: &["testing", "usability", "user-experience"] },
    Row { id: 10, title: "Create project documentation", description: "Document project architecture and setup instructions", priority: Priority::Low, status: TaskStatus::NotStarted, due: (2025, 6, 10), hours: 8.0, pct: 0, assignee: Some(1), tags: &["documentation", "project"] },
    Row { id: 11, title: "Implement export functionality", description: "Add ability to export reports as PDF and CSV", priority: Priority::Medium, status: TaskStatus::NotStarted, due: (2025, 6, 2), hours: 12.0, pct: 0, assignee: Some(2), tags: &["frontend", "export", "reports"] },
    Row { id: 12, title: "Set up CI/CD pipeline", description: "Configure continuous integration and deployment", priority: Priority::High, status: TaskStatus::InProgress, due: (2025, 5, 16), hours: 10.0, pct: 70, assignee: Some(1), tags: &["devops", "ci-cd", "automation"] },
    Row { id: 13, title: "Implement data analytics module", description: "Create analytics module for tracking user behavior", priority: Priority::Medium, status: TaskStatus::NotStarted, due: (2025, 6, 8), hours: 20.0, pct: 0, assignee: Some(6), tags: &["analytics", "data", "tracking"] },
    Row { id: 14, title: "Create user management interface", description: "Build admin interface for user management", priority: Priority::Medium, status: TaskStatus::NotStarted, due: (2025, 6, 1), hours: 16.0, pct: 0, assignee: Some(2), tags: &["frontend", "admin", "user-management"] },
    Row { id: 15, title: "Implement role-based access control", description: "Add RBAC to restrict access based on user roles", priority: Priority::High, status: TaskStatus::NotStarted, due: (2025, 5, 25), hours: 18.0, pct: 0, assignee: Some(5), tags: &["backend", "security", "access-control"] },
    Row { id: 16, title: "Optimize frontend performance", description: "Improve load times and rendering performance", priority: Priority::Medium, status: TaskStatus::NotStarted, due: (2025, 6, 5), hours: 14.0, pct: 0, assignee: Some(2), tags: &["frontend", "performance", "optimization"] },
    Row { id: 17, title: "Create data visualization dashboard", description: "Build interactive dashboard for data visualization", priority: Priority::High, status: TaskStatus::NotStarted, due: (2025, 6, 10), hours: 24.0, pct: 0, assignee: Some(6), tags: &["data", "dashboard", "visualization"] },
    Row { id: 18, title: "Implement search functionality", description: "Add global search feature with filters", priority: Priority::Medium, status: TaskStatus::NotStarted, due: (2025, 6, 3), hours: 16.0, pct: 0, assignee: None, tags: &["frontend", "search", "filters"] },
    Row { id: 19, title: "Create user feedback system", description: "Implement system for collecting user feedback", priority: Priority::Low, status: TaskStatus::NotStarted, due: (2025, 6, 15), hours: 12.0, pct: 0, assignee: None, tags: &["feedback", "user-experience"] },
    Row { id: 20, title: "Implement multi-language support", description: "Add internationalization to the application", priority: Priority::Low, status: TaskStatus::NotStarted, due: (2025, 6, 20), hours: 20.0, pct: 0, assignee: None, tags: &["i18n", "localization", "languages"] },
];

pub fn demo_tasks() -> RdResult<Vec<Task>> {
    TASKS
        .iter()
        .map(|row| {
            let (y, m, d) = row.due;
            let due = NaiveDate::from_ymd_opt(y, m, d).ok_or_else(|| {
                RdError::Internal(format!("invalid demo due date for task {}", row.id))
            })?;

            let mut task = Task::new(row.id, row.title, due)
                .with_description(row.description)
                .with_priority(row.priority)
                .with_status(row.status)
                .with_estimated_hours(row.hours)
                .with_completion(f64::from(row.pct))
                .with_project(DEMO_PROJECT)
                .with_tags(row.tags.iter().copied());
            task.assignee_id = row.assignee;
            Ok(task)
        })
        .collect()
}

/// Fresh store loaded with the demo data
pub fn demo_store() -> RdResult<MemoryStore> {
    MemoryStore::with_data(demo_stakeholders(), demo_tasks()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::{StakeholderRepository, TaskRepository};
    use rd_models::StakeholderResource;

    #[tokio::test]
    async fn test_demo_store_loads() {
        let store = demo_store().unwrap();
        assert_eq!(store.stakeholder_count(), 6);
        assert_eq!(store.task_count(), 20);

        let unassigned = store.tasks_by_assignee(None).await.unwrap();
        let ids: Vec<Id> = unassigned.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![18, 19, 20]);
    }

    #[tokio::test]
    async fn test_demo_utilization_bands() {
        let store = demo_store().unwrap();
        let tasks = store.list_tasks().await.unwrap();
        let stakeholders = store.list_stakeholders().await.unwrap();

        let rates: Vec<i64> = stakeholders
            .iter()
            .map(|s| StakeholderResource::derive(s, &tasks).utilization_rate)
            .collect();

        assert_eq!(rates.iter().filter(|&&r| r > 90).count(), 3);
        assert_eq!(rates.iter().filter(|&&r| r < 50).count(), 0);
    }
}
