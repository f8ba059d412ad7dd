//! Escalation levels, actions, and contact roles

use std::fmt;

use serde::{Deserialize, Serialize};

/// Severity tier. Declared least to most severe so the derived `Ord` is the
/// severity order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EscalationLevel {
    None,
    Low,
    Medium,
    High,
    Critical,
}

impl EscalationLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    /// Recommended actions; each level adds to the one below it
    pub fn actions(&self) -> &'static [EscalationAction] {
        use EscalationAction::*;
        match self {
            Self::None => &[],
            Self::Low => &[NotifyAssignee],
            Self::Medium => &[NotifyAssignee, NotifyManager],
            Self::High => &[NotifyAssignee, NotifyManager, NotifyStakeholders],
            Self::Critical => &[
                NotifyAssignee,
                NotifyManager,
                NotifyStakeholders,
                EscalateToExecutive,
                EmergencyMeeting,
            ],
        }
    }

    /// Contact chain, most junior first
    pub fn escalation_path(&self) -> &'static [EscalationRole] {
        use EscalationRole::*;
        match self {
            Self::None => &[],
            Self::Low => &[TaskAssignee],
            Self::Medium => &[TaskAssignee, ProjectManager],
            Self::High => &[TaskAssignee, ProjectManager, DepartmentHead],
            Self::Critical => &[TaskAssignee, ProjectManager, DepartmentHead, ExecutiveSponsor],
        }
    }
}

impl fmt::Display for EscalationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EscalationAction {
    NotifyAssignee,
    NotifyManager,
    NotifyStakeholders,
    EscalateToExecutive,
    EmergencyMeeting,
}

/// Role in the escalation contact chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EscalationRole {
    #[serde(rename = "Task Assignee")]
    TaskAssignee,
    #[serde(rename = "Project Manager")]
    ProjectManager,
    #[serde(rename = "Department Head")]
    DepartmentHead,
    #[serde(rename = "Executive Sponsor")]
    ExecutiveSponsor,
}

impl EscalationRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TaskAssignee => "Task Assignee",
            Self::ProjectManager => "Project Manager",
            Self::DepartmentHead => "Department Head",
            Self::ExecutiveSponsor => "Executive Sponsor",
        }
    }
}

impl fmt::Display for EscalationRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEVELS: [EscalationLevel; 5] = [
        EscalationLevel::None,
        EscalationLevel::Low,
        EscalationLevel::Medium,
        EscalationLevel::High,
        EscalationLevel::Critical,
    ];

    #[test]
    fn test_levels_are_totally_ordered() {
        for pair in LEVELS.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_actions_and_paths_are_nested() {
        for pair in LEVELS.windows(2) {
            let (lower, higher) = (pair[0], pair[1]);
            assert!(higher.actions().starts_with(lower.actions()));
            assert!(higher.escalation_path().starts_with(lower.escalation_path()));
        }
        assert_eq!(EscalationLevel::Critical.actions().len(), 5);
    }

    #[test]
    fn test_role_json() {
        let json = serde_json::to_string(&EscalationRole::ExecutiveSponsor).unwrap();
        assert_eq!(json, "\"Executive Sponsor\"");
    }
}
