//! Task status

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use rd_core::error::RdError;

/// Lifecycle state of a task.
///
/// `Completed` and `Cancelled` are terminal: such tasks carry no remaining
/// effort and never escalate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[serde(alias = "todo")]
    NotStarted,
    InProgress,
    #[serde(alias = "done")]
    Completed,
    Blocked,
    Delayed,
    #[serde(alias = "canceled")]
    Cancelled,
}

impl TaskStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotStarted => "not_started",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Blocked => "blocked",
            Self::Delayed => "delayed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        Self::NotStarted
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = RdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "not_started" | "todo" => Ok(Self::NotStarted),
            "in_progress" => Ok(Self::InProgress),
            "completed" | "done" => Ok(Self::Completed),
            "blocked" => Ok(Self::Blocked),
            "delayed" => Ok(Self::Delayed),
            "cancelled" | "canceled" => Ok(Self::Cancelled),
            other => Err(RdError::invalid_range(
                "status",
                format!("unknown status '{}'", other),
            )),
        }
    }
}
