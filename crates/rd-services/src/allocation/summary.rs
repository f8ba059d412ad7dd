//! Allocation summary and utilization bands

use rd_core::config::AllocationConfig;
use rd_models::{StakeholderResource, Task};
use serde::Serialize;

/// Capacity pressure of one stakeholder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AllocationBand {
    Overallocated,
    Optimal,
    Underallocated,
}

impl AllocationBand {
    /// Above the upper threshold is over, below the lower is under; both
    /// bounds themselves count as optimal.
    pub fn classify(utilization_rate: i64, config: &AllocationConfig) -> Self {
        if utilization_rate > config.overallocated_threshold {
            Self::Overallocated
        } else if utilization_rate < config.underallocated_threshold {
            Self::Underallocated
        } else {
            Self::Optimal
        }
    }
}

/// Aggregate view over the whole stakeholder directory.
///
/// A pure function of the current tasks and stakeholders; never cached.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationSummary {
    pub total_stakeholders: usize,
    pub overallocated_stakeholders: usize,
    pub underallocated_stakeholders: usize,
    pub optimal_stakeholders: usize,
    /// Rounded mean utilization; 0 for an empty directory
    pub average_utilization: i64,
    pub unassigned_tasks: usize,
    pub stakeholders: Vec<StakeholderResource>,
}

impl AllocationSummary {
    pub fn build(
        stakeholders: Vec<StakeholderResource>,
        tasks: &[Task],
        config: &AllocationConfig,
    ) -> Self {
        let mut over = 0;
        let mut under = 0;
        let mut optimal = 0;
        for resource in &stakeholders {
            match AllocationBand::classify(resource.utilization_rate, config) {
                AllocationBand::Overallocated => over += 1,
                AllocationBand::Underallocated => under += 1,
                AllocationBand::Optimal => optimal += 1,
            }
        }

        let average_utilization = if stakeholders.is_empty() {
            0
        } else {
            let total: i64 = stakeholders.iter().map(|s| s.utilization_rate).sum();
            (total as f64 / stakeholders.len() as f64).round() as i64
        };

        Self {
            total_stakeholders: stakeholders.len(),
            overallocated_stakeholders: over,
            underallocated_stakeholders: under,
            optimal_stakeholders: optimal,
            average_utilization,
            unassigned_tasks: tasks.iter().filter(|t| t.is_unassigned()).count(),
            stakeholders,
        }
    }
}
