//! Scenario planning data types

use rd_core::traits::Id;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Rate card entry for one person
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceCost {
    pub id: Id,
    pub name: String,
    pub hourly_rate: i64,
    pub max_hours_per_week: i64,
    pub min_hours_per_week: i64,
}

/// One person's share of a scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioResource {
    pub resource_id: Id,
    pub resource_name: String,
    pub role: String,
    pub hourly_rate: i64,
    pub allocated_hours: i64,
    pub utilization_rate: i64,
    pub cost: i64,
}

/// A precomputed allocation plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectScenario {
    pub id: Id,
    pub name: String,
    pub description: String,
    pub budget: i64,
    /// Weeks
    pub duration: i64,
    pub resources: Vec<ScenarioResource>,
    pub total_cost: i64,
    pub total_hours: i64,
    pub is_optimal: bool,
}

impl ProjectScenario {
    pub fn peak_utilization(&self) -> i64 {
        self.resources
            .iter()
            .map(|r| r.utilization_rate)
            .max()
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationConstraint {
    #[validate(range(min = 0, message = "must not be negative"))]
    pub max_budget: i64,

    /// Weeks
    #[validate(range(min = 1, message = "must be at least one week"))]
    pub max_duration: i64,

    #[serde(default)]
    pub prioritize_delivery_speed: bool,

    #[serde(default)]
    pub prioritize_cost_saving: bool,

    #[serde(default)]
    pub maintain_team_balance: bool,

    #[serde(default)]
    pub required_skills: Vec<String>,
}

impl Default for OptimizationConstraint {
    fn default() -> Self {
        Self {
            max_budget: 120_000,
            max_duration: 12,
            prioritize_delivery_speed: false,
            prioritize_cost_saving: false,
            maintain_team_balance: true,
            required_skills: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResult {
    pub scenarios: Vec<ProjectScenario>,
    pub recommended_scenario_id: Id,
    /// Baseline cost minus recommended cost; negative when dearer
    pub potential_savings: i64,
    /// Baseline weeks minus recommended weeks
    pub timeline_reduction: i64,
    pub risk_level: RiskLevel,
}
