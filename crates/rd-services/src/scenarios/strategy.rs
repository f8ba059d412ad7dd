//! Scenario selection strategies

use rd_core::error::RdError;
use rd_core::result::RdResult;
use rd_core::traits::Id;

use super::catalog::{ScenarioCatalog, BALANCED_SCENARIO, BUDGET_SCENARIO, TIME_SCENARIO};
use super::models::OptimizationConstraint;

/// Picks the recommended scenario from a catalog
pub trait ScenarioStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    fn select(&self, catalog: &ScenarioCatalog, constraints: &OptimizationConstraint)
        -> RdResult<Id>;
}

/// Chooses by priority flag: cost alone picks the budget scenario, speed
/// alone the time scenario, both or neither the balanced one.
#[derive(Debug, Clone, Copy)]
pub struct PriorityFlagStrategy {
    pub budget_scenario: Id,
    pub time_scenario: Id,
    pub balanced_scenario: Id,
}

impl Default for PriorityFlagStrategy {
    fn default() -> Self {
        Self {
            budget_scenario: BUDGET_SCENARIO,
            time_scenario: TIME_SCENARIO,
            balanced_scenario: BALANCED_SCENARIO,
        }
    }
}

impl ScenarioStrategy for PriorityFlagStrategy {
    fn name(&self) -> &'static str {
        "priority_flags"
    }

    fn select(
        &self,
        catalog: &ScenarioCatalog,
        constraints: &OptimizationConstraint,
    ) -> RdResult<Id> {
        let id = match (
            constraints.prioritize_cost_saving,
            constraints.prioritize_delivery_speed,
        ) {
            (true, false) => self.budget_scenario,
            (false, true) => self.time_scenario,
            _ => self.balanced_scenario,
        };

        if catalog.scenario(id).is_none() {
            return Err(RdError::Internal(format!(
                "strategy {} selected scenario {} which is not in the catalog",
                self.name(),
                id
            )));
        }
        Ok(id)
    }
}
