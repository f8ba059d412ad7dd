//! Scenario planning and the optimization facade
//!
//! Scenarios are precomputed; "optimization" selects one through a
//! pluggable [`ScenarioStrategy`] and reports how it compares with the
//! baseline.

mod catalog;
mod models;
mod strategy;

pub use catalog::{
    ScenarioCatalog, BALANCED_SCENARIO, BASELINE_SCENARIO, BUDGET_SCENARIO, TIME_SCENARIO,
};
pub use models::{
    OptimizationConstraint, OptimizationResult, ProjectScenario, ResourceCost, RiskLevel,
    ScenarioResource,
};
pub use strategy::{PriorityFlagStrategy, ScenarioStrategy};

use std::sync::Arc;

use rd_core::error::RdError;
use rd_core::result::RdResult;
use rd_core::traits::Id;
use rd_models::validate_entity;
use tracing::info;

const OVERLOAD_UTILIZATION: i64 = 100;
const STRAIN_UTILIZATION: i64 = 90;

#[derive(Clone)]
pub struct ScenarioService {
    catalog: Arc<ScenarioCatalog>,
    strategy: Arc<dyn ScenarioStrategy>,
}

impl Default for ScenarioService {
    fn default() -> Self {
        Self::new(ScenarioCatalog::demo())
    }
}

impl ScenarioService {
    pub fn new(catalog: ScenarioCatalog) -> Self {
        Self::with_strategy(catalog, Arc::new(PriorityFlagStrategy::default()))
    }

    pub fn with_strategy(catalog: ScenarioCatalog, strategy: Arc<dyn ScenarioStrategy>) -> Self {
        Self {
            catalog: Arc::new(catalog),
            strategy,
        }
    }

    pub fn scenarios(&self) -> Vec<ProjectScenario> {
        self.catalog.scenarios().to_vec()
    }

    pub fn scenario(&self, id: Id) -> RdResult<ProjectScenario> {
        self.catalog
            .scenario(id)
            .cloned()
            .ok_or_else(|| RdError::not_found("Scenario", id))
    }

    pub fn resource_costs(&self) -> Vec<ResourceCost> {
        self.catalog.resource_costs().to_vec()
    }

    pub fn run_optimization(
        &self,
        constraints: &OptimizationConstraint,
    ) -> RdResult<OptimizationResult> {
        validate_entity(constraints)?;

        let recommended_id = self.strategy.select(&self.catalog, constraints)?;
        let recommended = self.scenario(recommended_id)?;
        let baseline = self
            .catalog
            .baseline()
            .ok_or_else(|| RdError::Internal("scenario catalog has no baseline".to_string()))?;

        let risk_level = assess_risk(&recommended, constraints);
        let scenarios = self
            .catalog
            .scenarios()
            .iter()
            .cloned()
            .map(|mut s| {
                s.is_optimal = s.id == recommended_id;
                s
            })
            .collect();

        info!(
            strategy = self.strategy.name(),
            recommended = recommended_id,
            risk = ?risk_level,
            "optimization run"
        );

        Ok(OptimizationResult {
            scenarios,
            recommended_scenario_id: recommended_id,
            potential_savings: baseline.total_cost - recommended.total_cost,
            timeline_reduction: baseline.duration - recommended.duration,
            risk_level,
        })
    }
}

/// High when the plan breaks a ceiling or fully loads someone; Medium when
/// anyone is near capacity
pub fn assess_risk(scenario: &ProjectScenario, constraints: &OptimizationConstraint) -> RiskLevel {
    let peak = scenario.peak_utilization();
    if scenario.budget > constraints.max_budget
        || scenario.duration > constraints.max_duration
        || peak >= OVERLOAD_UTILIZATION
    {
        RiskLevel::High
    } else if peak >= STRAIN_UTILIZATION {
        RiskLevel::Medium
    } else {
        RiskLevel::Low
    }
}
