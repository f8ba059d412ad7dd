//! Scenario catalog and rate card

use rd_core::traits::Id;

use super::models::{ProjectScenario, ResourceCost, ScenarioResource};

pub const BASELINE_SCENARIO: Id = 1;
pub const BUDGET_SCENARIO: Id = 2;
pub const TIME_SCENARIO: Id = 3;
pub const BALANCED_SCENARIO: Id = 4;

/// Finite set of scenarios, one of which is the baseline for comparisons
#[derive(Debug, Clone)]
pub struct ScenarioCatalog {
    scenarios: Vec<ProjectScenario>,
    resource_costs: Vec<ResourceCost>,
    baseline_id: Id,
}

impl ScenarioCatalog {
    pub fn new(
        scenarios: Vec<ProjectScenario>,
        resource_costs: Vec<ResourceCost>,
        baseline_id: Id,
    ) -> Self {
        Self {
            scenarios,
            resource_costs,
            baseline_id,
        }
    }

    pub fn scenarios(&self) -> &[ProjectScenario] {
        &self.scenarios
    }

    pub fn scenario(&self, id: Id) -> Option<&ProjectScenario> {
        self.scenarios.iter().find(|s| s.id == id)
    }

    pub fn baseline_id(&self) -> Id {
        self.baseline_id
    }

    pub fn baseline(&self) -> Option<&ProjectScenario> {
        self.scenario(self.baseline_id)
    }

    pub fn resource_costs(&self) -> &[ResourceCost] {
        &self.resource_costs
    }

    /// Current allocation plus budget, time, and balanced alternatives
    pub fn demo() -> Self {
        Self::new(demo_scenarios(), demo_resource_costs(), BASELINE_SCENARIO)
    }
}

impl Default for ScenarioCatalog {
    fn default() -> Self {
        Self::demo()
    }
}

const TEAM: [(Id, &str, &str, i64); 6] = [
    (1, "John Smith", "Project Manager", 85),
    (2, "Sarah Johnson", "Lead Developer", 95),
    (3, "Michael Chen", "UX Designer", 110),
    (4, "Emily Rodriguez", "QA Engineer", 75),
    (5, "David Kim", "Backend Developer", 90),
    (6, "Lisa Wang", "Data Analyst", 80),
];

fn demo_resource_costs() -> Vec<ResourceCost> {
    TEAM.iter()
        .map(|&(id, name, _, rate)| ResourceCost {
            id,
            name: name.to_string(),
            hourly_rate: rate,
            max_hours_per_week: 40,
            min_hours_per_week: 20,
        })
        .collect()
}

/// `(hours, utilization, cost)` per team member, in `TEAM` order
fn resources(allocations: [(i64, i64, i64); 6]) -> Vec<ScenarioResource> {
    TEAM.iter()
        .zip(allocations)
        .map(|(&(id, name, role, rate), (hours, utilization, cost))| ScenarioResource {
            resource_id: id,
            resource_name: name.to_string(),
            role: role.to_string(),
            hourly_rate: rate,
            allocated_hours: hours,
            utilization_rate: utilization,
            cost,
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn scenario(
    id: Id,
    name: &str,
    description: &str,
    budget: i64,
    duration: i64,
    allocations: [(i64, i64, i64); 6],
    total_cost: i64,
    total_hours: i64,
) -> ProjectScenario {
    ProjectScenario {
        id,
        name: name.to_string(),
        description: description.to_string(),
        budget,
        duration,
        resources: resources(allocations),
        total_cost,
        total_hours,
        is_optimal: false,
    }
}

fn demo_scenarios() -> Vec<ProjectScenario> {
    vec![
        scenario(
            BASELINE_SCENARIO,
            "Current Allocation",
            "Current resource allocation across the project",
            120_000,
            12,
            [
                (480, 95, 40_800),
                (420, 87, 39_900),
                (360, 75, 39_600),
                (312, 65, 23_400),
                (444, 92, 39_960),
                (216, 45, 17_280),
            ],
            200_940,
            2232,
        ),
        scenario(
            BUDGET_SCENARIO,
            "Budget Optimization",
            "Optimized for minimal budget impact",
            100_000,
            14,
            [
                (420, 75, 35_700),
                (400, 71, 38_000),
                (280, 50, 30_800),
                (350, 62, 26_250),
                (400, 71, 36_000),
                (140, 25, 11_200),
            ],
            177_950,
            1990,
        ),
        scenario(
            TIME_SCENARIO,
            "Time Optimization",
            "Optimized for fastest delivery time",
            150_000,
            10,
            [
                (400, 100, 34_000),
                (400, 100, 38_000),
                (400, 100, 44_000),
                (400, 100, 30_000),
                (400, 100, 36_000),
                (300, 75, 24_000),
            ],
            206_000,
            2300,
        ),
        scenario(
            BALANCED_SCENARIO,
            "Balanced Optimization",
            "Balanced approach optimizing both cost and time",
            120_000,
            12,
            [
                (360, 75, 30_600),
                (384, 80, 36_480),
                (336, 70, 36_960),
                (336, 70, 25_200),
                (384, 80, 34_560),
                (240, 50, 19_200),
            ],
            183_000,
            2040,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_catalog() {
        let catalog = ScenarioCatalog::demo();
        assert_eq!(catalog.scenarios().len(), 4);
        assert_eq!(catalog.resource_costs().len(), 6);
        assert_eq!(catalog.baseline().unwrap().name, "Current Allocation");
        assert!(catalog.scenarios().iter().all(|s| s.resources.len() == 6));
    }

    #[test]
    fn test_resource_costs_match_rates() {
        let catalog = ScenarioCatalog::demo();
        for scenario in catalog.scenarios() {
            for resource in &scenario.resources {
                assert_eq!(resource.cost, resource.hourly_rate * resource.allocated_hours);
            }
        }
    }
}
