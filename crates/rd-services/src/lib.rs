//! # rd-services
//!
//! Business logic for ResourceDesk.
//!
//! - `allocation` - utilization summary, (bulk) assignment, reassignment impact
//! - `escalation` - deadline/progress classifier and store-wide scans
//! - `scenarios` - scenario catalog and the optimization facade
//!
//! Services receive their store as an explicit `Arc`, never through global
//! state, so independent instances do not interfere.

pub mod allocation;
pub mod escalation;
pub mod scenarios;

pub use allocation::{
    AllocationBand, AllocationService, AllocationSummary, AssigneeScope, ReassignmentImpact,
    StakeholderImpact,
};
pub use escalation::{
    EscalationAction, EscalationClassifier, EscalationLevel, EscalationResult, EscalationRole,
    EscalationService,
};
pub use scenarios::{
    OptimizationConstraint, OptimizationResult, PriorityFlagStrategy, ProjectScenario,
    ResourceCost, RiskLevel, ScenarioCatalog, ScenarioResource, ScenarioService, ScenarioStrategy,
};
