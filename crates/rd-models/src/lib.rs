//! # rd-models
//!
//! Domain models for ResourceDesk.
//!
//! Stakeholders and tasks live here, below both the allocation engine and the
//! scenario facade, so neither needs a back-reference to the other. A task
//! refers to its owner by id only; it never belongs structurally to a
//! stakeholder.

pub use rd_core::traits::{Entity, Id, Identifiable};

pub mod priority;
pub mod stakeholder;
pub mod status;
pub mod task;
pub mod validation;

pub use priority::Priority;
pub use stakeholder::{utilization_rate, Stakeholder, StakeholderResource, TasksByPriority};
pub use status::TaskStatus;
pub use task::{Task, TaskInput};
pub use validation::validate_entity;
