//! # rd-store
//!
//! Task and stakeholder storage for ResourceDesk.
//!
//! This crate provides:
//!
//! - Repository traits for tasks and stakeholders
//! - `MemoryStore`, an explicit in-memory store object that is passed into
//!   services instead of living in process-wide state
//! - The demo data set used by the dashboard
//!
//! ## Example
//!
//! ```ignore
//! use rd_store::{seed, TaskRepository};
//!
//! let store = seed::demo_store()?;
//! let unassigned = store.tasks_by_assignee(None).await?;
//! ```

pub mod memory;
pub mod repository;
pub mod seed;

pub use memory::MemoryStore;
pub use repository::{ResourceStore, Snapshot, StakeholderRepository, TaskRepository};
