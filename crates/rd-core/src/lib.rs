//! # rd-core
//!
//! Core types, traits, and utilities for ResourceDesk.
//!
//! This crate provides the foundational building blocks used across all other crates:
//! - The error taxonomy (`NotFound`, `InvalidDate`, `InvalidRange`)
//! - Result type aliases and the best-effort batch result
//! - Core traits (Identifiable, Clock)
//! - Date parsing helpers
//! - Configuration types

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::*;
pub use result::*;
pub use traits::*;
pub use types::*;
