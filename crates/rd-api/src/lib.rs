//! # rd-api
//!
//! JSON HTTP API for ResourceDesk, mounted under `/api/v1`.
//!
//! Allocation, escalation and scenario operations are exposed here;
//! the server crate adds health checks and middleware.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod routes;

pub use extractors::AppState;
pub use routes::router;
