//! Core traits shared by models, stores, and services

use chrono::{NaiveDate, Utc};

/// Primary key type
pub type Id = i64;

/// Trait for entities that have a primary key
pub trait Identifiable {
    fn id(&self) -> Id;
}

/// Base trait for all domain entities
pub trait Entity: Identifiable + Send + Sync {
    /// Human-readable type name for error messages
    const TYPE_NAME: &'static str;
}

/// Source of "today" for date math
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the system time (UTC calendar date)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Clock pinned to a single date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
