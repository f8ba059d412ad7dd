//! Result type aliases and the best-effort batch result

use serde::Serialize;

use crate::error::RdError;
use crate::traits::Id;

/// Standard Result type for ResourceDesk operations
pub type RdResult<T> = Result<T, RdError>;

/// Outcome of a best-effort batch operation.
///
/// Ids that could not be resolved are collected in `skipped` instead of
/// aborting the whole batch, so callers can surface partial failure.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchResult<T> {
    pub applied: Vec<T>,
    pub skipped: Vec<Id>,
}

impl<T> BatchResult<T> {
    pub fn new() -> Self {
        Self {
            applied: Vec::new(),
            skipped: Vec::new(),
        }
    }

    pub fn push_applied(&mut self, item: T) {
        self.applied.push(item);
    }

    pub fn push_skipped(&mut self, id: Id) {
        self.skipped.push(id);
    }

    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    /// True when at least one requested id was missing
    pub fn is_partial(&self) -> bool {
        !self.skipped.is_empty()
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> BatchResult<U> {
        BatchResult {
            applied: self.applied.into_iter().map(f).collect(),
            skipped: self.skipped,
        }
    }
}

impl<T> Default for BatchResult<T> {
    fn default() -> Self {
        Self::new()
    }
}
