//! Core error types for ResourceDesk
//!
//! Every error is local and recoverable: the caller catches it and shows a message.

use thiserror::Error;

/// Core error type for all ResourceDesk operations
#[derive(Error, Debug)]
pub enum RdError {
    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Invalid date '{value}': {source}")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Invalid value for {field}: {message}")]
    InvalidRange { field: String, message: String },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl RdError {
    pub fn not_found(entity: &'static str, value: impl ToString) -> Self {
        RdError::NotFound {
            entity,
            field: "id",
            value: value.to_string(),
        }
    }

    pub fn invalid_range(field: impl Into<String>, message: impl Into<String>) -> Self {
        RdError::InvalidRange {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, RdError::NotFound { .. })
    }
}

/// HTTP status code mapping for errors
impl RdError {
    pub fn status_code(&self) -> u16 {
        match self {
            RdError::NotFound { .. } => 404,
            RdError::InvalidDate { .. } => 400,
            RdError::InvalidRange { .. } => 422,
            RdError::Conflict(_) => 409,
            RdError::Config(_) | RdError::Internal(_) => 500,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RdError::NotFound { .. } => "not_found",
            RdError::InvalidDate { .. } => "invalid_date",
            RdError::InvalidRange { .. } => "invalid_range",
            RdError::Conflict(_) => "conflict",
            RdError::Config(_) => "configuration_error",
            RdError::Internal(_) => "internal_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = RdError::not_found("Task", 42);
        assert_eq!(err.to_string(), "Not found: Task with id=42");
        assert_eq!(err.status_code(), 404);
        assert!(err.is_not_found());
    }

    #[test]
    fn test_invalid_range_code() {
        let err = RdError::invalid_range("completion_percentage", "must be between 0 and 100");
        assert_eq!(err.error_code(), "invalid_range");
        assert_eq!(err.status_code(), 422);
    }
}
