//! API error handling
//!
//! Every failure is rendered as `{ "_type": "Error", "errorIdentifier", "message" }`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rd_core::error::RdError;
use serde::Serialize;
use tracing::error;

/// API error types
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    InvalidDate(String),
    Validation(String),
    BadRequest(String),
    Conflict(String),
    Internal(String),
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        ApiError::BadRequest(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        ApiError::Internal(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidDate(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn identifier(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "urn:resourcedesk:api:v1:errors:NotFound",
            ApiError::InvalidDate(_) => "urn:resourcedesk:api:v1:errors:InvalidDate",
            ApiError::Validation(_) => "urn:resourcedesk:api:v1:errors:PropertyConstraintViolation",
            ApiError::BadRequest(_) => "urn:resourcedesk:api:v1:errors:InvalidRequestBody",
            ApiError::Conflict(_) => "urn:resourcedesk:api:v1:errors:Conflict",
            ApiError::Internal(_) => "urn:resourcedesk:api:v1:errors:InternalError",
        }
    }

    fn message(&self) -> &str {
        match self {
            ApiError::NotFound(msg)
            | ApiError::InvalidDate(msg)
            | ApiError::Validation(msg)
            | ApiError::BadRequest(msg)
            | ApiError::Conflict(msg)
            | ApiError::Internal(msg) => msg,
        }
    }
}

impl From<RdError> for ApiError {
    fn from(err: RdError) -> Self {
        let message = err.to_string();
        match err {
            RdError::NotFound { .. } => ApiError::NotFound(message),
            RdError::InvalidDate { .. } => ApiError::InvalidDate(message),
            RdError::InvalidRange { .. } => ApiError::Validation(message),
            RdError::Conflict(_) => ApiError::Conflict(message),
            RdError::Config(_) | RdError::Internal(_) => ApiError::Internal(message),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    #[serde(rename = "_type")]
    type_name: &'static str,
    #[serde(rename = "errorIdentifier")]
    error_identifier: &'static str,
    message: &'a str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(message = self.message(), "request failed");
        }

        let body = ErrorBody {
            type_name: "Error",
            error_identifier: self.identifier(),
            message: self.message(),
        };
        (status, Json(body)).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rd_error_mapping() {
        let err: ApiError = RdError::not_found("Task", 7).into();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.message(), "Not found: Task with id=7");

        let err: ApiError = RdError::invalid_range("completion_percentage", "too high").into();
        assert_eq!(err.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
