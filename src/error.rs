use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use tracing::error;

use crate::application::services::ResolveError;

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Maps resolution failures onto HTTP errors.
///
/// Invalid records are reported as if the host had none.
pub fn map_resolve_error(hostname: &str, e: ResolveError) -> AppError {
    match e {
        ResolveError::Loop { host } => AppError::bad_request(
            "Redirect loop detected",
            json!({ "host": hostname, "destination_host": host }),
        ),
        ResolveError::InvalidRecord(reason) => AppError::not_found(
            "Not found",
            json!({ "host": hostname, "reason": reason.to_string() }),
        ),
        ResolveError::Lookup(e) => {
            error!(hostname, error = %e, "DNS lookup failed");
            AppError::internal("Failed to resolve host", json!({ "host": hostname }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::record_parser::ParseError;
    use crate::domain::repositories::LookupError;

    #[test]
    fn test_map_resolve_error_status() {
        let loop_err = map_resolve_error(
            "a.test",
            ResolveError::Loop {
                host: "b.test".to_string(),
            },
        );
        assert_eq!(loop_err.status(), StatusCode::BAD_REQUEST);

        let invalid = map_resolve_error(
            "a.test",
            ResolveError::InvalidRecord(ParseError::InvalidVersion),
        );
        assert_eq!(invalid.status(), StatusCode::NOT_FOUND);

        let lookup = map_resolve_error(
            "a.test",
            ResolveError::Lookup(LookupError::new("_srd.a.test", "timeout")),
        );
        assert_eq!(lookup.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_error_body_shape() {
        let response = AppError::bad_request("Missing Host header", json!({})).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
