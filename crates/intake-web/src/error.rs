//! HTTP error response conversion

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use intake_core::IntakeError;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub recoverable: bool,
}

/// Error returned by handlers
#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
    recoverable: bool,
}

impl HttpError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            recoverable: false,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<IntakeError> for HttpError {
    fn from(err: IntakeError) -> Self {
        err.log("Request failed");
        let status = match &err {
            IntakeError::Http { .. } | IntakeError::Request(_) | IntakeError::Decode(_) => {
                StatusCode::BAD_GATEWAY
            }
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
            recoverable: err.is_recoverable(),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
                recoverable: self.recoverable,
            }),
        )
            .into_response()
    }
}
