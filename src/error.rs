//! Error types
//!
//! `AiError` covers every way the AI adapter can fail. None of them reach the
//! client: handlers absorb them through [`crate::fallback::with_fallback`].
//! `ApiError` is what a handler actually returns on the wire.

use axum::{
    extract::{multipart::MultipartError, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Failures of a single AI generation attempt
#[derive(Debug, Error)]
pub enum AiError {
    /// No provider configured (missing credential or provider disabled)
    #[error("AI provider not configured")]
    NotConfigured,

    /// Transport or HTTP-level failure talking to the provider
    #[error("request failed: {0}")]
    Request(String),

    /// The provider answered but returned no text
    #[error("model returned an empty response")]
    EmptyResponse,

    /// No balanced `{...}` span in the model text
    #[error("no JSON object in model response")]
    NoJsonObject,

    /// Balanced spans found, none of them valid JSON
    #[error("invalid JSON in model response: {0}")]
    InvalidJson(String),

    /// Valid JSON that does not match the expected shape
    #[error("unexpected response shape: {0}")]
    Schema(String),

    /// Well-formed response that breaks a structural invariant
    #[error("invalid generated content: {0}")]
    Invalid(String),
}

pub type AiResult<T> = std::result::Result<T, AiError>;

/// Error body: `{error, details?}`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Error returned by HTTP handlers
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            details: None,
        }
    }

    /// Missing or malformed input
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Upload over the size limit
    pub fn payload_too_large(message: impl Into<String>) -> Self {
        Self::new(StatusCode::PAYLOAD_TOO_LARGE, message)
    }

    /// Generic message plus the underlying error text
    pub fn internal(message: impl Into<String>, details: impl ToString) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message).with_details(details)
    }

    pub fn with_details(mut self, details: impl ToString) -> Self {
        self.details = Some(details.to_string());
        self
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, details = ?self.details, "{}", self.message);
        }

        let body = ErrorBody {
            error: self.message,
            details: self.details,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::bad_request("Invalid JSON body").with_details(rejection.body_text())
    }
}

impl From<MultipartError> for ApiError {
    fn from(err: MultipartError) -> Self {
        let status = err.status();
        let message = if status == StatusCode::PAYLOAD_TOO_LARGE {
            "File exceeds the upload size limit"
        } else {
            "Invalid multipart body"
        };
        ApiError::new(status, message).with_details(err.body_text())
    }
}
