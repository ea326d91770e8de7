//! Pipeline error taxonomy and its HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use crate::extract::ExtractionError;
use crate::fields::FieldServiceError;

/// Errors from the document analysis pipeline.
///
/// Validation and extraction failures are the caller's problem (bad
/// payload), missing configuration means the service cannot work yet,
/// and service faults are ours. The transport mapping follows that
/// split.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// Payload exceeds the accepted size bound.
    #[error("File size exceeds 10MB limit")]
    FileTooLarge,

    /// Declared content type is outside the allow-list.
    #[error("Unsupported file type. Please upload PDF or image files.")]
    UnsupportedType(String),

    /// The document produced no usable text.
    #[error("No text could be extracted from the document")]
    EmptyDocument,

    /// The payload could not be read as its declared format.
    #[error("{0}")]
    Extraction(#[from] ExtractionError),

    /// The field extraction service is not configured.
    #[error("{0}")]
    Configuration(String),

    /// The field extraction service call failed.
    #[error("Failed to analyze document: {0}")]
    Service(String),
}

impl AnalysisError {
    /// HTTP status this error surfaces as.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::FileTooLarge
            | Self::UnsupportedType(_)
            | Self::EmptyDocument
            | Self::Extraction(_) => StatusCode::BAD_REQUEST,
            Self::Configuration(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Service(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<FieldServiceError> for AnalysisError {
    fn from(err: FieldServiceError) -> Self {
        match err {
            FieldServiceError::NotConfigured => Self::Configuration(err.to_string()),
            FieldServiceError::Connection(_) | FieldServiceError::Api(_) => {
                Self::Service(err.to_string())
            }
        }
    }
}

impl IntoResponse for AnalysisError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("analysis failed: {}", self);
        } else {
            tracing::warn!("request rejected: {}", self);
        }
        (
            status,
            Json(serde_json::json!({ "detail": self.to_string() })),
        )
            .into_response()
    }
}
