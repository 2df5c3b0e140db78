use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;
use thiserror::Error;
use tracing::{debug, error};

use crate::gateway::GatewayError;
use crate::validation::ValidationError;

/// Which provider operation a handler was performing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Translate,
    Detect,
}

impl Operation {
    /// Generic message shown to the client when the provider fails.
    pub fn unavailable_message(self) -> &'static str {
        match self {
            Operation::Translate => {
                "Translation service is currently unavailable. Please try again later."
            }
            Operation::Detect => "Language detection is currently unavailable",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Translate => f.write_str("translation"),
            Operation::Detect => f.write_str("language detection"),
        }
    }
}

/// Everything that can stop a JSON handler from producing a success body.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{operation} failed: {source}")]
    Gateway {
        operation: Operation,
        #[source]
        source: GatewayError,
    },

    #[error("invalid request body: {0}")]
    BadRequest(String),
}

impl ApiError {
    pub fn gateway(operation: Operation, source: GatewayError) -> Self {
        ApiError::Gateway { operation, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            // The client UI branches on `success`, not on the status code
            ApiError::Validation(_) | ApiError::Gateway { .. } => StatusCode::OK,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }

    /// Text safe to show to the client. Provider details never appear here.
    pub fn client_message(&self) -> String {
        match self {
            ApiError::Validation(e) => e.to_string(),
            ApiError::Gateway { operation, .. } => operation.unavailable_message().to_string(),
            ApiError::BadRequest(_) => "Invalid request body".to_string(),
        }
    }
}

/// `{"success": false, "error": "..."}`
#[derive(Debug, Serialize)]
pub struct FailureBody {
    pub success: bool,
    pub error: String,
}

impl FailureBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Validation(e) => debug!("Rejected request: {}", e),
            ApiError::Gateway { operation, source } => {
                error!("{} error: {} ({:?})", operation, source, source);
            }
            ApiError::BadRequest(detail) => debug!("Malformed request body: {}", detail),
        }

        (self.status(), Json(FailureBody::new(self.client_message()))).into_response()
    }
}
