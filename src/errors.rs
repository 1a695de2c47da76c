use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Missing OPENAI_API_KEY")]
    MissingCredential,

    #[error("Upstream error: {0}")]
    UpstreamError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

/// Wire shape of every error body: `{ error, details? }`.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::MissingCredential => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::UpstreamError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            details: None,
        })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<GenerationError> for AppError {
    fn from(err: GenerationError) -> Self {
        match err {
            GenerationError::MissingCredential => AppError::MissingCredential,
            GenerationError::Transport { message, .. } => AppError::UpstreamError(message),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Failures of the outbound call to the text-generation service.
///
/// Parse failures are deliberately absent: the generation client recovers
/// from them internally and they never cross a service boundary.
#[derive(Debug, Clone, Error)]
pub enum GenerationError {
    #[error("transport failure: {message}")]
    Transport {
        message: String,
        /// Diagnostic payload relayed by the transport boundary, if any.
        details: Option<serde_json::Value>,
    },

    #[error("missing upstream credential")]
    MissingCredential,
}

impl GenerationError {
    pub fn transport(message: impl Into<String>) -> Self {
        GenerationError::Transport {
            message: message.into(),
            details: None,
        }
    }
}
