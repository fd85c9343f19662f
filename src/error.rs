use axum::{
    response::{IntoResponse, Response},
    Json,
    http::StatusCode,
};
use serde::Serialize;
use std::fmt;

#[derive(Serialize)]
pub struct ErrorResponse {
    error: String,
}

/// The external services whose credentials can be rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collaborator {
    Exa,
    Groq,
}

impl Collaborator {
    pub fn env_key(&self) -> &'static str {
        match self {
            Collaborator::Exa => "EXA_API_KEY",
            Collaborator::Groq => "GROQ_API_KEY",
        }
    }
}

impl fmt::Display for Collaborator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Collaborator::Exa => f.write_str("Exa"),
            Collaborator::Groq => f.write_str("Groq"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    ConfigError(String),

    #[error("URL is required")]
    MissingUrl,

    #[error("Invalid URL format")]
    InvalidUrl,

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Invalid {0} API key. Please check your {key}", key = .0.env_key())]
    Unauthorized(Collaborator),

    #[error("No content found for the provided URL")]
    NotFound,

    #[error("{0}")]
    Upstream(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ConfigError(_) | AppError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::MissingUrl | AppError::InvalidUrl | AppError::InvalidBody(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Failure of a single call to an external service.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("authentication failed: {0}")]
    Unauthorized(String),

    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl ClientError {
    /// Maps a non-success HTTP status and its body to an error. Rejected
    /// credentials show up either as 401/403 or as a body naming the key.
    pub fn from_status(status: u16, body: String) -> Self {
        if status == 401 || status == 403 || body.to_lowercase().contains("api key") {
            ClientError::Unauthorized(body)
        } else {
            ClientError::Api { status, body }
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Unauthorized(_))
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
