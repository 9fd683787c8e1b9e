//! Global application error types and handlers.
//!
//! This module defines the errors surfaced to HTTP clients and the startup
//! errors reported by `main`, and maps the former onto status codes with a
//! consistent `{"detail": ...}` body.

use adapters::StoreError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use thiserror::Error;
use tracing::{debug, error};

use crate::config::ConfigError;

pub const PROFILE_NOT_FOUND: &str = "Profile not found";
const STORE_UNAVAILABLE: &str = "Service unavailable";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Profile not found")]
    NotFound,
    /// The store could not be reached or the query failed. The cause is
    /// logged and never sent to the client.
    #[error("Service unavailable: {0}")]
    StoreUnavailable(String),
    /// Body rejected by the JSON extractor before reaching any handler.
    #[error("{message}")]
    MalformedRequest { status: StatusCode, message: String },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::StoreUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::MalformedRequest { status, .. } => *status,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => {
                debug!("profile {id} not found");
                ApiError::NotFound
            }
            StoreError::Unavailable(cause) => ApiError::StoreUnavailable(cause),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::MalformedRequest {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match self {
            ApiError::NotFound => PROFILE_NOT_FOUND.to_string(),
            ApiError::StoreUnavailable(cause) => {
                error!("profile store failure: {cause}");
                STORE_UNAVAILABLE.to_string()
            }
            ApiError::MalformedRequest { message, .. } => message,
        };

        (status, axum::Json(json!({ "detail": detail }))).into_response()
    }
}

/// Fatal errors raised while bringing the server up.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("database setup failed: {0}")]
    Database(#[from] sqlx::Error),
    #[error("server I/O error: {0}")]
    Io(#[from] std::io::Error),
}
