//! Application error types and HTTP response mapping.
//!
//! Defines `AppError` for all error conditions and implements Axum's
//! `IntoResponse` so handlers can bubble errors straight to the client.
//!
//! Every error is terminal for its request and maps to a `400` with a
//! plain-text `Error: <message>` body, mirroring what the upstream API
//! reported when the failure came from GitHub.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Repository URL is required")]
    MissingUrl,

    #[error("Invalid GitHub URL")]
    InvalidUrl,

    #[error("{message}")]
    Upstream { status: u16, message: String },

    #[error("{0}")]
    Http(#[from] reqwest::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Upstream { status, message } = &self {
            tracing::warn!(status, message, "GitHub API request failed");
        }
        (StatusCode::BAD_REQUEST, format!("Error: {}", self)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
