//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid ID")]
    InvalidId,
    #[error("Invalid request body")]
    InvalidBody,
    #[error("Item not found")]
    NotFound,
    #[error("Method not allowed")]
    MethodNotAllowed,
    /// Storage failure; the driver's message is returned to the client as-is.
    #[error("{0}")]
    Db(#[from] sqlx::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidId | AppError::InvalidBody => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Db(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        if let AppError::Db(e) = &self {
            tracing::error!(error = %e, "storage error");
        }
        (status, self.to_string()).into_response()
    }
}

/// Failures that abort process startup.
#[derive(Error, Debug)]
pub enum StartupError {
    #[error("config: {0}")]
    Config(String),
    #[error("storage unavailable: {0}")]
    Storage(#[from] sqlx::Error),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
