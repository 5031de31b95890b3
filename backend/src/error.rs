//! Application error handling
//!
//! Every domain failure is raised as a classified `ApiError` at the point
//! of detection and carried here; `IntoResponse` below is the only place a
//! status code is chosen. The wire shape is always
//! `{"status":"fail","message":...}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use property_manager_shared::errors::AuthError;
use property_manager_shared::types::FailBody;
use thiserror::Error;
use tracing::error;

/// Postgres unique-constraint violation
const PG_UNIQUE_VIOLATION: &str = "23505";

/// API error type that can be converted to HTTP responses
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Auth(#[from] AuthError),

    #[error("{0}")]
    NotFound(String),

    #[error("Duplicate fields not allowed {}", .0.join(", "))]
    Duplicate(Vec<String>),

    #[error("{0}")]
    Config(String),

    #[error("Database error")]
    Database(sqlx::Error),

    #[error("Internal server error")]
    Internal(#[from] anyhow::Error),
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &err {
            if db.code().as_deref() == Some(PG_UNIQUE_VIOLATION) {
                return ApiError::Duplicate(duplicate_fields(db.constraint()));
            }
        }
        ApiError::Database(err)
    }
}

/// Recover the offending field names from a unique-index name such as
/// `building_managers_username_key`
fn duplicate_fields(constraint: Option<&str>) -> Vec<String> {
    let mut fields = Vec::new();
    if let Some(name) = constraint {
        for field in ["username", "email"] {
            if name.contains(field) {
                fields.push(field.to_string());
            }
        }
    }
    if fields.is_empty() {
        fields.push("unknown".to_string());
    }
    fields
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::Auth(err) => (StatusCode::UNAUTHORIZED, err.to_string()),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ApiError::Duplicate(_) => (StatusCode::CONFLICT, self.to_string()),
            ApiError::Config(msg) => {
                error!("Configuration error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error has occurred".to_string(),
                )
            }
            ApiError::Database(err) => {
                error!("Database error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error has occurred".to_string(),
                )
            }
            ApiError::Internal(err) => {
                error!("Internal error: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An unexpected error has occurred".to_string(),
                )
            }
        };

        (status, Json(FailBody::new(message))).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
