//! Centralized error handling.
//!
//! Provides a unified error type for the entire application,
//! with automatic HTTP response conversion.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use serde::Serialize;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("{0} not found")]
    NotFound(String),

    #[error("{0} is not in favourites")]
    FavouriteNotFound(String),

    #[error("{0} already exists")]
    Conflict(String),

    #[error("{0} is already in favourites")]
    DuplicateFavourite(String),

    // Validation
    #[error("{0}")]
    Validation(String),

    // External service errors
    #[error("Database error")]
    Database(#[from] DbErr),

    // Internal
    #[error("Internal server error")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    message: String,
}

impl AppError {
    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) | AppError::FavouriteNotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) | AppError::DuplicateFavourite(_) | AppError::Validation(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    fn user_message(&self) -> String {
        match self {
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            message: self.user_message(),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self, entity: impl Into<String>) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self, entity: impl Into<String>) -> AppResult<T> {
        self.ok_or_else(|| AppError::NotFound(entity.into()))
    }
}

/// Convenience constructors
impl AppError {
    pub fn not_found(entity: impl Into<String>) -> Self {
        AppError::NotFound(entity.into())
    }

    pub fn conflict(entity: impl Into<String>) -> Self {
        AppError::Conflict(entity.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }

    /// Classify a storage error raised by an insert or update.
    ///
    /// Unique-constraint violations become the error built by `on_unique`;
    /// everything else stays a database error.
    pub fn from_write(err: DbErr, on_unique: impl FnOnce() -> AppError) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => {
                tracing::debug!("Unique constraint violated: {}", detail);
                on_unique()
            }
            _ => AppError::Database(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_map_to_documented_statuses() {
        assert_eq!(AppError::not_found("User").status(), StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::FavouriteNotFound("Film 1".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(AppError::conflict("Film").status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::DuplicateFavourite("Film".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::validation("name is required").status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn storage_errors_are_hidden_from_callers() {
        let err = AppError::Database(DbErr::Custom("relation \"users\" does not exist".into()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.user_message(), "A database error occurred");
    }

    #[test]
    fn messages_name_the_entity() {
        assert_eq!(AppError::not_found("Planet").to_string(), "Planet not found");
        assert_eq!(
            AppError::DuplicateFavourite("Film".into()).to_string(),
            "Film is already in favourites"
        );
        assert_eq!(
            AppError::FavouriteNotFound("Film 1".into()).to_string(),
            "Film 1 is not in favourites"
        );
    }

    #[test]
    fn non_unique_write_errors_stay_database_errors() {
        let err = AppError::from_write(DbErr::Custom("disk full".into()), || {
            AppError::conflict("Film")
        });
        assert!(matches!(err, AppError::Database(_)));
    }

    #[test]
    fn missing_option_becomes_not_found() {
        let missing: Option<i32> = None;
        let err = missing.ok_or_not_found("Species").unwrap_err();
        assert!(matches!(err, AppError::NotFound(ref e) if e == "Species"));
    }
}
