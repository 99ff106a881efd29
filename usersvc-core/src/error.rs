//! Error types and HTTP response conversion
//!
//! Every database-layer failure is caught at the handler boundary and
//! converted into an opaque plain-text 500. Clients see a status code and
//! a generic message; the detail goes to the server log.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Result type alias using the workspace error
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the workspace
///
/// Large error variants are boxed to reduce stack size.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration extraction error (missing or malformed value)
    #[error("Configuration error: {0}")]
    Config(Box<figment::Error>),

    /// Configuration value present but unusable (e.g. set but empty)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Database error (connect, query, row decode, cursor exhaustion)
    #[error("Database error: {0}")]
    Database(Box<sqlx::Error>),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Internal server error
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            Error::Config(e) => {
                tracing::error!("Configuration error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Service configuration error")
            }

            Error::InvalidConfig(msg) => {
                tracing::error!("Invalid configuration: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Service configuration error")
            }

            Error::Database(e) => {
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error reading data from database",
                )
            }

            Error::Io(e) => {
                tracing::error!("I/O error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }

            Error::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        (status, body).into_response()
    }
}

impl From<figment::Error> for Error {
    fn from(err: figment::Error) -> Self {
        Error::Config(Box::new(err))
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        Error::Database(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn database_error_is_opaque_500() {
        let err = Error::Database(Box::new(sqlx::Error::RowNotFound));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"Error reading data from database");
    }

    #[tokio::test]
    async fn invalid_config_is_500() {
        let err = Error::InvalidConfig("POSTGRES_USER is set but empty".to_string());
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"Service configuration error");
    }

    #[test]
    fn display_includes_source_detail() {
        let err = Error::InvalidConfig("POSTGRES_DB is set but empty".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: POSTGRES_DB is set but empty"
        );
    }
}
