use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum PraxisError {
    #[error("missing required parameter: category")]
    MissingCategory,

    #[error("no exercises matched the requested category")]
    NotFound,

    #[error("database error: {0}")]
    Database(#[from] SqlxError),

    #[error("configuration error: {0}")]
    Config(String),
}

impl IntoResponse for PraxisError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            PraxisError::MissingCategory => (
                StatusCode::BAD_REQUEST,
                "Missing required parameter: category",
            ),
            PraxisError::NotFound => (StatusCode::NOT_FOUND, "Not found"),
            // Store-level detail stays in the server log; the client only
            // sees a generic message.
            PraxisError::Database(e) => {
                error!(error = %e, "error querying the database");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error retrieving data from the database",
                )
            }
            PraxisError::Config(msg) => {
                error!(error = %msg, "configuration error reached a request handler");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error retrieving data from the database",
                )
            }
        };
        (status, body).into_response()
    }
}
