// Application error type and its mapping onto HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;

/// The full error taxonomy of the system. Empty query results are not
/// errors and never pass through here.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("validation failed, missing: {0:?}")]
    Validation(Vec<String>),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound(what) => {
                tracing::info!(%what, "lookup missed");
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": format!("{} not found", what) })),
                )
                    .into_response()
            }
            AppError::Validation(missing) => {
                tracing::info!(?missing, "form validation failed");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(json!({ "error": "missing required fields", "missing": missing })),
                )
                    .into_response()
            }
            AppError::Internal(e) => {
                // Log the detail here; don't expose it to the client.
                tracing::error!("internal error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "internal server error" })),
                )
                    .into_response()
            }
        }
    }
}

impl From<askama::Error> for AppError {
    fn from(error: askama::Error) -> Self {
        AppError::Internal(anyhow::Error::new(error))
    }
}

pub type AppResult<T> = Result<T, AppError>;
