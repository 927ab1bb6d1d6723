use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// HTTP-facing error type. Store and engine failures surface as 500s
/// unchanged - the engine performs no retries and no partial rollback, so
/// nothing is swallowed on the way out.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    #[error("Recipe not found")]
    NotFound,

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::MalformedPayload(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(error) => {
                tracing::error!(error = %error, "Request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, self.to_string()).into_response()
    }
}
