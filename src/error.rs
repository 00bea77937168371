use crate::service::discord_service;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown webhook source: {0}")]
    UnknownSource(String),

    #[error("failed to parse payload: {0}")]
    InvalidPayload(#[from] serde_json::Error),

    #[error("failed to forward message: {0}")]
    Forward(#[from] discord_service::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match &self {
            Error::Forward(_) => tracing::error!(err = %self),
            _ => tracing::warn!(err = %self),
        }

        match self {
            Error::UnknownSource(_) => (StatusCode::NOT_FOUND, "Unknown webhook source"),
            Error::InvalidPayload(_) => (StatusCode::BAD_REQUEST, "Failed to parse payload"),
            Error::Forward(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to send Discord webhook message",
            ),
        }
        .into_response()
    }
}
