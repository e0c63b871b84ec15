//! Error responses produced by the authorization gate.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Rejections raised by the gate and its extractors.
#[derive(Debug, Error)]
pub enum GateError {
    /// No authenticated principal on the request.
    #[error("authentication required")]
    Unauthenticated,

    /// Middleware ordering problem: a handler asked for the principal but
    /// the pipeline never inserted one.
    #[error("internal error: {0}")]
    Internal(String),
}

impl GateError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GateError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
