use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::envelope::error_response;

/// Rejections raised by shared extractors before a service handler runs.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("missing bearer token")]
    MissingToken,
    #[error("invalid or expired token")]
    InvalidToken,
}

impl AppError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingToken | Self::InvalidToken => "UNAUTHORIZED",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingToken | Self::InvalidToken => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error_response(self.status(), self.kind(), self.to_string())
    }
}
