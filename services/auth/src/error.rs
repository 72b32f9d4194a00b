use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use bistro_core::envelope::error_response;

/// Auth service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum AuthServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("otp does not match")]
    OtpMismatch,
    #[error("otp expired")]
    OtpExpired,
    #[error("no otp issued for this phone number")]
    OtpNotFound,
    #[error("too many otp requests, try again later")]
    OtpRateLimited,
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("user is inactive")]
    UserInactive,
    #[error("user not found")]
    UserNotFound,
    #[error("user already exists")]
    UserAlreadyExists,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl AuthServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION",
            Self::OtpMismatch => "OTP_MISMATCH",
            Self::OtpExpired => "OTP_EXPIRED",
            Self::OtpNotFound => "OTP_NOT_FOUND",
            Self::OtpRateLimited => "OTP_RATE_LIMITED",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::UserInactive => "USER_INACTIVE",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::UserAlreadyExists => "USER_ALREADY_EXISTS",
            Self::Internal(_) => "INTERNAL",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::OtpMismatch | Self::OtpExpired | Self::OtpNotFound => {
                StatusCode::BAD_REQUEST
            }
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::UserInactive => StatusCode::FORBIDDEN,
            Self::UserNotFound => StatusCode::NOT_FOUND,
            Self::UserAlreadyExists => StatusCode::CONFLICT,
            Self::OtpRateLimited => StatusCode::TOO_MANY_REQUESTS,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

impl IntoResponse for AuthServiceError {
    fn into_response(self) -> Response {
        // 4xx are expected client errors; TraceLayer already records them.
        if let Self::Internal(ref e) = self {
            tracing::error!(error = %e, kind = "INTERNAL", "internal error");
        }
        error_response(self.status(), self.kind(), self.to_string())
    }
}
