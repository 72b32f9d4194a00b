//! `Authorization: Bearer` identity extractor.

use std::sync::Arc;

use axum::extract::{FromRef, FromRequestParts};
use axum_extra::headers::authorization::Bearer;
use axum_extra::headers::{Authorization, HeaderMapExt};
use http::request::Parts;
use uuid::Uuid;

use bistro_core::error::AppError;
use bistro_domain::user::UserRole;

use crate::token::validate_access_token;

/// HMAC secret used to validate bearer tokens. Provide it from the router
/// state through `FromRef`.
#[derive(Clone)]
pub struct JwtSecret(pub Arc<str>);

impl JwtSecret {
    pub fn new(secret: impl Into<Arc<str>>) -> Self {
        Self(secret.into())
    }
}

/// Caller identity taken from a valid bearer token.
///
/// Rejects with 401 when the header is absent, not a bearer credential, or the
/// token fails validation.
#[derive(Debug, Clone)]
pub struct BearerIdentity {
    pub user_id: Uuid,
    pub username: String,
    pub role: UserRole,
}

impl<S> FromRequestParts<S> for BearerIdentity
where
    S: Send + Sync,
    JwtSecret: FromRef<S>,
{
    type Rejection = AppError;

    // Resolve synchronously and hand back a 'static future; an `async fn` here
    // would capture `parts` and fail the trait's lifetime bounds.
    fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let secret = JwtSecret::from_ref(state);
        let result = parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .ok_or(AppError::MissingToken)
            .and_then(|Authorization(bearer)| {
                validate_access_token(bearer.token(), &secret.0).map_err(|e| {
                    tracing::debug!(error = %e, "bearer token rejected");
                    AppError::InvalidToken
                })
            })
            .map(|info| Self {
                user_id: info.user_id,
                username: info.username,
                role: info.role,
            });

        async move { result }
    }
}
