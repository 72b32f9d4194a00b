use axum::{Json, extract::State};
use serde::Deserialize;

use bistro_core::envelope::Envelope;

use crate::domain::types::UserProfile;
use crate::error::AuthServiceError;
use crate::state::AppState;
use crate::usecase::login::{LoginInput, LoginOutput, LoginUseCase};
use crate::usecase::reset_password::{ResetPasswordInput, ResetPasswordUseCase};
use crate::usecase::signup::{SignupInput, SignupUseCase};

// ── POST /signup ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub password: String,
}

pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<SignupRequest>,
) -> Result<Envelope<UserProfile>, AuthServiceError> {
    let usecase = SignupUseCase {
        users: state.user_repo(),
    };
    let profile = usecase
        .execute(SignupInput {
            username: body.username,
            email: body.email,
            phone_number: body.phone_number,
            password: body.password,
        })
        .await?;
    Ok(Envelope::created(profile))
}

// ── POST /login ──────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub identifier: String,
    #[serde(default)]
    pub password: String,
}

pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Envelope<LoginOutput>, AuthServiceError> {
    let usecase = LoginUseCase {
        users: state.user_repo(),
        jwt_secret: state.jwt_secret.clone(),
    };
    let output = usecase
        .execute(LoginInput {
            identifier: body.identifier,
            password: body.password,
        })
        .await?;
    Ok(Envelope::ok(output))
}

// ── POST /reset-password ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ResetPasswordRequest {
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub otp: String,
    #[serde(default)]
    pub new_password: String,
}

pub async fn reset_password(
    State(state): State<AppState>,
    Json(body): Json<ResetPasswordRequest>,
) -> Result<Envelope<serde_json::Value>, AuthServiceError> {
    let usecase = ResetPasswordUseCase {
        users: state.user_repo(),
        kv: state.otp_store(),
    };
    usecase
        .execute(ResetPasswordInput {
            phone_number: body.phone_number,
            otp: body.otp,
            new_password: body.new_password,
        })
        .await?;
    Ok(Envelope::ok(
        serde_json::json!({ "message": "password updated" }),
    ))
}
