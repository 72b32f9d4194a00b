use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use bistro_core::envelope::Envelope;

use crate::error::AuthServiceError;
use crate::state::AppState;
use crate::usecase::otp::{SendOtpInput, SendOtpUseCase, VerifyOtpInput, VerifyOtpUseCase};

#[derive(Deserialize)]
pub struct SendOtpRequest {
    #[serde(default)]
    pub phone_number: String,
}

#[derive(Debug, Serialize)]
pub struct SendOtpResponse {
    pub message: &'static str,
    /// Present only when `OTP_ECHO_CODE` is enabled.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub otp: Option<String>,
}

pub async fn send_otp(
    State(state): State<AppState>,
    Json(body): Json<SendOtpRequest>,
) -> Result<Envelope<SendOtpResponse>, AuthServiceError> {
    let usecase = SendOtpUseCase {
        kv: state.otp_store(),
        sms: state.sms(),
    };
    let output = usecase
        .execute(SendOtpInput {
            phone_number: body.phone_number,
        })
        .await?;
    Ok(Envelope::ok(SendOtpResponse {
        message: "otp sent",
        otp: state.otp_echo_code.then_some(output.code),
    }))
}

#[derive(Deserialize)]
pub struct VerifyOtpRequest {
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub otp: String,
}

pub async fn verify_otp(
    State(state): State<AppState>,
    Json(body): Json<VerifyOtpRequest>,
) -> Result<Envelope<serde_json::Value>, AuthServiceError> {
    let usecase = VerifyOtpUseCase {
        kv: state.otp_store(),
    };
    usecase
        .execute(VerifyOtpInput {
            phone_number: body.phone_number,
            otp: body.otp,
        })
        .await?;
    Ok(Envelope::ok(serde_json::json!({ "message": "otp verified" })))
}
