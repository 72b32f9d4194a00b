use axum::{Router, routing::post};

use bistro_core::health::health_routes;

use crate::handlers::{
    account::{login, reset_password, signup},
    otp::{send_otp, verify_otp},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Accounts
        .route("/signup", post(signup))
        .route("/login", post(login))
        .route("/reset-password", post(reset_password))
        // OTP
        .route("/send-otp", post(send_otp))
        .route("/verify-otp", post(verify_otp))
        .merge(health_routes("auth"))
        .with_state(state)
}
