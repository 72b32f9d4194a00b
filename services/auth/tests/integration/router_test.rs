//! HTTP-level tests for the OTP routes. No database is touched, so the state
//! carries a disconnected connection.

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use sea_orm::DatabaseConnection;
use serde_json::{Value, json};
use tower::ServiceExt;

use bistro_auth::infra::cache::KvBackend;
use bistro_auth::infra::memory::MemoryKvStore;
use bistro_auth::router::build_router;
use bistro_auth::state::AppState;

use crate::helpers::{TEST_JWT_SECRET, TEST_PHONE};

fn app(otp_echo_code: bool) -> Router {
    build_router(AppState {
        db: DatabaseConnection::Disconnected,
        kv: KvBackend::Memory(MemoryKvStore::default()),
        jwt_secret: TEST_JWT_SECRET.to_owned(),
        otp_echo_code,
    })
}

async fn post(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn should_send_and_verify_through_http() {
    let app = app(true);

    let (status, sent) = post(&app, "/send-otp", json!({ "phone_number": TEST_PHONE })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(sent["success"], true);
    let otp = sent["data"]["otp"].as_str().unwrap().to_owned();

    let (status, verified) = post(
        &app,
        "/verify-otp",
        json!({ "phone_number": TEST_PHONE, "otp": otp }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(verified["success"], true);

    let (status, again) = post(
        &app,
        "/verify-otp",
        json!({ "phone_number": TEST_PHONE, "otp": otp }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(again["error"]["kind"], "OTP_NOT_FOUND");
}

#[tokio::test]
async fn should_hide_code_unless_echo_enabled() {
    let app = app(false);
    let (status, sent) = post(&app, "/send-otp", json!({ "phone_number": TEST_PHONE })).await;
    assert_eq!(status, StatusCode::OK);
    assert!(sent["data"].get("otp").is_none());
}

#[tokio::test]
async fn should_return_429_on_fourth_request() {
    let app = app(false);
    for _ in 0..3 {
        let (status, _) = post(&app, "/send-otp", json!({ "phone_number": TEST_PHONE })).await;
        assert_eq!(status, StatusCode::OK);
    }
    let (status, body) = post(&app, "/send-otp", json!({ "phone_number": TEST_PHONE })).await;
    assert_eq!(status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(body["error"]["kind"], "OTP_RATE_LIMITED");
}

#[tokio::test]
async fn should_reject_signup_without_fields_before_touching_db() {
    let app = app(false);
    let (status, body) = post(&app, "/signup", json!({ "username": "arjun" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["kind"], "VALIDATION");
}
