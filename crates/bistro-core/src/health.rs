//! Probe routes mounted outside any auth layer.

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

/// `GET /healthz` and `GET /readyz` for a service named `service`.
pub fn health_routes<S>(service: &'static str) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/healthz", get(move || probe(service)))
        .route("/readyz", get(move || probe(service)))
}

async fn probe(service: &'static str) -> Json<Value> {
    Json(json!({ "status": "ok", "service": service }))
}
