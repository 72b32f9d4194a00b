use axum::{
    Json,
    extract::{Path, RawQuery, State},
};
use tracing::info;

use bistro_auth_types::identity::BearerIdentity;
use bistro_core::envelope::Envelope;

use crate::domain::types::{Order, OrderInput};
use crate::error::BackofficeError;
use crate::handlers::parse_id;
use crate::handlers::query::ListQuery;
use crate::state::AppState;
use crate::usecase::order::{
    CreateOrderUseCase, DeleteOrderUseCase, GetOrderUseCase, ListOrdersUseCase,
    UpdateOrderUseCase,
};

// ── GET /api/orders ──────────────────────────────────────────────────────────

pub async fn list_orders(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Envelope<Vec<Order>>, BackofficeError> {
    let query = ListQuery::parse(raw_query.as_deref())?;
    let usecase = ListOrdersUseCase {
        repo: state.order_repo(),
    };
    Ok(Envelope::list(usecase.execute(query.page()).await?))
}

// ── GET /api/orders/{id} ─────────────────────────────────────────────────────

pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Envelope<Order>, BackofficeError> {
    let usecase = GetOrderUseCase {
        repo: state.order_repo(),
    };
    Ok(Envelope::ok(usecase.execute(parse_id(&id)?).await?))
}

// ── POST /api/orders ─────────────────────────────────────────────────────────

pub async fn create_order(
    identity: BearerIdentity,
    State(state): State<AppState>,
    Json(body): Json<OrderInput>,
) -> Result<Envelope<Order>, BackofficeError> {
    let usecase = CreateOrderUseCase {
        repo: state.order_repo(),
    };
    let order = usecase.execute(body).await?;
    info!(
        order_id = %order.id,
        items = order.items.len(),
        by = %identity.username,
        "order placed"
    );
    Ok(Envelope::created(order))
}

// ── PUT /api/orders/{id} ─────────────────────────────────────────────────────

pub async fn update_order(
    identity: BearerIdentity,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<OrderInput>,
) -> Result<Envelope<Order>, BackofficeError> {
    let usecase = UpdateOrderUseCase {
        repo: state.order_repo(),
    };
    let order = usecase.execute(parse_id(&id)?, body).await?;
    info!(order_id = %order.id, status = %order.status, by = %identity.username, "order updated");
    Ok(Envelope::ok(order))
}

// ── DELETE /api/orders/{id} ──────────────────────────────────────────────────

pub async fn delete_order(
    identity: BearerIdentity,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Envelope<serde_json::Value>, BackofficeError> {
    let id = parse_id(&id)?;
    let usecase = DeleteOrderUseCase {
        repo: state.order_repo(),
    };
    usecase.execute(id).await?;
    info!(order_id = %id, by = %identity.username, "order deleted");
    Ok(Envelope::empty())
}
