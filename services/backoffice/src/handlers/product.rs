use axum::{
    Json,
    extract::{Path, RawQuery, State},
};
use tracing::info;

use bistro_auth_types::identity::BearerIdentity;
use bistro_core::envelope::Envelope;

use crate::domain::types::{Product, ProductInput};
use crate::error::BackofficeError;
use crate::handlers::parse_id;
use crate::handlers::query::ListQuery;
use crate::state::AppState;
use crate::usecase::product::{
    CreateProductUseCase, DeleteProductUseCase, GetProductUseCase, ListProductsUseCase,
    UpdateProductUseCase,
};

// ── GET /api/products ────────────────────────────────────────────────────────

pub async fn list_products(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Envelope<Vec<Product>>, BackofficeError> {
    let query = ListQuery::parse(raw_query.as_deref())?;
    let usecase = ListProductsUseCase {
        repo: state.product_repo(),
    };
    Ok(Envelope::list(usecase.execute(query.page()).await?))
}

// ── GET /api/products/{id} ───────────────────────────────────────────────────

pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Envelope<Product>, BackofficeError> {
    let usecase = GetProductUseCase {
        repo: state.product_repo(),
    };
    Ok(Envelope::ok(usecase.execute(parse_id(&id)?).await?))
}

// ── POST /api/products ───────────────────────────────────────────────────────

pub async fn create_product(
    identity: BearerIdentity,
    State(state): State<AppState>,
    Json(body): Json<ProductInput>,
) -> Result<Envelope<Product>, BackofficeError> {
    let usecase = CreateProductUseCase {
        repo: state.product_repo(),
    };
    let product = usecase.execute(body).await?;
    info!(product_id = %product.id, by = %identity.username, "product added");
    Ok(Envelope::created(product))
}

// ── PUT /api/products/{id} ───────────────────────────────────────────────────

pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<ProductInput>,
) -> Result<Envelope<Product>, BackofficeError> {
    let usecase = UpdateProductUseCase {
        repo: state.product_repo(),
    };
    Ok(Envelope::ok(usecase.execute(parse_id(&id)?, body).await?))
}

// ── DELETE /api/products/{id} ────────────────────────────────────────────────

pub async fn delete_product(
    identity: BearerIdentity,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Envelope<serde_json::Value>, BackofficeError> {
    let id = parse_id(&id)?;
    let usecase = DeleteProductUseCase {
        repo: state.product_repo(),
    };
    usecase.execute(id).await?;
    info!(product_id = %id, by = %identity.username, "product removed");
    Ok(Envelope::empty())
}
