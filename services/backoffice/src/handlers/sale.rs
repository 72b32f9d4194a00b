use axum::{
    Json,
    extract::{Path, RawQuery, State},
};
use tracing::info;

use bistro_auth_types::identity::BearerIdentity;
use bistro_core::envelope::Envelope;

use crate::domain::types::{Sale, SaleInput};
use crate::error::BackofficeError;
use crate::handlers::parse_id;
use crate::handlers::query::ListQuery;
use crate::state::AppState;
use crate::usecase::sale::{
    CreateSaleUseCase, DeleteSaleUseCase, GetSaleUseCase, ListSalesUseCase, PatchSaleUseCase,
};

// ── GET /api/sales ───────────────────────────────────────────────────────────

pub async fn list_sales(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Envelope<Vec<Sale>>, BackofficeError> {
    let query = ListQuery::parse(raw_query.as_deref())?;
    let usecase = ListSalesUseCase {
        repo: state.sale_repo(),
    };
    let sales = usecase
        .execute(query.date_range_today()?, query.page())
        .await?;
    Ok(Envelope::list(sales))
}

// ── GET /api/sales/{id} ──────────────────────────────────────────────────────

pub async fn get_sale(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Envelope<Sale>, BackofficeError> {
    let usecase = GetSaleUseCase {
        repo: state.sale_repo(),
    };
    Ok(Envelope::ok(usecase.execute(parse_id(&id)?).await?))
}

// ── POST /api/sales ──────────────────────────────────────────────────────────

pub async fn create_sale(
    identity: BearerIdentity,
    State(state): State<AppState>,
    Json(body): Json<SaleInput>,
) -> Result<Envelope<Sale>, BackofficeError> {
    let usecase = CreateSaleUseCase {
        repo: state.sale_repo(),
    };
    let sale = usecase.execute(body).await?;
    info!(sale_id = %sale.id, sale_no = %sale.sale_no, by = %identity.username, "sale recorded");
    Ok(Envelope::created(sale))
}

// ── PATCH /api/sales/{id} ────────────────────────────────────────────────────

pub async fn patch_sale(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<SaleInput>,
) -> Result<Envelope<Sale>, BackofficeError> {
    let usecase = PatchSaleUseCase {
        repo: state.sale_repo(),
    };
    Ok(Envelope::ok(usecase.execute(parse_id(&id)?, body).await?))
}

// ── DELETE /api/sales/{id} ───────────────────────────────────────────────────

pub async fn delete_sale(
    identity: BearerIdentity,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Envelope<serde_json::Value>, BackofficeError> {
    let id = parse_id(&id)?;
    let usecase = DeleteSaleUseCase {
        repo: state.sale_repo(),
    };
    usecase.execute(id).await?;
    info!(sale_id = %id, by = %identity.username, "sale deleted");
    Ok(Envelope::empty())
}
