use axum::{
    Json,
    extract::{Path, RawQuery, State},
};
use serde::{Deserialize, Serialize};
use tracing::info;

use bistro_auth_types::identity::BearerIdentity;
use bistro_core::envelope::Envelope;
use bistro_domain::billing::DocumentKind;

use crate::domain::types::{Document, DocumentInput};
use crate::error::BackofficeError;
use crate::handlers::parse_id;
use crate::handlers::query::ListQuery;
use crate::state::AppState;
use crate::usecase::document::{
    CreateDocumentUseCase, DeleteDocumentUseCase, GetDocumentUseCase, ListDocumentsUseCase,
    UpdateDocumentUseCase,
};

const KIND: DocumentKind = DocumentKind::Purchase;

// ── Request / response types ─────────────────────────────────────────────────

#[derive(Serialize)]
pub struct PurchaseResponse {
    pub purchase_no: String,
    #[serde(flatten)]
    pub document: Document,
}

impl From<Document> for PurchaseResponse {
    fn from(document: Document) -> Self {
        Self {
            purchase_no: document.number.clone(),
            document,
        }
    }
}

#[derive(Deserialize)]
pub struct PurchaseRequest {
    #[serde(default)]
    pub purchase_no: Option<String>,
    #[serde(flatten)]
    pub document: DocumentInput,
}

// ── GET /api/purchases/purchases ─────────────────────────────────────────────

pub async fn list_purchases(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Envelope<Vec<PurchaseResponse>>, BackofficeError> {
    let query = ListQuery::parse(raw_query.as_deref())?;
    let usecase = ListDocumentsUseCase {
        repo: state.document_repo(),
        kind: KIND,
    };
    let purchases = usecase
        .execute(query.date_range_today()?, query.page())
        .await?;
    Ok(Envelope::list(
        purchases.into_iter().map(PurchaseResponse::from).collect(),
    ))
}

// ── GET /api/purchases/purchases/{id} ────────────────────────────────────────

pub async fn get_purchase(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Envelope<PurchaseResponse>, BackofficeError> {
    let usecase = GetDocumentUseCase {
        repo: state.document_repo(),
        kind: KIND,
    };
    let purchase = usecase.execute(parse_id(&id)?).await?;
    Ok(Envelope::ok(purchase.into()))
}

// ── POST /api/purchases/purchases ────────────────────────────────────────────

pub async fn create_purchase(
    identity: BearerIdentity,
    State(state): State<AppState>,
    Json(body): Json<PurchaseRequest>,
) -> Result<Envelope<PurchaseResponse>, BackofficeError> {
    let usecase = CreateDocumentUseCase {
        repo: state.document_repo(),
        kind: KIND,
    };
    let purchase = usecase.execute(body.purchase_no, body.document).await?;
    info!(
        purchase_id = %purchase.id,
        purchase_no = %purchase.number,
        by = %identity.username,
        "purchase recorded"
    );
    Ok(Envelope::created(purchase.into()))
}

// ── PUT /api/purchases/purchases/{id} ────────────────────────────────────────

pub async fn update_purchase(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<PurchaseRequest>,
) -> Result<Envelope<PurchaseResponse>, BackofficeError> {
    let usecase = UpdateDocumentUseCase {
        repo: state.document_repo(),
        kind: KIND,
    };
    let purchase = usecase
        .execute(parse_id(&id)?, body.purchase_no, body.document)
        .await?;
    Ok(Envelope::ok(purchase.into()))
}

// ── DELETE /api/purchases/purchases/{id} ─────────────────────────────────────

pub async fn delete_purchase(
    identity: BearerIdentity,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Envelope<serde_json::Value>, BackofficeError> {
    let id = parse_id(&id)?;
    let usecase = DeleteDocumentUseCase {
        repo: state.document_repo(),
        kind: KIND,
    };
    usecase.execute(id).await?;
    info!(purchase_id = %id, by = %identity.username, "purchase deleted");
    Ok(Envelope::empty())
}
