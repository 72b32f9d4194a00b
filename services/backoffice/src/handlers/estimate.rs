use axum::{
    Json,
    extract::{Path, RawQuery, State},
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use bistro_auth_types::identity::BearerIdentity;
use bistro_core::envelope::Envelope;
use bistro_domain::billing::DocumentKind;

use crate::domain::types::{Document, DocumentInput};
use crate::error::BackofficeError;
use crate::handlers::parse_id;
use crate::handlers::query::ListQuery;
use crate::state::AppState;
use crate::usecase::document::{
    BulkDeleteDocumentsUseCase, CreateDocumentUseCase, DeleteDocumentUseCase, GetDocumentUseCase,
    ListDocumentsUseCase, UpdateDocumentUseCase,
};

const KIND: DocumentKind = DocumentKind::Estimate;

// ── Request / response types ─────────────────────────────────────────────────

#[derive(Serialize)]
pub struct EstimateResponse {
    pub estimate_no: String,
    #[serde(flatten)]
    pub document: Document,
}

impl From<Document> for EstimateResponse {
    fn from(document: Document) -> Self {
        Self {
            estimate_no: document.number.clone(),
            document,
        }
    }
}

#[derive(Deserialize)]
pub struct EstimateRequest {
    #[serde(default)]
    pub estimate_no: Option<String>,
    #[serde(flatten)]
    pub document: DocumentInput,
}

#[derive(Deserialize)]
pub struct BulkDeleteRequest {
    #[serde(default)]
    pub ids: Vec<Uuid>,
}

#[derive(Serialize)]
pub struct BulkDeleteResponse {
    pub deleted: u64,
}

// ── GET /api/estimates ───────────────────────────────────────────────────────

pub async fn list_estimates(
    State(state): State<AppState>,
    RawQuery(raw_query): RawQuery,
) -> Result<Envelope<Vec<EstimateResponse>>, BackofficeError> {
    let query = ListQuery::parse(raw_query.as_deref())?;
    let usecase = ListDocumentsUseCase {
        repo: state.document_repo(),
        kind: KIND,
    };
    let estimates = usecase
        .execute(query.date_range_today()?, query.page())
        .await?;
    Ok(Envelope::list(
        estimates.into_iter().map(EstimateResponse::from).collect(),
    ))
}

// ── GET /api/estimates/{id} ──────────────────────────────────────────────────

pub async fn get_estimate(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Envelope<EstimateResponse>, BackofficeError> {
    let usecase = GetDocumentUseCase {
        repo: state.document_repo(),
        kind: KIND,
    };
    let estimate = usecase.execute(parse_id(&id)?).await?;
    Ok(Envelope::ok(estimate.into()))
}

// ── POST /api/estimates ──────────────────────────────────────────────────────

pub async fn create_estimate(
    identity: BearerIdentity,
    State(state): State<AppState>,
    Json(body): Json<EstimateRequest>,
) -> Result<Envelope<EstimateResponse>, BackofficeError> {
    let usecase = CreateDocumentUseCase {
        repo: state.document_repo(),
        kind: KIND,
    };
    let estimate = usecase.execute(body.estimate_no, body.document).await?;
    info!(
        estimate_id = %estimate.id,
        estimate_no = %estimate.number,
        by = %identity.username,
        "estimate created"
    );
    Ok(Envelope::created(estimate.into()))
}

// ── PUT /api/estimates/{id} ──────────────────────────────────────────────────

pub async fn update_estimate(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<EstimateRequest>,
) -> Result<Envelope<EstimateResponse>, BackofficeError> {
    let usecase = UpdateDocumentUseCase {
        repo: state.document_repo(),
        kind: KIND,
    };
    let estimate = usecase
        .execute(parse_id(&id)?, body.estimate_no, body.document)
        .await?;
    Ok(Envelope::ok(estimate.into()))
}

// ── DELETE /api/estimates/{id} ───────────────────────────────────────────────

pub async fn delete_estimate(
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
    info!(estimate_id = %id, by = %identity.username, "estimate deleted");
    Ok(Envelope::empty())
}

// ── DELETE /api/estimates/bulk-delete ────────────────────────────────────────

pub async fn bulk_delete_estimates(
    identity: BearerIdentity,
    State(state): State<AppState>,
    Json(body): Json<BulkDeleteRequest>,
) -> Result<Envelope<BulkDeleteResponse>, BackofficeError> {
    let usecase = BulkDeleteDocumentsUseCase {
        repo: state.document_repo(),
        kind: KIND,
    };
    let deleted = usecase.execute(&body.ids).await?;
    info!(requested = body.ids.len(), deleted, by = %identity.username, "estimates bulk deleted");
    Ok(Envelope::ok(BulkDeleteResponse { deleted }))
}
