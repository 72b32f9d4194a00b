use axum::{
    Json,
    extract::{Path, State},
};
use rust_decimal::Decimal;
use serde::Deserialize;

use bistro_core::envelope::Envelope;
use bistro_domain::billing::{Adjustment, BillTotals, Charges, DocumentKind, LineItem};

use crate::error::BackofficeError;
use crate::handlers::parse_id;
use crate::state::AppState;
use crate::usecase::bill::{DocumentBillUseCase, OrderBillUseCase, preview_bill};

// ── GET /api/purchases/purchases/{id}/bill ───────────────────────────────────

pub async fn purchase_bill(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Envelope<BillTotals>, BackofficeError> {
    let usecase = DocumentBillUseCase {
        repo: state.document_repo(),
        kind: DocumentKind::Purchase,
    };
    Ok(Envelope::ok(usecase.execute(parse_id(&id)?).await?))
}

// ── GET /api/estimates/{id}/bill ─────────────────────────────────────────────

pub async fn estimate_bill(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Envelope<BillTotals>, BackofficeError> {
    let usecase = DocumentBillUseCase {
        repo: state.document_repo(),
        kind: DocumentKind::Estimate,
    };
    Ok(Envelope::ok(usecase.execute(parse_id(&id)?).await?))
}

// ── GET /api/orders/{id}/bill ────────────────────────────────────────────────

pub async fn order_bill(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Envelope<BillTotals>, BackofficeError> {
    let usecase = OrderBillUseCase {
        repo: state.order_repo(),
    };
    Ok(Envelope::ok(usecase.execute(parse_id(&id)?).await?))
}

// ── POST /api/bills/preview ──────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PreviewBillRequest {
    pub kind: Option<DocumentKind>,
    pub items: Vec<LineItem>,
    pub discount_percent: Option<Decimal>,
    pub discount_amount: Option<Decimal>,
    pub service_charge_percent: Option<Decimal>,
    pub service_charge_amount: Option<Decimal>,
    pub extra_charges: Option<Decimal>,
}

impl PreviewBillRequest {
    fn charges(&self) -> Charges {
        Charges {
            discount: Adjustment::from_parts(self.discount_percent, self.discount_amount),
            service_charge: Adjustment::from_parts(
                self.service_charge_percent,
                self.service_charge_amount,
            ),
            extra: self.extra_charges.unwrap_or_default(),
        }
    }
}

pub async fn preview(
    Json(body): Json<PreviewBillRequest>,
) -> Result<Envelope<BillTotals>, BackofficeError> {
    let kind = body
        .kind
        .ok_or_else(|| BackofficeError::validation("kind is required"))?;
    Ok(Envelope::ok(preview_bill(kind, &body.items, &body.charges())?))
}
