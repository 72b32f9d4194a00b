use uuid::Uuid;

use bistro_domain::billing::{BillTotals, Charges, DocumentKind, LineItem, compute_totals};

use crate::domain::repository::{DocumentRepository, OrderRepository};
use crate::error::BackofficeError;

// ── DocumentBill ─────────────────────────────────────────────────────────────

/// Totals breakdown of a stored purchase or estimate.
pub struct DocumentBillUseCase<R: DocumentRepository> {
    pub repo: R,
    pub kind: DocumentKind,
}

impl<R: DocumentRepository> DocumentBillUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<BillTotals, BackofficeError> {
        let document = self
            .repo
            .get(self.kind, id)
            .await?
            .ok_or_else(|| BackofficeError::document_not_found(self.kind))?;
        Ok(compute_totals(
            self.kind,
            &document.items,
            &document.charges(),
        )?)
    }
}

// ── OrderBill ────────────────────────────────────────────────────────────────

pub struct OrderBillUseCase<R: OrderRepository> {
    pub repo: R,
}

impl<R: OrderRepository> OrderBillUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<BillTotals, BackofficeError> {
        let order = self
            .repo
            .get(id)
            .await?
            .ok_or(BackofficeError::OrderNotFound)?;
        Ok(compute_totals(
            DocumentKind::Order,
            &order.items,
            &Charges::default(),
        )?)
    }
}

// ── PreviewBill ──────────────────────────────────────────────────────────────

/// Ad-hoc computation; nothing is read or stored.
pub fn preview_bill(
    kind: DocumentKind,
    items: &[LineItem],
    charges: &Charges,
) -> Result<BillTotals, BackofficeError> {
    if items.is_empty() {
        return Err(BackofficeError::validation("at least one item is required"));
    }
    Ok(compute_totals(kind, items, charges)?)
}
