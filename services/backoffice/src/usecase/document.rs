use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use bistro_domain::billing::{DocumentKind, compute_totals};
use bistro_domain::date_range::DateRange;
use bistro_domain::pagination::PageRequest;

use crate::domain::repository::DocumentRepository;
use crate::domain::types::{Document, DocumentInput, StoredTotals};
use crate::error::BackofficeError;

/// Field the document number travels under on the wire.
pub fn number_field(kind: DocumentKind) -> &'static str {
    match kind {
        DocumentKind::Purchase => "purchase_no",
        DocumentKind::Estimate => "estimate_no",
        DocumentKind::Order => "order_no",
    }
}

/// Validate a write and derive its totals.
///
/// Purchases need a party with an id, at least one item, a bill date and a due
/// date. Estimates only need a number; the bill date falls back to `today`.
pub(crate) fn build_document(
    kind: DocumentKind,
    id: Uuid,
    number: Option<String>,
    input: DocumentInput,
    created_at: DateTime<Utc>,
    now: DateTime<Utc>,
    today: NaiveDate,
) -> Result<Document, BackofficeError> {
    let number = number
        .map(|n| n.trim().to_owned())
        .filter(|n| !n.is_empty())
        .ok_or_else(|| BackofficeError::validation(format!("{} is required", number_field(kind))))?;

    if let Some(party) = input.party.as_ref() {
        if party.name.trim().is_empty() {
            return Err(BackofficeError::validation("party name is required"));
        }
    }

    let bill_date = match kind {
        DocumentKind::Purchase => {
            if input.party.as_ref().and_then(|p| p.id).is_none() {
                return Err(BackofficeError::validation("party with an id is required"));
            }
            if input.items.is_empty() {
                return Err(BackofficeError::validation("at least one item is required"));
            }
            if input.due_date.is_none() {
                return Err(BackofficeError::validation("due_date is required"));
            }
            input
                .bill_date
                .ok_or_else(|| BackofficeError::validation("bill_date is required"))?
        }
        _ => input.bill_date.unwrap_or(today),
    };

    let charges = input.charges();
    let totals = StoredTotals::from(&compute_totals(kind, &input.items, &charges)?);

    Ok(Document {
        id,
        kind,
        number,
        party: input.party,
        items: input.items,
        bill_date,
        due_date: input.due_date,
        billing_term: input.billing_term,
        delivery_state: input.delivery_state,
        note: input.note,
        discount_percent: input.discount_percent,
        discount_amount: totals.discount_amount,
        service_charge_percent: input.service_charge_percent,
        service_charge_amount: totals.service_charge_amount,
        transport: input.transport,
        subtotal: totals.subtotal,
        tax: totals.tax,
        total_amount: totals.total_amount,
        created_at,
        updated_at: now,
    })
}

// ── ListDocuments ────────────────────────────────────────────────────────────

pub struct ListDocumentsUseCase<R: DocumentRepository> {
    pub repo: R,
    pub kind: DocumentKind,
}

impl<R: DocumentRepository> ListDocumentsUseCase<R> {
    pub async fn execute(
        &self,
        range: Option<DateRange>,
        page: PageRequest,
    ) -> Result<Vec<Document>, BackofficeError> {
        self.repo.list(self.kind, range, page).await
    }
}

// ── GetDocument ──────────────────────────────────────────────────────────────

pub struct GetDocumentUseCase<R: DocumentRepository> {
    pub repo: R,
    pub kind: DocumentKind,
}

impl<R: DocumentRepository> GetDocumentUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<Document, BackofficeError> {
        self.repo
            .get(self.kind, id)
            .await?
            .ok_or_else(|| BackofficeError::document_not_found(self.kind))
    }
}

// ── CreateDocument ───────────────────────────────────────────────────────────

pub struct CreateDocumentUseCase<R: DocumentRepository> {
    pub repo: R,
    pub kind: DocumentKind,
}

impl<R: DocumentRepository> CreateDocumentUseCase<R> {
    pub async fn execute(
        &self,
        number: Option<String>,
        input: DocumentInput,
    ) -> Result<Document, BackofficeError> {
        let now = Utc::now();
        let document = build_document(
            self.kind,
            Uuid::now_v7(),
            number,
            input,
            now,
            now,
            now.date_naive(),
        )?;
        self.repo.create(&document).await?;
        Ok(document)
    }
}

// ── UpdateDocument ───────────────────────────────────────────────────────────

/// Full replacement. Totals are recomputed from the new items and charges.
pub struct UpdateDocumentUseCase<R: DocumentRepository> {
    pub repo: R,
    pub kind: DocumentKind,
}

impl<R: DocumentRepository> UpdateDocumentUseCase<R> {
    pub async fn execute(
        &self,
        id: Uuid,
        number: Option<String>,
        input: DocumentInput,
    ) -> Result<Document, BackofficeError> {
        let existing = self
            .repo
            .get(self.kind, id)
            .await?
            .ok_or_else(|| BackofficeError::document_not_found(self.kind))?;
        let now = Utc::now();
        let document = build_document(
            self.kind,
            id,
            number,
            input,
            existing.created_at,
            now,
            existing.bill_date,
        )?;
        if !self.repo.update(&document).await? {
            return Err(BackofficeError::document_not_found(self.kind));
        }
        Ok(document)
    }
}

// ── DeleteDocument ───────────────────────────────────────────────────────────

pub struct DeleteDocumentUseCase<R: DocumentRepository> {
    pub repo: R,
    pub kind: DocumentKind,
}

impl<R: DocumentRepository> DeleteDocumentUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<(), BackofficeError> {
        if !self.repo.delete(self.kind, id).await? {
            return Err(BackofficeError::document_not_found(self.kind));
        }
        Ok(())
    }
}

// ── BulkDeleteDocuments ──────────────────────────────────────────────────────

pub struct BulkDeleteDocumentsUseCase<R: DocumentRepository> {
    pub repo: R,
    pub kind: DocumentKind,
}

impl<R: DocumentRepository> BulkDeleteDocumentsUseCase<R> {
    /// Returns how many documents were removed. Unknown ids are skipped.
    pub async fn execute(&self, ids: &[Uuid]) -> Result<u64, BackofficeError> {
        if ids.is_empty() {
            return Err(BackofficeError::validation("ids must not be empty"));
        }
        self.repo.delete_many(self.kind, ids).await
    }
}
