use chrono::Utc;
use rust_decimal::Decimal;
use uuid::Uuid;

use bistro_domain::billing::round_money;
use bistro_domain::date_range::DateRange;
use bistro_domain::pagination::PageRequest;

use crate::domain::repository::SaleRepository;
use crate::domain::types::{Sale, SaleInput};
use crate::error::BackofficeError;

fn required<T>(value: Option<T>, field: &str) -> Result<T, BackofficeError> {
    value.ok_or_else(|| BackofficeError::validation(format!("{field} is required")))
}

fn check_total(total: Decimal) -> Result<Decimal, BackofficeError> {
    if total < Decimal::ZERO {
        return Err(BackofficeError::validation("total must not be negative"));
    }
    Ok(round_money(total))
}

fn check_dates(sale: &Sale) -> Result<(), BackofficeError> {
    if sale.due_date < sale.bill_date {
        return Err(BackofficeError::validation(
            "due_date must not be before bill_date",
        ));
    }
    Ok(())
}

// ── ListSales ────────────────────────────────────────────────────────────────

pub struct ListSalesUseCase<R: SaleRepository> {
    pub repo: R,
}

impl<R: SaleRepository> ListSalesUseCase<R> {
    pub async fn execute(
        &self,
        range: Option<DateRange>,
        page: PageRequest,
    ) -> Result<Vec<Sale>, BackofficeError> {
        self.repo.list(range, page).await
    }
}

// ── GetSale ──────────────────────────────────────────────────────────────────

pub struct GetSaleUseCase<R: SaleRepository> {
    pub repo: R,
}

impl<R: SaleRepository> GetSaleUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<Sale, BackofficeError> {
        self.repo.get(id).await?.ok_or(BackofficeError::SaleNotFound)
    }
}

// ── CreateSale ───────────────────────────────────────────────────────────────

pub struct CreateSaleUseCase<R: SaleRepository> {
    pub repo: R,
}

impl<R: SaleRepository> CreateSaleUseCase<R> {
    pub async fn execute(&self, input: SaleInput) -> Result<Sale, BackofficeError> {
        let now = Utc::now();
        let sale = Sale {
            id: Uuid::now_v7(),
            sale_no: required(input.sale_no, "sale_no")?,
            bill_date: required(input.bill_date, "bill_date")?,
            due_date: required(input.due_date, "due_date")?,
            billing_term: required(input.billing_term, "billing_term")?,
            total: check_total(required(input.total, "total")?)?,
            gstin: required(input.gstin, "gstin")?.to_uppercase(),
            delivery_state: required(input.delivery_state, "delivery_state")?,
            created_at: now,
            updated_at: now,
        };
        check_dates(&sale)?;
        self.repo.create(&sale).await?;
        Ok(sale)
    }
}

// ── PatchSale ────────────────────────────────────────────────────────────────

/// Applies the fields present in the patch and keeps the rest.
pub struct PatchSaleUseCase<R: SaleRepository> {
    pub repo: R,
}

impl<R: SaleRepository> PatchSaleUseCase<R> {
    pub async fn execute(&self, id: Uuid, patch: SaleInput) -> Result<Sale, BackofficeError> {
        if patch.is_empty() {
            return Err(BackofficeError::validation("no fields to update"));
        }
        let mut sale = self
            .repo
            .get(id)
            .await?
            .ok_or(BackofficeError::SaleNotFound)?;

        if let Some(sale_no) = patch.sale_no {
            sale.sale_no = sale_no;
        }
        if let Some(bill_date) = patch.bill_date {
            sale.bill_date = bill_date;
        }
        if let Some(due_date) = patch.due_date {
            sale.due_date = due_date;
        }
        if let Some(billing_term) = patch.billing_term {
            sale.billing_term = billing_term;
        }
        if let Some(total) = patch.total {
            sale.total = check_total(total)?;
        }
        if let Some(gstin) = patch.gstin {
            sale.gstin = gstin.to_uppercase();
        }
        if let Some(delivery_state) = patch.delivery_state {
            sale.delivery_state = delivery_state;
        }
        check_dates(&sale)?;
        sale.updated_at = Utc::now();

        if !self.repo.update(&sale).await? {
            return Err(BackofficeError::SaleNotFound);
        }
        Ok(sale)
    }
}

// ── DeleteSale ───────────────────────────────────────────────────────────────

pub struct DeleteSaleUseCase<R: SaleRepository> {
    pub repo: R,
}

impl<R: SaleRepository> DeleteSaleUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<(), BackofficeError> {
        if !self.repo.delete(id).await? {
            return Err(BackofficeError::SaleNotFound);
        }
        Ok(())
    }
}
