use chrono::{DateTime, Utc};
use uuid::Uuid;

use bistro_domain::billing::{Charges, DocumentKind, compute_totals};
use bistro_domain::order::OrderStatus;
use bistro_domain::pagination::PageRequest;

use crate::domain::repository::OrderRepository;
use crate::domain::types::{Order, OrderInput};
use crate::error::BackofficeError;

fn build_order(
    id: Uuid,
    input: OrderInput,
    status: OrderStatus,
    created_at: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Result<Order, BackofficeError> {
    let customer_name = input
        .customer_name
        .ok_or_else(|| BackofficeError::validation("customer_name is required"))?;
    if input.items.is_empty() {
        return Err(BackofficeError::validation("at least one item is required"));
    }
    let totals = compute_totals(DocumentKind::Order, &input.items, &Charges::default())?;

    Ok(Order {
        id,
        customer_name,
        items: input.items,
        total_amount: totals.grand_total,
        status: input.status.unwrap_or(status),
        created_at,
        updated_at: now,
    })
}

// ── ListOrders ───────────────────────────────────────────────────────────────

pub struct ListOrdersUseCase<R: OrderRepository> {
    pub repo: R,
}

impl<R: OrderRepository> ListOrdersUseCase<R> {
    pub async fn execute(&self, page: PageRequest) -> Result<Vec<Order>, BackofficeError> {
        self.repo.list(page).await
    }
}

// ── GetOrder ─────────────────────────────────────────────────────────────────

pub struct GetOrderUseCase<R: OrderRepository> {
    pub repo: R,
}

impl<R: OrderRepository> GetOrderUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<Order, BackofficeError> {
        self.repo.get(id).await?.ok_or(BackofficeError::OrderNotFound)
    }
}

// ── CreateOrder ──────────────────────────────────────────────────────────────

pub struct CreateOrderUseCase<R: OrderRepository> {
    pub repo: R,
}

impl<R: OrderRepository> CreateOrderUseCase<R> {
    pub async fn execute(&self, input: OrderInput) -> Result<Order, BackofficeError> {
        let now = Utc::now();
        let order = build_order(Uuid::now_v7(), input, OrderStatus::default(), now, now)?;
        self.repo.create(&order).await?;
        Ok(order)
    }
}

// ── UpdateOrder ──────────────────────────────────────────────────────────────

/// Full replacement; a missing status keeps the current one.
pub struct UpdateOrderUseCase<R: OrderRepository> {
    pub repo: R,
}

impl<R: OrderRepository> UpdateOrderUseCase<R> {
    pub async fn execute(&self, id: Uuid, input: OrderInput) -> Result<Order, BackofficeError> {
        let existing = self
            .repo
            .get(id)
            .await?
            .ok_or(BackofficeError::OrderNotFound)?;
        let order = build_order(id, input, existing.status, existing.created_at, Utc::now())?;
        if !self.repo.update(&order).await? {
            return Err(BackofficeError::OrderNotFound);
        }
        Ok(order)
    }
}

// ── DeleteOrder ──────────────────────────────────────────────────────────────

pub struct DeleteOrderUseCase<R: OrderRepository> {
    pub repo: R,
}

impl<R: OrderRepository> DeleteOrderUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<(), BackofficeError> {
        if !self.repo.delete(id).await? {
            return Err(BackofficeError::OrderNotFound);
        }
        Ok(())
    }
}
