use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use bistro_domain::billing::round_money;
use bistro_domain::pagination::PageRequest;
use bistro_domain::product::price_with_gst;

use crate::domain::repository::ProductRepository;
use crate::domain::types::{Product, ProductInput};
use crate::error::BackofficeError;

fn build_product(
    id: Uuid,
    input: ProductInput,
    created_at: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Result<Product, BackofficeError> {
    let item_name = input
        .item_name
        .ok_or_else(|| BackofficeError::validation("item_name is required"))?;
    let sell_price = input
        .sell_price
        .ok_or_else(|| BackofficeError::validation("sell_price is required"))?;
    if sell_price < Decimal::ZERO {
        return Err(BackofficeError::validation("sell_price must not be negative"));
    }
    let (gst_amount, total_price) = price_with_gst(sell_price, input.gst_enabled)?;

    Ok(Product {
        id,
        item_name,
        sell_price: round_money(sell_price),
        product_type: input.product_type,
        primary_unit: input.primary_unit,
        custom_unit: input.custom_unit,
        gst_enabled: input.gst_enabled,
        gst_amount,
        total_price,
        created_at,
        updated_at: now,
    })
}

// ── ListProducts ─────────────────────────────────────────────────────────────

pub struct ListProductsUseCase<R: ProductRepository> {
    pub repo: R,
}

impl<R: ProductRepository> ListProductsUseCase<R> {
    pub async fn execute(&self, page: PageRequest) -> Result<Vec<Product>, BackofficeError> {
        self.repo.list(page).await
    }
}

// ── GetProduct ───────────────────────────────────────────────────────────────

pub struct GetProductUseCase<R: ProductRepository> {
    pub repo: R,
}

impl<R: ProductRepository> GetProductUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<Product, BackofficeError> {
        self.repo
            .get(id)
            .await?
            .ok_or(BackofficeError::ProductNotFound)
    }
}

// ── CreateProduct ────────────────────────────────────────────────────────────

pub struct CreateProductUseCase<R: ProductRepository> {
    pub repo: R,
}

impl<R: ProductRepository> CreateProductUseCase<R> {
    pub async fn execute(&self, input: ProductInput) -> Result<Product, BackofficeError> {
        let now = Utc::now();
        let product = build_product(Uuid::now_v7(), input, now, now)?;
        self.repo.create(&product).await?;
        Ok(product)
    }
}

// ── UpdateProduct ────────────────────────────────────────────────────────────

pub struct UpdateProductUseCase<R: ProductRepository> {
    pub repo: R,
}

impl<R: ProductRepository> UpdateProductUseCase<R> {
    pub async fn execute(
        &self,
        id: Uuid,
        input: ProductInput,
    ) -> Result<Product, BackofficeError> {
        let existing = self
            .repo
            .get(id)
            .await?
            .ok_or(BackofficeError::ProductNotFound)?;
        let product = build_product(id, input, existing.created_at, Utc::now())?;
        if !self.repo.update(&product).await? {
            return Err(BackofficeError::ProductNotFound);
        }
        Ok(product)
    }
}

// ── DeleteProduct ────────────────────────────────────────────────────────────

pub struct DeleteProductUseCase<R: ProductRepository> {
    pub repo: R,
}

impl<R: ProductRepository> DeleteProductUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<(), BackofficeError> {
        if !self.repo.delete(id).await? {
            return Err(BackofficeError::ProductNotFound);
        }
        Ok(())
    }
}
