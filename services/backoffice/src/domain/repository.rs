#![allow(async_fn_in_trait)]

use uuid::Uuid;

use bistro_domain::billing::DocumentKind;
use bistro_domain::date_range::DateRange;
use bistro_domain::pagination::PageRequest;
use bistro_domain::party::PartyKind;

use crate::domain::types::{Document, Order, Party, Product, Sale};
use crate::error::BackofficeError;

// List methods return newest first. `update` and `delete` report whether a row
// matched.

pub trait PartyRepository: Send + Sync {
    async fn list(
        &self,
        kind: Option<PartyKind>,
        page: PageRequest,
    ) -> Result<Vec<Party>, BackofficeError>;

    async fn get(&self, id: Uuid) -> Result<Option<Party>, BackofficeError>;

    async fn create(&self, party: &Party) -> Result<(), BackofficeError>;

    async fn update(&self, party: &Party) -> Result<bool, BackofficeError>;

    async fn delete(&self, id: Uuid) -> Result<bool, BackofficeError>;
}

/// Purchases and estimates. Numbers are unique per kind; a clash yields
/// [`BackofficeError::DocumentNumberTaken`].
pub trait DocumentRepository: Send + Sync {
    /// `range` filters on bill date, both ends inclusive.
    async fn list(
        &self,
        kind: DocumentKind,
        range: Option<DateRange>,
        page: PageRequest,
    ) -> Result<Vec<Document>, BackofficeError>;

    async fn get(&self, kind: DocumentKind, id: Uuid)
    -> Result<Option<Document>, BackofficeError>;

    async fn create(&self, document: &Document) -> Result<(), BackofficeError>;

    async fn update(&self, document: &Document) -> Result<bool, BackofficeError>;

    async fn delete(&self, kind: DocumentKind, id: Uuid) -> Result<bool, BackofficeError>;

    /// Returns how many rows were removed.
    async fn delete_many(&self, kind: DocumentKind, ids: &[Uuid])
    -> Result<u64, BackofficeError>;
}

pub trait SaleRepository: Send + Sync {
    async fn list(
        &self,
        range: Option<DateRange>,
        page: PageRequest,
    ) -> Result<Vec<Sale>, BackofficeError>;

    async fn get(&self, id: Uuid) -> Result<Option<Sale>, BackofficeError>;

    /// A taken `sale_no` yields [`BackofficeError::DocumentNumberTaken`].
    async fn create(&self, sale: &Sale) -> Result<(), BackofficeError>;

    async fn update(&self, sale: &Sale) -> Result<bool, BackofficeError>;

    async fn delete(&self, id: Uuid) -> Result<bool, BackofficeError>;
}

pub trait OrderRepository: Send + Sync {
    async fn list(&self, page: PageRequest) -> Result<Vec<Order>, BackofficeError>;

    async fn get(&self, id: Uuid) -> Result<Option<Order>, BackofficeError>;

    async fn create(&self, order: &Order) -> Result<(), BackofficeError>;

    async fn update(&self, order: &Order) -> Result<bool, BackofficeError>;

    async fn delete(&self, id: Uuid) -> Result<bool, BackofficeError>;
}

pub trait ProductRepository: Send + Sync {
    async fn list(&self, page: PageRequest) -> Result<Vec<Product>, BackofficeError>;

    async fn get(&self, id: Uuid) -> Result<Option<Product>, BackofficeError>;

    async fn create(&self, product: &Product) -> Result<(), BackofficeError>;

    async fn update(&self, product: &Product) -> Result<bool, BackofficeError>;

    async fn delete(&self, id: Uuid) -> Result<bool, BackofficeError>;
}
