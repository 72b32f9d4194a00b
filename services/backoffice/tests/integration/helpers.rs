use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use bistro_backoffice::domain::repository::{
    DocumentRepository, OrderRepository, PartyRepository, ProductRepository, SaleRepository,
};
use bistro_backoffice::domain::types::{Document, Order, Party, Product, Sale};
use bistro_backoffice::error::BackofficeError;
use bistro_domain::billing::{DocumentKind, LineItem};
use bistro_domain::date_range::DateRange;
use bistro_domain::pagination::PageRequest;
use bistro_domain::party::PartyKind;

/// Newest first, then one page.
fn page_of<T: Clone>(mut rows: Vec<T>, page: PageRequest) -> Vec<T> {
    rows.reverse();
    rows.into_iter()
        .skip(page.offset() as usize)
        .take(page.limit() as usize)
        .collect()
}

fn in_range(range: Option<DateRange>, date: NaiveDate) -> bool {
    range.is_none_or(|r| r.contains(date))
}

// ── MockPartyRepo ────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockPartyRepo {
    pub parties: Arc<Mutex<Vec<Party>>>,
}

impl PartyRepository for MockPartyRepo {
    async fn list(
        &self,
        kind: Option<PartyKind>,
        page: PageRequest,
    ) -> Result<Vec<Party>, BackofficeError> {
        let rows = self
            .parties
            .lock()
            .unwrap()
            .iter()
            .filter(|p| kind.is_none_or(|k| p.kind == k))
            .cloned()
            .collect();
        Ok(page_of(rows, page))
    }

    async fn get(&self, id: Uuid) -> Result<Option<Party>, BackofficeError> {
        Ok(self
            .parties
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn create(&self, party: &Party) -> Result<(), BackofficeError> {
        self.parties.lock().unwrap().push(party.clone());
        Ok(())
    }

    async fn update(&self, party: &Party) -> Result<bool, BackofficeError> {
        let mut parties = self.parties.lock().unwrap();
        match parties.iter_mut().find(|p| p.id == party.id) {
            Some(slot) => {
                *slot = party.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, BackofficeError> {
        let mut parties = self.parties.lock().unwrap();
        let before = parties.len();
        parties.retain(|p| p.id != id);
        Ok(parties.len() < before)
    }
}

// ── MockDocumentRepo ─────────────────────────────────────────────────────────

/// Enforces `(kind, number)` uniqueness like the table does.
#[derive(Clone, Default)]
pub struct MockDocumentRepo {
    pub documents: Arc<Mutex<Vec<Document>>>,
}

impl MockDocumentRepo {
    fn number_taken(documents: &[Document], candidate: &Document) -> bool {
        documents.iter().any(|d| {
            d.kind == candidate.kind && d.number == candidate.number && d.id != candidate.id
        })
    }
}

impl DocumentRepository for MockDocumentRepo {
    async fn list(
        &self,
        kind: DocumentKind,
        range: Option<DateRange>,
        page: PageRequest,
    ) -> Result<Vec<Document>, BackofficeError> {
        let rows = self
            .documents
            .lock()
            .unwrap()
            .iter()
            .filter(|d| d.kind == kind && in_range(range, d.bill_date))
            .cloned()
            .collect();
        Ok(page_of(rows, page))
    }

    async fn get(
        &self,
        kind: DocumentKind,
        id: Uuid,
    ) -> Result<Option<Document>, BackofficeError> {
        Ok(self
            .documents
            .lock()
            .unwrap()
            .iter()
            .find(|d| d.kind == kind && d.id == id)
            .cloned())
    }

    async fn create(&self, document: &Document) -> Result<(), BackofficeError> {
        let mut documents = self.documents.lock().unwrap();
        if Self::number_taken(&documents, document) {
            return Err(BackofficeError::DocumentNumberTaken);
        }
        documents.push(document.clone());
        Ok(())
    }

    async fn update(&self, document: &Document) -> Result<bool, BackofficeError> {
        let mut documents = self.documents.lock().unwrap();
        if Self::number_taken(&documents, document) {
            return Err(BackofficeError::DocumentNumberTaken);
        }
        match documents
            .iter_mut()
            .find(|d| d.kind == document.kind && d.id == document.id)
        {
            Some(slot) => {
                *slot = document.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, kind: DocumentKind, id: Uuid) -> Result<bool, BackofficeError> {
        let mut documents = self.documents.lock().unwrap();
        let before = documents.len();
        documents.retain(|d| !(d.kind == kind && d.id == id));
        Ok(documents.len() < before)
    }

    async fn delete_many(
        &self,
        kind: DocumentKind,
        ids: &[Uuid],
    ) -> Result<u64, BackofficeError> {
        let mut documents = self.documents.lock().unwrap();
        let before = documents.len();
        documents.retain(|d| !(d.kind == kind && ids.contains(&d.id)));
        Ok((before - documents.len()) as u64)
    }
}

// ── MockSaleRepo ─────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockSaleRepo {
    pub sales: Arc<Mutex<Vec<Sale>>>,
}

impl SaleRepository for MockSaleRepo {
    async fn list(
        &self,
        range: Option<DateRange>,
        page: PageRequest,
    ) -> Result<Vec<Sale>, BackofficeError> {
        let rows = self
            .sales
            .lock()
            .unwrap()
            .iter()
            .filter(|s| in_range(range, s.bill_date))
            .cloned()
            .collect();
        Ok(page_of(rows, page))
    }

    async fn get(&self, id: Uuid) -> Result<Option<Sale>, BackofficeError> {
        Ok(self
            .sales
            .lock()
            .unwrap()
            .iter()
            .find(|s| s.id == id)
            .cloned())
    }

    async fn create(&self, sale: &Sale) -> Result<(), BackofficeError> {
        let mut sales = self.sales.lock().unwrap();
        if sales.iter().any(|s| s.sale_no == sale.sale_no) {
            return Err(BackofficeError::DocumentNumberTaken);
        }
        sales.push(sale.clone());
        Ok(())
    }

    async fn update(&self, sale: &Sale) -> Result<bool, BackofficeError> {
        let mut sales = self.sales.lock().unwrap();
        if sales
            .iter()
            .any(|s| s.sale_no == sale.sale_no && s.id != sale.id)
        {
            return Err(BackofficeError::DocumentNumberTaken);
        }
        match sales.iter_mut().find(|s| s.id == sale.id) {
            Some(slot) => {
                *slot = sale.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, BackofficeError> {
        let mut sales = self.sales.lock().unwrap();
        let before = sales.len();
        sales.retain(|s| s.id != id);
        Ok(sales.len() < before)
    }
}

// ── MockOrderRepo ────────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockOrderRepo {
    pub orders: Arc<Mutex<Vec<Order>>>,
}

impl OrderRepository for MockOrderRepo {
    async fn list(&self, page: PageRequest) -> Result<Vec<Order>, BackofficeError> {
        Ok(page_of(self.orders.lock().unwrap().clone(), page))
    }

    async fn get(&self, id: Uuid) -> Result<Option<Order>, BackofficeError> {
        Ok(self
            .orders
            .lock()
            .unwrap()
            .iter()
            .find(|o| o.id == id)
            .cloned())
    }

    async fn create(&self, order: &Order) -> Result<(), BackofficeError> {
        self.orders.lock().unwrap().push(order.clone());
        Ok(())
    }

    async fn update(&self, order: &Order) -> Result<bool, BackofficeError> {
        let mut orders = self.orders.lock().unwrap();
        match orders.iter_mut().find(|o| o.id == order.id) {
            Some(slot) => {
                *slot = order.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, BackofficeError> {
        let mut orders = self.orders.lock().unwrap();
        let before = orders.len();
        orders.retain(|o| o.id != id);
        Ok(orders.len() < before)
    }
}

// ── MockProductRepo ──────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockProductRepo {
    pub products: Arc<Mutex<Vec<Product>>>,
}

impl ProductRepository for MockProductRepo {
    async fn list(&self, page: PageRequest) -> Result<Vec<Product>, BackofficeError> {
        Ok(page_of(self.products.lock().unwrap().clone(), page))
    }

    async fn get(&self, id: Uuid) -> Result<Option<Product>, BackofficeError> {
        Ok(self
            .products
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.id == id)
            .cloned())
    }

    async fn create(&self, product: &Product) -> Result<(), BackofficeError> {
        self.products.lock().unwrap().push(product.clone());
        Ok(())
    }

    async fn update(&self, product: &Product) -> Result<bool, BackofficeError> {
        let mut products = self.products.lock().unwrap();
        match products.iter_mut().find(|p| p.id == product.id) {
            Some(slot) => {
                *slot = product.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, BackofficeError> {
        let mut products = self.products.lock().unwrap();
        let before = products.len();
        products.retain(|p| p.id != id);
        Ok(products.len() < before)
    }
}

// ── Test fixture helpers ─────────────────────────────────────────────────────

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn item(name: &str, price: i64, quantity: u32) -> LineItem {
    LineItem {
        id: None,
        item_name: name.to_owned(),
        sell_price: Decimal::from(price),
        quantity,
    }
}

/// The two-line bill used across document tests: subtotal 250.
pub fn thali_items() -> Vec<LineItem> {
    vec![item("Veg thali", 100, 2), item("Sweet lassi", 50, 1)]
}
