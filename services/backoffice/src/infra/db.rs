use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use bistro_backoffice_schema::{documents, orders, parties, products, sales};
use bistro_domain::billing::DocumentKind;
use bistro_domain::date_range::DateRange;
use bistro_domain::pagination::PageRequest;
use bistro_domain::party::PartyKind;

use crate::domain::repository::{
    DocumentRepository, OrderRepository, PartyRepository, ProductRepository, SaleRepository,
};
use crate::domain::types::{Document, Order, Party, Product, Sale};
use crate::error::BackofficeError;

fn to_json<T: Serialize>(value: &T, what: &'static str) -> Result<serde_json::Value, BackofficeError> {
    Ok(serde_json::to_value(value).with_context(|| format!("encode {what}"))?)
}

fn from_json<T: DeserializeOwned>(
    value: serde_json::Value,
    what: &'static str,
) -> Result<T, BackofficeError> {
    Ok(serde_json::from_value(value).with_context(|| format!("decode stored {what}"))?)
}

/// Map unique violations on a number column to a conflict.
fn map_write_err(err: DbErr, what: &'static str) -> BackofficeError {
    if let Some(sea_orm::SqlErr::UniqueConstraintViolation(_)) = err.sql_err() {
        return BackofficeError::DocumentNumberTaken;
    }
    BackofficeError::Internal(anyhow::Error::new(err).context(what))
}

// ── Party repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbPartyRepository {
    pub db: DatabaseConnection,
}

impl PartyRepository for DbPartyRepository {
    async fn list(
        &self,
        kind: Option<PartyKind>,
        page: PageRequest,
    ) -> Result<Vec<Party>, BackofficeError> {
        let mut query = parties::Entity::find();
        if let Some(kind) = kind {
            query = query.filter(parties::Column::Kind.eq(kind.as_str()));
        }
        let models = query
            .order_by_desc(parties::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list parties")?;
        models.into_iter().map(party_from_model).collect()
    }

    async fn get(&self, id: Uuid) -> Result<Option<Party>, BackofficeError> {
        let model = parties::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find party by id")?;
        model.map(party_from_model).transpose()
    }

    async fn create(&self, party: &Party) -> Result<(), BackofficeError> {
        party_active_model(party)
            .insert(&self.db)
            .await
            .context("insert party")?;
        Ok(())
    }

    async fn update(&self, party: &Party) -> Result<bool, BackofficeError> {
        let result = parties::Entity::update_many()
            .set(party_active_model(party))
            .filter(parties::Column::Id.eq(party.id))
            .exec(&self.db)
            .await
            .context("update party")?;
        Ok(result.rows_affected > 0)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, BackofficeError> {
        let result = parties::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete party")?;
        Ok(result.rows_affected > 0)
    }
}

fn party_active_model(party: &Party) -> parties::ActiveModel {
    parties::ActiveModel {
        id: Set(party.id),
        kind: Set(party.kind.as_str().to_owned()),
        name: Set(party.name.clone()),
        phone_number: Set(party.phone_number.clone()),
        email: Set(party.email.clone()),
        category: Set(party.category.as_str().to_owned()),
        gstin: Set(party.gstin.clone()),
        bill_type: Set(party.bill_type.as_str().to_owned()),
        billing_term: Set(party.billing_term.clone()),
        date_of_birth: Set(party.date_of_birth),
        business_name: Set(party.business_name.clone()),
        billing_address: Set(party.billing_address.clone()),
        billing_state: Set(party.billing_state.clone()),
        billing_pincode: Set(party.billing_pincode.clone()),
        delivery_address: Set(party.delivery_address.clone()),
        delivery_state: Set(party.delivery_state.clone()),
        delivery_pincode: Set(party.delivery_pincode.clone()),
        whatsapp_alerts: Set(party.whatsapp_alerts),
        created_at: Set(party.created_at),
        updated_at: Set(party.updated_at),
    }
}

fn party_from_model(model: parties::Model) -> Result<Party, BackofficeError> {
    let id = model.id;
    Ok(Party {
        id,
        kind: model
            .kind
            .parse()
            .with_context(|| format!("party {id} has unknown kind"))?,
        name: model.name,
        phone_number: model.phone_number,
        email: model.email,
        category: model
            .category
            .parse()
            .with_context(|| format!("party {id} has unknown category"))?,
        gstin: model.gstin,
        bill_type: model
            .bill_type
            .parse()
            .with_context(|| format!("party {id} has unknown bill type"))?,
        billing_term: model.billing_term,
        date_of_birth: model.date_of_birth,
        business_name: model.business_name,
        billing_address: model.billing_address,
        billing_state: model.billing_state,
        billing_pincode: model.billing_pincode,
        delivery_address: model.delivery_address,
        delivery_state: model.delivery_state,
        delivery_pincode: model.delivery_pincode,
        whatsapp_alerts: model.whatsapp_alerts,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

// ── Document repository ──────────────────────────────────────────────────────

/// Value of the `documents.kind` column.
fn kind_key(kind: DocumentKind) -> &'static str {
    match kind {
        DocumentKind::Purchase => "purchase",
        DocumentKind::Estimate => "estimate",
        DocumentKind::Order => "order",
    }
}

fn kind_from_key(key: &str) -> Option<DocumentKind> {
    match key {
        "purchase" => Some(DocumentKind::Purchase),
        "estimate" => Some(DocumentKind::Estimate),
        _ => None,
    }
}

#[derive(Clone)]
pub struct DbDocumentRepository {
    pub db: DatabaseConnection,
}

impl DocumentRepository for DbDocumentRepository {
    async fn list(
        &self,
        kind: DocumentKind,
        range: Option<DateRange>,
        page: PageRequest,
    ) -> Result<Vec<Document>, BackofficeError> {
        let mut query =
            documents::Entity::find().filter(documents::Column::Kind.eq(kind_key(kind)));
        if let Some(range) = range {
            query = query.filter(documents::Column::BillDate.between(range.from, range.to));
        }
        let models = query
            .order_by_desc(documents::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list documents")?;
        models.into_iter().map(document_from_model).collect()
    }

    async fn get(
        &self,
        kind: DocumentKind,
        id: Uuid,
    ) -> Result<Option<Document>, BackofficeError> {
        let model = documents::Entity::find_by_id(id)
            .filter(documents::Column::Kind.eq(kind_key(kind)))
            .one(&self.db)
            .await
            .context("find document by id")?;
        model.map(document_from_model).transpose()
    }

    async fn create(&self, document: &Document) -> Result<(), BackofficeError> {
        document_active_model(document)?
            .insert(&self.db)
            .await
            .map_err(|e| map_write_err(e, "insert document"))?;
        Ok(())
    }

    async fn update(&self, document: &Document) -> Result<bool, BackofficeError> {
        let result = documents::Entity::update_many()
            .set(document_active_model(document)?)
            .filter(documents::Column::Id.eq(document.id))
            .filter(documents::Column::Kind.eq(kind_key(document.kind)))
            .exec(&self.db)
            .await
            .map_err(|e| map_write_err(e, "update document"))?;
        Ok(result.rows_affected > 0)
    }

    async fn delete(&self, kind: DocumentKind, id: Uuid) -> Result<bool, BackofficeError> {
        let result = documents::Entity::delete_many()
            .filter(documents::Column::Id.eq(id))
            .filter(documents::Column::Kind.eq(kind_key(kind)))
            .exec(&self.db)
            .await
            .context("delete document")?;
        Ok(result.rows_affected > 0)
    }

    async fn delete_many(
        &self,
        kind: DocumentKind,
        ids: &[Uuid],
    ) -> Result<u64, BackofficeError> {
        if ids.is_empty() {
            return Ok(0);
        }
        let result = documents::Entity::delete_many()
            .filter(documents::Column::Id.is_in(ids.iter().copied()))
            .filter(documents::Column::Kind.eq(kind_key(kind)))
            .exec(&self.db)
            .await
            .context("bulk delete documents")?;
        Ok(result.rows_affected)
    }
}

fn document_active_model(document: &Document) -> Result<documents::ActiveModel, BackofficeError> {
    let party = document
        .party
        .as_ref()
        .map(|p| to_json(p, "party snapshot"))
        .transpose()?;
    let transport = document
        .transport
        .as_ref()
        .map(|t| to_json(t, "transport"))
        .transpose()?;
    Ok(documents::ActiveModel {
        id: Set(document.id),
        kind: Set(kind_key(document.kind).to_owned()),
        number: Set(document.number.clone()),
        party: Set(party),
        items: Set(to_json(&document.items, "line items")?),
        bill_date: Set(document.bill_date),
        due_date: Set(document.due_date),
        billing_term: Set(document.billing_term.clone()),
        delivery_state: Set(document.delivery_state.clone()),
        note: Set(document.note.clone()),
        discount_percent: Set(document.discount_percent),
        discount_amount: Set(document.discount_amount),
        service_charge_percent: Set(document.service_charge_percent),
        service_charge_amount: Set(document.service_charge_amount),
        transport: Set(transport),
        subtotal: Set(document.subtotal),
        tax: Set(document.tax),
        total_amount: Set(document.total_amount),
        created_at: Set(document.created_at),
        updated_at: Set(document.updated_at),
    })
}

fn document_from_model(model: documents::Model) -> Result<Document, BackofficeError> {
    let kind = kind_from_key(&model.kind)
        .with_context(|| format!("document {} has unknown kind {:?}", model.id, model.kind))?;
    Ok(Document {
        id: model.id,
        kind,
        number: model.number,
        party: model
            .party
            .map(|p| from_json(p, "party snapshot"))
            .transpose()?,
        items: from_json(model.items, "line items")?,
        bill_date: model.bill_date,
        due_date: model.due_date,
        billing_term: model.billing_term,
        delivery_state: model.delivery_state,
        note: model.note,
        discount_percent: model.discount_percent,
        discount_amount: model.discount_amount,
        service_charge_percent: model.service_charge_percent,
        service_charge_amount: model.service_charge_amount,
        transport: model
            .transport
            .map(|t| from_json(t, "transport"))
            .transpose()?,
        subtotal: model.subtotal,
        tax: model.tax,
        total_amount: model.total_amount,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

// ── Sale repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbSaleRepository {
    pub db: DatabaseConnection,
}

impl SaleRepository for DbSaleRepository {
    async fn list(
        &self,
        range: Option<DateRange>,
        page: PageRequest,
    ) -> Result<Vec<Sale>, BackofficeError> {
        let mut query = sales::Entity::find();
        if let Some(range) = range {
            query = query.filter(sales::Column::BillDate.between(range.from, range.to));
        }
        let models = query
            .order_by_desc(sales::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list sales")?;
        Ok(models.into_iter().map(sale_from_model).collect())
    }

    async fn get(&self, id: Uuid) -> Result<Option<Sale>, BackofficeError> {
        let model = sales::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find sale by id")?;
        Ok(model.map(sale_from_model))
    }

    async fn create(&self, sale: &Sale) -> Result<(), BackofficeError> {
        sale_active_model(sale)
            .insert(&self.db)
            .await
            .map_err(|e| map_write_err(e, "insert sale"))?;
        Ok(())
    }

    async fn update(&self, sale: &Sale) -> Result<bool, BackofficeError> {
        let result = sales::Entity::update_many()
            .set(sale_active_model(sale))
            .filter(sales::Column::Id.eq(sale.id))
            .exec(&self.db)
            .await
            .map_err(|e| map_write_err(e, "update sale"))?;
        Ok(result.rows_affected > 0)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, BackofficeError> {
        let result = sales::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete sale")?;
        Ok(result.rows_affected > 0)
    }
}

fn sale_active_model(sale: &Sale) -> sales::ActiveModel {
    sales::ActiveModel {
        id: Set(sale.id),
        sale_no: Set(sale.sale_no.clone()),
        bill_date: Set(sale.bill_date),
        due_date: Set(sale.due_date),
        billing_term: Set(sale.billing_term.clone()),
        total: Set(sale.total),
        gstin: Set(sale.gstin.clone()),
        delivery_state: Set(sale.delivery_state.clone()),
        created_at: Set(sale.created_at),
        updated_at: Set(sale.updated_at),
    }
}

fn sale_from_model(model: sales::Model) -> Sale {
    Sale {
        id: model.id,
        sale_no: model.sale_no,
        bill_date: model.bill_date,
        due_date: model.due_date,
        billing_term: model.billing_term,
        total: model.total,
        gstin: model.gstin,
        delivery_state: model.delivery_state,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Order repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbOrderRepository {
    pub db: DatabaseConnection,
}

impl OrderRepository for DbOrderRepository {
    async fn list(&self, page: PageRequest) -> Result<Vec<Order>, BackofficeError> {
        let models = orders::Entity::find()
            .order_by_desc(orders::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list orders")?;
        models.into_iter().map(order_from_model).collect()
    }

    async fn get(&self, id: Uuid) -> Result<Option<Order>, BackofficeError> {
        let model = orders::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find order by id")?;
        model.map(order_from_model).transpose()
    }

    async fn create(&self, order: &Order) -> Result<(), BackofficeError> {
        order_active_model(order)?
            .insert(&self.db)
            .await
            .context("insert order")?;
        Ok(())
    }

    async fn update(&self, order: &Order) -> Result<bool, BackofficeError> {
        let result = orders::Entity::update_many()
            .set(order_active_model(order)?)
            .filter(orders::Column::Id.eq(order.id))
            .exec(&self.db)
            .await
            .context("update order")?;
        Ok(result.rows_affected > 0)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, BackofficeError> {
        let result = orders::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete order")?;
        Ok(result.rows_affected > 0)
    }
}

fn order_active_model(order: &Order) -> Result<orders::ActiveModel, BackofficeError> {
    Ok(orders::ActiveModel {
        id: Set(order.id),
        customer_name: Set(order.customer_name.clone()),
        items: Set(to_json(&order.items, "line items")?),
        total_amount: Set(order.total_amount),
        status: Set(order.status.as_str().to_owned()),
        created_at: Set(order.created_at),
        updated_at: Set(order.updated_at),
    })
}

fn order_from_model(model: orders::Model) -> Result<Order, BackofficeError> {
    let id = model.id;
    Ok(Order {
        id,
        customer_name: model.customer_name,
        items: from_json(model.items, "line items")?,
        total_amount: model.total_amount,
        status: model
            .status
            .parse()
            .with_context(|| format!("order {id} has unknown status"))?,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}

// ── Product repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbProductRepository {
    pub db: DatabaseConnection,
}

impl ProductRepository for DbProductRepository {
    async fn list(&self, page: PageRequest) -> Result<Vec<Product>, BackofficeError> {
        let models = products::Entity::find()
            .order_by_desc(products::Column::CreatedAt)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list products")?;
        models.into_iter().map(product_from_model).collect()
    }

    async fn get(&self, id: Uuid) -> Result<Option<Product>, BackofficeError> {
        let model = products::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find product by id")?;
        model.map(product_from_model).transpose()
    }

    async fn create(&self, product: &Product) -> Result<(), BackofficeError> {
        product_active_model(product)
            .insert(&self.db)
            .await
            .context("insert product")?;
        Ok(())
    }

    async fn update(&self, product: &Product) -> Result<bool, BackofficeError> {
        let result = products::Entity::update_many()
            .set(product_active_model(product))
            .filter(products::Column::Id.eq(product.id))
            .exec(&self.db)
            .await
            .context("update product")?;
        Ok(result.rows_affected > 0)
    }

    async fn delete(&self, id: Uuid) -> Result<bool, BackofficeError> {
        let result = products::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete product")?;
        Ok(result.rows_affected > 0)
    }
}

fn product_active_model(product: &Product) -> products::ActiveModel {
    products::ActiveModel {
        id: Set(product.id),
        item_name: Set(product.item_name.clone()),
        sell_price: Set(product.sell_price),
        product_type: Set(product.product_type.as_str().to_owned()),
        primary_unit: Set(product.primary_unit.clone()),
        custom_unit: Set(product.custom_unit.clone()),
        gst_enabled: Set(product.gst_enabled),
        gst_amount: Set(product.gst_amount),
        total_price: Set(product.total_price),
        created_at: Set(product.created_at),
        updated_at: Set(product.updated_at),
    }
}

fn product_from_model(model: products::Model) -> Result<Product, BackofficeError> {
    let id = model.id;
    Ok(Product {
        id,
        item_name: model.item_name,
        sell_price: model.sell_price,
        product_type: model
            .product_type
            .parse()
            .with_context(|| format!("product {id} has unknown type"))?,
        primary_unit: model.primary_unit,
        custom_unit: model.custom_unit,
        gst_enabled: model.gst_enabled,
        gst_amount: model.gst_amount,
        total_price: model.total_price,
        created_at: model.created_at,
        updated_at: model.updated_at,
    })
}
