use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bistro_core::serde::{to_rfc3339_ms, trimmed_opt};
use bistro_domain::billing::{Adjustment, BillTotals, Charges, DocumentKind, LineItem};
use bistro_domain::order::OrderStatus;
use bistro_domain::party::{BillType, FoodCategory, PartyKind};
use bistro_domain::product::ProductType;

// ── Party ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Party {
    pub id: Uuid,
    pub kind: PartyKind,
    pub name: String,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub category: FoodCategory,
    pub gstin: Option<String>,
    pub bill_type: BillType,
    pub billing_term: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub business_name: Option<String>,
    pub billing_address: Option<String>,
    pub billing_state: Option<String>,
    pub billing_pincode: Option<String>,
    pub delivery_address: Option<String>,
    pub delivery_state: Option<String>,
    pub delivery_pincode: Option<String>,
    pub whatsapp_alerts: bool,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub updated_at: DateTime<Utc>,
}

/// Create / replace body for a party. Blank strings count as absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PartyInput {
    #[serde(deserialize_with = "trimmed_opt")]
    pub name: Option<String>,
    pub kind: PartyKind,
    #[serde(deserialize_with = "trimmed_opt")]
    pub phone_number: Option<String>,
    #[serde(deserialize_with = "trimmed_opt")]
    pub email: Option<String>,
    pub category: FoodCategory,
    #[serde(deserialize_with = "trimmed_opt")]
    pub gstin: Option<String>,
    pub bill_type: BillType,
    #[serde(deserialize_with = "trimmed_opt")]
    pub billing_term: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    #[serde(deserialize_with = "trimmed_opt")]
    pub business_name: Option<String>,
    #[serde(deserialize_with = "trimmed_opt")]
    pub billing_address: Option<String>,
    #[serde(deserialize_with = "trimmed_opt")]
    pub billing_state: Option<String>,
    #[serde(deserialize_with = "trimmed_opt")]
    pub billing_pincode: Option<String>,
    #[serde(deserialize_with = "trimmed_opt")]
    pub delivery_address: Option<String>,
    #[serde(deserialize_with = "trimmed_opt")]
    pub delivery_state: Option<String>,
    #[serde(deserialize_with = "trimmed_opt")]
    pub delivery_pincode: Option<String>,
    /// Defaults to on.
    pub whatsapp_alerts: Option<bool>,
}

// ── Purchase / Estimate ──────────────────────────────────────────────────────

/// Party details copied into a bill at write time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartySnapshot {
    pub id: Option<Uuid>,
    pub name: String,
    pub gstin: Option<String>,
    pub phone_number: Option<String>,
    pub billing_address: Option<String>,
    pub state: Option<String>,
}

/// Shipping block on a purchase or estimate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transport {
    /// Added to the grand total after tax.
    pub labour_charges: Option<Decimal>,
    pub purchase_order_number: Option<String>,
    pub challan_number: Option<String>,
    pub e_way_bill_number: Option<String>,
    pub e_way_bill_date: Option<NaiveDate>,
    pub transporter_name: Option<String>,
    pub vehicle_number: Option<String>,
    pub transport_distance: Option<String>,
    pub delivery_location: Option<String>,
    pub delivery_date: Option<NaiveDate>,
    pub terms_conditions: Option<String>,
}

/// Stored purchase or estimate.
///
/// `number` and `kind` are rendered by the handlers under the resource's own
/// field name (`purchase_no` / `estimate_no`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub id: Uuid,
    #[serde(skip)]
    pub kind: DocumentKind,
    #[serde(skip)]
    pub number: String,
    pub party: Option<PartySnapshot>,
    pub items: Vec<LineItem>,
    pub bill_date: NaiveDate,
    pub due_date: Option<NaiveDate>,
    pub billing_term: Option<String>,
    pub delivery_state: Option<String>,
    pub note: Option<String>,
    pub discount_percent: Option<Decimal>,
    pub discount_amount: Decimal,
    pub service_charge_percent: Option<Decimal>,
    pub service_charge_amount: Decimal,
    pub transport: Option<Transport>,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total_amount: Decimal,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub updated_at: DateTime<Utc>,
}

impl Document {
    /// Charges as stored. The derived amounts reproduce the same totals because
    /// a stored percent still wins.
    pub fn charges(&self) -> Charges {
        Charges {
            discount: Adjustment::from_parts(self.discount_percent, Some(self.discount_amount)),
            service_charge: Adjustment::from_parts(
                self.service_charge_percent,
                Some(self.service_charge_amount),
            ),
            extra: labour_charges(self.transport.as_ref()),
        }
    }
}

/// Body shared by purchase and estimate writes; the number comes separately.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DocumentInput {
    pub party: Option<PartySnapshot>,
    pub items: Vec<LineItem>,
    pub bill_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    #[serde(deserialize_with = "trimmed_opt")]
    pub billing_term: Option<String>,
    #[serde(deserialize_with = "trimmed_opt")]
    pub delivery_state: Option<String>,
    #[serde(deserialize_with = "trimmed_opt")]
    pub note: Option<String>,
    pub discount_percent: Option<Decimal>,
    pub discount_amount: Option<Decimal>,
    pub service_charge_percent: Option<Decimal>,
    pub service_charge_amount: Option<Decimal>,
    pub transport: Option<Transport>,
}

impl DocumentInput {
    pub fn charges(&self) -> Charges {
        Charges {
            discount: Adjustment::from_parts(self.discount_percent, self.discount_amount),
            service_charge: Adjustment::from_parts(
                self.service_charge_percent,
                self.service_charge_amount,
            ),
            extra: labour_charges(self.transport.as_ref()),
        }
    }
}

fn labour_charges(transport: Option<&Transport>) -> Decimal {
    transport
        .and_then(|t| t.labour_charges)
        .unwrap_or_default()
}

/// Totals written alongside a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoredTotals {
    pub subtotal: Decimal,
    pub discount_amount: Decimal,
    pub service_charge_amount: Decimal,
    pub tax: Decimal,
    pub total_amount: Decimal,
}

impl From<&BillTotals> for StoredTotals {
    fn from(t: &BillTotals) -> Self {
        Self {
            subtotal: t.subtotal,
            discount_amount: t.discount,
            service_charge_amount: t.service_charge,
            tax: t.tax,
            total_amount: t.grand_total,
        }
    }
}

// ── Sale ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sale {
    pub id: Uuid,
    pub sale_no: String,
    pub bill_date: NaiveDate,
    pub due_date: NaiveDate,
    pub billing_term: String,
    pub total: Decimal,
    pub gstin: String,
    pub delivery_state: String,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub updated_at: DateTime<Utc>,
}

/// Sale body. Every field is required on create; `PATCH` applies whichever
/// fields are present.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SaleInput {
    #[serde(deserialize_with = "trimmed_opt")]
    pub sale_no: Option<String>,
    pub bill_date: Option<NaiveDate>,
    pub due_date: Option<NaiveDate>,
    #[serde(deserialize_with = "trimmed_opt")]
    pub billing_term: Option<String>,
    pub total: Option<Decimal>,
    #[serde(deserialize_with = "trimmed_opt")]
    pub gstin: Option<String>,
    #[serde(deserialize_with = "trimmed_opt")]
    pub delivery_state: Option<String>,
}

impl SaleInput {
    pub fn is_empty(&self) -> bool {
        self.sale_no.is_none()
            && self.bill_date.is_none()
            && self.due_date.is_none()
            && self.billing_term.is_none()
            && self.total.is_none()
            && self.gstin.is_none()
            && self.delivery_state.is_none()
    }
}

// ── Order ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Order {
    pub id: Uuid,
    pub customer_name: String,
    pub items: Vec<LineItem>,
    pub total_amount: Decimal,
    pub status: OrderStatus,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OrderInput {
    #[serde(deserialize_with = "trimmed_opt")]
    pub customer_name: Option<String>,
    pub items: Vec<LineItem>,
    /// New orders default to `New`; a replace without status keeps the old one.
    pub status: Option<OrderStatus>,
}

// ── Product ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Product {
    pub id: Uuid,
    pub item_name: String,
    pub sell_price: Decimal,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    pub primary_unit: Option<String>,
    pub custom_unit: Option<String>,
    pub gst_enabled: bool,
    pub gst_amount: Decimal,
    pub total_price: Decimal,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub created_at: DateTime<Utc>,
    #[serde(serialize_with = "to_rfc3339_ms")]
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProductInput {
    #[serde(deserialize_with = "trimmed_opt")]
    pub item_name: Option<String>,
    pub sell_price: Option<Decimal>,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    #[serde(deserialize_with = "trimmed_opt")]
    pub primary_unit: Option<String>,
    #[serde(deserialize_with = "trimmed_opt")]
    pub custom_unit: Option<String>,
    pub gst_enabled: bool,
}
