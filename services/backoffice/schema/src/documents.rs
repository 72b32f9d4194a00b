use sea_orm::entity::prelude::*;

/// Purchase or estimate bill. `(kind, number)` is unique.
///
/// `party`, `items` and `transport` are JSON snapshots taken at write time.
/// The amount columns are derived from the items and charge inputs.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "documents")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// `"purchase"` or `"estimate"`.
    pub kind: String,
    pub number: String,
    pub party: Option<Json>,
    pub items: Json,
    pub bill_date: Date,
    pub due_date: Option<Date>,
    pub billing_term: Option<String>,
    pub delivery_state: Option<String>,
    pub note: Option<String>,
    pub discount_percent: Option<Decimal>,
    pub discount_amount: Decimal,
    pub service_charge_percent: Option<Decimal>,
    pub service_charge_amount: Decimal,
    pub transport: Option<Json>,
    pub subtotal: Decimal,
    pub tax: Decimal,
    pub total_amount: Decimal,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
