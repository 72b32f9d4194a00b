use sea_orm::entity::prelude::*;

/// Customer or supplier profile.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "parties")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// `"Customer"` or `"Supplier"`.
    pub kind: String,
    pub name: String,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    /// `"VEG"`, `"NON-VEG"` or `""`.
    pub category: String,
    pub gstin: Option<String>,
    /// `"Online"`, `"AC"`, `"NonAC"`, `"Regular"` or `""`.
    pub bill_type: String,
    pub billing_term: Option<String>,
    pub date_of_birth: Option<Date>,
    pub business_name: Option<String>,
    pub billing_address: Option<String>,
    pub billing_state: Option<String>,
    pub billing_pincode: Option<String>,
    pub delivery_address: Option<String>,
    pub delivery_state: Option<String>,
    pub delivery_pincode: Option<String>,
    pub whatsapp_alerts: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
