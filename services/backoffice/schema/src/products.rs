use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub item_name: String,
    pub sell_price: Decimal,
    /// `"Veg"`, `"Non-Veg"` or `"Beverage"`.
    pub product_type: String,
    pub primary_unit: Option<String>,
    pub custom_unit: Option<String>,
    pub gst_enabled: bool,
    pub gst_amount: Decimal,
    pub total_price: Decimal,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
