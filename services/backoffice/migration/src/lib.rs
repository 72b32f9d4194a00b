pub use sea_orm_migration::prelude::*;

mod m20260301_000001_create_parties;
mod m20260301_000002_create_documents;
mod m20260301_000003_create_sales;
mod m20260301_000004_create_orders;
mod m20260301_000005_create_products;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260301_000001_create_parties::Migration),
            Box::new(m20260301_000002_create_documents::Migration),
            Box::new(m20260301_000003_create_sales::Migration),
            Box::new(m20260301_000004_create_orders::Migration),
            Box::new(m20260301_000005_create_products::Migration),
        ]
    }
}
