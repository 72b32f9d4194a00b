use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Sales::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Sales::Id).uuid().not_null().primary_key())
                    .col(ColumnDef::new(Sales::SaleNo).string().not_null().unique_key())
                    .col(ColumnDef::new(Sales::BillDate).date().not_null())
                    .col(ColumnDef::new(Sales::DueDate).date().not_null())
                    .col(ColumnDef::new(Sales::BillingTerm).string().not_null())
                    .col(ColumnDef::new(Sales::Total).decimal_len(14, 2).not_null())
                    .col(ColumnDef::new(Sales::Gstin).string_len(15).not_null())
                    .col(ColumnDef::new(Sales::DeliveryState).string().not_null())
                    .col(
                        ColumnDef::new(Sales::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Sales::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Sales::Table)
                    .col(Sales::BillDate)
                    .name("idx_sales_bill_date")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Sales::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Sales {
    Table,
    Id,
    SaleNo,
    BillDate,
    DueDate,
    BillingTerm,
    Total,
    Gstin,
    DeliveryState,
    CreatedAt,
    UpdatedAt,
}
