use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Documents::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Documents::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Documents::Kind).string_len(16).not_null())
                    .col(ColumnDef::new(Documents::Number).string().not_null())
                    .col(ColumnDef::new(Documents::Party).json_binary())
                    .col(ColumnDef::new(Documents::Items).json_binary().not_null())
                    .col(ColumnDef::new(Documents::BillDate).date().not_null())
                    .col(ColumnDef::new(Documents::DueDate).date())
                    .col(ColumnDef::new(Documents::BillingTerm).string())
                    .col(ColumnDef::new(Documents::DeliveryState).string())
                    .col(ColumnDef::new(Documents::Note).text())
                    .col(ColumnDef::new(Documents::DiscountPercent).decimal_len(5, 2))
                    .col(
                        ColumnDef::new(Documents::DiscountAmount)
                            .decimal_len(14, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Documents::ServiceChargePercent).decimal_len(5, 2))
                    .col(
                        ColumnDef::new(Documents::ServiceChargeAmount)
                            .decimal_len(14, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Documents::Transport).json_binary())
                    .col(
                        ColumnDef::new(Documents::Subtotal)
                            .decimal_len(14, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Documents::Tax).decimal_len(14, 2).not_null())
                    .col(
                        ColumnDef::new(Documents::TotalAmount)
                            .decimal_len(14, 2)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Documents::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Documents::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Documents::Table)
                    .col(Documents::Kind)
                    .col(Documents::Number)
                    .unique()
                    .name("uq_documents_kind_number")
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Documents::Table)
                    .col(Documents::Kind)
                    .col(Documents::BillDate)
                    .name("idx_documents_kind_bill_date")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Documents::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Documents {
    Table,
    Id,
    Kind,
    Number,
    Party,
    Items,
    BillDate,
    DueDate,
    BillingTerm,
    DeliveryState,
    Note,
    DiscountPercent,
    DiscountAmount,
    ServiceChargePercent,
    ServiceChargeAmount,
    Transport,
    Subtotal,
    Tax,
    TotalAmount,
    CreatedAt,
    UpdatedAt,
}
