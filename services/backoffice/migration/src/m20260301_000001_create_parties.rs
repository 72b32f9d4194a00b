use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Parties::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Parties::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Parties::Kind)
                            .string_len(16)
                            .not_null()
                            .default("Customer"),
                    )
                    .col(ColumnDef::new(Parties::Name).string().not_null())
                    .col(ColumnDef::new(Parties::PhoneNumber).string_len(10))
                    .col(ColumnDef::new(Parties::Email).string())
                    .col(
                        ColumnDef::new(Parties::Category)
                            .string_len(16)
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Parties::Gstin).string_len(15))
                    .col(
                        ColumnDef::new(Parties::BillType)
                            .string_len(16)
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(Parties::BillingTerm).string())
                    .col(ColumnDef::new(Parties::DateOfBirth).date())
                    .col(ColumnDef::new(Parties::BusinessName).string())
                    .col(ColumnDef::new(Parties::BillingAddress).text())
                    .col(ColumnDef::new(Parties::BillingState).string())
                    .col(ColumnDef::new(Parties::BillingPincode).string_len(10))
                    .col(ColumnDef::new(Parties::DeliveryAddress).text())
                    .col(ColumnDef::new(Parties::DeliveryState).string())
                    .col(ColumnDef::new(Parties::DeliveryPincode).string_len(10))
                    .col(
                        ColumnDef::new(Parties::WhatsappAlerts)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Parties::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Parties::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .table(Parties::Table)
                    .col(Parties::Kind)
                    .col(Parties::CreatedAt)
                    .name("idx_parties_kind_created_at")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Parties::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Parties {
    Table,
    Id,
    Kind,
    Name,
    PhoneNumber,
    Email,
    Category,
    Gstin,
    BillType,
    BillingTerm,
    DateOfBirth,
    BusinessName,
    BillingAddress,
    BillingState,
    BillingPincode,
    DeliveryAddress,
    DeliveryState,
    DeliveryPincode,
    WhatsappAlerts,
    CreatedAt,
    UpdatedAt,
}
