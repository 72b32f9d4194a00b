use sea_orm_migration::prelude::*;

#[tokio::main]
async fn main() {
    cli::run_cli(bistro_auth_migration::Migrator).await;
}
