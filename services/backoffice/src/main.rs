use anyhow::Context as _;
use sea_orm::Database;
use tracing::info;

use bistro_auth_types::identity::JwtSecret;
use bistro_backoffice::config::BackofficeConfig;
use bistro_backoffice::router::build_router;
use bistro_backoffice::state::AppState;
use bistro_core::config::Config as _;
use bistro_core::middleware::with_observability;
use bistro_core::tracing::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing("bistro_backoffice=info,tower_http=info");

    let config = BackofficeConfig::from_env().context("load backoffice config")?;

    let db = Database::connect(&config.database_url)
        .await
        .context("connect to database")?;

    let state = AppState {
        db,
        jwt_secret: JwtSecret::new(config.jwt_secret),
    };

    let router = with_observability(build_router(state));
    let addr = format!("0.0.0.0:{}", config.backoffice_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("bind {addr}"))?;

    info!("backoffice service listening on {addr}");
    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
