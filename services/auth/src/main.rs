use anyhow::Context as _;
use sea_orm::Database;
use tracing::{info, warn};

use bistro_auth::config::AuthConfig;
use bistro_auth::infra::cache::{KvBackend, RedisKvStore};
use bistro_auth::infra::memory::MemoryKvStore;
use bistro_auth::router::build_router;
use bistro_auth::state::AppState;
use bistro_core::config::Config as _;
use bistro_core::middleware::with_observability;
use bistro_core::tracing::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing("bistro_auth=info,tower_http=info");

    let config = AuthConfig::from_env().context("load auth config")?;

    let db = Database::connect(&config.database_url)
        .await
        .context("connect to database")?;

    let kv = match config.redis_url.as_deref() {
        Some(url) => {
            let pool = deadpool_redis::Config::from_url(url)
                .create_pool(Some(deadpool_redis::Runtime::Tokio1))
                .context("create Redis pool")?;
            KvBackend::Redis(RedisKvStore { pool })
        }
        None => {
            warn!("REDIS_URL unset; OTP state is kept in process memory");
            KvBackend::Memory(MemoryKvStore::default())
        }
    };
    if config.otp_echo_code {
        warn!("OTP_ECHO_CODE enabled; codes are returned to callers");
    }

    let state = AppState {
        db,
        kv,
        jwt_secret: config.jwt_secret,
        otp_echo_code: config.otp_echo_code,
    };

    let router = with_observability(build_router(state));
    let addr = format!("0.0.0.0:{}", config.auth_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("bind {addr}"))?;

    info!("auth service listening on {addr}");
    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
