use serde::Deserialize;

use bistro_core::config::Config;

/// Back-office service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct BackofficeConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// Secret the auth service signs access tokens with.
    pub jwt_secret: String,
    /// TCP port to listen on. Env var: `BACKOFFICE_PORT`.
    #[serde(default = "default_backoffice_port")]
    pub backoffice_port: u16,
}

fn default_backoffice_port() -> u16 {
    3113
}

impl Config for BackofficeConfig {}
