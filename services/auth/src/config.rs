use serde::Deserialize;

use bistro_core::config::Config;

/// Auth service configuration loaded from environment variables.
#[derive(Debug, Deserialize)]
pub struct AuthConfig {
    /// PostgreSQL connection URL.
    pub database_url: String,
    /// Redis connection URL. When unset, OTP state lives in process memory.
    #[serde(default)]
    pub redis_url: Option<String>,
    /// HMAC secret for signing access tokens.
    pub jwt_secret: String,
    /// TCP port to listen on. Env var: `AUTH_PORT`.
    #[serde(default = "default_auth_port")]
    pub auth_port: u16,
    /// Return the generated OTP in the `/send-otp` response. Development only.
    #[serde(default)]
    pub otp_echo_code: bool,
}

fn default_auth_port() -> u16 {
    3112
}

impl Config for AuthConfig {}
