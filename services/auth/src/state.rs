use sea_orm::DatabaseConnection;

use crate::infra::cache::KvBackend;
use crate::infra::db::DbUserRepository;
use crate::infra::sms::LogSmsSender;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub kv: KvBackend,
    pub jwt_secret: String,
    pub otp_echo_code: bool,
}

impl AppState {
    pub fn user_repo(&self) -> DbUserRepository {
        DbUserRepository {
            db: self.db.clone(),
        }
    }

    pub fn otp_store(&self) -> KvBackend {
        self.kv.clone()
    }

    pub fn sms(&self) -> LogSmsSender {
        LogSmsSender
    }
}
