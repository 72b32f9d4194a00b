#![allow(async_fn_in_trait)]

use uuid::Uuid;

use crate::domain::types::User;
use crate::error::AuthServiceError;

/// Persistent account store.
pub trait UserRepository: Send + Sync {
    /// Match `identifier` against email, phone number or username.
    async fn find_by_identifier(&self, identifier: &str)
    -> Result<Option<User>, AuthServiceError>;

    async fn find_by_phone(&self, phone: &str) -> Result<Option<User>, AuthServiceError>;

    /// Insert a new account. A taken username, email or phone yields
    /// [`AuthServiceError::UserAlreadyExists`].
    async fn create(&self, user: &User) -> Result<(), AuthServiceError>;

    async fn update_password(&self, id: Uuid, password_hash: &str)
    -> Result<(), AuthServiceError>;
}

/// String key-value store with per-key expiry (Redis `SET EX` semantics).
pub trait KvStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, AuthServiceError>;

    async fn set_ex(&self, key: &str, value: &str, ttl_secs: u64)
    -> Result<(), AuthServiceError>;

    async fn del(&self, key: &str) -> Result<(), AuthServiceError>;
}

/// Outbound SMS delivery of one-time codes.
pub trait SmsPort: Send + Sync {
    async fn send_otp(&self, phone: &str, code: &str) -> Result<(), AuthServiceError>;
}
