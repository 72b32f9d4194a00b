use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use bistro_domain::user::UserRole;

/// Stored account, including the password hash.
#[derive(Debug, Clone)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub phone_number: String,
    pub password_hash: String,
    pub role: UserRole,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

/// Public projection of [`User`] returned by signup and login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub role: UserRole,
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            role: user.role,
        }
    }
}

/// The single live code for a phone number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpRecord {
    pub code: String,
    pub created_at: DateTime<Utc>,
}

/// A code is accepted for this long after issuance.
pub const OTP_LIFETIME_SECS: i64 = 15 * 60;

/// Sliding window for the issuance rate limit.
pub const OTP_WINDOW_SECS: i64 = 60 * 60;

/// Issuances allowed per phone inside [`OTP_WINDOW_SECS`].
pub const OTP_MAX_PER_WINDOW: usize = 3;

/// KV expiry for the code record. Longer than the lifetime so a late
/// verification still finds the record and reports it as expired.
pub const OTP_RECORD_KV_TTL_SECS: u64 = 30 * 60;

/// KV expiry for the attempt ledger.
pub const OTP_LEDGER_KV_TTL_SECS: u64 = OTP_WINDOW_SECS as u64;

pub const MIN_PASSWORD_LEN: usize = 6;

pub fn otp_record_key(phone: &str) -> String {
    format!("otp:code:{phone}")
}

pub fn otp_ledger_key(phone: &str) -> String {
    format!("otp:ledger:{phone}")
}
