//! OTP issuance and verification rules.
//!
//! Pure functions over the stored ledger and record; the use cases load and
//! persist them through [`KvStore`](super::repository::KvStore).

use chrono::{DateTime, Duration, Utc};
use rand::RngExt;

use crate::domain::types::{OTP_LIFETIME_SECS, OTP_MAX_PER_WINDOW, OTP_WINDOW_SECS, OtpRecord};
use crate::error::AuthServiceError;

/// Record an issuance at `now` if the phone is under the limit.
///
/// Timestamps older than the window are dropped first. A rejected request
/// leaves the ledger pruned but does not add `now`.
pub fn admit_issue(
    ledger: &mut Vec<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Result<(), AuthServiceError> {
    let window = Duration::seconds(OTP_WINDOW_SECS);
    ledger.retain(|t| now - *t < window);
    if ledger.len() >= OTP_MAX_PER_WINDOW {
        return Err(AuthServiceError::OtpRateLimited);
    }
    ledger.push(now);
    Ok(())
}

/// Outcome of comparing a submitted code against the stored record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OtpCheck {
    /// Codes match inside the lifetime; consume the record.
    Accepted,
    /// Lifetime exceeded; delete the record.
    Expired,
    /// Wrong code; the record stays.
    Mismatch,
}

pub fn check_code(record: &OtpRecord, submitted: &str, now: DateTime<Utc>) -> OtpCheck {
    if now - record.created_at > Duration::seconds(OTP_LIFETIME_SECS) {
        OtpCheck::Expired
    } else if record.code != submitted {
        OtpCheck::Mismatch
    } else {
        OtpCheck::Accepted
    }
}

/// Six-digit numeric code without a leading zero.
pub fn generate_code() -> String {
    rand::rng().random_range(100_000..=999_999u32).to_string()
}
