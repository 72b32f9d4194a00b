use anyhow::Context as _;
use chrono::{DateTime, Utc};

use bistro_domain::validate::is_valid_phone;

use crate::domain::otp::{OtpCheck, admit_issue, check_code, generate_code};
use crate::domain::repository::{KvStore, SmsPort};
use crate::domain::types::{
    OTP_LEDGER_KV_TTL_SECS, OTP_RECORD_KV_TTL_SECS, OtpRecord, otp_ledger_key, otp_record_key,
};
use crate::error::AuthServiceError;

fn require_phone(phone: &str) -> Result<&str, AuthServiceError> {
    let phone = phone.trim();
    if !is_valid_phone(phone) {
        return Err(AuthServiceError::validation(
            "phone_number must be exactly 10 digits",
        ));
    }
    Ok(phone)
}

// ── SendOtp ──────────────────────────────────────────────────────────────────

pub struct SendOtpInput {
    pub phone_number: String,
}

#[derive(Debug)]
pub struct SendOtpOutput {
    pub code: String,
}

pub struct SendOtpUseCase<K: KvStore, S: SmsPort> {
    pub kv: K,
    pub sms: S,
}

impl<K: KvStore, S: SmsPort> SendOtpUseCase<K, S> {
    pub async fn execute(&self, input: SendOtpInput) -> Result<SendOtpOutput, AuthServiceError> {
        self.execute_at(input, Utc::now()).await
    }

    pub async fn execute_at(
        &self,
        input: SendOtpInput,
        now: DateTime<Utc>,
    ) -> Result<SendOtpOutput, AuthServiceError> {
        let phone = require_phone(&input.phone_number)?;

        // Read-modify-write without a lock: concurrent sends for one phone may
        // both be admitted.
        let ledger_key = otp_ledger_key(phone);
        let mut ledger: Vec<DateTime<Utc>> = match self.kv.get(&ledger_key).await? {
            Some(raw) => serde_json::from_str(&raw).context("decode otp ledger")?,
            None => Vec::new(),
        };
        if let Err(e) = admit_issue(&mut ledger, now) {
            tracing::warn!(attempts = ledger.len(), "otp rate limit hit");
            return Err(e);
        }
        let raw_ledger = serde_json::to_string(&ledger).context("encode otp ledger")?;
        self.kv
            .set_ex(&ledger_key, &raw_ledger, OTP_LEDGER_KV_TTL_SECS)
            .await?;

        let record = OtpRecord {
            code: generate_code(),
            created_at: now,
        };
        let raw_record = serde_json::to_string(&record).context("encode otp record")?;
        self.kv
            .set_ex(&otp_record_key(phone), &raw_record, OTP_RECORD_KV_TTL_SECS)
            .await?;

        self.sms.send_otp(phone, &record.code).await?;
        Ok(SendOtpOutput { code: record.code })
    }
}

// ── VerifyOtp ────────────────────────────────────────────────────────────────

pub struct VerifyOtpInput {
    pub phone_number: String,
    pub otp: String,
}

pub struct VerifyOtpUseCase<K: KvStore> {
    pub kv: K,
}

impl<K: KvStore> VerifyOtpUseCase<K> {
    pub async fn execute(&self, input: VerifyOtpInput) -> Result<(), AuthServiceError> {
        self.execute_at(input, Utc::now()).await
    }

    pub async fn execute_at(
        &self,
        input: VerifyOtpInput,
        now: DateTime<Utc>,
    ) -> Result<(), AuthServiceError> {
        let phone = require_phone(&input.phone_number)?;
        consume_otp(&self.kv, phone, input.otp.trim(), now).await
    }
}

/// Verify `code` for `phone` and delete the record on success or expiry.
pub(crate) async fn consume_otp<K: KvStore>(
    kv: &K,
    phone: &str,
    code: &str,
    now: DateTime<Utc>,
) -> Result<(), AuthServiceError> {
    if code.is_empty() {
        return Err(AuthServiceError::validation("otp is required"));
    }

    let key = otp_record_key(phone);
    let raw = kv.get(&key).await?.ok_or(AuthServiceError::OtpNotFound)?;
    let record: OtpRecord = serde_json::from_str(&raw).context("decode otp record")?;

    match check_code(&record, code, now) {
        OtpCheck::Accepted => {
            kv.del(&key).await?;
            Ok(())
        }
        OtpCheck::Expired => {
            kv.del(&key).await?;
            Err(AuthServiceError::OtpExpired)
        }
        OtpCheck::Mismatch => Err(AuthServiceError::OtpMismatch),
    }
}
