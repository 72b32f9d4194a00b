use chrono::{DateTime, Duration, TimeZone, Utc};

use bistro_auth::domain::password::verify_password;
use bistro_auth::domain::repository::KvStore;
use bistro_auth::domain::types::{OtpRecord, otp_record_key};
use bistro_auth::error::AuthServiceError;
use bistro_auth::infra::memory::MemoryKvStore;
use bistro_auth::usecase::otp::{SendOtpInput, SendOtpUseCase, VerifyOtpInput, VerifyOtpUseCase};
use bistro_auth::usecase::reset_password::{ResetPasswordInput, ResetPasswordUseCase};

use crate::helpers::{MockUserRepo, RecordingSms, TEST_PHONE, test_user};

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 16, 9, 0, 0).unwrap()
}

fn send_uc(kv: &MemoryKvStore, sms: &RecordingSms) -> SendOtpUseCase<MemoryKvStore, RecordingSms> {
    SendOtpUseCase {
        kv: kv.clone(),
        sms: sms.clone(),
    }
}

fn send_input() -> SendOtpInput {
    SendOtpInput {
        phone_number: TEST_PHONE.to_owned(),
    }
}

fn verify_input(otp: &str) -> VerifyOtpInput {
    VerifyOtpInput {
        phone_number: TEST_PHONE.to_owned(),
        otp: otp.to_owned(),
    }
}

// ── send ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_store_code_and_hand_it_to_sms() {
    let kv = MemoryKvStore::default();
    let sms = RecordingSms::default();

    let output = send_uc(&kv, &sms).execute_at(send_input(), t0()).await.unwrap();
    assert_eq!(output.code.len(), 6);

    let sent = sms.sent.lock().unwrap();
    assert_eq!(sent.as_slice(), &[(TEST_PHONE.to_owned(), output.code.clone())]);

    let raw = kv.get(&otp_record_key(TEST_PHONE)).await.unwrap().unwrap();
    let record: OtpRecord = serde_json::from_str(&raw).unwrap();
    assert_eq!(record.code, output.code);
    assert_eq!(record.created_at, t0());
}

#[tokio::test]
async fn should_rate_limit_fourth_request_within_an_hour() {
    let kv = MemoryKvStore::default();
    let sms = RecordingSms::default();
    let uc = send_uc(&kv, &sms);

    for minute in [0, 5, 10] {
        uc.execute_at(send_input(), t0() + Duration::minutes(minute))
            .await
            .unwrap();
    }
    let result = uc
        .execute_at(send_input(), t0() + Duration::minutes(59))
        .await;
    assert!(
        matches!(result, Err(AuthServiceError::OtpRateLimited)),
        "expected OtpRateLimited, got {result:?}"
    );
    assert_eq!(sms.sent.lock().unwrap().len(), 3);

    // The earliest issuance has left the window.
    uc.execute_at(send_input(), t0() + Duration::minutes(60))
        .await
        .unwrap();
}

#[tokio::test]
async fn should_overwrite_previous_code_on_reissue() {
    let kv = MemoryKvStore::default();
    let sms = RecordingSms::default();
    let uc = send_uc(&kv, &sms);

    uc.execute_at(send_input(), t0()).await.unwrap();
    let second = uc
        .execute_at(send_input(), t0() + Duration::minutes(1))
        .await
        .unwrap();

    let raw = kv.get(&otp_record_key(TEST_PHONE)).await.unwrap().unwrap();
    let record: OtpRecord = serde_json::from_str(&raw).unwrap();
    assert_eq!(record.code, second.code);
}

#[tokio::test]
async fn should_reject_malformed_phone() {
    let kv = MemoryKvStore::default();
    let sms = RecordingSms::default();
    let result = send_uc(&kv, &sms)
        .execute_at(
            SendOtpInput {
                phone_number: "98765".to_owned(),
            },
            t0(),
        )
        .await;
    assert!(matches!(result, Err(AuthServiceError::Validation(_))));
    assert!(sms.sent.lock().unwrap().is_empty());
}

// ── verify ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn should_accept_code_once() {
    let kv = MemoryKvStore::default();
    let sms = RecordingSms::default();
    let code = send_uc(&kv, &sms)
        .execute_at(send_input(), t0())
        .await
        .unwrap()
        .code;

    let verify = VerifyOtpUseCase { kv: kv.clone() };
    verify
        .execute_at(verify_input(&code), t0() + Duration::minutes(15))
        .await
        .unwrap();

    let again = verify
        .execute_at(verify_input(&code), t0() + Duration::minutes(15))
        .await;
    assert!(
        matches!(again, Err(AuthServiceError::OtpNotFound)),
        "expected OtpNotFound, got {again:?}"
    );
}

#[tokio::test]
async fn should_keep_record_after_mismatch() {
    let kv = MemoryKvStore::default();
    let sms = RecordingSms::default();
    let code = send_uc(&kv, &sms)
        .execute_at(send_input(), t0())
        .await
        .unwrap()
        .code;
    let wrong = if code == "123456" { "654321" } else { "123456" };

    let verify = VerifyOtpUseCase { kv: kv.clone() };
    let result = verify
        .execute_at(verify_input(wrong), t0() + Duration::minutes(1))
        .await;
    assert!(matches!(result, Err(AuthServiceError::OtpMismatch)));

    verify
        .execute_at(verify_input(&code), t0() + Duration::minutes(2))
        .await
        .unwrap();
}

#[tokio::test]
async fn should_expire_and_delete_after_fifteen_minutes() {
    let kv = MemoryKvStore::default();
    let sms = RecordingSms::default();
    let code = send_uc(&kv, &sms)
        .execute_at(send_input(), t0())
        .await
        .unwrap()
        .code;

    let verify = VerifyOtpUseCase { kv: kv.clone() };
    let late = t0() + Duration::minutes(15) + Duration::seconds(1);
    let result = verify.execute_at(verify_input(&code), late).await;
    assert!(matches!(result, Err(AuthServiceError::OtpExpired)));

    let after = verify.execute_at(verify_input(&code), late).await;
    assert!(matches!(after, Err(AuthServiceError::OtpNotFound)));
}

#[tokio::test]
async fn should_report_not_found_without_issuance() {
    let verify = VerifyOtpUseCase {
        kv: MemoryKvStore::default(),
    };
    let result = verify.execute_at(verify_input("123456"), t0()).await;
    assert!(matches!(result, Err(AuthServiceError::OtpNotFound)));
}

// ── reset password ───────────────────────────────────────────────────────────

#[tokio::test]
async fn should_reset_password_with_valid_code() {
    let kv = MemoryKvStore::default();
    let sms = RecordingSms::default();
    let code = send_uc(&kv, &sms)
        .execute_at(send_input(), t0())
        .await
        .unwrap()
        .code;

    let repo = MockUserRepo::new(vec![test_user()]);
    let handle = repo.users_handle();
    let uc = ResetPasswordUseCase {
        users: repo,
        kv: kv.clone(),
    };
    uc.execute_at(
        ResetPasswordInput {
            phone_number: TEST_PHONE.to_owned(),
            otp: code.clone(),
            new_password: "masala-dosa".to_owned(),
        },
        t0() + Duration::minutes(3),
    )
    .await
    .unwrap();

    let users = handle.lock().unwrap();
    assert!(verify_password("masala-dosa", &users[0].password_hash).unwrap());
}

#[tokio::test]
async fn should_not_consume_code_when_new_password_too_short() {
    let kv = MemoryKvStore::default();
    let sms = RecordingSms::default();
    let code = send_uc(&kv, &sms)
        .execute_at(send_input(), t0())
        .await
        .unwrap()
        .code;

    let uc = ResetPasswordUseCase {
        users: MockUserRepo::new(vec![test_user()]),
        kv: kv.clone(),
    };
    let result = uc
        .execute_at(
            ResetPasswordInput {
                phone_number: TEST_PHONE.to_owned(),
                otp: code.clone(),
                new_password: "abc".to_owned(),
            },
            t0() + Duration::minutes(1),
        )
        .await;
    assert!(matches!(result, Err(AuthServiceError::Validation(_))));
    assert!(kv.get(&otp_record_key(TEST_PHONE)).await.unwrap().is_some());
}

#[tokio::test]
async fn should_return_user_not_found_for_unregistered_phone() {
    let kv = MemoryKvStore::default();
    let sms = RecordingSms::default();
    let code = send_uc(&kv, &sms)
        .execute_at(send_input(), t0())
        .await
        .unwrap()
        .code;

    let uc = ResetPasswordUseCase {
        users: MockUserRepo::empty(),
        kv,
    };
    let result = uc
        .execute_at(
            ResetPasswordInput {
                phone_number: TEST_PHONE.to_owned(),
                otp: code,
                new_password: "masala-dosa".to_owned(),
            },
            t0() + Duration::minutes(1),
        )
        .await;
    assert!(matches!(result, Err(AuthServiceError::UserNotFound)));
}
