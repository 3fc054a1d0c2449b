//! Integration tests for OTP issuance records and verification tokens.
//!
//! Exercises `OtpRepo` and `EmailVerificationRepo` against a real
//! database:
//! - `start` keeps exactly one active record per (email, purpose)
//! - Attempt counter increments
//! - Token redemption consumes exactly once
//! - Expired tokens are reported without being consumed

use assert_matches::assert_matches;
use chrono::{Duration, Utc};
use farrowgate_core::otp;
use farrowgate_db::models::email_verification::RedeemOutcome;
use farrowgate_db::repositories::{EmailVerificationRepo, OtpRepo};
use sqlx::PgPool;

const EMAIL: &str = "client@farm.test";
const PURPOSE: &str = "registration";
const SECRET: &str = "test-otp-secret";

async fn start_code(pool: &PgPool, code: &str) -> farrowgate_db::models::email_otp::EmailOtp {
    let now = Utc::now();
    OtpRepo::start(
        pool,
        EMAIL,
        PURPOSE,
        &otp::hash_code(SECRET, code),
        now + Duration::minutes(5),
        now + Duration::seconds(60),
    )
    .await
    .unwrap()
}

// ---------------------------------------------------------------------------
// Test: start creates an active record with fresh counters
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_start_creates_active_record(pool: PgPool) {
    let created = start_code(&pool, "123456").await;
    assert_eq!(created.attempts, 0);
    assert!(!created.superseded);
    assert!(created.last_sent_at.is_some());

    let active = OtpRepo::find_active(&pool, EMAIL, PURPOSE)
        .await
        .unwrap()
        .expect("active record should exist");
    assert_eq!(active.id, created.id);
    assert!(otp::verify_code(SECRET, "123456", &active.hashed_code));
}

// ---------------------------------------------------------------------------
// Test: a new start supersedes the previous active record
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_start_supersedes_previous(pool: PgPool) {
    let first = start_code(&pool, "111111").await;
    let second = start_code(&pool, "222222").await;
    assert_ne!(first.id, second.id);

    let active = OtpRepo::find_active(&pool, EMAIL, PURPOSE)
        .await
        .unwrap()
        .expect("active record should exist");
    assert_eq!(active.id, second.id, "only the newest record is active");
    assert!(
        !otp::verify_code(SECRET, "111111", &active.hashed_code),
        "the superseded code must no longer verify against the active record"
    );

    let all = OtpRepo::list_for(&pool, EMAIL, PURPOSE).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all.iter().filter(|o| !o.superseded).count(), 1);
}

// ---------------------------------------------------------------------------
// Test: records for a different purpose are independent
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_purposes_are_independent(pool: PgPool) {
    start_code(&pool, "123456").await;

    let now = Utc::now();
    OtpRepo::start(
        &pool,
        EMAIL,
        "password_reset",
        &otp::hash_code(SECRET, "654321"),
        now + Duration::minutes(5),
        now + Duration::seconds(60),
    )
    .await
    .unwrap();

    let registration = OtpRepo::find_active(&pool, EMAIL, PURPOSE).await.unwrap();
    let reset = OtpRepo::find_active(&pool, EMAIL, "password_reset")
        .await
        .unwrap();
    assert!(registration.is_some());
    assert!(reset.is_some());
    assert!(!registration.unwrap().superseded);
    assert!(!reset.unwrap().superseded);
}

// ---------------------------------------------------------------------------
// Test: increment_attempts counts up
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_increment_attempts(pool: PgPool) {
    let created = start_code(&pool, "123456").await;

    OtpRepo::increment_attempts(&pool, created.id).await.unwrap();
    OtpRepo::increment_attempts(&pool, created.id).await.unwrap();

    let active = OtpRepo::find_active(&pool, EMAIL, PURPOSE)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(active.attempts, 2);
}

// ---------------------------------------------------------------------------
// Test: token redemption consumes exactly once
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_token_redeems_exactly_once(pool: PgPool) {
    let now = Utc::now();
    let token = otp::generate_token();
    EmailVerificationRepo::create(&pool, EMAIL, PURPOSE, &token, now, now + Duration::minutes(15))
        .await
        .unwrap();

    let outcome = EmailVerificationRepo::redeem(&pool, EMAIL, PURPOSE, &token)
        .await
        .unwrap();
    let redeemed = match outcome {
        RedeemOutcome::Redeemed(v) => v,
        other => panic!("expected Redeemed, got {other:?}"),
    };
    assert!(redeemed.used);
    assert!(redeemed.used_at.is_some());

    let again = EmailVerificationRepo::redeem(&pool, EMAIL, PURPOSE, &token)
        .await
        .unwrap();
    assert_matches!(
        again,
        RedeemOutcome::NotFound,
        "a consumed token must not redeem again"
    );
}

// ---------------------------------------------------------------------------
// Test: wrong email or token does not redeem
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_redeem_requires_matching_fields(pool: PgPool) {
    let now = Utc::now();
    let token = otp::generate_token();
    EmailVerificationRepo::create(&pool, EMAIL, PURPOSE, &token, now, now + Duration::minutes(15))
        .await
        .unwrap();

    let wrong_email = EmailVerificationRepo::redeem(&pool, "other@farm.test", PURPOSE, &token)
        .await
        .unwrap();
    assert_matches!(wrong_email, RedeemOutcome::NotFound);

    let wrong_token = EmailVerificationRepo::redeem(&pool, EMAIL, PURPOSE, "deadbeef")
        .await
        .unwrap();
    assert_matches!(wrong_token, RedeemOutcome::NotFound);

    // The real token is still unredeemed after the misses.
    let outcome = EmailVerificationRepo::redeem(&pool, EMAIL, PURPOSE, &token)
        .await
        .unwrap();
    assert_matches!(outcome, RedeemOutcome::Redeemed(_));
}

// ---------------------------------------------------------------------------
// Test: expired token reports Expired and is not consumed
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_expired_token_not_consumed(pool: PgPool) {
    let now = Utc::now();
    let token = otp::generate_token();
    EmailVerificationRepo::create(
        &pool,
        EMAIL,
        PURPOSE,
        &token,
        now - Duration::minutes(30),
        now - Duration::minutes(15),
    )
    .await
    .unwrap();

    let outcome = EmailVerificationRepo::redeem(&pool, EMAIL, PURPOSE, &token)
        .await
        .unwrap();
    assert_matches!(outcome, RedeemOutcome::Expired);

    // Still Expired (not NotFound): the row was not flipped to used.
    let again = EmailVerificationRepo::redeem(&pool, EMAIL, PURPOSE, &token)
        .await
        .unwrap();
    assert_matches!(again, RedeemOutcome::Expired);
}
