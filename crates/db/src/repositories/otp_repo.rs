//! Repository for the `email_otps` table.

use farrowgate_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::email_otp::EmailOtp;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, email, purpose, hashed_code, expires_at, attempts, resend_after, \
    superseded, last_sent_at, created_at, updated_at";

/// Provides OTP issuance-record operations.
pub struct OtpRepo;

impl OtpRepo {
    /// The single active (non-superseded) record for (email, purpose).
    ///
    /// Ordered newest-first defensively; the supersede-then-insert
    /// transaction in [`OtpRepo::start`] keeps at most one active row,
    /// so the ordering should never matter in practice.
    pub async fn find_active(
        pool: &PgPool,
        email: &str,
        purpose: &str,
    ) -> Result<Option<EmailOtp>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM email_otps
             WHERE email = $1 AND purpose = $2 AND NOT superseded
             ORDER BY id DESC
             LIMIT 1"
        );
        sqlx::query_as::<_, EmailOtp>(&query)
            .bind(email)
            .bind(purpose)
            .fetch_optional(pool)
            .await
    }

    /// Record a new issuance: supersede ALL currently-active rows for
    /// (email, purpose) and insert the new record, as one transaction.
    ///
    /// Running both statements in one transaction guarantees exactly
    /// one active code per (email, purpose) even under concurrent
    /// start calls.
    pub async fn start(
        pool: &PgPool,
        email: &str,
        purpose: &str,
        hashed_code: &str,
        expires_at: Timestamp,
        resend_after: Timestamp,
    ) -> Result<EmailOtp, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query(
            "UPDATE email_otps SET superseded = true, updated_at = now()
             WHERE email = $1 AND purpose = $2 AND NOT superseded",
        )
        .bind(email)
        .bind(purpose)
        .execute(&mut *tx)
        .await?;

        let query = format!(
            "INSERT INTO email_otps
                (email, purpose, hashed_code, expires_at, attempts, resend_after, superseded, last_sent_at)
             VALUES ($1, $2, $3, $4, 0, $5, false, now())
             RETURNING {COLUMNS}"
        );
        let otp = sqlx::query_as::<_, EmailOtp>(&query)
            .bind(email)
            .bind(purpose)
            .bind(hashed_code)
            .bind(expires_at)
            .bind(resend_after)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(otp)
    }

    /// Increment the failed-attempt counter on a record.
    pub async fn increment_attempts(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query(
            "UPDATE email_otps SET attempts = attempts + 1, updated_at = now() WHERE id = $1",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// All rows for (email, purpose), newest first. Test support and
    /// admin diagnostics.
    pub async fn list_for(
        pool: &PgPool,
        email: &str,
        purpose: &str,
    ) -> Result<Vec<EmailOtp>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM email_otps
             WHERE email = $1 AND purpose = $2
             ORDER BY id DESC"
        );
        sqlx::query_as::<_, EmailOtp>(&query)
            .bind(email)
            .bind(purpose)
            .fetch_all(pool)
            .await
    }
}
