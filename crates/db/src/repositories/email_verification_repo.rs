//! Repository for the `email_verifications` table.

use farrowgate_core::types::Timestamp;
use sqlx::PgPool;

use crate::models::email_verification::{EmailVerification, RedeemOutcome};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, email, purpose, token, issued_at, expires_at, used, used_at, created_at";

/// Provides verification-token minting and single-use redemption.
pub struct EmailVerificationRepo;

impl EmailVerificationRepo {
    /// Persist a freshly minted token.
    pub async fn create(
        pool: &PgPool,
        email: &str,
        purpose: &str,
        token: &str,
        issued_at: Timestamp,
        expires_at: Timestamp,
    ) -> Result<EmailVerification, sqlx::Error> {
        let query = format!(
            "INSERT INTO email_verifications (email, purpose, token, issued_at, expires_at, used)
             VALUES ($1, $2, $3, $4, $5, false)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, EmailVerification>(&query)
            .bind(email)
            .bind(purpose)
            .bind(token)
            .bind(issued_at)
            .bind(expires_at)
            .fetch_one(pool)
            .await
    }

    /// Consume a token exactly once.
    ///
    /// Locks the matching unused row `FOR UPDATE`, so two concurrent
    /// redemption attempts serialize and the loser sees `used = true`
    /// (reported as `NotFound`). An expired token is not consumed.
    pub async fn redeem(
        pool: &PgPool,
        email: &str,
        purpose: &str,
        token: &str,
    ) -> Result<RedeemOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "SELECT {COLUMNS} FROM email_verifications
             WHERE email = $1 AND purpose = $2 AND token = $3 AND NOT used
             FOR UPDATE"
        );
        let Some(row) = sqlx::query_as::<_, EmailVerification>(&query)
            .bind(email)
            .bind(purpose)
            .bind(token)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(RedeemOutcome::NotFound);
        };

        if row.expires_at < chrono::Utc::now() {
            return Ok(RedeemOutcome::Expired);
        }

        let query = format!(
            "UPDATE email_verifications SET used = true, used_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let consumed = sqlx::query_as::<_, EmailVerification>(&query)
            .bind(row.id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(RedeemOutcome::Redeemed(consumed))
    }
}
