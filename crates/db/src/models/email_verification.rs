//! Email verification token model.

use farrowgate_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A single-use credential proving OTP success, from the
/// `email_verifications` table. Redeemed at most once.
#[derive(Debug, Clone, FromRow)]
pub struct EmailVerification {
    pub id: DbId,
    pub email: String,
    pub purpose: String,
    pub token: String,
    pub issued_at: Timestamp,
    pub expires_at: Timestamp,
    pub used: bool,
    pub used_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

/// Result of a redemption attempt. `Expired` does not consume the
/// token (not that an expired token is worth keeping).
#[derive(Debug)]
pub enum RedeemOutcome {
    Redeemed(EmailVerification),
    /// No row matches (email, purpose, token) with `used = false`.
    NotFound,
    Expired,
}
