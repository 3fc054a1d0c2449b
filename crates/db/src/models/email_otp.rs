//! OTP issuance record model.

use farrowgate_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// One row per issuance attempt in the `email_otps` table.
///
/// For a given (email, purpose) at most one row has `superseded =
/// false`; issuing a new code supersedes all prior active rows in the
/// same transaction. `hashed_code` is a keyed HMAC-SHA256 hex digest,
/// never a raw code.
#[derive(Debug, Clone, FromRow)]
pub struct EmailOtp {
    pub id: DbId,
    pub email: String,
    pub purpose: String,
    pub hashed_code: String,
    pub expires_at: Timestamp,
    pub attempts: i32,
    pub resend_after: Option<Timestamp>,
    pub superseded: bool,
    pub last_sent_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
