use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// An attempt/resend budget was exhausted. `retry_after_secs` is the
    /// number of seconds until the caller may try again, when known.
    #[error("Rate limited: {message}")]
    RateLimited {
        message: String,
        retry_after_secs: Option<i64>,
    },

    /// An OTP code or verification token is past its deadline.
    #[error("Expired: {0}")]
    Expired(String),

    /// A submitted OTP code did not match the active record.
    #[error("Invalid code: {0}")]
    InvalidCode(String),

    /// A verification token is unknown or already consumed.
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
