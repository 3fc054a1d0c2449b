use std::sync::Arc;

use crate::config::ServerConfig;
use crate::email::EmailSender;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: farrowgate_db::DbPool,
    /// Server configuration (JWT, OTP policy, CORS).
    pub config: Arc<ServerConfig>,
    /// SMTP mailer. `None` when SMTP is not configured; OTP issuance
    /// then logs instead of sending, which keeps local development and
    /// tests working without a mail server.
    pub mailer: Option<Arc<EmailSender>>,
}
