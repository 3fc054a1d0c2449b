//! Route definitions for the `/auth` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::{auth, otp};
use crate::state::AppState;

/// Routes mounted at `/auth`. All public.
///
/// ```text
/// POST /login       -> login
/// POST /register    -> client self-registration (needs verification token)
/// POST /otp/start   -> issue a verification code
/// POST /otp/verify  -> verify a code, mint a verification token
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/register", post(auth::register_client))
        .route("/otp/start", post(otp::start))
        .route("/otp/verify", post(otp::verify))
}
