use farrowgate_core::otp::OtpConfig;

use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT token configuration (secret, expiry duration).
    pub jwt: JwtConfig,
    /// OTP policy (code length, expiry, cooldown, attempt ceiling).
    pub otp: OtpConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                     | Default                  |
    /// |-----------------------------|--------------------------|
    /// | `HOST`                      | `0.0.0.0`                |
    /// | `PORT`                      | `3000`                   |
    /// | `CORS_ORIGINS`              | `http://localhost:5173`  |
    /// | `REQUEST_TIMEOUT_SECS`      | `30`                     |
    /// | `OTP_SECRET`                | -- (**required**)        |
    /// | `OTP_CODE_LENGTH`           | `6`                      |
    /// | `OTP_EXPIRY_MINS`           | `5`                      |
    /// | `OTP_RESEND_COOLDOWN_SECS`  | `60`                     |
    /// | `OTP_MAX_ATTEMPTS`          | `3`                      |
    ///
    /// # Panics
    ///
    /// Panics on missing required variables or unparseable values;
    /// misconfiguration should fail at startup, not at first request.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let jwt = JwtConfig::from_env();
        let otp = otp_config_from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt,
            otp,
        }
    }
}

/// Build the OTP policy from environment variables.
///
/// `OTP_SECRET` is required; the policy knobs fall back to the
/// defaults in [`OtpConfig::with_secret`].
fn otp_config_from_env() -> OtpConfig {
    let secret = std::env::var("OTP_SECRET").expect("OTP_SECRET must be set in the environment");
    assert!(!secret.is_empty(), "OTP_SECRET must not be empty");

    let mut otp = OtpConfig::with_secret(secret);

    if let Ok(v) = std::env::var("OTP_CODE_LENGTH") {
        otp.code_length = v.parse().expect("OTP_CODE_LENGTH must be a valid usize");
    }
    if let Ok(v) = std::env::var("OTP_EXPIRY_MINS") {
        otp.expiry_mins = v.parse().expect("OTP_EXPIRY_MINS must be a valid i64");
    }
    if let Ok(v) = std::env::var("OTP_RESEND_COOLDOWN_SECS") {
        otp.resend_cooldown_secs = v
            .parse()
            .expect("OTP_RESEND_COOLDOWN_SECS must be a valid i64");
    }
    if let Ok(v) = std::env::var("OTP_MAX_ATTEMPTS") {
        otp.max_attempts = v.parse().expect("OTP_MAX_ATTEMPTS must be a valid i32");
    }

    otp
}
