//! One-time-password code engine.
//!
//! Generates fixed-length numeric codes, hashes them with a keyed
//! HMAC-SHA256 so the database never holds raw codes, and verifies
//! submissions in constant time. Policy knobs (code length, expiry,
//! cooldown, attempt ceiling) live in [`OtpConfig`], which is built
//! once at startup and passed in explicitly -- nothing here reads
//! process state.

use hmac::{Hmac, Mac};
use rand::Rng;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Default OTP code length in digits.
const DEFAULT_CODE_LENGTH: usize = 6;
/// Default code lifetime in minutes.
const DEFAULT_EXPIRY_MINS: i64 = 5;
/// Default resend cooldown in seconds.
const DEFAULT_RESEND_COOLDOWN_SECS: i64 = 60;
/// Default maximum failed verification attempts per code.
const DEFAULT_MAX_ATTEMPTS: i32 = 3;
/// Redemption window for a minted email verification token, in minutes.
pub const TOKEN_TTL_MINS: i64 = 15;

/// Policy and key material for OTP issuance and verification.
#[derive(Debug, Clone)]
pub struct OtpConfig {
    /// Server-held secret keying the code hash. Never sent anywhere.
    pub secret: String,
    /// Number of digits in a generated code.
    pub code_length: usize,
    /// Code lifetime in minutes.
    pub expiry_mins: i64,
    /// Seconds a caller must wait before requesting another code.
    pub resend_cooldown_secs: i64,
    /// Failed verification attempts allowed per code.
    pub max_attempts: i32,
}

impl OtpConfig {
    /// Build a config with default policy around the given secret.
    pub fn with_secret(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            code_length: DEFAULT_CODE_LENGTH,
            expiry_mins: DEFAULT_EXPIRY_MINS,
            resend_cooldown_secs: DEFAULT_RESEND_COOLDOWN_SECS,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Generate a random numeric code of `length` digits (leading zeros
/// allowed, e.g. `"042319"`).
pub fn generate_code(length: usize) -> String {
    let mut rng = rand::rng();
    (0..length)
        .map(|_| char::from(b'0' + rng.random_range(0..10u8)))
        .collect()
}

/// Compute the keyed HMAC-SHA256 digest of a code, hex-encoded.
///
/// This is what gets persisted; the raw code is only ever held in
/// memory long enough to email it.
pub fn hash_code(secret: &str, code: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC accepts keys of any length");
    mac.update(code.as_bytes());
    let digest = mac.finalize().into_bytes();
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

/// Verify a submitted code against a stored hex digest in constant time.
pub fn verify_code(secret: &str, submitted: &str, stored_hex: &str) -> bool {
    let computed = hash_code(secret, submitted);
    constant_time_eq(computed.as_bytes(), stored_hex.as_bytes())
}

/// Check that a submitted code is exactly `length` ASCII digits.
///
/// Cheap rejection before any storage access.
pub fn is_well_formed(code: &str, length: usize) -> bool {
    code.len() == length && code.bytes().all(|b| b.is_ascii_digit())
}

/// Mint an opaque verification token (32 lowercase hex chars).
pub fn generate_token() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// Byte-wise comparison that does not short-circuit on the first
/// mismatch. Length mismatch returns false immediately, which is fine
/// here: digest length is public.
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_code_shape() {
        for _ in 0..20 {
            let code = generate_code(6);
            assert_eq!(code.len(), 6);
            assert!(code.bytes().all(|b| b.is_ascii_digit()));
        }
    }

    #[test]
    fn test_hash_is_stable_and_keyed() {
        let a = hash_code("secret-a", "123456");
        let b = hash_code("secret-a", "123456");
        assert_eq!(a, b, "same secret + code must hash identically");
        assert_eq!(a.len(), 64, "HMAC-SHA256 hex digest is 64 chars");

        let other_key = hash_code("secret-b", "123456");
        assert_ne!(a, other_key, "different secrets must diverge");

        let other_code = hash_code("secret-a", "123457");
        assert_ne!(a, other_code, "different codes must diverge");
    }

    #[test]
    fn test_verify_code() {
        let stored = hash_code("app-secret", "654321");
        assert!(verify_code("app-secret", "654321", &stored));
        assert!(!verify_code("app-secret", "654320", &stored));
        assert!(!verify_code("wrong-secret", "654321", &stored));
    }

    #[test]
    fn test_well_formed() {
        assert!(is_well_formed("123456", 6));
        assert!(is_well_formed("000000", 6));
        assert!(!is_well_formed("12345", 6));
        assert!(!is_well_formed("1234567", 6));
        assert!(!is_well_formed("12345a", 6));
        assert!(!is_well_formed("", 6));
    }

    #[test]
    fn test_token_shape() {
        let token = generate_token();
        assert_eq!(token.len(), 32);
        assert!(token.bytes().all(|b| b.is_ascii_hexdigit()));
        assert_ne!(token, generate_token());
    }
}
