//! Farrowgate domain core.
//!
//! Pure domain logic shared by the db and api crates: the error
//! taxonomy, id/timestamp aliases, role constants, the closed market
//! status enums, and the OTP code engine. No I/O lives here.

pub mod error;
pub mod market;
pub mod otp;
pub mod roles;
pub mod types;
