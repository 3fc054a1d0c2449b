//! Well-known role name constants.
//!
//! These must match the CHECK constraint on `users.role` in
//! `20260810000001_create_users_table.sql`.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_SALES: &str = "sales";
pub const ROLE_PROCUREMENT: &str = "procurement";
pub const ROLE_CARETAKER: &str = "caretaker";
pub const ROLE_CLIENT: &str = "client";
