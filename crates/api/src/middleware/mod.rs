//! Request extractors for authentication and role enforcement.

pub mod auth;
pub mod rbac;
