pub mod audit_event;
pub mod booking;
pub mod email_otp;
pub mod email_verification;
pub mod feeding_log;
pub mod health_record;
pub mod listing;
pub mod litter;
pub mod pig;
pub mod receipt;
pub mod sale;
pub mod supply;
pub mod user;
