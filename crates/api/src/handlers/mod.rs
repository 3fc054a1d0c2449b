pub mod audit;
pub mod auth;
pub mod booking;
pub mod feeding_log;
pub mod health_record;
pub mod listing;
pub mod litter;
pub mod otp;
pub mod pig;
pub mod receipt;
pub mod sale;
pub mod supply;
pub mod user;
