pub mod audit_repo;
pub mod booking_repo;
pub mod email_verification_repo;
pub mod feeding_log_repo;
pub mod health_record_repo;
pub mod listing_repo;
pub mod litter_repo;
pub mod otp_repo;
pub mod pig_repo;
pub mod receipt_repo;
pub mod sale_repo;
pub mod supply_repo;
pub mod user_repo;

pub use audit_repo::AuditRepo;
pub use booking_repo::BookingRepo;
pub use email_verification_repo::EmailVerificationRepo;
pub use feeding_log_repo::FeedingLogRepo;
pub use health_record_repo::HealthRecordRepo;
pub use listing_repo::ListingRepo;
pub use litter_repo::LitterRepo;
pub use otp_repo::OtpRepo;
pub use pig_repo::PigRepo;
pub use receipt_repo::ReceiptRepo;
pub use sale_repo::SaleRepo;
pub use supply_repo::SupplyRepo;
pub use user_repo::UserRepo;
