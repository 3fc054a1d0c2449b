//! Booking entity model and DTOs.

use chrono::NaiveDate;
use farrowgate_core::market::{BookingStatus, BookingType, Decision};
use farrowgate_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full booking row from the `bookings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Booking {
    pub id: DbId,
    pub client_id: DbId,
    pub booking_type: String,
    pub item_details: Option<String>,
    pub status: String,
    pub booking_date: NaiveDate,
    pub approved_by: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Booking plus its linked pig ids, as returned to API callers.
#[derive(Debug, Clone, Serialize)]
pub struct BookingWithPigs {
    #[serde(flatten)]
    pub booking: Booking,
    pub pig_ids: Vec<DbId>,
}

/// DTO for a client creating a booking. Client id and status are
/// forced server-side; they never come from the request body.
#[derive(Debug, Deserialize)]
pub struct CreateBooking {
    pub booking_type: BookingType,
    pub item_details: Option<String>,
    pub booking_date: NaiveDate,
    pub pig_ids: Vec<DbId>,
}

/// DTO for editing non-status booking fields. Status, approver, and
/// approval timestamps can only change through the decision endpoint.
#[derive(Debug, Deserialize)]
pub struct UpdateBooking {
    pub booking_type: Option<BookingType>,
    pub item_details: Option<String>,
    pub booking_date: Option<NaiveDate>,
    /// Captured only so the API layer can reject the attempt with a
    /// conflict; the repository never writes these.
    #[serde(default)]
    pub status: Option<serde_json::Value>,
    #[serde(default)]
    pub approved_by: Option<serde_json::Value>,
}

/// Request body for the booking decision endpoint.
#[derive(Debug, Deserialize)]
pub struct BookingDecision {
    pub decision: Decision,
}

/// Query filters for listing bookings.
#[derive(Debug, Default, Deserialize)]
pub struct BookingQuery {
    pub status: Option<BookingStatus>,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}
