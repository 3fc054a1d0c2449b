//! Listing entity model and DTOs.
//!
//! A listing tracks one pig's market state. Rows are never deleted;
//! they only move through the `ListingStatus` lifecycle. A partial
//! unique index (`uq_listings_active_pig`) guarantees at most one
//! available/reserved listing per pig.

use farrowgate_core::market::{ListingStatus, SaleType};
use farrowgate_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full listing row from the `listings` table.
///
/// `status` and `sale_type` hold the lowercase enum wire form; parse
/// with `ListingStatus::from_str` / `SaleType::from_str` when the enum
/// is needed.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Listing {
    pub id: DbId,
    pub pig_id: DbId,
    pub weight_kg: f64,
    pub sale_type: String,
    pub status: String,
    pub listed_by: Option<DbId>,
    pub notes: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a listing. Status always starts `available`.
#[derive(Debug, Deserialize)]
pub struct CreateListing {
    pub pig_id: DbId,
    pub weight_kg: f64,
    pub sale_type: SaleType,
    pub notes: Option<String>,
}

/// DTO for a staff listing update. Only non-`None` fields are applied.
#[derive(Debug, Deserialize)]
pub struct UpdateListing {
    pub weight_kg: Option<f64>,
    pub sale_type: Option<SaleType>,
    pub status: Option<ListingStatus>,
    pub notes: Option<String>,
}

/// Query filters for listing the listings.
#[derive(Debug, Default, Deserialize)]
pub struct ListingQuery {
    pub status: Option<ListingStatus>,
    pub sale_type: Option<SaleType>,
}
