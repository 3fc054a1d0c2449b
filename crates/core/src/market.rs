//! Closed status and type enums for the market subsystem.
//!
//! These are normalized once at the API boundary (serde parses the
//! lowercase wire form); everything past the boundary works with the
//! enum, never with raw strings. The database stores the lowercase
//! `as_str` form in TEXT columns guarded by CHECK constraints.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Market state of one pig's listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    Available,
    Reserved,
    Sold,
    /// Manually unlisted by staff. Terminal, like `Sold`; a pig is
    /// relisted via a new row, never by reactivating an old one.
    Removed,
}

impl ListingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ListingStatus::Available => "available",
            ListingStatus::Reserved => "reserved",
            ListingStatus::Sold => "sold",
            ListingStatus::Removed => "removed",
        }
    }

    /// Whether a listing in this state may still be flipped to `Sold`.
    pub fn is_sellable(self) -> bool {
        matches!(self, ListingStatus::Available | ListingStatus::Reserved)
    }
}

impl fmt::Display for ListingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "available" => Ok(ListingStatus::Available),
            "reserved" => Ok(ListingStatus::Reserved),
            "sold" => Ok(ListingStatus::Sold),
            "removed" => Ok(ListingStatus::Removed),
            other => Err(format!("unknown listing status: {other}")),
        }
    }
}

/// What kind of sale a listing is offered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaleType {
    /// Market-weight pigs.
    Market,
    /// Lechon-size pigs.
    Lechon,
}

impl SaleType {
    pub fn as_str(self) -> &'static str {
        match self {
            SaleType::Market => "market",
            SaleType::Lechon => "lechon",
        }
    }
}

impl fmt::Display for SaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SaleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "market" => Ok(SaleType::Market),
            "lechon" => Ok(SaleType::Lechon),
            other => Err(format!("unknown sale type: {other}")),
        }
    }
}

/// Lifecycle state of a booking. `Pending` is the only state that
/// accepts a decision; `Approved` additionally gates sale creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Pending,
    Approved,
    Declined,
}

impl BookingStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Approved => "approved",
            BookingStatus::Declined => "declined",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(BookingStatus::Pending),
            "approved" => Ok(BookingStatus::Approved),
            "declined" => Ok(BookingStatus::Declined),
            other => Err(format!("unknown booking status: {other}")),
        }
    }
}

/// What a client is booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingType {
    Pig,
    Lechon,
    Market,
}

impl BookingType {
    pub fn as_str(self) -> &'static str {
        match self {
            BookingType::Pig => "pig",
            BookingType::Lechon => "lechon",
            BookingType::Market => "market",
        }
    }
}

impl fmt::Display for BookingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pig" => Ok(BookingType::Pig),
            "lechon" => Ok(BookingType::Lechon),
            "market" => Ok(BookingType::Market),
            other => Err(format!(
                "type must be 'pig', 'lechon' or 'market', got '{other}'"
            )),
        }
    }
}

/// Staff decision on a pending booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Approved,
    Declined,
}

impl Decision {
    /// The booking status this decision transitions to.
    pub fn target_status(self) -> BookingStatus {
        match self {
            Decision::Approved => BookingStatus::Approved,
            Decision::Declined => BookingStatus::Declined,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_status_round_trip() {
        for status in [
            ListingStatus::Available,
            ListingStatus::Reserved,
            ListingStatus::Sold,
            ListingStatus::Removed,
        ] {
            assert_eq!(status.as_str().parse::<ListingStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_sellable_states() {
        assert!(ListingStatus::Available.is_sellable());
        assert!(ListingStatus::Reserved.is_sellable());
        assert!(!ListingStatus::Sold.is_sellable());
        assert!(!ListingStatus::Removed.is_sellable());
    }

    #[test]
    fn test_booking_type_normalizes_case() {
        assert_eq!("LECHON".parse::<BookingType>().unwrap(), BookingType::Lechon);
        assert_eq!("Pig".parse::<BookingType>().unwrap(), BookingType::Pig);
        assert!("piglet".parse::<BookingType>().is_err());
    }

    #[test]
    fn test_decision_targets() {
        assert_eq!(Decision::Approved.target_status(), BookingStatus::Approved);
        assert_eq!(Decision::Declined.target_status(), BookingStatus::Declined);
    }

    #[test]
    fn test_unknown_status_rejected() {
        assert!("active".parse::<BookingStatus>().is_err());
        assert!("".parse::<ListingStatus>().is_err());
    }
}
