//! Vendor domain types.

use chrono::{DateTime, Utc};
use serde::Serialize;

use verdant_core::{UserId, VendorId};

/// A vendor profile. At most one exists per user, enforced by a unique
/// index on the owning user reference.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Vendor {
    /// Unique vendor ID.
    pub id: VendorId,
    /// Display name of the vendor.
    pub name: String,
    /// Short description shown in the directory.
    pub description: String,
    /// Logo image URL.
    pub logo: String,
    /// Physical address.
    pub address: String,
    /// Owning user.
    pub user_id: UserId,
    /// Aggregate rating. New vendors start at 5.0.
    pub rating: f64,
    /// Whether the vendor has been verified. New vendors start unverified.
    pub is_verified: bool,
    /// When the profile was registered.
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vendor_serializes_camel_case() {
        let vendor = Vendor {
            id: VendorId::new(1),
            name: "Acme Greens".to_string(),
            description: "d".to_string(),
            logo: "http://x".to_string(),
            address: "1 Rd".to_string(),
            user_id: UserId::new(9),
            rating: 5.0,
            is_verified: false,
            created_at: DateTime::from_timestamp(1_700_000_000, 0).expect("valid timestamp"),
        };

        let json = serde_json::to_value(&vendor).expect("serialize");
        assert_eq!(json["userId"], 9);
        assert_eq!(json["isVerified"], false);
        assert_eq!(json["rating"], 5.0);
    }
}
