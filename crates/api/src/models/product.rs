//! Product domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use verdant_core::{ProductId, VendorId};

use super::vendor::Vendor;

/// Nutrition facts for a product, when the vendor provides them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// A catalog product owned by a vendor.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Unit price, non-negative.
    pub price: f64,
    /// Free-form category label ("Fruits", "Vegetables", "Herbs", ...).
    /// Not validated server-side; the UI filter is cosmetic.
    pub category: String,
    /// Image URLs. The UI requires at least one; the server does not.
    pub images: Vec<String>,
    /// Units in stock, non-negative.
    pub stock: i32,
    /// Set true at creation and never cleared by any operation.
    pub is_new: bool,
    /// Owning vendor.
    pub vendor_id: VendorId,
    /// Sale unit ("lb", "bunch", ...).
    pub unit: String,
    /// Optional nutrition facts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<Nutrition>,
    /// Region of origin.
    pub origin: String,
    /// Whether the product is certified organic.
    pub organic: bool,
    /// When the product was listed.
    pub created_at: DateTime<Utc>,
}

/// A product joined with its resolved vendor for the catalog listing.
///
/// `vendor` is `null` when the vendor reference dangles.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductWithVendor {
    #[serde(flatten)]
    pub product: Product,
    pub vendor: Option<Vendor>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product() -> Product {
        Product {
            id: ProductId::new(3),
            name: "Heirloom Tomatoes".to_string(),
            description: "Vine ripened".to_string(),
            price: 4.99,
            category: "Vegetables".to_string(),
            images: vec!["http://img/1".to_string()],
            stock: 20,
            is_new: true,
            vendor_id: VendorId::new(1),
            unit: "lb".to_string(),
            nutrition: None,
            origin: "Valley City".to_string(),
            organic: true,
            created_at: DateTime::from_timestamp(1_700_000_000, 0).expect("valid timestamp"),
        }
    }

    #[test]
    fn test_product_serializes_camel_case() {
        let json = serde_json::to_value(sample_product()).expect("serialize");
        assert_eq!(json["isNew"], true);
        assert_eq!(json["vendorId"], 1);
        // Absent nutrition is omitted, not null
        assert!(json.get("nutrition").is_none());
    }

    #[test]
    fn test_product_with_vendor_flattens() {
        let json = serde_json::to_value(ProductWithVendor {
            product: sample_product(),
            vendor: None,
        })
        .expect("serialize");
        assert_eq!(json["name"], "Heirloom Tomatoes");
        assert_eq!(json["vendor"], serde_json::Value::Null);
    }

    #[test]
    fn test_nutrition_roundtrip() {
        let n = Nutrition {
            calories: 18.0,
            protein: 0.9,
            carbs: 3.9,
            fat: 0.2,
        };
        let json = serde_json::to_string(&n).expect("serialize");
        let back: Nutrition = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, n);
    }
}
