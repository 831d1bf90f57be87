//! Integration tests for the JSON wire format the UI consumes.

use serde_json::json;

use verdant_integration_tests::{sample_notification, sample_product};

use verdant_api::models::{CartItem, CartItemWithProduct, ProductWithVendor, Vendor};
use verdant_api::routes::cart::AddToCartRequest;
use verdant_api::routes::products::AddProductRequest;
use verdant_api::routes::vendors::RegisterRequest;
use verdant_core::{CartItemId, ProductId, UserId, VendorId};

// =============================================================================
// Response Shapes
// =============================================================================

#[test]
fn test_product_listing_shape() {
    let entry = ProductWithVendor {
        product: sample_product(3),
        vendor: Some(Vendor {
            id: VendorId::new(1),
            name: "Green Valley Farms".to_string(),
            description: "Family-owned farm".to_string(),
            logo: "https://img.verdant.market/gv.png".to_string(),
            address: "123 Farm Road, Valley City".to_string(),
            user_id: UserId::new(4),
            rating: 4.8,
            is_verified: true,
            created_at: verdant_integration_tests::ts(1_690_000_000),
        }),
    };

    let json = serde_json::to_value(&entry).expect("serialize");
    // Product fields are flattened beside the embedded vendor
    assert_eq!(json["name"], "Rainbow Chard");
    assert_eq!(json["isNew"], true);
    assert_eq!(json["vendor"]["name"], "Green Valley Farms");
    assert_eq!(json["vendor"]["isVerified"], true);
    assert_eq!(json["nutrition"]["calories"], 19.0);
}

#[test]
fn test_dangling_vendor_serializes_null() {
    let entry = ProductWithVendor {
        product: sample_product(3),
        vendor: None,
    };
    let json = serde_json::to_value(&entry).expect("serialize");
    assert_eq!(json["vendor"], serde_json::Value::Null);
}

#[test]
fn test_cart_row_shape() {
    let row = CartItemWithProduct {
        item: CartItem {
            id: CartItemId::new(8),
            user_id: UserId::new(7),
            product_id: ProductId::new(3),
            quantity: 2,
        },
        product: Some(sample_product(3)),
    };

    let json = serde_json::to_value(&row).expect("serialize");
    assert_eq!(json["productId"], 3);
    assert_eq!(json["quantity"], 2);
    assert_eq!(json["product"]["unit"], "bunch");
}

#[test]
fn test_notification_epoch_millis() {
    let json = serde_json::to_value(sample_notification(1, 7, 1_700_000_000)).expect("serialize");
    assert_eq!(json["createdAt"], 1_700_000_000_000_i64);
    assert_eq!(json["message"], "New product available: Rainbow Chard");
    assert_eq!(json["read"], false);
}

// =============================================================================
// Request Shapes
// =============================================================================

#[test]
fn test_register_request_deserializes() {
    let body: RegisterRequest = serde_json::from_value(json!({
        "name": "Acme Greens",
        "description": "d",
        "logo": "http://x",
        "address": "1 Rd"
    }))
    .expect("deserialize");
    assert_eq!(body.name, "Acme Greens");
}

#[test]
fn test_add_product_request_has_no_is_new_field() {
    // isNew is forced server-side; a client sending it is simply ignored
    let body: AddProductRequest = serde_json::from_value(json!({
        "name": "Golden Beets",
        "description": "Sweet and earthy",
        "price": 2.99,
        "category": "Vegetables",
        "images": ["https://img.verdant.market/beets.jpg"],
        "stock": 40,
        "unit": "lb",
        "origin": "Harvest Town",
        "organic": false,
        "isNew": false
    }))
    .expect("deserialize");

    assert_eq!(body.name, "Golden Beets");
    assert!(body.nutrition.is_none());
}

#[test]
fn test_add_product_request_optional_nutrition() {
    let body: AddProductRequest = serde_json::from_value(json!({
        "name": "Kale",
        "description": "Curly",
        "price": 1.99,
        "category": "Vegetables",
        "images": [],
        "stock": 5,
        "unit": "bunch",
        "nutrition": { "calories": 35.0, "protein": 2.9, "carbs": 4.4, "fat": 1.5 },
        "origin": "Metro City",
        "organic": true
    }))
    .expect("deserialize");

    let nutrition = body.nutrition.expect("nutrition present");
    assert!((nutrition.calories - 35.0).abs() < f64::EPSILON);
}

#[test]
fn test_category_is_free_form_string() {
    // Categories are plain strings; nothing validates them against a
    // fixed set, so an unknown label is accepted and echoed back as-is.
    let body: AddProductRequest = serde_json::from_value(json!({
        "name": "Dragon Fruit",
        "description": "Exotic",
        "price": 6.50,
        "category": "Imported / Specialty!",
        "images": [],
        "stock": 3,
        "unit": "each",
        "origin": "Far Shores",
        "organic": false
    }))
    .expect("deserialize");
    assert_eq!(body.category, "Imported / Specialty!");

    let mut product = sample_product(1);
    product.category = "Imported / Specialty!".to_string();
    let json = serde_json::to_value(&product).expect("serialize");
    assert_eq!(json["category"], "Imported / Specialty!");
}

#[test]
fn test_add_to_cart_request_camel_case() {
    let body: AddToCartRequest = serde_json::from_value(json!({
        "productId": 3,
        "quantity": 2
    }))
    .expect("deserialize");
    assert_eq!(body.product_id, ProductId::new(3));
    assert_eq!(body.quantity, 2);
}
