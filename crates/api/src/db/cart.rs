//! Cart repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::types::Json;

use verdant_core::{CartItemId, ProductId, UserId, VendorId};

use super::RepositoryError;
use crate::models::{CartItem, CartItemWithProduct, Nutrition, Product};

/// Internal row type for a cart item left-joined with its product.
/// The product columns are null when the reference dangles.
#[derive(Debug, sqlx::FromRow)]
struct CartItemWithProductRow {
    id: i32,
    user_id: i32,
    product_id: i32,
    quantity: i32,
    p_id: Option<i32>,
    p_name: Option<String>,
    p_description: Option<String>,
    p_price: Option<f64>,
    p_category: Option<String>,
    p_images: Option<Vec<String>>,
    p_stock: Option<i32>,
    p_is_new: Option<bool>,
    p_vendor_id: Option<i32>,
    p_unit: Option<String>,
    p_nutrition: Option<Json<Nutrition>>,
    p_origin: Option<String>,
    p_organic: Option<bool>,
    p_created_at: Option<DateTime<Utc>>,
}

impl From<CartItemWithProductRow> for CartItemWithProduct {
    fn from(row: CartItemWithProductRow) -> Self {
        let product = match (
            row.p_id,
            row.p_name,
            row.p_description,
            row.p_price,
            row.p_category,
            row.p_images,
            row.p_stock,
            row.p_is_new,
            row.p_vendor_id,
            row.p_unit,
            row.p_origin,
            row.p_organic,
            row.p_created_at,
        ) {
            (
                Some(id),
                Some(name),
                Some(description),
                Some(price),
                Some(category),
                Some(images),
                Some(stock),
                Some(is_new),
                Some(vendor_id),
                Some(unit),
                Some(origin),
                Some(organic),
                Some(created_at),
            ) => Some(Product {
                id: ProductId::new(id),
                name,
                description,
                price,
                category,
                images,
                stock,
                is_new,
                vendor_id: VendorId::new(vendor_id),
                unit,
                nutrition: row.p_nutrition.map(|j| j.0),
                origin,
                organic,
                created_at,
            }),
            _ => None,
        };

        let item = CartItem {
            id: CartItemId::new(row.id),
            user_id: UserId::new(row.user_id),
            product_id: ProductId::new(row.product_id),
            quantity: row.quantity,
        };

        Self { item, product }
    }
}

/// Repository for cart database operations.
pub struct CartRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CartRepository<'a> {
    /// Create a new cart repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a cart line item. Always a fresh row; duplicate adds for the
    /// same product accumulate rows rather than incrementing quantity.
    ///
    /// The product reference is not checked against the catalog.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn add(
        &self,
        user_id: UserId,
        product_id: ProductId,
        quantity: i32,
    ) -> Result<CartItemId, RepositoryError> {
        let (id,): (i32,) = sqlx::query_as(
            r"
            INSERT INTO market.cart_item (user_id, product_id, quantity)
            VALUES ($1, $2, $3)
            RETURNING id
            ",
        )
        .bind(user_id.as_i32())
        .bind(product_id.as_i32())
        .bind(quantity)
        .fetch_one(self.pool)
        .await?;

        Ok(CartItemId::new(id))
    }

    /// List a user's cart, each row joined with its resolved product.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_with_products(
        &self,
        user_id: UserId,
    ) -> Result<Vec<CartItemWithProduct>, RepositoryError> {
        let rows = sqlx::query_as::<_, CartItemWithProductRow>(
            r"
            SELECT c.id, c.user_id, c.product_id, c.quantity,
                   p.id AS p_id, p.name AS p_name, p.description AS p_description,
                   p.price AS p_price, p.category AS p_category, p.images AS p_images,
                   p.stock AS p_stock, p.is_new AS p_is_new,
                   p.vendor_id AS p_vendor_id, p.unit AS p_unit,
                   p.nutrition AS p_nutrition, p.origin AS p_origin,
                   p.organic AS p_organic, p.created_at AS p_created_at
            FROM market.cart_item c
            LEFT JOIN market.product p ON p.id = c.product_id
            WHERE c.user_id = $1
            ORDER BY c.id
            ",
        )
        .bind(user_id.as_i32())
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
