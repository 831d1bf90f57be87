//! Product repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use sqlx::types::Json;

use verdant_core::{ProductId, UserId, VendorId};

use super::RepositoryError;
use crate::models::{Nutrition, Product, ProductWithVendor, Vendor};

/// Internal row type for product queries.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: i32,
    name: String,
    description: String,
    price: f64,
    category: String,
    images: Vec<String>,
    stock: i32,
    is_new: bool,
    vendor_id: i32,
    unit: String,
    nutrition: Option<Json<Nutrition>>,
    origin: String,
    organic: bool,
    created_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: ProductId::new(row.id),
            name: row.name,
            description: row.description,
            price: row.price,
            category: row.category,
            images: row.images,
            stock: row.stock,
            is_new: row.is_new,
            vendor_id: VendorId::new(row.vendor_id),
            unit: row.unit,
            nutrition: row.nutrition.map(|j| j.0),
            origin: row.origin,
            organic: row.organic,
            created_at: row.created_at,
        }
    }
}

/// Internal row type for the catalog listing, a product left-joined with
/// its vendor. The vendor columns are null when the reference dangles.
#[derive(Debug, sqlx::FromRow)]
struct ProductWithVendorRow {
    id: i32,
    name: String,
    description: String,
    price: f64,
    category: String,
    images: Vec<String>,
    stock: i32,
    is_new: bool,
    vendor_id: i32,
    unit: String,
    nutrition: Option<Json<Nutrition>>,
    origin: String,
    organic: bool,
    created_at: DateTime<Utc>,
    v_id: Option<i32>,
    v_name: Option<String>,
    v_description: Option<String>,
    v_logo: Option<String>,
    v_address: Option<String>,
    v_user_id: Option<i32>,
    v_rating: Option<f64>,
    v_is_verified: Option<bool>,
    v_created_at: Option<DateTime<Utc>>,
}

impl From<ProductWithVendorRow> for ProductWithVendor {
    fn from(row: ProductWithVendorRow) -> Self {
        let vendor = match (
            row.v_id,
            row.v_name,
            row.v_description,
            row.v_logo,
            row.v_address,
            row.v_user_id,
            row.v_rating,
            row.v_is_verified,
            row.v_created_at,
        ) {
            (
                Some(id),
                Some(name),
                Some(description),
                Some(logo),
                Some(address),
                Some(user_id),
                Some(rating),
                Some(is_verified),
                Some(created_at),
            ) => Some(Vendor {
                id: VendorId::new(id),
                name,
                description,
                logo,
                address,
                user_id: UserId::new(user_id),
                rating,
                is_verified,
                created_at,
            }),
            _ => None,
        };

        let product = Product {
            id: ProductId::new(row.id),
            name: row.name,
            description: row.description,
            price: row.price,
            category: row.category,
            images: row.images,
            stock: row.stock,
            is_new: row.is_new,
            vendor_id: VendorId::new(row.vendor_id),
            unit: row.unit,
            nutrition: row.nutrition.map(|j| j.0),
            origin: row.origin,
            organic: row.organic,
            created_at: row.created_at,
        };

        Self { product, vendor }
    }
}

/// Parameters for listing a product.
#[derive(Debug)]
pub struct CreateProduct<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub price: f64,
    pub category: &'a str,
    pub images: &'a [String],
    pub stock: i32,
    pub vendor_id: VendorId,
    pub unit: &'a str,
    pub nutrition: Option<Nutrition>,
    pub origin: &'a str,
    pub organic: bool,
}

/// Repository for product database operations.
pub struct ProductRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ProductRepository<'a> {
    /// Create a new product repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every product joined with its resolved vendor.
    ///
    /// Unbounded and unpaginated; no server-side category filtering.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_with_vendors(&self) -> Result<Vec<ProductWithVendor>, RepositoryError> {
        let rows = sqlx::query_as::<_, ProductWithVendorRow>(
            r"
            SELECT p.id, p.name, p.description, p.price, p.category, p.images,
                   p.stock, p.is_new, p.vendor_id, p.unit, p.nutrition,
                   p.origin, p.organic, p.created_at,
                   v.id AS v_id, v.name AS v_name, v.description AS v_description,
                   v.logo AS v_logo, v.address AS v_address, v.user_id AS v_user_id,
                   v.rating AS v_rating, v.is_verified AS v_is_verified,
                   v.created_at AS v_created_at
            FROM market.product p
            LEFT JOIN market.vendor v ON v.id = p.vendor_id
            ORDER BY p.id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Get a product by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: ProductId) -> Result<Option<Product>, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r"
            SELECT id, name, description, price, category, images, stock,
                   is_new, vendor_id, unit, nutrition, origin, organic, created_at
            FROM market.product
            WHERE id = $1
            ",
        )
        .bind(id.as_i32())
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    /// Insert a new product. `is_new` is always stored true at creation;
    /// callers do not get a say.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, params: CreateProduct<'_>) -> Result<Product, RepositoryError> {
        let row = sqlx::query_as::<_, ProductRow>(
            r"
            INSERT INTO market.product
                (name, description, price, category, images, stock, is_new,
                 vendor_id, unit, nutrition, origin, organic)
            VALUES ($1, $2, $3, $4, $5, $6, true, $7, $8, $9, $10, $11)
            RETURNING id, name, description, price, category, images, stock,
                      is_new, vendor_id, unit, nutrition, origin, organic, created_at
            ",
        )
        .bind(params.name)
        .bind(params.description)
        .bind(params.price)
        .bind(params.category)
        .bind(params.images)
        .bind(params.stock)
        .bind(params.vendor_id.as_i32())
        .bind(params.unit)
        .bind(params.nutrition.map(Json))
        .bind(params.origin)
        .bind(params.organic)
        .fetch_one(self.pool)
        .await?;

        Ok(row.into())
    }
}
