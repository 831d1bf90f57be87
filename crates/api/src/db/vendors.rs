//! Vendor repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use verdant_core::{UserId, VendorId};

use super::RepositoryError;
use crate::models::Vendor;

/// Internal row type for vendor queries.
#[derive(Debug, sqlx::FromRow)]
struct VendorRow {
    id: i32,
    name: String,
    description: String,
    logo: String,
    address: String,
    user_id: i32,
    rating: f64,
    is_verified: bool,
    created_at: DateTime<Utc>,
}

impl From<VendorRow> for Vendor {
    fn from(row: VendorRow) -> Self {
        Self {
            id: VendorId::new(row.id),
            name: row.name,
            description: row.description,
            logo: row.logo,
            address: row.address,
            user_id: UserId::new(row.user_id),
            rating: row.rating,
            is_verified: row.is_verified,
            created_at: row.created_at,
        }
    }
}

/// Parameters for registering a vendor profile.
#[derive(Debug)]
pub struct CreateVendor<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub logo: &'a str,
    pub address: &'a str,
    pub user_id: UserId,
    pub rating: f64,
    pub is_verified: bool,
}

/// Repository for vendor database operations.
pub struct VendorRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> VendorRepository<'a> {
    /// Create a new vendor repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every vendor, unfiltered and unpaginated.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Vendor>, RepositoryError> {
        let rows = sqlx::query_as::<_, VendorRow>(
            r"
            SELECT id, name, description, logo, address, user_id, rating,
                   is_verified, created_at
            FROM market.vendor
            ORDER BY id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Get the vendor profile owned by a user, if any.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_user(&self, user_id: UserId) -> Result<Option<Vendor>, RepositoryError> {
        let row = sqlx::query_as::<_, VendorRow>(
            r"
            SELECT id, name, description, logo, address, user_id, rating,
                   is_verified, created_at
            FROM market.vendor
            WHERE user_id = $1
            ",
        )
        .bind(user_id.as_i32())
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Into::into))
    }

    /// Insert a new vendor profile.
    ///
    /// The unique index on `user_id` is the "one vendor per user" check:
    /// there is no read before the write, so concurrent registrations by the
    /// same identity cannot both succeed.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the user already owns a vendor.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, params: CreateVendor<'_>) -> Result<Vendor, RepositoryError> {
        let row = sqlx::query_as::<_, VendorRow>(
            r"
            INSERT INTO market.vendor
                (name, description, logo, address, user_id, rating, is_verified)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name, description, logo, address, user_id, rating,
                      is_verified, created_at
            ",
        )
        .bind(params.name)
        .bind(params.description)
        .bind(params.logo)
        .bind(params.address)
        .bind(params.user_id.as_i32())
        .bind(params.rating)
        .bind(params.is_verified)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("user is already a vendor".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        Ok(row.into())
    }
}
