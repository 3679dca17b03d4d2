//! Repository for the `salesperson_profiles` table.

use lotlink_core::types::DbId;
use sqlx::PgPool;

use crate::models::salesperson_profile::{SalespersonProfile, UpsertSalespersonProfile};

/// Column list for `salesperson_profiles` queries.
const COLUMNS: &str = "\
    id, user_id, full_name, province, issuing_authority, license_number, \
    license_expiry, created_at, updated_at";

/// Provides data access for salesperson profiles.
pub struct SalespersonProfileRepo;

impl SalespersonProfileRepo {
    /// Get the profile for a specific user.
    ///
    /// Returns `None` if the user has never saved a profile.
    pub async fn find_by_user_id(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<SalespersonProfile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM salesperson_profiles WHERE user_id = $1");
        sqlx::query_as::<_, SalespersonProfile>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Insert or update a user's profile in one atomic statement.
    ///
    /// Full-replace semantics: `ON CONFLICT (user_id) DO UPDATE` overwrites
    /// every mutable column with the incoming value, so omitted optional
    /// fields clear the stored ones. Calling twice with the same input
    /// leaves exactly one row with those values.
    pub async fn upsert(
        pool: &PgPool,
        user_id: DbId,
        dto: &UpsertSalespersonProfile,
    ) -> Result<SalespersonProfile, sqlx::Error> {
        let query = format!(
            "INSERT INTO salesperson_profiles \
                 (user_id, full_name, province, issuing_authority, \
                  license_number, license_expiry) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             ON CONFLICT (user_id) DO UPDATE SET \
                 full_name = $2, \
                 province = $3, \
                 issuing_authority = $4, \
                 license_number = $5, \
                 license_expiry = $6, \
                 updated_at = NOW() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SalespersonProfile>(&query)
            .bind(user_id)
            .bind(&dto.full_name)
            .bind(&dto.province)
            .bind(&dto.issuing_authority)
            .bind(&dto.license_number)
            .bind(&dto.license_expiry)
            .fetch_one(pool)
            .await
    }

    /// Count profile rows for a user. Used to assert the 1:1 invariant in
    /// tests.
    pub async fn count_for_user(pool: &PgPool, user_id: DbId) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM salesperson_profiles WHERE user_id = $1")
                .bind(user_id)
                .fetch_one(pool)
                .await?;
        Ok(count)
    }
}
