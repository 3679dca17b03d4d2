//! Repository for the `dealerships` table.

use lotlink_core::types::DbId;
use sqlx::PgPool;

use crate::models::dealership::{CreateDealership, Dealership};

/// Column list for `dealerships` queries.
const COLUMNS: &str = "\
    id, owner_user_id, legal_name, operating_name, corporation_number, \
    business_type, primary_contact_name, phone, website, logo_url, \
    province, dealer_license_number, issuing_authority, license_expiry_date, \
    gst_hst_number, cra_business_number, license_proof_url, created_at";

/// Provides data access for dealerships.
pub struct DealershipRepo;

impl DealershipRepo {
    /// Insert a new dealership, returning the created row.
    ///
    /// No existence check against prior dealerships for the same owner;
    /// the schema permits several per owner.
    pub async fn create(
        pool: &PgPool,
        input: &CreateDealership,
    ) -> Result<Dealership, sqlx::Error> {
        let query = format!(
            "INSERT INTO dealerships
                 (owner_user_id, legal_name, province, dealer_license_number,
                  operating_name, business_type, primary_contact_name,
                  phone, website, logo_url)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Dealership>(&query)
            .bind(input.owner_user_id)
            .bind(&input.legal_name)
            .bind(&input.province)
            .bind(&input.dealer_license_number)
            .bind(&input.operating_name)
            .bind(&input.business_type)
            .bind(&input.primary_contact_name)
            .bind(&input.phone)
            .bind(&input.website)
            .bind(&input.logo_url)
            .fetch_one(pool)
            .await
    }

    /// Find a dealership by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Dealership>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM dealerships WHERE id = $1");
        sqlx::query_as::<_, Dealership>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all dealerships owned by a user, most recent first.
    pub async fn list_by_owner(
        pool: &PgPool,
        owner_user_id: DbId,
    ) -> Result<Vec<Dealership>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM dealerships
             WHERE owner_user_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Dealership>(&query)
            .bind(owner_user_id)
            .fetch_all(pool)
            .await
    }
}
