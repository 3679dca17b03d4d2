//! Dealership entity model and DTOs.

use chrono::NaiveDate;
use lotlink_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full dealership row from the `dealerships` table.
///
/// The licensing/tax columns beyond `dealer_license_number` are carried in
/// the schema for onboarding flows that collect them later; the create
/// route only writes the basic-info subset.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Dealership {
    pub id: DbId,
    pub owner_user_id: DbId,

    pub legal_name: String,
    pub operating_name: Option<String>,
    pub corporation_number: Option<String>,
    /// Franchise | Independent | Wholesale | Buy Here Pay Here.
    pub business_type: Option<String>,

    pub primary_contact_name: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub logo_url: Option<String>,

    pub province: String,
    pub dealer_license_number: String,
    pub issuing_authority: Option<String>,
    pub license_expiry_date: Option<NaiveDate>,

    pub gst_hst_number: Option<String>,
    pub cra_business_number: Option<String>,
    pub license_proof_url: Option<String>,

    pub created_at: Timestamp,
}

/// DTO for creating a dealership. Required fields are validated by the
/// handler before this is constructed.
#[derive(Debug, Deserialize)]
pub struct CreateDealership {
    pub owner_user_id: DbId,
    pub legal_name: String,
    pub province: String,
    pub dealer_license_number: String,
    pub operating_name: Option<String>,
    pub business_type: Option<String>,
    pub primary_contact_name: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub logo_url: Option<String>,
}
