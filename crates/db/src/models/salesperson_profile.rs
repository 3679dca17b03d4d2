//! Salesperson profile entity model and DTOs.

use lotlink_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full profile row from the `salesperson_profiles` table.
///
/// 1:1 with a salesperson user via `uq_salesperson_profiles_user_id`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SalespersonProfile {
    pub id: DbId,
    pub user_id: DbId,
    pub full_name: String,
    pub province: String,
    pub issuing_authority: Option<String>,
    pub license_number: Option<String>,
    /// Free-form date string (e.g. `"2026-12-31"`).
    pub license_expiry: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for upserting a salesperson profile.
///
/// Writes are full-replace: every field here overwrites the stored value,
/// so an omitted optional field clears the column.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertSalespersonProfile {
    pub full_name: String,
    pub province: String,
    pub issuing_authority: Option<String>,
    pub license_number: Option<String>,
    pub license_expiry: Option<String>,
}
