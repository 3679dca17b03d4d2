//! User entity model and DTOs.

use lotlink_core::types::{DbId, Timestamp};
use serde::Deserialize;
use sqlx::FromRow;

/// Full user row from the `users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses
/// directly.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub email: String,
    /// `"dealership"` or `"salesperson"`; immutable after creation.
    pub role: String,
    pub password_hash: String,
    /// Subscription gate; set true when a subscription becomes active.
    /// Not consulted by any current request flow.
    pub is_active: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a new user. The email must already be normalized and
/// the password already hashed.
#[derive(Debug, Deserialize)]
pub struct CreateUser {
    pub email: String,
    pub role: String,
    pub password_hash: String,
}
