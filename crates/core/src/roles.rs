//! Well-known role name constants.
//!
//! A user's role is fixed at registration, re-asserted at login, and gates
//! endpoint access. These must match the `ck_users_role` check constraint
//! in the users migration.

pub const ROLE_DEALERSHIP: &str = "dealership";
pub const ROLE_SALESPERSON: &str = "salesperson";

/// Whether `role` is one of the known account roles.
pub fn is_valid_role(role: &str) -> bool {
    role == ROLE_DEALERSHIP || role == ROLE_SALESPERSON
}
