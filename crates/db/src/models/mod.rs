//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Deserialize` create/upsert DTO for writes

pub mod dealership;
pub mod salesperson_profile;
pub mod user;
