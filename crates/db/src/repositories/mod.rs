//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod dealership_repo;
pub mod salesperson_profile_repo;
pub mod user_repo;

pub use dealership_repo::DealershipRepo;
pub use salesperson_profile_repo::SalespersonProfileRepo;
pub use user_repo::UserRepo;
