use std::sync::Arc;

use lotlink_core::billing::BillingProvider;
use lotlink_core::licensing::LicenseVerifier;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already
/// `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: lotlink_db::DbPool,
    /// Server configuration (CORS allow-list, JWT secret, timeouts).
    pub config: Arc<ServerConfig>,
    /// Payment-processor capability (stubbed).
    pub billing: Arc<dyn BillingProvider>,
    /// Provincial license-registry capability (stubbed).
    pub license_verifier: Arc<dyn LicenseVerifier>,
}
