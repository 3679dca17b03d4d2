//! Route definitions for the `/salesperson` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::salesperson;
use crate::state::AppState;

/// Routes mounted at `/salesperson`.
///
/// ```text
/// POST /profile  -> upsert_profile (salesperson role)
/// GET  /profile  -> get_profile (salesperson role)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/profile",
        post(salesperson::upsert_profile).get(salesperson::get_profile),
    )
}
