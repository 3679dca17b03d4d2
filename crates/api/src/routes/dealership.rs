//! Route definitions for the `/dealership` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::dealership;
use crate::state::AppState;

/// Routes mounted at `/dealership`.
///
/// ```text
/// POST /create  -> create (dealership role)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/create", post(dealership::create))
}
