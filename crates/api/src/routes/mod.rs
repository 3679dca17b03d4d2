pub mod auth;
pub mod dealership;
pub mod health;
pub mod salesperson;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register            register (public)
/// /auth/login               login (public)
/// /auth/me                  token identity echo (requires auth)
///
/// /dealership/create        create dealership (dealership role)
///
/// /salesperson/profile      upsert (POST) / fetch (GET) (salesperson role)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/dealership", dealership::router())
        .nest("/salesperson", salesperson::router())
}
