//! Role-gating extractors.
//!
//! Each extractor wraps [`AuthUser`] and rejects requests whose role claim
//! does not match the operation's required role. Use these in handlers to
//! enforce authorization at the type level; a mismatched role never
//! reaches the repository.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use lotlink_core::error::CoreError;
use lotlink_core::roles::{ROLE_DEALERSHIP, ROLE_SALESPERSON};

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `dealership` role. Rejects with 403 Forbidden otherwise.
///
/// ```ignore
/// async fn dealership_only(RequireDealership(user): RequireDealership) -> AppResult<Json<()>> {
///     // user is guaranteed to hold a dealership account here
///     Ok(Json(()))
/// }
/// ```
pub struct RequireDealership(pub AuthUser);

impl FromRequestParts<AppState> for RequireDealership {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_DEALERSHIP {
            return Err(AppError::Core(CoreError::Forbidden(
                "Dealership role required".into(),
            )));
        }
        Ok(RequireDealership(user))
    }
}

/// Requires the `salesperson` role. Rejects with 403 Forbidden otherwise.
pub struct RequireSalesperson(pub AuthUser);

impl FromRequestParts<AppState> for RequireSalesperson {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_SALESPERSON {
            return Err(AppError::Core(CoreError::Forbidden(
                "Salesperson role required".into(),
            )));
        }
        Ok(RequireSalesperson(user))
    }
}
