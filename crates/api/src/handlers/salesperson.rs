//! Handlers for the `/salesperson` resource (profile upsert and fetch).

use axum::extract::State;
use axum::Json;
use lotlink_core::error::CoreError;
use lotlink_db::models::salesperson_profile::{SalespersonProfile, UpsertSalespersonProfile};
use lotlink_db::repositories::SalespersonProfileRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::handlers::auth::MessageResponse;
use crate::middleware::rbac::RequireSalesperson;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /salesperson/profile`.
#[derive(Debug, Deserialize)]
pub struct UpsertProfileRequest {
    pub full_name: Option<String>,
    pub province: Option<String>,
    pub issuing_authority: Option<String>,
    pub license_number: Option<String>,
    pub license_expiry: Option<String>,
}

/// Public shape of a saved profile.
#[derive(Debug, Serialize)]
pub struct ProfileBody {
    pub full_name: String,
    pub province: String,
    pub issuing_authority: Option<String>,
    pub license_number: Option<String>,
    pub license_expiry: Option<String>,
}

impl From<SalespersonProfile> for ProfileBody {
    fn from(profile: SalespersonProfile) -> Self {
        ProfileBody {
            full_name: profile.full_name,
            province: profile.province,
            issuing_authority: profile.issuing_authority,
            license_number: profile.license_number,
            license_expiry: profile.license_expiry,
        }
    }
}

/// Response for `GET /salesperson/profile`.
///
/// An absent profile is a success with a null payload, not a 404.
#[derive(Debug, Serialize)]
pub struct GetProfileResponse {
    pub profile: Option<ProfileBody>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/salesperson/profile
///
/// Create or overwrite the caller's profile. Full-replace semantics:
/// every mutable field takes the request value, so omitted optional
/// fields are cleared.
pub async fn upsert_profile(
    State(state): State<AppState>,
    RequireSalesperson(user): RequireSalesperson,
    Json(input): Json<UpsertProfileRequest>,
) -> AppResult<Json<MessageResponse>> {
    let (full_name, province) = match (input.full_name, input.province) {
        (Some(full_name), Some(province))
            if !full_name.trim().is_empty() && !province.trim().is_empty() =>
        {
            (full_name, province)
        }
        _ => {
            return Err(AppError::Core(CoreError::Validation(
                "full_name and province are required".into(),
            )));
        }
    };

    let dto = UpsertSalespersonProfile {
        full_name,
        province,
        issuing_authority: input.issuing_authority,
        license_number: input.license_number,
        license_expiry: input.license_expiry,
    };

    let profile = SalespersonProfileRepo::upsert(&state.pool, user.user_id, &dto).await?;

    tracing::info!(user_id = user.user_id, profile_id = profile.id, "Profile saved");

    Ok(Json(MessageResponse {
        message: "Profile saved",
    }))
}

/// GET /api/salesperson/profile
///
/// Fetch the caller's profile, or `{ "profile": null }` if none was ever
/// saved.
pub async fn get_profile(
    State(state): State<AppState>,
    RequireSalesperson(user): RequireSalesperson,
) -> AppResult<Json<GetProfileResponse>> {
    let profile = SalespersonProfileRepo::find_by_user_id(&state.pool, user.user_id).await?;

    Ok(Json(GetProfileResponse {
        profile: profile.map(ProfileBody::from),
    }))
}
