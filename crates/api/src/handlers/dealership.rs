//! Handlers for the `/dealership` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use lotlink_core::error::CoreError;
use lotlink_core::types::DbId;
use lotlink_db::models::dealership::CreateDealership;
use lotlink_db::repositories::DealershipRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireDealership;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /dealership/create`.
///
/// The first three fields are mandatory; `Option` here lets the handler
/// produce the contract's 400 instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct CreateDealershipRequest {
    pub legal_name: Option<String>,
    pub province: Option<String>,
    pub dealer_license_number: Option<String>,
    pub operating_name: Option<String>,
    pub business_type: Option<String>,
    pub primary_contact_name: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub logo_url: Option<String>,
}

/// Successful creation response.
#[derive(Debug, Serialize)]
pub struct CreateDealershipResponse {
    pub message: &'static str,
    pub dealership_id: DbId,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/dealership/create
///
/// Create a dealership owned by the authenticated dealership user.
/// Several dealerships per owner are allowed.
pub async fn create(
    State(state): State<AppState>,
    RequireDealership(user): RequireDealership,
    Json(input): Json<CreateDealershipRequest>,
) -> AppResult<(StatusCode, Json<CreateDealershipResponse>)> {
    let (legal_name, province, dealer_license_number) = match (
        input.legal_name,
        input.province,
        input.dealer_license_number,
    ) {
        (Some(legal_name), Some(province), Some(license))
            if !legal_name.trim().is_empty()
                && !province.trim().is_empty()
                && !license.trim().is_empty() =>
        {
            (legal_name, province, license)
        }
        _ => {
            return Err(AppError::Core(CoreError::Validation(
                "legal_name, province, and dealer_license_number are required".into(),
            )));
        }
    };

    // Consult the registry stub; the outcome is recorded, not gating.
    let verification = state
        .license_verifier
        .verify_dealer_license(&province, &dealer_license_number)
        .await;
    tracing::info!(
        owner_user_id = user.user_id,
        status = %verification.status,
        reason = %verification.reason,
        "Dealer license verification result"
    );

    let create = CreateDealership {
        owner_user_id: user.user_id,
        legal_name,
        province,
        dealer_license_number,
        operating_name: input.operating_name,
        business_type: input.business_type,
        primary_contact_name: input.primary_contact_name,
        phone: input.phone,
        website: input.website,
        logo_url: input.logo_url,
    };

    let dealership = DealershipRepo::create(&state.pool, &create).await?;

    tracing::info!(
        dealership_id = dealership.id,
        owner_user_id = user.user_id,
        "Dealership created"
    );

    Ok((
        StatusCode::CREATED,
        Json(CreateDealershipResponse {
            message: "Dealership created",
            dealership_id: dealership.id,
        }),
    ))
}
