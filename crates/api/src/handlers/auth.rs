//! Handlers for the `/auth` resource (register, login, me).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use lotlink_core::email::normalize_email;
use lotlink_core::error::CoreError;
use lotlink_core::roles;
use lotlink_core::types::DbId;
use lotlink_db::models::user::CreateUser;
use lotlink_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/register`.
///
/// Fields are `Option` so missing keys reach the handler and map to the
/// contract's 400, rather than a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
}

/// Plain confirmation response.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
}

/// Response for `GET /auth/me`.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub id: DbId,
    pub role: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/register
///
/// Create an account with a fixed role. Never issues a token.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<(StatusCode, Json<MessageResponse>)> {
    let (email, password, role) = require_credentials(input.email, input.password, input.role)?;

    if !roles::is_valid_role(&role) {
        return Err(AppError::Core(CoreError::Validation("Invalid role".into())));
    }

    let email = normalize_email(&email);

    // Fast-path duplicate check; the uq_users_email constraint below is
    // the authoritative one under concurrent registration.
    if UserRepo::find_by_email(&state.pool, &email).await?.is_some() {
        return Err(AppError::Core(CoreError::Conflict(
            "Email already registered".into(),
        )));
    }

    let password_hash = hash_password(&password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let create = CreateUser {
        email,
        role,
        password_hash,
    };

    let user = match UserRepo::create(&state.pool, &create).await {
        Ok(user) => user,
        Err(e) if lotlink_db::is_unique_violation(&e, "uq_users_email") => {
            return Err(AppError::Core(CoreError::Conflict(
                "Email already registered".into(),
            )));
        }
        Err(e) => return Err(e.into()),
    };

    tracing::info!(user_id = user.id, role = %user.role, "Registered new user");

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "User created",
        }),
    ))
}

/// POST /api/auth/login
///
/// Authenticate with email + password + declared role. The declared role
/// must match the stored one: a valid password with the wrong account
/// type is rejected with 403, as a defense against role confusion on the
/// client.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let (email, password, role) = require_credentials(input.email, input.password, input.role)?;

    if !roles::is_valid_role(&role) {
        return Err(AppError::Core(CoreError::Validation("Invalid role".into())));
    }

    let email = normalize_email(&email);

    // Absent user and bad password are indistinguishable to the caller.
    let user = UserRepo::find_by_email(&state.pool, &email)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Invalid credentials".into())))?;

    let password_valid = verify_password(&password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid credentials".into(),
        )));
    }

    if user.role != role {
        return Err(AppError::Core(CoreError::Forbidden(
            "Incorrect account type".into(),
        )));
    }

    let access_token = generate_access_token(user.id, &user.role, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = user.id, role = %user.role, "User logged in");

    Ok(Json(LoginResponse { access_token }))
}

/// GET /api/auth/me
///
/// Echo the verified token's identity and role claims. No database round
/// trip.
pub async fn me(user: AuthUser) -> Json<MeResponse> {
    Json(MeResponse {
        id: user.user_id,
        role: user.role,
    })
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Unwrap the three credential fields, rejecting missing or blank values
/// with the contract's single validation message.
fn require_credentials(
    email: Option<String>,
    password: Option<String>,
    role: Option<String>,
) -> Result<(String, String, String), AppError> {
    match (email, password, role) {
        (Some(email), Some(password), Some(role))
            if !email.trim().is_empty() && !password.is_empty() && !role.trim().is_empty() =>
        {
            Ok((email, password, role))
        }
        _ => Err(AppError::Core(CoreError::Validation(
            "Email, password, and role are required".into(),
        ))),
    }
}
