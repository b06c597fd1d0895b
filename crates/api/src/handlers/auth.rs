//! Login handler for the static administrator identity.

use axum::extract::State;
use axum::Json;
use pressroom_core::error::CoreError;
use pressroom_core::roles::ROLE_ADMIN;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_access_token;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub role: &'static str,
}

/// POST /auth/login
///
/// Succeeds only when the submitted email and password exactly match the
/// configured administrator credentials. No user registry, no refresh
/// flow; the issued token expires on its own.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let email = input.email.as_deref().unwrap_or("");
    let password = input.password.as_deref().unwrap_or("");

    if email.is_empty() || password.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Email and password required".into(),
        )));
    }

    let admin = &state.config.admin;
    if email != admin.email || password != admin.password {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid credentials".into(),
        )));
    }

    let token = generate_access_token(email, ROLE_ADMIN, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(email, "Administrator login");

    Ok(Json(LoginResponse {
        token,
        role: ROLE_ADMIN,
    }))
}
