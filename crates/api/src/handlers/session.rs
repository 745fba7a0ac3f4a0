//! Simulated NGO login.
//!
//! Mirrors the portal's login form: any well-formed email with a non-blank
//! password opens a session. Credentials are not checked against anything.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use chrono::DateTime;
use relief_core::error::CoreError;
use relief_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::auth::session::issue_session;
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Login form body. Missing fields deserialize as empty strings so they are
/// reported as validation errors.
#[derive(Debug, Default, Deserialize, Validate)]
#[serde(default)]
pub struct SessionRequest {
    #[validate(email(message = "Please enter a valid email."))]
    pub email: String,
    pub password: String,
}

impl SessionRequest {
    fn check(&self) -> Result<(), CoreError> {
        if self.email.trim().is_empty() || self.password.trim().is_empty() {
            return Err(CoreError::Validation(
                "Please enter email and password.".to_string(),
            ));
        }
        self.validate()
            .map_err(|e| CoreError::Validation(e.to_string()))
    }
}

/// Response body for a newly opened session.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub token: String,
    pub email: String,
    pub expires_at: Timestamp,
}

// ---------------------------------------------------------------------------
// POST /session
// ---------------------------------------------------------------------------

pub async fn open_session(
    State(state): State<AppState>,
    input: Result<Json<SessionRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(input) = input.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    input.check()?;
    let email = input.email.trim().to_string();

    let issued = issue_session(&email, &state.config.session)
        .map_err(|e| AppError::InternalError(format!("Failed to sign session: {e}")))?;

    let expires_at = DateTime::from_timestamp(issued.claims.exp, 0)
        .ok_or_else(|| AppError::InternalError("Session expiry out of range".to_string()))?;

    tracing::info!(email = %email, "NGO session opened");

    Ok(Json(DataResponse {
        data: SessionResponse {
            token: issued.token,
            email,
            expires_at,
        },
    }))
}
