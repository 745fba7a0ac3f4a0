//! Session extractor gating the dashboard endpoints.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use relief_core::error::CoreError;

use crate::auth::session::validate_session;
use crate::error::AppError;
use crate::state::AppState;

/// An NGO session extracted from the `Authorization: Bearer <token>` header.
///
/// Add it as a handler parameter to make the endpoint session-only:
///
/// ```ignore
/// async fn my_handler(session: NgoSession) -> AppResult<Json<()>> {
///     tracing::info!(email = %session.email, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct NgoSession {
    /// Email the session was opened with.
    pub email: String,
}

impl FromRequestParts<AppState> for NgoSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_session(token, &state.config.session).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired session".into()))
        })?;

        Ok(NgoSession { email: claims.sub })
    }
}
