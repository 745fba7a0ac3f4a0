//! Handlers for "pledge to help" submissions.
//!
//! Pledges are validated with [`relief_core::pledge`] and appended to the
//! in-memory log held in [`AppState`]. Nothing is persisted.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use relief_core::pledge::PledgeDraft;

use crate::error::AppResult;
use crate::middleware::session::NgoSession;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// POST /pledges
// ---------------------------------------------------------------------------

/// Record a pledge.
///
/// The body is read as loose JSON. Missing, unparseable, or non-string
/// fields all fail validation with the form message; an unreadable body is
/// treated as an empty draft.
pub async fn submit_pledge(
    session: NgoSession,
    State(state): State<AppState>,
    body: Result<Json<serde_json::Value>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let body = match body {
        Ok(Json(value)) => value,
        Err(rejection) => {
            tracing::debug!(error = %rejection.body_text(), "Unreadable pledge body");
            serde_json::Value::Null
        }
    };
    let draft = PledgeDraft::from_json(&body);

    let pledge = state
        .pledges
        .write()
        .await
        .record(&draft, &state.villages, chrono::Utc::now())?;

    tracing::info!(
        village_id = %pledge.village_id,
        intent = %pledge.intent,
        email = %session.email,
        "Pledge recorded",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: pledge })))
}

// ---------------------------------------------------------------------------
// GET /pledges
// ---------------------------------------------------------------------------

/// All pledges in submission order, each with its village name.
pub async fn list_pledges(
    _session: NgoSession,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let views = state.pledges.read().await.views(&state.villages);
    Ok(Json(DataResponse { data: views }))
}
